//! Debug domain: hotkey handling.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::{ContactEvent, ContactQueue, SimulationTick};
use crate::debug::DebugState;
use crate::movement::{Player, PlayerController};
use crate::pickups::Score;

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut queue: ResMut<ContactQueue>,
    tick: Res<SimulationTick>,
    score: Res<Score>,
    player_query: Query<(Entity, &PlayerController, &Transform), With<Player>>,
) {
    // F1: physics gizmos
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.physics_gizmos = !debug_state.physics_gizmos;
        info!(
            "[DEBUG] Physics gizmos {}",
            if debug_state.physics_gizmos { "ON" } else { "OFF" }
        );
    }

    // F2: hurt the player
    if keyboard.just_pressed(KeyCode::F2) {
        for (player, _, _) in &player_query {
            queue.push(ContactEvent::Damage { player });
            info!("[DEBUG] Queued damage for player {:?}", player);
        }
    }

    // F3: dump controller state
    if keyboard.just_pressed(KeyCode::F3) {
        for (_, controller, transform) in &player_query {
            let pos = transform.translation;
            info!(
                "[DEBUG] tick={} pos=({:.0}, {:.0}) dash={:?} damage={:?} facing={:?} grace={} after_images={} score={}",
                tick.0,
                pos.x,
                pos.y,
                controller.dash_state(),
                controller.damage_state(),
                controller.facing(),
                controller.jump_grace_ticks_remaining(),
                controller.trail().len(),
                score.total
            );
        }
    }
}

pub(crate) fn sync_physics_gizmos(
    debug_state: Res<DebugState>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    let (config, _) = config_store.config_mut::<PhysicsGizmos>();
    config.enabled = debug_state.physics_gizmos;
}
