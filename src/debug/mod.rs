//! Developer tools: physics debug drawing and gameplay hotkeys.
//!
//! Hotkeys:
//! - F1: toggle collider/contact gizmos
//! - F2: hurt the player through the contact queue
//! - F3: log the player's controller state

mod systems;


use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::systems::{handle_debug_hotkeys, sync_physics_gizmos};

// ============================================================================
// Debug State Resource
// ============================================================================

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether avian's physics gizmos are drawn
    pub physics_gizmos: bool,
}

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsDebugPlugin::default())
            .init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    sync_physics_gizmos.run_if(resource_changed::<DebugState>),
                )
                    .chain(),
            );
    }
}
