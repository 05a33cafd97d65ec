//! Combat domain: enemy patrols, contact hazards and damage feedback.

pub mod components;
pub mod resources;
pub mod spawn;
mod systems;


use bevy::prelude::*;

pub use components::*;
pub use resources::EnemyTuning;
pub use spawn::spawn_enemy;

use crate::combat::systems::{apply_damage_tint, face_patrol_direction, update_enemy_patrol};
use crate::core::TickSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .add_systems(FixedUpdate, update_enemy_patrol.in_set(TickSet::Control))
            .add_systems(Update, (face_patrol_direction, apply_damage_tint));
    }
}
