//! Movement domain: player locomotion plugin wiring and public exports.

mod bootstrap;
mod components;
mod controller;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use bootstrap::spawn_player;
pub use components::*;
pub use controller::*;
pub use resources::*;

use bevy::prelude::*;

use crate::core::TickSet;
use crate::movement::systems::{
    age_after_images, commit_velocity_intents, detect_ground, read_input, update_player,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                FixedUpdate,
                (read_input, detect_ground).in_set(TickSet::Sample),
            )
            .add_systems(FixedUpdate, update_player.in_set(TickSet::Control))
            .add_systems(FixedUpdate, commit_velocity_intents.in_set(TickSet::Commit))
            .add_systems(FixedUpdate, age_after_images.in_set(TickSet::Trail));
    }
}
