//! Pickups domain: collectible stars and the score they feed.

pub mod components;
pub mod events;
pub mod resources;
pub mod spawn;
mod systems;


use bevy::prelude::*;

pub use components::*;
pub use events::ScoreChanged;
pub use resources::Score;
pub use spawn::spawn_star;

use crate::pickups::systems::log_score_changes;

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_message::<ScoreChanged>()
            .add_systems(Update, log_score_changes);
    }
}
