//! Level domain: built-in layout and startup spawning.

pub mod layout;
pub mod spawn;


use bevy::prelude::*;

pub use layout::LevelLayout;

use crate::content::TuningLoadSet;
use crate::level::spawn::spawn_level;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelLayout>()
            .add_systems(Startup, spawn_level.after(TuningLoadSet));
    }
}
