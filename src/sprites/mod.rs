//! Sprites module: clip playback and dash after-images.

pub mod afterimage;
pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use afterimage::*;
pub use animation::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrailTuning>().add_systems(
            Update,
            (update_animation_frames, sync_after_image_sprites),
        );
    }
}
