//! Dash after-images: a fixed-capacity arena of fading sprite echoes.
//!
//! The trail is pure data owned by the player controller. Slots are handed
//! out in spawn order and reused once their image retires. A render entity
//! bound to an image is queued for release when that image retires, and the
//! sprite sync system despawns it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{Player, PlayerController};

/// Number of slots in the arena. A dash spawns one image every other tick,
/// so with the default retire age at most 7 images are alive at once.
pub const TRAIL_CAPACITY: usize = 8;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrailTuning {
    /// An image is retired once its age exceeds this many ticks.
    pub retire_after_ticks: u32,
    pub alpha: f32,
}

impl Default for TrailTuning {
    fn default() -> Self {
        Self {
            retire_after_ticks: 12,
            alpha: 0.5,
        }
    }
}

/// A snapshot of the player taken at spawn time.
#[derive(Debug, Clone, PartialEq)]
pub struct AfterImage {
    pub position: Vec2,
    pub frame: u32,
    pub alpha: f32,
    /// Spawn order, unique for the lifetime of the trail.
    pub sequence: u64,
    age: u32,
    fresh: bool,
    render: Option<Entity>,
}

impl AfterImage {
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn render(&self) -> Option<Entity> {
        self.render
    }
}

#[derive(Debug, Clone)]
pub struct AfterImageTrail {
    slots: [Option<AfterImage>; TRAIL_CAPACITY],
    spawned: u64,
    retire_after: u32,
    alpha: f32,
    released: Vec<Entity>,
}

impl Default for AfterImageTrail {
    fn default() -> Self {
        Self::new(&TrailTuning::default())
    }
}

impl AfterImageTrail {
    pub fn new(tuning: &TrailTuning) -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            spawned: 0,
            retire_after: tuning.retire_after_ticks,
            alpha: tuning.alpha,
            released: Vec::new(),
        }
    }

    /// Spawn an image at age 0. It is not aged by the `tick` of the tick it
    /// was spawned in. If the slot is still occupied the older image is
    /// retired early.
    pub fn spawn(&mut self, position: Vec2, frame: u32) -> u64 {
        let sequence = self.spawned;
        let slot = &mut self.slots[(sequence % TRAIL_CAPACITY as u64) as usize];

        if let Some(evicted) = slot.take() {
            debug!(
                "After-image slot reused while image {} still alive (age {})",
                evicted.sequence, evicted.age
            );
            self.released.extend(evicted.render);
        }

        *slot = Some(AfterImage {
            position,
            frame,
            alpha: self.alpha,
            sequence,
            age: 0,
            fresh: true,
            render: None,
        });
        self.spawned += 1;
        sequence
    }

    /// Age every live image by one tick and retire those past the threshold.
    pub fn tick(&mut self) {
        for slot in &mut self.slots {
            let Some(image) = slot.as_mut() else {
                continue;
            };

            if image.fresh {
                image.fresh = false;
            } else {
                image.age += 1;
            }

            if image.age > self.retire_after {
                if let Some(render) = image.render {
                    self.released.push(render);
                }
                *slot = None;
            }
        }
    }

    /// Bind a render entity to every live image that has none yet.
    pub fn bind_unrendered(&mut self, mut spawn_render: impl FnMut(&AfterImage) -> Entity) {
        for image in self.slots.iter_mut().flatten() {
            if image.render.is_none() {
                image.render = Some(spawn_render(image));
            }
        }
    }

    /// Render entities of retired images, to be despawned by the caller.
    pub fn drain_released(&mut self) -> std::vec::Drain<'_, Entity> {
        self.released.drain(..)
    }

    /// Live images in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &AfterImage> {
        let mut images: Vec<&AfterImage> = self.slots.iter().flatten().collect();
        images.sort_by_key(|image| image.sequence);
        images.into_iter()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Marker for after-image sprites.
#[derive(Component, Debug)]
pub struct AfterImageSprite;

/// Spawn sprites for new after-images and despawn those of retired ones.
pub(crate) fn sync_after_image_sprites(
    mut commands: Commands,
    mut query: Query<(&mut PlayerController, &Sprite), With<Player>>,
) {
    for (mut controller, sprite) in &mut query {
        let trail = controller.trail_mut();

        for render in trail.drain_released() {
            commands.entity(render).despawn();
        }

        trail.bind_unrendered(|image| {
            commands
                .spawn((
                    AfterImageSprite,
                    echo_sprite(sprite, image),
                    Transform::from_xyz(image.position.x, image.position.y, -0.1),
                ))
                .id()
        });
    }
}

/// Copy the player's sprite at the image's captured frame and alpha.
pub(crate) fn echo_sprite(sprite: &Sprite, image: &AfterImage) -> Sprite {
    Sprite {
        image: sprite.image.clone(),
        texture_atlas: sprite.texture_atlas.clone().map(|atlas| TextureAtlas {
            index: image.frame as usize,
            ..atlas
        }),
        color: sprite.color.with_alpha(image.alpha),
        flip_x: sprite.flip_x,
        custom_size: sprite.custom_size,
        ..default()
    }
}
