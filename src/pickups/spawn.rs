//! Pickups domain: star spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::pickups::components::{PickupSensor, Star};

pub const STAR_SIZE: Vec2 = Vec2::new(24.0, 22.0);
pub const STAR_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);

/// Drop a star at `position`. It falls, bounces with `bounce` restitution and
/// settles on the first platform below it.
pub fn spawn_star(commands: &mut Commands, position: Vec2, bounce: f32) -> Entity {
    let star = commands
        .spawn((
            Star::default(),
            Sprite {
                color: STAR_COLOR,
                custom_size: Some(STAR_SIZE),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.2),
            RigidBody::Dynamic,
            Collider::rectangle(STAR_SIZE.x, STAR_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            Restitution::new(bounce),
            CollisionLayers::new(GameLayer::Pickup, [GameLayer::Ground, GameLayer::Wall]),
        ))
        .id();

    commands.entity(star).with_children(|parent| {
        parent.spawn((
            PickupSensor { star },
            Transform::default(),
            Collider::rectangle(STAR_SIZE.x, STAR_SIZE.y),
            Sensor,
            CollisionLayers::new(GameLayer::PickupSensor, [GameLayer::Player]),
        ));
    });

    star
}
