//! Movement domain: player spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::DamageTint;
use crate::movement::{
    GameLayer, GroundContact, MovementTuning, Player, PlayerController, VelocityIntent,
};
use crate::sprites::{AfterImageTrail, AnimationController, TrailTuning};

pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);
pub const PLAYER_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);

/// Spawn the player at `position` with a fresh controller.
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec2,
    tuning: &MovementTuning,
    trail_tuning: &TrailTuning,
) -> Entity {
    let player = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                PlayerController::new(AfterImageTrail::new(trail_tuning)),
                GroundContact::default(),
                VelocityIntent::default(),
            ),
            // Rendering
            (
                Sprite {
                    color: PLAYER_COLOR,
                    custom_size: Some(PLAYER_SIZE),
                    ..default()
                },
                AnimationController::default(),
                DamageTint::new(PLAYER_COLOR),
                Transform::from_xyz(position.x, position.y, 1.0),
            ),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(tuning.gravity_scale),
                Restitution::new(tuning.bounce),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [
                        GameLayer::Ground,
                        GameLayer::Wall,
                        GameLayer::EnemyHitbox,
                        GameLayer::PickupSensor,
                    ],
                ),
            ),
        ))
        .id();

    info!(
        "Spawned player at ({:.0}, {:.0}): base_speed={}, dash_peak={}, dash_ticks={}",
        position.x, position.y, tuning.base_speed, tuning.dash_peak_speed, tuning.dash_ticks
    );

    player
}
