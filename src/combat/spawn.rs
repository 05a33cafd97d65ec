//! Combat domain: enemy spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{ContactHazard, Enemy, Patrol, PatrolController};
use crate::combat::resources::EnemyTuning;
use crate::movement::{GameLayer, VelocityIntent};
use crate::sprites::{AnimationController, AnimationState};

pub const ENEMY_COLOR: Color = Color::srgb(0.8, 0.35, 0.2);

/// Bundle for a patrolling enemy body
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub patrol: PatrolController,
    pub intent: VelocityIntent,
    pub animation: AnimationController,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_events: CollisionEventsEnabled,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub friction: Friction,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
}

impl EnemyBundle {
    pub fn new(position: Vec2, heading: Patrol, tuning: &EnemyTuning) -> Self {
        let size = Vec2::splat(tuning.size);

        Self {
            enemy: Enemy,
            patrol: PatrolController::new(heading),
            intent: VelocityIntent::default(),
            animation: AnimationController::playing(AnimationState::EnemyRun),
            sprite: Sprite {
                color: ENEMY_COLOR,
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.5),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            collision_events: CollisionEventsEnabled,
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::TurnMarker],
            ),
            velocity: LinearVelocity::default(),
            friction: Friction::new(0.0),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            gravity_scale: GravityScale(tuning.gravity_scale),
        }
    }
}

/// Spawn an enemy with its contact hazard sensor as a child.
pub fn spawn_enemy(
    commands: &mut Commands,
    position: Vec2,
    heading: Patrol,
    tuning: &EnemyTuning,
) -> Entity {
    let enemy = commands
        .spawn(EnemyBundle::new(position, heading, tuning))
        .id();

    // Slightly larger than the body so the player registers the touch
    // before the bodies would separate
    let hazard_size = Vec2::splat(tuning.size + 4.0);
    commands.entity(enemy).with_children(|parent| {
        parent.spawn((
            ContactHazard { owner: enemy },
            Transform::default(),
            Collider::rectangle(hazard_size.x, hazard_size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::EnemyHitbox, [GameLayer::Player]),
        ));
    });

    debug!(
        "Spawned enemy {:?} at ({:.0}, {:.0}) heading {:?}",
        enemy, position.x, position.y, heading
    );

    enemy
}
