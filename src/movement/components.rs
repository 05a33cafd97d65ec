//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Platforms and floor
    Ground,
    /// Level bounds
    Wall,
    Player,
    Enemy,
    /// Enemy contact sensors (damage the player)
    EnemyHitbox,
    /// Enemy-only blockers that make patrols turn around
    TurnMarker,
    /// Collectible bodies
    Pickup,
    /// Collectible overlap sensors
    PickupSensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Result of the per-tick ground probe.
#[derive(Component, Debug, Default)]
pub struct GroundContact {
    pub on_ground: bool,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Velocity components a controller wants written this tick. `None` leaves
/// the body's current value (and whatever physics did to it) untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityCommand {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl VelocityCommand {
    pub fn horizontal(x: f32) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }

    pub fn apply_to(&self, velocity: &mut Vec2) {
        if let Some(x) = self.x {
            velocity.x = x;
        }
        if let Some(y) = self.y {
            velocity.y = y;
        }
    }
}

/// A controller's output for the current tick, committed to the body by
/// the commit stage.
#[derive(Component, Debug, Default)]
pub struct VelocityIntent(pub VelocityCommand);
