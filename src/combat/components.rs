//! Combat domain: enemy patrol state and contact components.

use bevy::prelude::*;

use crate::movement::VelocityCommand;

/// Marks an entity as an enemy
#[derive(Component, Debug)]
pub struct Enemy;

/// Patrol heading. Only a turn-marker contact changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patrol {
    #[default]
    Left,
    Right,
}

impl Patrol {
    pub fn sign(self) -> f32 {
        match self {
            Patrol::Left => -1.0,
            Patrol::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Patrol::Left => Patrol::Right,
            Patrol::Right => Patrol::Left,
        }
    }
}

/// Per-tick output of a patrol controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolCommand {
    pub velocity: VelocityCommand,
    /// Sprite art faces right; flip it while walking left.
    pub flip_x: bool,
}

/// Paces at constant speed and turns around on request.
#[derive(Component, Debug, Clone, Default)]
pub struct PatrolController {
    state: Patrol,
}

impl PatrolController {
    pub fn new(state: Patrol) -> Self {
        Self { state }
    }

    pub fn update(&self, speed: f32) -> PatrolCommand {
        PatrolCommand {
            velocity: VelocityCommand::horizontal(speed * self.state.sign()),
            flip_x: self.state == Patrol::Left,
        }
    }

    /// Flip the heading. No debounce: every call flips.
    pub fn reverse(&mut self) -> Patrol {
        self.state = self.state.reversed();
        self.state
    }

    pub fn state(&self) -> Patrol {
        self.state
    }
}

/// Sensor that damages the player on overlap.
#[derive(Component, Debug)]
pub struct ContactHazard {
    pub owner: Entity,
}

/// Static blocker that only enemies collide with; touching one reverses
/// the patrol.
#[derive(Component, Debug)]
pub struct TurnMarker;

/// Sprite colors for the damage indicator
#[derive(Component, Debug, Clone, Copy)]
pub struct DamageTint {
    pub normal: Color,
    pub damaged: Color,
}

impl DamageTint {
    pub fn new(normal: Color) -> Self {
        Self {
            normal,
            damaged: Color::srgb(1.0, 0.2, 0.2),
        }
    }
}
