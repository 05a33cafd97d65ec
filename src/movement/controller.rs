//! Player controller: the dash, jump and damage state machine.
//!
//! `update` runs once per fixed tick and evaluates, in order:
//! 1. damage lock (skips everything below while locked),
//! 2. horizontal intent and dash trigger (only when not dashing),
//! 3. dash motion and after-image spawns,
//! 4. jump grace bookkeeping and the jump itself.
//!
//! Later steps override the velocity intent of earlier ones. The controller
//! never touches the body; it returns a [`PlayerCommand`] for the caller to
//! commit.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementTuning, VelocityCommand};
use crate::sprites::{AfterImageTrail, AnimationState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashState {
    /// A dash can be triggered.
    Ready,
    /// Dash used; recharges on the next grounded tick.
    Spent,
    /// Dash in progress. `recharged` records a recharge that arrived
    /// mid-dash and applies once the dash ends.
    Dashing { ticks_remaining: u32, recharged: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageState {
    Normal,
    Locked { elapsed_ms: f32 },
}

/// Signals the controller reads at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSignals {
    pub grounded: bool,
    pub delta_ms: f32,
    pub position: Vec2,
    /// Sprite frame shown at tick start, captured by after-images.
    pub frame: u32,
}

/// What the controller wants done at the end of a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerCommand {
    pub velocity: VelocityCommand,
    pub animation: Option<AnimationState>,
    pub dash_started: bool,
    pub damage_cleared: bool,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    dash: DashState,
    damage: DamageState,
    facing: Facing,
    jump_grace_ticks: u32,
    trail: AfterImageTrail,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(AfterImageTrail::default())
    }
}

impl PlayerController {
    pub fn new(trail: AfterImageTrail) -> Self {
        Self {
            dash: DashState::Ready,
            damage: DamageState::Normal,
            facing: Facing::Right,
            jump_grace_ticks: 0,
            trail,
        }
    }

    pub fn update(
        &mut self,
        tuning: &MovementTuning,
        input: MovementInput,
        signals: TickSignals,
    ) -> PlayerCommand {
        debug_assert!(
            signals.delta_ms.is_finite() && signals.delta_ms >= 0.0,
            "tick delta must be a finite, non-negative duration: {}",
            signals.delta_ms
        );

        let mut command = PlayerCommand::default();

        if let DamageState::Locked { elapsed_ms } = self.damage {
            let elapsed_ms = elapsed_ms + signals.delta_ms;
            if elapsed_ms < tuning.damage_lock_ms {
                // Knockback velocity is carried by the body, not re-issued
                self.damage = DamageState::Locked { elapsed_ms };
                return command;
            }
            self.damage = DamageState::Normal;
            command.damage_cleared = true;
        }

        if self.dash_ticks_remaining() == 0 {
            if input.left {
                self.facing = Facing::Left;
                command.velocity.x = Some(-tuning.base_speed);
                command.animation = Some(AnimationState::RunLeft);
            } else if input.right {
                self.facing = Facing::Right;
                command.velocity.x = Some(tuning.base_speed);
                command.animation = Some(AnimationState::RunRight);
            } else {
                command.velocity.x = Some(0.0);
                command.animation = Some(AnimationState::Idle);
            }

            if input.dash && self.can_dash() && tuning.dash_ticks > 0 {
                self.dash = DashState::Dashing {
                    ticks_remaining: tuning.dash_ticks,
                    recharged: false,
                };
                command.dash_started = true;
            }
        }

        if let DashState::Dashing {
            ticks_remaining,
            recharged,
        } = self.dash
        {
            let speed = tuning.dash_speed(ticks_remaining);
            command.velocity.x = Some(speed * self.facing.sign());

            if ticks_remaining % 2 == 0 {
                self.trail.spawn(signals.position, signals.frame);
            }

            let ticks_remaining = ticks_remaining - 1;
            self.dash = if ticks_remaining > 0 {
                DashState::Dashing {
                    ticks_remaining,
                    recharged,
                }
            } else if recharged {
                DashState::Ready
            } else {
                DashState::Spent
            };
        }

        self.jump_grace_ticks = self.jump_grace_ticks.saturating_sub(1);
        if signals.grounded {
            self.jump_grace_ticks = tuning.jump_grace_ticks;
            if self.dash == DashState::Spent {
                self.dash = DashState::Ready;
            }
        }
        if self.jump_grace_ticks > 0 && input.jump {
            command.velocity.y = Some(tuning.jump_speed);
        }

        command
    }

    /// Start the damage lock and return the knockback velocity to commit.
    /// Returns `None` while already locked.
    pub fn handle_damage(&mut self, tuning: &MovementTuning, velocity: Vec2) -> Option<Vec2> {
        if self.is_damaged() {
            return None;
        }

        // A body at rest is pushed back against its facing
        let mut heading = velocity.normalize_or_zero();
        if heading == Vec2::ZERO {
            heading = Vec2::new(self.facing.sign(), 0.0);
        }

        self.damage = DamageState::Locked { elapsed_ms: 0.0 };
        Some(-heading * tuning.knockback_speed)
    }

    /// Recharge the dash from a pickup. A dash in progress keeps running and
    /// the recharge applies when it ends.
    pub fn restore_dash(&mut self) {
        self.dash = match self.dash {
            DashState::Spent => DashState::Ready,
            DashState::Dashing {
                ticks_remaining, ..
            } => DashState::Dashing {
                ticks_remaining,
                recharged: true,
            },
            DashState::Ready => DashState::Ready,
        };
    }

    /// Age the after-image trail. Runs after `update` in the same tick.
    pub fn age_trail(&mut self) {
        self.trail.tick();
    }

    pub fn dash_state(&self) -> DashState {
        self.dash
    }

    pub fn dash_ticks_remaining(&self) -> u32 {
        match self.dash {
            DashState::Dashing {
                ticks_remaining, ..
            } => ticks_remaining,
            _ => 0,
        }
    }

    pub fn can_dash(&self) -> bool {
        self.dash == DashState::Ready
    }

    pub fn damage_state(&self) -> DamageState {
        self.damage
    }

    pub fn is_damaged(&self) -> bool {
        matches!(self.damage, DamageState::Locked { .. })
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn jump_grace_ticks_remaining(&self) -> u32 {
        self.jump_grace_ticks
    }

    pub fn trail(&self) -> &AfterImageTrail {
        &self.trail
    }

    pub fn trail_mut(&mut self) -> &mut AfterImageTrail {
        &mut self.trail
    }
}
