//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub base_speed: f32,
    pub dash_peak_speed: f32,
    pub dash_ticks: u32,
    pub jump_speed: f32,
    /// Value the jump grace counter is reset to on every grounded tick.
    pub jump_grace_ticks: u32,
    pub knockback_speed: f32,
    pub damage_lock_ms: f32,
    /// Multiplier on world gravity for the player body.
    pub gravity_scale: f32,
    pub bounce: f32,
    /// Length of the downward ground probe below the player's feet.
    pub ground_probe: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            base_speed: 200.0,
            dash_peak_speed: 1800.0,
            dash_ticks: 20,
            jump_speed: 500.0,
            jump_grace_ticks: 10,
            knockback_speed: 400.0,
            damage_lock_ms: 250.0,
            gravity_scale: 2.0,
            bounce: 0.2,
            ground_probe: 4.0,
        }
    }
}

impl MovementTuning {
    /// Dash speed decays linearly from the peak with the ticks left, but
    /// never drops below base speed.
    pub fn dash_speed(&self, ticks_remaining: u32) -> f32 {
        let progress = ticks_remaining as f32 / self.dash_ticks as f32;
        (self.dash_peak_speed * progress).max(self.base_speed)
    }
}

/// Key-down state sampled at the start of each tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub dash: bool,
}
