//! Combat domain: enemy tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub speed: f32,
    /// Enemies are pinned to their platform by a much stronger pull than
    /// the player gets.
    pub gravity_scale: f32,
    pub size: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: 100.0,
            gravity_scale: 51.0,
            size: 32.0,
        }
    }
}
