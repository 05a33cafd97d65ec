//! Content domain: RON tuning file schema.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::EnemyTuning;
use crate::movement::MovementTuning;
use crate::sprites::TrailTuning;

pub const TUNING_SCHEMA_VERSION: u32 = 1;

/// Top-level layout of `tuning.ron`. Every section is optional and falls
/// back to the built-in defaults field by field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningFile {
    pub schema_version: u32,
    pub player: MovementTuning,
    pub enemy: EnemyTuning,
    pub trail: TrailTuning,
    pub world: WorldTuning,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            player: MovementTuning::default(),
            enemy: EnemyTuning::default(),
            trail: TrailTuning::default(),
            world: WorldTuning::default(),
        }
    }
}

/// Simulation-wide settings.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Fixed simulation rate.
    pub tick_hz: f64,
    /// Downward world gravity, before per-body scaling.
    pub gravity: f32,
    /// Seed for level randomness (star bounce).
    pub seed: u64,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            gravity: 300.0,
            seed: 7,
        }
    }
}
