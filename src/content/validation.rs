//! Range checks for loaded tuning values.

use super::data::{TUNING_SCHEMA_VERSION, TuningFile};
use crate::sprites::TRAIL_CAPACITY;

/// Longest retire age the after-image arena holds without evicting live
/// images, given one spawn every other dash tick.
pub const MAX_TRAIL_RETIRE_TICKS: u32 = 2 * TRAIL_CAPACITY as u32 - 1;

/// A tuning value outside the range the controllers accept.
#[derive(Debug)]
pub struct TuningIssue {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for recording a failed range check
macro_rules! check {
    ($issues:expr, $cond:expr, $section:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $issues.push(TuningIssue {
                section: $section,
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate a tuning file. Returns every issue found, empty if usable.
pub fn validate_tuning(tuning: &TuningFile) -> Vec<TuningIssue> {
    let mut issues = Vec::new();

    check!(
        issues,
        tuning.schema_version == TUNING_SCHEMA_VERSION,
        "tuning",
        "schema_version",
        "expected {}, found {}",
        TUNING_SCHEMA_VERSION,
        tuning.schema_version
    );

    let player = &tuning.player;
    check!(
        issues,
        player.base_speed > 0.0,
        "player",
        "base_speed",
        "must be positive, found {}",
        player.base_speed
    );
    check!(
        issues,
        player.dash_peak_speed >= player.base_speed,
        "player",
        "dash_peak_speed",
        "must be at least base_speed ({}), found {}",
        player.base_speed,
        player.dash_peak_speed
    );
    check!(
        issues,
        player.dash_ticks > 0,
        "player",
        "dash_ticks",
        "must be at least 1"
    );
    check!(
        issues,
        player.jump_grace_ticks > 0,
        "player",
        "jump_grace_ticks",
        "must be at least 1 or the player can never jump"
    );
    check!(
        issues,
        player.damage_lock_ms.is_finite() && player.damage_lock_ms >= 0.0,
        "player",
        "damage_lock_ms",
        "must be a non-negative duration, found {}",
        player.damage_lock_ms
    );
    check!(
        issues,
        player.ground_probe > 0.0,
        "player",
        "ground_probe",
        "must be positive, found {}",
        player.ground_probe
    );

    check!(
        issues,
        tuning.enemy.speed >= 0.0,
        "enemy",
        "speed",
        "must not be negative, found {}",
        tuning.enemy.speed
    );
    check!(
        issues,
        tuning.enemy.size > 0.0,
        "enemy",
        "size",
        "must be positive, found {}",
        tuning.enemy.size
    );

    check!(
        issues,
        (0.0..=1.0).contains(&tuning.trail.alpha),
        "trail",
        "alpha",
        "must be within 0..=1, found {}",
        tuning.trail.alpha
    );
    check!(
        issues,
        tuning.trail.retire_after_ticks <= MAX_TRAIL_RETIRE_TICKS,
        "trail",
        "retire_after_ticks",
        "must be at most {} to fit {} after-image slots, found {}",
        MAX_TRAIL_RETIRE_TICKS,
        TRAIL_CAPACITY,
        tuning.trail.retire_after_ticks
    );

    check!(
        issues,
        tuning.world.tick_hz.is_finite() && tuning.world.tick_hz > 0.0,
        "world",
        "tick_hz",
        "must be a positive rate, found {}",
        tuning.world.tick_hz
    );

    issues
}
