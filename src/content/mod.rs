//! Content domain: RON tuning loading and application.

pub mod data;
pub mod loader;
pub mod validation;


use std::path::PathBuf;

use avian2d::prelude::*;
use bevy::prelude::*;

pub use data::{TuningFile, WorldTuning};

use crate::content::loader::load_tuning;
use crate::content::validation::validate_tuning;

pub const DEFAULT_TUNING_PATH: &str = "assets/data/tuning.ron";

/// Where the tuning file is read from at startup.
#[derive(Resource, Debug, Clone)]
pub struct TuningPath(pub PathBuf);

impl Default for TuningPath {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_TUNING_PATH))
    }
}

/// Startup systems that depend on tuning run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TuningLoadSet;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningPath>()
            .init_resource::<WorldTuning>()
            .add_systems(Startup, load_tuning_content.in_set(TuningLoadSet));
    }
}

/// Read the tuning file and publish its sections as resources. A missing,
/// malformed or out-of-range file falls back to the built-in defaults.
pub(crate) fn load_tuning_content(mut commands: Commands, path: Res<TuningPath>) {
    let tuning = match load_tuning(&path.0) {
        Ok(tuning) => {
            let issues = validate_tuning(&tuning);
            if issues.is_empty() {
                info!(
                    "Loaded tuning from {}: tick_hz={}, gravity={}",
                    path.0.display(),
                    tuning.world.tick_hz,
                    tuning.world.gravity
                );
                tuning
            } else {
                for issue in &issues {
                    warn!("Invalid tuning value {}", issue);
                }
                warn!(
                    "{} tuning issue(s) in {}, using built-in defaults",
                    issues.len(),
                    path.0.display()
                );
                TuningFile::default()
            }
        }
        Err(e) => {
            warn!("{}, using built-in defaults", e);
            TuningFile::default()
        }
    };

    apply_tuning(&mut commands, tuning);
}

fn apply_tuning(commands: &mut Commands, tuning: TuningFile) {
    let TuningFile {
        player,
        enemy,
        trail,
        world,
        ..
    } = tuning;

    commands.insert_resource(Time::<Fixed>::from_hz(world.tick_hz));
    commands.insert_resource(Gravity(Vec2::NEG_Y * world.gravity));
    commands.insert_resource(player);
    commands.insert_resource(enemy);
    commands.insert_resource(trail);
    commands.insert_resource(world);
}
