//! Core domain: fixed-tick stage ordering.

use bevy::prelude::*;

/// Stages of one simulation tick, chained in declaration order inside
/// `FixedUpdate`. Physics integration follows in `FixedPostUpdate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Input, ground probe and contact dispatch.
    Sample,
    /// Controllers turn signals into velocity intents.
    Control,
    /// Velocity intents are written into bodies.
    Commit,
    /// After-image aging and tick bookkeeping.
    Trail,
}

/// Number of fixed ticks simulated so far.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationTick(pub u64);

pub(crate) fn advance_simulation_tick(mut tick: ResMut<SimulationTick>) {
    tick.0 += 1;
}

pub struct TickSchedulePlugin;

impl Plugin for TickSchedulePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationTick>()
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Sample,
                    TickSet::Control,
                    TickSet::Commit,
                    TickSet::Trail,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, advance_simulation_tick.in_set(TickSet::Trail));
    }
}
