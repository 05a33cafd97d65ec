//! Core domain: tick stages, contact dispatch and camera.

pub mod contacts;
pub mod schedule;


use bevy::prelude::*;

pub use contacts::{ContactEvent, ContactQueue};
pub use schedule::{SimulationTick, TickSchedulePlugin, TickSet};

use crate::core::contacts::{collect_contacts, dispatch_contacts};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TickSchedulePlugin)
            .init_resource::<ContactQueue>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                FixedUpdate,
                (collect_contacts, dispatch_contacts)
                    .chain()
                    .in_set(TickSet::Sample),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
