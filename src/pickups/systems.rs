//! Pickups domain: score reporting.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::pickups::events::ScoreChanged;

pub(crate) fn log_score_changes(mut events: MessageReader<ScoreChanged>) {
    for event in events.read() {
        info!("Star collected: +{} (score {})", event.delta, event.total);
    }
}
