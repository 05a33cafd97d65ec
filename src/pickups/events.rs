//! Pickups domain: messages for score changes.

use bevy::ecs::message::Message;

/// Fired whenever a pickup changes the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChanged {
    pub delta: u32,
    pub total: u32,
}

impl Message for ScoreChanged {}
