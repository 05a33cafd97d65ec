//! Pickups domain: score tracking.

use bevy::prelude::*;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub total: u32,
}

impl Score {
    /// Add points and return the new total.
    pub fn add(&mut self, points: u32) -> u32 {
        self.total = self.total.saturating_add(points);
        self.total
    }
}
