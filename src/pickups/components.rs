//! Pickups domain: collectible components.

use bevy::prelude::*;

/// Points awarded per star.
pub const STAR_VALUE: u32 = 10;

/// A collectible star body.
#[derive(Component, Debug, Clone, Copy)]
pub struct Star {
    pub value: u32,
}

impl Default for Star {
    fn default() -> Self {
        Self { value: STAR_VALUE }
    }
}

/// Overlap sensor attached to a star; `star` is the body to collect.
#[derive(Component, Debug)]
pub struct PickupSensor {
    pub star: Entity,
}
