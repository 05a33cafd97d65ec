//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, MovementTuning, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut GroundContact), With<Player>>,
) {
    // Only platforms count as ground, not walls or actors
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut contact) in &mut query {
        let was_on_ground = contact.on_ground;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_probe,
            true,
            &ground_filter,
        );

        contact.on_ground = hit.is_some();

        if contact.on_ground != was_on_ground {
            debug!("Ground contact changed: on_ground={}", contact.on_ground);
        }
    }
}
