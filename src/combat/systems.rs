//! Combat domain: patrol updates and the damage indicator.

use bevy::prelude::*;

use crate::combat::components::{DamageTint, Enemy, PatrolController};
use crate::combat::resources::EnemyTuning;
use crate::movement::{PlayerController, VelocityIntent};

pub(crate) fn update_enemy_patrol(
    tuning: Res<EnemyTuning>,
    mut query: Query<(&PatrolController, &mut VelocityIntent), With<Enemy>>,
) {
    for (patrol, mut intent) in &mut query {
        intent.0 = patrol.update(tuning.speed).velocity;
    }
}

pub(crate) fn face_patrol_direction(
    tuning: Res<EnemyTuning>,
    mut query: Query<(&PatrolController, &mut Sprite), (With<Enemy>, Changed<PatrolController>)>,
) {
    for (patrol, mut sprite) in &mut query {
        sprite.flip_x = patrol.update(tuning.speed).flip_x;
    }
}

pub(crate) fn apply_damage_tint(mut query: Query<(&PlayerController, &DamageTint, &mut Sprite)>) {
    for (controller, tint, mut sprite) in &mut query {
        let color = if controller.is_damaged() {
            tint.damaged
        } else {
            tint.normal
        };
        if sprite.color != color {
            sprite.color = color;
        }
    }
}
