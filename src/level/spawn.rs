//! Level domain: spawning the layout into the world.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::{EnemyTuning, TurnMarker, spawn_enemy};
use crate::content::WorldTuning;
use crate::level::layout::{Block, LevelLayout, StarRow};
use crate::movement::{GameLayer, Ground, MovementTuning, Wall, spawn_player};
use crate::pickups::spawn_star;
use crate::sprites::TrailTuning;

const GROUND_COLOR: Color = Color::srgb(0.35, 0.4, 0.35);
const WALL_COLOR: Color = Color::srgb(0.25, 0.25, 0.35);

/// Roll one vertical bounce per star. The same seed always gives the same
/// bounces.
pub fn roll_star_bounces(row: &StarRow, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..row.count)
        .map(|_| rng.random_range(row.bounce.clone()))
        .collect()
}

fn block_sprite(block: &Block, color: Color) -> (Sprite, Transform) {
    (
        Sprite {
            color,
            custom_size: Some(block.size),
            ..default()
        },
        Transform::from_xyz(block.center.x, block.center.y, 0.0),
    )
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    layout: Res<LevelLayout>,
    world: Res<WorldTuning>,
    movement_tuning: Res<MovementTuning>,
    trail_tuning: Res<TrailTuning>,
    enemy_tuning: Res<EnemyTuning>,
) {
    let solid_masks = [GameLayer::Player, GameLayer::Enemy, GameLayer::Pickup];

    for block in &layout.ground {
        commands.spawn((
            Ground,
            block_sprite(block, GROUND_COLOR),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            CollisionLayers::new(GameLayer::Ground, solid_masks),
        ));
    }

    for block in &layout.walls {
        commands.spawn((
            Wall,
            block_sprite(block, WALL_COLOR),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            CollisionLayers::new(GameLayer::Wall, solid_masks),
        ));
    }

    // Invisible, enemy-only
    let mut markers = 0;
    for block in layout.turn_markers() {
        commands.spawn((
            TurnMarker,
            Transform::from_xyz(block.center.x, block.center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            CollisionLayers::new(GameLayer::TurnMarker, [GameLayer::Enemy]),
        ));
        markers += 1;
    }

    for lane in &layout.lanes {
        spawn_enemy(
            &mut commands,
            lane.spawn_point(enemy_tuning.size),
            lane.heading,
            &enemy_tuning,
        );
    }

    let bounces = roll_star_bounces(&layout.stars, world.seed);
    for (position, bounce) in layout.stars.positions().zip(bounces) {
        spawn_star(&mut commands, position, bounce);
    }

    spawn_player(
        &mut commands,
        layout.player_spawn,
        &movement_tuning,
        &trail_tuning,
    );

    info!(
        "Level spawned: {} platforms, {} walls, {} turn markers, {} enemies, {} stars (seed {})",
        layout.ground.len(),
        layout.walls.len(),
        markers,
        layout.lanes.len(),
        layout.stars.count,
        world.seed
    );
}
