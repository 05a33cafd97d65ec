//! Sprites module: tests for clip playback and the after-image arena.

use bevy::prelude::*;

use super::afterimage::{AfterImageSprite, sync_after_image_sprites};
use super::{AfterImageTrail, AnimationController, AnimationState, TRAIL_CAPACITY, TrailTuning};
use crate::movement::{Player, PlayerController};

fn render_entities(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

// -----------------------------------------------------------------------------
// AnimationController tests
// -----------------------------------------------------------------------------

#[test]
fn test_play_is_idempotent() {
    let mut controller = AnimationController::default();
    assert!(controller.play(AnimationState::RunRight));
    controller.advance(0.1);
    let frame = controller.current_frame;

    assert!(!controller.play(AnimationState::RunRight));
    assert_eq!(controller.current_frame, frame);
}

#[test]
fn test_play_restarts_at_clip_start() {
    let mut controller = AnimationController::playing(AnimationState::RunLeft);
    controller.advance(0.25);
    assert_ne!(controller.current_frame, 0);

    controller.play(AnimationState::RunRight);
    assert_eq!(controller.current_frame, 5);
    assert_eq!(controller.state.name(), "run-right");
}

#[test]
fn test_looping_clip_wraps() {
    let mut controller = AnimationController::playing(AnimationState::RunLeft);
    // 10 fps, 4 frames: 0.45s is frame index 4 which wraps to frame 0
    controller.advance(0.45);
    assert_eq!(controller.current_frame, 0);
}

#[test]
fn test_single_frame_clip_holds() {
    let mut controller = AnimationController::playing(AnimationState::Idle);
    controller.advance(1.0);
    assert_eq!(controller.current_frame, 4);
}

// -----------------------------------------------------------------------------
// AfterImageTrail tests
// -----------------------------------------------------------------------------

#[test]
fn test_image_present_at_age_twelve_absent_at_thirteen() {
    let mut trail = AfterImageTrail::default();
    trail.spawn(Vec2::new(10.0, 20.0), 6);

    // Tick of the spawn itself does not age the image
    trail.tick();
    assert_eq!(trail.iter().next().map(|image| image.age()), Some(0));

    for _ in 0..12 {
        trail.tick();
    }
    assert_eq!(trail.iter().next().map(|image| image.age()), Some(12));

    trail.tick();
    assert!(trail.is_empty());
}

#[test]
fn test_spawn_snapshots_position_frame_and_alpha() {
    let tuning = TrailTuning {
        retire_after_ticks: 12,
        alpha: 0.25,
    };
    let mut trail = AfterImageTrail::new(&tuning);
    trail.spawn(Vec2::new(-4.0, 8.0), 7);

    let image = trail.iter().next().unwrap();
    assert_eq!(image.position, Vec2::new(-4.0, 8.0));
    assert_eq!(image.frame, 7);
    assert_eq!(image.alpha, 0.25);
    assert_eq!(image.sequence, 0);
}

#[test]
fn test_retirement_releases_render_entity() {
    let renders = render_entities(1);
    let mut trail = AfterImageTrail::default();
    trail.spawn(Vec2::ZERO, 0);
    trail.bind_unrendered(|_| renders[0]);

    for _ in 0..13 {
        trail.tick();
    }
    assert_eq!(trail.drain_released().count(), 0);

    trail.tick();
    let released: Vec<Entity> = trail.drain_released().collect();
    assert_eq!(released, vec![renders[0]]);
    assert_eq!(trail.drain_released().count(), 0);
}

#[test]
fn test_bind_only_touches_unrendered_images() {
    let renders = render_entities(2);
    let mut trail = AfterImageTrail::default();
    trail.spawn(Vec2::ZERO, 0);

    let mut calls = 0;
    trail.bind_unrendered(|_| {
        calls += 1;
        renders[0]
    });
    trail.spawn(Vec2::X, 1);
    trail.bind_unrendered(|_| {
        calls += 1;
        renders[1]
    });

    assert_eq!(calls, 2);
    let bound: Vec<Option<Entity>> = trail.iter().map(|image| image.render()).collect();
    assert_eq!(bound, vec![Some(renders[0]), Some(renders[1])]);
}

#[test]
fn test_dash_pattern_stays_within_capacity() {
    let mut trail = AfterImageTrail::default();
    let mut peak = 0;

    // One spawn every other tick for a 20 tick dash, then let it fade
    for tick in (1..=20u32).rev() {
        if tick % 2 == 0 {
            trail.spawn(Vec2::ZERO, 0);
        }
        trail.tick();
        peak = peak.max(trail.len());
    }
    for _ in 0..20 {
        trail.tick();
    }

    assert!(peak <= TRAIL_CAPACITY);
    assert_eq!(peak, 7);
    assert!(trail.is_empty());
}

#[test]
fn test_full_arena_evicts_oldest() {
    let renders = render_entities(1);
    let mut trail = AfterImageTrail::default();
    trail.spawn(Vec2::ZERO, 0);
    trail.bind_unrendered(|_| renders[0]);

    for i in 1..=TRAIL_CAPACITY {
        trail.spawn(Vec2::new(i as f32, 0.0), 0);
    }

    assert_eq!(trail.len(), TRAIL_CAPACITY);
    assert_eq!(trail.iter().next().map(|image| image.sequence), Some(1));
    let released: Vec<Entity> = trail.drain_released().collect();
    assert_eq!(released, vec![renders[0]]);
}

// -----------------------------------------------------------------------------
// Sprite sync tests
// -----------------------------------------------------------------------------

#[test]
fn test_echo_sprite_shows_captured_frame() {
    let mut world = World::new();
    let mut controller = PlayerController::default();
    controller.trail_mut().spawn(Vec2::new(30.0, 40.0), 3);

    world.spawn((
        Player,
        controller,
        Sprite {
            color: Color::WHITE,
            flip_x: true,
            custom_size: Some(Vec2::splat(32.0)),
            texture_atlas: Some(TextureAtlas {
                layout: Handle::default(),
                index: 0,
            }),
            ..default()
        },
    ));

    let mut schedule = Schedule::default();
    schedule.add_systems(sync_after_image_sprites);
    schedule.run(&mut world);

    let mut echoes = world.query_filtered::<(&Sprite, &Transform), With<AfterImageSprite>>();
    let (sprite, transform) = echoes.single(&world).unwrap();
    assert_eq!(sprite.texture_atlas.as_ref().map(|atlas| atlas.index), Some(3));
    assert!(sprite.flip_x);
    assert_eq!(sprite.color.alpha(), TrailTuning::default().alpha);
    assert_eq!(sprite.custom_size, Some(Vec2::splat(32.0)));
    assert_eq!(transform.translation.truncate(), Vec2::new(30.0, 40.0));
}
