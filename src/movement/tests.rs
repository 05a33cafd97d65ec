//! Movement domain: tests for the player controller and its systems.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use super::systems::{commit_velocity_intents, update_player};
use super::{
    DamageState, DashState, Facing, GroundContact, MovementInput, MovementTuning, Player,
    PlayerCommand, PlayerController, TickSignals, VelocityCommand, VelocityIntent,
};
use crate::sprites::{AnimationController, AnimationState};

const TICK_MS: f32 = 16.7;

fn signals(grounded: bool) -> TickSignals {
    TickSignals {
        grounded,
        delta_ms: TICK_MS,
        position: Vec2::ZERO,
        frame: 0,
    }
}

fn step(
    controller: &mut PlayerController,
    tuning: &MovementTuning,
    input: MovementInput,
    grounded: bool,
) -> PlayerCommand {
    let command = controller.update(tuning, input, signals(grounded));
    controller.age_trail();
    command
}

fn idle() -> MovementInput {
    MovementInput::default()
}

fn right() -> MovementInput {
    MovementInput {
        right: true,
        ..default()
    }
}

fn dash() -> MovementInput {
    MovementInput {
        dash: true,
        ..default()
    }
}

fn jump() -> MovementInput {
    MovementInput {
        jump: true,
        ..default()
    }
}

// -----------------------------------------------------------------------------
// Horizontal intent tests
// -----------------------------------------------------------------------------

#[test]
fn test_directional_input_sets_base_speed_and_clip() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    let command = step(&mut controller, &tuning, right(), true);
    assert_eq!(command.velocity.x, Some(200.0));
    assert_eq!(command.animation, Some(AnimationState::RunRight));

    let left = MovementInput {
        left: true,
        ..default()
    };
    let command = step(&mut controller, &tuning, left, true);
    assert_eq!(command.velocity.x, Some(-200.0));
    assert_eq!(command.animation, Some(AnimationState::RunLeft));
    assert_eq!(controller.facing(), Facing::Left);

    let command = step(&mut controller, &tuning, idle(), true);
    assert_eq!(command.velocity.x, Some(0.0));
    assert_eq!(command.animation, Some(AnimationState::Idle));
    assert_eq!(controller.facing(), Facing::Left);
}

#[test]
fn test_left_wins_over_right() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();
    let both = MovementInput {
        left: true,
        right: true,
        ..default()
    };

    let command = step(&mut controller, &tuning, both, true);
    assert_eq!(command.velocity.x, Some(-200.0));
    assert_eq!(command.animation, Some(AnimationState::RunLeft));
}

// -----------------------------------------------------------------------------
// Dash tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_speed_decays_to_base_speed() {
    let tuning = MovementTuning::default();
    assert_eq!(tuning.dash_speed(20), 1800.0);
    assert_eq!(tuning.dash_speed(10), 900.0);
    assert_eq!(tuning.dash_speed(1), 200.0);

    let mut controller = PlayerController::default();
    let speeds: Vec<f32> = (0..20)
        .map(|_| {
            step(&mut controller, &tuning, dash(), true)
                .velocity
                .x
                .unwrap()
        })
        .collect();

    assert_eq!(speeds[0], 1800.0);
    assert_eq!(speeds[10], 900.0);
    assert_eq!(speeds[19], 200.0);
    assert!(speeds.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn test_dash_cannot_retrigger_mid_dash() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    let command = step(&mut controller, &tuning, dash(), true);
    assert!(command.dash_started);
    assert_eq!(controller.dash_ticks_remaining(), 19);

    let command = step(&mut controller, &tuning, dash(), true);
    assert!(!command.dash_started);
    assert_eq!(controller.dash_ticks_remaining(), 18);
}

#[test]
fn test_dash_ticks_never_increase_while_nonzero() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();
    let mut previous = 0;

    for tick in 0..300u32 {
        let input = MovementInput {
            left: tick % 7 == 0,
            right: tick % 5 == 0,
            jump: tick % 11 == 0,
            dash: tick % 3 != 0,
        };
        let grounded = (tick / 13) % 2 == 0;
        step(&mut controller, &tuning, input, grounded);

        let current = controller.dash_ticks_remaining();
        if previous > 0 {
            assert!(current < previous, "tick {tick}: {current} >= {previous}");
        }
        assert!(current <= tuning.dash_ticks);
        previous = current;
    }
}

#[test]
fn test_dash_uses_default_direction_without_input() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    let command = step(&mut controller, &tuning, dash(), false);
    assert_eq!(command.velocity.x, Some(1800.0));
}

#[test]
fn test_dash_aims_at_last_direction() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();
    let left = MovementInput {
        left: true,
        ..default()
    };

    step(&mut controller, &tuning, left, true);
    step(&mut controller, &tuning, idle(), true);
    let command = step(&mut controller, &tuning, dash(), true);
    assert_eq!(command.velocity.x, Some(-1800.0));
}

#[test]
fn test_directional_input_ignored_mid_dash() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    step(&mut controller, &tuning, dash(), true);
    let left = MovementInput {
        left: true,
        ..default()
    };
    let command = step(&mut controller, &tuning, left, true);

    assert!(command.velocity.x.unwrap() > 0.0);
    assert_eq!(command.animation, None);
    assert_eq!(controller.facing(), Facing::Right);
}

#[test]
fn test_dash_recharges_only_on_grounded_tick_after_dash() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    // Airborne dash: spent once finished
    for _ in 0..20 {
        step(&mut controller, &tuning, dash(), false);
        assert!(!controller.can_dash());
    }
    assert_eq!(controller.dash_ticks_remaining(), 0);
    assert_eq!(controller.dash_state(), DashState::Spent);

    step(&mut controller, &tuning, dash(), false);
    assert!(!controller.can_dash());
    assert_eq!(controller.dash_ticks_remaining(), 0);

    step(&mut controller, &tuning, idle(), true);
    assert!(controller.can_dash());
}

#[test]
fn test_grounded_dash_recharges_when_it_ends() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    step(&mut controller, &tuning, dash(), true);
    while controller.dash_ticks_remaining() > 0 {
        assert!(!controller.can_dash());
        step(&mut controller, &tuning, idle(), true);
    }
    assert!(controller.can_dash());
}

#[test]
fn test_pickup_recharge_mid_dash_applies_after_dash() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    step(&mut controller, &tuning, dash(), false);
    controller.restore_dash();
    assert!(!controller.can_dash());

    while controller.dash_ticks_remaining() > 0 {
        step(&mut controller, &tuning, idle(), false);
    }
    assert!(controller.can_dash());
}

#[test]
fn test_pickup_recharges_spent_dash() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    for _ in 0..20 {
        step(&mut controller, &tuning, dash(), false);
    }
    assert!(!controller.can_dash());

    controller.restore_dash();
    assert!(controller.can_dash());
}

#[test]
fn test_dash_spawns_after_images_on_even_ticks() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    let at = |x: f32| TickSignals {
        position: Vec2::new(x, 5.0),
        frame: 5,
        ..signals(true)
    };

    controller.update(&tuning, dash(), at(0.0));
    controller.age_trail();
    assert_eq!(controller.trail().len(), 1);

    controller.update(&tuning, idle(), at(10.0));
    controller.age_trail();
    assert_eq!(controller.trail().len(), 1);

    controller.update(&tuning, idle(), at(20.0));
    controller.age_trail();
    assert_eq!(controller.trail().len(), 2);

    let positions: Vec<Vec2> = controller.trail().iter().map(|image| image.position).collect();
    assert_eq!(positions, vec![Vec2::new(0.0, 5.0), Vec2::new(20.0, 5.0)]);
    assert!(controller.trail().iter().all(|image| image.frame == 5));
}

#[test]
fn test_trail_fades_after_dash() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    step(&mut controller, &tuning, dash(), true);
    for _ in 0..40 {
        step(&mut controller, &tuning, idle(), true);
    }
    assert!(controller.trail().is_empty());
}

// -----------------------------------------------------------------------------
// Jump tests
// -----------------------------------------------------------------------------

/// Ground the player for one tick, stay airborne `k - 1` ticks, then press
/// jump on the k-th airborne tick.
fn jump_after_leaving_ground(k: u32) -> Option<f32> {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    step(&mut controller, &tuning, idle(), true);
    for _ in 1..k {
        step(&mut controller, &tuning, idle(), false);
    }
    step(&mut controller, &tuning, jump(), false).velocity.y
}

/// The grace counter is decremented before the jump check, so with a
/// window of 10 a jump lands up to 9 ticks after the last grounded tick and
/// is refused on the 10th.
#[test]
fn test_jump_within_grace_window() {
    let grace = MovementTuning::default().jump_grace_ticks;
    assert_eq!(grace, 10);
    for k in 1..=9 {
        assert_eq!(jump_after_leaving_ground(k), Some(500.0), "k = {k}");
    }
    assert_eq!(jump_after_leaving_ground(10), None);
}

#[test]
fn test_jump_on_grounded_tick() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    let command = step(&mut controller, &tuning, jump(), true);
    assert_eq!(command.velocity.y, Some(500.0));
}

#[test]
fn test_no_jump_without_ground() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    let command = step(&mut controller, &tuning, jump(), false);
    assert_eq!(command.velocity.y, None);
    assert_eq!(controller.jump_grace_ticks_remaining(), 0);
}

#[test]
fn test_jump_allowed_during_dash() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    step(&mut controller, &tuning, dash(), true);
    let input = MovementInput {
        jump: true,
        ..default()
    };
    let command = step(&mut controller, &tuning, input, true);
    assert_eq!(command.velocity.y, Some(500.0));
    assert!(command.velocity.x.unwrap() > tuning.base_speed);
}

// -----------------------------------------------------------------------------
// Damage tests
// -----------------------------------------------------------------------------

#[test]
fn test_knockback_opposes_velocity() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    let knockback = controller
        .handle_damage(&tuning, Vec2::new(3.0, 4.0))
        .unwrap();
    assert!((knockback - Vec2::new(-240.0, -320.0)).length() < 1e-3);
    assert!(controller.is_damaged());
}

#[test]
fn test_knockback_at_rest_opposes_facing() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();

    let knockback = controller.handle_damage(&tuning, Vec2::ZERO).unwrap();
    assert_eq!(knockback, Vec2::new(-400.0, 0.0));
}

#[test]
fn test_damage_is_idempotent() {
    let tuning = MovementTuning::default();
    let incoming = Vec2::new(200.0, 0.0);

    let mut once = PlayerController::default();
    let mut body_once = incoming;
    if let Some(knockback) = once.handle_damage(&tuning, body_once) {
        body_once = knockback;
    }

    let mut twice = PlayerController::default();
    let mut body_twice = incoming;
    for _ in 0..2 {
        if let Some(knockback) = twice.handle_damage(&tuning, body_twice) {
            body_twice = knockback;
        }
    }

    assert_eq!(body_once, body_twice);
    assert_eq!(body_twice, Vec2::new(-400.0, 0.0));
    assert_eq!(twice.damage_state(), DamageState::Locked { elapsed_ms: 0.0 });
}

#[test]
fn test_damage_lock_clears_on_fifteenth_tick() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();
    controller.handle_damage(&tuning, Vec2::X);

    for tick in 1..=14 {
        let command = step(&mut controller, &tuning, right(), true);
        assert!(!command.damage_cleared, "tick {tick}");
        assert!(controller.is_damaged(), "tick {tick}");
    }

    let command = step(&mut controller, &tuning, right(), true);
    assert!(command.damage_cleared);
    assert!(!controller.is_damaged());
    assert_eq!(command.velocity.x, Some(200.0));
}

#[test]
fn test_damage_lock_ignores_input() {
    let tuning = MovementTuning::default();
    let mut controller = PlayerController::default();
    step(&mut controller, &tuning, idle(), true);
    controller.handle_damage(&tuning, Vec2::X);

    let everything = MovementInput {
        left: true,
        right: true,
        jump: true,
        dash: true,
    };
    let command = step(&mut controller, &tuning, everything, true);

    assert_eq!(command.velocity, VelocityCommand::default());
    assert_eq!(command.animation, None);
    assert_eq!(controller.dash_ticks_remaining(), 0);
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

#[test]
fn test_update_player_system_writes_intent_and_clip() {
    let mut world = World::new();
    world.insert_resource(MovementTuning::default());
    world.insert_resource(right());
    world.insert_resource(Time::<()>::default());
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(16));

    let player = world
        .spawn((
            Player,
            PlayerController::default(),
            GroundContact { on_ground: true },
            Transform::default(),
            AnimationController::default(),
            VelocityIntent::default(),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(update_player);
    schedule.run(&mut world);

    let intent = world.get::<VelocityIntent>(player).unwrap();
    assert_eq!(intent.0.x, Some(200.0));
    assert_eq!(intent.0.y, None);
    let animation = world.get::<AnimationController>(player).unwrap();
    assert_eq!(animation.state, AnimationState::RunRight);
}

#[test]
fn test_commit_overwrites_only_commanded_axes() {
    let mut world = World::new();
    let body = world
        .spawn((
            VelocityIntent(VelocityCommand::horizontal(-200.0)),
            LinearVelocity(Vec2::new(50.0, -30.0)),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(commit_velocity_intents);
    schedule.run(&mut world);

    assert_eq!(
        world.get::<LinearVelocity>(body).unwrap().0,
        Vec2::new(-200.0, -30.0)
    );
    assert_eq!(
        world.get::<VelocityIntent>(body).unwrap().0,
        VelocityCommand::default()
    );

    // Nothing pending: the body keeps what physics gave it
    schedule.run(&mut world);
    assert_eq!(
        world.get::<LinearVelocity>(body).unwrap().0,
        Vec2::new(-200.0, -30.0)
    );
}
