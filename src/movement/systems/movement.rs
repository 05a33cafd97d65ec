//! Movement domain: controller update, velocity commit and trail aging.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GroundContact, MovementInput, MovementTuning, Player, PlayerController, TickSignals,
    VelocityIntent,
};
use crate::sprites::AnimationController;

pub(crate) fn update_player(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut PlayerController,
            &GroundContact,
            &Transform,
            &mut AnimationController,
            &mut VelocityIntent,
        ),
        With<Player>,
    >,
) {
    let delta_ms = time.delta_secs() * 1000.0;

    for (mut controller, contact, transform, mut animation, mut intent) in &mut query {
        let signals = TickSignals {
            grounded: contact.on_ground,
            delta_ms,
            position: transform.translation.truncate(),
            frame: animation.current_frame,
        };

        let was_dashing = controller.dash_ticks_remaining() > 0;
        let command = controller.update(&tuning, *input, signals);

        if command.damage_cleared {
            info!("Damage lock cleared");
        }
        if command.dash_started {
            info!(
                "Dash started: direction={:?}, ticks={}",
                controller.facing(),
                controller.dash_ticks_remaining() + 1
            );
        }
        if was_dashing && controller.dash_ticks_remaining() == 0 {
            debug!("Dash ended: can_dash={}", controller.can_dash());
        }
        if let Some(state) = command.animation {
            animation.play(state);
        }

        intent.0 = command.velocity;
    }
}

/// Write every pending velocity intent into its body, then clear it.
pub(crate) fn commit_velocity_intents(
    mut query: Query<(&mut VelocityIntent, &mut LinearVelocity)>,
) {
    for (mut intent, mut velocity) in &mut query {
        let command = std::mem::take(&mut intent.0);
        command.apply_to(&mut velocity.0);
    }
}

pub(crate) fn age_after_images(mut query: Query<&mut PlayerController, With<Player>>) {
    for mut controller in &mut query {
        controller.age_trail();
    }
}
