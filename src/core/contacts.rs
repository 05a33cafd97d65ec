//! Core domain: contact queue between the physics step and the controllers.
//!
//! Collision starts reported by the physics step are classified into
//! [`ContactEvent`]s during `TickSet::Sample` and dispatched to their
//! controllers in FIFO order before any controller runs for the tick.

use std::collections::{HashSet, VecDeque};

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{ContactHazard, Enemy, PatrolController, TurnMarker};
use crate::movement::{MovementTuning, Player, PlayerController};
use crate::pickups::{PickupSensor, Score, ScoreChanged, Star};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    /// An enemy touched a turn marker.
    Reverse { enemy: Entity },
    /// The player touched an enemy hazard.
    Damage { player: Entity },
    /// The player overlapped a star.
    Collect { player: Entity, star: Entity },
}

#[derive(Resource, Debug, Default)]
pub struct ContactQueue {
    pending: VecDeque<ContactEvent>,
}

impl ContactQueue {
    pub fn push(&mut self, event: ContactEvent) {
        self.pending.push_back(event);
    }

    pub fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, ContactEvent> {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Classify collision starts from the last physics step into contact events.
pub(crate) fn collect_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    mut queue: ResMut<ContactQueue>,
    players: Query<(), With<Player>>,
    enemies: Query<(), With<Enemy>>,
    markers: Query<(), With<TurnMarker>>,
    hazards: Query<&ContactHazard>,
    sensors: Query<&PickupSensor>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (first, second) in pairs {
            if enemies.contains(first) && markers.contains(second) {
                queue.push(ContactEvent::Reverse { enemy: first });
                break;
            }

            if !players.contains(first) {
                continue;
            }

            if hazards.contains(second) {
                queue.push(ContactEvent::Damage { player: first });
                break;
            }

            if let Ok(sensor) = sensors.get(second) {
                queue.push(ContactEvent::Collect {
                    player: first,
                    star: sensor.star,
                });
                break;
            }
        }
    }
}

/// Drain the queue and hand each event to the controller it concerns.
/// Events naming despawned entities are skipped.
pub(crate) fn dispatch_contacts(
    mut commands: Commands,
    mut queue: ResMut<ContactQueue>,
    tuning: Res<MovementTuning>,
    mut score: ResMut<Score>,
    mut score_changed: MessageWriter<ScoreChanged>,
    mut players: Query<(&mut PlayerController, &mut LinearVelocity), With<Player>>,
    mut patrols: Query<&mut PatrolController, With<Enemy>>,
    stars: Query<&Star>,
) {
    let mut collected = HashSet::new();

    for event in queue.drain() {
        match event {
            ContactEvent::Reverse { enemy } => {
                let Ok(mut patrol) = patrols.get_mut(enemy) else {
                    continue;
                };
                let heading = patrol.reverse();
                debug!("Enemy {:?} reversed, now heading {:?}", enemy, heading);
            }
            ContactEvent::Damage { player } => {
                let Ok((mut controller, mut velocity)) = players.get_mut(player) else {
                    continue;
                };
                if let Some(knockback) = controller.handle_damage(&tuning, velocity.0) {
                    velocity.0 = knockback;
                    info!(
                        "Player hit: knockback=({:.0}, {:.0}), locked for {}ms",
                        knockback.x, knockback.y, tuning.damage_lock_ms
                    );
                }
            }
            ContactEvent::Collect { player, star } => {
                // A star can be reported again before its despawn is applied
                if !collected.insert(star) {
                    continue;
                }
                let Ok(pickup) = stars.get(star) else {
                    continue;
                };
                let Ok((mut controller, _)) = players.get_mut(player) else {
                    continue;
                };

                controller.restore_dash();
                let total = score.add(pickup.value);
                score_changed.write(ScoreChanged {
                    delta: pickup.value,
                    total,
                });
                commands.entity(star).despawn();
            }
        }
    }
}
