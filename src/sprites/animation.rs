//! Animation clips and playback.
//!
//! Actors request a named clip each tick; the controller only restarts
//! playback when the requested clip differs from the one already playing.

use bevy::prelude::*;

/// Animation clips known to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    RunLeft,
    RunRight,
    EnemyRun,
}

/// Frame range and timing of a clip within its sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    pub first_frame: u32,
    pub last_frame: u32,
    pub frames_per_second: f32,
    pub looping: bool,
}

impl AnimationState {
    pub fn name(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::RunLeft => "run-left",
            AnimationState::RunRight => "run-right",
            AnimationState::EnemyRun => "enemy-run",
        }
    }

    pub fn clip(&self) -> AnimationClip {
        match self {
            AnimationState::Idle => AnimationClip {
                first_frame: 4,
                last_frame: 4,
                frames_per_second: 20.0,
                looping: false,
            },
            AnimationState::RunLeft => AnimationClip {
                first_frame: 0,
                last_frame: 3,
                frames_per_second: 10.0,
                looping: true,
            },
            AnimationState::RunRight => AnimationClip {
                first_frame: 5,
                last_frame: 8,
                frames_per_second: 10.0,
                looping: true,
            },
            AnimationState::EnemyRun => AnimationClip {
                first_frame: 0,
                last_frame: 11,
                frames_per_second: 20.0,
                looping: true,
            },
        }
    }
}

/// Component for clip playback on an actor sprite.
#[derive(Component, Debug, Clone)]
pub struct AnimationController {
    /// Clip currently playing.
    pub state: AnimationState,
    /// Sprite sheet frame currently shown.
    pub current_frame: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::playing(AnimationState::Idle)
    }
}

impl AnimationController {
    pub fn playing(state: AnimationState) -> Self {
        Self {
            state,
            current_frame: state.clip().first_frame,
            frame_timer: 0.0,
        }
    }

    /// Play a clip. Returns false (and keeps the current frame) if it is
    /// already playing.
    pub fn play(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.current_frame = state.clip().first_frame;
        self.frame_timer = 0.0;
        true
    }

    /// Advance playback by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let clip = self.state.clip();
        if clip.first_frame == clip.last_frame {
            return;
        }

        let frame_duration = 1.0 / clip.frames_per_second;
        self.frame_timer += dt;

        while self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;
            if self.current_frame < clip.last_frame {
                self.current_frame += 1;
            } else if clip.looping {
                self.current_frame = clip.first_frame;
            } else {
                self.frame_timer = 0.0;
                break;
            }
        }
    }
}

pub(crate) fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<&mut AnimationController>,
) {
    let dt = time.delta_secs();
    for mut controller in &mut query {
        controller.advance(dt);
    }
}
