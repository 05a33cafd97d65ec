//! Level domain: the built-in level geometry.

use std::ops::RangeInclusive;

use bevy::prelude::*;

use crate::combat::Patrol;

pub const LEVEL_SIZE: Vec2 = Vec2::new(960.0, 600.0);
pub const WALL_THICKNESS: f32 = 40.0;
pub const TURN_MARKER_SIZE: Vec2 = Vec2::new(16.0, 32.0);

/// An axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub center: Vec2,
    pub size: Vec2,
}

impl Block {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x * 0.5
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x * 0.5
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }
}

/// A stretch of ground one enemy paces, bounded by turn markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolLane {
    pub left: f32,
    pub right: f32,
    pub surface: f32,
    pub heading: Patrol,
}

impl PatrolLane {
    /// Lane spanning the full top of `block`.
    pub fn across(block: &Block, heading: Patrol) -> Self {
        Self {
            left: block.left(),
            right: block.right(),
            surface: block.top(),
            heading,
        }
    }

    /// Markers sit just outside each end so an enemy turns before its
    /// body leaves the lane.
    pub fn turn_markers(&self) -> [Block; 2] {
        let y = self.surface + TURN_MARKER_SIZE.y * 0.5;
        let half = TURN_MARKER_SIZE.x * 0.5;
        [
            Block::new(self.left - half, y, TURN_MARKER_SIZE.x, TURN_MARKER_SIZE.y),
            Block::new(self.right + half, y, TURN_MARKER_SIZE.x, TURN_MARKER_SIZE.y),
        ]
    }

    pub fn spawn_point(&self, body_height: f32) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, self.surface + body_height * 0.5)
    }
}

/// A row of stars dropped from the top of the level.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRow {
    pub start: Vec2,
    pub step: f32,
    pub count: u32,
    pub bounce: RangeInclusive<f32>,
}

impl StarRow {
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.count).map(|i| self.start + Vec2::X * self.step * i as f32)
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LevelLayout {
    /// Floor and platforms.
    pub ground: Vec<Block>,
    /// Level bounds.
    pub walls: Vec<Block>,
    pub lanes: Vec<PatrolLane>,
    pub player_spawn: Vec2,
    pub stars: StarRow,
}

impl Default for LevelLayout {
    fn default() -> Self {
        let half = LEVEL_SIZE * 0.5;
        let t = WALL_THICKNESS;

        let floor = Block::new(0.0, -half.y + t * 0.5, LEVEL_SIZE.x, t);
        let ledge = Block::new(250.0, -40.0, 280.0, 24.0);
        let ground = vec![
            floor,
            Block::new(-300.0, -120.0, 240.0, 24.0),
            ledge,
            Block::new(-80.0, 80.0, 200.0, 24.0),
            Block::new(320.0, 180.0, 160.0, 24.0),
        ];

        let walls = vec![
            Block::new(-half.x - t * 0.5, 0.0, t, LEVEL_SIZE.y + 2.0 * t),
            Block::new(half.x + t * 0.5, 0.0, t, LEVEL_SIZE.y + 2.0 * t),
            Block::new(0.0, half.y + t * 0.5, LEVEL_SIZE.x, t),
        ];

        let lanes = vec![
            PatrolLane {
                left: -200.0,
                right: 200.0,
                surface: floor.top(),
                heading: Patrol::Left,
            },
            PatrolLane::across(&ledge, Patrol::Left),
        ];

        Self {
            ground,
            walls,
            lanes,
            player_spawn: Vec2::new(-half.x + 80.0, floor.top() + 24.0),
            stars: StarRow {
                start: Vec2::new(-half.x + 64.0, half.y - 20.0),
                step: 70.0,
                count: 12,
                bounce: 0.4..=0.8,
            },
        }
    }
}

impl LevelLayout {
    pub fn turn_markers(&self) -> impl Iterator<Item = Block> + '_ {
        self.lanes.iter().flat_map(|lane| lane.turn_markers())
    }
}
