use glam::Vec2;

use crate::components::{Paddle, Side};
use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Bounding box of a paddle
    pub fn of_paddle(paddle: &Paddle) -> Self {
        Self::from_center_size(paddle.center(), paddle.size)
    }

    /// Square box around a circle, the extent used for ball collisions
    pub fn of_circle(center: Vec2, radius: f32) -> Self {
        Self::from_center_size(center, Vec2::splat(radius * 2.0))
    }

    /// Check if two boxes overlap (touching counts)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// The rectangle the ball and paddles move in; origin top-left, y down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.field_width, config.field_height)
    }

    /// Where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Starting centre of a paddle
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        Vec2::new(config.paddle_x(side), self.height / 2.0)
    }

    /// Clamp a centre Y so an object of `half_height` stays inside
    pub fn clamp_y(&self, y: f32, half_height: f32) -> f32 {
        y.clamp(half_height, self.height - half_height)
    }
}
