use glam::Vec2;

use crate::{Ball, Paddle};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounding box of a circle
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        let half = Vec2::splat(radius);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn from_rect(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

impl From<&Ball> for Aabb {
    fn from(ball: &Ball) -> Self {
        Aabb::from_circle(ball.pos, ball.radius)
    }
}

impl From<&Paddle> for Aabb {
    fn from(paddle: &Paddle) -> Self {
        Aabb::from_rect(
            Vec2::new(paddle.x, paddle.y),
            Vec2::new(paddle.width, paddle.height),
        )
    }
}

/// Ball vs paddle test using the ball's bounding box
pub fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    Aabb::from(ball).overlaps(&Aabb::from(paddle))
}
