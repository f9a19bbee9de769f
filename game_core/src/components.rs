use glam::Vec2;

use crate::{Config, RandomSource};

/// Which paddle an entity is. Ordering is the per-frame collision order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Player,   // left, pointer controlled
    Opponent, // right, tracks the ball
}

/// Paddle component - a rectangle that deflects the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // left edge, fixed after spawn
    pub y: f32, // top edge, clamped to the surface
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, config: &Config) -> Self {
        Self {
            side,
            x,
            y,
            width: config.paddle_width,
            height: config.paddle_height,
            color: config.paddle_color,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Ball-following behaviour; only the opponent paddle carries it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracking {
    pub speed: f32, // fixed step per frame
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32, // scalar speed used for paddle deflections
    pub color: &'static str,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, config: &Config) -> Self {
        Self {
            pos,
            vel,
            radius: config.ball_radius,
            speed: config.ball_speed,
            color: config.ball_color,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Re-serve from `center` towards the side the ball did not leave through
    pub fn serve<R: RandomSource + ?Sized>(
        &mut self,
        center: Vec2,
        config: &Config,
        rng: &mut R,
    ) {
        self.pos = center;
        self.vel.x = -self.vel.x;

        let sign = if rng.coin_flip() { 1.0 } else { -1.0 };
        self.vel.y = sign * rng.range(config.serve_vy_min..config.serve_vy_max);
    }
}
