use crate::{Params, Side, Surface};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_color: &'static str,
    pub opponent_speed: f32,
    pub tracking_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_velocity: Vec2,
    pub ball_color: &'static str,
    pub max_bounce_angle: f32,
    pub serve_vy_min: f32,
    pub serve_vy_max: f32,
    pub net_color: &'static str,
    pub net_dash: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_color: Params::PADDLE_COLOR,
            opponent_speed: Params::OPPONENT_SPEED,
            tracking_dead_zone: Params::TRACKING_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_velocity: Vec2::new(Params::BALL_VELOCITY_X, Params::BALL_VELOCITY_Y),
            ball_color: Params::BALL_COLOR,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_vy_min: Params::SERVE_VY_MIN,
            serve_vy_max: Params::SERVE_VY_MAX,
            net_color: Params::NET_COLOR,
            net_dash: Params::NET_DASH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fixed X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side, surface: &Surface) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => surface.width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Y position (top edge) that vertically centres a paddle
    pub fn paddle_start_y(&self, surface: &Surface) -> f32 {
        surface.height / 2.0 - self.paddle_height / 2.0
    }
}
