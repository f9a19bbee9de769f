/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between paddle and side edge
    pub const PADDLE_COLOR: &'static str = "#42b983";

    // Opponent
    pub const OPPONENT_SPEED: f32 = 4.0; // pixels per frame
    pub const TRACKING_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 11.0;
    pub const BALL_SPEED: f32 = 5.0;
    pub const BALL_VELOCITY_X: f32 = 5.0;
    pub const BALL_VELOCITY_Y: f32 = 5.0;
    pub const BALL_COLOR: &'static str = "#fff";
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    pub const SERVE_VY_MIN: f32 = 3.0;
    pub const SERVE_VY_MAX: f32 = 6.0; // exclusive

    // Net
    pub const NET_COLOR: &'static str = "#fff3";
    pub const NET_DASH: f32 = 10.0;
}
