use crate::{Ball, Paddle, Surface, Tracking};
use hecs::World;

/// Move ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Step tracking paddles a fixed distance towards the ball.
///
/// Paddles within `dead_zone` of the ball's height hold still.
pub fn track_ball(world: &mut World, dead_zone: f32) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, (paddle, tracking)) in world.query_mut::<(&mut Paddle, &Tracking)>() {
        let target = ball_y - paddle.center_y();
        if target.abs() > dead_zone {
            paddle.y += tracking.speed * target.signum();
        }
    }
}

/// Keep tracking paddles on the surface
pub fn clamp_trackers(world: &mut World, surface: &Surface) {
    for (_entity, (paddle, _tracking)) in world.query_mut::<(&mut Paddle, &Tracking)>() {
        paddle.y = surface.clamp_paddle_y(paddle.y, paddle.height);
    }
}
