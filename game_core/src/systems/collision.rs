use crate::{overlaps, Ball, Config, Events, Paddle, Side, Surface};
use hecs::World;

/// Reflect the ball off the top and bottom edges.
///
/// Position is left alone; the ball may sit past the wall for a frame.
pub fn bounce_off_walls(world: &mut World, surface: &Surface, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.top() < 0.0 || ball.bottom() > surface.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Deflect the ball off any paddle it overlaps.
///
/// Paddles are resolved player first, so if both overlap in one frame the
/// opponent's deflection is the one that sticks.
pub fn check_paddle_hits(
    world: &mut World,
    surface: &Surface,
    config: &Config,
    events: &mut Events,
) {
    // Collect paddles without holding a borrow on the world
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();
    paddles.sort_by_key(|p| p.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !overlaps(ball, paddle) {
                continue;
            }

            // -1 at the paddle's top edge, 1 at its bottom; not clamped
            let collide_point = (ball.pos.y - paddle.center_y()) / (paddle.height / 2.0);
            let angle = collide_point * config.max_bounce_angle;
            let vx = (ball.speed * angle.cos()).abs();

            match paddle.side {
                Side::Player => {
                    ball.vel.x = vx;
                    if ball.pos.x < surface.width / 2.0 {
                        ball.vel.x = ball.vel.x.abs();
                    }
                    events.ball_hit_player = true;
                }
                Side::Opponent => {
                    ball.vel.x = -vx;
                    events.ball_hit_opponent = true;
                }
            }
            ball.vel.y = ball.speed * angle.sin();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_opponent, create_paddle};
    use glam::Vec2;
    use std::f32::consts::FRAC_PI_4;

    fn setup_world() -> (World, Config, Surface, Events) {
        (
            World::new(),
            Config::new(),
            Surface::new(800.0, 400.0),
            Events::new(),
        )
    }

    fn ball(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, surface, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(400.0, 10.0), Vec2::new(5.0, -5.0), &config),
        );

        bounce_off_walls(&mut world, &surface, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel, Vec2::new(5.0, 5.0), "Only vy should flip");
        assert_eq!(ball.pos.y, 10.0, "Position is not pushed out of the wall");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, surface, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(400.0, 392.0), Vec2::new(-5.0, 4.0), &config),
        );

        bounce_off_walls(&mut world, &surface, &mut events);

        assert_eq!(ball(&world).vel, Vec2::new(-5.0, -4.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_touching_wall_does_not_bounce() {
        let (mut world, config, surface, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(400.0, 11.0), Vec2::new(5.0, -5.0), &config),
        );

        bounce_off_walls(&mut world, &surface, &mut events);

        assert_eq!(ball(&world).vel.y, -5.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_player_paddle_center() {
        let (mut world, config, surface, mut events) = setup_world();
        create_paddle(&mut world, Paddle::new(Side::Player, 20.0, 100.0, &config));
        create_ball(
            &mut world,
            Ball::new(Vec2::new(40.0, 145.0), Vec2::new(-5.0, 3.0), &config),
        );

        check_paddle_hits(&mut world, &surface, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.x, 5.0, "Centre hit goes straight back");
        assert_eq!(ball.vel.y, 0.0);
        assert!(events.ball_hit_player);
        assert!(!events.ball_hit_opponent);
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle_center() {
        let (mut world, config, surface, mut events) = setup_world();
        create_opponent(
            &mut world,
            Paddle::new(Side::Opponent, 768.0, 155.0, &config),
            config.opponent_speed,
        );
        create_ball(
            &mut world,
            Ball::new(Vec2::new(760.0, 200.0), Vec2::new(5.0, 5.0), &config),
        );

        check_paddle_hits(&mut world, &surface, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.x, -5.0);
        assert_eq!(ball.vel.y, 0.0);
        assert!(events.ball_hit_opponent);
    }

    #[test]
    fn test_hit_position_sets_deflection_angle() {
        let (mut world, config, surface, mut events) = setup_world();
        create_paddle(&mut world, Paddle::new(Side::Player, 20.0, 100.0, &config));
        // Bottom edge of the paddle: collide point 1, angle 45 degrees
        create_ball(
            &mut world,
            Ball::new(Vec2::new(40.0, 190.0), Vec2::new(-5.0, 0.0), &config),
        );

        check_paddle_hits(&mut world, &surface, &config, &mut events);

        let ball = ball(&world);
        let expected = 5.0 * FRAC_PI_4.sin();
        assert!((ball.vel.x - expected).abs() < 1e-5);
        assert!((ball.vel.y - expected).abs() < 1e-5, "Bottom hit deflects down");
    }

    #[test]
    fn test_top_hit_deflects_upward() {
        let (mut world, config, surface, mut events) = setup_world();
        create_opponent(
            &mut world,
            Paddle::new(Side::Opponent, 768.0, 155.0, &config),
            config.opponent_speed,
        );
        create_ball(
            &mut world,
            Ball::new(Vec2::new(760.0, 170.0), Vec2::new(5.0, 0.0), &config),
        );

        check_paddle_hits(&mut world, &surface, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.x < 0.0);
        assert!(ball.vel.y < 0.0, "Top hit deflects up");
    }

    #[test]
    fn test_collide_point_is_not_clamped() {
        let (mut world, config, surface, mut events) = setup_world();
        create_paddle(&mut world, Paddle::new(Side::Player, 20.0, 100.0, &config));
        // Ball centre below the paddle but its box still overlaps
        create_ball(
            &mut world,
            Ball::new(Vec2::new(40.0, 199.0), Vec2::new(-5.0, 0.0), &config),
        );

        check_paddle_hits(&mut world, &surface, &config, &mut events);

        let angle = (54.0 / 45.0) * FRAC_PI_4;
        assert!((ball(&world).vel.y - 5.0 * angle.sin()).abs() < 1e-5);
    }

    #[test]
    fn test_no_collision_away_from_paddles() {
        let (mut world, config, surface, mut events) = setup_world();
        create_paddle(&mut world, Paddle::new(Side::Player, 20.0, 100.0, &config));
        create_ball(
            &mut world,
            Ball::new(Vec2::new(400.0, 200.0), Vec2::new(5.0, 5.0), &config),
        );

        check_paddle_hits(&mut world, &surface, &config, &mut events);

        assert_eq!(ball(&world).vel, Vec2::new(5.0, 5.0));
        assert!(!events.ball_hit_player);
    }

    #[test]
    fn test_double_collision_opponent_wins() {
        let (mut world, mut config, _surface, mut events) = setup_world();
        let surface = Surface::new(100.0, 400.0);
        config.ball_radius = 60.0;
        create_paddle(&mut world, Paddle::new(Side::Player, 20.0, 155.0, &config));
        create_opponent(
            &mut world,
            Paddle::new(Side::Opponent, 68.0, 155.0, &config),
            config.opponent_speed,
        );
        create_ball(
            &mut world,
            Ball::new(Vec2::new(50.0, 200.0), Vec2::new(5.0, 0.0), &config),
        );

        check_paddle_hits(&mut world, &surface, &config, &mut events);

        assert!(events.ball_hit_player && events.ball_hit_opponent);
        assert_eq!(ball(&world).vel.x, -5.0, "Opponent branch runs last");
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, surface, mut events) = setup_world();
        create_paddle(&mut world, Paddle::new(Side::Player, 20.0, 100.0, &config));

        bounce_off_walls(&mut world, &surface, &mut events);
        check_paddle_hits(&mut world, &surface, &config, &mut events);

        assert_eq!(events, Events::default());
    }
}
