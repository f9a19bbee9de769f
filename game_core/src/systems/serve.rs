use crate::{Ball, Config, Events, RandomSource, Surface};
use hecs::World;

/// Re-serve the ball from the centre once it leaves through a side edge
pub fn check_out_of_bounds<R: RandomSource + ?Sized>(
    world: &mut World,
    surface: &Surface,
    config: &Config,
    rng: &mut R,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.left() < 0.0 || ball.right() > surface.width {
            ball.serve(surface.center(), config, rng);
            events.ball_served = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, GameRng};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Surface, Events, GameRng) {
        (
            World::new(),
            Config::new(),
            Surface::new(800.0, 400.0),
            Events::new(),
            GameRng::new(12345), // Fixed seed for deterministic tests
        )
    }

    fn ball(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_ball_resets_when_leaving_left() {
        let (mut world, config, surface, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(5.0, 90.0), Vec2::new(-5.0, 2.0), &config),
        );

        check_out_of_bounds(&mut world, &surface, &config, &mut rng, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos, surface.center());
        assert_eq!(ball.vel.x, 5.0);
        assert!((3.0..6.0).contains(&ball.vel.y.abs()));
        assert!(events.ball_served);
    }

    #[test]
    fn test_ball_resets_when_leaving_right() {
        let (mut world, config, surface, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(795.0, 300.0), Vec2::new(4.2, -1.0), &config),
        );

        check_out_of_bounds(&mut world, &surface, &config, &mut rng, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(ball.vel.x, -4.2, "Serve keeps horizontal magnitude");
        assert!(events.ball_served);
    }

    #[test]
    fn test_no_reset_when_ball_in_bounds() {
        let (mut world, config, surface, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(11.0, 200.0), Vec2::new(-5.0, 5.0), &config),
        );

        check_out_of_bounds(&mut world, &surface, &config, &mut rng, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos, Vec2::new(11.0, 200.0), "Touching the edge is in bounds");
        assert_eq!(ball.vel, Vec2::new(-5.0, 5.0));
        assert!(!events.ball_served);
    }
}
