use hecs::World;

use crate::{Ball, Config, Events, Paddle, Side, Surface, Tracking};

/// Everything one game session owns: the entity world plus its resources
pub struct GameState {
    pub world: World,
    pub surface: Surface,
    pub config: Config,
    pub events: Events,
}

impl GameState {
    /// Spawn both paddles centred vertically and the ball at the centre
    pub fn new(surface: Surface, config: Config) -> Self {
        let mut world = World::new();
        let start_y = config.paddle_start_y(&surface);

        create_paddle(
            &mut world,
            Paddle::new(
                Side::Player,
                config.paddle_x(Side::Player, &surface),
                start_y,
                &config,
            ),
        );
        create_opponent(
            &mut world,
            Paddle::new(
                Side::Opponent,
                config.paddle_x(Side::Opponent, &surface),
                start_y,
                &config,
            ),
            config.opponent_speed,
        );
        create_ball(
            &mut world,
            Ball::new(surface.center(), config.ball_velocity, &config),
        );

        Self {
            world,
            surface,
            config,
            events: Events::new(),
        }
    }

    /// Start from an empty world, for staging specific layouts
    pub fn empty(surface: Surface, config: Config) -> Self {
        Self {
            world: World::new(),
            surface,
            config,
            events: Events::new(),
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }
}

/// Helper to create a paddle entity with no behaviour of its own
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create a paddle that follows the ball
pub fn create_opponent(world: &mut World, paddle: Paddle, speed: f32) -> hecs::Entity {
    world.spawn((paddle, Tracking { speed }))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
