use std::ops::Range;

use rand::{Rng, SeedableRng};

/// Source of randomness for ball serves
pub trait RandomSource {
    /// Fair coin
    fn coin_flip(&mut self) -> bool;

    /// Uniform value in the half-open `range`
    fn range(&mut self, range: Range<f32>) -> f32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source (`crypto.getRandomValues` on wasm)
    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    fn range(&mut self, range: Range<f32>) -> f32 {
        self.0.gen_range(range)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_player: bool,
    pub ball_hit_opponent: bool,
    pub ball_served: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_player = false;
        self.ball_hit_opponent = false;
        self.ball_served = false;
    }
}
