pub mod components;
pub mod config;
pub mod frame;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;
pub mod surface;
pub mod systems;

pub use components::*;
pub use config::*;
pub use frame::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use state::*;
pub use surface::*;

use systems::*;

/// Advance the simulation by one display frame
pub fn step<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    let GameState {
        world,
        surface,
        config,
        events,
    } = state;

    // Clear events at start of frame
    events.clear();

    // 1. Integrate ball position
    move_ball(world);

    // 2. Top/bottom walls
    bounce_off_walls(world, surface, events);

    // 3. Side edges re-serve from the centre
    check_out_of_bounds(world, surface, config, rng, events);

    // 4-5. Paddle deflections, player then opponent
    check_paddle_hits(world, surface, config, events);

    // 6. Opponent follows the ball
    track_ball(world, config.tracking_dead_zone);

    // 7. Keep the opponent on the surface
    clamp_trackers(world, surface);
}

/// Pointer moved to `pointer_y`, measured from the surface's top edge
pub fn pointer_moved(state: &mut GameState, pointer_y: f32) {
    apply_pointer(&mut state.world, &state.surface, pointer_y);
}

/// One full frame: simulate, then draw
pub fn frame<R, D>(state: &mut GameState, rng: &mut R, out: &mut D)
where
    R: RandomSource + ?Sized,
    D: DrawSurface + ?Sized,
{
    step(state, rng);
    render(state, out);
}
