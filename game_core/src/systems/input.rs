use hecs::World;

use crate::{Paddle, Side, Surface};

/// Snap the player paddle's centre to the pointer, clamped to the surface
pub fn apply_pointer(world: &mut World, surface: &Surface, pointer_y: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = surface.clamp_paddle_y(pointer_y - paddle.height / 2.0, paddle.height);
        }
    }
}
