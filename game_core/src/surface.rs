use glam::Vec2;

/// Drawing surface dimensions, fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ball serve point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// X coordinate of the net
    pub fn net_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Clamp a paddle's top edge so the whole paddle stays on the surface.
    ///
    /// Zero wins when the paddle is taller than the surface, so this never
    /// panics the way `f32::clamp` would.
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.min(self.height - paddle_height).max(0.0)
    }
}
