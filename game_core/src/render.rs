//! Frame drawing against an abstract 2D surface

use glam::Vec2;

use crate::{GameState, Side};

/// Drawing operations a host surface must provide
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str);
    /// Stroke `from`..`to` with `dash` on, `dash` off
    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: f32, color: &str);
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, color: String },
    Circle { cx: f32, cy: f32, r: f32, color: String },
    DashedLine { from: Vec2, to: Vec2, dash: f32, color: String },
}

impl DrawSurface for Vec<DrawCommand> {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCommand::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.push(DrawCommand::Rect { x, y, w, h, color: color.to_string() });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str) {
        self.push(DrawCommand::Circle { cx, cy, r, color: color.to_string() });
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: f32, color: &str) {
        self.push(DrawCommand::DashedLine { from, to, dash, color: color.to_string() });
    }
}

/// Draw one frame: clear, net, player paddle, opponent paddle, ball
pub fn render<D: DrawSurface + ?Sized>(state: &GameState, out: &mut D) {
    let surface = &state.surface;
    out.clear_rect(0.0, 0.0, surface.width, surface.height);

    let net_x = surface.net_x();
    out.dashed_line(
        Vec2::new(net_x, 0.0),
        Vec2::new(net_x, surface.height),
        state.config.net_dash,
        state.config.net_color,
    );

    for side in [Side::Player, Side::Opponent] {
        if let Some(p) = state.paddle(side) {
            out.fill_rect(p.x, p.y, p.width, p.height, p.color);
        }
    }

    if let Some(ball) = state.ball() {
        out.fill_circle(ball.pos.x, ball.pos.y, ball.radius, ball.color);
    }
}
