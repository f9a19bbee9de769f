//! Browser client for canvas Pong
//!
//! Wires `game_core` to a `<canvas>` element: 2D-context drawing, mouse
//! input for the player paddle and a requestAnimationFrame loop.
//! Note: only built for the wasm32 target

#![cfg(target_arch = "wasm32")]

macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into())
    };
}

mod canvas;
mod frame;
mod input;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasSurface;
use frame::AnimationFrames;
use game_core::{Config, FrameSource, GameRng, GameState, Surface};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// One running game bound to a canvas
pub struct Game {
    state: GameState,
    rng: GameRng,
    canvas: CanvasSurface,
}

impl Game {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let surface = Surface::new(canvas.width() as f32, canvas.height() as f32);
        if surface.width <= 0.0 || surface.height <= 0.0 {
            return Err(JsValue::from_str("Canvas must have a positive size"));
        }

        Ok(Self {
            state: GameState::new(surface, Config::new()),
            rng: GameRng::from_entropy(),
            canvas: CanvasSurface::new(canvas)?,
        })
    }

    /// Simulate and draw one frame
    pub fn frame(&mut self) {
        game_core::frame(&mut self.state, &mut self.rng, &mut self.canvas);

        if self.state.events.ball_served {
            if let Some(ball) = self.state.ball() {
                console_log!("Ball served: vx={:.2} vy={:.2}", ball.vel.x, ball.vel.y);
            }
        }
    }

    pub fn pointer_moved(&mut self, pointer_y: f32) {
        game_core::pointer_moved(&mut self.state, pointer_y);
    }
}

/// Start the game on an existing canvas element
#[wasm_bindgen]
pub fn start_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let game = Rc::new(RefCell::new(Game::new(&canvas)?));
    console_log!("Pong started on {}x{} canvas", canvas.width(), canvas.height());

    input::attach_pointer(&canvas, game.clone())?;
    AnimationFrames::new(window).run(move || game.borrow_mut().frame());
    Ok(())
}

/// Start the game on the canvas with id `canvas_id`
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element '{}' is not a canvas", canvas_id)))?;
    start_game(canvas)
}
