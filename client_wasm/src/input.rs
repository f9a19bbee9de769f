//! Pointer input handling

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::Game;

/// Pointer Y relative to the canvas's top edge
pub fn pointer_y(canvas: &HtmlCanvasElement, event: &MouseEvent) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    (event.client_y() as f64 - rect.top()) as f32
}

/// Route `mousemove` on the canvas to the player paddle
pub fn attach_pointer(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let target = canvas.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let y = pointer_y(&target, &event);
        game.borrow_mut().pointer_moved(y);
    });

    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    // Listener lives as long as the page
    on_move.forget();
    Ok(())
}
