//! requestAnimationFrame-driven frame source

use std::cell::RefCell;
use std::rc::Rc;

use game_core::FrameSource;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Calls back once per display refresh until the page goes away
pub struct AnimationFrames {
    window: Window,
}

impl AnimationFrames {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) {
    if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        console_log!("requestAnimationFrame failed, frame loop stopped: {:?}", e);
    }
}

impl FrameSource for AnimationFrames {
    fn run<F: FnMut() + 'static>(self, mut frame: F) {
        // The closure re-arms itself, so it holds a handle to its own slot.
        // That cycle keeps it alive for the lifetime of the page.
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let next = slot.clone();
        let window = self.window.clone();

        *slot.borrow_mut() = Some(Closure::new(move || {
            frame();
            if let Some(callback) = next.borrow().as_ref() {
                request_frame(&window, callback);
            }
        }));

        if let Some(callback) = slot.borrow().as_ref() {
            request_frame(&self.window, callback);
        }
    }
}
