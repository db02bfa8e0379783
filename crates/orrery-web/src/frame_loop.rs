use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(f.as_ref().unchecked_ref())
}

/// Drive `frame` once per display refresh, forever.
///
/// Each callback receives `performance.now()` in milliseconds and then
/// schedules the next one. The closure keeps a handle to itself so it stays
/// alive for the lifetime of the page.
pub fn run_frame_loop(mut frame: impl FnMut(f64) + 'static) -> Result<(), JsValue> {
    let performance = window()?
        .performance()
        .ok_or_else(|| JsValue::from_str("no `performance` on window"))?;

    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = handle.clone();

    *handle.borrow_mut() = Some(Closure::new(move || {
        frame(performance.now());

        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                log::error!("frame loop stopped: {err:?}");
            }
        }
    }));

    let first = handle.borrow();
    match first.as_ref() {
        Some(callback) => request_animation_frame(callback).map(|_| ()),
        None => Err(JsValue::from_str("frame callback missing")),
    }
}
