use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

use crate::error::FxError;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Run `tick` on every animation frame, forever.
///
/// The closure re-schedules itself, so it has to reach its own handle: the
/// slot is created empty, filled with the closure, and the closure reads the
/// slot back each frame.
pub fn raf_loop(mut tick: impl FnMut(f64) + 'static) -> Result<(), FxError> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let inner = slot.clone();
    *slot.borrow_mut() = Some(Closure::new(move |time: f64| {
        tick(time);
        if let Some(cb) = inner.borrow().as_ref() {
            if let Err(e) = request(cb.as_ref().unchecked_ref()) {
                log::warn!("animation loop stopped: {e}");
            }
        }
    }));

    // bound so the `slot` borrow ends before `slot` itself is dropped
    let started = match slot.borrow().as_ref() {
        Some(cb) => request(cb.as_ref().unchecked_ref()),
        None => Ok(()),
    };
    started
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) -> Result<(), FxError> {
    let cb = Closure::once_into_js(f);
    request(cb.unchecked_ref())
}

fn request(cb: &js_sys::Function) -> Result<(), FxError> {
    window()
        .ok_or(FxError::Missing("window"))?
        .request_animation_frame(cb)?;
    Ok(())
}
