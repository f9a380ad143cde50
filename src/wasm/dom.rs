//! Thin helpers over `web_sys` shared by the effect adapters.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::FxError;
use crate::zoom::Viewport;

/// Look up `id` and cast it; a missing element is a silent skip.
pub fn by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, FxError> {
    document
        .get_element_by_id(id)
        .ok_or(FxError::Missing(id))?
        .dyn_into::<T>()
        .map_err(|_| FxError::Missing(id))
}

pub fn query<T: JsCast>(document: &Document, selector: &'static str) -> Result<T, FxError> {
    document
        .query_selector(selector)?
        .ok_or(FxError::Missing(selector))?
        .dyn_into::<T>()
        .map_err(|_| FxError::Missing(selector))
}

/// Every match of `selector` under `root` that casts to `T`.
pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, FxError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<T>().ok())
        .collect())
}

/// The `<html>` element, for document-wide [`query_all`].
pub fn root(document: &Document) -> Result<Element, FxError> {
    document
        .document_element()
        .ok_or(FxError::Missing("html"))
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport(window: &Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport {
        width: dim(window.inner_width()),
        height: dim(window.inner_height()),
    }
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("style {property}={value} rejected: {e:?}");
    }
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::debug!("class {class} toggle failed: {e:?}");
    }
}

/// Attach `handler` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), FxError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
