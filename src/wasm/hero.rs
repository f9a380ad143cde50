use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

use super::dom::{by_id, listen, prefers_reduced_motion, set_class, set_style, viewport};
use super::frame::next_frame;
use crate::error::FxError;
use crate::progress::{scroll_progress, ScrollGeometry};
use crate::zoom::{FrameGate, ZoomConfig, ZoomController, ZoomState};

const OVERLAY_CLASS: &str = "hero__portrait-fixed";

struct Hero {
    window: Window,
    wrapper: HtmlElement,
    original: HtmlElement,
    content: HtmlElement,
    overlay: HtmlElement,
    nav: Option<Element>,
    controller: ZoomController,
    gate: FrameGate,
    active: bool,
}

impl Hero {
    fn capture(&mut self) {
        let rect = self.original.get_bounding_client_rect();
        self.controller.set_initial(ZoomState::from_rect(
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        ));
    }

    fn update(&mut self) {
        let vp = viewport(&self.window);
        let progress = scroll_progress(&ScrollGeometry {
            element_top: self.wrapper.get_bounding_client_rect().top(),
            element_height: f64::from(self.wrapper.offset_height()),
            viewport_height: vp.height,
        });
        let frame = self.controller.frame(progress, &vp);

        let (left, top) = frame.offset();
        set_style(&self.overlay, "width", &format!("{}px", frame.width));
        set_style(&self.overlay, "height", &format!("{}px", frame.height));
        set_style(
            &self.overlay,
            "transform",
            &format!("translate({left}px, {top}px)"),
        );

        if frame.overlay_active != self.active {
            self.active = frame.overlay_active;
            set_class(&self.overlay, "active", self.active);
            let visibility = if self.active { "hidden" } else { "visible" };
            set_style(&self.original, "visibility", visibility);
        }
        set_class(&self.overlay, "fullscreen", frame.fullscreen);
        if let Some(nav) = &self.nav {
            set_class(nav, "hidden", frame.nav_hidden);
        }
        set_style(&self.content, "opacity", &frame.content_opacity.to_string());
        if let Some(opacity) = frame.overlay_opacity {
            set_style(&self.overlay, "opacity", &opacity.to_string());
        }
    }
}

/// Build the fixed overlay: a copy of the hero image plus an optional
/// caption taken from `data-zoom-caption` / `data-zoom-tagline` on the
/// wrapper.
fn create_overlay(
    document: &Document,
    face: &HtmlImageElement,
    wrapper: &HtmlElement,
) -> Result<HtmlElement, FxError> {
    let overlay: HtmlElement = document.create_element("div")?.unchecked_into();
    overlay.set_class_name(OVERLAY_CLASS);

    let img: HtmlImageElement = document.create_element("img")?.unchecked_into();
    img.set_src(&face.src());
    img.set_alt(&face.alt());
    overlay.append_child(&img)?;

    let caption = wrapper.get_attribute("data-zoom-caption");
    let tagline = wrapper.get_attribute("data-zoom-tagline");
    if caption.is_some() || tagline.is_some() {
        let text = document.create_element("div")?;
        text.set_class_name("hero-zoom-text");
        for (tag, value) in [("span", caption), ("strong", tagline)] {
            if let Some(value) = value {
                let el = document.create_element(tag)?;
                el.set_text_content(Some(&value));
                text.append_child(&el)?;
            }
        }
        overlay.append_child(&text)?;
    }

    document
        .body()
        .ok_or(FxError::Missing("body"))?
        .append_child(&overlay)?;
    Ok(overlay)
}

pub fn mount(window: &Window, document: &Document) -> Result<(), FxError> {
    let wrapper: HtmlElement = by_id(document, "heroWrapper")?;
    let original: HtmlElement = by_id(document, "heroPortrait")?;
    let content: HtmlElement = by_id(document, "heroContent")?;
    let _hero: Element = by_id(document, "hero")?;
    let face: HtmlImageElement = by_id(document, "heroFace")?;
    let nav = document.get_element_by_id("nav");

    if prefers_reduced_motion(window) {
        return Err(FxError::ReducedMotion);
    }

    let overlay = create_overlay(document, &face, &wrapper)?;
    let mut hero = Hero {
        window: window.clone(),
        wrapper,
        original,
        content,
        overlay,
        nav,
        controller: ZoomController::new(
            ZoomState::from_rect(0.0, 0.0, 0.0, 0.0),
            ZoomConfig::default(),
        ),
        gate: FrameGate::default(),
        active: false,
    };
    hero.capture();
    hero.update();
    let hero = Rc::new(RefCell::new(hero));

    {
        let hero = hero.clone();
        listen(window, "resize", move |_| {
            let mut h = hero.borrow_mut();
            h.capture();
            h.update();
        })?;
    }

    listen(window, "scroll", move |_| {
        if !hero.borrow_mut().gate.request() {
            return;
        }
        let pending = hero.clone();
        let scheduled = next_frame(move || {
            let mut h = pending.borrow_mut();
            h.update();
            h.gate.complete();
        });
        if let Err(e) = scheduled {
            log::warn!("hero frame not scheduled: {e}");
            hero.borrow_mut().gate.complete();
        }
    })?;

    log::debug!("hero zoom mounted");
    Ok(())
}
