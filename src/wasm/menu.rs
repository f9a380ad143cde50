//! Mobile menu, sticky nav and in-page anchor scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use super::dom::{by_id, listen, query_all, root, set_class, set_style};
use crate::error::FxError;
use crate::nav::{anchor_target, is_scrolled, MenuEffects, MenuState};

struct Menu {
    state: MenuState,
    burger: HtmlElement,
    panel: HtmlElement,
    body: Option<HtmlElement>,
}

impl Menu {
    fn apply(&self, fx: MenuEffects) {
        set_class(&self.panel, "active", fx.open);
        set_class(&self.burger, "active", fx.open);
        if let Err(e) = self.burger.set_attribute("aria-expanded", fx.aria_expanded) {
            log::debug!("aria-expanded not set: {e:?}");
        }
        if let Some(body) = &self.body {
            set_style(body, "overflow", fx.body_overflow);
        }
    }
}

pub fn mount_menu(document: &Document) -> Result<(), FxError> {
    let burger: HtmlElement = by_id(document, "navBurger")?;
    let panel: HtmlElement = by_id(document, "mobileMenu")?;
    let links: Vec<Element> = query_all(&panel, ".mobile-menu__link")?;
    let cta = panel.query_selector(".mobile-menu__cta")?;

    let menu = Rc::new(RefCell::new(Menu {
        state: MenuState::default(),
        burger: burger.clone(),
        panel,
        body: document.body(),
    }));

    {
        let menu = menu.clone();
        listen(&burger, "click", move |_| {
            let mut m = menu.borrow_mut();
            let fx = m.state.toggle();
            m.apply(fx);
        })?;
    }

    for target in links.iter().chain(cta.iter()) {
        let menu = menu.clone();
        listen(target, "click", move |_| {
            let mut m = menu.borrow_mut();
            let fx = m.state.close();
            m.apply(fx);
        })?;
    }

    listen(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
            return;
        };
        let mut m = menu.borrow_mut();
        if let Some(fx) = m.state.on_key(&key) {
            m.apply(fx);
        }
    })?;

    log::debug!("mobile menu mounted");
    Ok(())
}

pub fn mount_sticky_nav(window: &Window, document: &Document) -> Result<(), FxError> {
    let nav: Element = by_id(document, "nav")?;
    let win = window.clone();
    listen(window, "scroll", move |_| {
        let y = win.scroll_y().unwrap_or(0.0);
        set_class(&nav, "scrolled", is_scrolled(y));
    })?;
    Ok(())
}

pub fn mount_anchors(document: &Document) -> Result<(), FxError> {
    let anchors: Vec<Element> = query_all(&root(document)?, "a[href^=\"#\"]")?;
    for anchor in &anchors {
        let doc = document.clone();
        let link = anchor.clone();
        listen(anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(selector) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        })?;
    }
    Ok(())
}
