//! Sticky navigation and mobile menu state.

/// Scroll offset after which the nav bar takes its compact `scrolled` style.
pub const STICKY_THRESHOLD: f64 = 100.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > STICKY_THRESHOLD
}

/// What the DOM adapter applies after a menu transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEffects {
    pub open: bool,
    pub aria_expanded: &'static str,
    /// `body.style.overflow`; the page is locked while the menu is open.
    pub body_overflow: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> MenuEffects {
        self.open = !self.open;
        self.effects()
    }

    pub fn close(&mut self) -> MenuEffects {
        self.open = false;
        self.effects()
    }

    /// Escape closes an open menu; every other key is ignored.
    pub fn on_key(&mut self, key: &str) -> Option<MenuEffects> {
        (key == "Escape" && self.open).then(|| self.close())
    }

    pub fn effects(&self) -> MenuEffects {
        MenuEffects {
            open: self.open,
            aria_expanded: if self.open { "true" } else { "false" },
            body_overflow: if self.open { "hidden" } else { "" },
        }
    }
}

/// Anchor target selector for an in-page link, if `href` is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}
