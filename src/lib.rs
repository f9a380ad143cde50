#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Landing page effects: hero zoom, 3D gallery ticker, background lines,
//! sticky nav and mobile menu. The numeric core is target independent; the
//! DOM glue under `wasm` only builds for `wasm32`.

pub mod error;
pub mod interp;
pub mod lines;
pub mod nav;
pub mod progress;
pub mod ticker;
pub mod zoom;

// Host-side image converter.
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod convert;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Window};

    use crate::error::FxError;

    mod background;
    mod dom;
    mod frame;
    mod gallery;
    mod hero;
    mod menu;

    /// Which effects are running on the page.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Mounted {
        pub menu: bool,
        pub sticky_nav: bool,
        pub anchors: bool,
        pub hero: bool,
        pub background: bool,
        pub gallery: bool,
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let mounted = mount_all(&window, &document);
        log::info!("landing effects: {mounted:?}");
        Ok(())
    }

    /// Mount every effect independently; one missing piece never stops the
    /// others.
    pub fn mount_all(window: &Window, document: &Document) -> Mounted {
        Mounted {
            menu: settle("menu", menu::mount_menu(document)),
            sticky_nav: settle("sticky nav", menu::mount_sticky_nav(window, document)),
            anchors: settle("anchors", menu::mount_anchors(document)),
            hero: settle("hero zoom", hero::mount(window, document)),
            background: settle("background", background::mount(window, document)),
            gallery: settle("gallery", gallery::mount(window, document)),
        }
    }

    fn settle(name: &str, result: Result<(), FxError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) if e.is_silent() => {
                log::debug!("{name} skipped: {e}");
                false
            }
            Err(e) => {
                log::warn!("{name} disabled: {e}");
                false
            }
        }
    }
}
