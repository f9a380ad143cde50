use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement, Window};

use super::dom::{listen, query, query_all, root, set_style, viewport};
use super::frame::raf_loop;
use crate::error::FxError;
use crate::ticker::{ItemTransform, Ticker, TickerConfig};

fn apply(item: &HtmlElement, t: &ItemTransform, card_width: f64) {
    set_style(item, "z-index", &t.z_index.to_string());
    set_style(item, "width", &format!("{card_width}px"));
    set_style(
        item,
        "transform",
        &format!(
            "translate3d({}px, -50%, 0) scale({}) rotateY({}deg)",
            t.x, t.scale, t.rotate_y
        ),
    );
    set_style(item, "opacity", &t.opacity.to_string());
}

/// Always-on ticker; unlike the hero and background it does not check
/// reduced motion or visibility.
pub fn mount(window: &Window, document: &Document) -> Result<(), FxError> {
    let container: HtmlElement = query(document, ".gallery-3d-content")?;
    let items: Vec<HtmlElement> = query_all(&root(document)?, ".gallery-3d-item")?;
    if items.is_empty() {
        return Err(FxError::Missing(".gallery-3d-item"));
    }

    let count = items.len();
    let ticker = Rc::new(RefCell::new(Ticker::new(
        count,
        TickerConfig::for_viewport(viewport(window).width),
    )));

    {
        let ticker = ticker.clone();
        let win = window.clone();
        listen(window, "resize", move |_| {
            ticker.borrow_mut().resize(viewport(&win).width)
        })?;
    }

    raf_loop(move |_| {
        let mut ticker = ticker.borrow_mut();
        ticker.advance();
        let container_width = container.get_bounding_client_rect().width();
        let card_width = ticker.config().card_width;
        for (item, t) in items.iter().zip(ticker.layout(container_width)) {
            apply(item, &t, card_width);
        }
    })?;

    log::debug!("gallery ticker mounted with {count} items");
    Ok(())
}
