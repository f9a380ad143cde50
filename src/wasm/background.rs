use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, IntersectionObserver,
    IntersectionObserverEntry, Window,
};

use super::dom::{by_id, listen, prefers_reduced_motion, viewport};
use super::frame::raf_loop;
use crate::error::FxError;
use crate::lines::{polyline, Line, LineField, SAMPLE_STEP};

struct Background {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: LineField,
    visible: bool,
}

impl Background {
    fn resize(&mut self, window: &Window) {
        let vp = viewport(window);
        self.canvas.set_width(vp.width as u32);
        self.canvas.set_height(vp.height as u32);
        self.field
            .regenerate(vp.width, vp.height, &mut js_sys::Math::random);
    }

    fn draw(&mut self) {
        let (w, h) = (self.field.width(), self.field.height());
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.field.tick();
        for line in self.field.lines() {
            if let Err(e) = stroke_line(&self.ctx, line, w) {
                log::debug!("line stroke failed: {e:?}");
            }
        }
    }
}

fn stroke_line(ctx: &CanvasRenderingContext2d, line: &Line, width: f64) -> Result<(), JsValue> {
    let points = polyline(line, width, SAMPLE_STEP);
    let Some(((x0, y0), rest)) = points.split_first() else {
        return Ok(());
    };
    ctx.begin_path();
    ctx.move_to(*x0, *y0);
    for (x, y) in rest {
        ctx.line_to(*x, *y);
    }

    let gradient = ctx.create_linear_gradient(0.0, line.base_y - 50.0, width, line.base_y + 50.0);
    gradient.add_color_stop(0.0, &line.color(0.0))?;
    gradient.add_color_stop(0.5, &line.color(0.5))?;
    gradient.add_color_stop(1.0, &line.color(0.0))?;
    js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str("strokeStyle"), &gradient)?;
    ctx.set_line_width(1.0);
    ctx.stroke();
    Ok(())
}

pub fn mount(window: &Window, document: &Document) -> Result<(), FxError> {
    let canvas: HtmlCanvasElement = by_id(document, "background-canvas")?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(FxError::Missing("2d context"))?
        .dyn_into()
        .map_err(|_| FxError::Missing("2d context"))?;

    if prefers_reduced_motion(window) {
        return Err(FxError::ReducedMotion);
    }

    let mut bg = Background {
        canvas: canvas.clone(),
        ctx,
        field: LineField::default(),
        visible: true,
    };
    bg.resize(window);
    let bg = Rc::new(RefCell::new(bg));

    // Rendering pauses while the canvas is scrolled out of view.
    let on_intersect = {
        let bg = bg.clone();
        Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                bg.borrow_mut().visible = entry.is_intersecting();
            }
        })
    };
    let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())?;
    observer.observe(&canvas);
    on_intersect.forget();

    {
        let bg = bg.clone();
        let win = window.clone();
        listen(window, "resize", move |_| bg.borrow_mut().resize(&win))?;
    }

    raf_loop(move |_| {
        let mut bg = bg.borrow_mut();
        if bg.visible {
            bg.draw();
        }
    })?;

    log::debug!("background lines mounted");
    Ok(())
}
