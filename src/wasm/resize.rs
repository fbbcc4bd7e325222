//! Keeps the canvas fitted to its region. Every trigger funnels into
//! [`request_recompute`], which queues at most one layout pass per frame.

use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::ResizeObserver;

use super::app::App;
use super::dom;
use crate::fit::{container_styles, wrapper_styles, FitMode};

pub fn request_recompute(app: &Rc<App>) {
    if !app.state.borrow_mut().request_recompute() {
        return;
    }
    let app = app.clone();
    let cb = Closure::once_into_js(move || apply_resize(&app));
    if let Err(e) = queue_frame(&cb) {
        log::error!("could not queue resize: {:?}", e);
        app.state.borrow_mut().begin_frame();
    }
}

fn queue_frame(cb: &JsValue) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no window")?
        .request_animation_frame(cb.unchecked_ref())
}

/// Measures, fits and applies the new size to canvas, GL viewport and layout.
pub fn apply_resize(app: &App) {
    let measurements = dom::measure(&app.window, &app.document);
    let (dims, grid, folded) = {
        let mut state = app.state.borrow_mut();
        let folded = state.begin_frame();
        match state.recompute(&measurements) {
            Ok(dims) => (dims, state.grid(), folded),
            Err(e) => {
                log::warn!("skipping resize: {}", e);
                return;
            }
        }
    };
    log::debug!(
        "fit {}x{} grid into {}x{} ({} coalesced)",
        grid.columns(),
        grid.rows(),
        dims.width,
        dims.height,
        folded
    );

    if app.canvas.width() != dims.width {
        app.canvas.set_width(dims.width);
    }
    if app.canvas.height() != dims.height {
        app.canvas.set_height(dims.height);
    }
    dom::set_styles(
        &app.canvas,
        &[
            ("width", format!("{}px", dims.width)),
            ("height", format!("{}px", dims.height)),
        ],
    );
    app.renderer.resize(dims);

    if let Some(wrapper) = dom::wrapper(&app.document) {
        dom::set_styles(&wrapper, &wrapper_styles(grid));
    }
    dom::set_styles(&app.container, &container_styles(dims));
}

/// Subscribes to window resize, wrapper size changes and fullscreen transitions.
pub fn install(app: &Rc<App>) -> Result<(), JsValue> {
    let on_resize = {
        let app = app.clone();
        Closure::wrap(Box::new(move || request_recompute(&app)) as Box<dyn FnMut()>)
    };
    app.window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    match dom::wrapper(&app.document) {
        Some(wrapper) => match ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&wrapper);
                // lives as long as the page
                std::mem::forget(observer);
            }
            Err(e) => log::warn!("ResizeObserver unavailable: {:?}", e),
        },
        None => log::warn!("{} not found; fitting to window", dom::CANVAS_WRAPPER_SELECTOR),
    }
    on_resize.forget();

    let on_fullscreen = {
        let app = app.clone();
        Closure::wrap(Box::new(move || {
            let mode = if app.document.fullscreen_element().is_some() {
                FitMode::Fullscreen
            } else {
                FitMode::Windowed
            };
            log::info!("fullscreen mode: {:?}", mode);
            app.state.borrow_mut().set_mode(mode);
            request_recompute(&app);
        }) as Box<dyn FnMut()>)
    };
    app.document
        .add_event_listener_with_callback("fullscreenchange", on_fullscreen.as_ref().unchecked_ref())?;
    on_fullscreen.forget();

    Ok(())
}
