//! Toolbar wiring: file input, playback, scrubber, grid/pitch/shape and presets.

use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement};

use super::app::App;
use super::dom;
use super::resize::request_recompute;
use crate::grid::{ControlValues, Preset};
use crate::shader::MaskShape;

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Re-reads the grid/pitch controls into the viewport and refits if needed.
fn sync_controls(app: &Rc<App>) {
    let values = dom::read_controls(&app.document);
    let grid_changed = app.state.borrow_mut().sync_from_controls(&values);
    if grid_changed {
        request_recompute(app);
    }
}

/// Pushes the initial settings into the controls so they agree with the viewport.
pub fn seed(app: &App) {
    let state = app.state.borrow();
    dom::write_controls(&app.document, &ControlValues::from_settings(state.grid(), state.pitch()));
    if let Some(select) = dom::by_id::<HtmlSelectElement>(&app.document, dom::SHAPE_SELECT) {
        select.set_value(state.shape().key());
    }
}

pub fn install(app: &Rc<App>) -> Result<(), JsValue> {
    let doc = &app.document;

    if let Some(input) = dom::control::<HtmlInputElement>(doc, dom::VIDEO_INPUT) {
        let app = app.clone();
        let el = input.clone();
        listen(&input, "change", move |_| {
            if let Some(file) = el.files().and_then(|files| files.get(0)) {
                app.load_file(&file);
            }
        })?;
    }

    if let Some(button) = dom::control::<HtmlElement>(doc, dom::PLAY_BUTTON) {
        let app = app.clone();
        listen(&button, "click", move |_| app.toggle_playback())?;
    }

    if let Some(timeline) = dom::control::<HtmlInputElement>(doc, dom::TIMELINE) {
        let app = app.clone();
        let el = timeline.clone();
        listen(&timeline, "input", move |_| app.seek(&el.value()))?;
    }

    if let Some(button) = dom::control::<HtmlElement>(doc, dom::FULLSCREEN_BUTTON) {
        let app = app.clone();
        listen(&button, "click", move |_| app.toggle_fullscreen())?;
    }

    for id in [dom::COLS_SELECT, dom::ROWS_SELECT, dom::PITCH_SLIDER] {
        if let Some(el) = dom::control::<HtmlElement>(doc, id) {
            let app = app.clone();
            listen(&el, "input", move |_| sync_controls(&app))?;
        }
    }

    if let Some(select) = dom::control::<HtmlSelectElement>(doc, dom::SHAPE_SELECT) {
        let app = app.clone();
        let el = select.clone();
        listen(&select, "change", move |_| match MaskShape::from_key(&el.value()) {
            Some(shape) => app.state.borrow_mut().set_shape(shape),
            None => log::warn!("unknown mask shape {:?}", el.value()),
        })?;
    }

    for preset in Preset::ALL {
        if let Some(button) = dom::control::<HtmlElement>(doc, preset.button_id()) {
            let app = app.clone();
            listen(&button, "click", move |_| {
                let mut values = dom::read_controls(&app.document);
                app.state.borrow_mut().apply_preset(preset, &mut values);
                dom::write_controls(&app.document, &values);
                log::info!("preset {:?}: {}x{}", preset, values.columns, values.rows);
                request_recompute(&app);
            })?;
        }
    }

    Ok(())
}
