//! Element lookup, measurement and style helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

use crate::fit::Measurements;
use crate::grid::ControlValues;

pub const CANVAS_CONTAINER: &str = "canvas-container";
pub const CANVAS_WRAPPER_SELECTOR: &str = ".canvas-wrapper";
pub const COLS_SELECT: &str = "ledColsSelect";
pub const ROWS_SELECT: &str = "ledRowsSelect";
pub const PITCH_SLIDER: &str = "pitchSlider";
pub const SHAPE_SELECT: &str = "shapeSelect";
pub const VIDEO_INPUT: &str = "videoInput";
pub const PLAY_BUTTON: &str = "playBtn";
pub const TIMELINE: &str = "timeline";
pub const TIME_DISPLAY: &str = "timeDisplay";
pub const FULLSCREEN_BUTTON: &str = "fullscreenBtn";

/// Typed lookup by id; `None` if the element is absent or of another type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Like [`by_id`] but logs a warning when the control is missing.
pub fn control<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let found = by_id::<T>(document, id);
    if found.is_none() {
        log::warn!("#{} not found; control disabled", id);
    }
    found
}

pub fn wrapper(document: &Document) -> Option<HtmlElement> {
    document
        .query_selector(CANVAS_WRAPPER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn set_styles(el: &HtmlElement, styles: &[(&'static str, String)]) {
    let style = el.style();
    for (name, value) in styles {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("failed to set {}: {:?}", name, e);
        }
    }
}

fn window_inner(window: &Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

fn screen_avail(window: &Window) -> (f64, f64) {
    match window.screen() {
        Ok(screen) => (
            screen.avail_width().unwrap_or(0) as f64,
            screen.avail_height().unwrap_or(0) as f64,
        ),
        Err(_) => (0.0, 0.0),
    }
}

/// Padding box of `el` (client size, excluding borders and scrollbars).
pub fn element_box(el: &Element) -> (f64, f64) {
    (el.client_width() as f64, el.client_height() as f64)
}

pub fn measure(window: &Window, document: &Document) -> Measurements {
    Measurements {
        window: window_inner(window),
        wrapper: wrapper(document).map(|w| element_box(&w)),
        screen: screen_avail(window),
    }
}

/// Current string values of the grid selectors and pitch slider.
pub fn read_controls(document: &Document) -> ControlValues {
    ControlValues {
        columns: by_id::<HtmlSelectElement>(document, COLS_SELECT)
            .map(|s| s.value())
            .unwrap_or_default(),
        rows: by_id::<HtmlSelectElement>(document, ROWS_SELECT)
            .map(|s| s.value())
            .unwrap_or_default(),
        pitch: by_id::<HtmlInputElement>(document, PITCH_SLIDER)
            .map(|s| s.value())
            .unwrap_or_default(),
    }
}

pub fn write_controls(document: &Document, values: &ControlValues) {
    if let Some(s) = by_id::<HtmlSelectElement>(document, COLS_SELECT) {
        s.set_value(&values.columns);
    }
    if let Some(s) = by_id::<HtmlSelectElement>(document, ROWS_SELECT) {
        s.set_value(&values.rows);
    }
    if let Some(s) = by_id::<HtmlInputElement>(document, PITCH_SLIDER) {
        s.set_value(&values.pitch);
    }
}
