#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! LED video wall effect: a loaded video is drawn through a fragment shader
//! that quantizes it into a grid of lit LED cells, with the canvas kept at the
//! grid's aspect ratio in windowed and fullscreen modes.

pub mod config;
pub mod error;
pub mod fit;
pub mod grid;
pub mod playback;
pub mod schedule;
pub mod shader;
pub mod viewport;

pub use config::ViewerConfig;
pub use error::LedWallError;
pub use fit::{compute_fit, CanvasDims, DisplayRegion, FitMode};
pub use grid::{GridSpec, Pitch, Preset};
pub use playback::format_time;
pub use shader::MaskShape;
pub use viewport::ViewportState;

// Only compile browser glue when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::config::ViewerConfig;
    use crate::viewport::ViewportState;

    mod app;
    mod controls;
    pub mod dom;
    mod render;
    mod resize;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let Some(container) = dom::by_id::<web_sys::HtmlElement>(&document, dom::CANVAS_CONTAINER)
        else {
            log::warn!("#{} not found; LED wall not started", dom::CANVAS_CONTAINER);
            return Ok(());
        };

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        container.append_child(&canvas)?;

        let search = window.location().search().unwrap_or_default();
        let config = ViewerConfig::from_query(&search);
        log::info!(
            "led wall starting: {}x{} grid, pitch {:.2}, {:?}",
            config.grid.columns(),
            config.grid.rows(),
            config.pitch.get(),
            config.shape
        );

        let renderer = render::LedRenderer::new(&canvas)?;
        let app = Rc::new(app::App {
            window,
            document,
            canvas,
            container,
            state: RefCell::new(ViewportState::new(&config)),
            renderer,
            video: RefCell::new(None),
        });

        controls::seed(&app);
        controls::install(&app)?;
        resize::install(&app)?;
        resize::request_recompute(&app);
        app::start_loop(app)?;
        Ok(())
    }
}
