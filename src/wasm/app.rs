use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, File, HtmlCanvasElement, HtmlElement, HtmlInputElement, HtmlVideoElement,
    Window,
};

use super::dom;
use super::render::LedRenderer;
use crate::playback::TimelineView;
use crate::viewport::ViewportState;

/// A user-chosen file attached to a hidden `<video>` element.
///
/// Dropping it stops playback, detaches the element and releases the object URL.
pub struct LoadedVideo {
    element: HtmlVideoElement,
    url: String,
    ready: Rc<Cell<bool>>,
    on_ready: Closure<dyn FnMut()>,
}

impl LoadedVideo {
    fn load(document: &Document, file: &File) -> Result<Self, JsValue> {
        let url = web_sys::Url::create_object_url_with_blob(file)?;
        let element: HtmlVideoElement = document.create_element("video")?.dyn_into()?;
        element.set_attribute("playsinline", "true")?;
        element.style().set_property("display", "none")?;
        element.set_loop(true);
        element.set_volume(1.0);

        let ready = Rc::new(Cell::new(false));
        let on_ready = {
            let ready = ready.clone();
            let element = element.clone();
            Closure::wrap(Box::new(move || {
                if ready.replace(true) {
                    return;
                }
                log::info!("video ready ({:.1}s)", element.duration());
                if let Err(e) = element.play() {
                    log::warn!("autoplay rejected: {:?}", e);
                }
            }) as Box<dyn FnMut()>)
        };
        element.add_event_listener_with_callback("canplay", on_ready.as_ref().unchecked_ref())?;
        element.set_src(&url);

        if let Some(body) = document.body() {
            body.append_child(&element)?;
        }

        Ok(Self {
            element,
            url,
            ready,
            on_ready,
        })
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }
}

impl Drop for LoadedVideo {
    fn drop(&mut self) {
        let _ = self.element.pause();
        let _ = self
            .element
            .remove_event_listener_with_callback("canplay", self.on_ready.as_ref().unchecked_ref());
        self.element.remove_attribute("src").ok();
        self.element.load();
        self.element.remove();
        web_sys::Url::revoke_object_url(&self.url).ok();
    }
}

/// Everything one running viewer owns.
pub struct App {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub container: HtmlElement,
    pub state: RefCell<ViewportState>,
    pub renderer: LedRenderer,
    pub video: RefCell<Option<LoadedVideo>>,
}

impl App {
    /// Replaces the current video with `file`. The old one is released first.
    pub fn load_file(&self, file: &File) {
        self.video.borrow_mut().take();
        log::info!("loading {} ({} bytes)", file.name(), file.size());
        match LoadedVideo::load(&self.document, file) {
            Ok(v) => *self.video.borrow_mut() = Some(v),
            Err(e) => log::error!("could not load video: {:?}", e),
        }
    }

    pub fn toggle_playback(&self) {
        let video = self.video.borrow();
        let Some(v) = video.as_ref().filter(|v| v.is_ready()) else {
            return;
        };
        if v.element.paused() {
            if let Err(e) = v.element.play() {
                log::warn!("play failed: {:?}", e);
            }
        } else if let Err(e) = v.element.pause() {
            log::warn!("pause failed: {:?}", e);
        }
    }

    pub fn seek(&self, raw: &str) {
        let video = self.video.borrow();
        let Some(v) = video.as_ref().filter(|v| v.is_ready()) else {
            return;
        };
        if let Some(t) = crate::playback::scrub_target(raw, v.element.duration()) {
            v.element.set_current_time(t);
        }
    }

    pub fn toggle_fullscreen(&self) {
        if self.document.fullscreen_element().is_none() {
            if let Err(e) = self.container.request_fullscreen() {
                log::warn!("fullscreen request failed: {:?}", e);
            }
        } else {
            self.document.exit_fullscreen();
        }
    }

    fn render_frame(&self) {
        let params = self.state.borrow().shade_params();
        let video = self.video.borrow();
        let ready = video.as_ref().filter(|v| v.is_ready());
        self.renderer.draw(ready.map(|v| v.element()), &params);

        if let Some(v) = ready {
            if let Some(view) = TimelineView::from_media(v.element.current_time(), v.element.duration()) {
                self.show_timeline(&view);
            }
        }
    }

    fn show_timeline(&self, view: &TimelineView) {
        if let Some(timeline) = dom::by_id::<HtmlInputElement>(&self.document, dom::TIMELINE) {
            timeline.set_max(&view.max.to_string());
            timeline.set_value(&view.value.to_string());
        }
        if let Some(label) = dom::by_id::<HtmlElement>(&self.document, dom::TIME_DISPLAY) {
            label.set_text_content(Some(&view.label));
        }
    }
}

/// Animation loop: one draw per browser frame.
pub fn start_loop(app: Rc<App>) -> Result<(), JsValue> {
    // `f` holds the frame closure so it can re-queue itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        app.render_frame();

        let next = f.borrow();
        if let (Some(w), Some(cb)) = (window(), next.as_ref()) {
            if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    let win = window().ok_or("no window")?;
    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
