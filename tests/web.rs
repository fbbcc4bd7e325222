#![cfg(target_arch = "wasm32")]

use led_wall::fit::select_region;
use led_wall::wasm::dom;
use led_wall::FitMode;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn make_div(class: &str, width: &str, height: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    el.set_class_name(class);
    el.style().set_property("width", width).unwrap();
    el.style().set_property("height", height).unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn element_box_reports_client_size() {
    let el = make_div("probe", "300px", "200px");
    assert_eq!(dom::element_box(&el), (300.0, 200.0));
    el.remove();
}

#[wasm_bindgen_test]
fn zero_sized_wrapper_falls_back_to_window() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let el = make_div("canvas-wrapper", "0px", "0px");

    let m = dom::measure(&window, &document);
    assert_eq!(m.wrapper, Some((0.0, 0.0)));
    let region = select_region(FitMode::Windowed, &m).unwrap();
    assert_eq!((region.width(), region.height()), m.window);
    el.remove();
}

#[wasm_bindgen_test]
fn styles_land_on_element() {
    let el = make_div("styled", "10px", "10px");
    dom::set_styles(&el, &[("width", "42px".to_string()), ("--canvas-aspect", "2".to_string())]);
    assert_eq!(el.style().get_property_value("width").unwrap(), "42px");
    assert_eq!(el.style().get_property_value("--canvas-aspect").unwrap(), "2");
    el.remove();
}
