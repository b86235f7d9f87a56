use anyhow::Result;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, NodeList, Window, js_sys};

use common::{page::is_homepage, selectors};

// web-sys hands back bare JsValues as errors, which carry nothing but their debug output
pub fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("javascript error: {err:?}"))
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::Error::msg("window has no document"))
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document
        .body()
        .ok_or_else(|| anyhow::Error::msg("document has no body"))
}

pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    document.query_selector(selector).map_err(js_err)
}

pub fn query_in(parent: &Element, selector: &str) -> Result<Option<Element>> {
    parent.query_selector(selector).map_err(js_err)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    document.query_selector_all(selector).map(elements).map_err(js_err)
}

pub fn query_all_in(parent: &Element, selector: &str) -> Result<Vec<Element>> {
    parent.query_selector_all(selector).map(elements).map_err(js_err)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

// milliseconds, only ever compared against itself.  performance.now() is monotonic; the wall
// clock is only a fallback for documents without a Performance object
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn inner_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn on_homepage(window: &Window) -> bool {
    let path = window.location().pathname().unwrap_or_default();
    is_homepage(&path)
}

// measured on every use since the header changes height when it collapses on scroll
pub fn header_height(document: &Document, fallback: f64) -> f64 {
    query(document, selectors::HEADER)
        .ok()
        .flatten()
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(fallback)
}

// trailing-edge debounce
//
// gloo's Timeout cancels itself when dropped, so replacing the pending timeout is all it takes
// to restart the quiet period.  dropping the Debouncer cancels whatever is still pending
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Debouncer {
            delay_ms,
            pending: None,
        }
    }

    pub fn call<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Timeout::new(self.delay_ms, callback));
    }
}
