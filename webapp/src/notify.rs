use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use anyhow::Result;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Window, js_sys};

use common::{
    config::SiteConfig,
    selectors::{self, class},
    toast::{ToastKind, ToastPhase, ToastTiming, toast_markup},
};

use crate::dom::{self, js_err};

const GLOBAL_NAME: &str = "notify";

struct Toast {
    id: u64,
    element: Element,
    phase: ToastPhase,
    _close: Option<EventListener>,
    _dismiss: Timeout,
    _fade: Option<Timeout>,
}

struct NotifierInner {
    document: Document,
    container: Element,
    timing: ToastTiming,
    toasts: RefCell<Vec<Toast>>,
    next_id: Cell<u64>,
}

// Notifier
//
// toast notifications, reachable from page scripts as window.notify(message, type).  every
// toast owns its timers and close listener, and timers only hold weak references back to the
// notifier, so dropping it cancels everything still pending
pub struct Notifier {
    inner: Rc<NotifierInner>,
    window: Window,
    _global: Closure<dyn Fn(JsValue, JsValue)>,
}

impl Notifier {
    pub fn bind(window: &Window, document: &Document, config: &SiteConfig) -> Result<Self> {
        let container = match document.get_element_by_id(selectors::NOTIFICATION_CONTAINER_ID) {
            Some(container) => container,
            None => {
                let container = document.create_element("div").map_err(js_err)?;
                container.set_id(selectors::NOTIFICATION_CONTAINER_ID);
                container
                    .set_attribute("style", selectors::NOTIFICATION_CONTAINER_STYLE)
                    .map_err(js_err)?;
                dom::body(document)?.append_child(&container).map_err(js_err)?;
                container
            }
        };

        let inner = Rc::new(NotifierInner {
            document: document.clone(),
            container,
            timing: ToastTiming::from_config(config),
            toasts: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        });

        let handle = inner.clone();
        let global = Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
            let kind = ToastKind::parse(kind.as_string().as_deref());
            if let Err(err) = notify(&handle, &coerce_message(&message), &kind) {
                warn!("failed to show notification: {err}");
            }
        });

        js_sys::Reflect::set(window, &JsValue::from_str(GLOBAL_NAME), global.as_ref())
            .map_err(js_err)?;

        Ok(Notifier {
            inner,
            window: window.clone(),
            _global: global,
        })
    }

    pub fn notify(&self, message: &str, kind: &ToastKind) -> Result<()> {
        notify(&self.inner, message, kind)
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Err(err) = js_sys::Reflect::delete_property(&self.window, &JsValue::from_str(GLOBAL_NAME)) {
            warn!("failed to remove global notify: {err:?}");
        }
    }
}

// mirrors String(value) for what page scripts realistically pass, with null/undefined
// rendering as nothing
fn coerce_message(value: &JsValue) -> String {
    if value.is_undefined() || value.is_null() {
        return String::new();
    }

    value
        .as_string()
        .unwrap_or_else(|| String::from(value.unchecked_ref::<js_sys::Object>().to_string()))
}

fn notify(inner: &Rc<NotifierInner>, message: &str, kind: &ToastKind) -> Result<()> {
    prune(inner);

    let element = inner.document.create_element("div").map_err(js_err)?;
    element.set_class_name(&kind.class_name());
    element.set_attribute("role", "alert").map_err(js_err)?;
    element.set_inner_html(&toast_markup(message));

    let id = inner.next_id.get();
    inner.next_id.set(id + 1);

    let close = dom::query_in(&element, selectors::TOAST_CLOSE)?.map(|button| {
        let weak = Rc::downgrade(inner);
        EventListener::new(&button, "click", move |_| with_inner(&weak, |inner| dismiss(inner, id)))
    });

    inner.container.append_child(&element).map_err(js_err)?;

    let weak = Rc::downgrade(inner);
    let auto_dismiss = Timeout::new(inner.timing.visible_ms, move || {
        with_inner(&weak, |inner| dismiss(inner, id))
    });

    debug!(id, kind = kind.as_str(), "showing notification");

    inner.toasts.borrow_mut().push(Toast {
        id,
        element,
        phase: ToastPhase::Shown,
        _close: close,
        _dismiss: auto_dismiss,
        _fade: None,
    });

    Ok(())
}

fn with_inner(weak: &Weak<NotifierInner>, f: impl FnOnce(&Rc<NotifierInner>)) {
    if let Some(inner) = weak.upgrade() {
        f(&inner);
    }
}

fn dismiss(inner: &Rc<NotifierInner>, id: u64) {
    let mut toasts = inner.toasts.borrow_mut();
    let Some(toast) = toasts.iter_mut().find(|toast| toast.id == id) else {
        return;
    };

    // someone else already took it out of the page
    if toast.element.parent_node().is_none() {
        toast.phase = toast.phase.finish();
        return;
    }

    let (phase, fade) = toast.phase.dismiss();
    toast.phase = phase;
    if !fade {
        return;
    }

    if let Err(err) = toast.element.class_list().remove_1(class::TOAST_VISIBLE) {
        warn!("failed to fade notification: {err:?}");
    }

    let weak = Rc::downgrade(inner);
    toast._fade = Some(Timeout::new(inner.timing.fade_ms, move || {
        with_inner(&weak, |inner| finish(inner, id))
    }));
}

fn finish(inner: &Rc<NotifierInner>, id: u64) {
    let mut toasts = inner.toasts.borrow_mut();
    if let Some(toast) = toasts.iter_mut().find(|toast| toast.id == id) {
        toast.element.remove();
        toast.phase = toast.phase.finish();
    }
}

// finished toasts are dropped lazily, never from inside one of their own timers
fn prune(inner: &NotifierInner) {
    inner
        .toasts
        .borrow_mut()
        .retain(|toast| toast.phase != ToastPhase::Removed);
}
