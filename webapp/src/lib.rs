use std::cell::RefCell;

use gloo_console::error as console_error;
use gloo_events::EventListener;
use tracing::{Level, debug, error, info, warn};
use wasm_bindgen::prelude::*;

mod app;
mod dom;
mod forms;
mod header_scroll;
mod header_toggle;
mod lazy_load;
mod menu;
mod notify;
mod scroll_spy;
mod smooth_scroll;

use app::App;
use common::{
    config::{CONFIG_ELEMENT_ID, SiteConfig, read_config},
    toast::ToastKind,
};

// the page is single threaded, so the live app sits in a thread local instead of a global
// flag per component.  Some(_) doubles as the "already initialised" guard
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static READY: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = dioxus_logger::init(Level::DEBUG) {
        console_error!(format!("failed to init logger: {err}"));
    }

    if let Err(err) = launch() {
        error!("sitekit failed to start: {err:#}");
    }
}

fn launch() -> anyhow::Result<()> {
    let document = dom::document()?;

    // ready_state() is the raw string from document.readyState
    if document.ready_state() == "loading" {
        debug!("document still loading, waiting for DOMContentLoaded");
        let listener = EventListener::once(&document, "DOMContentLoaded", |_| bootstrap());
        READY.with(|slot| *slot.borrow_mut() = Some(listener));
    } else {
        bootstrap();
    }

    Ok(())
}

fn page_config() -> SiteConfig {
    let raw = dom::document()
        .ok()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    read_config(raw.as_deref())
}

/// Binds every component to the current document.
///
/// Runs automatically once the document is ready; calling it again while the app is live does
/// nothing, calling it after [`teardown`] binds afresh.
#[wasm_bindgen]
pub fn bootstrap() {
    let live = APP.with(|slot| slot.borrow().is_some());
    if live {
        debug!("sitekit already initialised");
        return;
    }

    match App::bootstrap(&page_config()) {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(err) => error!("sitekit bootstrap failed: {err:#}"),
    }
}

/// Detaches every listener, cancels pending timers and removes `window.notify`.
#[wasm_bindgen]
pub fn teardown() {
    let app = APP.with(|slot| slot.borrow_mut().take());

    if app.is_some() {
        info!("tearing down sitekit");
    }

    drop(app);
}

/// Same as `window.notify`, for callers importing the module directly.
#[wasm_bindgen]
pub fn notify(message: &str, kind: Option<String>) {
    let kind = ToastKind::parse(kind.as_deref());

    APP.with(|slot| match slot.borrow().as_ref() {
        Some(app) => {
            if let Err(err) = app.notify(message, &kind) {
                warn!("failed to show notification: {err}");
            }
        }
        None => warn!("notify called before sitekit was initialised"),
    });
}
