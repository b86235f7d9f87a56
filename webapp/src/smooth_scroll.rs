use anyhow::Result;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use web_sys::{Document, Event, ScrollBehavior, ScrollToOptions, Window};

use common::{
    config::SiteConfig,
    page::{anchor_target, hash_target, scroll_target},
    selectors,
};

use crate::{
    dom::{self, js_err},
    menu::MenuHandle,
};

pub struct SmoothScroll {
    _click: EventListener,
    // the initial jump to location.hash, pending until layout settles
    _settle: Option<Timeout>,
}

impl SmoothScroll {
    pub fn bind(
        window: &Window,
        document: &Document,
        config: &SiteConfig,
        menu: Option<MenuHandle>,
    ) -> Result<Self> {
        let fallback = config.header_height;

        let (win, doc) = (window.clone(), document.clone());
        let click = EventListener::new_with_options(
            document,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if let Err(err) = on_click(event, &win, &doc, fallback, menu.as_ref()) {
                    warn!("in-page navigation failed: {err}");
                }
            },
        );

        let hash = window.location().hash().map_err(js_err)?;
        let settle = match hash_target(&hash) {
            Some(id) if dom::on_homepage(window) => {
                let id = id.to_owned();
                let (win, doc) = (window.clone(), document.clone());

                debug!(id, "scrolling to initial fragment once layout settles");
                Some(Timeout::new(config.hash_settle_ms, move || {
                    if let Err(err) = scroll_to_section(&win, &doc, &id, fallback) {
                        warn!("failed to scroll to initial fragment: {err}");
                    }
                }))
            }
            _ => None,
        };

        Ok(SmoothScroll {
            _click: click,
            _settle: settle,
        })
    }
}

fn on_click(
    event: &Event,
    window: &Window,
    document: &Document,
    fallback: f64,
    menu: Option<&MenuHandle>,
) -> Result<()> {
    let Some(origin) = dom::event_element(event) else {
        return Ok(());
    };
    let Some(anchor) = origin.closest(selectors::IN_PAGE_ANCHOR).map_err(js_err)? else {
        return Ok(());
    };
    let Some(href) = anchor.get_attribute("href") else {
        return Ok(());
    };
    let Some(id) = anchor_target(&href, dom::on_homepage(window)) else {
        return Ok(());
    };

    event.prevent_default();
    scroll_to_section(window, document, id, fallback)?;

    if let Some(menu) = menu
        && menu.is_open()
    {
        menu.close();
    }

    Ok(())
}

// returns whether anything with that id existed to scroll to
pub fn scroll_to_section(window: &Window, document: &Document, id: &str, fallback: f64) -> Result<bool> {
    let Some(target) = document.get_element_by_id(id) else {
        debug!(id, "no element for in-page anchor");
        return Ok(false);
    };

    let top = scroll_target(
        target.get_bounding_client_rect().top(),
        window.page_y_offset().map_err(js_err)?,
        dom::header_height(document, fallback),
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    Ok(true)
}
