use anyhow::Result;
use gloo_events::EventListener;
use tracing::warn;
use web_sys::{Document, Element, Window};

use common::{
    config::SiteConfig,
    page::is_scrolled,
    rate::Throttle,
    selectors::{self, class},
};

use crate::dom::{self, js_err};

pub struct HeaderScroll {
    _listener: EventListener,
}

impl HeaderScroll {
    pub fn bind(window: &Window, document: &Document, config: &SiteConfig) -> Result<Option<Self>> {
        let Some(header) = dom::query(document, selectors::HEADER)? else {
            return Ok(None);
        };

        let threshold = config.scrolled_threshold;
        render(&header, window, threshold)?;

        let win = window.clone();
        let mut throttle = Throttle::new(config.throttle_ms);
        let listener = EventListener::new(window, "scroll", move |_| {
            if !throttle.ready(dom::now()) {
                return;
            }

            if let Err(err) = render(&header, &win, threshold) {
                warn!("failed to update header style: {err}");
            }
        });

        Ok(Some(HeaderScroll {
            _listener: listener,
        }))
    }
}

fn render(header: &Element, window: &Window, threshold: f64) -> Result<()> {
    let scrolled = is_scrolled(dom::scroll_y(window), threshold);

    header
        .class_list()
        .toggle_with_force(class::SCROLLED, scrolled)
        .map_err(js_err)?;

    Ok(())
}
