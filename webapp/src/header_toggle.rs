use anyhow::Result;
use gloo_events::EventListener;
use tracing::warn;
use web_sys::{Document, Element};

use common::{
    menu::flip_expanded,
    selectors::{self, class},
};

use crate::dom::{self, js_err};

// standalone collapsible header used by the landing pages that don't carry the full nav
//
// unlike the burger menu this keeps no state of its own: aria-expanded on the button is the
// source of truth and the header class follows it
pub struct HeaderToggle {
    _listener: EventListener,
}

impl HeaderToggle {
    pub fn bind(document: &Document) -> Result<Option<Self>> {
        let Some(root) = dom::query(document, selectors::DR_HEADER)? else {
            return Ok(None);
        };

        let Some(toggle) = dom::query_in(&root, selectors::DR_TOGGLE)? else {
            return Ok(None);
        };

        if dom::query_in(&root, selectors::DR_NAV)?.is_none() {
            return Ok(None);
        }

        let button = toggle.clone();
        let listener = EventListener::new(&toggle, "click", move |_| {
            if let Err(err) = flip(&root, &button) {
                warn!("failed to toggle header nav: {err}");
            }
        });

        Ok(Some(HeaderToggle {
            _listener: listener,
        }))
    }
}

fn flip(root: &Element, toggle: &Element) -> Result<()> {
    let expanded = flip_expanded(toggle.get_attribute("aria-expanded").as_deref());

    toggle
        .set_attribute("aria-expanded", if expanded { "true" } else { "false" })
        .map_err(js_err)?;
    root.class_list()
        .toggle_with_force(class::DR_NAV_OPEN, expanded)
        .map_err(js_err)?;

    Ok(())
}
