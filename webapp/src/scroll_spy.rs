use anyhow::Result;
use gloo_events::EventListener;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use common::{
    config::SiteConfig,
    rate::Throttle,
    selectors::{self, class},
    spy::{active_section, reference_line, section_id},
};

use crate::dom::{self, js_err};

struct Section {
    element: HtmlElement,
    id: String,
}

// the pairing between nav links and the sections they point at is resolved once; only the
// offsets are re-read on scroll, since images loading in will move them around
struct SpyState {
    window: Window,
    document: Document,
    links: Vec<Element>,
    sections: Vec<Section>,
    header_fallback: f64,
    offset: f64,
}

impl SpyState {
    fn update(&self) -> Result<()> {
        let line = reference_line(
            dom::scroll_y(&self.window),
            dom::header_height(&self.document, self.header_fallback),
            self.offset,
        );

        let tops = self
            .sections
            .iter()
            .map(|section| f64::from(section.element.offset_top()));
        let current = active_section(tops, line).map(|idx| format!("#{}", self.sections[idx].id));

        for link in &self.links {
            link.class_list().remove_1(class::ACTIVE).map_err(js_err)?;
            link.remove_attribute("aria-current").map_err(js_err)?;
        }

        let Some(href) = current else {
            return Ok(());
        };

        if let Some(link) = self
            .links
            .iter()
            .find(|link| link.get_attribute("href").as_deref() == Some(href.as_str()))
        {
            link.class_list().add_1(class::ACTIVE).map_err(js_err)?;
            link.set_attribute("aria-current", "page").map_err(js_err)?;
        }

        Ok(())
    }
}

pub struct ScrollSpy {
    _listener: EventListener,
}

impl ScrollSpy {
    pub fn bind(window: &Window, document: &Document, config: &SiteConfig) -> Result<Option<Self>> {
        if !dom::on_homepage(window) {
            debug!("not on the homepage, scroll spy stays off");
            return Ok(None);
        }

        let links = dom::query_all(document, selectors::SPY_LINK)?;

        let sections: Vec<Section> = links
            .iter()
            .filter_map(|link| link.get_attribute("href"))
            .filter_map(|href| {
                let id = section_id(&href)?.to_owned();
                let element = document
                    .get_element_by_id(&id)?
                    .dyn_into::<HtmlElement>()
                    .ok()?;

                Some(Section { element, id })
            })
            .collect();

        if sections.is_empty() {
            return Ok(None);
        }

        debug!(sections = sections.len(), "scroll spy tracking sections");

        let state = SpyState {
            window: window.clone(),
            document: document.clone(),
            links,
            sections,
            header_fallback: config.header_height,
            offset: config.scroll_offset,
        };
        state.update()?;

        let mut throttle = Throttle::new(config.throttle_ms);
        let listener = EventListener::new(window, "scroll", move |_| {
            if !throttle.ready(dom::now()) {
                return;
            }

            if let Err(err) = state.update() {
                warn!("failed to update scroll spy: {err}");
            }
        });

        Ok(Some(ScrollSpy {
            _listener: listener,
        }))
    }
}
