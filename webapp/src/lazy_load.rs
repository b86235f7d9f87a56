use anyhow::Result;
use tracing::debug;
use web_sys::Document;

use common::{
    media::{MediaKind, wants_lazy_loading},
    selectors::{self, class},
};

use crate::dom::{self, js_err};

// one pass over the media already in the page; nothing added later is touched
pub fn sweep(document: &Document) -> Result<usize> {
    let mut marked = 0;

    for (kind, selector) in [
        (MediaKind::Image, selectors::IMAGES),
        (MediaKind::Video, selectors::VIDEOS),
    ] {
        for element in dom::query_all(document, selector)? {
            let is_logo = element.class_list().contains(class::LOGO);

            if wants_lazy_loading(kind, element.has_attribute("loading"), is_logo) {
                element.set_attribute("loading", "lazy").map_err(js_err)?;
                marked += 1;
            }
        }
    }

    debug!(marked, "deferred loading for media");
    Ok(marked)
}
