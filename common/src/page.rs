// page-level predicates shared by the scroll components

pub fn is_homepage(path: &str) -> bool {
    matches!(path, "" | "/" | "/index.html" | "/index.htm")
}

// resolve the element id an in-page anchor points at
//
// "#id" works everywhere, "/#id" only when we are already on the homepage (anywhere else it is
// a real navigation and the browser should handle it).  "#" and "#!" are placeholders used by
// javascript-ish links and are never ours
pub fn anchor_target(href: &str, on_homepage: bool) -> Option<&str> {
    if matches!(href, "" | "#" | "#!") {
        return None;
    }

    if let Some(id) = href.strip_prefix('#') {
        return Some(id);
    }

    match href.strip_prefix("/#") {
        Some(id) if on_homepage && !id.is_empty() => Some(id),
        _ => None,
    }
}

// location.hash, minus the leading '#'
pub fn hash_target(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}

// document y coordinate that puts an element just below the fixed header
pub fn scroll_target(rect_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    rect_top + page_y_offset - header_height
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homepage_paths() {
        for path in ["", "/", "/index.html", "/index.htm"] {
            assert!(is_homepage(path), "{path}");
        }
        for path in ["/about", "/index.php", "/de/", "/index.html/"] {
            assert!(!is_homepage(path), "{path}");
        }
    }

    #[test]
    fn fragment_anchors() {
        assert_eq!(anchor_target("#pricing", false), Some("pricing"));
        assert_eq!(anchor_target("#pricing", true), Some("pricing"));
        assert_eq!(anchor_target("#", true), None);
        assert_eq!(anchor_target("#!", true), None);
        assert_eq!(anchor_target("", true), None);
    }

    #[test]
    fn rooted_anchors_only_on_homepage() {
        assert_eq!(anchor_target("/#contact", true), Some("contact"));
        assert_eq!(anchor_target("/#contact", false), None);
        assert_eq!(anchor_target("/#", true), None);
        assert_eq!(anchor_target("/kontakt", true), None);
    }

    #[test]
    fn hash_fragments() {
        assert_eq!(hash_target("#pricing"), Some("pricing"));
        assert_eq!(hash_target("#"), None);
        assert_eq!(hash_target(""), None);
    }

    #[test]
    fn target_lands_under_header() {
        // element 300px below the viewport top while scrolled 1000px down, 72px header
        assert_eq!(scroll_target(300.0, 1000.0, 72.0), 1228.0);
        // already above the viewport
        assert_eq!(scroll_target(-200.0, 1000.0, 72.0), 728.0);
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }
}
