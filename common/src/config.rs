use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument, warn};

// sitekit configuration
//
// every knob the page behaviour depends on lives here.  pages can override any subset of
// these by embedding a json block with the id below; anything left out keeps its default,
// which matches the stylesheet the markup ships with
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // used when the page has no .l-header to measure
    pub header_height: f64,

    // timing, in milliseconds
    pub debounce_ms: u32,
    pub throttle_ms: u32,
    pub notification_ms: u32,
    pub notification_fade_ms: u32,
    pub redirect_ms: u32,
    pub hash_settle_ms: u32,

    // extra slack added to the header height when deciding which section is "current"
    pub scroll_offset: f64,

    // viewport width at which the burger menu stops making sense
    pub mobile_breakpoint: f64,

    // vertical scroll past which the header gets its shadow
    pub scrolled_threshold: f64,

    // where a successfully validated form sends the visitor
    pub thank_you_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            header_height: 72.0,
            debounce_ms: 200,
            throttle_ms: 100,
            notification_ms: 5000,
            notification_fade_ms: 150,
            redirect_ms: 1500,
            hash_settle_ms: 100,
            scroll_offset: 20.0,
            mobile_breakpoint: 1024.0,
            scrolled_threshold: 50.0,
            thank_you_url: String::from("thank_you.html"),
        }
    }
}

// id of the <script type="application/json"> element holding page overrides.  the block is
// parsed as a whole: a single key of the wrong type (say "debounce_ms": -1) rejects it, and
// every override in it is dropped in favour of the defaults
pub const CONFIG_ELEMENT_ID: &str = "sitekit-config";

pub fn parse_config(raw: &str) -> anyhow::Result<SiteConfig> {
    let config = serde_json::from_str(raw)?;
    Ok(config)
}

// a broken config block should never take the page down with it, so this logs and falls
// back to the defaults instead of returning an error
#[instrument(level=Level::DEBUG, skip(raw))]
pub fn read_config(raw: Option<&str>) -> SiteConfig {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            debug!("no inline config, using defaults");
            return SiteConfig::default();
        }
    };

    match parse_config(raw) {
        Ok(config) => {
            debug!("successfully parsed inline config");
            config
        }
        Err(err) => {
            warn!("failed to parse inline config, ignoring every override in it: {err}");
            SiteConfig::default()
        }
    }
}
