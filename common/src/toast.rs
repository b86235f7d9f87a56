use crate::{config::SiteConfig, text::escape_html};

// toast notifications
//
// a toast is shown, fades (bootstrap drops the `show` class and the css transition runs), and
// is then removed.  a toast only ever moves forward through these phases, so a manual close
// racing the auto-dismiss timer is harmless
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Shown,
    Fading,
    Removed,
}

impl ToastPhase {
    // returns the new phase, and whether the caller should start the fade
    pub fn dismiss(self) -> (ToastPhase, bool) {
        match self {
            ToastPhase::Shown => (ToastPhase::Fading, true),
            phase => (phase, false),
        }
    }

    pub fn finish(self) -> ToastPhase {
        ToastPhase::Removed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTiming {
    pub visible_ms: u32,
    pub fade_ms: u32,
}

impl ToastTiming {
    pub fn from_config(config: &SiteConfig) -> Self {
        ToastTiming {
            visible_ms: config.notification_ms,
            fade_ms: config.notification_fade_ms,
        }
    }

    // upper bound on how long an untouched toast stays in the dom
    pub fn lifetime_ms(&self) -> u32 {
        self.visible_ms.saturating_add(self.fade_ms)
    }
}

// the bootstrap alert variant, e.g. "success" or "danger"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastKind(String);

impl ToastKind {
    pub const DEFAULT: &'static str = "success";

    // callers from plain javascript may pass anything; whitespace would smuggle extra classes
    // onto the element, so it is folded away
    pub fn parse(raw: Option<&str>) -> Self {
        let kind: String = raw
            .unwrap_or_default()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");

        if kind.is_empty() {
            ToastKind(String::from(Self::DEFAULT))
        } else {
            ToastKind(kind)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn class_name(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.0)
    }
}

impl Default for ToastKind {
    fn default() -> Self {
        ToastKind(String::from(Self::DEFAULT))
    }
}

pub fn toast_markup(message: &str) -> String {
    format!(
        r#"{}<button type="button" class="btn-close" aria-label="Schließen"></button>"#,
        escape_html(message)
    )
}
