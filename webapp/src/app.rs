use anyhow::Result;
use tracing::{debug, error, info};

use common::{config::SiteConfig, toast::ToastKind};

use crate::{
    dom,
    forms::Forms,
    header_scroll::HeaderScroll,
    header_toggle::HeaderToggle,
    lazy_load,
    menu::BurgerMenu,
    notify::Notifier,
    scroll_spy::ScrollSpy,
    smooth_scroll::SmoothScroll,
};

// App
//
// owns every live component.  a component missing its markup is simply None, and dropping the
// App detaches all listeners and cancels every pending timer
pub struct App {
    menu: Option<BurgerMenu>,
    header_toggle: Option<HeaderToggle>,
    scroll_spy: Option<ScrollSpy>,
    smooth_scroll: Option<SmoothScroll>,
    forms: Option<Forms>,
    notifier: Option<Notifier>,
    header_scroll: Option<HeaderScroll>,
}

impl App {
    pub fn bootstrap(config: &SiteConfig) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;

        let menu = optional("burger menu", BurgerMenu::bind(&window, &document, config));
        let header_toggle = optional("header toggle", HeaderToggle::bind(&document));
        let scroll_spy = optional("scroll spy", ScrollSpy::bind(&window, &document, config));

        let menu_handle = menu.as_ref().map(BurgerMenu::handle);
        let smooth_scroll = optional(
            "smooth scroll",
            SmoothScroll::bind(&window, &document, config, menu_handle).map(Some),
        );

        let forms = optional("forms", Forms::bind(&document, config).map(Some));
        let notifier = optional("notifications", Notifier::bind(&window, &document, config).map(Some));

        if let Err(err) = lazy_load::sweep(&document) {
            error!("lazy-load sweep failed: {err:#}");
        }

        let header_scroll = optional("header scroll", HeaderScroll::bind(&window, &document, config));

        let app = App {
            menu,
            header_toggle,
            scroll_spy,
            smooth_scroll,
            forms,
            notifier,
            header_scroll,
        };

        info!(components = ?app.enabled(), "sitekit ready");
        Ok(app)
    }

    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("burger menu", self.menu.is_some()),
            ("header toggle", self.header_toggle.is_some()),
            ("scroll spy", self.scroll_spy.is_some()),
            ("smooth scroll", self.smooth_scroll.is_some()),
            ("forms", self.forms.is_some()),
            ("notifications", self.notifier.is_some()),
            ("header scroll", self.header_scroll.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, live)| live.then_some(name))
        .collect()
    }

    pub fn notify(&self, message: &str, kind: &ToastKind) -> Result<()> {
        match &self.notifier {
            Some(notifier) => notifier.notify(message, kind),
            None => Err(anyhow::Error::msg("notifications are not available")),
        }
    }
}

// a component that fails to bind is logged and left out; it never takes the others down
fn optional<T>(name: &str, bound: Result<Option<T>>) -> Option<T> {
    match bound {
        Ok(Some(component)) => Some(component),
        Ok(None) => {
            debug!("{name} markup not present, disabled");
            None
        }
        Err(err) => {
            error!("failed to bind {name}: {err:#}");
            None
        }
    }
}
