// dom contract
//
// the markup is produced elsewhere (a static site build), so these selectors and class names
// are the whole interface between it and us.  the bootstrap-style alternatives are kept so
// that older pages built on the navbar component keep working
use constcat::concat;

// burger menu
pub const NAV: &str = ".c-nav#main-nav";
pub const NAV_TOGGLE: &str = ".c-nav__toggle, .navbar-toggler";
pub const NAV_LIST: &str = ".c-nav__list, .navbar-collapse";
pub const NAV_LINK: &str = ".c-nav__link, .nav-link";

// standalone header toggle
pub const DR_HEADER: &str = ".dr-header-inner";
pub const DR_TOGGLE: &str = ".dr-nav-toggle";
pub const DR_NAV: &str = ".dr-nav";

// scroll spy and smooth scroll
pub const SPY_LINK: &str = r##".c-nav__link[href^="#"], .nav-link[href^="#"]"##;
pub const IN_PAGE_ANCHOR: &str = r##"a[href^="#"], a[href^="/#"]"##;

pub const HEADER: &str = ".l-header";

// anything the keyboard can land on inside the open menu
pub const FOCUSABLE: &str = concat!(
    "a[href], ",
    "button:not([disabled]), ",
    "input:not([disabled]), ",
    "select:not([disabled]), ",
    "textarea:not([disabled]), ",
    r#"[tabindex]:not([tabindex="-1"])"#
);

// forms
pub const FORM: &str = "form";
pub const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;
pub const INVALID_FIELD: &str = ".is-invalid, .has-error";
pub const ERROR_MESSAGE: &str = ".invalid-feedback, .c-form__error-msg";

// notifications
pub const NOTIFICATION_CONTAINER_ID: &str = "notification-container";
pub const NOTIFICATION_CONTAINER_STYLE: &str = "position:fixed;top:20px;right:20px;z-index:9999;";
pub const TOAST_CLOSE: &str = ".btn-close";

// media
pub const IMAGES: &str = "img";
pub const VIDEOS: &str = "video";

pub mod class {
    pub const NAV_OPEN: &str = "is-open";
    pub const LIST_OPEN: &str = "show";
    pub const NO_SCROLL: &str = "u-no-scroll";
    pub const DR_NAV_OPEN: &str = "dr-nav-open";

    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "is-scrolled";

    pub const FORM_VALIDATED: &str = "was-validated";
    pub const FIELD_INVALID: &str = "is-invalid";
    pub const FIELD_ERROR: &str = "has-error";
    pub const FEEDBACK: &str = "invalid-feedback";
    pub const FEEDBACK_NEW: &str = "invalid-feedback c-form__error-msg";

    pub const TOAST_VISIBLE: &str = "show";
    pub const LOGO: &str = "c-logo__img";
}
