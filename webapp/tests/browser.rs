// page-level behaviour, run in a real browser with wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

// markup plus an inline config block, bound to a fresh app.  dropping it tears the app down
// and takes the markup (and any notification container) back out of the page
struct Fixture {
    root: Element,
}

impl Fixture {
    fn mount(config: &str, markup: &str) -> Self {
        sitekit::teardown();

        let document = document();
        let root = document.create_element("div").unwrap();
        root.set_attribute("style", "position:absolute;top:0;left:0;width:100%")
            .unwrap();
        root.set_inner_html(&format!(
            r#"<script type="application/json" id="sitekit-config">{config}</script>{markup}"#
        ));
        document.body().unwrap().append_child(&root).unwrap();

        sitekit::bootstrap();
        Fixture { root }
    }

    fn find(&self, selector: &str) -> Element {
        self.root.query_selector(selector).unwrap().unwrap()
    }

    fn count(&self, selector: &str) -> u32 {
        self.root.query_selector_all(selector).unwrap().length()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        sitekit::teardown();
        self.root.remove();

        if let Some(container) = document().get_element_by_id("notification-container") {
            container.remove();
        }
    }
}

const MENU: &str = r##"
    <nav class="c-nav" id="main-nav">
      <button class="c-nav__toggle" aria-expanded="false">Menü</button>
      <ul class="c-nav__list">
        <li><a class="c-nav__link" href="/about">Über uns</a></li>
      </ul>
    </nav>
"##;

#[wasm_bindgen_test]
fn menu_opens_and_escape_closes_it() {
    let page = Fixture::mount("{}", MENU);
    let toggle = page.find(".c-nav__toggle");
    let body = document().body().unwrap();

    toggle.dyn_ref::<HtmlElement>().unwrap().click();

    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(body.class_list().contains("u-no-scroll"));
    assert!(page.find(".c-nav").class_list().contains("is-open"));
    assert!(page.find(".c-nav__list").class_list().contains("show"));

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&escape).unwrap();

    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!body.class_list().contains("u-no-scroll"));
}

#[wasm_bindgen_test]
fn scroll_spy_marks_exactly_one_link() {
    let window = web_sys::window().unwrap();
    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some("/"))
        .unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    // sections come first so the first one starts at the very top of the page; the second
    // link starts out stale and has to be cleared
    let page = Fixture::mount(
        "{}",
        r##"
        <section id="alpha" style="height:2000px">alpha</section>
        <section id="beta" style="height:2000px">beta</section>
        <ul>
          <li><a class="c-nav__link" href="#alpha">Alpha</a></li>
          <li><a class="c-nav__link active" aria-current="page" href="#beta">Beta</a></li>
        </ul>
        "##,
    );

    assert_eq!(page.count(r#"[aria-current="page"]"#), 1);
    assert_eq!(page.count(".c-nav__link.active"), 1);

    let current = page.find(r#"[aria-current="page"]"#);
    assert_eq!(current.get_attribute("href").as_deref(), Some("#alpha"));
    assert!(!page.find(r##"a[href="#beta"]"##).class_list().contains("active"));
}

#[wasm_bindgen_test]
async fn notification_appears_once_and_goes_away() {
    let _page = Fixture::mount(r#"{ "notification_ms": 50, "notification_fade_ms": 10 }"#, "");

    sitekit::notify("Nachricht gesendet", None);

    let container = document().get_element_by_id("notification-container").unwrap();
    let alerts = container.query_selector_all(".alert").unwrap();
    assert_eq!(alerts.length(), 1);

    let alert = container.query_selector(".alert").unwrap().unwrap();
    assert!(alert.class_list().contains("alert-success"));
    assert_eq!(alert.get_attribute("role").as_deref(), Some("alert"));

    TimeoutFuture::new(300).await;

    assert_eq!(container.query_selector_all(".alert").unwrap().length(), 0);
}

#[wasm_bindgen_test]
fn invalid_submit_reuses_or_inserts_feedback() {
    let page = Fixture::mount(
        "{}",
        r#"
        <form novalidate>
          <input id="name" name="name" type="text" value="A">
          <div class="invalid-feedback" id="name-feedback" style="display:none"></div>
          <input id="email" name="email" type="text" value="not-an-email">
          <textarea id="message" name="message">Guten Tag, ich habe eine Frage.</textarea>
          <button type="submit">Senden</button>
        </form>
        "#,
    );

    let form = page.find("form");
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    assert!(form.class_list().contains("was-validated"));
    assert!(page.find("#name").class_list().contains("is-invalid"));
    assert!(page.find("#email").class_list().contains("has-error"));
    assert!(!page.find("#message").class_list().contains("is-invalid"));

    // the markup's own element is reused for the name, the email gets a new one
    assert_eq!(page.count(".invalid-feedback"), 2);
    assert_eq!(
        page.find("#name-feedback").text_content().as_deref(),
        Some("Der Name muss mindestens 2 Zeichen lang sein.")
    );

    let inserted = page.find("#email").next_element_sibling().unwrap();
    assert!(inserted.class_list().contains("c-form__error-msg"));
    assert_eq!(
        inserted.text_content().as_deref(),
        Some("Bitte geben Sie eine gültige E-Mail-Adresse ein.")
    );

    let button: HtmlButtonElement = page.find(r#"button[type="submit"]"#).dyn_into().unwrap();
    assert!(!button.disabled());
}

#[wasm_bindgen_test]
async fn valid_submit_disables_button_then_redirects() {
    let page = Fixture::mount(
        r##"{ "redirect_ms": 50, "thank_you_url": "#danke" }"##,
        r#"
        <form novalidate>
          <input id="name" name="name" type="text" value="Jo">
          <input id="email" name="email" type="text" value="a@b.co">
          <textarea id="message" name="message">Guten Tag, ich habe eine Frage.</textarea>
          <button type="submit">Senden</button>
        </form>
        "#,
    );

    let form = page.find("form");
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    let button: HtmlButtonElement = page.find(r#"button[type="submit"]"#).dyn_into().unwrap();
    assert!(button.disabled());
    assert!(button.inner_html().contains("Wird gesendet..."));
    assert_eq!(page.count(".invalid-feedback"), 0);

    TimeoutFuture::new(300).await;

    let location = web_sys::window().unwrap().location();
    assert_eq!(location.hash().unwrap(), "#danke");
    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Senden"));
}
