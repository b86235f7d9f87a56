use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use common::{
    config::SiteConfig,
    form::{Field, FieldValue, SENDING_MARKUP, validate},
    selectors::{self, class},
};

use crate::dom::{self, js_err};

// Forms
//
// every form on the page is validated client side.  there is no backend: a valid form shows a
// sending state and then redirects to the thank-you page, and those pending redirects are
// owned here so that tearing the app down cancels them
pub struct Forms {
    _listeners: Vec<EventListener>,
    _redirects: Rc<RefCell<Vec<Timeout>>>,
}

impl Forms {
    pub fn bind(document: &Document, config: &SiteConfig) -> Result<Self> {
        let forms: Vec<HtmlFormElement> = dom::query_all(document, selectors::FORM)?
            .into_iter()
            .filter_map(|form| form.dyn_into().ok())
            .collect();

        debug!(forms = forms.len(), "binding form validation");

        let redirects = Rc::new(RefCell::new(Vec::new()));

        let listeners = forms
            .into_iter()
            .map(|form| {
                let target = form.clone();
                let document = document.clone();
                let config = config.clone();
                let redirects = redirects.clone();

                EventListener::new_with_options(
                    &target,
                    "submit",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();

                        match submit(&form, &document, &config) {
                            Ok(Some(redirect)) => redirects.borrow_mut().push(redirect),
                            Ok(None) => {}
                            Err(err) => warn!("form submit handling failed: {err}"),
                        }
                    },
                )
            })
            .collect();

        Ok(Forms {
            _listeners: listeners,
            _redirects: redirects,
        })
    }
}

// validates the form and, if it passes, hands back the pending redirect
fn submit(form: &HtmlFormElement, document: &Document, config: &SiteConfig) -> Result<Option<Timeout>> {
    clear_errors(form)?;

    let mut present = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let Some(element) = dom::query_in(form, field.selector())? else {
            continue;
        };
        let Some(value) = read_value(field, &element) else {
            continue;
        };
        present.push((field, element, value));
    }

    let errors = validate(
        present
            .iter()
            .map(|(field, _, value)| (*field, value.clone())),
    );

    if !errors.is_empty() {
        debug!(errors = errors.len(), "form failed validation");
        form.class_list()
            .add_1(class::FORM_VALIDATED)
            .map_err(js_err)?;

        for error in &errors {
            if let Some((_, element, _)) = present.iter().find(|(field, ..)| *field == error.field) {
                show_error(document, element, error.message())?;
            }
        }

        return Ok(None);
    }

    let Some(button) = dom::query_in(form, selectors::SUBMIT_BUTTON)?
        .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok())
    else {
        return Ok(None);
    };

    info!("form valid, redirecting to {}", config.thank_you_url);

    button.set_disabled(true);
    let label = button.text_content().unwrap_or_default();
    button.set_inner_html(SENDING_MARKUP);

    let url = config.thank_you_url.clone();
    let redirect = Timeout::new(config.redirect_ms, move || {
        button.set_disabled(false);
        button.set_text_content(Some(&label));

        let navigated = dom::window().and_then(|window| window.location().set_href(&url).map_err(js_err));
        if let Err(err) = navigated {
            warn!("failed to navigate to {url}: {err}");
        }
    });

    Ok(Some(redirect))
}

fn read_value(field: Field, element: &Element) -> Option<FieldValue> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return match field {
            Field::Privacy => (input.type_() == "checkbox").then(|| FieldValue::Checkbox(input.checked())),
            _ => Some(FieldValue::Text(input.value())),
        };
    }

    match field {
        Field::Privacy => None,
        _ => element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|area| FieldValue::Text(area.value())),
    }
}

// reuses a feedback element the markup already provides right after the field, otherwise
// inserts one
fn show_error(document: &Document, field: &Element, message: &str) -> Result<()> {
    field
        .class_list()
        .add_2(class::FIELD_INVALID, class::FIELD_ERROR)
        .map_err(js_err)?;

    let existing = field
        .next_element_sibling()
        .filter(|sibling| sibling.class_list().contains(class::FEEDBACK));

    let feedback = match existing {
        Some(feedback) => feedback,
        None => {
            let feedback = document.create_element("div").map_err(js_err)?;
            feedback.set_class_name(class::FEEDBACK_NEW);

            let parent = field
                .parent_node()
                .ok_or_else(|| anyhow::Error::msg("form field is detached"))?;
            parent
                .insert_before(&feedback, field.next_sibling().as_ref())
                .map_err(js_err)?;

            feedback
        }
    };

    feedback.set_text_content(Some(message));
    set_display(&feedback, "block")
}

fn clear_errors(form: &HtmlFormElement) -> Result<()> {
    for field in dom::query_all_in(form, selectors::INVALID_FIELD)? {
        field
            .class_list()
            .remove_2(class::FIELD_INVALID, class::FIELD_ERROR)
            .map_err(js_err)?;
    }

    for message in dom::query_all_in(form, selectors::ERROR_MESSAGE)? {
        set_display(&message, "none")?;
    }

    form.class_list()
        .remove_1(class::FORM_VALIDATED)
        .map_err(js_err)
}

fn set_display(element: &Element, display: &str) -> Result<()> {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        element
            .style()
            .set_property("display", display)
            .map_err(js_err)?;
    }

    Ok(())
}
