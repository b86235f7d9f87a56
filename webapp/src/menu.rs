use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use gloo_events::{EventListener, EventListenerOptions};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node, Window};

use common::{
    config::SiteConfig,
    menu::{MenuEvent, MenuState, TabDirection, focus_wrap},
    selectors::{self, class},
};

use crate::dom::{self, Debouncer, js_err};

// everything the burger menu touches, resolved once up front
struct MenuElements {
    nav: Element,
    toggle: Element,
    list: Element,
    body: HtmlElement,
}

impl MenuElements {
    fn bind(document: &Document) -> Result<Option<Self>> {
        let (Some(nav), Some(toggle), Some(list)) = (
            dom::query(document, selectors::NAV)?,
            dom::query(document, selectors::NAV_TOGGLE)?,
            dom::query(document, selectors::NAV_LIST)?,
        ) else {
            return Ok(None);
        };

        Ok(Some(MenuElements {
            nav,
            toggle,
            list,
            body: dom::body(document)?,
        }))
    }

    fn render(&self, state: MenuState) -> Result<()> {
        let open = state.is_open();

        self.nav
            .class_list()
            .toggle_with_force(class::NAV_OPEN, open)
            .map_err(js_err)?;
        self.list
            .class_list()
            .toggle_with_force(class::LIST_OPEN, open)
            .map_err(js_err)?;
        self.body
            .class_list()
            .toggle_with_force(class::NO_SCROLL, open)
            .map_err(js_err)?;
        self.toggle
            .set_attribute("aria-expanded", state.aria_expanded())
            .map_err(js_err)?;

        Ok(())
    }
}

struct MenuInner {
    elements: MenuElements,
    state: MenuState,
    breakpoint: f64,
    resize: Debouncer,
}

// MenuHandle
//
// the menu's state is owned here and nowhere else.  other components (smooth scroll) get a
// clone of the handle injected so they can ask whether the panel is open and close it
#[derive(Clone)]
pub struct MenuHandle {
    inner: Rc<RefCell<MenuInner>>,
}

impl MenuHandle {
    pub fn is_open(&self) -> bool {
        self.inner.borrow().state.is_open()
    }

    pub fn close(&self) {
        self.dispatch(MenuEvent::Close);
    }

    pub fn dispatch(&self, event: MenuEvent) {
        let mut inner = self.inner.borrow_mut();

        let next = inner.state.next(event, inner.breakpoint);
        if next == inner.state {
            return;
        }

        debug!(?event, ?next, "menu transition");
        inner.state = next;

        if let Err(err) = inner.elements.render(next) {
            warn!("failed to render menu state: {err}");
        }
    }

    fn contains(&self, node: &Node) -> bool {
        self.inner.borrow().elements.nav.contains(Some(node))
    }

    // the timeout only holds a weak reference, otherwise a pending check would keep a torn
    // down menu alive
    fn schedule_resize_check(&self) {
        let weak = Rc::downgrade(&self.inner);

        self.inner.borrow_mut().resize.call(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Ok(window) = dom::window() else {
                return;
            };

            MenuHandle { inner }.dispatch(MenuEvent::Resized {
                width: dom::inner_width(&window),
            });
        });
    }

    // keep tab and shift-tab cycling inside the open panel
    fn trap_focus(&self, event: &KeyboardEvent, document: &Document) -> Result<()> {
        if event.key() != "Tab" || !self.is_open() {
            return Ok(());
        }

        let list = self.inner.borrow().elements.list.clone();
        let focusable = dom::query_all_in(&list, selectors::FOCUSABLE)?;

        let active = document
            .active_element()
            .and_then(|active| focusable.iter().position(|el| *el == active));

        let direction = TabDirection::from_shift(event.shift_key());
        let Some(target) = focus_wrap(focusable.len(), active, direction) else {
            return Ok(());
        };

        event.prevent_default();
        if let Some(target) = focusable[target].dyn_ref::<HtmlElement>() {
            target.focus().map_err(js_err)?;
        }

        Ok(())
    }
}

pub struct BurgerMenu {
    handle: MenuHandle,
    _listeners: Vec<EventListener>,
}

impl BurgerMenu {
    pub fn bind(window: &Window, document: &Document, config: &SiteConfig) -> Result<Option<Self>> {
        let Some(elements) = MenuElements::bind(document)? else {
            return Ok(None);
        };

        let links = dom::query_all_in(&elements.list, selectors::NAV_LINK)?;
        let toggle = elements.toggle.clone();
        let list = elements.list.clone();

        let handle = MenuHandle {
            inner: Rc::new(RefCell::new(MenuInner {
                elements,
                state: MenuState::default(),
                breakpoint: config.mobile_breakpoint,
                resize: Debouncer::new(config.debounce_ms),
            })),
        };

        let mut listeners = Vec::with_capacity(links.len() + 5);

        let menu = handle.clone();
        listeners.push(EventListener::new(&toggle, "click", move |_| {
            menu.dispatch(MenuEvent::Toggle)
        }));

        let menu = handle.clone();
        listeners.push(EventListener::new(document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>()
                && event.key() == "Escape"
            {
                menu.dispatch(MenuEvent::Escape);
            }
        }));

        // the toggle lives inside the nav, so its own click never counts as outside
        let menu = handle.clone();
        listeners.push(EventListener::new(document, "click", move |event| {
            if !menu.is_open() {
                return;
            }

            let outside = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_none_or(|node| !menu.contains(&node));

            if outside {
                menu.dispatch(MenuEvent::OutsideClick);
            }
        }));

        for link in &links {
            let menu = handle.clone();
            listeners.push(EventListener::new(link, "click", move |_| menu.close()));
        }

        let menu = handle.clone();
        listeners.push(EventListener::new(window, "resize", move |_| {
            menu.schedule_resize_check()
        }));

        let menu = handle.clone();
        let doc = document.clone();
        listeners.push(EventListener::new_with_options(
            &list,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>()
                    && let Err(err) = menu.trap_focus(event, &doc)
                {
                    warn!("focus trap failed: {err}");
                }
            },
        ));

        Ok(Some(BurgerMenu {
            handle,
            _listeners: listeners,
        }))
    }

    pub fn handle(&self) -> MenuHandle {
        self.handle.clone()
    }
}
