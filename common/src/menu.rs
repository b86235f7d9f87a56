// burger menu state machine
//
// the classes and aria attributes on the page are a projection of this state, never the other
// way around.  the binding layer feeds events in and re-renders whenever the state changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    // the burger button itself
    Toggle,
    // a nav link was followed, or some other component wants the panel gone
    Close,
    Escape,
    OutsideClick,
    // the debounced resize handler fired with this viewport width
    Resized { width: f64 },
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn next(self, event: MenuEvent, breakpoint: f64) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::Close) => MenuState::Closed,
            (MenuState::Open, MenuEvent::Escape | MenuEvent::OutsideClick) => MenuState::Closed,
            (MenuState::Open, MenuEvent::Resized { width }) if width >= breakpoint => {
                MenuState::Closed
            }
            (state, _) => state,
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        match self {
            MenuState::Open => "true",
            MenuState::Closed => "false",
        }
    }
}

// the standalone header toggle keeps no state of its own; whatever aria-expanded says is the
// truth, and anything other than "true" counts as collapsed
pub fn flip_expanded(current: Option<&str>) -> bool {
    current != Some("true")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            TabDirection::Backward
        } else {
            TabDirection::Forward
        }
    }
}

/// Index focus should wrap to when Tab is pressed inside a trapped container.
///
/// `active` is the position of the currently focused element among the `len` focusable
/// elements, if it is one of them.  Only the two edges wrap; everywhere else the browser's
/// own tab order is left alone and this returns `None`.
pub fn focus_wrap(len: usize, active: Option<usize>, direction: TabDirection) -> Option<usize> {
    let last = len.checked_sub(1)?;

    match (direction, active) {
        (TabDirection::Backward, Some(0)) => Some(last),
        (TabDirection::Forward, Some(i)) if i == last => Some(0),
        _ => None,
    }
}
