#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

// an explicit loading attribute always wins; the logo sits above the fold and must never be
// deferred
pub fn wants_lazy_loading(kind: MediaKind, has_loading: bool, is_logo: bool) -> bool {
    if has_loading {
        return false;
    }

    match kind {
        MediaKind::Image => !is_logo,
        MediaKind::Video => true,
    }
}
