// scroll spy selection
//
// the "current" section is the last one, in document order, whose top has scrolled past the
// reference line -- not the one nearest to it.  sections sharing an offset resolve to the later
// one, for the same reason
pub fn reference_line(scroll_y: f64, header_height: f64, offset: f64) -> f64 {
    scroll_y + header_height + offset
}

pub fn active_section<I>(tops: I, line: f64) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    tops.into_iter()
        .enumerate()
        .filter(|(_, top)| *top <= line)
        .map(|(idx, _)| idx)
        .last()
}

// nav links point at sections with a bare fragment; "#" alone points nowhere
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
