// html escaping
//
// this produces exactly what the browser gives back when a string is assigned as text content
// and then read out again as markup, which is how untrusted notification text gets neutralised
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            ch => out.push(ch),
        }
    }

    out
}
