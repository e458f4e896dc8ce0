//! Escaping of caller-supplied text for interpolation into markup.

/// Escape a value for use in an attribute value or element text node.
///
/// Encodes the five predefined XML entities (`& < > " '`). Applied uniformly
/// to every interpolated field, so any caller-supplied text round-trips
/// through the produced document.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
