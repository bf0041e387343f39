//! HTML fragment helpers for script includes.
//!
//! - `escape_attr()` - attribute value escaping
//! - `push_attr()` / `push_flag()` - attribute serialization

use std::borrow::Cow;

/// Characters that require escaping inside a double-quoted attribute.
const ATTR_ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape an HTML attribute value.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(ATTR_ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Append ` name="value"` to `out`.
#[inline]
pub fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Append a bare boolean attribute (` defer`) to `out`.
#[inline]
pub fn push_flag(out: &mut String, name: &str) {
    out.push(' ');
    out.push_str(name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr_plain() {
        assert!(matches!(escape_attr("normal"), Cow::Borrowed("normal")));
    }

    #[test]
    fn test_escape_attr_special_chars() {
        assert_eq!(escape_attr("a\"b&c"), "a&quot;b&amp;c");
        assert_eq!(escape_attr("it's"), "it&#39;s");
        assert_eq!(escape_attr("<x>"), "&lt;x&gt;");
    }

    #[test]
    fn test_push_attr_and_flag() {
        let mut out = String::from("<script");
        push_attr(&mut out, "src", "/a.js?v=1&b=2");
        push_flag(&mut out, "defer");
        assert_eq!(out, "<script src=\"/a.js?v=1&amp;b=2\" defer");
    }
}
