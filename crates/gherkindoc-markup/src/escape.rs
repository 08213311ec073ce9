//! Escaping of rST-significant characters.

/// Characters that start inline markup, comments or field lists in rST.
const ESCAPED_CHARS: [char; 6] = ['*', '"', '#', ':', '<', '>'];

/// Default cell delimiter for `csv-table` directives.
///
/// The directive has no escape mechanism for its own quote character, so a
/// typographic quote that never shows up in feature files is used instead of `"`.
pub const TABLE_QUOTE: char = '\u{201C}';

/// Escape rST-significant characters by prefixing each with a backslash.
///
/// # Example
///
/// ```
/// use gherkindoc_markup::escape;
///
/// assert_eq!(escape("a *bold* <claim>"), "a \\*bold\\* \\<claim\\>");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    escape_impl(text, false)
}

/// Escape like [`escape`], and also turn every backslash into three.
///
/// Glossary terms pass through two rounds of rST parsing (the term list and
/// the `:term:` role), so their backslashes need the extra layer.
#[must_use]
pub fn escape_with_slashes(text: &str) -> String {
    escape_impl(text, true)
}

fn escape_impl(text: &str, slashes: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if slashes && c == '\\' {
            escaped.push_str("\\\\\\");
        } else if ESCAPED_CHARS.contains(&c) {
            escaped.push('\\');
            escaped.push(c);
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// Build an anonymous embedded hyperlink (`` `text <url>`__ ``).
#[must_use]
pub fn hyperlink(text: &str, url: &str) -> String {
    format!("`{text} <{url}>`__")
}
