//! HTML escaping helpers.
//!
//! Both escape functions live here, side by side, because they are
//! deliberately different: [`escape_html`] escapes double quotes (it is used
//! for attribute values and `code` block bodies), while
//! [`escape_markdown_text`] does not (the Markdown pipeline has only ever
//! escaped `&`, `<` and `>`, and downstream content relies on quotes passing
//! through). Keep the asymmetry in this one module; do not re-derive either
//! escape at a call site.

/// Escapes `&`, `<`, `>` and `"`.
///
/// This is the block renderer's escape: safe for element bodies and
/// double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes `&`, `<` and `>` only: the Markdown pipeline's escape.
///
/// Quotes are intentionally left alone; see the module docs.
pub fn escape_markdown_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
