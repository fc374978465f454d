//! Inline formatting transform.
//!
//! A fixed, ordered, non-recursive sequence of substitutions shared by the
//! block renderer (paragraph text, list items, callout strings) and the
//! Markdown converter. Order matters: bold runs before italic so `**`
//! delimiters are never consumed as two single-asterisk italics.
//!
//! No HTML escaping happens here. Callers supplying untrusted text must
//! pre-escape; this mirrors the `html` block trust boundary.

use std::sync::LazyLock;

use regex::Regex;

// `.` must not cross lines: the Markdown pipeline runs these over a whole
// document where an opening `*` on one list line would otherwise pair with
// the next line's bullet.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^\n]+?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*\n]+?)\*").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

pub fn apply_bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "<strong>$1</strong>").into_owned()
}

pub fn apply_italic(text: &str) -> String {
    ITALIC_RE.replace_all(text, "<em>$1</em>").into_owned()
}

pub fn apply_inline_code(text: &str) -> String {
    CODE_RE.replace_all(text, "<code>$1</code>").into_owned()
}

pub fn apply_links(text: &str) -> String {
    LINK_RE
        .replace_all(text, r#"<a href="$2" class="text-link">$1</a>"#)
        .into_owned()
}

/// Applies all four substitutions once each: bold, italic, code, link.
pub fn format_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    apply_links(&apply_inline_code(&apply_italic(&apply_bold(text))))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn round_trip_all_four() {
        assert_eq!(
            format_text("**a** *b* `c` [d](e)"),
            r#"<strong>a</strong> <em>b</em> <code>c</code> <a href="e" class="text-link">d</a>"#
        );
    }

    #[test]
    fn untouched_text_passes_through() {
        assert_eq!(format_text("no markup"), "no markup");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(format_text(""), "");
    }

    #[test]
    fn bold_is_not_eaten_by_italic() {
        assert_eq!(format_text("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn italic_does_not_cross_lines() {
        assert_eq!(format_text("* a\n* b"), "* a\n* b");
    }

    #[test]
    fn nested_emphasis_is_single_pass() {
        // one pass each, in order: bold first, then italic inside what remains
        assert_eq!(
            format_text("**a** and *b*"),
            "<strong>a</strong> and <em>b</em>"
        );
    }
}
