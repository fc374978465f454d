//! Minimal Markdown-to-HTML converter.
//!
//! Not a CommonMark parser: an ordered sequence of whole-document regex
//! substitutions with a structural cleanup pass at the end. It is total:
//! any input string produces valid (if possibly ugly) HTML, and nothing in
//! here can fail.
//!
//! Two behaviors are load-bearing for existing content and are pinned by
//! regression tests rather than fixed:
//!
//! - ordered and unordered list lines share one `<li>` transform, and the
//!   cleanup pass wraps every adjacent `<li>` run in `<ul>`, so numbered
//!   lists render as unordered lists;
//! - each `> ` line becomes its own `<blockquote>` element instead of the
//!   lines merging into one block.

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_markdown_text;
use crate::page::inline;

static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[a-zA-Z0-9]*\n?(.*?)```").unwrap());
// One transform for both list flavors; `-`/`*` bullets and `N.` prefixes all
// become bare `<li>`s, reconciled later.
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:[-*]|\d+\.) (.*)$").unwrap());
// Runs after escaping, so the source `> ` is `&gt; ` by the time we see it.
static BLOCKQUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^&gt; (.*)$").unwrap());
static HR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^---$").unwrap());

// Cleanup: the naive paragraph pass wraps block-level elements and litters
// `<br>` between them; these put the structure back.
static PRE_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pre><code>.*?</code></pre>").unwrap());
static BR_AFTER_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(</(?:h[123]|li|blockquote|pre)>|<hr>)<br>").unwrap());
static P_BEFORE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(<(?:h[123]|hr|pre|blockquote)>)").unwrap());
static P_AFTER_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(</(?:h[123]|pre|blockquote)>|<hr>)</p>").unwrap());
static LI_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(?:<p>)?((?:<li>.*?</li>)+)(?:</p>)?").unwrap());

/// Converts a Markdown document to an HTML fragment.
///
/// The substitution order is fixed; earlier passes create tokens that later
/// passes must not reprocess (bold before italic, fences before inline
/// code).
pub fn to_html(markdown: &str) -> String {
    // 1. escape & < > (not ")
    let out = escape_markdown_text(markdown);

    // 2. ATX headers, longest prefix first
    let out = H3_RE.replace_all(&out, "<h3>$1</h3>");
    let out = H2_RE.replace_all(&out, "<h2>$1</h2>");
    let out = H1_RE.replace_all(&out, "<h1>$1</h1>");

    // 3. emphasis
    let out = inline::apply_bold(&out);
    let out = inline::apply_italic(&out);

    // 4. fenced blocks, then inline code spans
    let out = FENCE_RE.replace_all(&out, "<pre><code>$1</code></pre>");
    let out = inline::apply_inline_code(&out);

    // 5. links
    let out = inline::apply_links(&out);

    // 6. list items (flavors not distinguished here)
    let out = LIST_ITEM_RE.replace_all(&out, "<li>$1</li>");

    // 7. blockquotes, one element per source line
    let out = BLOCKQUOTE_RE.replace_all(&out, "<blockquote>$1</blockquote>");

    // 8. horizontal rules
    let out = HR_RE.replace_all(&out, "<hr>");

    // 9. paragraph breaks, then remaining line breaks
    let out = out.replace("\n\n", "</p><p>");
    let out = out.replace('\n', "<br>");

    // 10. outer wrap + structural cleanup
    cleanup(format!("<p>{}</p>", out))
}

fn cleanup(html: String) -> String {
    // Put literal newlines back inside preformatted blocks; step 9 has no
    // idea it was walking through code.
    let html = PRE_SPAN_RE.replace_all(&html, |caps: &regex::Captures<'_>| {
        caps[0].replace("</p><p>", "\n\n").replace("<br>", "\n")
    });

    let html = BR_AFTER_BLOCK_RE.replace_all(&html, "$1");
    let html = html.replace("<p></p>", "");
    let html = P_BEFORE_BLOCK_RE.replace_all(&html, "$1");
    let html = P_AFTER_BLOCK_RE.replace_all(&html, "$1");

    // Adjacent list items collapse into one container, always <ul>.
    LI_RUN_RE.replace_all(&html, "<ul>$1</ul>").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn heading_then_paragraph() {
        assert_eq!(
            to_html("# Title\n\nBody **bold**."),
            "<h1>Title</h1><p>Body <strong>bold</strong>.</p>"
        );
    }

    #[test]
    fn ordered_list_renders_unordered() {
        // Pinned: the shared list transform plus the <ul> merge means
        // numbered input loses its numbering. Downstream content tolerates
        // this; do not silently change it.
        assert_eq!(to_html("1. a\n2. b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn unordered_list() {
        assert_eq!(to_html("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn blockquote_is_per_line() {
        // Pinned: each source line is its own blockquote element.
        let html = to_html("> a\n> b");
        assert_eq!(
            html,
            "<blockquote>a</blockquote><blockquote>b</blockquote>"
        );
    }

    #[test]
    fn header_levels_longest_prefix_first() {
        assert_eq!(to_html("### three"), "<h3>three</h3>");
        assert_eq!(to_html("## two"), "<h2>two</h2>");
        assert_eq!(to_html("# one"), "<h1>one</h1>");
    }

    #[test]
    fn fenced_code_keeps_newlines_and_escapes() {
        let html = to_html("```rust\nlet x = a < b && c > d;\n```");
        assert_eq!(
            html,
            "<pre><code>let x = a &lt; b &amp;&amp; c &gt; d;\n</code></pre>"
        );
    }

    #[test]
    fn inline_code_span() {
        assert_eq!(to_html("use `foo` here"), "<p>use <code>foo</code> here</p>");
    }

    #[test]
    fn links_get_text_link_class() {
        assert_eq!(
            to_html("[docs](https://example.com)"),
            "<p><a href=\"https://example.com\" class=\"text-link\">docs</a></p>"
        );
    }

    #[test]
    fn horizontal_rule() {
        assert_eq!(to_html("a\n\n---\n\nb"), "<p>a</p><hr><p>b</p>");
    }

    #[test]
    fn quotes_are_not_escaped() {
        // The Markdown escape never touched double quotes; pinned.
        assert_eq!(to_html(r#"say "hi""#), r#"<p>say "hi"</p>"#);
    }

    #[test]
    fn single_newline_becomes_line_break() {
        assert_eq!(to_html("a\nb"), "<p>a<br>b</p>");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn total_over_junk_input() {
        // never panics, always returns something
        let html = to_html("``` * ** > # ---- [ ] ( )\n\n\n\n* *");
        assert!(!html.is_empty());
    }

    #[test]
    fn angle_brackets_escaped_in_prose() {
        assert_eq!(to_html("a <b> & c"), "<p>a &lt;b&gt; &amp; c</p>");
    }
}
