use pretty_assertions::assert_eq;

use crate::config::SiteConfig;
use crate::page::{PageRenderer, render_block};
use crate::theme::Theme;
use crate::types::{Block, PageConfig};

fn block(json: &str) -> Block {
    serde_json::from_str(json).unwrap()
}

#[test]
fn render_is_deterministic() {
    let block = block(r#"{"type":"callout","icon":"💡","content":"**tip** text"}"#);
    assert_eq!(render_block(&block), render_block(&block));
}

#[test]
fn unknown_type_renders_comment_and_never_throws() {
    let html = render_block(&block(r#"{"type":"teleporter","x":1}"#));
    assert!(html.contains("<!--"));
    assert!(html.contains("teleporter"));
}

#[test]
fn bullet_list_exact_shape() {
    let html = render_block(&block(
        r#"{"type":"bulletList","items":["x",{"lead":"Y","text":"z"}]}"#,
    ));
    assert_eq!(
        html,
        "<ul>\n<li>x</li>\n<li><strong>Y</strong> — z</li>\n</ul>"
    );
}

#[test]
fn numbered_list_uses_ol() {
    let html = render_block(&block(r#"{"type":"numberedList","items":["a"]}"#));
    assert_eq!(html, "<ol>\n<li>a</li>\n</ol>");
}

#[test]
fn list_item_lead_without_text_renders_lead_only() {
    let html = render_block(&block(
        r#"{"type":"bulletList","items":[{"lead":"Solo"}]}"#,
    ));
    assert_eq!(html, "<ul>\n<li><strong>Solo</strong></li>\n</ul>");
}

#[test]
fn cover_gradient_wins_over_src() {
    let html = render_block(&block(
        r#"{"type":"cover","gradient":"red","src":"/banner.png"}"#,
    ));
    assert!(html.contains("background: red"));
    assert!(!html.contains("/banner.png"));
}

#[test]
fn cover_without_gradient_uses_img() {
    let html = render_block(&block(r#"{"type":"cover","src":"/banner.png"}"#));
    assert!(html.starts_with("<img"));
    assert!(html.contains("/banner.png"));
}

#[test]
fn icon_none_is_empty_string() {
    let html = render_block(&block(r#"{"type":"icon","icon":{"type":"none"}}"#));
    assert_eq!(html, "");
}

#[test]
fn icon_emoji_and_image() {
    let emoji = render_block(&block(r#"{"type":"icon","icon":{"emoji":"🌊"}}"#));
    assert_eq!(emoji, "<div class=\"block-icon\">🌊</div>");
    let image = render_block(&block(
        r#"{"type":"icon","icon":{"type":"image","src":"/me.png"}}"#,
    ));
    assert!(image.contains("block-icon-image"));
}

#[test]
fn paragraph_is_inline_formatted_headings_are_raw() {
    let para = render_block(&block(r#"{"type":"paragraph","text":"**b**"}"#));
    assert_eq!(para, "<p><strong>b</strong></p>");
    // heading text intentionally bypasses the transform
    let heading = render_block(&block(r#"{"type":"h2","text":"**b**"}"#));
    assert_eq!(heading, "<h2>**b**</h2>");
}

#[test]
fn heading_style_passthrough() {
    let html = render_block(&block(
        r#"{"type":"h1","text":"T","style":"margin-top: 0"}"#,
    ));
    assert_eq!(html, "<h1 style=\"margin-top: 0\">T</h1>");
}

#[test]
fn code_is_escaped_not_formatted() {
    let html = render_block(&block(
        r#"{"type":"code","content":"if a < b && \"x\" { **no** }"}"#,
    ));
    assert!(html.contains("a &lt; b &amp;&amp; &quot;x&quot;"));
    // inline markup must survive as literal asterisks
    assert!(html.contains("**no**"));
}

#[test]
fn html_block_is_verbatim() {
    let html = render_block(&block(
        r#"{"type":"html","content":"<iframe src=\"x\"></iframe>"}"#,
    ));
    assert_eq!(html, "<iframe src=\"x\"></iframe>");
}

#[test]
fn button_defaults_to_primary_same_tab() {
    let html = render_block(&block(r#"{"type":"button","label":"Go","href":"/x"}"#));
    assert_eq!(html, "<a class=\"button button-primary\" href=\"/x\">Go</a>");
}

#[test]
fn button_new_tab_and_variant() {
    let html = render_block(&block(
        r#"{"type":"button","label":"Go","href":"/x","variant":"outline","newTab":true}"#,
    ));
    assert!(html.contains("button-outline"));
    assert!(html.contains("target=\"_blank\""));
}

#[test]
fn quote_attribution_has_em_dash() {
    let html = render_block(&block(
        r#"{"type":"quote","text":"Ship it.","attribution":"Anonymous"}"#,
    ));
    assert!(html.contains("<cite>— Anonymous</cite>"));
}

#[test]
fn spacer_default_height() {
    let html = render_block(&block(r#"{"type":"spacer"}"#));
    assert_eq!(html, "<div class=\"spacer\" style=\"height: 32px\"></div>");
    let tall = render_block(&block(r#"{"type":"spacer","height":64}"#));
    assert!(tall.contains("height: 64px"));
}

#[test]
fn divider_is_hr() {
    assert_eq!(render_block(&block(r#"{"type":"divider"}"#)), "<hr>");
}

#[test]
fn toggle_accepts_string_or_blocks() {
    let text = render_block(&block(
        r#"{"type":"toggle","title":"More","content":"detail *here*"}"#,
    ));
    assert!(text.contains("<summary>More</summary>"));
    assert!(text.contains("<em>here</em>"));

    let nested = render_block(&block(
        r#"{"type":"toggle","title":"More","content":[{"type":"divider"}]}"#,
    ));
    assert!(nested.contains("<hr>"));
}

#[test]
fn numbered_toggle_has_badge() {
    let html = render_block(&block(
        r#"{"type":"numberedToggle","number":3,"title":"Step","content":"do it"}"#,
    ));
    assert!(html.contains("<span class=\"toggle-number\">3</span>"));
}

#[test]
fn gallery_card_clickable_only_with_href() {
    let html = render_block(&block(
        r#"{"type":"gallery","cards":[
            {"title":"A","href":"/a","icon":"📁","subtitle":"sub"},
            {"title":"B","description":"plain card"}
        ]}"#,
    ));
    assert!(html.contains("gallery-card-clickable"));
    assert!(html.contains("window.location.href='/a'"));
    assert!(html.contains("plain card"));
    // second card has no href, so exactly one clickable card
    assert_eq!(html.matches("gallery-card-clickable").count(), 1);
}

#[test]
fn nested_composites_fully_resolve() {
    let html = render_block(&block(
        r#"{"type":"columns","columns":[
            [{"type":"callout","content":[
                {"type":"bulletList","items":["deep"]}
            ]}],
            [{"type":"centered","blocks":[{"type":"paragraph","text":"right"}]}]
        ]}"#,
    ));
    assert!(html.contains("<li>deep</li>"));
    assert!(html.contains("<p>right</p>"));
    // no block-descriptor artifacts survive rendering
    assert!(!html.contains("\"type\""));
}

#[test]
fn three_columns_uses_grid_class() {
    let html = render_block(&block(
        r#"{"type":"threeColumns","columns":[[],[],[]]}"#,
    ));
    assert!(html.starts_with("<div class=\"three-columns\">"));
}

fn render_page(json: &str) -> String {
    let page: PageConfig = serde_json::from_str(json).unwrap();
    let site = SiteConfig::default();
    let theme = Theme::default();
    PageRenderer::new(&site, &theme).render_page(&page)
}

#[test]
fn full_page_document_shape() {
    let html = render_page(
        r#"{
            "slug": "about",
            "title": "About",
            "description": "who & why",
            "toc": true,
            "backLink": {"href": "/", "label": "Home"},
            "blocks": [{"type": "h2", "text": "Hi"}]
        }"#,
    );
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>About · folio</title>"));
    assert!(html.contains("og:description\" content=\"who &amp; why\""));
    assert!(html.contains("section-"));
    assert!(html.contains("back-link"));
    assert!(html.contains("← Home"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn toc_script_only_when_enabled() {
    let without = render_page(r#"{"slug":"a","title":"A"}"#);
    assert!(!without.contains("section-"));
}

#[test]
fn page_falls_back_to_site_defaults() {
    let html = render_page(r#"{"slug":"a","title":"A"}"#);
    // no cover or icon configured: the site banner and profile image step in
    assert!(html.contains("/images/default-banner.png"));
    assert!(html.contains("/images/profile.png"));
}

#[test]
fn unknown_block_does_not_abort_siblings() {
    let html = render_page(
        r#"{
            "slug": "mixed",
            "title": "Mixed",
            "blocks": [
                {"type": "paragraph", "text": "before"},
                {"type": "widget", "x": 1},
                {"type": "paragraph", "text": "after"}
            ]
        }"#,
    );
    assert!(html.contains("<p>before</p>"));
    assert!(html.contains("<!-- unknown block type: widget -->"));
    assert!(html.contains("<p>after</p>"));
}
