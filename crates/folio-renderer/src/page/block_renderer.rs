//! Block rendering engine.
//!
//! [`render_block`] dispatches on the block variant and returns an HTML
//! fragment. Every arm is a pure function over the block record; composite
//! blocks recurse through the dispatcher and join child fragments with
//! newlines (cosmetic only; the joins carry no semantic weight).
//!
//! Unrecognized blocks degrade, they do not fail: the `Unknown` arm emits a
//! visible HTML comment and logs a warning, and rendering continues with
//! the siblings.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::page::inline::format_text;
use crate::types::{
    Block, BlockText, Button, Callout, CodeBlock, Columns, Cover, Gallery, Heading, IconBlock,
    IconKind, ImageBlock, LinkBlock, List, ListItem, NumberedToggle, PageIcon, Paragraph, Quote,
    RawHtml, Spacer, Toggle,
};

/// Cover banners rendered from a gradient use this fixed height.
const COVER_HEIGHT_PX: u32 = 200;

/// Spacer height when the block does not specify one.
const DEFAULT_SPACER_HEIGHT_PX: u32 = 32;

pub fn render_block(block: &Block) -> String {
    let mut html = String::new();

    match block {
        Block::Cover(cover) => render_cover(&mut html, cover),
        Block::Icon(icon) => render_icon(&mut html, icon),
        Block::H1(heading) => render_heading(&mut html, heading, 1),
        Block::H2(heading) => render_heading(&mut html, heading, 2),
        Block::H3(heading) => render_heading(&mut html, heading, 3),
        Block::Paragraph(para) => render_paragraph(&mut html, para),
        Block::Callout(callout) => render_callout(&mut html, callout),
        Block::BulletList(list) => render_list(&mut html, list, "ul"),
        Block::NumberedList(list) => render_list(&mut html, list, "ol"),
        Block::Quote(quote) => render_quote(&mut html, quote),
        Block::Divider => html.push_str("<hr>"),
        Block::Columns(cols) => render_columns(&mut html, cols, "columns"),
        Block::ThreeColumns(cols) => render_columns(&mut html, cols, "three-columns"),
        Block::Toggle(toggle) => render_toggle(&mut html, toggle),
        Block::NumberedToggle(toggle) => render_numbered_toggle(&mut html, toggle),
        Block::Button(button) => render_button(&mut html, button),
        Block::Link(link) => render_link(&mut html, link),
        Block::Code(code) => render_code(&mut html, code),
        Block::Image(image) => render_image(&mut html, image),
        Block::Gallery(gallery) => render_gallery(&mut html, gallery),
        Block::Toc => render_toc(&mut html),
        Block::Spacer(spacer) => render_spacer(&mut html, spacer),
        Block::Centered(centered) => {
            html.push_str("<div class=\"centered\">\n");
            html.push_str(&render_blocks(&centered.blocks));
            html.push_str("\n</div>");
        }
        Block::Html(RawHtml { content }) => {
            // Verbatim by design: the `html` block is the sanitization trust
            // boundary, callers own what reaches it.
            html.push_str(content);
        }
        Block::Unknown { block_type, .. } => {
            tracing::warn!(block_type = %block_type, "unknown block type, emitting placeholder");
            let _ = write!(html, "<!-- unknown block type: {} -->", escape_html(block_type));
        }
    }

    html
}

/// Renders a block list, fragments joined by newlines.
pub fn render_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_cover(html: &mut String, cover: &Cover) {
    // Gradient wins when both are present.
    if let Some(gradient) = &cover.gradient {
        let _ = write!(
            html,
            "<div class=\"block-cover\" style=\"background: {}; height: {}px;\"></div>",
            escape_html(gradient),
            COVER_HEIGHT_PX
        );
    } else if let Some(src) = &cover.src {
        let _ = write!(
            html,
            "<img class=\"block-cover\" src=\"{}\" alt=\"\">",
            escape_html(src)
        );
    }
}

fn render_icon(html: &mut String, block: &IconBlock) {
    match &block.icon {
        PageIcon::Kind {
            kind: IconKind::None,
            ..
        } => {}
        PageIcon::Kind {
            kind: IconKind::Image,
            src,
        } => {
            let _ = write!(
                html,
                "<img class=\"block-icon block-icon-image\" src=\"{}\" alt=\"\">",
                escape_html(src.as_deref().unwrap_or_default())
            );
        }
        PageIcon::Emoji { emoji } => {
            let _ = write!(html, "<div class=\"block-icon\">{}</div>", emoji);
        }
    }
}

fn render_heading(html: &mut String, heading: &Heading, level: u8) {
    // Heading text is raw: no inline transform, no escaping. Only paragraph
    // text goes through the formatter in this design.
    let _ = write!(html, "<h{}{}>", level, style_attr(heading.style.as_deref()));
    html.push_str(&heading.text);
    let _ = write!(html, "</h{}>", level);
}

fn render_paragraph(html: &mut String, para: &Paragraph) {
    html.push_str("<p>");
    html.push_str(&format_text(&para.text));
    html.push_str("</p>");
}

fn render_callout(html: &mut String, callout: &Callout) {
    html.push_str("<div class=\"callout\"");
    if let Some(background) = &callout.background {
        let _ = write!(html, " style=\"background: {}\"", escape_html(background));
    }
    html.push('>');
    if let Some(icon) = &callout.icon {
        let _ = write!(html, "<div class=\"callout-icon\">{}</div>", icon);
    }
    html.push_str("<div class=\"callout-content\">");
    html.push_str(&render_block_text(&callout.content));
    html.push_str("</div></div>");
}

fn render_list(html: &mut String, list: &List, tag: &str) {
    let _ = write!(html, "<{}>\n", tag);
    let items: Vec<String> = list.items.iter().map(render_list_item).collect();
    html.push_str(&items.join("\n"));
    let _ = write!(html, "\n</{}>", tag);
}

fn render_list_item(item: &ListItem) -> String {
    match item {
        ListItem::Text(text) => format!("<li>{}</li>", format_text(text)),
        ListItem::Lead { lead, text } => match text {
            Some(text) => format!(
                "<li><strong>{}</strong> — {}</li>",
                lead,
                format_text(text)
            ),
            None => format!("<li><strong>{}</strong></li>", lead),
        },
    }
}

fn render_quote(html: &mut String, quote: &Quote) {
    html.push_str("<blockquote>");
    html.push_str(&format_text(&quote.text));
    if let Some(attribution) = &quote.attribution {
        let _ = write!(html, "\n<cite>— {}</cite>", attribution);
    }
    html.push_str("</blockquote>");
}

fn render_columns(html: &mut String, cols: &Columns, class: &str) {
    let _ = write!(html, "<div class=\"{}\">\n", class);
    let rendered: Vec<String> = cols
        .columns
        .iter()
        .map(|column| format!("<div class=\"column\">\n{}\n</div>", render_blocks(column)))
        .collect();
    html.push_str(&rendered.join("\n"));
    html.push_str("\n</div>");
}

fn render_toggle(html: &mut String, toggle: &Toggle) {
    html.push_str("<details class=\"toggle\">");
    let _ = write!(html, "<summary>{}</summary>", toggle.title);
    html.push_str("\n<div class=\"toggle-content\">\n");
    html.push_str(&render_block_text(&toggle.content));
    html.push_str("\n</div></details>");
}

fn render_numbered_toggle(html: &mut String, toggle: &NumberedToggle) {
    // Numeric badge replaces the disclosure triangle, so the marker itself
    // is suppressed in CSS for this variant.
    html.push_str("<details class=\"toggle numbered-toggle\">");
    let _ = write!(
        html,
        "<summary><span class=\"toggle-number\">{}</span>{}</summary>",
        toggle.number, toggle.title
    );
    html.push_str("\n<div class=\"toggle-content\">\n");
    html.push_str(&render_block_text(&toggle.content));
    html.push_str("\n</div></details>");
}

fn render_button(html: &mut String, button: &Button) {
    let variant = button.variant.as_deref().unwrap_or("primary");
    let target = if button.new_tab {
        " target=\"_blank\" rel=\"noopener\""
    } else {
        ""
    };
    let _ = write!(
        html,
        "<a class=\"button button-{}\" href=\"{}\"{}>{}</a>",
        escape_html(variant),
        escape_html(&button.href),
        target,
        button.label
    );
}

fn render_link(html: &mut String, link: &LinkBlock) {
    let _ = write!(
        html,
        "<div class=\"block-link\"><a href=\"{}\">{} →</a></div>",
        escape_html(&link.href),
        link.label
    );
}

fn render_code(html: &mut String, code: &CodeBlock) {
    // Escaped, never inline-formatted: code content is data, not prose.
    html.push_str("<pre class=\"code-block\"><code");
    if let Some(language) = &code.language {
        let _ = write!(html, " class=\"language-{}\"", escape_html(language));
    }
    html.push('>');
    html.push_str(&escape_html(&code.content));
    html.push_str("</code></pre>");
}

fn render_image(html: &mut String, image: &ImageBlock) {
    html.push_str("<figure class=\"block-image\">");
    let _ = write!(
        html,
        "<img src=\"{}\" alt=\"{}\">",
        escape_html(&image.src),
        escape_html(image.alt.as_deref().unwrap_or_default())
    );
    if let Some(caption) = &image.caption {
        let _ = write!(html, "<figcaption>{}</figcaption>", format_text(caption));
    }
    html.push_str("</figure>");
}

fn render_gallery(html: &mut String, gallery: &Gallery) {
    html.push_str("<div class=\"gallery\">\n");
    let cards: Vec<String> = gallery.cards.iter().map(render_gallery_card).collect();
    html.push_str(&cards.join("\n"));
    html.push_str("\n</div>");
}

fn render_gallery_card(card: &crate::types::GalleryCard) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"gallery-card");
    if card.href.is_some() {
        html.push_str(" gallery-card-clickable");
    }
    html.push('"');
    if let Some(href) = &card.href {
        let _ = write!(
            html,
            " onclick=\"window.location.href='{}'\"",
            escape_html(href)
        );
    }
    html.push('>');
    if let Some(cover) = &card.cover {
        let _ = write!(
            html,
            "<img class=\"gallery-card-cover\" src=\"{}\" alt=\"\">",
            escape_html(cover)
        );
    }
    html.push_str("<div class=\"gallery-card-body\">");
    let _ = write!(
        html,
        "<div class=\"gallery-card-title\">{}{}</div>",
        card.icon
            .as_deref()
            .map(|icon| format!("<span class=\"gallery-card-icon\">{}</span> ", icon))
            .unwrap_or_default(),
        card.title
    );
    if let Some(subtitle) = &card.subtitle {
        let _ = write!(html, "<div class=\"gallery-card-subtitle\">{}</div>", subtitle);
    }
    if let Some(description) = &card.description {
        let _ = write!(
            html,
            "<div class=\"gallery-card-description\">{}</div>",
            format_text(description)
        );
    }
    html.push_str("</div></div>");
    html
}

fn render_toc(html: &mut String) {
    // Container only; the load-time script in page assembly fills it with
    // one link per h2.
    html.push_str(
        "<div class=\"toc\"><div class=\"toc-title\">Contents</div><nav id=\"toc-links\"></nav></div>",
    );
}

fn render_spacer(html: &mut String, spacer: &Spacer) {
    let height = spacer.height.unwrap_or(DEFAULT_SPACER_HEIGHT_PX);
    let _ = write!(
        html,
        "<div class=\"spacer\" style=\"height: {}px\"></div>",
        height
    );
}

fn render_block_text(content: &BlockText) -> String {
    match content {
        BlockText::Text(text) => format_text(text),
        BlockText::Blocks(blocks) => render_blocks(blocks),
    }
}

fn style_attr(style: Option<&str>) -> String {
    match style {
        Some(style) => format!(" style=\"{}\"", escape_html(style)),
        None => String::new(),
    }
}
