//! Full-page rendering.
//!
//! Takes a [`PageConfig`] and produces a complete HTML5 document: head with
//! SEO/Open Graph meta, inline stylesheet, the nav/cover header fragment,
//! the rendered block tree, an optional back link, and the client-side
//! scripts.

pub mod block_renderer;
pub mod inline;

#[cfg(test)]
mod tests;

use std::fmt::Write;

use crate::config::SiteConfig;
use crate::css::generate_base_css;
use crate::escape::escape_html;
use crate::nav::{self, NavContext};
use crate::theme::Theme;
use crate::types::{IconKind, PageConfig, PageIcon};

pub use block_renderer::{render_block, render_blocks};
pub use inline::format_text;

/// Load-time table-of-contents population: numbers every `h2` in document
/// order starting at 0, assigns it the anchor id `section-<index>`, and
/// appends one link per heading to the toc container.
const TOC_SCRIPT: &str = r#"<script>
document.addEventListener('DOMContentLoaded', function () {
  var target = document.getElementById('toc-links');
  if (!target) return;
  document.querySelectorAll('h2').forEach(function (heading, index) {
    heading.id = 'section-' + index;
    var link = document.createElement('a');
    link.href = '#section-' + index;
    link.textContent = heading.textContent;
    target.appendChild(link);
  });
});
</script>"#;

pub struct PageRenderer<'a> {
    site: &'a SiteConfig,
    theme: &'a Theme,
}

impl<'a> PageRenderer<'a> {
    pub fn new(site: &'a SiteConfig, theme: &'a Theme) -> Self {
        Self { site, theme }
    }

    /// Renders the complete document for one page config.
    pub fn render_page(&self, page: &PageConfig) -> String {
        let mut html = String::with_capacity(16 * 1024);

        self.write_head(&mut html, page);

        html.push_str(&nav::header_html(&self.nav_context(page)));
        html.push('\n');

        html.push_str("<main class=\"page-content\">\n");
        let blocks: Vec<String> = page.blocks.iter().map(render_block).collect();
        html.push_str(&blocks.join("\n\n"));
        html.push_str("\n</main>\n");

        if let Some(back) = &page.back_link {
            let _ = write!(
                html,
                "<a class=\"back-link\" href=\"{}\">← {}</a>\n",
                escape_html(&back.href),
                back.label.as_deref().unwrap_or("Back")
            );
        }

        html.push_str("<script>\n");
        html.push_str(nav::script());
        html.push_str("\n</script>\n");

        if page.toc {
            html.push_str(TOC_SCRIPT);
            html.push('\n');
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    fn write_head(&self, html: &mut String, page: &PageConfig) {
        let title = escape_html(&page.title);
        let description = escape_html(&page.description);
        let url = format!("{}/{}", self.site.base_url, page.slug);
        // Gradients cannot be a social preview; fall back to the banner.
        let og_image = page
            .cover
            .as_ref()
            .and_then(|cover| cover.src.as_deref())
            .unwrap_or(&self.site.default_cover);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = write!(
            html,
            "<title>{} · {}</title>\n",
            title,
            escape_html(&self.site.site_name)
        );
        let _ = write!(html, "<meta name=\"description\" content=\"{}\">\n", description);
        if !self.site.author.is_empty() {
            let _ = write!(
                html,
                "<meta name=\"author\" content=\"{}\">\n",
                escape_html(&self.site.author)
            );
        }
        let _ = write!(html, "<link rel=\"canonical\" href=\"{}\">\n", escape_html(&url));
        let _ = write!(html, "<meta property=\"og:title\" content=\"{}\">\n", title);
        let _ = write!(
            html,
            "<meta property=\"og:description\" content=\"{}\">\n",
            description
        );
        html.push_str("<meta property=\"og:type\" content=\"website\">\n");
        let _ = write!(html, "<meta property=\"og:url\" content=\"{}\">\n", escape_html(&url));
        let _ = write!(
            html,
            "<meta property=\"og:image\" content=\"{}\">\n",
            escape_html(og_image)
        );
        html.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");

        html.push_str("<style>\n");
        html.push_str(&generate_base_css(self.theme));
        html.push_str(nav::styles());
        html.push_str("</style>\n");

        html.push_str("</head>\n<body>\n");
    }

    fn nav_context(&self, page: &PageConfig) -> NavContext {
        let (cover_image, cover_gradient) = match &page.cover {
            Some(cover) => (cover.src.clone(), cover.gradient.clone()),
            None => (Some(self.site.default_cover.clone()), None),
        };
        let (page_icon, page_icon_image) = match &page.icon {
            Some(PageIcon::Emoji { emoji }) => (Some(emoji.clone()), None),
            Some(PageIcon::Kind {
                kind: IconKind::Image,
                src,
            }) => (None, src.clone()),
            Some(PageIcon::Kind {
                kind: IconKind::None,
                ..
            }) => (None, None),
            None => (None, Some(self.site.profile_image.clone())),
        };
        NavContext {
            current_page: page.title.clone(),
            parent_page: page.back_link.as_ref().and_then(|back| back.label.clone()),
            parent_href: page.back_link.as_ref().map(|back| back.href.clone()),
            cover_image,
            cover_gradient,
            page_icon,
            page_icon_image,
        }
    }
}
