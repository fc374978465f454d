//! Nav/cover header fragment provider.
//!
//! Every generated page opens with the same shell: a cover banner (gradient
//! or image), a breadcrumb row, a floating page icon, a theme toggle and an
//! overflow menu. The three entry points are pure string producers
//! ([`styles`], [`header_html`], [`script`]) so the page assembly treats
//! this module as an opaque fragment source.

use std::fmt::Write;

use crate::escape::escape_html;

/// Inputs for one page's header fragment.
#[derive(Debug, Clone, Default)]
pub struct NavContext {
    pub current_page: String,
    pub parent_page: Option<String>,
    pub parent_href: Option<String>,
    pub cover_image: Option<String>,
    pub cover_gradient: Option<String>,
    pub page_icon: Option<String>,
    pub page_icon_image: Option<String>,
}

pub fn header_html(ctx: &NavContext) -> String {
    let mut html = String::new();
    html.push_str("<header class=\"site-header\">\n");

    // Gradient wins over image, same precedence as the cover block.
    if let Some(gradient) = &ctx.cover_gradient {
        let _ = write!(
            html,
            "<div class=\"page-cover\" style=\"background: {}\"></div>\n",
            escape_html(gradient)
        );
    } else if let Some(image) = &ctx.cover_image {
        let _ = write!(
            html,
            "<img class=\"page-cover\" src=\"{}\" alt=\"\">\n",
            escape_html(image)
        );
    }

    if let Some(emoji) = &ctx.page_icon {
        let _ = write!(html, "<div class=\"page-icon\">{}</div>\n", emoji);
    } else if let Some(src) = &ctx.page_icon_image {
        let _ = write!(
            html,
            "<img class=\"page-icon page-icon-image\" src=\"{}\" alt=\"\">\n",
            escape_html(src)
        );
    }

    html.push_str("<div class=\"header-bar\">\n<nav class=\"breadcrumbs\">");
    if let (Some(parent), Some(href)) = (&ctx.parent_page, &ctx.parent_href) {
        let _ = write!(
            html,
            "<a href=\"{}\">{}</a><span class=\"breadcrumb-sep\">/</span>",
            escape_html(href),
            parent
        );
    }
    let _ = write!(
        html,
        "<span class=\"breadcrumb-current\">{}</span>",
        ctx.current_page
    );
    html.push_str("</nav>\n");

    html.push_str(concat!(
        "<div class=\"header-actions\">\n",
        "<button class=\"theme-toggle\" aria-label=\"Toggle theme\">◐</button>\n",
        "<div class=\"overflow-menu\">\n",
        "<button class=\"overflow-button\" aria-label=\"More\">⋯</button>\n",
        "<div class=\"overflow-dropdown\">",
        "<a href=\"/\">Home</a>",
        "<a href=\"/blog\">Blog</a>",
        "</div>\n</div>\n</div>\n",
    ));

    html.push_str("</div>\n</header>");
    html
}

pub fn styles() -> &'static str {
    r#"
/* header shell */
.site-header {
    position: relative;
    margin-bottom: 3.5rem;
}
.page-cover {
    display: block;
    width: 100%;
    height: 220px;
    object-fit: cover;
}
.page-icon {
    position: absolute;
    bottom: -1.75rem;
    left: 2rem;
    font-size: 3rem;
    line-height: 1;
}
.page-icon-image {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 50%;
    border: 3px solid var(--color-base);
    object-fit: cover;
}
.header-bar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.5rem 2rem;
}
.breadcrumbs {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: var(--color-muted);
}
.breadcrumbs a {
    color: var(--color-muted);
}
.breadcrumbs a:hover {
    color: var(--color-text);
}
.breadcrumb-current {
    color: var(--color-text);
}
.header-actions {
    display: flex;
    align-items: center;
    gap: 0.25rem;
}
.theme-toggle, .overflow-button {
    border: none;
    background: transparent;
    color: var(--color-muted);
    font-size: 1.1rem;
    padding: 0.25rem 0.5rem;
    border-radius: 4px;
    cursor: pointer;
}
.theme-toggle:hover, .overflow-button:hover {
    background: var(--color-surface);
    color: var(--color-text);
}
.overflow-menu {
    position: relative;
}
.overflow-dropdown {
    display: none;
    position: absolute;
    right: 0;
    top: 100%;
    min-width: 10rem;
    background: var(--color-surface);
    border: 1px solid var(--color-border);
    border-radius: 6px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
    z-index: 10;
}
.overflow-menu.open .overflow-dropdown {
    display: block;
}
.overflow-dropdown a {
    display: block;
    padding: 0.5rem 0.75rem;
    color: var(--color-text);
    font-size: 0.875rem;
}
.overflow-dropdown a:hover {
    background: var(--color-base);
}
"#
}

pub fn script() -> &'static str {
    r#"(function () {
  var root = document.documentElement;
  var stored = localStorage.getItem('theme');
  if (stored) root.setAttribute('data-theme', stored);

  var toggle = document.querySelector('.theme-toggle');
  if (toggle) {
    toggle.addEventListener('click', function () {
      var dark = root.getAttribute('data-theme') === 'dark' ||
        (!root.getAttribute('data-theme') &&
          window.matchMedia('(prefers-color-scheme: dark)').matches);
      var next = dark ? 'light' : 'dark';
      root.setAttribute('data-theme', next);
      localStorage.setItem('theme', next);
    });
  }

  var menu = document.querySelector('.overflow-menu');
  var button = document.querySelector('.overflow-button');
  if (menu && button) {
    button.addEventListener('click', function (event) {
      event.stopPropagation();
      menu.classList.toggle('open');
    });
    document.addEventListener('click', function () {
      menu.classList.remove('open');
    });
  }
})();"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_wins_over_image() {
        let ctx = NavContext {
            current_page: "Home".into(),
            cover_gradient: Some("linear-gradient(#fff, #000)".into()),
            cover_image: Some("/banner.png".into()),
            ..Default::default()
        };
        let html = header_html(&ctx);
        assert!(html.contains("linear-gradient"));
        assert!(!html.contains("/banner.png"));
    }

    #[test]
    fn breadcrumbs_include_parent_when_present() {
        let ctx = NavContext {
            current_page: "Projects".into(),
            parent_page: Some("Home".into()),
            parent_href: Some("/".into()),
            ..Default::default()
        };
        let html = header_html(&ctx);
        assert!(html.contains("<a href=\"/\">Home</a>"));
        assert!(html.contains("breadcrumb-current\">Projects"));
    }

    #[test]
    fn no_cover_emits_no_cover_element() {
        let ctx = NavContext {
            current_page: "Bare".into(),
            ..Default::default()
        };
        assert!(!header_html(&ctx).contains("page-cover"));
    }
}
