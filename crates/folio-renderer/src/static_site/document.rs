//! Post page and blog index templates.
//!
//! Blog posts are Markdown from the content store; they get their own page
//! template (same visual shell, different body) rather than reusing the
//! block pipeline's assembly.

use std::fmt::Write;

use folio_store::Post;

use crate::css::generate_base_css;
use crate::escape::escape_html;
use crate::markdown;
use crate::nav::{self, NavContext};
use crate::static_site::context::StaticSiteContext;

pub fn render_post_page(ctx: &StaticSiteContext, post: &Post) -> String {
    let mut html = String::with_capacity(16 * 1024);
    let site = &ctx.site;
    let blog_href = format!("/{}", site.blog_path);
    let url = format!("{}/{}/{}", site.base_url, site.blog_path, post.slug);

    write_head(
        ctx,
        &mut html,
        &post.title,
        &post.excerpt,
        &url,
        post.cover_image.as_deref().unwrap_or(&site.default_cover),
        "article",
    );

    let nav_ctx = NavContext {
        current_page: post.title.clone(),
        parent_page: Some("Blog".into()),
        parent_href: Some(blog_href.clone()),
        cover_image: Some(
            post.cover_image
                .clone()
                .unwrap_or_else(|| site.default_cover.clone()),
        ),
        cover_gradient: None,
        page_icon: post.icon.clone(),
        page_icon_image: post.icon.is_none().then(|| site.profile_image.clone()),
    };
    html.push_str(&nav::header_html(&nav_ctx));
    html.push('\n');

    html.push_str("<main class=\"page-content\">\n");
    let _ = write!(html, "<h1>{}</h1>\n", escape_html(&post.title));
    let _ = write!(
        html,
        "<div class=\"post-meta\">{}</div>\n",
        post.created_at.format("%B %-d, %Y")
    );
    html.push_str("<article class=\"post-content\">\n");
    html.push_str(&markdown::to_html(&post.content));
    html.push_str("\n</article>\n</main>\n");

    let _ = write!(html, "<a class=\"back-link\" href=\"{}\">← Blog</a>\n", blog_href);

    html.push_str("<script>\n");
    html.push_str(nav::script());
    html.push_str("\n</script>\n</body>\n</html>\n");
    html
}

pub fn render_blog_index(ctx: &StaticSiteContext, posts: &[&Post]) -> String {
    let mut html = String::with_capacity(8 * 1024);
    let site = &ctx.site;
    let url = format!("{}/{}", site.base_url, site.blog_path);

    write_head(
        ctx,
        &mut html,
        "Blog",
        "",
        &url,
        &site.default_cover,
        "website",
    );

    let nav_ctx = NavContext {
        current_page: "Blog".into(),
        parent_page: Some(site.site_name.clone()),
        parent_href: Some("/".into()),
        cover_image: Some(site.default_cover.clone()),
        page_icon_image: Some(site.profile_image.clone()),
        ..Default::default()
    };
    html.push_str(&nav::header_html(&nav_ctx));
    html.push('\n');

    html.push_str("<main class=\"page-content\">\n<h1>Blog</h1>\n<div class=\"post-list\">\n");
    for post in posts {
        let _ = write!(
            html,
            "<a class=\"post-card\" href=\"/{}/{}\">",
            site.blog_path,
            escape_html(&post.slug)
        );
        if let Some(cover) = &post.cover_image {
            let _ = write!(
                html,
                "<img class=\"post-card-cover\" src=\"{}\" alt=\"\">",
                escape_html(cover)
            );
        }
        html.push_str("<div class=\"post-card-body\">");
        let _ = write!(
            html,
            "<div class=\"post-card-title\">{}{}</div>",
            post.icon
                .as_deref()
                .map(|icon| format!("<span class=\"post-card-icon\">{}</span> ", icon))
                .unwrap_or_default(),
            escape_html(&post.title)
        );
        if !post.excerpt.is_empty() {
            let _ = write!(
                html,
                "<div class=\"post-card-excerpt\">{}</div>",
                escape_html(&post.excerpt)
            );
        }
        let _ = write!(
            html,
            "<div class=\"post-card-date\">{}</div>",
            post.created_at.format("%B %-d, %Y")
        );
        html.push_str("</div></a>\n");
    }
    html.push_str("</div>\n</main>\n");

    html.push_str("<script>\n");
    html.push_str(nav::script());
    html.push_str("\n</script>\n</body>\n</html>\n");
    html
}

fn write_head(
    ctx: &StaticSiteContext,
    html: &mut String,
    title: &str,
    description: &str,
    url: &str,
    image: &str,
    og_type: &str,
) {
    let site = &ctx.site;
    let title = escape_html(title);
    let description = escape_html(description);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = write!(
        html,
        "<title>{} · {}</title>\n",
        title,
        escape_html(&site.site_name)
    );
    let _ = write!(html, "<meta name=\"description\" content=\"{}\">\n", description);
    let _ = write!(html, "<link rel=\"canonical\" href=\"{}\">\n", escape_html(url));
    let _ = write!(html, "<meta property=\"og:title\" content=\"{}\">\n", title);
    let _ = write!(
        html,
        "<meta property=\"og:description\" content=\"{}\">\n",
        description
    );
    let _ = write!(html, "<meta property=\"og:type\" content=\"{}\">\n", og_type);
    let _ = write!(html, "<meta property=\"og:url\" content=\"{}\">\n", escape_html(url));
    let _ = write!(
        html,
        "<meta property=\"og:image\" content=\"{}\">\n",
        escape_html(image)
    );
    html.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");

    html.push_str("<style>\n");
    html.push_str(&generate_base_css(&ctx.theme));
    html.push_str(nav::styles());
    html.push_str("</style>\n</head>\n<body>\n");
}
