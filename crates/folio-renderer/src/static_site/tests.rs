use chrono::{TimeZone, Utc};
use folio_store::Post;

use crate::config::SiteConfig;
use crate::static_site::{StaticSiteContext, StaticSiteOptions, StaticSiteWriter};
use crate::types::PageConfig;

fn test_post(slug: &str, published: bool) -> Post {
    Post {
        slug: slug.into(),
        title: format!("Post {slug}"),
        content: "# Heading\n\nSome **body** text.".into(),
        excerpt: "Some body text.".into(),
        icon: Some("✏️".into()),
        cover_image: None,
        published,
        created_at: Utc.with_ymd_and_hms(2025, 11, 2, 9, 30, 0).unwrap(),
        updated_at: None,
    }
}

fn test_page(slug: &str) -> PageConfig {
    serde_json::from_str(&format!(
        r#"{{
            "slug": "{slug}",
            "title": "Test Page",
            "description": "A page",
            "blocks": [
                {{"type": "h1", "text": "Hello"}},
                {{"type": "paragraph", "text": "World"}}
            ]
        }}"#
    ))
    .unwrap()
}

#[tokio::test]
async fn writes_page_file() {
    let dest = tempfile::tempdir().unwrap();
    let context = StaticSiteContext::new(SiteConfig::default(), dest.path().to_path_buf());
    let writer = StaticSiteWriter::new(context);

    writer.write_page(&test_page("about")).await.unwrap();

    let html = std::fs::read_to_string(dest.path().join("about.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Hello</h1>"));
    assert!(html.contains("<p>World</p>"));
}

#[tokio::test]
async fn clean_urls_nest_pages() {
    let dest = tempfile::tempdir().unwrap();
    let context = StaticSiteContext::new(SiteConfig::default(), dest.path().to_path_buf())
        .with_options(StaticSiteOptions::default() | StaticSiteOptions::CLEAN_URLS);
    let writer = StaticSiteWriter::new(context);

    writer.write_page(&test_page("projects")).await.unwrap();
    // "index" never nests, even with clean URLs on
    writer.write_page(&test_page("index")).await.unwrap();

    assert!(dest.path().join("projects").join("index.html").exists());
    assert!(dest.path().join("index.html").exists());
}

#[tokio::test]
async fn writes_published_posts_and_index() {
    let dest = tempfile::tempdir().unwrap();
    let context = StaticSiteContext::new(SiteConfig::default(), dest.path().to_path_buf());
    let writer = StaticSiteWriter::new(context);

    let posts = vec![test_post("first", true), test_post("draft", false)];
    writer.write_posts(&posts).await.unwrap();

    assert!(dest.path().join("blog").join("first.html").exists());
    assert!(!dest.path().join("blog").join("draft.html").exists());

    let index = std::fs::read_to_string(dest.path().join("blog").join("index.html")).unwrap();
    assert!(index.contains("Post first"));
    assert!(!index.contains("Post draft"));
}

#[tokio::test]
async fn post_page_renders_markdown_body() {
    let dest = tempfile::tempdir().unwrap();
    let context = StaticSiteContext::new(SiteConfig::default(), dest.path().to_path_buf());
    let writer = StaticSiteWriter::new(context);

    writer.write_posts(&[test_post("hello", true)]).await.unwrap();

    let html = std::fs::read_to_string(dest.path().join("blog").join("hello.html")).unwrap();
    assert!(html.contains("<h1>Heading</h1>"));
    assert!(html.contains("<strong>body</strong>"));
    assert!(html.contains("November 2, 2025"));
}

#[tokio::test]
async fn render_posts_flag_gates_blog_output() {
    let dest = tempfile::tempdir().unwrap();
    let context = StaticSiteContext::new(SiteConfig::default(), dest.path().to_path_buf())
        .with_options(StaticSiteOptions::empty());
    let writer = StaticSiteWriter::new(context);

    writer.write_posts(&[test_post("first", true)]).await.unwrap();
    assert!(!dest.path().join("blog").exists());
}
