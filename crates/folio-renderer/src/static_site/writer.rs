use std::path::{Path, PathBuf};

use folio_store::Post;
use miette::IntoDiagnostic;
use tokio::io::AsyncWriteExt;

use crate::page::PageRenderer;
use crate::static_site::context::StaticSiteContext;
use crate::static_site::{StaticSiteOptions, document};
use crate::types::PageConfig;

/// Writes rendered documents under the destination directory. Each render
/// is independent; there is no cross-file state and no caching between
/// builds.
pub struct StaticSiteWriter {
    context: StaticSiteContext,
}

impl StaticSiteWriter {
    pub fn new(context: StaticSiteContext) -> Self {
        Self { context }
    }

    pub async fn write_page(&self, page: &PageConfig) -> miette::Result<()> {
        let renderer = PageRenderer::new(&self.context.site, &self.context.theme);
        let html = renderer.render_page(page);
        let path = self.page_path(&page.slug);
        write_file(&path, &html).await?;
        tracing::debug!(slug = %page.slug, path = %path.display(), "wrote page");
        Ok(())
    }

    /// Writes every published post, and the blog index when enabled.
    /// Unpublished posts are skipped, not errors.
    pub async fn write_posts(&self, posts: &[Post]) -> miette::Result<()> {
        if !self.context.options.contains(StaticSiteOptions::RENDER_POSTS) {
            return Ok(());
        }
        let blog_dir = self.context.destination.join(&self.context.site.blog_path);

        let published: Vec<&Post> = posts.iter().filter(|post| post.published).collect();
        let skipped = posts.len() - published.len();
        if skipped > 0 {
            tracing::debug!(skipped, "skipping unpublished posts");
        }

        for post in &published {
            let html = document::render_post_page(&self.context, post);
            let path = blog_dir.join(format!("{}.html", post.slug));
            write_file(&path, &html).await?;
            tracing::debug!(slug = %post.slug, "wrote post");
        }

        if self
            .context
            .options
            .contains(StaticSiteOptions::WRITE_BLOG_INDEX)
        {
            let html = document::render_blog_index(&self.context, &published);
            write_file(&blog_dir.join("index.html"), &html).await?;
        }
        Ok(())
    }

    fn page_path(&self, slug: &str) -> PathBuf {
        if self.context.options.contains(StaticSiteOptions::CLEAN_URLS) && slug != "index" {
            self.context.destination.join(slug).join("index.html")
        } else {
            self.context.destination.join(format!("{slug}.html"))
        }
    }
}

async fn write_file(path: &Path, contents: &str) -> miette::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.into_diagnostic()?;
    }
    let mut file = tokio::fs::File::create(path).await.into_diagnostic()?;
    file.write_all(contents.as_bytes()).await.into_diagnostic()?;
    Ok(())
}
