//! Static site output.
//!
//! Turns rendered documents into files on disk: one `<slug>.html` per page
//! config, one `blog/<slug>.html` per published post, plus the blog index.
//! Rendering itself stays pure; only this layer touches the filesystem.

pub mod context;
pub mod document;
pub mod writer;

#[cfg(test)]
mod tests;

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StaticSiteOptions: u32 {
        /// Render fetched posts into the blog directory.
        const RENDER_POSTS = 1 << 1;
        /// Write `blog/index.html` listing the published posts.
        const WRITE_BLOG_INDEX = 1 << 2;
        /// Write `<slug>/index.html` instead of `<slug>.html`.
        const CLEAN_URLS = 1 << 3;
    }
}

impl Default for StaticSiteOptions {
    fn default() -> Self {
        Self::RENDER_POSTS | Self::WRITE_BLOG_INDEX
    }
}

pub use context::StaticSiteContext;
pub use writer::StaticSiteWriter;
