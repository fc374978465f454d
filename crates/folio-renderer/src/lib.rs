//! folio renderer
//!
//! Renders declarative page descriptions (trees of typed content blocks)
//! and Markdown blog posts into complete, styled HTML documents.
//!
//! The core is pure: [`page::render_block`], [`page::inline::format_text`]
//! and [`markdown::to_html`] are synchronous string-in/string-out functions
//! with no I/O. File output and post fetching live at the edges
//! ([`static_site`] and the `folio-store` crate).

pub mod config;
pub mod css;
pub mod escape;
pub mod markdown;
pub mod nav;
pub mod page;
pub mod static_site;
pub mod theme;
pub mod types;

pub use config::{ConfigError, SiteConfig};
pub use page::PageRenderer;
pub use theme::Theme;
pub use types::{Block, PageConfig};
