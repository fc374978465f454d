use std::path::PathBuf;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::static_site::StaticSiteOptions;
use crate::theme::Theme;

/// Shared state for one build: cheap to clone, nothing mutable.
#[derive(Debug, Clone)]
pub struct StaticSiteContext {
    pub options: StaticSiteOptions,
    pub site: Arc<SiteConfig>,
    pub theme: Arc<Theme>,
    pub destination: PathBuf,
}

impl StaticSiteContext {
    pub fn new(site: SiteConfig, destination: PathBuf) -> Self {
        Self {
            options: StaticSiteOptions::default(),
            site: Arc::new(site),
            theme: Arc::new(Theme::default()),
            destination,
        }
    }

    pub fn with_options(mut self, options: StaticSiteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Arc::new(theme);
        self
    }
}
