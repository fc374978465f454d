use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_renderer::config::{self, SiteConfig};
use folio_renderer::page::PageRenderer;
use folio_renderer::static_site::{StaticSiteContext, StaticSiteOptions, StaticSiteWriter};
use folio_renderer::theme::Theme;
use folio_store::StoreClient;
use miette::{IntoDiagnostic, Result};

#[derive(Parser)]
#[command(version, about = "folio - declarative static page compiler", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory of page config JSON files (site.json configures the site)
    source: Option<PathBuf>,

    /// Output directory for the generated site
    dest: Option<PathBuf>,

    /// Content store base URL for blog posts
    #[arg(long, env = "FOLIO_STORE_URL")]
    store_url: Option<String>,

    /// Content store API key
    #[arg(long, env = "FOLIO_STORE_KEY")]
    store_key: Option<String>,

    /// Skip fetching and rendering blog posts
    #[arg(long)]
    no_blog: bool,

    /// Write pages as <slug>/index.html instead of <slug>.html
    #[arg(long)]
    clean_urls: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single page config to stdout
    Page {
        /// Path to a page config JSON file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_miette();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Page { file }) => render_single_page(&file),
        None => {
            let source = cli.source.ok_or_else(|| {
                miette::miette!("Source directory required. Usage: folio <source> <dest>")
            })?;
            let dest = cli.dest.ok_or_else(|| {
                miette::miette!("Destination directory required. Usage: folio <source> <dest>")
            })?;
            build_site(
                source,
                dest,
                cli.store_url,
                cli.store_key,
                cli.no_blog,
                cli.clean_urls,
            )
            .await
        }
    }
}

fn render_single_page(file: &PathBuf) -> Result<()> {
    let site_path = file
        .parent()
        .map(|dir| dir.join("site.json"))
        .unwrap_or_else(|| PathBuf::from("site.json"));
    let site = SiteConfig::load(site_path)?;
    let page = config::load_page_config(file)?;

    let theme = Theme::default();
    let renderer = PageRenderer::new(&site, &theme);
    println!("{}", renderer.render_page(&page));
    Ok(())
}

async fn build_site(
    source: PathBuf,
    dest: PathBuf,
    store_url: Option<String>,
    store_key: Option<String>,
    no_blog: bool,
    clean_urls: bool,
) -> Result<()> {
    if !source.exists() {
        return Err(miette::miette!(
            "Source directory not found: {}",
            source.display()
        ));
    }
    std::fs::create_dir_all(&dest).into_diagnostic()?;

    let site = SiteConfig::load(source.join("site.json"))?;
    let mut options = StaticSiteOptions::default();
    if clean_urls {
        options |= StaticSiteOptions::CLEAN_URLS;
    }
    let context = StaticSiteContext::new(site, dest.clone()).with_options(options);
    let writer = StaticSiteWriter::new(context);

    println!("→ Rendering pages...");
    let start = std::time::Instant::now();

    let mut configs: Vec<PathBuf> = std::fs::read_dir(&source)
        .into_diagnostic()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .filter(|path| path.file_name().and_then(|name| name.to_str()) != Some("site.json"))
        .collect();
    configs.sort();
    tracing::debug!(count = configs.len(), source = %source.display(), "found page configs");

    for path in &configs {
        let page = config::load_page_config(path)?;
        writer.write_page(&page).await?;
    }
    println!("✓ Rendered {} pages", configs.len());

    if !no_blog {
        match (store_url, store_key) {
            (Some(url), Some(key)) => {
                println!("→ Fetching posts...");
                let client = StoreClient::new(&url, key)?;
                let posts = client.fetch_posts().await?;
                writer.write_posts(&posts).await?;
                println!("✓ Rendered {} posts", posts.len());
            }
            _ => {
                println!("⚠ No content store configured");
                println!("  Set FOLIO_STORE_URL / FOLIO_STORE_KEY (or pass --store-url/--store-key) to build the blog");
            }
        }
    }

    let elapsed = start.elapsed();
    println!("✓ Done in {:.2}s", elapsed.as_secs_f64());
    println!("✓ Output: {}", dest.display());
    Ok(())
}

fn init_miette() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))
    .expect("couldn't set the miette hook");
    miette::set_panic_hook();
}
