use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dblp_publist::config::{DEFAULT_CONTAINER_ID, DEFAULT_FEED_URL};
use dblp_publist::fetch::DblpFetcher;
use dblp_publist::pipeline::{render_page, run_pipeline};
use dblp_publist::{HostDocument, PublistConfig, extract_publications};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Render a researcher's DBLP publication list as HTML
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// DBLP person feed to fetch
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    url: String,

    /// Read the feed from a local XML file instead of fetching it
    #[arg(short, long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Host page to render into (defaults to a built-in standalone page)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Id of the container element in the host page
    #[arg(long, default_value = DEFAULT_CONTAINER_ID)]
    container_id: String,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the extracted publications as JSON instead of HTML
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = PublistConfig::new();
    config
        .set_feed_url(cli.url.as_str())
        .set_container_id(cli.container_id.as_str());

    let local_feed = match &cli.input {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read feed {}", path.display()))?,
        ),
        None => None,
    };

    let rendered = if cli.json {
        let document = match local_feed {
            Some(feed) => Some(feed),
            None => DblpFetcher::new(config.feed_url()).fetch().await,
        };
        let publications = extract_publications(document.as_deref());
        serde_json::to_string_pretty(&publications).context("Failed to serialize publications")?
    } else {
        let host = match &cli.template {
            Some(path) => HostDocument::new(
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read template {}", path.display()))?,
            ),
            None => HostDocument::default(),
        };
        let page = match local_feed {
            Some(feed) => render_page(Some(&feed), config.container_id(), &host),
            None => run_pipeline(&config, &host).await,
        };
        page.context("Failed to render publications")?
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
