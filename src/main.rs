use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use find_index_image::catalog::cache::CatalogCache;
use find_index_image::catalog::datagrepper::DatagrepperFeed;
use find_index_image::config::{FeedConfig, config_path};

#[derive(Parser)]
#[command(name = "find-index-image")]
#[command(version, about = "Find the newest index image per OCP version for operator bundles")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/find-index-image/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// datagrepper base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Message topic to query
    #[arg(long)]
    topic: Option<String>,

    /// Only consider messages containing this text
    #[arg(long)]
    contains: Option<String>,

    /// Time window in seconds
    #[arg(long)]
    delta: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,
}

impl Cli {
    fn feed_config(&self) -> anyhow::Result<FeedConfig> {
        let path = self.config.clone().unwrap_or_else(config_path);
        let mut config = FeedConfig::load(&path)?;

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(topic) = &self.topic {
            config.topic = topic.clone();
        }
        if let Some(contains) = &self.contains {
            config.contains = contains.clone();
        }
        if let Some(delta) = self.delta {
            config.delta_secs = delta;
        }
        if self.insecure {
            config.accept_invalid_certs = true;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout only carries the catalog
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();

    let config = cli.feed_config()?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let cache = CatalogCache::new(Arc::new(DatagrepperFeed::new(&config)));
            let catalog = cache.get(false).await?;
            println!("{}", serde_json::to_string_pretty(&*catalog)?);
            Ok::<(), anyhow::Error>(())
        })
}
