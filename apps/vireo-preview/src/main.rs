//! Vireo Preview - console host for a video review screen
//!
//! Loads a review from a JSON file, enriches its products over HTTP and
//! renders every view model through tracing. Intents are read from stdin:
//! `open <index>`, `play`, `back`. Ctrl-C or end of input closes the session.

mod console;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vireo_domain::{
    localization::StaticLocalizer, review::ProductLinks, ReviewModuleBuilder, ReviewSource,
};
use vireo_enrichment::{HttpEnrichmentClient, HttpEnrichmentConfig};

use crate::console::{parse_intent, ConsoleNavigator, ConsoleView};

fn env_or(name: &str, default: impl Into<String>) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        let default = default.into();
        info!("{name} not set, using default: {default}");
        default
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Vireo preview");

    // Load environment variables
    dotenvy::dotenv().ok();

    let review_path = env_or("VIREO_REVIEW_PATH", "review.json");
    let raw = std::fs::read_to_string(&review_path)
        .with_context(|| format!("reading review from {review_path}"))?;
    let source: ReviewSource =
        serde_json::from_str(&raw).with_context(|| format!("parsing review {review_path}"))?;

    let defaults = HttpEnrichmentConfig::default();
    let timeout_secs = env_or(
        "VIREO_ENRICHMENT_TIMEOUT_SECS",
        defaults.timeout.as_secs().to_string(),
    )
    .parse::<u64>()
    .context("VIREO_ENRICHMENT_TIMEOUT_SECS must be a number of seconds")?;
    let enrichment_config = HttpEnrichmentConfig {
        base_url: env_or("VIREO_ENRICHMENT_URL", defaults.base_url.clone()),
        timeout: Duration::from_secs(timeout_secs),
        ..defaults
    };

    let link_defaults = ProductLinks::default();
    let links = ProductLinks::new(
        env_or("VIREO_CATALOG_HOST", link_defaults.catalog_host),
        env_or("VIREO_IMAGE_HOST", link_defaults.image_host),
    );

    let client = Arc::new(HttpEnrichmentClient::new(enrichment_config)?);

    let session = ReviewModuleBuilder::new(source, links).start(
        ConsoleView::default(),
        ConsoleNavigator,
        StaticLocalizer::english(),
        client,
    );
    info!(session_id = %session.session_id(), "Review session started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_intent(&line) {
                    Some(intent) => session.send(intent),
                    None => info!(input = %line, "Unknown command (open <index> | play | back)"),
                }
            }
        }
    }

    session.shutdown().await;
    info!("Vireo preview stopped");

    Ok(())
}
