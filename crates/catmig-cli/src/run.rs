//! One export run: collect every product, map it, write the CSV.
//!
//! Every fatal condition (no session, a failed page, nothing fetched) ends
//! the run with an error and no file.

use std::path::PathBuf;

use anyhow::Context;
use catmig_core::{AppConfig, SessionProvider};
use catmig_export::{ExportError, ExportSummary};
use catmig_scraper::{ScraperError, ShoplineClient};

/// Per-run settings after CLI overrides are applied.
#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub out_dir: PathBuf,
    pub limit: u32,
    pub dry_run: bool,
}

pub(crate) async fn run_export(
    config: &AppConfig,
    session: &dyn SessionProvider,
    options: &RunOptions,
) -> anyhow::Result<ExportSummary> {
    let client = ShoplineClient::new(
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let products = match client.fetch_all_products(session, options.limit).await {
        Ok(products) => products,
        Err(e @ ScraperError::Unauthenticated) => {
            tracing::error!("no session identity; aborting before any request");
            return Err(e.into());
        }
        Err(e) => {
            tracing::error!(error = %e, "fetching products failed; nothing exported");
            return Err(anyhow::Error::new(e)
                .context("failed to fetch product data; check the network or log in again"));
        }
    };
    tracing::info!(fetched = products.len(), "collected products");

    let result = if options.dry_run {
        catmig_export::dry_run_catalog(&products)
    } else {
        catmig_export::export_catalog(&products, &options.out_dir)
    };

    match result {
        Err(ExportError::EmptyResult) => {
            tracing::error!("no products fetched; no file produced");
            Err(ExportError::EmptyResult.into())
        }
        other => other.context("failed to export products"),
    }
}
