mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::run::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "catmig")]
#[command(about = "Export a Shopline product catalog as a Shopify product import CSV")]
struct Cli {
    /// Directory to write the CSV into (overrides `CATMIG_OUTPUT_DIR`)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Products requested per page (overrides `CATMIG_PAGE_LIMIT`)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    limit: Option<u32>,

    /// Fetch and map the catalog without writing the CSV
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn run_options(&self, config: &catmig_core::AppConfig) -> RunOptions {
        RunOptions {
            out_dir: self
                .out_dir
                .clone()
                .unwrap_or_else(|| config.output_dir.clone()),
            limit: self.limit.unwrap_or(config.page_limit),
            dry_run: self.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = catmig_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    let session = catmig_core::StaticSessionProvider::from_config(&config);
    let options = cli.run_options(&config);

    let summary = run::run_export(&config, &session, &options).await?;

    log_summary(&summary);

    Ok(())
}

/// Emits the end-of-run event carrying every summary count.
fn log_summary(summary: &catmig_export::ExportSummary) {
    match &summary.path {
        Some(path) => tracing::info!(
            path = %path.display(),
            fetched = summary.fetched_products,
            exported = summary.exported_products,
            skipped_variants = summary.skipped_variants,
            skipped_untitled = summary.skipped_untitled,
            rows = summary.rows_written,
            "export complete"
        ),
        None => tracing::info!(
            fetched = summary.fetched_products,
            exported = summary.exported_products,
            skipped_variants = summary.skipped_variants,
            skipped_untitled = summary.skipped_untitled,
            rows = summary.rows_written,
            "dry run complete; no file written"
        ),
    }
}
