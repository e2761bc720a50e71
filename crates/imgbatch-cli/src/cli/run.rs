//! The batch run: settings, startup checks, descriptors, fetch.

use anyhow::{Context, Result};
use imgbatch_core::batch::BatchJob;
use imgbatch_core::config::{self, BatchConfig};
use imgbatch_core::fetch::CurlFetcher;
use imgbatch_core::{codes, logging, storage, variant};
use std::path::Path;
use std::sync::Arc;

use super::Cli;

pub async fn run_batch(cli: Cli) -> Result<()> {
    let cfg = match &cli.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_init()?,
    };
    init_logging(&cfg);
    tracing::debug!("loaded config: {:?}", cfg);

    ensure_input(&cli.codes, "code spreadsheet")?;
    ensure_input(&cli.images, "variant spreadsheet")?;
    let template = cfg.template().context("invalid url_template in config")?;

    let preferred = cli.output_dir.clone().unwrap_or_else(|| cfg.output_dir.clone());
    let output_dir = storage::create_output_dir(&preferred)?;

    let variants = variant::load_variants(&cli.images)?;
    let rows = codes::load_code_rows(&cli.codes, cli.start_row)?;

    let processor = effective_processor(&cli, &cfg);
    let fetcher = Arc::new(CurlFetcher::new(cfg.curl_options()));
    let batch = BatchJob::new(variants, template, output_dir, fetcher, processor);
    tracing::info!("images will be stored in {}", batch.output_dir().display());
    tracing::info!(
        "{} active variant(s) from {}, {} at a time",
        batch.variants().len(),
        cli.images.display(),
        batch.processor()
    );
    let summary = batch.run(rows).await?;
    tracing::debug!("batch summary: {:?}", summary);
    Ok(())
}

fn init_logging(cfg: &BatchConfig) {
    match &cfg.log_file {
        Some(path) => {
            if let Err(e) = logging::init_logging(path) {
                logging::init_logging_stdout();
                tracing::warn!("file logging unavailable ({:#}), logging to stdout", e);
            }
        }
        None => logging::init_logging_stdout(),
    }
}

/// Input spreadsheets must exist before any directory is created or fetch started.
fn ensure_input(path: &Path, what: &str) -> Result<()> {
    std::fs::metadata(path)
        .with_context(|| format!("{} not found: {}", what, path.display()))?;
    Ok(())
}

/// `--processor` wins over the config file.
pub(crate) fn effective_processor(cli: &Cli, cfg: &BatchConfig) -> usize {
    cli.processor.unwrap_or(cfg.processor).max(1)
}
