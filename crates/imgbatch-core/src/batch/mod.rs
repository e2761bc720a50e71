//! Batch fetcher: one bounded-concurrency fetch unit per product code.
//!
//! The code rows are walked in order. Each non-blank code waits for one of
//! `processor` semaphore permits, then its unit runs on the blocking pool
//! (libcurl's easy interface blocks). The permit is dropped when the unit
//! returns. Finished units are reaped as the loop goes, and the batch ends
//! once every launched unit has been joined.

mod unit;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};

use crate::codes::CodeRow;
use crate::fetch::Fetcher;
use crate::url_model::UrlTemplate;
use crate::variant::VariantDescriptor;

pub use unit::{FetchJob, VariantOutcome};
use unit::{run_unit, UnitContext};

/// Counts for one batch run. Only `Done` is logged; the counts are for
/// callers and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Code rows whose cell was blank.
    pub rows_skipped: u32,
    /// Fetch units launched (one per non-blank code).
    pub units_run: u32,
    /// Units that finished without panicking.
    pub units_finished: u32,
    /// Image files written.
    pub files_written: u32,
}

impl BatchSummary {
    fn record(&mut self, res: Result<Vec<VariantOutcome>, JoinError>) {
        match res {
            Ok(outcomes) => {
                self.units_finished += 1;
                self.files_written += outcomes
                    .iter()
                    .filter(|o| matches!(o, VariantOutcome::Saved(_)))
                    .count() as u32;
            }
            Err(e) => tracing::error!("fetch unit task failed: {}", e),
        }
    }
}

/// Everything a batch run needs, passed explicitly to every unit.
pub struct BatchJob {
    ctx: UnitContext,
    processor: usize,
}

impl BatchJob {
    /// `processor` below 1 is treated as 1.
    pub fn new(
        variants: Vec<VariantDescriptor>,
        template: UrlTemplate,
        output_dir: PathBuf,
        fetcher: Arc<dyn Fetcher>,
        processor: usize,
    ) -> Self {
        Self {
            ctx: UnitContext {
                variants: variants.into(),
                template: Arc::new(template),
                output_dir: Arc::from(output_dir),
                fetcher,
            },
            processor: processor.max(1),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.ctx.output_dir
    }

    pub fn processor(&self) -> usize {
        self.processor
    }

    pub fn variants(&self) -> &[VariantDescriptor] {
        &self.ctx.variants
    }

    /// Runs one unit per non-blank code in `rows` and waits for all of them.
    pub async fn run<I>(&self, rows: I) -> Result<BatchSummary>
    where
        I: IntoIterator<Item = CodeRow>,
    {
        let slots = Arc::new(Semaphore::new(self.processor));
        let mut join_set = JoinSet::new();
        let mut summary = BatchSummary::default();

        for row in rows {
            let Some(code) = row.code else {
                tracing::info!("data in row {} is empty", row.row);
                summary.rows_skipped += 1;
                continue;
            };
            while let Some(res) = join_set.try_join_next() {
                summary.record(res);
            }
            let permit = Arc::clone(&slots)
                .acquire_owned()
                .await
                .context("fetch slot semaphore closed")?;
            let ctx = self.ctx.clone();
            join_set.spawn_blocking(move || {
                let _permit = permit;
                run_unit(&ctx, &code)
            });
            summary.units_run += 1;
        }

        while let Some(res) = join_set.join_next().await {
            summary.record(res);
        }

        tracing::info!("Done");
        Ok(summary)
    }
}
