//! One fetch unit: every variant of one product code, in order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::codes::ProductCode;
use crate::fetch::{FetchError, Fetcher};
use crate::storage::write_image;
use crate::url_model::{image_file_name, UrlTemplate};
use crate::variant::VariantDescriptor;

/// URL and output path for one (code, variant) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    pub url: String,
    pub path: PathBuf,
}

impl FetchJob {
    pub fn build(
        template: &UrlTemplate,
        output_dir: &Path,
        code: &ProductCode,
        variant: &VariantDescriptor,
    ) -> Self {
        Self {
            url: template.render(code, variant),
            path: output_dir.join(image_file_name(code, variant)),
        }
    }
}

/// What happened to one variant. Failures are logged where they occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantOutcome {
    Saved(PathBuf),
    TransportFailed,
    BadStatus(u32),
    BodyFailed,
    WriteFailed,
}

/// Shared, read-only state every unit works from.
#[derive(Clone)]
pub(crate) struct UnitContext {
    pub variants: Arc<[VariantDescriptor]>,
    pub template: Arc<UrlTemplate>,
    pub output_dir: Arc<Path>,
    pub fetcher: Arc<dyn Fetcher>,
}

/// Fetches every variant of `code`. A failed variant never stops the ones
/// after it.
pub(crate) fn run_unit(ctx: &UnitContext, code: &ProductCode) -> Vec<VariantOutcome> {
    tracing::debug!("begin {}", code);
    let outcomes = ctx
        .variants
        .iter()
        .map(|variant| {
            let job = FetchJob::build(&ctx.template, &ctx.output_dir, code, variant);
            fetch_one(ctx.fetcher.as_ref(), &job)
        })
        .collect();
    tracing::debug!("end {}", code);
    outcomes
}

fn fetch_one(fetcher: &dyn Fetcher, job: &FetchJob) -> VariantOutcome {
    let response = match fetcher.get(&job.url) {
        Ok(r) => r,
        Err(FetchError::Body(e)) => {
            tracing::warn!("500 {} image read error: {}", job.url, e);
            return VariantOutcome::BodyFailed;
        }
        Err(e) => {
            tracing::warn!("500 {} {}", job.url, e);
            return VariantOutcome::TransportFailed;
        }
    };

    if !response.is_ok() {
        tracing::warn!("{} {} {}", response.status, job.url, response.status_text());
        return VariantOutcome::BadStatus(response.status);
    }

    match write_image(&job.path, &response.body) {
        Ok(()) => {
            tracing::debug!("saved {} ({} bytes)", job.path.display(), response.body.len());
            VariantOutcome::Saved(job.path.clone())
        }
        Err(e) => {
            tracing::warn!("500 {} image write error: {}", job.url, e);
            VariantOutcome::WriteFailed
        }
    }
}
