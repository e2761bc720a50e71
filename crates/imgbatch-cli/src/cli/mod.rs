//! CLI for imgbatch.

mod run;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use imgbatch_core::codes::DEFAULT_START_ROW;

/// Fetch product images for every code in a spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "imgbatch")]
#[command(
    about = "imgbatch: fetch product images listed in a spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Spreadsheet with one product code per row in the first column.
    #[arg(long, default_value = "./codes.xlsx", value_name = "PATH")]
    pub codes: PathBuf,

    /// Variant configuration spreadsheet (prefix/suffix/size per image). Header names must not change.
    #[arg(long, default_value = "./images.xlsx", value_name = "PATH")]
    pub images: PathBuf,

    /// First code row to process (0 is the header row).
    #[arg(long = "startRow", visible_alias = "start-row", default_value_t = DEFAULT_START_ROW, value_name = "N")]
    pub start_row: u32,

    /// Number of product codes fetched concurrently [default: 3, or `processor` from the config file].
    #[arg(long, value_name = "N")]
    pub processor: Option<usize>,

    /// Config file (default: ~/.config/imgbatch/config.toml, created if missing).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preferred output directory [default: images]. An alternate name is used if it exists.
    #[arg(long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        run::run_batch(cli).await
    }
}

#[cfg(test)]
mod tests;
