mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Parse flags, load settings, run the batch.
    if let Err(err) = Cli::run_from_args().await {
        eprintln!("imgbatch error: {:#}", err);
        std::process::exit(1);
    }
}
