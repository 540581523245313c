//! Mine worker harness entry point.
//!
//! ```bash
//! # Standard crew, full day
//! cargo run -p mine-cli
//!
//! # One named gold digger, custom actions
//! MINE_WORKER=gold_digger MINE_WORKER_NAME=Bob cargo run -p mine-cli -- wake_up work sleep
//! ```

use anyhow::Result;
use mine_cli::{CliConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    logging::setup_logging()?;

    let config = CliConfig::from_env()?.with_args(std::env::args().skip(1));
    tracing::debug!(?config, "configuration loaded");

    let mut stdout = std::io::stdout().lock();
    mine_cli::run(&config, &mut stdout)
}
