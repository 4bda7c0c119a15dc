//! Prints summaries for the built-in sample workouts.
//!
//! Run with:
//! ```
//! RUST_LOG=debug cargo run -p workouts
//! ```

use std::io;

use tracing_subscriber::EnvFilter;
use workouts::{config::sample_packages, driver::run_batch};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let packages = sample_packages();
    tracing::debug!("Running {} sample packages", packages.len());

    let mut stdout = io::stdout().lock();
    run_batch(&packages, &mut stdout)?;

    Ok(())
}
