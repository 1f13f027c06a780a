use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matching::batch::run_batch;
use matching::config::Config;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so stdout carries only the JSON result
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting matching v{}", env!("CARGO_PKG_VERSION"));

    let screening = config.screening();
    info!(
        "Thresholds: high >= {}, medium >= {}; experience tolerance {} yrs",
        screening.thresholds.high,
        screening.thresholds.medium,
        screening.experience_tolerance_years
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run_batch(stdin.lock(), stdout.lock(), &screening) {
        Ok(count) => {
            info!("Wrote {count} screening summaries");
            Ok(())
        }
        Err(e) => {
            error!(code = e.code(), "Screening failed: {e}");
            Err(e.into())
        }
    }
}
