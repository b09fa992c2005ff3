//! Soundbank - main entry point
//!
//! Usage: `soundbank [--test <scenario.toml>]`

use anyhow::{bail, Context, Result};
use soundbank::config::AppConfig;
use soundbank::testconfig::TestConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse `--test <path>` from the command line
fn test_script_arg() -> Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    let mut script = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--test" => match args.next() {
                Some(path) => script = Some(PathBuf::from(path)),
                None => bail!("--test requires a scenario file path"),
            },
            other => bail!("Unknown argument '{}'. Usage: soundbank [--test <scenario.toml>]", other),
        }
    }
    Ok(script)
}

fn main() -> Result<()> {
    let config = AppConfig::load_default().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Soundbank");

    let test_config = match test_script_arg()? {
        Some(path) => Some(TestConfig::load(&path).context("Failed to load test script")?),
        None => None,
    };

    soundbank::ui::run(config, test_config)
        .map_err(|e| anyhow::anyhow!("Window error: {}", e))
}
