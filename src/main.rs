use std::path::Path;

use anyhow::Context;
use employee_stats::config::{self, GeneratorConfig};
use employee_stats::{ConsoleSink, LogSink, SummarySink, run};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => GeneratorConfig::from_json_file(Path::new(&path))
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => GeneratorConfig::default(),
    };
    config
        .apply_env_overrides()
        .context("Failed to apply environment overrides")?;

    let mut rng = match config::seed_from_env().context("Failed to read seed")? {
        Some(seed) => {
            info!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let summary = run(&config, &mut rng).context("Employee statistics run failed")?;

    LogSink.emit(&summary)?;
    ConsoleSink::stdout()
        .emit(&summary)
        .context("Failed to write summary")?;

    Ok(())
}
