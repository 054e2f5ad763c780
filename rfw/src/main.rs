//! # Remote file watcher
//!
//! Startup gate for the watcher: reads the data bucket and the numbered
//! `URL_n` watch targets from the environment (optionally layered over a
//! `.env` file), reports what it found and exits. A missing `URL_1` or
//! `DATA_BUCKET` aborts with a non-zero status.

use std::process::ExitCode;

use anyhow::Context;
use rfw_config::{
    Config, ConfigLoader, ConfigWarnings, EnvSource, ProcessEnv, constants::DEBUG_KEY,
    util::parse_bool_var,
};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Sources are prepared before logging so `DEBUG` from an env file counts.
    let loader = ConfigLoader::from_process_env();
    let debug = match &loader {
        Ok(loader) => parse_bool_var(loader.source(), DEBUG_KEY),
        Err(_) => parse_bool_var(&ProcessEnv, DEBUG_KEY),
    };
    init_tracing(debug.unwrap_or(false));
    info!("Starting remote file watcher");

    let result = loader
        .context("failed to prepare configuration sources")
        .and_then(|loader| run(&loader));

    match result {
        Ok(config) => {
            report(&config);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout).with_ansi(false))
        .init();
}

fn run<E: EnvSource>(loader: &ConfigLoader<E>) -> anyhow::Result<Config> {
    if let Some(path) = loader.env_file() {
        info!("Loaded env file {}", path.display());
    }

    let load = loader.load().context("invalid configuration")?;
    log_warnings(&load.warnings);

    Ok(load.config)
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => warn!("{} (hint: {hint})", warning.message),
            None => warn!("{}", warning.message),
        }
    }
}

fn report(config: &Config) {
    for target in config.targets() {
        debug!(
            index = target.index,
            hash_key = %target.hash_key(&config.layout),
            data_key = %target.data_key(&config.layout),
            "watch target {}",
            target.url
        );
    }
    info!("Watching {} URL(s) into bucket {}: {:?}", config.urls.len(), config.bucket, config.urls);
}
