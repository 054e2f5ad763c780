//! Turns an [`EnvSource`] into a validated [`Config`].
//!
//! Order matters and is fixed: URLs are discovered first, then the bucket is
//! resolved, so a missing `URL_1` is reported ahead of a missing
//! `DATA_BUCKET`. Optional settings come last and never fail.

pub mod bucket;
pub mod error;
pub mod urls;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    constants::{DEFAULT_AWS_REGION, DEFAULT_ENV_FILE, ENV_FILE_KEY},
    env::{EnvFileOverlay, EnvSource, ProcessEnv},
    models::{Config, ConfigMetadata, StorageLayout, sources::OptionalSettings},
    util::non_empty_var,
    validation::{ConfigWarnings, collect_warnings},
};

use bucket::resolve_bucket;
use error::ConfigLoadError;
use urls::discover_urls;

/// A loaded configuration plus any non-fatal findings about it.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// The validated configuration.
    pub config: Config,
    /// Findings that did not stop the load.
    pub warnings: ConfigWarnings,
}

/// Loads [`Config`] from an [`EnvSource`], optionally layered over an env
/// file.
#[derive(Debug)]
pub struct ConfigLoader<E> {
    env: E,
    env_file: Option<PathBuf>,
}

impl<E: EnvSource> ConfigLoader<E> {
    /// Loader reading from `env` alone.
    pub fn new(env: E) -> Self {
        Self { env, env_file: None }
    }

    /// The source every lookup goes through, env file included.
    pub fn source(&self) -> &E {
        &self.env
    }

    /// Env file layered under the source, if one was picked up.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Read URLs, bucket and optional settings, in that order.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        info!("Loading configuration");

        let discovery = discover_urls(&self.env)?;
        let bucket = resolve_bucket(&self.env)?;

        let optional = OptionalSettings::gather(&self.env);
        match &optional.alert_sns_channel {
            Some(channel) => debug!("alert_sns_channel set to '{channel}'"),
            None => debug!("ALERT_SNS_CHANNEL is not set. Running without alerting"),
        }

        let aws_region = optional.aws_region.unwrap_or_else(|| DEFAULT_AWS_REGION.to_string());
        info!("Region set to {aws_region}");

        let debug = optional.debug.unwrap_or(false);
        if debug {
            debug!("Debug mode enabled");
        }

        let config = Config {
            bucket,
            urls: discovery.urls,
            alert_sns_channel: optional.alert_sns_channel,
            aws_region,
            debug,
            layout: StorageLayout::default(),
            metadata: ConfigMetadata {
                env_file: self.env_file.clone(),
                url_discovery: discovery.stop,
            },
        };
        let warnings = collect_warnings(&self.env, &config);

        debug!("Configuration successfully loaded");
        Ok(ConfigLoad { config, warnings })
    }
}

impl ConfigLoader<Box<dyn EnvSource>> {
    /// The process environment, overlaid with a dotenv file when one is
    /// configured (see [`ConfigLoader::layered`]).
    pub fn from_process_env() -> Result<Self, ConfigLoadError> {
        Self::layered(ProcessEnv, Path::new("."))
    }

    /// `env`, overlaid with the file named by `RFW_ENV_FILE`, or with
    /// `base_dir/.env` when that variable is unset and the file exists.
    ///
    /// An explicitly named file that cannot be read is an error; a missing
    /// default file is not.
    pub fn layered<S: EnvSource + 'static>(
        env: S,
        base_dir: &Path,
    ) -> Result<Self, ConfigLoadError> {
        let path = match non_empty_var(&env, ENV_FILE_KEY) {
            Some(explicit) => Some(PathBuf::from(explicit)),
            None => {
                let default = base_dir.join(DEFAULT_ENV_FILE);
                default.is_file().then_some(default)
            }
        };

        let Some(path) = path else {
            return Ok(Self::new(Box::new(env)));
        };

        let overlay = EnvFileOverlay::read(env, &path)?;
        Ok(Self {
            env: Box::new(overlay),
            env_file: Some(path),
        })
    }
}
