//! Configuration library for the remote file watcher.
//!
//! Everything the watcher needs at startup comes from environment variables:
//! the storage bucket (`DATA_BUCKET`), an ordered list of watch targets
//! (`URL_1`, `URL_2`, … up to the first gap) and a handful of optional
//! settings. Lookups go through [`EnvSource`] so the loader is a pure
//! function of its source and can be exercised without touching the process
//! environment.

pub mod constants;
pub mod env;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use env::{EnvFileOverlay, EnvSource, MapEnv, ProcessEnv};
pub use loader::{
    ConfigLoad, ConfigLoader, bucket::resolve_bucket, error::ConfigLoadError, urls::discover_urls,
};
pub use models::{
    Config, ConfigMetadata, DiscoveryStop, StorageLayout, UrlDiscovery, WatchTarget,
};
pub use validation::{ConfigWarning, ConfigWarnings};
