//! Typed configuration produced by the loader.

pub mod sources;

use std::path::PathBuf;

use crate::constants::{DATA_PREFIX, HASH_PREFIX};

/// Fully resolved watcher configuration.
///
/// Built once by [`ConfigLoader`](crate::ConfigLoader) and handed by value to
/// whatever consumes it; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Storage bucket receiving fetched bodies and their hashes. Never empty.
    pub bucket: String,
    /// Watch targets in `URL_1`, `URL_2`, … order. Never empty, and no
    /// element is an empty string.
    pub urls: Vec<String>,
    /// Alerting channel; `None` runs without alerts.
    pub alert_sns_channel: Option<String>,
    /// Region for storage and alerting clients.
    pub aws_region: String,
    /// Extra diagnostic output requested through `DEBUG`.
    pub debug: bool,
    /// Key prefixes inside `bucket`.
    pub layout: StorageLayout,
    /// Where the values came from and how discovery ended.
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Watch targets paired with their 1-based index.
    pub fn targets(&self) -> impl Iterator<Item = WatchTarget<'_>> {
        self.urls
            .iter()
            .enumerate()
            .map(|(pos, url)| WatchTarget { index: pos + 1, url: url.as_str() })
    }

    /// `true` when an alerting channel is configured.
    pub fn has_alert_channel(&self) -> bool {
        self.alert_sns_channel.is_some()
    }
}

/// Key prefixes inside the data bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    /// Prefix for `url_{n}.sha256` objects.
    pub hash_prefix: String,
    /// Prefix for `url_{n}.txt` objects.
    pub data_prefix: String,
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self {
            hash_prefix: HASH_PREFIX.to_string(),
            data_prefix: DATA_PREFIX.to_string(),
        }
    }
}

/// One discovered URL together with the index it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchTarget<'a> {
    /// The `n` of `URL_{n}`.
    pub index: usize,
    pub url: &'a str,
}

impl WatchTarget<'_> {
    /// Object key holding the last known SHA-256 of this target.
    pub fn hash_key(&self, layout: &StorageLayout) -> String {
        format!("{}/url_{}.sha256", layout.hash_prefix, self.index)
    }

    /// Object key holding the last fetched body of this target.
    pub fn data_key(&self, layout: &StorageLayout) -> String {
        format!("{}/url_{}.txt", layout.data_prefix, self.index)
    }
}

/// How URL discovery ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStop {
    /// `URL_{index}` was unset or empty.
    Gap {
        /// First index that had no value.
        index: usize,
    },
    /// Every index up to the cap was set; later keys were not read.
    IndexCap {
        /// Highest index read.
        cap: usize,
    },
}

/// Result of scanning the numbered URL keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlDiscovery {
    /// Values of `URL_1` up to the stop, in order.
    pub urls: Vec<String>,
    /// Why the scan ended.
    pub stop: DiscoveryStop,
}

/// Provenance of a loaded [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigMetadata {
    /// Dotenv file layered under the process environment, if any.
    pub env_file: Option<PathBuf>,
    /// How URL discovery ended.
    pub url_discovery: DiscoveryStop,
}
