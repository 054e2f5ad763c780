//! Non-fatal checks run after a successful load.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::URL_KEY_PREFIX,
    env::EnvSource,
    models::{Config, DiscoveryStop},
    util::non_empty_var,
};

static URL_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{}([1-9][0-9]*)$", regex::escape(URL_KEY_PREFIX)))
        .expect("url key regex should compile")
});

/// Non-fatal finding about an otherwise valid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// What looks wrong.
    pub message: String,
    /// How to fix it, when there is an obvious fix.
    pub hint: Option<String>,
}

/// Warnings collected during one load, in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    /// Individual findings.
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    /// Record a warning together with a remediation hint.
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(&mut self, message: S, hint: H) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// `true` when nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Warnings in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// `URL_{n}` keys holding a value that discovery never reached, ordered by
/// index.
pub fn stranded_url_keys<E: EnvSource + ?Sized>(
    env: &E,
    stop: DiscoveryStop,
) -> Vec<(usize, String)> {
    let last_read = match stop {
        DiscoveryStop::Gap { index } => index,
        DiscoveryStop::IndexCap { cap } => cap,
    };

    let mut stranded: Vec<(usize, String)> = env
        .keys()
        .into_iter()
        .filter_map(|key| {
            let index = URL_KEY_PATTERN
                .captures(&key)?
                .get(1)?
                .as_str()
                .parse::<usize>()
                .ok()?;
            (index > last_read).then_some((index, key))
        })
        .filter(|(_, key)| non_empty_var(env, key).is_some())
        .collect();
    stranded.sort_unstable();
    stranded
}

/// Inspect a loaded configuration against its source.
pub fn collect_warnings<E: EnvSource + ?Sized>(env: &E, config: &Config) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();
    let stop = config.metadata.url_discovery;

    if let DiscoveryStop::IndexCap { cap } = stop {
        warnings.push_with_hint(
            format!("URL discovery stopped at the index cap of {cap}"),
            "Keys past the cap are never read; split the targets across deployments",
        );
    }

    for (_, key) in stranded_url_keys(env, stop) {
        let message = match stop {
            DiscoveryStop::Gap { index } => format!(
                "{key} is set but ignored: URL discovery stopped at the missing {URL_KEY_PREFIX}{index}"
            ),
            DiscoveryStop::IndexCap { cap } => {
                format!("{key} is set but ignored: it lies past the index cap of {cap}")
            }
        };
        warnings.push_with_hint(message, "Number URL variables consecutively starting at URL_1");
    }

    warnings
}
