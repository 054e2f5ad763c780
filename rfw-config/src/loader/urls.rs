use tracing::{debug, info};

use crate::{
    constants::{MAX_URL_INDEX, URL_KEY_PREFIX},
    env::EnvSource,
    loader::error::ConfigLoadError,
    models::{DiscoveryStop, UrlDiscovery},
    util::non_empty_var,
};

/// Environment key of the watch target at `index` (1-based).
pub fn url_key(index: usize) -> String {
    format!("{URL_KEY_PREFIX}{index}")
}

/// Read `URL_1`, `URL_2`, … until the first unset or empty key.
///
/// `URL_1` is mandatory. A gap at any later index simply ends the scan, so a
/// value at `URL_3` is never read when `URL_2` is missing.
pub fn discover_urls<E: EnvSource + ?Sized>(env: &E) -> Result<UrlDiscovery, ConfigLoadError> {
    discover_urls_up_to(env, MAX_URL_INDEX)
}

/// [`discover_urls`] with an explicit index cap. A cap below 1 is raised to 1.
pub fn discover_urls_up_to<E: EnvSource + ?Sized>(
    env: &E,
    cap: usize,
) -> Result<UrlDiscovery, ConfigLoadError> {
    let cap = cap.max(1);
    let mut urls = Vec::new();

    for index in 1..=cap {
        let key = url_key(index);
        match non_empty_var(env, &key) {
            Some(value) => {
                info!("{key} loaded as {value}");
                urls.push(value);
            }
            None if index == 1 => {
                return Err(ConfigLoadError::MissingRequiredUrl { key });
            }
            None => {
                debug!("Parsed {} URLs into the configuration", urls.len());
                return Ok(UrlDiscovery { urls, stop: DiscoveryStop::Gap { index } });
            }
        }
    }

    debug!("Parsed {} URLs before reaching index cap {cap}", urls.len());
    Ok(UrlDiscovery { urls, stop: DiscoveryStop::IndexCap { cap } })
}
