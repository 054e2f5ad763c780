//! Settings that fall back to defaults instead of failing.

use crate::{
    constants::{ALERT_SNS_CHANNEL_KEY, AWS_REGION_KEY, DEBUG_KEY},
    env::EnvSource,
    util::{non_empty_var, parse_bool_var},
};

/// Optional environment-derived settings. None of these can fail a load.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptionalSettings {
    /// `ALERT_SNS_CHANNEL`, if non-empty.
    pub alert_sns_channel: Option<String>,
    /// `AWS_REGION`, if non-empty.
    pub aws_region: Option<String>,
    /// `DEBUG`, if it parses as a boolean.
    pub debug: Option<bool>,
}

impl OptionalSettings {
    /// Read every optional key from `env`.
    pub fn gather<E: EnvSource + ?Sized>(env: &E) -> Self {
        Self {
            alert_sns_channel: non_empty_var(env, ALERT_SNS_CHANNEL_KEY),
            aws_region: non_empty_var(env, AWS_REGION_KEY),
            debug: parse_bool_var(env, DEBUG_KEY),
        }
    }
}
