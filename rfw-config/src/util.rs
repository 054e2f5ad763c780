//! Small helpers shared by the loaders.

use crate::env::EnvSource;

/// Value of `key`, treating "set but empty" the same as unset.
///
/// Only the length is checked: a whitespace-only value is kept verbatim.
pub fn non_empty_var<E: EnvSource + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).filter(|value| !value.is_empty())
}

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// [`parse_bool`] applied to `key`; unset or unrecognised values give `None`.
pub fn parse_bool_var<E: EnvSource + ?Sized>(env: &E, key: &str) -> Option<bool> {
    env.var(key).and_then(|raw| parse_bool(&raw))
}
