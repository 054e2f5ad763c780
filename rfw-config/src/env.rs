//! Key/value sources the loader reads from.

use std::{
    collections::HashMap,
    fmt::Debug,
    path::{Path, PathBuf},
};

use crate::loader::error::ConfigLoadError;

/// Read-only key/value lookup the loader pulls configuration from.
pub trait EnvSource: Debug {
    /// Value stored under `key`, or `None` when the key is absent.
    ///
    /// An empty string is returned as-is; callers decide whether "set but
    /// empty" counts as absent.
    fn var(&self, key: &str) -> Option<String>;

    /// Every key currently visible through this source.
    ///
    /// Enumeration is best-effort and only feeds diagnostics, so sources that
    /// cannot list their keys may keep the empty default.
    fn keys(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for Box<E> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are treated as unset.
        std::env::var(key).ok()
    }

    fn keys(&self) -> Vec<String> {
        std::env::vars_os()
            .filter_map(|(key, _)| key.into_string().ok())
            .collect()
    }
}

/// In-memory environment, mostly for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// An empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.vars.keys().cloned().collect()
    }
}

/// A dotenv file layered underneath another source.
///
/// Keys present in the inner source win, even when their value is empty,
/// which matches dotenv's rule of never overriding an existing variable. The
/// process environment itself is never modified.
#[derive(Debug, Clone)]
pub struct EnvFileOverlay<E> {
    inner: E,
    path: PathBuf,
    file_vars: HashMap<String, String>,
}

impl<E: EnvSource> EnvFileOverlay<E> {
    /// Parse `path` and layer its entries under `inner`.
    pub fn read(inner: E, path: &Path) -> Result<Self, ConfigLoadError> {
        let env_file_error = |source| ConfigLoadError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let mut file_vars = HashMap::new();
        for entry in dotenvy::from_path_iter(path).map_err(env_file_error)? {
            let (key, value) = entry.map_err(env_file_error)?;
            file_vars.insert(key, value);
        }

        Ok(Self {
            inner,
            path: path.to_path_buf(),
            file_vars,
        })
    }

    /// File the overlay was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<E: EnvSource> EnvSource for EnvFileOverlay<E> {
    fn var(&self, key: &str) -> Option<String> {
        self.inner.var(key).or_else(|| self.file_vars.get(key).cloned())
    }

    fn keys(&self) -> Vec<String> {
        let mut keys = self.inner.keys();
        for key in self.file_vars.keys() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_env_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp env file");
        file.write_all(contents.as_bytes()).expect("write env file");
        file
    }

    #[test]
    fn map_env_keeps_empty_values() {
        let env: MapEnv = [("URL_1", "")].into_iter().collect();
        assert_eq!(env.var("URL_1").as_deref(), Some(""));
        assert_eq!(env.var("URL_2"), None);
    }

    #[test]
    fn overlay_fills_in_missing_keys() {
        let file = write_env_file("DATA_BUCKET=from-file\nURL_1=http://a\n");
        let inner: MapEnv = [("URL_1", "http://override")].into_iter().collect();

        let overlay = EnvFileOverlay::read(inner, file.path()).expect("read overlay");

        assert_eq!(overlay.var("DATA_BUCKET").as_deref(), Some("from-file"));
        assert_eq!(overlay.var("URL_1").as_deref(), Some("http://override"));
        assert_eq!(overlay.path(), file.path());
    }

    #[test]
    fn overlay_does_not_replace_empty_inner_values() {
        let file = write_env_file("URL_2=http://b\n");
        let inner: MapEnv = [("URL_2", "")].into_iter().collect();

        let overlay = EnvFileOverlay::read(inner, file.path()).expect("read overlay");

        assert_eq!(overlay.var("URL_2").as_deref(), Some(""));
    }

    #[test]
    fn overlay_lists_keys_from_both_layers_once() {
        let file = write_env_file("A=1\nB=2\n");
        let inner: MapEnv = [("B", "x"), ("C", "y")].into_iter().collect();

        let overlay = EnvFileOverlay::read(inner, file.path()).expect("read overlay");
        let mut keys = overlay.keys();
        keys.sort();

        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn missing_env_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.env");

        let err = EnvFileOverlay::read(MapEnv::new(), &path)
            .expect_err("missing file must fail");

        assert!(matches!(err, ConfigLoadError::EnvFile { path: ref p, .. } if *p == path));
    }

    #[test]
    fn malformed_env_file_is_reported() {
        let file = write_env_file("DATA_BUCKET=b\nURL_1 http://a\n");

        let err = EnvFileOverlay::read(MapEnv::new(), file.path())
            .expect_err("line without `=` must fail");

        match err {
            ConfigLoadError::EnvFile { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
