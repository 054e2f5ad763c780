use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration problems; the entry point decides how to exit.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// `URL_1` is unset or empty.
    #[error("{key} not found. No URLs found so can not continue")]
    MissingRequiredUrl { key: String },
    /// `DATA_BUCKET` is unset or empty.
    #[error("{key} not set")]
    MissingRequiredBucket { key: &'static str },
    /// The env file exists or was named explicitly but could not be parsed.
    #[error("failed to read env file {path}")]
    EnvFile {
        /// File that failed.
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
