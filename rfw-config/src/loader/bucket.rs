use tracing::info;

use crate::{
    constants::DATA_BUCKET_KEY, env::EnvSource, loader::error::ConfigLoadError, util::non_empty_var,
};

/// Read the required `DATA_BUCKET`; unset and empty are both rejected.
pub fn resolve_bucket<E: EnvSource + ?Sized>(env: &E) -> Result<String, ConfigLoadError> {
    let bucket = non_empty_var(env, DATA_BUCKET_KEY)
        .ok_or(ConfigLoadError::MissingRequiredBucket { key: DATA_BUCKET_KEY })?;
    info!("{DATA_BUCKET_KEY} loaded as {bucket}");
    Ok(bucket)
}
