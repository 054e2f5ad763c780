//! Environment keys and built-in defaults.

/// Required storage bucket for fetched content and hashes.
pub const DATA_BUCKET_KEY: &str = "DATA_BUCKET";

/// Prefix of the numbered watch target keys (`URL_1`, `URL_2`, …).
pub const URL_KEY_PREFIX: &str = "URL_";

/// Optional alerting channel name.
pub const ALERT_SNS_CHANNEL_KEY: &str = "ALERT_SNS_CHANNEL";

/// Optional region override.
pub const AWS_REGION_KEY: &str = "AWS_REGION";

/// Boolean flag enabling debug output.
pub const DEBUG_KEY: &str = "DEBUG";

/// Path of a dotenv file to overlay on the process environment.
pub const ENV_FILE_KEY: &str = "RFW_ENV_FILE";

/// Env file picked up from the working directory when `RFW_ENV_FILE` is unset.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Region used when `AWS_REGION` is unset or empty.
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Highest `URL_{n}` index read. Discovery normally ends at the first gap
/// long before this.
pub const MAX_URL_INDEX: usize = 4096;

/// Bucket prefix under which content hashes are stored.
pub const HASH_PREFIX: &str = "hashes";
/// Bucket prefix under which fetched content is stored.
pub const DATA_PREFIX: &str = "files";
