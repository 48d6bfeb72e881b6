//! Data directory resolution.

use std::path::PathBuf;

use sheet_content::ContentFactory;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "SHEET_DATA_DIR";

const FALLBACK_DATA_DIR: &str = "./data";

/// Resolve the data directory: explicit flag, then `SHEET_DATA_DIR`, then
/// `./data`.
pub fn data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

pub fn factory(explicit: Option<PathBuf>) -> ContentFactory {
    let dir = data_dir(explicit);
    tracing::debug!(data_dir = %dir.display(), "using data directory");
    ContentFactory::new(dir)
}
