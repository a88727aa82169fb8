use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the airport dataset.
const DATASET_FILENAME: &str = "airports.csv";

/// Environment variable that overrides the dataset location.
pub const DATASET_ENV_VAR: &str = "ROUTEMATE_AIRPORTS_PATH";

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "routemate", "routemate").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Resolve which dataset file to load.
///
/// Precedence: `explicit`, then `ROUTEMATE_AIRPORTS_PATH`, then the platform
/// data directory. The path is not required to exist; loading reports a
/// missing file.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit dataset path");
        return Ok(path.to_path_buf());
    }

    if let Some(value) = env::var_os(DATASET_ENV_VAR).filter(|v| !v.is_empty()) {
        let path = PathBuf::from(value);
        debug!(path = %path.display(), "using dataset path from {}", DATASET_ENV_VAR);
        return Ok(path);
    }

    let path = default_dataset_path()?;
    debug!(path = %path.display(), "using default dataset path");
    Ok(path)
}
