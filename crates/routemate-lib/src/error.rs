use std::path::PathBuf;

use thiserror::Error;

use crate::facility::FacilityKind;

/// Convenient result alias for the routemate library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// These are failures of the dataset plumbing (locating and reading a
/// catalog). Query outcomes live in [`crate::nearest::LookupError`].
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset location")]
    ProjectDirsUnavailable,

    /// Raised when a catalog is requested for a facility kind that has no
    /// dataset schema.
    #[error("no dataset schema is available for {kind} facilities")]
    UnsupportedFacilityKind { kind: FacilityKind },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
