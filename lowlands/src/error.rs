//! Error types used by the crate.

use thiserror::Error;

/// Lowlands error type.
#[derive(Debug, Error)]
pub enum LowlandsError {
    /// Error reading data from the FS.
    #[error("failed to read file")]
    FsIo(#[from] std::io::Error),
    /// Settings document is not valid JSON or has fields of wrong type.
    #[error("failed to parse settings: {0}")]
    Settings(#[from] serde_json::Error),
    /// Tile index is outside of the tile grid of its zoom level.
    #[error("tile {x}/{y} does not exist at zoom level {z}")]
    InvalidTile {
        /// Zoom level.
        z: u32,
        /// Column.
        x: u32,
        /// Row.
        y: u32,
    },
    /// Storage locator cannot be built from the given path.
    #[error("invalid storage path: {0:?}")]
    InvalidPath(String),
    /// Persistence backend failure - details are inside.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Error returned by [`LocationService`](crate::location::LocationService).
#[derive(Debug, Error)]
pub enum LocationError {
    /// The submitted geometry did not pass validation. Contains all the messages of the validation report.
    #[error("location cannot be processed: {}", .0.join("; "))]
    Unprocessable(Vec<String>),
    /// Requested page parameters are out of the allowed range.
    #[error("invalid pagination: {0}")]
    InvalidPagination(String),
    /// No location with the given id.
    #[error("location {0} not found")]
    NotFound(u64),
    /// Store failure.
    #[error(transparent)]
    Store(#[from] LowlandsError),
}

impl LocationError {
    /// HTTP status code the surrounding layer should respond with.
    pub fn status_code(&self) -> u16 {
        match self {
            LocationError::Unprocessable(_) | LocationError::InvalidPagination(_) => 422,
            LocationError::NotFound(_) => 404,
            LocationError::Store(_) => 500,
        }
    }
}
