//! Error types for mdhtml library.

use std::io;
use thiserror::Error;

/// Result type alias for mdhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering a document tree.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a serialized tree.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The serialized tree is malformed or names a node kind with no renderer.
    #[error("Invalid document tree: {0}")]
    Json(serde_json::Error),

    /// The tree is deeper than the configured limit.
    #[error("Document tree exceeds maximum depth of {limit}")]
    DepthLimitExceeded {
        /// Configured maximum depth
        limit: usize,
    },

    /// A node carries a field value rejected by strict rendering.
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    /// Reader failures surface as `Io`, everything else as `Json`.
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Json(err)
        }
    }
}
