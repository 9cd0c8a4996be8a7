//! Crate error types.
//!
//! Only catalog I/O produces errors. Board and roster operations report
//! rejections as values (`transfer::Rejection`), never as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file does not exist.
    #[error("catalog file not found: {0}")]
    Missing(PathBuf),

    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid record list.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
