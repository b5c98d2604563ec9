//! Centralized error types for script-utils.
//!
//! Nothing in this crate retries or recovers locally; every failure surfaces
//! directly to the caller of the top-level operation (`render` or `scan`).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by table rendering and directory scanning.
#[derive(Debug, Error)]
pub enum Error {
    /// A directory could not be enumerated during a scan.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// The directory whose entries could not be listed.
        path: PathBuf,
        /// The underlying filesystem error.
        source: io::Error,
    },

    /// The output writer failed while rendering a table.
    #[error("write error: {0}")]
    Write(#[from] io::Error),
}

/// Result type for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
