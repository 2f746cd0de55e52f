//! Error types for folio operations.

use thiserror::Error;

/// Errors that can occur while loading content for pagination.
///
/// Pagination itself is infallible: empty input yields an empty report
/// and malformed markup is absorbed by lenient HTML parsing. Errors only
/// arise when reading content from disk.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
