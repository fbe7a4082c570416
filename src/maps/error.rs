// Fri Aug 21 2026 - Alex

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed maps line: {0:?}")]
    Malformed(String),
    #[error("invalid address range {start:#x}-{end:#x}")]
    InvalidRange { start: u64, end: u64 },
}

/// A maps enumeration that hit a fatal parse error. The records collected
/// before the failure are retained so callers can fall back to best-effort
/// results without re-reading the file.
#[derive(Error, Debug)]
#[error("maps enumeration aborted: {source}")]
pub struct EnumerateError<T: fmt::Debug> {
    #[source]
    pub source: MapsError,
    pub collected: Vec<T>,
}

impl<T: fmt::Debug> EnumerateError<T> {
    pub fn new(source: MapsError, collected: Vec<T>) -> Self {
        Self { source, collected }
    }

    pub fn into_collected(self) -> Vec<T> {
        self.collected
    }
}
