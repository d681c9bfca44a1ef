use std::io;

/// Error surface for the whole crate.
///
/// Parser-level anomalies (a malformed subtitle block) are absorbed where they
/// occur and never reach callers; collaborator and I/O failures abort the job
/// carrying the underlying message verbatim.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("malformed timestamp line: {0:?}")]
    MalformedTimestamp(String),
    #[error("transcript input is empty")]
    EmptyInput,
    #[error("recognition failed: {0}")]
    Recognition(String),
    #[error("download failed: {0}")]
    Download(String),
    #[error("title normalizes to an empty identifier")]
    EmptyTitle,
    #[error("I/O error")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
