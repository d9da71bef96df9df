// File: src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not move CSV into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}
