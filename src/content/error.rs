//! Store error taxonomy

use thiserror::Error;

/// Everything the content store can report. No filesystem or YAML error
/// escapes the store raw; callers only ever see these three kinds.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post not found: {0}")]
    NotFound(String),

    #[error("front-matter parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
