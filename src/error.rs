use thiserror::Error;

/// Result type for javasrc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the javasrc library
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] crate::parser::ParseError),

    #[error("{0}")]
    Build(#[from] crate::model::BuildError),
}
