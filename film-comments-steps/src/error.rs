use thiserror::Error;

/// Problems with how the process was invoked.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvocationError {
    #[error("movie id argument is required")]
    MissingMovieId,

    #[error("invalid movie id format: {0}")]
    InvalidMovieId(String),
}
