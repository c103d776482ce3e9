//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Matcher error: {0}")]
    Matcher(#[from] waypoint_matcher::MatcherError),

    #[error("No router named \"{0}\" was found")]
    RouterNotFound(String),

    #[error("A router named \"{0}\" is already registered")]
    DuplicateRouter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
