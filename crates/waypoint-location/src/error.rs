//! Location error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Missing parameter \"{key}\" for path \"{pattern}\"")]
    MissingParam { key: String, pattern: String },
}
