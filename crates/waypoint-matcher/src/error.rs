//! Matcher error types

use thiserror::Error;

use crate::record::RecordId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatcherError {
    #[error("Duplicate named route definition: {{ name: \"{name}\", path: \"{path}\" }}")]
    DuplicateName { name: String, path: String },

    #[error("Unknown parent record: {0}")]
    UnknownParent(RecordId),
}
