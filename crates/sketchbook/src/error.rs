//! Sketchbook error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SketchbookError {
    /// The key has no leading base-10 integer.
    #[error("key {key:?} is not a base-10 integer")]
    InvalidKey { key: String },

    /// The key's leading integer does not fit in an `i32`.
    #[error("key {key:?} is out of range for a bucket index")]
    KeyOutOfRange { key: String },

    /// A node expected to have a successor was the tail.
    #[error("node {key:?} has no successor")]
    MissingSuccessor { key: String },

    #[error("failed to write demonstration output: {0}")]
    Io(#[from] std::io::Error),
}
