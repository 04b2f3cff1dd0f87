//! Persistent storage capability: existence and removal of the slot.

use thiserror::Error;

/// Storage I/O failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Delete (or other I/O) failed.
    #[error("storage I/O failure: {0}")]
    Io(&'static str),
}

/// Persistent storage capability.
///
/// Writing the slot is the audio device's job; storage only answers
/// existence queries and deletes.
pub trait Storage {
    /// Whether the named slot holds a recording.
    fn exists(&self, slot: &str) -> bool;

    /// Remove the named slot.
    fn remove(&mut self, slot: &str) -> Result<(), StorageError>;
}
