//! Error taxonomy for the memo appliance.
//!
//! Nothing here is fatal to the tick loop. Every capability call returns a
//! result the caller inspects and answers with an audible notice; the worst
//! outcome of any failure is an aborted attempt and a return to idle.

use thiserror::Error;

use crate::hal::audio::DeviceError;
use crate::hal::storage::StorageError;

/// Non-fatal appliance errors surfaced to the orchestrator for logging.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoError {
    /// Mic or speaker could not be opened. Aborts the current attempt,
    /// no retry: resource unavailability is terminal for that attempt.
    #[error("audio device unavailable: {0}")]
    DeviceUnavailable(#[from] DeviceError),

    /// Playback requested but no recording exists in the slot.
    #[error("no recording in slot")]
    SlotMissing,

    /// The recording has already been played the maximum number of times.
    #[error("playback limit reached")]
    PlaybackLimitExceeded,

    /// Storage failure while deleting the slot.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
