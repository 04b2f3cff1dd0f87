//! Auto-delete timer for stale recordings.
//!
//! Armed when a recording is finalized or fully consumed; once the
//! retention window elapses the slot is deleted and the "deleted"
//! notice plays. At most one timer is outstanding per slot.

use crate::config::{MemoConfig, RECORDING_SLOT};
use crate::error::MemoError;
use crate::hal::audio::{AudioDevice, Clip};
use crate::hal::storage::Storage;

/// Owns the auto-delete timer.
pub struct RetentionManager {
    window_ms: u64,
    slot: &'static str,
    armed: bool,
    armed_at: u64,
}

impl RetentionManager {
    pub fn new(config: &MemoConfig) -> Self {
        Self {
            window_ms: config.retention_window_ms,
            slot: RECORDING_SLOT,
            armed: false,
            armed_at: 0,
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start (or restart) the retention window. Last writer wins.
    pub fn arm(&mut self, now_ms: u64) {
        self.armed = true;
        self.armed_at = now_ms;
        log::debug!("retention: armed at {now_ms}");
    }

    /// Cancel the timer when a brand-new recording starts overwriting
    /// the slot the timer was armed for.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Advance the timer one tick.
    ///
    /// Returns `Ok(true)` when the slot was deleted this tick. The
    /// armed flag clears even when the delete fails, so a broken card
    /// cannot cause a retry storm.
    pub fn tick<A: AudioDevice, S: Storage>(
        &mut self,
        now_ms: u64,
        audio: &mut A,
        storage: &mut S,
    ) -> Result<bool, MemoError> {
        if !self.armed || now_ms.saturating_sub(self.armed_at) < self.window_ms {
            return Ok(false);
        }
        self.armed = false;
        match storage.remove(self.slot) {
            Ok(()) => {
                audio.play(Clip::RecordingDeleted);
                log::info!("retention: deleted '{}'", self.slot);
                Ok(true)
            }
            Err(e) => {
                log::warn!("retention: delete of '{}' failed: {e}", self.slot);
                Err(MemoError::Storage(e))
            }
        }
    }
}
