//! Playback lifecycle state machine.
//!
//! `Idle → Playing → Idle`, with a play-count budget that persists
//! across sessions. The count resets only when a new recording is
//! finalized; once it reaches the limit, playback is refused until then.

use crate::config::{MemoConfig, RECORDING_SLOT};
use crate::error::MemoError;
use crate::hal::audio::{AudioDevice, Clip};
use crate::hal::storage::Storage;

/// What a playback tick meant to the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Nothing of note.
    Quiet,
    /// A playback finished; budget remains.
    Completed,
    /// A playback finished and exhausted the budget. The recording is
    /// fully consumed and eligible for deletion.
    FullyConsumed,
}

/// Owns the playback session exclusively.
///
/// Invariant: `play_count <= max_count` at all times.
pub struct PlaybackController {
    max_count: u8,
    slot: &'static str,
    active: bool,
    started_at: u64,
    play_count: u8,
}

impl PlaybackController {
    pub fn new(config: &MemoConfig) -> Self {
        Self {
            max_count: config.max_playback_count,
            slot: RECORDING_SLOT,
            active: false,
            started_at: 0,
            play_count: 0,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Completed playbacks since the last recording was finalized.
    #[inline]
    pub fn play_count(&self) -> u8 {
        self.play_count
    }

    /// Timestamp the current playback started at, if one is active.
    pub fn started_at(&self) -> Option<u64> {
        self.active.then_some(self.started_at)
    }

    /// Start playback on a short-press release.
    ///
    /// Refused with a notice clip when the slot is missing or the
    /// budget is spent; neither refusal changes any state.
    pub fn begin<A: AudioDevice, S: Storage>(
        &mut self,
        now_ms: u64,
        audio: &mut A,
        storage: &S,
    ) -> Result<(), MemoError> {
        if self.active {
            return Ok(());
        }
        if !storage.exists(self.slot) {
            audio.play(Clip::NoRecording);
            return Err(MemoError::SlotMissing);
        }
        if self.play_count >= self.max_count {
            audio.play(Clip::MaxPlaybackReached);
            return Err(MemoError::PlaybackLimitExceeded);
        }
        audio.play_slot(self.slot);
        self.active = true;
        self.started_at = now_ms;
        log::info!(
            "playback: started, count {}/{}",
            self.play_count,
            self.max_count
        );
        Ok(())
    }

    /// Advance the FSM one tick, watching for device-reported completion.
    pub fn tick<A: AudioDevice>(&mut self, _now_ms: u64, audio: &A) -> PlaybackOutcome {
        if !self.active || audio.is_playing() {
            return PlaybackOutcome::Quiet;
        }
        self.active = false;
        self.play_count = (self.play_count + 1).min(self.max_count);
        log::info!(
            "playback: complete, count {}/{}",
            self.play_count,
            self.max_count
        );
        if self.play_count >= self.max_count {
            PlaybackOutcome::FullyConsumed
        } else {
            PlaybackOutcome::Completed
        }
    }

    /// Reset the budget after a new recording is finalized.
    pub fn reset_count(&mut self) {
        self.play_count = 0;
    }
}
