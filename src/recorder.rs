//! Recording lifecycle state machine.
//!
//! `Idle → Arming → Recording → Idle`. The mic-settle prompt is a timed
//! sub-state polled each tick, not a blocking sleep, so gesture sampling
//! and the time-limit check keep running while it sounds.

use crate::config::{MemoConfig, RECORDING_SLOT};
use crate::error::MemoError;
use crate::hal::audio::{AudioDevice, Clip, RecordHandle};

/// FSM state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    /// Mic-ready prompt playing, waiting out the settle delay.
    Arming { prompt_started_at: u64 },
    /// Slot open, audio flowing to storage.
    Recording {
        started_at: u64,
        handle: RecordHandle,
    },
}

/// What a recorder tick meant to the orchestrator.
#[derive(Debug, PartialEq, Eq)]
pub enum RecorderOutcome {
    /// Nothing of note.
    Quiet,
    /// The slot just opened; a brand-new recording is overwriting the
    /// old one, so any armed retention timer no longer applies.
    Started,
    /// A recording was finalized and saved. The play count must be
    /// reset and retention armed.
    Finished,
    /// The slot could not be opened; the attempt was aborted.
    Failed(MemoError),
}

/// Owns the recording session exclusively.
///
/// Invariant: in `Recording`, exactly one slot is open for writing,
/// identified by the held [`RecordHandle`].
pub struct RecorderController {
    settle_delay_ms: u64,
    recording_limit_ms: u64,
    slot: &'static str,
    state: State,
}

impl RecorderController {
    pub fn new(config: &MemoConfig) -> Self {
        Self {
            settle_delay_ms: config.settle_delay_ms,
            recording_limit_ms: config.recording_limit_ms,
            slot: RECORDING_SLOT,
            state: State::Idle,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    #[inline]
    pub fn is_arming(&self) -> bool {
        matches!(self.state, State::Arming { .. })
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        matches!(self.state, State::Recording { .. })
    }

    /// Timestamp the current recording started at, if one is active.
    pub fn started_at(&self) -> Option<u64> {
        match self.state {
            State::Recording { started_at, .. } => Some(started_at),
            _ => None,
        }
    }

    /// Enter `Arming` on a long-press release.
    ///
    /// Stops any clip still sounding, starts the mic-ready prompt, and
    /// begins the settle countdown. No-op unless currently `Idle`.
    pub fn begin_arming<A: AudioDevice>(&mut self, now_ms: u64, audio: &mut A) {
        if self.state != State::Idle {
            return;
        }
        if audio.is_playing() {
            audio.stop_playback();
        }
        audio.play(Clip::MicReady);
        self.state = State::Arming {
            prompt_started_at: now_ms,
        };
        log::info!("recorder: arming, mic-ready prompt started");
    }

    /// Advance the FSM one tick.
    pub fn tick<A: AudioDevice>(&mut self, now_ms: u64, audio: &mut A) -> RecorderOutcome {
        match self.state {
            State::Idle => RecorderOutcome::Quiet,
            State::Arming { prompt_started_at } => {
                if now_ms.saturating_sub(prompt_started_at) < self.settle_delay_ms {
                    return RecorderOutcome::Quiet;
                }
                if audio.is_playing() {
                    audio.stop_playback();
                }
                match audio.start_recording(self.slot) {
                    Ok(handle) => {
                        self.state = State::Recording {
                            started_at: now_ms,
                            handle,
                        };
                        log::info!("recorder: slot '{}' open, recording", self.slot);
                        RecorderOutcome::Started
                    }
                    Err(e) => {
                        // No retry: unavailability is terminal for this attempt.
                        log::warn!("recorder: slot open failed: {e}");
                        audio.play(Clip::ErrorTone);
                        self.state = State::Idle;
                        RecorderOutcome::Failed(MemoError::DeviceUnavailable(e))
                    }
                }
            }
            State::Recording { started_at, handle } => {
                if now_ms.saturating_sub(started_at) >= self.recording_limit_ms {
                    log::info!("recorder: time limit reached");
                    self.finalize(handle, audio);
                    RecorderOutcome::Finished
                } else {
                    RecorderOutcome::Quiet
                }
            }
        }
    }

    /// Finalize the recording now instead of waiting for the limit.
    ///
    /// Same finalize sequence as time-limit expiry, triggered by a
    /// qualifying short press. No-op unless `Recording`.
    pub fn stop_early<A: AudioDevice>(&mut self, _now_ms: u64, audio: &mut A) -> RecorderOutcome {
        if let State::Recording { handle, .. } = self.state {
            log::info!("recorder: stopped early");
            self.finalize(handle, audio);
            RecorderOutcome::Finished
        } else {
            RecorderOutcome::Quiet
        }
    }

    fn finalize<A: AudioDevice>(&mut self, handle: RecordHandle, audio: &mut A) {
        audio.stop_recording(handle);
        audio.play(Clip::RecordingSaved);
        self.state = State::Idle;
        log::info!("recorder: saved '{}'", self.slot);
    }
}
