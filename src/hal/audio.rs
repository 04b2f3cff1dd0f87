//! Audio capability: record to a named slot, play clips, query activity.

use thiserror::Error;

/// Audio device failure on open.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceError {
    /// Mic or speaker could not be opened.
    #[error("device unavailable: {0}")]
    Unavailable(&'static str),

    /// Device is occupied by another operation.
    #[error("device busy")]
    Busy,
}

/// Opaque token for an open recording.
///
/// Returned by [`AudioDevice::start_recording`]; the holder is the only
/// party allowed to stop that recording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordHandle(u32);

impl RecordHandle {
    /// Wrap a raw device-assigned id.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw device-assigned id.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

/// Fixed prompt/confirmation clip library.
///
/// The mapping to on-disk assets is opaque to the core; controllers only
/// name clips, the device resolves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clip {
    PowerOn,
    PowerReady,
    MicReady,
    RecordingSaved,
    RecordingDeleted,
    MaxPlaybackReached,
    NoRecording,
    ErrorTone,
}

impl Clip {
    /// Asset name the device resolves this clip to.
    pub const fn asset(self) -> &'static str {
        match self {
            Clip::PowerOn => "power_on.wav",
            Clip::PowerReady => "now_its_on.wav",
            Clip::MicReady => "please_mention_your_name.wav",
            Clip::RecordingSaved => "recording_saved.wav",
            Clip::RecordingDeleted => "recording_deleted.wav",
            Clip::MaxPlaybackReached => "max_playback_count_reached.wav",
            Clip::NoRecording => "no_recording.wav",
            Clip::ErrorTone => "error_tone.wav",
        }
    }
}

/// Audio codec/storage driver capability.
///
/// Playback of clips and of the recording slot share one output path:
/// at most one thing sounds at a time, and `is_playing` reports it
/// regardless of what started it.
pub trait AudioDevice {
    /// Open the named slot for writing and start recording into it.
    fn start_recording(&mut self, slot: &str) -> Result<RecordHandle, DeviceError>;

    /// Stop the recording identified by `handle` and close its slot.
    fn stop_recording(&mut self, handle: RecordHandle);

    /// Play a prompt/confirmation clip. Best effort, non-blocking.
    fn play(&mut self, clip: Clip);

    /// Play the named recording slot. Best effort, non-blocking.
    fn play_slot(&mut self, slot: &str);

    /// Whether any clip or slot is currently sounding.
    fn is_playing(&self) -> bool;

    /// Stop whatever is currently sounding, if anything.
    fn stop_playback(&mut self);
}
