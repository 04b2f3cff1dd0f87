//! Module: config
//!
//! Purpose: Timing and count parameters for the memo appliance.
//! One plain `Copy` struct, constructed once and handed to the app;
//! controllers copy out the fields they need at construction time.

/// Name of the single persistent recording slot.
///
/// Only one recording exists at a time; a new recording overwrites it.
pub const RECORDING_SLOT: &str = "recording.wav";

/// Appliance configuration.
#[derive(Clone, Copy, Debug)]
pub struct MemoConfig {
    /// Button hold duration that distinguishes a long press (ms).
    pub hold_threshold_ms: u64,

    /// Mic-settle delay between the record gesture and the slot
    /// actually opening, during which the voice prompt plays (ms).
    pub settle_delay_ms: u64,

    /// Maximum length of a single recording (ms).
    pub recording_limit_ms: u64,

    /// Idle period after which an unconsumed or fully-consumed
    /// recording is auto-deleted (ms).
    pub retention_window_ms: u64,

    /// Number of times the recording may be played back before the
    /// slot becomes eligible for deletion.
    pub max_playback_count: u8,

    /// Per-tick brightness increment for the activity ramp.
    pub light_step: u8,

    /// Number of pixels on the indicator ring. Pixel 0 is the status pixel.
    pub num_pixels: usize,
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            hold_threshold_ms: 3_000,
            settle_delay_ms: 5_000,
            recording_limit_ms: 60_000,
            retention_window_ms: 7 * 24 * 60 * 60 * 1_000,
            max_playback_count: 4,
            light_step: 25,
            num_pixels: 12,
        }
    }
}

impl MemoConfig {
    /// Create config with a custom retention window in days.
    pub fn with_retention_days(days: u64) -> Self {
        Self {
            retention_window_ms: days * 24 * 60 * 60 * 1_000,
            ..Default::default()
        }
    }

    /// Retention window expressed in whole days.
    #[inline]
    pub fn retention_days(&self) -> u64 {
        self.retention_window_ms / (24 * 60 * 60 * 1_000)
    }
}
