//! Button gesture detection finite state machine.
//!
//! Pure logic, no hardware dependencies. Consumes raw button levels,
//! produces discrete gesture events. Fully testable on host.
//!
//! Debounce is implicit via the hold-duration thresholds rather than
//! level filtering; at a tick period of a few milliseconds that is
//! sufficient for a single mechanical button.

/// Raw digital button level sampled each tick.
///
/// The button sits on a pull-up: idle is high, pressed pulls low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonLevel {
    /// Line pulled low: button pressed.
    Low,
    /// Line high: button released.
    High,
}

impl ButtonLevel {
    /// Check whether this level means the button is pressed.
    #[inline]
    pub const fn is_pressed(self) -> bool {
        matches!(self, ButtonLevel::Low)
    }
}

/// Discrete gesture event, at most one per tick, consumed exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    /// No gesture activity this tick.
    Idle,
    /// Button went down this tick.
    PressStart,
    /// Button has been held past the hold threshold.
    /// Fires exactly once per press.
    HoldThresholdReached,
    /// Button released before the hold threshold.
    ShortRelease,
    /// Button released at or after the hold threshold.
    LongRelease,
}

/// Converts raw button level samples into gesture events.
///
/// # Example
///
/// ```
/// use memo_button::gesture::{ButtonEvent, ButtonLevel, GestureDetector};
///
/// let mut detector = GestureDetector::new(3_000);
/// assert_eq!(detector.sample(ButtonLevel::Low, 0), ButtonEvent::PressStart);
/// assert_eq!(detector.sample(ButtonLevel::High, 500), ButtonEvent::ShortRelease);
/// ```
pub struct GestureDetector {
    hold_threshold_ms: u64,

    /// Tick timestamp of the current press, `None` while released.
    press_started_at: Option<u64>,

    /// Set once `HoldThresholdReached` has fired for the current press.
    hold_fired: bool,
}

impl GestureDetector {
    /// Create a detector with the given hold threshold in milliseconds.
    pub fn new(hold_threshold_ms: u64) -> Self {
        Self {
            hold_threshold_ms,
            press_started_at: None,
            hold_fired: false,
        }
    }

    /// Check whether a press is currently being tracked.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.press_started_at.is_some()
    }

    /// Sample the button and emit at most one event.
    ///
    /// Call exactly once per tick with a monotonic `now_ms`.
    pub fn sample(&mut self, level: ButtonLevel, now_ms: u64) -> ButtonEvent {
        match (level.is_pressed(), self.press_started_at) {
            (true, None) => {
                self.press_started_at = Some(now_ms);
                self.hold_fired = false;
                ButtonEvent::PressStart
            }
            (true, Some(started_at)) => {
                let held = now_ms.saturating_sub(started_at);
                if !self.hold_fired && held >= self.hold_threshold_ms {
                    self.hold_fired = true;
                    ButtonEvent::HoldThresholdReached
                } else {
                    ButtonEvent::Idle
                }
            }
            (false, Some(started_at)) => {
                let held = now_ms.saturating_sub(started_at);
                self.press_started_at = None;
                self.hold_fired = false;
                if held >= self.hold_threshold_ms {
                    ButtonEvent::LongRelease
                } else {
                    ButtonEvent::ShortRelease
                }
            }
            // Spurious release with no tracked press.
            (false, None) => ButtonEvent::Idle,
        }
    }

    /// Reset to idle, forgetting any in-progress press.
    pub fn reset(&mut self) {
        self.press_started_at = None;
        self.hold_fired = false;
    }
}
