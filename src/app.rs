//! Top-level appliance state machine.
//!
//! One synchronous [`App::tick`] per loop iteration:
//! 1. Sample the gesture detector.
//! 2. Dispatch the event to exactly one handler: power toggle,
//!    recorder, or playback. An in-progress recording consumes the
//!    tick before a new playback is considered.
//! 3. Tick recorder, playback, and retention unconditionally, so
//!    time-based transitions fire even with no button activity.
//! 4. Render exactly one ring pattern.
//!
//! Power-on is an orthogonal top-level mode: a 3-second hold from off
//! turns the appliance on and swallows the release of that same press,
//! so the power gesture never bleeds into the recording gesture.

use crate::config::MemoConfig;
use crate::gesture::{ButtonEvent, ButtonLevel, GestureDetector};
use crate::hal::audio::{AudioDevice, Clip};
use crate::hal::ring::{IndicatorRing, STATUS_PIXEL};
use crate::hal::storage::Storage;
use crate::light::LightRamp;
use crate::playback::{PlaybackController, PlaybackOutcome};
use crate::recorder::{RecorderController, RecorderOutcome};
use crate::retention::RetentionManager;

/// Top-level power mode, orthogonal to the session state machines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PowerMode {
    Off,
    On,
}

/// Boot chime sub-state: two clips played back to back, non-blocking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BootStage {
    Chime,
    Ready,
}

/// The appliance: owns the devices and every session state machine.
pub struct App<A: AudioDevice, S: Storage, R: IndicatorRing> {
    audio: A,
    storage: S,
    ring: R,
    config: MemoConfig,

    gesture: GestureDetector,
    recorder: RecorderController,
    playback: PlaybackController,
    retention: RetentionManager,
    light: LightRamp,

    power: PowerMode,
    boot: Option<BootStage>,
    /// Set when a hold powered the appliance on, so the release of
    /// that same press is not misread as a record gesture.
    swallow_release: bool,
}

impl<A: AudioDevice, S: Storage, R: IndicatorRing> App<A, S, R> {
    /// Build the appliance, powered off.
    pub fn new(config: MemoConfig, audio: A, storage: S, ring: R) -> Self {
        Self {
            audio,
            storage,
            ring,
            config,
            gesture: GestureDetector::new(config.hold_threshold_ms),
            recorder: RecorderController::new(&config),
            playback: PlaybackController::new(&config),
            retention: RetentionManager::new(&config),
            light: LightRamp::new(config.light_step),
            power: PowerMode::Off,
            boot: None,
            swallow_release: false,
        }
    }

    #[inline]
    pub fn is_powered(&self) -> bool {
        self.power == PowerMode::On
    }

    pub fn recorder(&self) -> &RecorderController {
        &self.recorder
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn retention(&self) -> &RetentionManager {
        &self.retention
    }

    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// Run one tick: sample, dispatch, advance every timer, render.
    pub fn tick(&mut self, level: ButtonLevel, now_ms: u64) {
        let event = self.gesture.sample(level, now_ms);
        self.dispatch(event, now_ms);
        self.advance_boot();

        if self.power == PowerMode::On {
            let outcome = self.recorder.tick(now_ms, &mut self.audio);
            self.handle_recorder_outcome(outcome, now_ms);

            let outcome = self.playback.tick(now_ms, &self.audio);
            self.handle_playback_outcome(outcome, now_ms);

            if let Err(e) = self
                .retention
                .tick(now_ms, &mut self.audio, &mut self.storage)
            {
                log::warn!("app: {e}");
            }
        }

        self.render();
    }

    /// Route one gesture event to exactly one handler.
    fn dispatch(&mut self, event: ButtonEvent, now_ms: u64) {
        match event {
            ButtonEvent::Idle | ButtonEvent::PressStart => {}

            ButtonEvent::HoldThresholdReached => {
                if self.power == PowerMode::Off {
                    self.power_on(now_ms);
                }
                // Powered on, the hold itself is silent; the release decides.
            }

            ButtonEvent::LongRelease => {
                if self.swallow_release {
                    self.swallow_release = false;
                    return;
                }
                if self.power == PowerMode::Off || self.boot.is_some() {
                    return;
                }
                if self.recorder.is_idle() && !self.playback.is_active() {
                    self.light.reset();
                    self.recorder.begin_arming(now_ms, &mut self.audio);
                }
            }

            ButtonEvent::ShortRelease => {
                if self.power == PowerMode::Off {
                    return;
                }
                if self.recorder.is_recording() {
                    // Precedence: an in-progress recording consumes the tick.
                    let outcome = self.recorder.stop_early(now_ms, &mut self.audio);
                    self.handle_recorder_outcome(outcome, now_ms);
                } else if self.recorder.is_arming() || self.boot.is_some() {
                    // Transitional prompt in progress: drop, don't queue.
                    log::debug!("app: short press dropped mid-prompt");
                } else if !self.playback.is_active() && self.audio.is_playing() {
                    // A notice clip is still sounding: same rule.
                    log::debug!("app: short press dropped mid-notice");
                } else if !self.playback.is_active() {
                    match self.playback.begin(now_ms, &mut self.audio, &self.storage) {
                        Ok(()) => self.light.reset(),
                        Err(e) => log::warn!("app: playback refused: {e}"),
                    }
                }
            }
        }
    }

    fn power_on(&mut self, now_ms: u64) {
        self.power = PowerMode::On;
        self.boot = Some(BootStage::Chime);
        self.swallow_release = true;
        self.audio.play(Clip::PowerOn);
        log::info!("app: powered on at {now_ms}");
    }

    /// Advance the boot chime: chime clip, then the ready clip, then done.
    fn advance_boot(&mut self) {
        match self.boot {
            Some(BootStage::Chime) if !self.audio.is_playing() => {
                self.audio.play(Clip::PowerReady);
                self.boot = Some(BootStage::Ready);
            }
            Some(BootStage::Ready) if !self.audio.is_playing() => {
                self.boot = None;
                log::info!("app: boot chime finished");
            }
            _ => {}
        }
    }

    fn handle_recorder_outcome(&mut self, outcome: RecorderOutcome, now_ms: u64) {
        match outcome {
            RecorderOutcome::Quiet => {}
            RecorderOutcome::Started => {
                // The old slot is being overwritten; its timer is void.
                self.retention.disarm();
                self.light.reset();
            }
            RecorderOutcome::Finished => {
                self.playback.reset_count();
                self.retention.arm(now_ms);
                self.light.reset();
            }
            RecorderOutcome::Failed(e) => {
                log::warn!("app: {e}");
                self.light.reset();
            }
        }
    }

    fn handle_playback_outcome(&mut self, outcome: PlaybackOutcome, now_ms: u64) {
        match outcome {
            PlaybackOutcome::Quiet => {}
            PlaybackOutcome::Completed => {
                self.light.reset();
            }
            PlaybackOutcome::FullyConsumed => {
                self.light.reset();
                self.ring.clear();
                self.ring.show();
                self.retention.arm(now_ms);
            }
        }
    }

    /// Render exactly one of: boot-white, recording-red ramp,
    /// playback-green ramp, idle ambient.
    fn render(&mut self) {
        if self.power == PowerMode::Off {
            self.ring.clear();
            self.ring.show();
            return;
        }
        if self.boot.is_some() {
            self.ring.clear();
            self.ring.set_pixel(STATUS_PIXEL, 255, 255, 255);
            self.ring.show();
            return;
        }
        if self.recorder.is_recording() {
            self.light.tick();
            self.ring.dim();
            self.ring.set_pixel(STATUS_PIXEL, self.light.level(), 0, 0);
            self.ring.show();
        } else if self.playback.is_active() {
            self.light.tick();
            self.ring.dim();
            self.ring.set_pixel(STATUS_PIXEL, 0, self.light.level(), 0);
            self.ring.show();
        } else {
            let ambient = self.light.level();
            self.ring.set_pixel(STATUS_PIXEL, 0, 0, 0);
            for i in 1..self.config.num_pixels {
                self.ring.set_pixel(i, ambient, ambient, ambient);
            }
            self.ring.show();
        }
    }
}
