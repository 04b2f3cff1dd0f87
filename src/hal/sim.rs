//! Simulated HAL for host runs and integration tests.
//!
//! One shared [`SimState`] backs the audio and storage handles so that
//! closing a recording makes the slot visible to storage, the same way
//! the real codec writes to the same card the storage driver reads.
//! Tests keep a clone of the shared state to drive playback completion
//! and inject failures.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::audio::{AudioDevice, Clip, DeviceError, RecordHandle};
use super::ring::IndicatorRing;
use super::storage::{Storage, StorageError};

/// Shared backing state for the simulated devices.
#[derive(Debug, Default)]
pub struct SimState {
    /// Asset or slot name currently sounding, if any.
    pub playing: Option<String>,

    /// Open recording, if any.
    pub recording: Option<(RecordHandle, String)>,

    /// Slots present on "the card".
    pub files: HashSet<String>,

    /// Everything ever played, in order.
    pub played: Vec<String>,

    /// Everything ever removed, in order.
    pub removed: Vec<String>,

    /// Make the next `start_recording` fail.
    pub fail_next_open: bool,

    /// Make every `remove` fail.
    pub fail_remove: bool,

    next_handle: u32,
}

/// Shared handle to [`SimState`].
pub type SharedSimState = Rc<RefCell<SimState>>;

impl SimState {
    /// Create a fresh shared state.
    pub fn shared() -> SharedSimState {
        Rc::new(RefCell::new(SimState::default()))
    }

    /// Report the current playback as finished.
    pub fn finish_playback(&mut self) {
        self.playing = None;
    }

    /// Last thing played, if anything has played yet.
    pub fn last_played(&self) -> Option<&str> {
        self.played.last().map(String::as_str)
    }
}

/// Simulated audio codec.
pub struct SimAudio {
    state: SharedSimState,
}

impl SimAudio {
    pub fn new(state: &SharedSimState) -> Self {
        Self {
            state: Rc::clone(state),
        }
    }
}

impl AudioDevice for SimAudio {
    fn start_recording(&mut self, slot: &str) -> Result<RecordHandle, DeviceError> {
        let mut state = self.state.borrow_mut();
        if state.fail_next_open {
            state.fail_next_open = false;
            return Err(DeviceError::Unavailable("mic open failed"));
        }
        if state.recording.is_some() {
            return Err(DeviceError::Busy);
        }
        state.next_handle += 1;
        let handle = RecordHandle::new(state.next_handle);
        state.recording = Some((handle, slot.to_owned()));
        Ok(handle)
    }

    fn stop_recording(&mut self, handle: RecordHandle) {
        let mut state = self.state.borrow_mut();
        if let Some((open, slot)) = state.recording.take() {
            if open == handle {
                state.files.insert(slot);
            } else {
                state.recording = Some((open, slot));
            }
        }
    }

    fn play(&mut self, clip: Clip) {
        let mut state = self.state.borrow_mut();
        state.playing = Some(clip.asset().to_owned());
        state.played.push(clip.asset().to_owned());
    }

    fn play_slot(&mut self, slot: &str) {
        let mut state = self.state.borrow_mut();
        state.playing = Some(slot.to_owned());
        state.played.push(slot.to_owned());
    }

    fn is_playing(&self) -> bool {
        self.state.borrow().playing.is_some()
    }

    fn stop_playback(&mut self) {
        self.state.borrow_mut().playing = None;
    }
}

/// Simulated persistent storage.
pub struct SimStorage {
    state: SharedSimState,
}

impl SimStorage {
    pub fn new(state: &SharedSimState) -> Self {
        Self {
            state: Rc::clone(state),
        }
    }
}

impl Storage for SimStorage {
    fn exists(&self, slot: &str) -> bool {
        self.state.borrow().files.contains(slot)
    }

    fn remove(&mut self, slot: &str) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        if state.fail_remove {
            return Err(StorageError::Io("remove failed"));
        }
        state.files.remove(slot);
        state.removed.push(slot.to_owned());
        Ok(())
    }
}

/// Simulated indicator ring holding a plain RGB frame buffer.
pub struct SimRing {
    pixels: Vec<(u8, u8, u8)>,
    frames_shown: u32,
}

impl SimRing {
    pub fn new(num_pixels: usize) -> Self {
        Self {
            pixels: vec![(0, 0, 0); num_pixels],
            frames_shown: 0,
        }
    }

    /// Current color of one pixel.
    pub fn pixel(&self, index: usize) -> (u8, u8, u8) {
        self.pixels[index]
    }

    /// Number of frames pushed so far.
    pub fn frames_shown(&self) -> u32 {
        self.frames_shown
    }
}

impl IndicatorRing for SimRing {
    fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) {
        if let Some(px) = self.pixels.get_mut(index) {
            *px = (r, g, b);
        }
    }

    fn dim(&mut self) {
        for px in &mut self.pixels {
            *px = (px.0 / 2, px.1 / 2, px.2 / 2);
        }
    }

    fn show(&mut self) {
        self.frames_shown += 1;
    }

    fn clear(&mut self) {
        for px in &mut self.pixels {
            *px = (0, 0, 0);
        }
    }
}
