//! # memo-button
//!
//! Single-button voice memo appliance: hold to record, tap to play back,
//! with an LED ring for status and an auto-delete policy for stale memos.
//!
//! ## Architecture
//!
//! All logic lives in pure state machines driven by a single synchronous
//! tick loop. Hardware is reached only through the capability traits in
//! [`hal`]:
//! - Producers of time and button level feed [`App::tick`]
//! - Controllers own their session state exclusively, no shared mutation
//! - Time-based transitions are polled every tick, never interrupt-driven
//!
//! The whole core is testable on host against the simulated HAL.

pub mod app;
pub mod config;
pub mod error;
pub mod gesture;
pub mod hal;
pub mod light;
pub mod playback;
pub mod recorder;
pub mod retention;

pub use app::App;
pub use config::MemoConfig;
pub use error::MemoError;
pub use gesture::{ButtonEvent, ButtonLevel, GestureDetector};
pub use light::LightRamp;
pub use playback::{PlaybackController, PlaybackOutcome};
pub use recorder::{RecorderController, RecorderOutcome};
pub use retention::RetentionManager;
