//! memo-button host demo.
//!
//! Runs the appliance against the simulated HAL with a scripted button
//! sequence: power on, record a memo, play it back twice. Clips and the
//! memo "finish playing" after a fixed simulated duration. Run with
//! `RUST_LOG=debug` to watch every transition.

use memo_button::hal::clock::{Clock, SystemClock};
use memo_button::hal::sim::{SimAudio, SimRing, SimState, SimStorage};
use memo_button::{App, ButtonLevel, MemoConfig};

/// Tick period in simulated milliseconds.
const TICK_MS: u64 = 5;

/// Simulated length of any clip or memo playback.
const CLIP_MS: u64 = 1_200;

fn main() {
    env_logger::init();
    let wall = SystemClock::new();

    let config = MemoConfig::default();
    let state = SimState::shared();
    let mut app = App::new(
        config,
        SimAudio::new(&state),
        SimStorage::new(&state),
        SimRing::new(config.num_pixels),
    );

    // (label, button level, duration of the segment in ms)
    let script: &[(&str, ButtonLevel, u64)] = &[
        ("hold to power on", ButtonLevel::Low, 3_200),
        ("boot chime", ButtonLevel::High, 4_000),
        ("hold for record gesture", ButtonLevel::Low, 3_500),
        ("arming + recording", ButtonLevel::High, 15_000),
        ("tap to stop recording", ButtonLevel::Low, 120),
        ("saved confirmation", ButtonLevel::High, 3_000),
        ("tap to play", ButtonLevel::Low, 120),
        ("first playback", ButtonLevel::High, 3_000),
        ("tap to play again", ButtonLevel::Low, 120),
        ("second playback", ButtonLevel::High, 3_000),
    ];

    let mut now_ms: u64 = 0;
    let mut playing_since: Option<u64> = None;

    for (label, level, duration_ms) in script {
        log::info!("script: {label}");
        let end = now_ms + duration_ms;
        while now_ms < end {
            // The sim device never finishes a clip on its own; end it
            // after CLIP_MS so prompts and playback complete.
            let playing = state.borrow().playing.is_some();
            match (playing, playing_since) {
                (true, None) => playing_since = Some(now_ms),
                (true, Some(since)) if now_ms - since >= CLIP_MS => {
                    state.borrow_mut().finish_playback();
                    playing_since = None;
                }
                (false, Some(_)) => playing_since = None,
                _ => {}
            }

            app.tick(*level, now_ms);
            now_ms += TICK_MS;
        }
    }

    println!(
        "simulated {now_ms} ms in {} ms of wall time",
        wall.now_ms()
    );
    println!(
        "play_count={}/{}, retention armed={}, slot exists={}",
        app.playback().play_count(),
        config.max_playback_count,
        app.retention().is_armed(),
        state.borrow().files.contains("recording.wav"),
    );
    println!("played: {:?}", state.borrow().played);
}
