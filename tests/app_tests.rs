//! End-to-end appliance scenarios driven through App::tick

use memo_button::hal::audio::Clip;
use memo_button::hal::sim::{SharedSimState, SimAudio, SimRing, SimState, SimStorage};
use memo_button::{App, ButtonLevel, MemoConfig};

const SETTLE_MS: u64 = 5_000;
const LIMIT_MS: u64 = 60_000;
const WINDOW_MS: u64 = 7 * 24 * 60 * 60 * 1_000;

type SimApp = App<SimAudio, SimStorage, SimRing>;

fn make_app(state: &SharedSimState) -> SimApp {
    let config = MemoConfig::default();
    App::new(
        config,
        SimAudio::new(state),
        SimStorage::new(state),
        SimRing::new(config.num_pixels),
    )
}

/// Hold through the power threshold, release, and let the boot chime
/// finish. Leaves `t` pointing past the boot sequence.
fn power_on(app: &mut SimApp, state: &SharedSimState, t: &mut u64) {
    app.tick(ButtonLevel::Low, *t);
    *t += 3_000;
    app.tick(ButtonLevel::Low, *t);
    assert!(app.is_powered());

    *t += 100;
    app.tick(ButtonLevel::High, *t); // release of the power hold, swallowed

    // Boot chime: two clips back to back.
    state.borrow_mut().finish_playback();
    *t += 10;
    app.tick(ButtonLevel::High, *t);
    state.borrow_mut().finish_playback();
    *t += 10;
    app.tick(ButtonLevel::High, *t);
}

/// Short press-and-release; `t` ends at the release tick.
fn tap(app: &mut SimApp, t: &mut u64) {
    app.tick(ButtonLevel::Low, *t);
    *t += 100;
    app.tick(ButtonLevel::High, *t);
}

/// Hold past the threshold and release; `t` ends at the release tick.
fn long_press(app: &mut SimApp, t: &mut u64) {
    app.tick(ButtonLevel::Low, *t);
    *t += 3_500;
    app.tick(ButtonLevel::High, *t);
}

/// Drive the app from a long press all the way into Recording.
/// Returns the recording start timestamp.
fn record_gesture(app: &mut SimApp, t: &mut u64) -> u64 {
    long_press(app, t);
    let release = *t;
    *t = release + SETTLE_MS;
    app.tick(ButtonLevel::High, *t);
    assert!(app.recorder().is_recording());
    release + SETTLE_MS
}

#[test]
fn test_power_hold_toggles_on_and_plays_chime() {
    let state = SimState::shared();
    let mut app = make_app(&state);
    let mut t = 0;

    assert!(!app.is_powered());
    power_on(&mut app, &state, &mut t);

    assert!(app.is_powered());
    let played = state.borrow().played.clone();
    assert_eq!(
        played,
        vec![Clip::PowerOn.asset(), Clip::PowerReady.asset()]
    );
    // The power hold's release must not have started a recording.
    assert!(app.recorder().is_idle());
}

#[test]
fn test_gestures_ignored_while_off() {
    let state = SimState::shared();
    state.borrow_mut().files.insert("recording.wav".to_owned());
    let mut app = make_app(&state);
    let mut t = 0;

    tap(&mut app, &mut t);
    assert!(!app.is_powered());
    assert!(state.borrow().played.is_empty());
    assert_eq!(app.ring().pixel(0), (0, 0, 0));
}

#[test]
fn test_long_press_reaches_recording_after_settle() {
    let state = SimState::shared();
    let mut app = make_app(&state);
    let mut t = 10_000;
    power_on(&mut app, &state, &mut t);

    long_press(&mut app, &mut t);
    let release = t;
    assert!(app.recorder().is_arming());
    assert_eq!(state.borrow().last_played(), Some(Clip::MicReady.asset()));

    // One tick short of the settle delay: still arming.
    app.tick(ButtonLevel::High, release + SETTLE_MS - 1);
    assert!(app.recorder().is_arming());

    app.tick(ButtonLevel::High, release + SETTLE_MS);
    assert!(app.recorder().is_recording());
    assert_eq!(app.recorder().started_at(), Some(release + SETTLE_MS));
}

#[test]
fn test_recording_auto_finalizes_at_limit() {
    let state = SimState::shared();
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    let started = record_gesture(&mut app, &mut t);

    app.tick(ButtonLevel::High, started + LIMIT_MS - 1);
    assert!(app.recorder().is_recording());

    app.tick(ButtonLevel::High, started + LIMIT_MS);
    assert!(app.recorder().is_idle());
    assert!(state.borrow().files.contains("recording.wav"));
    assert_eq!(app.playback().play_count(), 0);
    assert!(app.retention().is_armed());
}

#[test]
fn test_short_press_stops_recording_early() {
    let state = SimState::shared();
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    record_gesture(&mut app, &mut t);

    t += 2_000;
    tap(&mut app, &mut t);
    assert!(app.recorder().is_idle());
    assert!(state.borrow().files.contains("recording.wav"));
    assert_eq!(
        state.borrow().last_played(),
        Some(Clip::RecordingSaved.asset())
    );
    assert!(app.retention().is_armed());
}

#[test]
fn test_open_failure_returns_to_idle_with_error_tone() {
    let state = SimState::shared();
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    long_press(&mut app, &mut t);
    state.borrow_mut().fail_next_open = true;

    app.tick(ButtonLevel::High, t + SETTLE_MS);
    assert!(app.recorder().is_idle());
    assert_eq!(state.borrow().last_played(), Some(Clip::ErrorTone.asset()));
    assert!(state.borrow().recording.is_none());
}

#[test]
fn test_tap_with_no_recording_is_notice_only() {
    let state = SimState::shared();
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    t += 1_000;
    tap(&mut app, &mut t);

    assert_eq!(state.borrow().last_played(), Some(Clip::NoRecording.asset()));
    assert!(!app.playback().is_active());
    assert_eq!(app.playback().play_count(), 0);
    assert!(app.recorder().is_idle());
    assert_eq!(app.ring().pixel(0), (0, 0, 0));
}

#[test]
fn test_four_playbacks_arm_retention_and_fifth_is_refused() {
    let state = SimState::shared();
    state.borrow_mut().files.insert("recording.wav".to_owned());
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    for expected in 1..=4u8 {
        t += 1_000;
        tap(&mut app, &mut t);
        assert!(app.playback().is_active());

        t += 1_000;
        state.borrow_mut().finish_playback();
        app.tick(ButtonLevel::High, t);
        assert!(!app.playback().is_active());
        assert_eq!(app.playback().play_count(), expected);
    }
    assert!(app.retention().is_armed());

    // Fifth tap: limit notice, no playback session.
    t += 1_000;
    tap(&mut app, &mut t);
    assert!(!app.playback().is_active());
    assert_eq!(app.playback().play_count(), 4);
    assert_eq!(
        state.borrow().last_played(),
        Some(Clip::MaxPlaybackReached.asset())
    );
}

#[test]
fn test_new_recording_resets_playback_budget() {
    let state = SimState::shared();
    state.borrow_mut().files.insert("recording.wav".to_owned());
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    for _ in 0..4 {
        t += 1_000;
        tap(&mut app, &mut t);
        t += 1_000;
        state.borrow_mut().finish_playback();
        app.tick(ButtonLevel::High, t);
    }
    assert_eq!(app.playback().play_count(), 4);

    t += 1_000;
    record_gesture(&mut app, &mut t);
    t += 2_000;
    tap(&mut app, &mut t);

    assert_eq!(app.playback().play_count(), 0);
}

#[test]
fn test_retention_deletes_slot_after_window() {
    let state = SimState::shared();
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    record_gesture(&mut app, &mut t);
    t += 2_000;
    tap(&mut app, &mut t); // finalize; retention armed at this tick
    let armed_at = t;
    state.borrow_mut().finish_playback(); // saved confirmation done

    app.tick(ButtonLevel::High, armed_at + WINDOW_MS - 1);
    assert!(state.borrow().files.contains("recording.wav"));

    app.tick(ButtonLevel::High, armed_at + WINDOW_MS);
    assert!(!state.borrow().files.contains("recording.wav"));
    assert!(!app.retention().is_armed());
    assert_eq!(
        state.borrow().last_played(),
        Some(Clip::RecordingDeleted.asset())
    );
}

#[test]
fn test_new_recording_disarms_pending_retention() {
    let state = SimState::shared();
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    record_gesture(&mut app, &mut t);
    t += 2_000;
    tap(&mut app, &mut t);
    assert!(app.retention().is_armed());
    state.borrow_mut().finish_playback();

    // Second recording: the timer for the overwritten slot is void.
    t += 1_000;
    record_gesture(&mut app, &mut t);
    assert!(!app.retention().is_armed());
}

#[test]
fn test_recording_and_playback_never_both_active() {
    let state = SimState::shared();
    state.borrow_mut().files.insert("recording.wav".to_owned());
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    // Start playback, then try to start a recording on top of it.
    t += 1_000;
    tap(&mut app, &mut t);
    assert!(app.playback().is_active());

    t += 500;
    long_press(&mut app, &mut t);
    assert!(app.recorder().is_idle());
    assert!(app.playback().is_active());

    // Finish playback, then record; a tap mid-recording stops it
    // rather than starting playback.
    state.borrow_mut().finish_playback();
    t += 100;
    app.tick(ButtonLevel::High, t);

    t += 1_000;
    record_gesture(&mut app, &mut t);
    t += 1_000;
    tap(&mut app, &mut t);
    assert!(app.recorder().is_idle());
    assert!(!app.playback().is_active());
}

#[test]
fn test_tap_during_arming_prompt_is_dropped() {
    let state = SimState::shared();
    state.borrow_mut().files.insert("recording.wav".to_owned());
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    long_press(&mut app, &mut t);
    assert!(app.recorder().is_arming());

    t += 500;
    tap(&mut app, &mut t);
    assert!(app.recorder().is_arming());
    assert!(!app.playback().is_active());
}

#[test]
fn test_ring_shows_red_ramp_while_recording() {
    let state = SimState::shared();
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    record_gesture(&mut app, &mut t);

    t += 5;
    app.tick(ButtonLevel::High, t);
    let (r1, g, b) = app.ring().pixel(0);
    assert!(r1 > 0);
    assert_eq!((g, b), (0, 0));

    t += 5;
    app.tick(ButtonLevel::High, t);
    let (r2, _, _) = app.ring().pixel(0);
    assert!(r2 > r1);
}

#[test]
fn test_ring_shows_green_ramp_while_playing() {
    let state = SimState::shared();
    state.borrow_mut().files.insert("recording.wav".to_owned());
    let mut app = make_app(&state);
    let mut t = 0;
    power_on(&mut app, &state, &mut t);

    t += 1_000;
    tap(&mut app, &mut t);
    assert!(app.playback().is_active());

    t += 5;
    app.tick(ButtonLevel::High, t);
    let (r, g, b) = app.ring().pixel(0);
    assert!(g > 0);
    assert_eq!((r, b), (0, 0));
}
