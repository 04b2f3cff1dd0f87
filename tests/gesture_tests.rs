//! Gesture detector tests

use memo_button::gesture::{ButtonEvent, ButtonLevel, GestureDetector};

fn make_detector() -> GestureDetector {
    GestureDetector::new(3_000)
}

#[test]
fn test_press_start() {
    let mut detector = make_detector();
    assert_eq!(detector.sample(ButtonLevel::Low, 100), ButtonEvent::PressStart);
    assert!(detector.is_pressed());
}

#[test]
fn test_short_release() {
    let mut detector = make_detector();

    detector.sample(ButtonLevel::Low, 0);
    assert_eq!(
        detector.sample(ButtonLevel::High, 2_999),
        ButtonEvent::ShortRelease
    );
    assert!(!detector.is_pressed());
}

#[test]
fn test_long_release_at_threshold() {
    let mut detector = make_detector();

    detector.sample(ButtonLevel::Low, 0);
    detector.sample(ButtonLevel::Low, 3_000); // HoldThresholdReached
    assert_eq!(
        detector.sample(ButtonLevel::High, 3_000),
        ButtonEvent::LongRelease
    );
}

#[test]
fn test_hold_threshold_fires_once_per_press() {
    let mut detector = make_detector();

    detector.sample(ButtonLevel::Low, 0);
    assert_eq!(detector.sample(ButtonLevel::Low, 1_500), ButtonEvent::Idle);
    assert_eq!(
        detector.sample(ButtonLevel::Low, 3_000),
        ButtonEvent::HoldThresholdReached
    );
    assert_eq!(detector.sample(ButtonLevel::Low, 3_005), ButtonEvent::Idle);
    assert_eq!(detector.sample(ButtonLevel::Low, 9_000), ButtonEvent::Idle);

    // A new press re-arms the threshold.
    assert_eq!(
        detector.sample(ButtonLevel::High, 9_100),
        ButtonEvent::LongRelease
    );
    assert_eq!(detector.sample(ButtonLevel::Low, 10_000), ButtonEvent::PressStart);
    assert_eq!(
        detector.sample(ButtonLevel::Low, 13_000),
        ButtonEvent::HoldThresholdReached
    );
}

#[test]
fn test_spurious_release_emits_idle() {
    let mut detector = make_detector();
    assert_eq!(detector.sample(ButtonLevel::High, 0), ButtonEvent::Idle);
    assert_eq!(detector.sample(ButtonLevel::High, 500), ButtonEvent::Idle);
}

#[test]
fn test_idle_high_line_emits_nothing() {
    let mut detector = make_detector();
    for t in (0..10_000).step_by(5) {
        assert_eq!(detector.sample(ButtonLevel::High, t), ButtonEvent::Idle);
    }
}

#[test]
fn test_at_most_one_event_per_tick_sequence() {
    let mut detector = make_detector();

    // Press, hold past threshold, release: exactly three non-idle events.
    let mut events = 0;
    for t in (0..4_000).step_by(5) {
        if detector.sample(ButtonLevel::Low, t) != ButtonEvent::Idle {
            events += 1;
        }
    }
    if detector.sample(ButtonLevel::High, 4_000) != ButtonEvent::Idle {
        events += 1;
    }
    assert_eq!(events, 3); // PressStart, HoldThresholdReached, LongRelease
}

#[test]
fn test_reset_forgets_press() {
    let mut detector = make_detector();

    detector.sample(ButtonLevel::Low, 0);
    detector.reset();
    // The release after reset is spurious.
    assert_eq!(detector.sample(ButtonLevel::High, 5_000), ButtonEvent::Idle);
}
