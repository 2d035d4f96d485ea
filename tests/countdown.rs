use payconfirm::config::PaymentInstructions;
use payconfirm::countdown::{Countdown, CountdownEvent, COUNTDOWN_SECS};
use payconfirm::route::Destination;
use payconfirm::session::{Effect, PaymentSession};
use payconfirm::timer::{format_time, Scheduler, TICK_MS};

fn navigations(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| **e == Effect::Navigate(Destination::PaymentFailed))
        .count()
}

#[test]
fn test_format_time_examples() {
    assert_eq!(format_time(300), "05:00");
    assert_eq!(format_time(65), "01:05");
    assert_eq!(format_time(59), "00:59");
    assert_eq!(format_time(0), "00:00");
}

#[test]
fn test_format_time_whole_range() {
    for s in 0..=COUNTDOWN_SECS {
        let text = format_time(s);
        assert_eq!(text.len(), 5, "{} -> {}", s, text);
        let (mm, ss) = text.split_once(':').unwrap();
        assert_eq!(mm.parse::<u32>().unwrap(), s / 60);
        assert_eq!(ss.parse::<u32>().unwrap(), s % 60);
    }
}

#[test]
fn test_countdown_reaches_zero_after_300_ticks() {
    let mut scheduler = Scheduler::new();
    let mut countdown = Countdown::new();
    assert_eq!(countdown.start(&mut scheduler), None);

    let mut last = countdown.remaining();
    let mut expired = 0;
    for tick in 1..=COUNTDOWN_SECS as u64 {
        let fired = scheduler.next_due(tick * TICK_MS).expect("tick should be due");
        assert!(countdown.owns(&fired));
        match countdown.on_tick(&mut scheduler) {
            Some(CountdownEvent::Tick(n)) => assert_eq!(n, last - 1),
            Some(CountdownEvent::Expired) => expired += 1,
            None => panic!("tick {} produced nothing", tick),
        }
        assert!(countdown.remaining() <= last);
        last = countdown.remaining();
    }

    assert_eq!(countdown.remaining(), 0);
    assert_eq!(expired, 1);
    assert!(countdown.is_expired());
    assert!(!countdown.is_running());
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn test_session_expiry_navigates_exactly_once() {
    let mut session = PaymentSession::mount(PaymentInstructions::default());
    assert_eq!(session.time_left(), "05:00");

    for _ in 0..299 {
        session.advance(TICK_MS);
    }
    assert_eq!(session.remaining_seconds(), 1);
    assert_eq!(navigations(&session.drain_effects()), 0);

    session.advance(TICK_MS);
    assert_eq!(session.remaining_seconds(), 0);
    assert_eq!(session.time_left(), "00:00");
    assert_eq!(navigations(&session.drain_effects()), 1);

    // Terminal: no more ticks, no more navigation.
    session.advance(60_000);
    assert_eq!(session.remaining_seconds(), 0);
    assert!(session.drain_effects().is_empty());
    assert_eq!(session.pending_timers(), 0);
}

#[test]
fn test_large_advance_fires_every_tick() {
    let mut session = PaymentSession::mount(PaymentInstructions::default());
    session.advance(65_500);
    assert_eq!(session.remaining_seconds(), 300 - 65);
    assert_eq!(session.time_left(), "03:55");

    session.advance(500);
    assert_eq!(session.remaining_seconds(), 300 - 66);
}

#[test]
fn test_zero_second_countdown_expires_on_mount() {
    let mut session = PaymentSession::mount_with_countdown(PaymentInstructions::default(), 0);
    assert_eq!(navigations(&session.drain_effects()), 1);
    session.advance(5_000);
    assert!(session.drain_effects().is_empty());
}

#[test]
fn test_countdown_is_clamped() {
    let session = PaymentSession::mount_with_countdown(PaymentInstructions::default(), 9_000);
    assert_eq!(session.remaining_seconds(), COUNTDOWN_SECS);
}

#[test]
fn test_teardown_mid_tick_stops_countdown() {
    let mut session = PaymentSession::mount(PaymentInstructions::default());
    session.advance(1_500);
    assert_eq!(session.remaining_seconds(), 299);

    session.teardown();
    assert_eq!(session.pending_timers(), 0);
    session.advance(400_000);
    assert_eq!(session.remaining_seconds(), 299);
    assert!(session.drain_effects().is_empty());
}
