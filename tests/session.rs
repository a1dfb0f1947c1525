use std::time::{Duration, Instant};

use streamplot::{RunState, SignalGenerator, SignalParameters, StreamError, StreamSession};

fn session(params: SignalParameters, state: RunState, t0: Instant) -> StreamSession {
    let generator = SignalGenerator::from_seed(1.0, 0.1, 1234).unwrap();
    StreamSession::new(params, generator, state, t0).unwrap()
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn new_session_is_seeded_with_one_sample() {
    let s = session(SignalParameters::default(), RunState::Running, Instant::now());
    let last = s.buffer().last().unwrap();
    assert_eq!(s.buffer().len(), 1);
    assert_eq!(last.x, 1.0);
    assert!((last.y - 1.0_f64.sin()).abs() < 1e-12);
    assert_eq!(last.avg, last.y);
}

#[test]
fn step_appends_next_x_with_running_average() {
    let mut s = session(SignalParameters::default(), RunState::Running, Instant::now());
    for i in 1..=5 {
        let sample = s.step().unwrap();
        assert!((sample.x - (1.0 + 0.1 * i as f64)).abs() < 1e-9);
        let mean = s.buffer().window_mean().unwrap();
        assert!((sample.avg - mean).abs() < 1e-9);
    }
    assert_eq!(s.buffer().len(), 6);
}

#[test]
fn tick_follows_the_update_delay() {
    let t0 = Instant::now();
    let params = SignalParameters {
        update_delay_ms: 50,
        ..Default::default()
    };
    let mut s = session(params, RunState::Running, t0);
    assert!(s.tick(t0 + ms(10)).unwrap().is_empty());
    assert_eq!(s.tick(t0 + ms(160)).unwrap().len(), 3);
    assert_eq!(s.buffer().len(), 4);
}

#[test]
fn paused_session_does_not_grow() {
    let t0 = Instant::now();
    let mut s = session(SignalParameters::default(), RunState::Paused, t0);
    assert!(s.tick(t0 + Duration::from_secs(5)).unwrap().is_empty());
    assert_eq!(s.buffer().len(), 1);

    let t1 = t0 + Duration::from_secs(5);
    assert_eq!(s.toggle_pause(t1), RunState::Running);
    assert_eq!(s.tick(t1 + ms(100)).unwrap().len(), 1);
    assert_eq!(s.toggle_pause(t1 + ms(100)), RunState::Paused);
}

#[test]
fn window_never_exceeds_capacity() {
    let params = SignalParameters {
        capacity: 5,
        ..Default::default()
    };
    let mut s = session(params, RunState::Running, Instant::now());
    for _ in 0..50 {
        s.step().unwrap();
        assert!(s.buffer().len() <= 5);
    }
    assert_eq!(s.buffer().len(), 5);
}

#[test]
fn capacity_change_applies_on_next_sample() {
    let t0 = Instant::now();
    let mut s = session(SignalParameters::default(), RunState::Running, t0);
    for _ in 0..9 {
        s.step().unwrap();
    }
    assert_eq!(s.buffer().len(), 10);

    let params = SignalParameters {
        capacity: 3,
        ..s.params().clone()
    };
    s.set_params(params, t0).unwrap();
    assert_eq!(s.buffer().len(), 10, "history is not rewritten");

    let sample = s.step().unwrap();
    assert_eq!(s.buffer().len(), 3);
    let mean = s.buffer().window_mean().unwrap();
    assert!((sample.avg - mean).abs() < 1e-9);
}

#[test]
fn delay_change_restarts_timer() {
    let t0 = Instant::now();
    let mut s = session(SignalParameters::default(), RunState::Running, t0);
    let params = SignalParameters {
        update_delay_ms: 20,
        ..s.params().clone()
    };
    s.set_params(params, t0 + ms(90)).unwrap();
    assert_eq!(s.timer().period(), ms(20));
    assert!(s.tick(t0 + ms(100)).unwrap().is_empty());
    assert_eq!(s.tick(t0 + ms(110)).unwrap().len(), 1);
}

#[test]
fn invalid_parameters_leave_session_untouched() {
    let t0 = Instant::now();
    let mut s = session(SignalParameters::default(), RunState::Running, t0);
    let bad = SignalParameters {
        capacity: 0,
        ..Default::default()
    };
    assert!(matches!(
        s.set_params(bad, t0),
        Err(StreamError::InvalidConfiguration(_))
    ));
    assert_eq!(*s.params(), SignalParameters::default());

    let generator = SignalGenerator::from_seed(1.0, 0.1, 1).unwrap();
    let bad = SignalParameters {
        update_delay_ms: 0,
        ..Default::default()
    };
    assert!(StreamSession::new(bad, generator, RunState::Running, t0).is_err());
}
