use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use streamplot::{RollingSeriesBuffer, StreamError};

fn ys(buf: &RollingSeriesBuffer) -> Vec<f64> {
    buf.iter().map(|s| s.y).collect()
}

fn assert_close(actual: f64, expected: f64) {
    let tol = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn window_of_three_keeps_last_three_values() {
    let mut buf = RollingSeriesBuffer::with_seed(3, 0.0, 1.0).unwrap();
    for (i, y) in [1.0, 2.0, 3.0, 4.0].into_iter().enumerate() {
        buf.append((i + 1) as f64, y, 3).unwrap();
    }
    assert_eq!(ys(&buf), vec![2.0, 3.0, 4.0]);
    assert_close(buf.running_average().unwrap(), 3.0);
}

#[test]
fn average_progression_before_window_is_full() {
    let mut buf = RollingSeriesBuffer::new(100).unwrap();
    let avgs: Vec<f64> = [0.5, -0.5, 1.0]
        .into_iter()
        .enumerate()
        .map(|(i, y)| buf.append(i as f64, y, 100).unwrap().avg)
        .collect();
    assert_close(avgs[0], 0.5);
    assert_close(avgs[1], 0.0);
    assert_close(avgs[2], 1.0 / 3.0);
    assert_eq!(buf.len(), 3);
}

#[test]
fn full_window_evicts_oldest_value() {
    let mut buf = RollingSeriesBuffer::with_seed(2, 0.0, 10.0).unwrap();
    assert_eq!(buf.running_average().unwrap(), 10.0);

    let s = buf.append(1.0, 20.0, 2).unwrap();
    assert_eq!(ys(&buf), vec![10.0, 20.0]);
    assert_close(s.avg, 15.0);

    let s = buf.append(2.0, 30.0, 2).unwrap();
    assert_eq!(ys(&buf), vec![20.0, 30.0]);
    assert_close(s.avg, 25.0);
}

#[test]
fn shrinking_capacity_evicts_before_computing_average() {
    let mut buf = RollingSeriesBuffer::with_seed(5, 0.0, 1.0).unwrap();
    for (i, y) in [2.0, 3.0, 4.0, 5.0, 6.0].into_iter().enumerate() {
        buf.append((i + 1) as f64, y, 5).unwrap();
    }
    assert_eq!(ys(&buf), vec![2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_close(buf.running_average().unwrap(), 4.0);

    // Evict down to [5, 6] (mean 5.5) first, then the new value replaces 5.
    let s = buf.append(6.0, 7.0, 2).unwrap();
    assert_eq!(ys(&buf), vec![6.0, 7.0]);
    assert_close(s.avg, 6.5);
    assert_eq!(buf.capacity(), 2);
}

#[test]
fn growing_capacity_keeps_history_and_extends_window() {
    let mut buf = RollingSeriesBuffer::with_seed(2, 0.0, 2.0).unwrap();
    buf.append(1.0, 4.0, 2).unwrap();
    buf.append(2.0, 6.0, 2).unwrap();
    assert_eq!(ys(&buf), vec![4.0, 6.0]);

    let s = buf.append(3.0, 8.0, 4).unwrap();
    assert_eq!(ys(&buf), vec![4.0, 6.0, 8.0]);
    assert_close(s.avg, 6.0);
}

#[test]
fn seed_sets_average_to_own_value() {
    let mut buf = RollingSeriesBuffer::new(10).unwrap();
    let s = buf.seed(1.0, 0.8414709848);
    assert_eq!(s.avg, s.y);
    assert_eq!(*buf.last().unwrap(), s);

    // Seeding again replaces the history.
    buf.append(1.1, 5.0, 10).unwrap();
    buf.seed(2.0, -1.0);
    assert_eq!(buf.len(), 1);
    assert_eq!(buf.running_average().unwrap(), -1.0);
}

#[test]
fn empty_buffer_queries_fail() {
    let buf = RollingSeriesBuffer::new(3).unwrap();
    assert!(matches!(buf.last(), Err(StreamError::EmptyBufferAccess)));
    assert!(matches!(
        buf.running_average(),
        Err(StreamError::EmptyBufferAccess)
    ));
    assert!(matches!(buf.window_mean(), Err(StreamError::EmptyBufferAccess)));
}

#[test]
fn zero_capacity_is_invalid_everywhere() {
    assert!(matches!(
        RollingSeriesBuffer::new(0),
        Err(StreamError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        RollingSeriesBuffer::with_seed(0, 0.0, 1.0),
        Err(StreamError::InvalidConfiguration(_))
    ));
    let mut buf = RollingSeriesBuffer::with_seed(3, 0.0, 1.0).unwrap();
    assert!(matches!(
        buf.append(1.0, 2.0, 0),
        Err(StreamError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        buf.set_capacity(0),
        Err(StreamError::InvalidConfiguration(_))
    ));
    assert_eq!(buf.len(), 1);
    assert_eq!(buf.capacity(), 3);
}

#[test]
fn random_streams_keep_mean_size_and_order_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut buf = RollingSeriesBuffer::with_seed(10, 0.0, 0.0).unwrap();
    let mut capacity = 10usize;
    for i in 1..=2000 {
        if rng.gen_bool(0.05) {
            capacity = rng.gen_range(1..=30);
        }
        let y: f64 = rng.gen_range(-10.0..10.0);
        let s = buf.append(i as f64 * 0.1, y, capacity).unwrap();

        assert!(buf.len() <= capacity);
        assert_eq!(*buf.last().unwrap(), s);
        let tol = 1e-9 * 10.0;
        let mean = buf.window_mean().unwrap();
        assert!(
            (s.avg - mean).abs() <= tol,
            "step {i}: running {} vs exact {mean}",
            s.avg
        );
        assert!(buf
            .samples()
            .iter()
            .zip(buf.samples().iter().skip(1))
            .all(|(a, b)| a.x < b.x));
    }
}

#[test]
fn plot_columns_follow_samples() {
    let mut buf = RollingSeriesBuffer::with_seed(3, 1.0, 2.0).unwrap();
    buf.append(1.1, 4.0, 3).unwrap();
    assert_eq!(buf.y_points(), vec![[1.0, 2.0], [1.1, 4.0]]);
    assert_eq!(buf.avg_points(), vec![[1.0, 2.0], [1.1, 3.0]]);
}
