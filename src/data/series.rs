//! Bounded rolling series with an incrementally maintained running average.
//!
//! [`RollingSeriesBuffer`] keeps at most `capacity` samples. Every stored
//! [`Sample`] carries the mean of the y-values in the window as it was right
//! after that sample was appended, so the last sample's `avg` is always the
//! mean of the current window. Appending is O(1): the mean is updated from the
//! previous mean, the new value and (when full) the value being evicted.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StreamError};

/// One point of the series: x, raw y and the running average at that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub avg: f64,
}

/// Reject a zero capacity.
pub(crate) fn validate_capacity(capacity: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(capacity).ok_or_else(|| {
        StreamError::InvalidConfiguration("capacity must be at least 1".to_string())
    })
}

/// Fixed-length window of samples, oldest first.
#[derive(Debug, Clone)]
pub struct RollingSeriesBuffer {
    samples: VecDeque<Sample>,
    capacity: NonZeroUsize,
}

impl RollingSeriesBuffer {
    /// Create an empty buffer.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = validate_capacity(capacity)?;
        Ok(Self {
            samples: VecDeque::with_capacity(capacity.get()),
            capacity,
        })
    }

    /// Create a buffer holding a single seed sample.
    pub fn with_seed(capacity: usize, x: f64, y: f64) -> Result<Self> {
        let mut buf = Self::new(capacity)?;
        buf.seed(x, y);
        Ok(buf)
    }

    /// Replace the contents with exactly one sample whose average is its own y.
    pub fn seed(&mut self, x: f64, y: f64) -> Sample {
        let sample = Sample { x, y, avg: y };
        self.samples.clear();
        self.samples.push_back(sample);
        sample
    }

    /// Append `(x, y)` using `capacity` as the current window length.
    ///
    /// If the window already holds more than `capacity` samples (the capacity
    /// was lowered since the last call), the surplus is evicted from the front
    /// and the running average corrected for each evicted value before the new
    /// average is computed.
    pub fn append(&mut self, x: f64, y: f64, capacity: usize) -> Result<Sample> {
        let capacity = validate_capacity(capacity)?;
        self.capacity = capacity;
        let cap = capacity.get();

        let mut avg0 = self.samples.back().map_or(0.0, |s| s.avg);
        while self.samples.len() > cap {
            let n = self.samples.len() as f64;
            if let Some(evicted) = self.samples.pop_front() {
                avg0 = (n * avg0 - evicted.y) / (n - 1.0);
            }
        }

        let n0 = self.samples.len();
        let (n1, delta) = match self.samples.front() {
            Some(oldest) if n0 >= cap => (n0, y - oldest.y),
            _ => (n0 + 1, y),
        };
        let avg1 = (n0 as f64 / n1 as f64) * avg0 + delta / n1 as f64;

        let sample = Sample { x, y, avg: avg1 };
        self.samples.push_back(sample);
        if self.samples.len() > cap {
            self.samples.pop_front();
        }
        Ok(sample)
    }

    /// Change the capacity used when no explicit one is supplied. Existing
    /// samples are kept; the next append evicts down to the new length.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        self.capacity = validate_capacity(capacity)?;
        Ok(())
    }

    /// Append using the stored capacity.
    pub fn push(&mut self, x: f64, y: f64) -> Result<Sample> {
        self.append(x, y, self.capacity.get())
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &VecDeque<Sample> {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    /// Most recently appended sample.
    pub fn last(&self) -> Result<&Sample> {
        self.samples.back().ok_or(StreamError::EmptyBufferAccess)
    }

    /// Running average of the window, as carried by the last sample.
    pub fn running_average(&self) -> Result<f64> {
        self.last().map(|s| s.avg)
    }

    /// Mean of the stored y-values, recomputed from scratch in O(n).
    pub fn window_mean(&self) -> Result<f64> {
        if self.samples.is_empty() {
            return Err(StreamError::EmptyBufferAccess);
        }
        let sum: f64 = self.samples.iter().map(|s| s.y).sum();
        Ok(sum / self.samples.len() as f64)
    }

    /// `[x, y]` pairs for plotting the raw signal.
    pub fn y_points(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(|s| [s.x, s.y]).collect()
    }

    /// `[x, avg]` pairs for plotting the running average.
    pub fn avg_points(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(|s| [s.x, s.avg]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_on_empty_buffer_acts_as_seed() {
        let mut buf = RollingSeriesBuffer::new(4).unwrap();
        let s = buf.append(0.0, 7.5, 4).unwrap();
        assert_eq!(s.avg, 7.5);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn capacity_one_tracks_latest_value() {
        let mut buf = RollingSeriesBuffer::with_seed(1, 0.0, 3.0).unwrap();
        let s = buf.append(1.0, -2.0, 1).unwrap();
        assert_eq!(buf.len(), 1);
        assert!((s.avg + 2.0).abs() < 1e-12);
    }

    #[test]
    fn shrink_evicts_from_front_before_averaging() {
        let mut buf = RollingSeriesBuffer::with_seed(6, 0.0, 1.0).unwrap();
        for (i, y) in [2.0, 3.0, 4.0, 5.0, 6.0].into_iter().enumerate() {
            buf.append((i + 1) as f64, y, 6).unwrap();
        }
        let s = buf.append(6.0, 10.0, 3).unwrap();
        let ys: Vec<f64> = buf.iter().map(|s| s.y).collect();
        assert_eq!(ys, vec![5.0, 6.0, 10.0]);
        assert!((s.avg - 7.0).abs() < 1e-9);
    }

    #[test]
    fn set_capacity_is_lazy() {
        let mut buf = RollingSeriesBuffer::with_seed(10, 0.0, 1.0).unwrap();
        buf.push(1.0, 2.0).unwrap();
        buf.push(2.0, 3.0).unwrap();
        buf.set_capacity(1).unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), 1);
        buf.push(3.0, 4.0).unwrap();
        assert_eq!(buf.len(), 1);
        assert!((buf.running_average().unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            RollingSeriesBuffer::new(0),
            Err(StreamError::InvalidConfiguration(_))
        ));
        let mut buf = RollingSeriesBuffer::new(2).unwrap();
        assert!(matches!(
            buf.append(0.0, 1.0, 0),
            Err(StreamError::InvalidConfiguration(_))
        ));
        assert!(buf.is_empty());
    }
}
