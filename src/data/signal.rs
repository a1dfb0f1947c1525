//! Noisy sine signal generator and the parameters the user can tweak live.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StreamError};

/// Default x distance between two consecutive samples.
pub const DEFAULT_X_STEP: f64 = 0.1;
/// Default x of the seed sample.
pub const DEFAULT_X_START: f64 = 1.0;

/// Which components make up the generated signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignalProfile {
    /// `amp_sine * sin(x) + amp_rand * noise`
    #[default]
    SineWithNoise,
    /// `amp_rand * noise`
    NoiseOnly,
}

impl SignalProfile {
    pub fn label(&self) -> &'static str {
        match self {
            SignalProfile::SineWithNoise => "Sine + noise",
            SignalProfile::NoiseOnly => "Noise only",
        }
    }

    pub fn has_sine(&self) -> bool {
        matches!(self, SignalProfile::SineWithNoise)
    }
}

/// Live-tunable parameters read by the generator and the update loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalParameters {
    pub profile: SignalProfile,
    /// Amplitude of the deterministic sine component.
    pub amp_sine: f64,
    /// Amplitude of the uniform noise component.
    pub amp_rand: f64,
    /// Rolling window length in samples.
    pub capacity: usize,
    /// Period between two generated samples, in milliseconds.
    pub update_delay_ms: u64,
}

impl Default for SignalParameters {
    fn default() -> Self {
        Self {
            profile: SignalProfile::SineWithNoise,
            amp_sine: 1.0,
            amp_rand: 1.0,
            capacity: 100,
            update_delay_ms: 100,
        }
    }
}

impl SignalParameters {
    /// Defaults with the sine component switched off.
    pub fn noise_only() -> Self {
        Self {
            profile: SignalProfile::NoiseOnly,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(StreamError::InvalidConfiguration(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.update_delay_ms == 0 {
            return Err(StreamError::InvalidConfiguration(
                "update delay must be positive".to_string(),
            ));
        }
        for (name, amp) in [("sine", self.amp_sine), ("noise", self.amp_rand)] {
            if !amp.is_finite() || amp < 0.0 {
                return Err(StreamError::InvalidConfiguration(format!(
                    "{name} amplitude must be a finite, non-negative number (got {amp})"
                )));
            }
        }
        Ok(())
    }

    pub fn update_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.update_delay_ms)
    }
}

/// Signal value at `x` for a noise draw in `[0, 1)`.
pub fn signal_value(x: f64, params: &SignalParameters, draw: f64) -> f64 {
    let sine = if params.profile.has_sine() {
        params.amp_sine * x.sin()
    } else {
        0.0
    };
    sine + params.amp_rand * draw
}

/// Produces the next `(x, y)` pair from the previous x and current parameters.
pub struct SignalGenerator<R: Rng = StdRng> {
    x_start: f64,
    x_step: f64,
    rng: R,
}

impl SignalGenerator<StdRng> {
    /// Generator with entropy-seeded noise.
    pub fn new(x_start: f64, x_step: f64) -> Result<Self> {
        Self::with_rng(x_start, x_step, StdRng::from_entropy())
    }

    /// Generator with reproducible noise.
    pub fn from_seed(x_start: f64, x_step: f64, seed: u64) -> Result<Self> {
        Self::with_rng(x_start, x_step, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SignalGenerator<R> {
    pub fn with_rng(x_start: f64, x_step: f64, rng: R) -> Result<Self> {
        if !x_step.is_finite() || x_step <= 0.0 {
            return Err(StreamError::InvalidConfiguration(format!(
                "x step must be a positive finite number (got {x_step})"
            )));
        }
        if !x_start.is_finite() {
            return Err(StreamError::InvalidConfiguration(format!(
                "x start must be finite (got {x_start})"
            )));
        }
        Ok(Self { x_start, x_step, rng })
    }

    pub fn x_step(&self) -> f64 {
        self.x_step
    }

    /// First point of a stream: the noise-free signal at the start x.
    pub fn seed_point(&self, params: &SignalParameters) -> (f64, f64) {
        (self.x_start, signal_value(self.x_start, params, 0.0))
    }

    /// Next point after `last_x`.
    pub fn next(&mut self, last_x: f64, params: &SignalParameters) -> (f64, f64) {
        let x = last_x + self.x_step;
        let draw: f64 = self.rng.gen();
        (x, signal_value(x, params, draw))
    }
}
