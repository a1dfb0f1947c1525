//! Configuration for the streaming plot window.

use std::ops::RangeInclusive;

use crate::controllers::StreamController;
use crate::data::signal::{SignalParameters, DEFAULT_X_START, DEFAULT_X_STEP};
use crate::data::trace_look::TraceLook;

// ─────────────────────────────────────────────────────────────────────────────
// Slider ranges
// ─────────────────────────────────────────────────────────────────────────────

/// Ranges and steps of the parameter sliders.
#[derive(Clone, Debug)]
pub struct SliderRanges {
    /// Streaming delay in milliseconds. Default: `10..=100`.
    pub delay_ms: RangeInclusive<u64>,
    /// Slider step for the delay. Default: `10`.
    pub delay_step_ms: u64,
    /// Sine and noise amplitude. Default: `0.1..=2.0`.
    pub amplitude: RangeInclusive<f64>,
    /// Slider step for the amplitudes. Default: `0.1`.
    pub amplitude_step: f64,
    /// Rolling window length in samples. Default: `10..=1000`.
    pub capacity: RangeInclusive<usize>,
}

impl Default for SliderRanges {
    fn default() -> Self {
        Self {
            delay_ms: 10..=100,
            delay_step_ms: 10,
            amplitude: 0.1..=2.0,
            amplitude_step: 0.1,
            capacity: 10..=1000,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StreamPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the streaming plot.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `params`         | Initial signal parameters (amplitudes, window, delay) |
/// | `x_start/x_step` | Seed x and x increment of the generated samples |
/// | `rng_seed`       | Fixed noise seed for reproducible runs |
/// | `sliders`        | Ranges of the parameter sliders |
/// | `controller`     | Programmatic interaction handle |
pub struct StreamPlotConfig {
    // ── Signal ───────────────────────────────────────────────────────────────
    pub params: SignalParameters,
    pub x_start: f64,
    pub x_step: f64,
    /// Noise seed. `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
    /// Start with the stream paused.
    pub start_paused: bool,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional headline rendered inside the UI.
    pub headline: Option<String>,
    /// Optional subheadline below the headline.
    pub subheadline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Appearance ───────────────────────────────────────────────────────────
    pub signal_look: TraceLook,
    pub average_look: TraceLook,
    pub sliders: SliderRanges,

    // ── Programmatic controller ──────────────────────────────────────────────
    pub controller: Option<StreamController>,
}

impl Default for StreamPlotConfig {
    fn default() -> Self {
        Self {
            params: SignalParameters::default(),
            x_start: DEFAULT_X_START,
            x_step: DEFAULT_X_STEP,
            rng_seed: None,
            start_paused: false,

            title: "StreamPlot".to_string(),
            headline: None,
            subheadline: None,
            native_options: None,

            signal_look: TraceLook::signal(),
            average_look: TraceLook::average(),
            sliders: SliderRanges::default(),

            controller: None,
        }
    }
}

impl StreamPlotConfig {
    /// Apply a saved state on top of this configuration.
    pub fn apply_state(&mut self, state: crate::persistence::StreamStateSerde) {
        self.start_paused = state.paused;
        self.params = state.params;
        self.signal_look = state.signal_look.into_look();
        self.average_look = state.average_look.into_look();
    }
}
