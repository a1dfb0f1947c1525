//! StreamPlot crate root: re-exports and module wiring.
//!
//! Streams a noisy sine wave into a live egui plot together with its
//! running average over a bounded rolling window.
//!
//! - `data::series`: the bounded buffer with the O(1) running-average update
//! - `data::signal`: signal parameters and the noisy sine generator
//! - `data::scheduler`: explicit running/paused timer driven by the UI loop
//! - `data::session`: buffer + generator + parameters + timer
//! - `config`, `persistence`, `controllers`: configuration, JSON state, programmatic control
//! - `app`: the eframe window

pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_streamplot, StreamPlotApp};
pub use config::{SliderRanges, StreamPlotConfig};
pub use controllers::{StreamController, StreamState};
pub use data::scheduler::{RunState, StreamTimer};
pub use data::series::{RollingSeriesBuffer, Sample};
pub use data::session::StreamSession;
pub use data::signal::{signal_value, SignalGenerator, SignalParameters, SignalProfile};
pub use error::{Result, StreamError};
