//! Native window for the streaming plot.
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`stream_app`]   | [`StreamPlotApp`] (eframe) state and per-frame update |
//! | [`controls`]     | Parameter sliders, pause/resume and file actions |
//! | [`plot`]         | Drawing the signal and its running average |
//! | [`run`]          | Top-level [`run_streamplot()`] entry point and icon loading |

mod controls;
mod plot;
mod run;
mod stream_app;

pub use run::run_streamplot;
pub use stream_app::StreamPlotApp;
