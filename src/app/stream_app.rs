//! Standalone application wrapper.
//!
//! [`StreamPlotApp`] owns one [`StreamSession`] and implements [`eframe::App`].
//! Each frame it applies controller requests, appends the samples that fell
//! due since the previous frame, renders, and schedules the next repaint for
//! the next due tick.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::{SliderRanges, StreamPlotConfig};
use crate::controllers::{StreamController, StreamState};
use crate::data::scheduler::RunState;
use crate::data::series::Sample;
use crate::data::session::StreamSession;
use crate::data::signal::{SignalGenerator, SignalParameters};
use crate::data::trace_look::TraceLook;
use crate::error::Result;
use crate::persistence::{StreamStateSerde, TraceLookSerde};

/// Repaint interval while paused, so controller requests are still picked up.
const IDLE_REPAINT: Duration = Duration::from_millis(100);

pub struct StreamPlotApp {
    pub session: StreamSession,
    pub signal_look: TraceLook,
    pub average_look: TraceLook,
    pub sliders: SliderRanges,
    pub controller: Option<StreamController>,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    /// Slider-bound copy of the parameters; pushed into the session on change.
    pub(crate) draft: SignalParameters,
    /// Last status or error line shown under the controls.
    pub(crate) status: Option<String>,
}

impl StreamPlotApp {
    /// Build the app from a configuration. Fails on invalid parameters.
    pub fn new(cfg: StreamPlotConfig, now: Instant) -> Result<Self> {
        let generator = match cfg.rng_seed {
            Some(seed) => SignalGenerator::from_seed(cfg.x_start, cfg.x_step, seed)?,
            None => SignalGenerator::new(cfg.x_start, cfg.x_step)?,
        };
        let state = if cfg.start_paused {
            RunState::Paused
        } else {
            RunState::Running
        };
        let session = StreamSession::new(cfg.params.clone(), generator, state, now)?;
        tracing::info!(
            profile = ?cfg.params.profile,
            capacity = cfg.params.capacity,
            update_delay_ms = cfg.params.update_delay_ms,
            "stream session created"
        );
        Ok(Self {
            draft: cfg.params,
            session,
            signal_look: cfg.signal_look,
            average_look: cfg.average_look,
            sliders: cfg.sliders,
            controller: cfg.controller,
            headline: cfg.headline,
            subheadline: cfg.subheadline,
            status: None,
        })
    }

    /// Push a new parameter set into the session, reverting the sliders on error.
    pub(crate) fn apply_params(&mut self, params: SignalParameters, now: Instant) {
        match self.session.set_params(params, now) {
            Ok(()) => self.draft = self.session.params().clone(),
            Err(e) => {
                tracing::warn!("rejected signal parameters: {e}");
                self.status = Some(format!("Rejected parameters: {e}"));
                self.draft = self.session.params().clone();
            }
        }
    }

    pub(crate) fn toggle_pause(&mut self, now: Instant) -> RunState {
        self.session.toggle_pause(now)
    }

    /// Current settings as a serializable state.
    pub fn capture_state(&self) -> StreamStateSerde {
        StreamStateSerde {
            params: self.session.params().clone(),
            paused: !self.session.run_state().is_running(),
            signal_look: TraceLookSerde::from(&self.signal_look),
            average_look: TraceLookSerde::from(&self.average_look),
        }
    }

    /// Apply a loaded state. History is kept; the parameters apply from the next sample.
    pub fn restore_state(&mut self, state: StreamStateSerde, now: Instant) {
        self.apply_params(state.params, now);
        if state.paused {
            self.session.pause();
        } else {
            self.session.resume(now);
        }
        self.signal_look = state.signal_look.into_look();
        self.average_look = state.average_look.into_look();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Per-frame processing
    // ─────────────────────────────────────────────────────────────────────────

    fn apply_controller_requests(&mut self, now: Instant) {
        let Some(ctrl) = &self.controller else {
            return;
        };
        let (pause, params) = ctrl.take_requests();
        if let Some(params) = params {
            self.apply_params(params, now);
        }
        match pause {
            Some(true) => self.session.pause(),
            Some(false) => self.session.resume(now),
            None => {}
        }
    }

    /// Append every due sample. Errors are logged and stop this frame's batch.
    pub(crate) fn ingest(&mut self, now: Instant) -> Vec<Sample> {
        match self.session.tick(now) {
            Ok(samples) => samples,
            Err(e) => {
                tracing::error!("failed to append sample: {e}");
                self.status = Some(format!("Streaming error: {e}"));
                self.session.pause();
                Vec::new()
            }
        }
    }

    fn publish(&self, samples: &[Sample]) {
        if let Some(ctrl) = &self.controller {
            let buffer = self.session.buffer();
            ctrl.publish(
                samples,
                StreamState {
                    run_state: self.session.run_state(),
                    params: self.session.params().clone(),
                    len: buffer.len(),
                    last: buffer.last().ok().copied(),
                },
            );
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for StreamPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.apply_controller_requests(now);

        if ctx.input(|i| i.key_pressed(egui::Key::Space)) && !ctx.wants_keyboard_input() {
            self.toggle_pause(now);
        }

        let appended = self.ingest(now);

        if self.headline.is_some() || self.subheadline.is_some() {
            egui::TopBottomPanel::top("streamplot_headline").show(ctx, |ui| {
                if let Some(h) = &self.headline {
                    ui.heading(h);
                }
                if let Some(sub) = &self.subheadline {
                    ui.label(sub);
                }
            });
        }

        egui::TopBottomPanel::top("streamplot_controls").show(ctx, |ui| {
            self.render_controls(ui, now);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_plot(ui);
        });

        self.publish(&appended);

        let wait = self
            .session
            .timer()
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_REPAINT);
        ctx.request_repaint_after(wait);
    }
}
