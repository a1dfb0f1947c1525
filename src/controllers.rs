//! Controller for interacting with the stream from external code.
//!
//! The controller exposes lightweight state and a subscription mechanism so
//! non-UI code can observe appended samples and push simple requests (pause,
//! resume, new parameters). Requests are applied by the UI once per frame, so
//! every mutation of the stream still happens on the UI thread.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::data::scheduler::RunState;
use crate::data::series::Sample;
use crate::data::signal::SignalParameters;

/// Snapshot of the stream published after every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamState {
    pub run_state: RunState,
    pub params: SignalParameters,
    /// Number of samples currently in the window.
    pub len: usize,
    pub last: Option<Sample>,
}

/// Controller to pause/resume the stream, change parameters and subscribe to samples.
#[derive(Clone, Default)]
pub struct StreamController {
    pub(crate) inner: Arc<Mutex<StreamCtrlInner>>, // crate-visible for UI
}

#[derive(Default)]
pub(crate) struct StreamCtrlInner {
    pub(crate) request_pause: Option<bool>,
    pub(crate) request_params: Option<SignalParameters>,
    pub(crate) last_state: Option<StreamState>,
    pub(crate) listeners: Vec<Sender<Sample>>,
}

impl StreamController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, StreamCtrlInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Request the stream to pause.
    pub fn pause(&self) {
        self.lock().request_pause = Some(true);
    }

    /// Request the stream to resume.
    pub fn resume(&self) {
        self.lock().request_pause = Some(false);
    }

    /// Request new signal parameters. Invalid parameters are rejected by the
    /// UI when applied and logged.
    pub fn set_params(&self, params: SignalParameters) {
        self.lock().request_params = Some(params);
    }

    /// Last state published by the UI (if it has rendered a frame yet).
    pub fn last_state(&self) -> Option<StreamState> {
        self.lock().last_state.clone()
    }

    /// Subscribe to appended samples. Every sample appended after this call is sent.
    pub fn subscribe(&self) -> Receiver<Sample> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().listeners.push(tx);
        rx
    }

    /// Take pending requests (pause flag, parameters).
    pub(crate) fn take_requests(&self) -> (Option<bool>, Option<SignalParameters>) {
        let mut inner = self.lock();
        (inner.request_pause.take(), inner.request_params.take())
    }

    /// Send samples to listeners, dropping the ones whose receiver is gone,
    /// and record the state snapshot.
    pub(crate) fn publish(&self, samples: &[Sample], state: StreamState) {
        let mut inner = self.lock();
        if !samples.is_empty() {
            inner
                .listeners
                .retain(|tx| samples.iter().all(|s| tx.send(*s).is_ok()));
        }
        inner.last_state = Some(state);
    }
}
