//! One streaming session: buffer, generator, parameters and timer together.

use std::time::Instant;

use rand::Rng;
use rand::rngs::StdRng;

use crate::data::scheduler::{RunState, StreamTimer};
use crate::data::series::{RollingSeriesBuffer, Sample};
use crate::data::signal::{SignalGenerator, SignalParameters};
use crate::error::Result;

pub struct StreamSession<R: Rng = StdRng> {
    buffer: RollingSeriesBuffer,
    generator: SignalGenerator<R>,
    params: SignalParameters,
    timer: StreamTimer,
}

impl<R: Rng> StreamSession<R> {
    /// Validate `params` and seed the buffer with the generator's first point.
    pub fn new(
        params: SignalParameters,
        generator: SignalGenerator<R>,
        state: RunState,
        now: Instant,
    ) -> Result<Self> {
        params.validate()?;
        let (x0, y0) = generator.seed_point(&params);
        let buffer = RollingSeriesBuffer::with_seed(params.capacity, x0, y0)?;
        let timer = StreamTimer::new(params.update_delay(), state, now)?;
        Ok(Self {
            buffer,
            generator,
            params,
            timer,
        })
    }

    /// Generate and append one sample with the current parameters.
    pub fn step(&mut self) -> Result<Sample> {
        let last_x = self.buffer.last()?.x;
        let (x, y) = self.generator.next(last_x, &self.params);
        self.buffer.append(x, y, self.params.capacity)
    }

    /// Append every sample that fell due at `now`, returning them in order.
    pub fn tick(&mut self, now: Instant) -> Result<Vec<Sample>> {
        let due = self.timer.poll(now);
        let mut appended = Vec::with_capacity(due as usize);
        for _ in 0..due {
            appended.push(self.step()?);
        }
        Ok(appended)
    }

    /// Replace the parameters. They apply from the next sample on; a changed
    /// delay restarts the timer schedule.
    pub fn set_params(&mut self, params: SignalParameters, now: Instant) -> Result<()> {
        params.validate()?;
        if params == self.params {
            return Ok(());
        }
        if params.update_delay_ms != self.params.update_delay_ms {
            self.timer.set_period(params.update_delay(), now)?;
        }
        if params.capacity != self.params.capacity {
            self.buffer.set_capacity(params.capacity)?;
        }
        tracing::debug!(
            profile = ?params.profile,
            amp_sine = params.amp_sine,
            amp_rand = params.amp_rand,
            capacity = params.capacity,
            update_delay_ms = params.update_delay_ms,
            "signal parameters changed"
        );
        self.params = params;
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.timer.state().is_running() {
            tracing::info!("streaming paused");
        }
        self.timer.pause();
    }

    pub fn resume(&mut self, now: Instant) {
        if !self.timer.state().is_running() {
            tracing::info!("streaming resumed");
        }
        self.timer.resume(now);
    }

    pub fn toggle_pause(&mut self, now: Instant) -> RunState {
        match self.timer.state() {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(now),
        }
        self.timer.state()
    }

    pub fn run_state(&self) -> RunState {
        self.timer.state()
    }

    pub fn params(&self) -> &SignalParameters {
        &self.params
    }

    pub fn buffer(&self) -> &RollingSeriesBuffer {
        &self.buffer
    }

    pub fn timer(&self) -> &StreamTimer {
        &self.timer
    }
}
