//! Countdown engine
//!
//! Drives one phase at a time against an absolute deadline. Each tick
//! recomputes the remaining time from the clock, so sleeps that overshoot
//! never accumulate into drift. A pause pushes the deadline forward by
//! exactly the time spent paused.

use pmon_core::format;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{info, trace};

use crate::error::Result;
use crate::pause::PauseFlag;
use crate::render::{Progress, Render};
use crate::settings::TimerConfig;
use crate::state::RunState;
use crate::summary::Summary;

/// Interval between progress updates and pause polls
pub const TICK: Duration = Duration::from_secs(1);

pub struct Engine<R: Render> {
    config: TimerConfig,
    pause: PauseFlag,
    renderer: R,
    tick: Duration,
}

impl<R: Render> Engine<R> {
    pub fn new(config: TimerConfig, pause: PauseFlag, renderer: R) -> Self {
        Self {
            config,
            pause,
            renderer,
            tick: TICK,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run phases back to back, forever.
    ///
    /// Only returns on a rendering failure; stop it by dropping the future.
    pub async fn run(&mut self, state: &mut RunState) -> Result<()> {
        loop {
            self.run_phase(state).await?;
            state.advance(self.config.cycles_per_long_break());
        }
    }

    /// Count down `state.phase` to completion, then credit it to the totals
    pub async fn run_phase(&mut self, state: &mut RunState) -> Result<()> {
        let phase = state.phase;
        let duration = self.config.duration_for(phase);
        let mut deadline = Instant::now() + Duration::from_secs(duration);

        state.begin_phase();
        info!(
            phase = %phase,
            cycle = state.cycle_count,
            duration = %format::duration(duration),
            "Phase started"
        );

        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }

            let remaining = ceil_secs(deadline - now).min(duration);
            state.record_elapsed(duration - remaining);
            trace!(phase = %phase, remaining, "Tick");
            self.renderer
                .render(&Progress::new(phase, remaining, duration, false))?;

            sleep(self.tick).await;

            if self.pause.is_paused() {
                let paused_at = Instant::now();
                let remaining = ceil_secs(deadline.saturating_duration_since(paused_at)).min(duration);
                info!(phase = %phase, remaining, "Paused");
                self.renderer
                    .render(&Progress::new(phase, remaining, duration, true))?;

                while self.pause.is_paused() {
                    sleep(self.tick).await;
                }

                let paused_for = paused_at.elapsed();
                deadline += paused_for;
                info!(phase = %phase, paused_secs = paused_for.as_secs(), "Resumed");
            }
        }

        state.record_elapsed(duration);
        state.complete_phase(duration);
        info!(phase = %phase, "Phase complete");

        Ok(())
    }

    /// Hand the exit summary to the renderer and release it
    pub fn finish(&mut self, summary: &Summary) -> Result<()> {
        self.renderer.finish(summary)?;
        Ok(())
    }

    #[cfg(test)]
    fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
}

/// Whole seconds in `d`, rounding any fraction up
fn ceil_secs(d: Duration) -> u64 {
    d.as_secs() + u64::from(d.subsec_nanos() > 0)
}
