//! Repeating countdown task with a scoped lifetime
//!
//! The handle owns the task: stopping or dropping it cancels the task, after
//! which the tick callback is never invoked again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Default period between ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a running countdown task.
pub struct CountdownHandle {
    generation: u64,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Spawn a countdown that calls `on_tick(generation)` every `period`,
    /// starting one period from now.
    ///
    /// The task ends on its own when `on_tick` returns `false` (typically the
    /// receiving side hung up). Must be called inside a tokio runtime.
    pub fn spawn<F>(period: Duration, generation: u64, on_tick: F) -> Self
    where
        F: Fn(u64) -> bool + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if !on_tick(generation) {
                            tracing::debug!(generation, "Countdown receiver closed");
                            break;
                        }
                    }
                }
            }
            tracing::debug!(generation, "Countdown task exited");
        });

        tracing::debug!(generation, period_ms = period.as_millis() as u64, "Countdown started");
        Self {
            generation,
            cancel,
            task,
        }
    }

    /// Identifies which run of the countdown produced a tick
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled() && !self.task.is_finished()
    }

    /// Cancel the countdown. Equivalent to dropping the handle.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        if !self.cancel.is_cancelled() {
            self.cancel.cancel();
            tracing::debug!(generation = self.generation, "Countdown stopped");
        }
    }
}
