//! Background ticker.
//!
//! Bumps the runtime counter and stamps `last_activity` once per period for
//! the life of the process. The first tick fires immediately. Shutdown is
//! observed between ticks.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use pulseboard_core::RuntimeState;

pub struct Ticker {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the ticker on the current tokio runtime.
    pub fn start(state: Arc<RuntimeState>, period: Duration) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut tick = tokio::time::interval(period);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    changed = shutdown_rx.changed() => {
                        // Sender dropped counts as shutdown too.
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = tick.tick() => {
                        let counter = state.tick();
                        tracing::info!(counter, "background tick");
                    }
                }
            }

            tracing::debug!(counter = state.counter(), "ticker stopped");
        });

        Self { shutdown_tx, task }
    }

    /// False once the task has exited.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Signal the task and wait for it to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "ticker task ended abnormally");
        }
    }
}
