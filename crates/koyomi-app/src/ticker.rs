//! Cancellable periodic "now" tick.
//!
//! The surface samples the clock on a fixed cadence to move the live time
//! indicator and to re-check whether the anchor day is still today. The
//! subscription is a scoped resource: it stops on [`NowTicker::stop`] or
//! when the handle is dropped, and one callback runs at a time.

use std::time::Duration;

use chrono::NaiveDateTime;
use koyomi_core::clock::Clock;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct NowTicker {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl NowTicker {
    /// Spawns the tick task, invoking `on_tick` with a fresh clock sample
    /// every `interval_ms`.
    #[must_use]
    pub fn spawn<C, F>(clock: C, interval_ms: u64, mut on_tick: F) -> Self
    where
        C: Clock + 'static,
        F: FnMut(NaiveDateTime) + Send + 'static,
    {
        let (shutdown, mut stopped) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
            // The first tick of a tokio interval fires immediately.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = interval.tick() => on_tick(clock.now()),
                    changed = stopped.changed() => {
                        if changed.is_err() || *stopped.borrow() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("now ticker stopped");
        });

        Self { shutdown, handle }
    }

    /// Signals the tick task to wind down.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }
}

impl Drop for NowTicker {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
        self.handle.abort();
    }
}
