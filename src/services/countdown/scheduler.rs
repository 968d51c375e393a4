//! Repeating-timer seam.
//!
//! One countdown owns one timer thread. Between ticks the thread sleeps
//! on a channel rather than in a plain `sleep`, so cancellation wakes it
//! immediately instead of waiting out the remainder of the period.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Whether the schedule should keep firing after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

/// Handle to a running repeating schedule.
///
/// `cancel` is idempotent: cancelling twice, or after the schedule has
/// already stopped on its own, is a no-op. Dropping the handle leaves the
/// schedule running.
pub struct ScheduleHandle {
    cancel_tx: Sender<()>,
    active: Arc<AtomicBool>,
}

impl ScheduleHandle {
    /// Stop the schedule at its next wakeup.
    pub fn cancel(&self) {
        // Send fails once the timer thread has exited; nothing left to stop.
        let _ = self.cancel_tx.send(());
    }

    /// True while the timer thread is still running.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Run `tick` every `period` until it returns [`TickFlow::Stop`] or the
/// returned handle is cancelled.
///
/// The first call happens one full period after scheduling; callers that
/// want an immediate first tick run it themselves before scheduling.
pub fn schedule_repeating<F>(period: Duration, mut tick: F) -> ScheduleHandle
where
    F: FnMut() -> TickFlow + Send + 'static,
{
    let (cancel_tx, cancel_rx) = mpsc::channel();
    let active = Arc::new(AtomicBool::new(true));

    // The thread holds its own sender so the channel never disconnects
    // when the caller drops the handle.
    let keep_alive = cancel_tx.clone();
    let thread_active = Arc::clone(&active);

    thread::spawn(move || {
        let _keep_alive = keep_alive;
        loop {
            match cancel_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if tick() == TickFlow::Stop {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        thread_active.store(false, Ordering::SeqCst);
    });

    ScheduleHandle { cancel_tx, active }
}
