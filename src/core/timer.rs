//! One-shot timer scheduling.
//!
//! A [`Scheduler`] runs a callback once after a delay. The returned handle owns
//! the pending callback: dropping it cancels the timer, so whoever holds the
//! handle decides how long the timer may live.

/// Schedules one-shot callbacks on the current thread.
pub trait Scheduler {
    /// Cancels the callback when dropped.
    type Handle;

    fn schedule_once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}
