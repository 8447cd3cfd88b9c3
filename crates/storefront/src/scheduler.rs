//! Cancellable visual-feedback timers.
//!
//! After some actions the UI shows a transient state ("Added!", a pulsing
//! heart) for a fixed time. Each timer is a tokio task owned by a
//! [`ScheduledFeedback`] handle; dropping the handle aborts the task, so a
//! torn-down session never runs a stale callback.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

/// Handle to a pending feedback callback. Aborts the callback on drop.
#[derive(Debug)]
#[must_use = "dropping the handle cancels the callback"]
pub struct ScheduledFeedback {
    task: JoinHandle<()>,
}

impl ScheduledFeedback {
    /// Cancel the callback if it has not run yet.
    pub fn cancel(self) {
        drop(self);
    }

    /// Returns `true` once the callback has run or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ScheduledFeedback {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns delayed callbacks on a tokio runtime.
#[derive(Debug, Clone)]
pub struct FeedbackScheduler {
    runtime: Handle,
}

impl FeedbackScheduler {
    /// Create a scheduler on an explicit runtime.
    #[must_use]
    pub const fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Create a scheduler on the current runtime, if called inside one.
    #[must_use]
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    /// Run `callback` after `delay` unless the returned handle is dropped first.
    pub fn schedule<F>(&self, delay: Duration, callback: F) -> ScheduledFeedback
    where
        F: FnOnce() + Send + 'static,
    {
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            trace!(?delay, "Feedback callback fired");
            callback();
        });
        ScheduledFeedback { task }
    }
}

/// A shared on/off flag the rendering layer polls to draw a transient state.
#[derive(Debug, Clone, Default)]
pub struct Indicator {
    on: Arc<AtomicBool>,
}

impl Indicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the feedback state should be shown.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::Acquire)
    }

    /// Switch the indicator off immediately.
    pub fn reset(&self) {
        self.on.store(false, Ordering::Release);
    }

    /// Switch the indicator on, and off again after `duration`.
    ///
    /// Without a scheduler the indicator stays on until [`Indicator::reset`].
    pub fn show_for(
        &self,
        scheduler: Option<&FeedbackScheduler>,
        duration: Duration,
    ) -> Option<ScheduledFeedback> {
        self.on.store(true, Ordering::Release);
        let flag = Arc::clone(&self.on);
        scheduler.map(|s| s.schedule(duration, move || flag.store(false, Ordering::Release)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_callback_runs_after_delay() {
        let scheduler = FeedbackScheduler::current().expect("inside runtime");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let handle = scheduler.schedule(Duration::from_millis(1500), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_discards_callback() {
        let scheduler = FeedbackScheduler::current().expect("inside runtime");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let handle = scheduler.schedule(Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        handle.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_indicator_turns_off_after_duration() {
        let scheduler = FeedbackScheduler::current();
        let indicator = Indicator::new();

        let _pending = indicator.show_for(scheduler.as_ref(), Duration::from_millis(2000));
        assert!(indicator.is_on());

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert!(!indicator.is_on());
    }

    #[test]
    fn test_indicator_without_scheduler_stays_on() {
        assert!(FeedbackScheduler::current().is_none());

        let indicator = Indicator::new();
        assert!(indicator.show_for(None, Duration::from_millis(10)).is_none());
        assert!(indicator.is_on());
        indicator.reset();
        assert!(!indicator.is_on());
    }
}
