//! Trailing-edge debouncer.
//!
//! One pending-timer slot, owned by the debouncer itself: re-arming
//! replaces (and cancels) whatever was scheduled before, so cancellation
//! is implicit on every call and no ambient global state is involved.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Debounces a callback behind a trailing wait window.
///
/// Requires a tokio runtime; the timer lives on the runtime's cooperative
/// scheduler, so scheduled closures never overlap each other. The ordering
/// guarantee is "last call within the window wins": the closure captured
/// by the final call is the one that runs, with whatever it captured.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given trailing window.
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// The configured window.
    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Schedule `f` to run once the window elapses, cancelling any
    /// previously scheduled execution.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime context.
    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let wait = self.wait;
        trace!(wait_ms = wait.as_millis() as u64, "debounce window re-armed");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            f();
        }));
    }

    /// Drop the pending execution, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether an execution is currently scheduled.
    ///
    /// Advisory only: the timer may fire between this check and whatever
    /// the caller does next.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> RecordCall) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let fired_for_closure = Arc::clone(&fired);
        let make = move |arg: &str| RecordCall {
            fired: Arc::clone(&fired_for_closure),
            arg: arg.to_string(),
        };
        (fired, make)
    }

    struct RecordCall {
        fired: Arc<Mutex<Vec<String>>>,
        arg: String,
    }

    impl RecordCall {
        fn into_closure(self) -> impl FnOnce() + Send + 'static {
            move || self.fired.lock().unwrap().push(self.arg)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn single_call_fires_after_the_window() {
        let (fired, record) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.call(record("query").into_closure());
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(299)).await;
        assert!(fired.lock().unwrap().is_empty());

        sleep(Duration::from_millis(10)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["query".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn last_call_within_the_window_wins() {
        let (fired, record) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        // Calls at t = 0, 50, 100 ms; only the t = 100 call survives.
        debouncer.call(record("a").into_closure());
        sleep(Duration::from_millis(50)).await;
        debouncer.call(record("b").into_closure());
        sleep(Duration::from_millis(50)).await;
        debouncer.call(record("c").into_closure());

        // Still inside the re-armed window at t = 100 + 299.
        sleep(Duration::from_millis(299)).await;
        assert!(fired.lock().unwrap().is_empty());

        sleep(Duration::from_millis(10)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["c".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn calls_in_separate_windows_each_fire() {
        let (fired, record) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        debouncer.call(record("first").into_closure());
        sleep(Duration::from_millis(150)).await;
        debouncer.call(record("second").into_closure());
        sleep(Duration::from_millis(150)).await;

        assert_eq!(
            *fired.lock().unwrap(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_the_pending_execution() {
        let (fired, record) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        debouncer.call(record("doomed").into_closure());
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        sleep(Duration::from_millis(200)).await;
        assert!(fired.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_the_pending_execution() {
        let (fired, record) = recorder();
        {
            let mut debouncer = Debouncer::new(Duration::from_millis(100));
            debouncer.call(record("doomed").into_closure());
        }

        sleep(Duration::from_millis(200)).await;
        assert!(fired.lock().unwrap().is_empty());
    }
}
