//! Shutdown coordination for the server.

use std::future::Future;
use std::time::Duration;
use tokio::sync::broadcast;

/// Default time in-flight requests get to finish.
pub const DEFAULT_GRACE: Duration = Duration::from_secs(5);

/// How a drained task ended.
#[derive(Debug)]
pub enum DrainOutcome<T> {
    /// The task finished within the grace period.
    Completed(T),
    /// The task panicked or was cancelled.
    Aborted(tokio::task::JoinError),
    /// The grace period elapsed first.
    TimedOut,
}

/// Coordinator for graceful shutdown.
///
/// Long-running tasks subscribe to a broadcast channel; `trigger` notifies
/// all of them, and `drain` bounds how long the caller waits for one.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
    grace: Duration,
}

impl Shutdown {
    /// Create a coordinator with the default grace period.
    pub fn new() -> Self {
        Self::with_grace(DEFAULT_GRACE)
    }

    /// Create a coordinator with a custom grace period.
    pub fn with_grace(grace: Duration) -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx, grace }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Grace period used by [`drain`](Self::drain).
    pub fn grace(&self) -> Duration {
        self.grace
    }

    /// Wait for `task` to finish, giving up after the grace period.
    pub async fn drain<T, F>(&self, task: F) -> DrainOutcome<T>
    where
        F: Future<Output = Result<T, tokio::task::JoinError>>,
    {
        match tokio::time::timeout(self.grace, task).await {
            Ok(Ok(value)) => DrainOutcome::Completed(value),
            Ok(Err(e)) => DrainOutcome::Aborted(e),
            Err(_) => DrainOutcome::TimedOut,
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_subscribers() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.subscribe();

        shutdown.trigger();

        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_drain_completes() {
        let shutdown = Shutdown::with_grace(Duration::from_secs(1));
        let mut rx = shutdown.subscribe();
        let task = tokio::spawn(async move {
            let _ = rx.recv().await;
            7
        });

        shutdown.trigger();
        assert!(matches!(shutdown.drain(task).await, DrainOutcome::Completed(7)));
    }

    #[tokio::test]
    async fn test_drain_times_out() {
        let shutdown = Shutdown::with_grace(Duration::from_millis(50));
        let task = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        assert!(matches!(shutdown.drain(task).await, DrainOutcome::TimedOut));
    }
}
