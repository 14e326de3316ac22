use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant};

/// Input side of a debounced value signal.
///
/// Values pushed through [`Debouncer::update`] appear on the receiver only
/// after the input has been quiet for the configured period. Each update
/// restarts the timer and supersedes the pending value: last value wins,
/// intermediate values are never queued. Dropping the `Debouncer` tears the
/// signal down; a value still waiting on its quiet period is discarded.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Must be called from within a tokio runtime; the timer task is spawned
    /// immediately.
    pub fn new(quiet: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (in_tx, mut in_rx) = mpsc::unbounded_channel::<T>();
        let (out_tx, out_rx) = mpsc::unbounded_channel::<T>();

        tokio::spawn(async move {
            let mut pending: Option<T> = None;
            let mut deadline = Instant::now();
            loop {
                tokio::select! {
                    // Input wins ties against the timer: a value arriving (or
                    // teardown happening) at the exact deadline supersedes the
                    // pending emission.
                    biased;

                    received = in_rx.recv() => match received {
                        Some(value) => {
                            pending = Some(value);
                            deadline = Instant::now() + quiet;
                        }
                        // Input handle dropped: discard the pending value.
                        None => break,
                    },
                    _ = time::sleep_until(deadline), if pending.is_some() => {
                        if let Some(value) = pending.take() {
                            if out_tx.send(value).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        (Self { tx: in_tx }, out_rx)
    }

    /// Push the latest raw value. Never blocks.
    pub fn update(&self, value: T) {
        // The timer task only exits once this sender is dropped.
        let _ = self.tx.send(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    async fn settle() {
        // Let the timer task observe pushed values before the clock moves.
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn emits_only_the_last_value_after_the_quiet_period() {
        let (debouncer, mut emitted) = Debouncer::new(Duration::from_millis(500));
        let start = Instant::now();

        debouncer.update("a");
        settle().await;
        time::advance(Duration::from_millis(100)).await;

        debouncer.update("b");
        settle().await;
        time::advance(Duration::from_millis(50)).await;

        debouncer.update("c");
        settle().await;

        let value = emitted.recv().await.unwrap();
        assert_eq!(value, "c");
        // c arrived at t=150ms and the quiet period is 500ms.
        assert_eq!(start.elapsed(), Duration::from_millis(650));

        // Nothing else was ever emitted for "a" or "b".
        assert!(matches!(emitted.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn each_update_restarts_the_timer() {
        let (debouncer, mut emitted) = Debouncer::new(Duration::from_millis(500));

        debouncer.update(1);
        settle().await;
        time::advance(Duration::from_millis(400)).await;

        debouncer.update(2);
        settle().await;
        // t=800ms: the first value's deadline has long passed, but it was
        // superseded before firing.
        time::advance(Duration::from_millis(400)).await;
        settle().await;
        assert!(matches!(emitted.try_recv(), Err(TryRecvError::Empty)));

        time::advance(Duration::from_millis(100)).await;
        settle().await;
        assert_eq!(emitted.try_recv().unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_input_emits_nothing() {
        let (_debouncer, mut emitted) = Debouncer::<&str>::new(Duration::from_millis(500));
        time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert!(matches!(emitted.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_the_pending_emission() {
        let (debouncer, mut emitted) = Debouncer::new(Duration::from_millis(500));
        debouncer.update("pending");
        settle().await;

        drop(debouncer);
        time::advance(Duration::from_secs(1)).await;

        // Channel closes without the pending value ever arriving.
        assert_eq!(emitted.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_quiet_periods_emit_consecutively() {
        let (debouncer, mut emitted) = Debouncer::new(Duration::from_millis(500));

        debouncer.update("first");
        settle().await;
        assert_eq!(emitted.recv().await.unwrap(), "first");

        debouncer.update("second");
        settle().await;
        assert_eq!(emitted.recv().await.unwrap(), "second");
    }
}
