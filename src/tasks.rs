// Simulated background work.
// Fixed-delay tokio tasks that report completion to the event loop and can be cancelled.

use std::future;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

/// What a finished task asks the event loop to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Add one unit from a listing or the stash.
    ListingAdd { product_id: String },
    /// Add `quantity` units from the product detail view.
    DetailAdd { product_id: String, quantity: u32 },
    /// Payment processing finished.
    Payment,
}

pub type TaskSender = mpsc::UnboundedSender<TaskKind>;
pub type TaskReceiver = mpsc::UnboundedReceiver<TaskKind>;

pub fn channel() -> (TaskSender, TaskReceiver) {
    mpsc::unbounded_channel()
}

/// Handle to a pending task. Dropping it detaches the task.
#[derive(Debug)]
pub struct TaskHandle {
    kind: TaskKind,
    cancel: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl TaskHandle {
    #[cfg(test)]
    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Stop the task. A cancelled task never reports completion.
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the task to complete or observe its cancellation.
    #[cfg(test)]
    pub async fn wait(self) {
        let _ = self.join.await;
    }
}

/// Spawn a task that reports `kind` on `tx` after `delay`, unless cancelled first.
/// Must be called from within a tokio runtime.
pub fn spawn(kind: TaskKind, delay: Duration, tx: TaskSender) -> TaskHandle {
    let (cancel, mut cancel_rx) = watch::channel(false);
    let event = kind.clone();

    let join = tokio::spawn(async move {
        let cancelled = async {
            // A dropped handle detaches rather than cancels
            let detached = cancel_rx.wait_for(|c| *c).await.is_err();
            if detached {
                future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                debug!(?event, "task finished");
                let _ = tx.send(event);
            }
            _ = cancelled => {
                debug!(?event, "task cancelled");
            }
        }
    });

    TaskHandle { kind, cancel, join }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivers_exactly_one_completion() {
        let (tx, mut rx) = channel();
        let handle = spawn(
            TaskKind::DetailAdd {
                product_id: "7".to_string(),
                quantity: 3,
            },
            Duration::from_millis(10),
            tx,
        );

        handle.wait().await;
        assert_eq!(
            rx.recv().await,
            Some(TaskKind::DetailAdd {
                product_id: "7".to_string(),
                quantity: 3,
            })
        );
        // The sender moved into the task is gone, so the channel is closed
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_cancelled_task_delivers_nothing() {
        let (tx, mut rx) = channel();
        let handle = spawn(TaskKind::Payment, Duration::from_secs(30), tx);
        assert_eq!(handle.kind(), &TaskKind::Payment);

        handle.cancel();
        handle.wait().await;
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_dropped_handle_still_completes() {
        let (tx, mut rx) = channel();
        drop(spawn(
            TaskKind::ListingAdd {
                product_id: "1".to_string(),
            },
            Duration::from_millis(10),
            tx,
        ));

        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap();
        assert_eq!(
            event,
            Some(TaskKind::ListingAdd {
                product_id: "1".to_string(),
            })
        );
    }
}
