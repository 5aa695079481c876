//! The periodic expiry sweep, as an explicit task with a shutdown handle.

use std::time::Duration;

use stoa_core::store::SessionStore as _;
use tokio::{sync::oneshot, task::JoinHandle, time};

use crate::MemoryStore;

/// Handle to the background sweep task. Dropping it without calling
/// [`shutdown`](Sweeper::shutdown) detaches the task; it keeps sweeping
/// until the runtime stops.
pub struct Sweeper {
  task:     JoinHandle<()>,
  shutdown: oneshot::Sender<()>,
}

impl Sweeper {
  /// Spawn a task that sweeps `store` every `every`. The first sweep runs
  /// one full interval after spawn, not immediately.
  pub fn spawn(store: MemoryStore, every: Duration) -> Self {
    let (shutdown, mut stop) = oneshot::channel();
    let task = tokio::spawn(async move {
      let mut tick = time::interval(every);
      // interval fires immediately on the first tick; swallow it.
      tick.tick().await;
      loop {
        tokio::select! {
          _ = &mut stop => break,
          _ = tick.tick() => {
            let removed = store.sweep().await;
            if removed > 0 {
              tracing::info!(removed, "swept expired sessions");
            }
          }
        }
      }
      tracing::debug!("session sweeper stopped");
    });
    Self { task, shutdown }
  }

  /// Stop the sweep loop and wait for the task to finish.
  pub async fn shutdown(self) {
    let _ = self.shutdown.send(());
    let _ = self.task.await;
  }
}
