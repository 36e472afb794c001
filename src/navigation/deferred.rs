//! Deferred, cancellable route changes.
//!
//! Selecting a destination from the mobile menu closes the menu immediately
//! and commits the route change only after the close animation has had time
//! to finish.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::debug;

/// Delay between closing the menu and committing the route change.
pub const NAVIGATION_DELAY: Duration = Duration::from_millis(300);

const PENDING: u8 = 0;
const COMMITTED: u8 = 1;
const CANCELLED: u8 = 2;

/// Routing capability provided by the host.
pub trait Router: Send + Sync {
    /// Fire-and-forget route change.
    fn navigate(&self, path: &str);

    /// Path of the route currently displayed.
    fn current_path(&self) -> String;
}

/// Handle to a scheduled route change.
///
/// Clones share state: cancelling any clone cancels the navigation. A
/// navigation ends up either committed or cancelled, never both.
#[derive(Debug, Clone)]
pub struct PendingNavigation {
    path: String,
    state: Arc<AtomicU8>,
    abort: AbortHandle,
}

impl PendingNavigation {
    /// Schedule `router.navigate(path)` after `delay` on `runtime`.
    pub fn schedule(
        runtime: &Handle,
        router: Arc<dyn Router>,
        path: &str,
        delay: Duration,
    ) -> Self {
        let state = Arc::new(AtomicU8::new(PENDING));
        let target = path.to_string();

        let task_state = Arc::clone(&state);
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if task_state
                .compare_exchange(PENDING, COMMITTED, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                return;
            }
            debug!("Committing deferred navigation to {}", target);
            router.navigate(&target);
        });

        Self {
            path: path.to_string(),
            state,
            abort: handle.abort_handle(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Stop the navigation from committing. No effect once committed.
    pub fn cancel(&self) {
        if self
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            debug!("Cancelled deferred navigation to {}", self.path);
            self.abort.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::Acquire) == CANCELLED
    }

    pub fn is_committed(&self) -> bool {
        self.state.load(Ordering::Acquire) == COMMITTED
    }

    /// Neither committed nor cancelled yet.
    pub fn is_pending(&self) -> bool {
        self.state.load(Ordering::Acquire) == PENDING
    }
}
