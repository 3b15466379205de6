//! Mount-scoped ownership of timers and background tasks.
//!
//! A component creates a [`Lifecycle`] when it mounts and keeps it for as
//! long as it is on screen. Everything spawned through it is aborted when the
//! component unmounts, whether by an explicit [`Lifecycle::unmount`] or by
//! dropping the owner. Tasks that must check liveness before publishing a
//! late result hold a cheap [`LifecycleHandle`].

use std::{
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, PoisonError,
    },
};
use tokio::task::AbortHandle;

#[derive(Debug)]
struct LifecycleState {
    mounted: AtomicBool,
    tasks: Mutex<Vec<AbortHandle>>,
}

/// Owner of a mounted component's tasks. Dropping it unmounts.
#[derive(Debug)]
pub struct Lifecycle {
    state: Arc<LifecycleState>,
}

/// A non-owning view of a [`Lifecycle`], used to check liveness.
#[derive(Debug, Clone)]
pub struct LifecycleHandle {
    state: Arc<LifecycleState>,
}

impl Lifecycle {
    /// Mount a new component scope.
    #[must_use]
    pub fn mount() -> Self {
        Self {
            state: Arc::new(LifecycleState {
                mounted: AtomicBool::new(true),
                tasks: Mutex::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn handle(&self) -> LifecycleHandle {
        LifecycleHandle {
            state: self.state.clone(),
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.state.mounted.load(Ordering::Acquire)
    }

    /// Spawn a task owned by this scope. Returns `None` after unmount.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, future: F) -> Option<AbortHandle>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self
            .state
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Checked under the lock so `unmount` cannot miss a task.
        if !self.is_mounted() {
            return None;
        }
        tasks.retain(|task| !task.is_finished());
        let handle = tokio::spawn(future).abort_handle();
        tasks.push(handle.clone());
        Some(handle)
    }

    /// Number of tasks still running in this scope.
    #[must_use]
    pub fn active_tasks(&self) -> usize {
        self.state
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|task| !task.is_finished())
            .count()
    }

    /// Mark the scope unmounted and abort every task it owns. Idempotent.
    pub fn unmount(&self) {
        let mut tasks = self
            .state
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.state.mounted.swap(false, Ordering::AcqRel) {
            tracing::debug!(tasks = tasks.len(), "unmounting component scope");
        }
        for task in tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl LifecycleHandle {
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.state.mounted.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::atomic::AtomicUsize, time::Duration};

    #[tokio::test(start_paused = true)]
    async fn unmount_aborts_pending_timers() {
        let lifecycle = Lifecycle::mount();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        lifecycle.spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(lifecycle.active_tasks(), 1);

        lifecycle.unmount();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!lifecycle.is_mounted());
        assert!(lifecycle.spawn(async {}).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_owner_unmounts() {
        let lifecycle = Lifecycle::mount();
        let handle = lifecycle.handle();
        assert!(handle.is_mounted());

        drop(lifecycle);

        assert!(!handle.is_mounted());
    }
}
