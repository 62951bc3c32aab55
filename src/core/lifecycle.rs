//! Ownership of asynchronous work by a mounted component.
//!
//! A [`Lifecycle`] belongs to one component instance. Work started on its
//! behalf takes a [`Ticket`]; results are applied only while the ticket is the
//! newest one and the owner has not been disposed. Timers are registered as
//! [`TaskHandle`]s and cancelled on disposal.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Cancellation handle for a scheduled task.
#[derive(Clone, Default)]
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
    on_cancel: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that also runs `on_cancel` the first time it is cancelled.
    pub fn with_canceller(on_cancel: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            on_cancel: Some(Arc::new(on_cancel)),
        }
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            if let Some(on_cancel) = &self.on_cancel {
                on_cancel();
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Generation issued by [`Lifecycle::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Default)]
struct LifecycleInner {
    generation: AtomicU64,
    disposed: AtomicBool,
    tasks: Mutex<Vec<TaskHandle>>,
}

#[derive(Clone, Default)]
pub struct Lifecycle {
    inner: Arc<LifecycleInner>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new unit of work; every earlier ticket becomes stale.
    pub fn begin(&self) -> Ticket {
        Ticket(self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while `ticket` is the newest one and the owner is mounted.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.is_live() && self.inner.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub fn is_live(&self) -> bool {
        !self.inner.disposed.load(Ordering::SeqCst)
    }

    /// Tie `handle` to this owner. Adopting after disposal cancels it at once.
    pub fn adopt(&self, handle: TaskHandle) {
        if !self.is_live() {
            handle.cancel();
            return;
        }
        let mut tasks = self
            .inner
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        tasks.retain(|t| !t.is_cancelled());
        tasks.push(handle);
    }

    /// Mark the owner unmounted and cancel every adopted task.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        let tasks = std::mem::take(
            &mut *self
                .inner
                .tasks
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        tracing::debug!("lifecycle disposed, cancelling {} task(s)", tasks.len());
        for task in tasks {
            task.cancel();
        }
    }
}

impl fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("generation", &self.inner.generation.load(Ordering::SeqCst))
            .field("live", &self.is_live())
            .finish()
    }
}
