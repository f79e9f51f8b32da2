//! Cooperative cancellation for long-running conversions.
//!
//! A [`CancellationSource`] hands out [`CancellationToken`]s; work checks its
//! token between units of work and stops when it has been cancelled.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Reason for cancellation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancellationReason {
    /// User-initiated cancellation
    UserCancel,
    /// The owner of the job went away
    Shutdown,
    /// Custom reason with description
    Custom(String),
}

impl fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancellationReason::UserCancel => write!(f, "user cancelled"),
            CancellationReason::Shutdown => write!(f, "shutting down"),
            CancellationReason::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug, Default)]
struct Shared {
    cancelled: AtomicBool,
    reason: Mutex<Option<CancellationReason>>,
}

/// Cloneable, thread-safe handle for checking cancellation.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

impl CancellationToken {
    /// A token nobody can cancel.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Acquire)
    }

    pub fn reason(&self) -> Option<CancellationReason> {
        if !self.is_cancelled() {
            return None;
        }
        self.shared.reason.lock().clone()
    }
}

/// Controller that cancels every token it handed out.
#[derive(Debug, Clone, Default)]
pub struct CancellationSource {
    shared: Arc<Shared>,
}

impl CancellationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            shared: Arc::clone(&self.shared),
        }
    }

    /// The first reason wins; later calls are no-ops.
    pub fn cancel(&self, reason: CancellationReason) {
        let mut slot = self.shared.reason.lock();
        if slot.is_none() {
            *slot = Some(reason);
            self.shared.cancelled.store(true, Ordering::Release);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Acquire)
    }
}
