use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyState {
    Idle,
    Busy,
}

/// Single busy flag shared by every request flow of one console.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    busy: Arc<AtomicBool>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BusyState {
        if self.busy.load(Ordering::Acquire) {
            BusyState::Busy
        } else {
            BusyState::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.state() == BusyState::Busy
    }

    /// Marks the flag busy until the returned guard is dropped.
    pub fn acquire(&self) -> BusyGuard {
        self.busy.store(true, Ordering::Release);
        BusyGuard {
            busy: Arc::clone(&self.busy),
        }
    }
}

#[must_use = "the flag is released as soon as the guard is dropped"]
pub struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
