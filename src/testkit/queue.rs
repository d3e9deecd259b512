//! Queue stub with a settable length.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::port::QueueInfo;

/// Queue reporting whatever length it was last given.
///
/// Reads happen at call time, so a test can shrink the queue between
/// lifecycle callbacks the way the real queue does.
pub struct StaticQueue {
    len: AtomicUsize,
}

impl StaticQueue {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len: AtomicUsize::new(len),
        }
    }

    pub fn set_len(&self, len: usize) {
        self.len.store(len, Ordering::Relaxed);
    }
}

impl QueueInfo for StaticQueue {
    fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }
}
