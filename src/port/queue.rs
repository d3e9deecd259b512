//! Queue introspection port.

/// Read-only view of the pending trade queue.
///
/// Presence text derives from the queue size, so implementations must
/// report the size as of the call, never a cached value.
pub trait QueueInfo: Send + Sync {
    /// Number of sessions currently waiting.
    fn len(&self) -> usize;

    /// Whether the queue has no waiting sessions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
