//! Identifiers and simple allocators for core entities.

use choreo_api_core::{TimerId, WatchId};
use serde::{Deserialize, Serialize};

/// Index handle into an [`Animation`](crate::Animation)'s node arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Monotonic allocator for NodeId plus the WatchId/TimerId handed to stages.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_node: u32,
    next_watch: u32,
    next_timer: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node = self.next_node.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_watch(&mut self) -> WatchId {
        let id = WatchId(self.next_watch);
        self.next_watch = self.next_watch.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_timer(&mut self) -> TimerId {
        let id = TimerId(self.next_timer);
        self.next_timer = self.next_timer.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
