//! Finish notification fan-out.
//!
//! Subscribers come in two kinds: persistent ones survive across play cycles,
//! one-shot ones are dropped after their first delivery. Within one node the
//! persistent list always fires before the one-shot list.

use crate::ids::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;

/// Delivered to every subscriber of a node when a cycle resolves.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinishEvent {
    pub node: NodeId,
    /// True when the cycle ran to completion (including forced completion via
    /// `stop`), false when a scrub was cancelled back to its start.
    pub completed: bool,
}

pub type FinishFn = Box<dyn FnMut(&FinishEvent)>;

#[derive(Default)]
pub struct FinishSubscribers {
    persistent: Vec<FinishFn>,
    once: Vec<FinishFn>,
}

impl FinishSubscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: FinishFn, once: bool, clear_existing: bool) {
        if clear_existing {
            self.clear();
        }
        if once {
            self.once.push(callback);
        } else {
            self.persistent.push(callback);
        }
    }

    /// Deliver the event: persistent subscribers first, then one-shot ones,
    /// which are consumed by the delivery.
    pub fn notify(&mut self, event: &FinishEvent) {
        for callback in self.persistent.iter_mut() {
            callback(event);
        }
        let mut once = mem::take(&mut self.once);
        for callback in once.iter_mut() {
            callback(event);
        }
    }

    pub fn clear(&mut self) {
        self.persistent.clear();
        self.once.clear();
    }

    #[inline]
    pub fn persistent_len(&self) -> usize {
        self.persistent.len()
    }

    #[inline]
    pub fn once_len(&self) -> usize {
        self.once.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persistent.is_empty() && self.once.is_empty()
    }
}

impl fmt::Debug for FinishSubscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinishSubscribers")
            .field("persistent", &self.persistent.len())
            .field("once", &self.once.len())
            .finish()
    }
}
