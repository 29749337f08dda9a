//! Stage: the narrow surface the animation engine renders through.
//!
//! A stage owns the render targets (elements, in a DOM-like host) and the two
//! scheduling primitives the engine depends on: "call me back just before the
//! next repaint" and "call me back after N milliseconds". The engine never
//! holds host callbacks; instead it hands the stage an id for every armed
//! listener or timer and expects the host to deliver the id back through the
//! engine's `frame` / `timer_fired` / `transition_ended` entry points. Ids
//! the engine has since released must be ignored by it, so late deliveries
//! are harmless.

use serde::{Deserialize, Serialize};

/// Opaque handle to one render target on the stage.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TargetHandle(pub u32);

/// Identifies one armed transition-end listener.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WatchId(pub u32);

/// Identifies one pending host timeout.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u32);

/// How a caller names render targets: an already-resolved handle, a selector
/// string the stage interprets, or a collection of either.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TargetRef {
    Handle(TargetHandle),
    Selector(String),
    List(Vec<TargetRef>),
}

impl From<TargetHandle> for TargetRef {
    fn from(h: TargetHandle) -> Self {
        TargetRef::Handle(h)
    }
}

impl From<&str> for TargetRef {
    fn from(s: &str) -> Self {
        TargetRef::Selector(s.to_string())
    }
}

impl From<String> for TargetRef {
    fn from(s: String) -> Self {
        TargetRef::Selector(s)
    }
}

impl From<Vec<TargetHandle>> for TargetRef {
    fn from(handles: Vec<TargetHandle>) -> Self {
        TargetRef::List(handles.into_iter().map(TargetRef::Handle).collect())
    }
}

impl From<Vec<TargetRef>> for TargetRef {
    fn from(refs: Vec<TargetRef>) -> Self {
        TargetRef::List(refs)
    }
}

/// Rendering-substrate capabilities consumed by the engine.
///
/// Style and class writes are expected to be cheap to issue; the engine
/// batches them per phase so a stage never sees interleaved reads and writes
/// within one play cycle.
pub trait Stage {
    /// Resolve a target reference into zero or more concrete handles.
    /// Resolving a `Handle` is the identity mapping.
    fn resolve(&mut self, target: &TargetRef) -> Vec<TargetHandle>;

    /// Read an inline style property, `None` when unset.
    fn style(&self, target: TargetHandle, prop: &str) -> Option<String>;

    /// Write an inline style property. The empty string clears it.
    fn set_style(&mut self, target: TargetHandle, prop: &str, value: &str);

    /// Add a class to the target's class list (idempotent).
    fn add_class(&mut self, target: TargetHandle, class: &str);

    /// Remove a class from the target's class list (idempotent).
    fn remove_class(&mut self, target: TargetHandle, class: &str);

    /// Arm a one-shot transition-completed listener on the target. When the
    /// host observes the completion it must call the engine's
    /// `transition_ended` with this id.
    fn watch_transition_end(&mut self, target: TargetHandle, watch: WatchId);

    /// Disarm a previously armed listener. Unknown ids are a no-op.
    fn unwatch_transition_end(&mut self, watch: WatchId);

    /// Ask the host to call the engine's `frame` before the next repaint.
    /// Multiple requests before that point may coalesce into one delivery.
    fn request_frame(&mut self);

    /// Ask the host to call the engine's `timer_fired` with this id after
    /// `delay_ms` milliseconds.
    fn set_timeout(&mut self, delay_ms: f64, timer: TimerId);

    /// Cancel a pending timeout. Unknown ids are a no-op.
    fn clear_timeout(&mut self, timer: TimerId);

    /// Monotonic host clock in milliseconds.
    fn now_ms(&self) -> f64;
}
