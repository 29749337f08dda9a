//! AnimationNode: one unit of the animation tree.
//!
//! A node owns its render targets, effect endpoints, before/after style
//! batches, and finish subscribers. Tree-driving operations (play, scrub,
//! destroy, anything that needs the stage or the parent chain) live on
//! [`Animation`](crate::Animation); the methods here are the builder surface
//! reached through `Animation::node_mut` and are meant to be chained while a
//! node is not mid-transition.

use crate::effects::EffectStore;
use crate::ids::NodeId;
use crate::options::{AnimationOptions, PlayOptions};
use crate::style_batch::StyleBatch;
use crate::subscribers::{FinishEvent, FinishSubscribers};
use crate::watcher::TransitionWatch;
use choreo_api_core::{Stage, StyleValue, TargetHandle};
use std::fmt;

/// A read- or write-phase callback run against the stage during inspection.
pub type StageFn = Box<dyn FnMut(&mut dyn Stage)>;

/// Phase the cycle root has scheduled for the next frame delivery.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PendingPhase {
    Inspect { opts: PlayOptions },
    Commit,
}

pub struct AnimationNode {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) targets: Vec<TargetHandle>,
    pub(crate) opts: AnimationOptions,

    pub(crate) duration: Option<f64>,
    pub(crate) easing: Option<String>,
    pub(crate) reversed: bool,

    pub(crate) effects: EffectStore,
    pub(crate) before: StyleBatch,
    pub(crate) after: StyleBatch,
    pub(crate) read_fns: Vec<StageFn>,
    pub(crate) write_fns: Vec<StageFn>,
    pub(crate) subscribers: FinishSubscribers,

    // Cycle state. The watch and pending phase are only ever set on the node
    // a cycle was started on.
    pub(crate) watch: Option<TransitionWatch>,
    pub(crate) pending: Option<PendingPhase>,
    pub(crate) is_playing: bool,
    pub(crate) has_completed: bool,
    pub(crate) has_tween: bool,
    pub(crate) has_dur: bool,
    pub(crate) is_async: bool,
    pub(crate) last_update: f64,
}

impl AnimationNode {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            targets: Vec::new(),
            opts: AnimationOptions::default(),
            duration: None,
            easing: None,
            reversed: false,
            effects: EffectStore::new(),
            before: StyleBatch::new(),
            after: StyleBatch::new(),
            read_fns: Vec::new(),
            write_fns: Vec::new(),
            subscribers: FinishSubscribers::new(),
            watch: None,
            pending: None,
            is_playing: false,
            has_completed: false,
            has_tween: false,
            has_dur: false,
            is_async: false,
            last_update: f64::NEG_INFINITY,
        }
    }

    /// Empty every mutable field, leaving a node indistinguishable from a
    /// freshly created one with the same id.
    pub(crate) fn reset(&mut self) {
        *self = AnimationNode::new(self.id);
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn targets(&self) -> &[TargetHandle] {
        &self.targets
    }

    #[inline]
    pub fn options(&self) -> &AnimationOptions {
        &self.opts
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[inline]
    pub fn has_completed(&self) -> bool {
        self.has_completed
    }

    #[inline]
    pub fn has_tween(&self) -> bool {
        self.has_tween
    }

    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn effects(&self) -> &EffectStore {
        &self.effects
    }

    /// Set this node's own duration override in milliseconds.
    pub fn duration(&mut self, ms: f64) -> &mut Self {
        self.duration = Some(ms);
        self
    }

    /// Set this node's own easing-name override.
    pub fn easing(&mut self, name: &str) -> &mut Self {
        self.easing = Some(name.to_string());
        self
    }

    /// Declare where a property starts.
    pub fn from(&mut self, prop: &str, val: impl Into<StyleValue>) -> &mut Self {
        self.effects.set_from(prop, val.into());
        self
    }

    /// Declare where a property ends. With `clear_after` set, the property
    /// (or the composite `transform`, for transform-family properties) is
    /// cleared by the after batch once the transition lands.
    pub fn to(&mut self, prop: &str, val: impl Into<StyleValue>, clear_after: bool) -> &mut Self {
        let is_transform = self.effects.set_to(prop, val.into());
        if clear_after {
            let cleared = if is_transform { "transform" } else { prop };
            self.after.upsert_style(cleared, StyleValue::text(""));
        }
        self
    }

    /// Declare both endpoints of a property.
    pub fn from_to(
        &mut self,
        prop: &str,
        from: impl Into<StyleValue>,
        to: impl Into<StyleValue>,
        clear_after: bool,
    ) -> &mut Self {
        self.from(prop, from).to(prop, to, clear_after)
    }

    /// Subscribe to this node's finish notification.
    pub fn on_finish(
        &mut self,
        callback: impl FnMut(&FinishEvent) + 'static,
        once: bool,
        clear_existing: bool,
    ) -> &mut Self {
        self.subscribers.subscribe(Box::new(callback), once, clear_existing);
        self
    }

    /// Builder for the batch applied while staging.
    pub fn before(&mut self) -> BeforeBuilder<'_> {
        BeforeBuilder { node: self }
    }

    /// Builder for the batch applied at completion.
    pub fn after(&mut self) -> AfterBuilder<'_> {
        AfterBuilder { node: self }
    }
}

impl fmt::Debug for AnimationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationNode")
            .field("id", &self.id)
            .field("children", &self.children)
            .field("targets", &self.targets.len())
            .field("effects", &self.effects.len())
            .field("is_playing", &self.is_playing)
            .field("has_completed", &self.has_completed)
            .field("reversed", &self.reversed)
            .finish()
    }
}

/// Chained access to the before batch. `add_dom_read_fn` callbacks run first
/// in the inspection frame, before any write of the cycle; `add_dom_write_fn`
/// callbacks run right after them.
pub struct BeforeBuilder<'a> {
    node: &'a mut AnimationNode,
}

impl<'a> BeforeBuilder<'a> {
    pub fn add_class(self, class: &str) -> Self {
        self.node.before.add_class(class);
        self
    }

    pub fn remove_class(self, class: &str) -> Self {
        self.node.before.remove_class(class);
        self
    }

    pub fn set_styles(self, styles: Vec<(String, StyleValue)>) -> Self {
        self.node.before.set_styles(styles);
        self
    }

    pub fn clear_styles(self, props: &[&str]) -> Self {
        self.node.before.clear_styles(props);
        self
    }

    pub fn add_dom_read_fn(self, f: impl FnMut(&mut dyn Stage) + 'static) -> Self {
        self.node.read_fns.push(Box::new(f));
        self
    }

    pub fn add_dom_write_fn(self, f: impl FnMut(&mut dyn Stage) + 'static) -> Self {
        self.node.write_fns.push(Box::new(f));
        self
    }
}

/// Chained access to the after batch.
pub struct AfterBuilder<'a> {
    node: &'a mut AnimationNode,
}

impl<'a> AfterBuilder<'a> {
    pub fn add_class(self, class: &str) -> Self {
        self.node.after.add_class(class);
        self
    }

    pub fn remove_class(self, class: &str) -> Self {
        self.node.after.remove_class(class);
        self
    }

    pub fn set_styles(self, styles: Vec<(String, StyleValue)>) -> Self {
        self.node.after.set_styles(styles);
        self
    }

    pub fn clear_styles(self, props: &[&str]) -> Self {
        self.node.after.clear_styles(props);
        self
    }
}
