//! Animation: node arena ownership and the tree-driving lifecycle.
//!
//! Methods:
//! - create_node / create_node_with, element, add, set_parent, reverse
//! - duration_of / easing_of (parent-chain resolution)
//! - play, frame, transition_ended, timer_fired, stop (play pipeline)
//! - progress_start / progress_step / progress_end (scrubbing)
//! - destroy
//!
//! One cycle is driven entirely from its root node: `play` initializes the
//! subtree and arms the completion watch, then each host `frame` delivery
//! consumes the root's pending phase (inspection with its read/write
//! callbacks and staging, then the commit one frame later). Completion
//! arrives either through `transition_ended` or `timer_fired`; taking the
//! armed watch out of the root is the cancellation flip that guarantees
//! exactly one of the two runs the finish path.

use crate::config::Config;
use crate::ids::{IdAllocator, NodeId};
use crate::node::{AnimationNode, PendingPhase};
use crate::options::{AnimationOptions, PlayOptions};
use crate::subscribers::FinishEvent;
use crate::watcher::TransitionWatch;
use choreo_api_core::{Stage, TargetHandle, TargetRef, TimerId, WatchId};
use log::debug;
use std::mem;

/// Owner of the node arena. Node ids are dense indices into it and are only
/// meaningful for the `Animation` that allocated them.
#[derive(Debug)]
pub struct Animation {
    cfg: Config,
    ids: IdAllocator,
    nodes: Vec<AnimationNode>,
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Animation {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            nodes: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Allocate a fresh node with no targets, effects, or children.
    pub fn create_node(&mut self) -> NodeId {
        let id = self.ids.alloc_node();
        debug_assert_eq!(id.0 as usize, self.nodes.len());
        self.nodes.push(AnimationNode::new(id));
        id
    }

    /// Allocate a node seeded from creation options. The options are also
    /// retained on the node for factories that read extra context.
    pub fn create_node_with(&mut self, opts: AnimationOptions) -> NodeId {
        let id = self.create_node();
        let node = self.node_mut(id);
        node.duration = opts.duration;
        node.easing = opts.easing.clone();
        node.reversed = opts.reversed;
        node.opts = opts;
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &AnimationNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut AnimationNode {
        &mut self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True while a completion watch is armed on this node.
    pub fn has_armed_watch(&self, id: NodeId) -> bool {
        self.node(id).watch.is_some()
    }

    /// Resolve targets through the stage and append them to the node.
    pub fn element(&mut self, id: NodeId, stage: &mut dyn Stage, target: impl Into<TargetRef>) {
        let target = target.into();
        let resolved = stage.resolve(&target);
        self.node_mut(id).targets.extend(resolved);
    }

    /// Append `child` under `parent`. A node has one parent at a time;
    /// re-adding under a new parent unlinks it from the old one.
    pub fn add(&mut self, parent: NodeId, child: NodeId) {
        if let Some(prev) = self.node(child).parent {
            if prev != parent {
                self.node_mut(prev).children.retain(|&c| c != child);
            }
        }
        self.node_mut(child).parent = Some(parent);
        let children = &mut self.node_mut(parent).children;
        if !children.contains(&child) {
            children.push(child);
        }
    }

    /// Set the parent link only, without touching any child list.
    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        self.node_mut(child).parent = Some(parent);
    }

    /// Effective duration: the node's own override, then play options, then
    /// the nearest ancestor override, defaulting to 0. Play options apply at
    /// the queried node only, not during the ancestor walk.
    pub fn duration_of(&self, id: NodeId, opts: Option<&PlayOptions>) -> f64 {
        let node = self.node(id);
        if let Some(ms) = node.duration {
            return ms;
        }
        if let Some(ms) = opts.and_then(|o| o.duration) {
            return ms;
        }
        match node.parent {
            Some(parent) => self.duration_of(parent, None),
            None => 0.0,
        }
    }

    /// Effective easing: the node's own override, else the nearest ancestor's.
    pub fn easing_of(&self, id: NodeId) -> Option<&str> {
        let node = self.node(id);
        if let Some(easing) = node.easing.as_deref() {
            return Some(easing);
        }
        node.parent.and_then(|parent| self.easing_of(parent))
    }

    /// Set the reversed flag uniformly on the whole subtree.
    pub fn reverse(&mut self, id: NodeId, reversed: bool) {
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.reverse(child, reversed);
        }
        self.node_mut(id).reversed = reversed;
    }

    /// Start one play cycle on this subtree. Synchronous part only: the
    /// inspection and staging run when the host delivers the next `frame`.
    pub fn play(&mut self, id: NodeId, stage: &mut dyn Stage, opts: PlayOptions) {
        let dur = self.duration_of(id, Some(&opts));
        debug!(
            "play: node={} duration={}ms easing={:?}",
            id.0,
            dur,
            self.easing_of(id)
        );

        let is_async = self.subtree_has_duration(id, &opts);
        self.node_mut(id).is_async = is_async;

        self.clear_watch(id, stage);
        self.play_init(id, &opts, stage);

        if is_async {
            // Armed before any write phase so a same-frame commit cannot
            // race past it.
            self.arm_watch(id, dur, true, 1.0, stage);
        }

        self.node_mut(id).pending = Some(PendingPhase::Inspect { opts });
        stage.request_frame();
    }

    /// Host entry point: run every phase scheduled for this repaint.
    pub fn frame(&mut self, stage: &mut dyn Stage) {
        let scheduled: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| n.pending.is_some())
            .map(|n| n.id)
            .collect();
        for id in scheduled {
            let Some(phase) = self.node_mut(id).pending.take() else {
                continue;
            };
            match phase {
                PendingPhase::Inspect { opts } => self.run_inspect(id, &opts, stage),
                PendingPhase::Commit => self.run_commit(id, stage),
            }
        }
    }

    /// Host entry point: the native transition-completed event arrived.
    /// Stale ids (a watch already resolved or released) no-op.
    pub fn transition_ended(&mut self, stage: &mut dyn Stage, watch: WatchId) {
        let Some(id) = self.find_armed_listener(watch) else {
            return;
        };
        let Some(armed) = self.node_mut(id).watch.take() else {
            return;
        };
        armed.release(stage);
        debug!("transition end: node={}", id.0);

        self.play_end(id, false, armed.end_step, stage);
        self.finish_fanout(id, armed.should_complete);
    }

    /// Host entry point: a timeout elapsed. Only the armed fallback timer
    /// does anything; stale ids no-op.
    pub fn timer_fired(&mut self, stage: &mut dyn Stage, timer: TimerId) {
        let Some(id) = self.find_armed_timer(timer) else {
            return;
        };
        let Some(armed) = self.node_mut(id).watch.take() else {
            return;
        };
        if let Some((_, watch)) = armed.listener {
            stage.unwatch_transition_end(watch);
        }
        debug!("transition fallback fired: node={}, end event never arrived", id.0);

        self.play_end(id, true, armed.end_step, stage);
        self.finish_fanout(id, armed.should_complete);
    }

    /// Force the in-flight cycle to complete now: releases the watch, runs
    /// the end pass, and fires the finish fan-out. Idempotent; a node that
    /// is not mid-cycle only has its pending state cleared.
    pub fn stop(&mut self, id: NodeId, stage: &mut dyn Stage) {
        self.clear_watch(id, stage);
        self.node_mut(id).pending = None;
        if !self.node(id).is_playing {
            return;
        }
        // Forced completion always snaps to the end state, even when the
        // cycle never had a perceptible duration.
        self.node_mut(id).has_dur = true;
        self.play_end(id, true, 1.0, stage);
        self.finish_fanout(id, true);
    }

    /// Put the subtree under manual control: apply before batches and force
    /// an immediate (no-duration, linear) transition so progress writes land
    /// without animating. Any watch or pending phase left over from an
    /// interrupted play cycle is released first.
    pub fn progress_start(&mut self, id: NodeId, stage: &mut dyn Stage) {
        self.clear_watch(id, stage);
        self.node_mut(id).pending = None;
        self.progress_start_pass(id, stage);
    }

    fn progress_start_pass(&mut self, id: NodeId, stage: &mut dyn Stage) {
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.progress_start_pass(child, stage);
        }
        {
            let node = self.node_mut(id);
            node.has_dur = true;
            node.is_playing = true;
        }
        self.apply_before(id, stage);
        self.prime_transition(id, 0.0, true, stage);
    }

    /// Write one scrub position, throttled to the configured interval.
    pub fn progress_step(&mut self, id: NodeId, stage: &mut dyn Stage, value: f64) {
        let now = stage.now_ms();
        self.progress_step_at(id, value, now, stage);
    }

    /// Leave manual control: snap to the resolved endpoint (1 when
    /// completing, 0 when cancelling). Near a boundary this settles
    /// immediately; otherwise a short transition is primed and one watch
    /// armed at the root to land the remaining distance.
    pub fn progress_end(
        &mut self,
        id: NodeId,
        stage: &mut dyn Stage,
        should_complete: bool,
        current_step: f64,
    ) {
        debug!(
            "progress end: node={} should_complete={} step={}",
            id.0, should_complete, current_step
        );
        let end_step = if should_complete { 1.0 } else { 0.0 };
        let settled = current_step < self.cfg.settle_threshold
            || current_step > 1.0 - self.cfg.settle_threshold;

        self.scrub_end_pass(id, end_step, settled, stage);

        if settled {
            self.clear_watch(id, stage);
            self.finish_fanout(id, should_complete);
        } else {
            let dur = self.cfg.scrub_end_duration_ms;
            self.arm_watch(id, dur, should_complete, end_step, stage);
        }
    }

    /// Recursively reset the subtree to pristine state, children first,
    /// releasing any armed watch. Destroyed nodes stay allocated and
    /// reusable. Idempotent.
    pub fn destroy(&mut self, id: NodeId, stage: &mut dyn Stage) {
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.destroy(child, stage);
        }
        self.clear_watch(id, stage);
        self.node_mut(id).reset();
    }

    // ----- play pipeline internals -----

    fn play_init(&mut self, id: NodeId, opts: &PlayOptions, stage: &mut dyn Stage) {
        let has_dur = self.duration_of(id, Some(opts)) > self.cfg.duration_min_ms;
        {
            let node = self.node_mut(id);
            node.has_tween = false;
            node.is_playing = true;
            node.has_completed = false;
            node.has_dur = has_dur;
        }
        if has_dur {
            // Durational nodes start posed at the from-state before any
            // paint of this cycle.
            self.write_progress(id, 0.0, stage);
        }
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.play_init(child, opts, stage);
        }
    }

    fn run_inspect(&mut self, id: NodeId, opts: &PlayOptions, stage: &mut dyn Stage) {
        // Reads for the whole tree strictly precede every write of the cycle.
        self.run_read_fns(id, stage);
        self.run_write_fns(id, stage);
        self.run_stage_pass(id, opts, stage);

        if self.node(id).is_async {
            self.node_mut(id).pending = Some(PendingPhase::Commit);
            stage.request_frame();
        } else {
            self.finish_fanout(id, true);
        }
    }

    fn run_read_fns(&mut self, id: NodeId, stage: &mut dyn Stage) {
        let mut fns = mem::take(&mut self.node_mut(id).read_fns);
        for f in fns.iter_mut() {
            f(stage);
        }
        self.node_mut(id).read_fns = fns;
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.run_read_fns(child, stage);
        }
    }

    fn run_write_fns(&mut self, id: NodeId, stage: &mut dyn Stage) {
        let mut fns = mem::take(&mut self.node_mut(id).write_fns);
        for f in fns.iter_mut() {
            f(stage);
        }
        self.node_mut(id).write_fns = fns;
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.run_write_fns(child, stage);
        }
    }

    fn run_stage_pass(&mut self, id: NodeId, opts: &PlayOptions, stage: &mut dyn Stage) {
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.run_stage_pass(child, opts, stage);
        }
        self.apply_before(id, stage);
        if self.node(id).has_dur {
            let dur = self.duration_of(id, Some(opts));
            self.prime_transition(id, dur, false, stage);
        } else {
            // No perceptible duration: complete within this frame.
            self.write_progress(id, 1.0, stage);
            self.apply_after(id, stage);
        }
    }

    fn run_commit(&mut self, id: NodeId, stage: &mut dyn Stage) {
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.run_commit(child, stage);
        }
        if self.node(id).has_dur {
            // The primed transition picks this write up and starts moving.
            self.write_progress(id, 1.0, stage);
        }
    }

    fn play_end(&mut self, id: NodeId, forced: bool, end_step: f64, stage: &mut dyn Stage) {
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.play_end(child, forced, end_step, stage);
        }
        if self.node(id).has_dur {
            if forced {
                // Too late for a smooth landing: un-prime and snap.
                self.prime_transition(id, 0.0, true, stage);
                self.write_progress(id, end_step, stage);
            }
            self.apply_after(id, stage);
        }
    }

    fn finish_fanout(&mut self, id: NodeId, completed: bool) {
        {
            let node = self.node_mut(id);
            node.is_playing = false;
            node.has_completed = completed;
        }
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.finish_fanout(child, completed);
        }
        let event = FinishEvent {
            node: id,
            completed,
        };
        self.node_mut(id).subscribers.notify(&event);
    }

    fn subtree_has_duration(&self, id: NodeId, opts: &PlayOptions) -> bool {
        if self.duration_of(id, Some(opts)) > self.cfg.duration_min_ms {
            return true;
        }
        self.node(id)
            .children
            .iter()
            .any(|&child| self.subtree_has_duration(child, opts))
    }

    // ----- scrub internals -----

    fn progress_step_at(&mut self, id: NodeId, value: f64, now: f64, stage: &mut dyn Stage) {
        {
            let throttle = self.cfg.scrub_throttle_ms;
            let node = self.node_mut(id);
            if now - throttle <= node.last_update {
                return;
            }
            node.last_update = now;
        }
        let value = value.clamp(0.0, 1.0);
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.progress_step_at(child, value, now, stage);
        }
        // write_progress applies the per-node reversal flip.
        self.write_progress(id, value, stage);
    }

    fn scrub_end_pass(&mut self, id: NodeId, end_step: f64, settled: bool, stage: &mut dyn Stage) {
        for i in 0..self.child_count(id) {
            let child = self.child_at(id, i);
            self.scrub_end_pass(child, end_step, settled, stage);
        }
        self.write_progress(id, end_step, stage);
        if settled {
            self.apply_after(id, stage);
        } else {
            let dur = self.cfg.scrub_end_duration_ms;
            self.prime_transition(id, dur, true, stage);
        }
    }

    // ----- watch plumbing -----

    fn arm_watch(
        &mut self,
        id: NodeId,
        dur_ms: f64,
        should_complete: bool,
        end_step: f64,
        stage: &mut dyn Stage,
    ) {
        self.clear_watch(id, stage);
        let witness = self.find_witness(id);
        let watch_id = self.ids.alloc_watch();
        let timer = self.ids.alloc_timer();
        let listener = witness.map(|el| {
            stage.watch_transition_end(el, watch_id);
            (el, watch_id)
        });
        stage.set_timeout(dur_ms + self.cfg.fallback_padding_ms, timer);
        self.node_mut(id).watch = Some(TransitionWatch {
            listener,
            timer,
            should_complete,
            end_step,
        });
    }

    fn clear_watch(&mut self, id: NodeId, stage: &mut dyn Stage) {
        if let Some(watch) = self.node_mut(id).watch.take() {
            watch.release(stage);
        }
    }

    /// First render target of the first depth-first node, children before
    /// self, that is both tweening and durational.
    fn find_witness(&self, id: NodeId) -> Option<TargetHandle> {
        let node = self.node(id);
        for &child in &node.children {
            if let Some(el) = self.find_witness(child) {
                return Some(el);
            }
        }
        if node.has_tween && node.has_dur {
            node.targets.first().copied()
        } else {
            None
        }
    }

    fn find_armed_listener(&self, watch: WatchId) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| n.watch.and_then(|w| w.watch_id()) == Some(watch))
            .map(|n| n.id)
    }

    fn find_armed_timer(&self, timer: TimerId) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| n.watch.map(|w| w.timer) == Some(timer))
            .map(|n| n.id)
    }

    // ----- style passes -----

    /// Write the interpolated (or boundary-literal) pose for one node.
    /// Reversed nodes see the flipped step; transform-family values merge
    /// into one composite write per target.
    fn write_progress(&mut self, id: NodeId, step: f64, stage: &mut dyn Stage) {
        let node = &self.nodes[id.0 as usize];
        if node.effects.is_empty() || node.targets.is_empty() {
            return;
        }
        let step = if node.reversed { 1.0 - step } else { step };

        let mut saw_tween = false;
        let mut writes: Vec<(&str, String)> = Vec::new();
        let mut transforms: Vec<String> = Vec::new();

        for fx in node.effects.iter() {
            // Exact boundary steps write the declared literal.
            let value = match (&fx.from, &fx.to) {
                (Some(from), Some(to)) => {
                    let tween = fx.tweens();
                    saw_tween |= tween;
                    if step == 0.0 {
                        Some(from.literal.render())
                    } else if step == 1.0 {
                        Some(to.literal.render())
                    } else if tween {
                        match (from.num(), to.num()) {
                            (Some(a), Some(b)) => {
                                Some(format!("{}{}", (b - a) * step + a, to.unit()))
                            }
                            _ => None,
                        }
                    } else {
                        None
                    }
                }
                (Some(from), None) if step == 0.0 => Some(from.literal.render()),
                (None, Some(to)) if step == 1.0 => Some(to.literal.render()),
                _ => None,
            };
            if let Some(val) = value {
                if fx.is_transform {
                    transforms.push(format!("{}({})", fx.name, val));
                } else {
                    writes.push((fx.name.as_str(), val));
                }
            }
        }

        for (prop, val) in &writes {
            for &el in &node.targets {
                stage.set_style(el, prop, val);
            }
        }
        if !transforms.is_empty() {
            transforms.push("translateZ(0px)".to_string());
            let composite = transforms.join(" ");
            for &el in &node.targets {
                stage.set_style(el, "transform", &composite);
            }
        }

        if saw_tween {
            self.nodes[id.0 as usize].has_tween = true;
        }
    }

    /// Apply the before batch. Reversed nodes skip it here; its undo is
    /// applied at completion instead.
    fn apply_before(&self, id: NodeId, stage: &mut dyn Stage) {
        let node = self.node(id);
        if node.reversed {
            return;
        }
        for &el in &node.targets {
            for class in node.before.classes_to_add() {
                stage.add_class(el, class);
            }
            for class in node.before.classes_to_remove() {
                stage.remove_class(el, class);
            }
            for (prop, val) in node.before.styles() {
                stage.set_style(el, prop, &val.render());
            }
        }
    }

    /// Clear the primed transition, then apply the after batch, or for
    /// reversed nodes the undo of the before batch.
    fn apply_after(&self, id: NodeId, stage: &mut dyn Stage) {
        let node = self.node(id);
        for &el in &node.targets {
            stage.set_style(el, "transition-duration", "");
            stage.set_style(el, "transition-timing-function", "");

            if node.reversed {
                for class in node.before.classes_to_add() {
                    stage.remove_class(el, class);
                }
                for class in node.before.classes_to_remove() {
                    stage.add_class(el, class);
                }
                for (prop, _) in node.before.styles() {
                    stage.set_style(el, prop, "");
                }
            } else {
                for class in node.after.classes_to_add() {
                    stage.add_class(el, class);
                }
                for class in node.after.classes_to_remove() {
                    stage.remove_class(el, class);
                }
                for (prop, val) in node.after.styles() {
                    stage.set_style(el, prop, &val.render());
                }
            }
        }
    }

    /// Prime the inline transition mechanism. A positive duration sets
    /// duration and easing; zero writes `transition: none` so later progress
    /// writes land immediately.
    fn prime_transition(&self, id: NodeId, dur_ms: f64, forced_linear: bool, stage: &mut dyn Stage) {
        let node = self.node(id);
        if node.effects.is_empty() {
            return;
        }
        let easing: Option<&str> = if forced_linear {
            Some("linear")
        } else {
            self.easing_of(id)
        };
        for &el in &node.targets {
            if dur_ms > 0.0 {
                stage.set_style(el, "transition", "");
                stage.set_style(el, "transition-duration", &format!("{}ms", dur_ms));
                if let Some(easing) = easing {
                    stage.set_style(el, "transition-timing-function", easing);
                }
            } else {
                stage.set_style(el, "transition", "none");
            }
        }
    }

    // ----- traversal helpers -----

    #[inline]
    fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    #[inline]
    fn child_at(&self, id: NodeId, idx: usize) -> NodeId {
        self.node(id).children[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_resolution_order() {
        let mut anim = Animation::default();
        let root = anim.create_node();
        let child = anim.create_node();
        let grandchild = anim.create_node();
        anim.add(root, child);
        anim.add(child, grandchild);

        anim.node_mut(root).duration(500.0);
        assert_eq!(anim.duration_of(grandchild, None), 500.0);

        // Play options beat inherited durations but lose to an own override.
        let opts = PlayOptions::with_duration(200.0);
        assert_eq!(anim.duration_of(grandchild, Some(&opts)), 200.0);
        anim.node_mut(grandchild).duration(90.0);
        assert_eq!(anim.duration_of(grandchild, Some(&opts)), 90.0);
    }

    #[test]
    fn unset_duration_defaults_to_zero() {
        let mut anim = Animation::default();
        let lone = anim.create_node();
        assert_eq!(anim.duration_of(lone, None), 0.0);
    }

    #[test]
    fn easing_inherits_from_nearest_ancestor() {
        let mut anim = Animation::default();
        let root = anim.create_node();
        let mid = anim.create_node();
        let leaf = anim.create_node();
        anim.add(root, mid);
        anim.add(mid, leaf);

        assert_eq!(anim.easing_of(leaf), None);
        anim.node_mut(root).easing("ease-in");
        assert_eq!(anim.easing_of(leaf), Some("ease-in"));
        anim.node_mut(mid).easing("linear");
        assert_eq!(anim.easing_of(leaf), Some("linear"));
    }

    #[test]
    fn re_adding_unlinks_from_previous_parent() {
        let mut anim = Animation::default();
        let a = anim.create_node();
        let b = anim.create_node();
        let child = anim.create_node();

        anim.add(a, child);
        anim.add(b, child);
        assert!(anim.node(a).children().is_empty());
        assert_eq!(anim.node(b).children(), [child]);
        assert_eq!(anim.node(child).parent_id(), Some(b));

        // Re-adding under the same parent does not duplicate the entry.
        anim.add(b, child);
        assert_eq!(anim.node(b).children(), [child]);
    }

    #[test]
    fn reverse_applies_to_whole_subtree() {
        let mut anim = Animation::default();
        let root = anim.create_node();
        let child = anim.create_node();
        anim.add(root, child);

        anim.reverse(root, true);
        assert!(anim.node(root).is_reversed());
        assert!(anim.node(child).is_reversed());
        anim.reverse(root, false);
        assert!(!anim.node(child).is_reversed());
    }

    #[test]
    fn create_node_with_seeds_overrides() {
        let mut anim = Animation::default();
        let opts = AnimationOptions {
            duration: Some(260.0),
            easing: Some("ease-out".to_string()),
            reversed: true,
        };
        let id = anim.create_node_with(opts.clone());
        assert_eq!(anim.duration_of(id, None), 260.0);
        assert_eq!(anim.easing_of(id), Some("ease-out"));
        assert!(anim.node(id).is_reversed());
        assert_eq!(anim.node(id).options(), &opts);
    }
}
