//! In-memory [`Stage`] for exercising the animation engine.
//!
//! `TestStage` holds a flat list of fake render targets with tag/id/class
//! metadata, records every style and class write in order, and models the two
//! host scheduling primitives with a manual clock: frame requests coalesce
//! into a flag the test consumes with [`TestStage::take_frame_request`], and
//! timeouts queue until [`TestStage::advance`] moves the clock past them.
//! Tests drive the engine loop by hand:
//!
//! ```ignore
//! anim.play(root, &mut stage, PlayOptions::default());
//! while stage.take_frame_request() {
//!     anim.frame(&mut stage);
//! }
//! for timer in stage.advance(700.0) {
//!     anim.timer_fired(&mut stage, timer);
//! }
//! ```

use anyhow::{anyhow, Result};
use choreo_api_core::{Selector, Stage, TargetHandle, TargetRef, TimerId, WatchId};
use serde::Serialize;

/// One recorded mutation, in the order the engine issued it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum StageWrite {
    Style {
        target: TargetHandle,
        prop: String,
        value: String,
    },
    AddClass {
        target: TargetHandle,
        class: String,
    },
    RemoveClass {
        target: TargetHandle,
        class: String,
    },
}

#[derive(Clone, Debug, Serialize)]
struct TargetRecord {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct PendingTimer {
    due: f64,
    id: TimerId,
}

#[derive(Default, Debug)]
pub struct TestStage {
    targets: Vec<TargetRecord>,
    writes: Vec<StageWrite>,
    watches: Vec<(TargetHandle, WatchId)>,
    timers: Vec<PendingTimer>,
    frame_requested: bool,
    now: f64,
}

impl TestStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target with a tag only.
    pub fn add_target(&mut self, tag: &str) -> TargetHandle {
        self.add_target_full(tag, None, &[])
    }

    /// Add a target with tag, optional id, and initial classes.
    pub fn add_target_full(
        &mut self,
        tag: &str,
        id: Option<&str>,
        classes: &[&str],
    ) -> TargetHandle {
        let handle = TargetHandle(self.targets.len() as u32);
        self.targets.push(TargetRecord {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            styles: Vec::new(),
        });
        handle
    }

    /// Handle of the single target matching the selector.
    pub fn target(&self, selector: &str) -> Result<TargetHandle> {
        let sel = Selector::parse(selector)?;
        let mut found = self.targets.iter().enumerate().filter(|(_, t)| {
            sel.matches(&t.tag, t.id.as_deref(), &t.classes)
        });
        let (idx, _) = found
            .next()
            .ok_or_else(|| anyhow!("no target matches selector '{selector}'"))?;
        if found.next().is_some() {
            return Err(anyhow!("selector '{selector}' matches more than one target"));
        }
        Ok(TargetHandle(idx as u32))
    }

    /// Current inline style value, `None` when unset.
    pub fn style_of(&self, target: TargetHandle, prop: &str) -> Option<&str> {
        self.record(target)
            .styles
            .iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, target: TargetHandle, class: &str) -> bool {
        self.record(target).classes.iter().any(|c| c == class)
    }

    /// Every write issued so far, oldest first.
    pub fn writes(&self) -> &[StageWrite] {
        &self.writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    pub fn active_watches(&self) -> &[(TargetHandle, WatchId)] {
        &self.watches
    }

    pub fn pending_timers(&self) -> Vec<TimerId> {
        self.timers.iter().map(|t| t.id).collect()
    }

    /// Consume the coalesced frame request, if one is pending.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    /// Move the clock forward and drain the timers that came due, in due
    /// order. The caller feeds them back through the engine.
    pub fn advance(&mut self, ms: f64) -> Vec<TimerId> {
        self.now += ms;
        let now = self.now;
        let mut due: Vec<PendingTimer> = self
            .timers
            .iter()
            .copied()
            .filter(|t| t.due <= now)
            .collect();
        self.timers.retain(|t| t.due > now);
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|t| t.id).collect()
    }

    /// JSON snapshot of one target's classes and styles, for assertions on
    /// whole end states.
    pub fn snapshot(&self, target: TargetHandle) -> serde_json::Value {
        serde_json::to_value(self.record(target)).expect("target record serializes")
    }

    fn record(&self, target: TargetHandle) -> &TargetRecord {
        &self.targets[target.0 as usize]
    }

    fn record_mut(&mut self, target: TargetHandle) -> &mut TargetRecord {
        &mut self.targets[target.0 as usize]
    }
}

impl Stage for TestStage {
    fn resolve(&mut self, target: &TargetRef) -> Vec<TargetHandle> {
        match target {
            TargetRef::Handle(h) => vec![*h],
            TargetRef::Selector(s) => match Selector::parse(s) {
                Ok(sel) => self
                    .targets
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| sel.matches(&t.tag, t.id.as_deref(), &t.classes))
                    .map(|(idx, _)| TargetHandle(idx as u32))
                    .collect(),
                Err(_) => Vec::new(),
            },
            TargetRef::List(refs) => refs.iter().flat_map(|r| self.resolve(r)).collect(),
        }
    }

    fn style(&self, target: TargetHandle, prop: &str) -> Option<String> {
        self.style_of(target, prop).map(str::to_string)
    }

    fn set_style(&mut self, target: TargetHandle, prop: &str, value: &str) {
        self.writes.push(StageWrite::Style {
            target,
            prop: prop.to_string(),
            value: value.to_string(),
        });
        let styles = &mut self.record_mut(target).styles;
        if value.is_empty() {
            styles.retain(|(p, _)| p != prop);
        } else if let Some(entry) = styles.iter_mut().find(|(p, _)| p == prop) {
            entry.1 = value.to_string();
        } else {
            styles.push((prop.to_string(), value.to_string()));
        }
    }

    fn add_class(&mut self, target: TargetHandle, class: &str) {
        self.writes.push(StageWrite::AddClass {
            target,
            class: class.to_string(),
        });
        let classes = &mut self.record_mut(target).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, target: TargetHandle, class: &str) {
        self.writes.push(StageWrite::RemoveClass {
            target,
            class: class.to_string(),
        });
        self.record_mut(target).classes.retain(|c| c != class);
    }

    fn watch_transition_end(&mut self, target: TargetHandle, watch: WatchId) {
        self.watches.push((target, watch));
    }

    fn unwatch_transition_end(&mut self, watch: WatchId) {
        self.watches.retain(|(_, w)| *w != watch);
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    fn set_timeout(&mut self, delay_ms: f64, timer: TimerId) {
        self.timers.push(PendingTimer {
            due: self.now + delay_ms,
            id: timer,
        });
    }

    fn clear_timeout(&mut self, timer: TimerId) {
        self.timers.retain(|t| t.id != timer);
    }

    fn now_ms(&self) -> f64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_resolution_matches_metadata() {
        let mut stage = TestStage::new();
        let backdrop = stage.add_target("app-backdrop");
        let page = stage.add_target_full("div", Some("main"), &["show-page"]);

        assert_eq!(stage.resolve(&"app-backdrop".into()), vec![backdrop]);
        assert_eq!(stage.resolve(&"#main".into()), vec![page]);
        assert_eq!(stage.resolve(&"div.show-page".into()), vec![page]);
        assert!(stage.resolve(&"span".into()).is_empty());
        assert!(stage.resolve(&"not a selector".into()).is_empty());
        assert_eq!(stage.target("#main").unwrap(), page);
        assert!(stage.target("section").is_err());
    }

    #[test]
    fn style_writes_record_and_apply() {
        let mut stage = TestStage::new();
        let el = stage.add_target("div");
        stage.set_style(el, "opacity", "0.5");
        assert_eq!(stage.style_of(el, "opacity"), Some("0.5"));

        // The empty string clears the property but still records a write.
        stage.set_style(el, "opacity", "");
        assert_eq!(stage.style_of(el, "opacity"), None);
        assert_eq!(stage.writes().len(), 2);
    }

    #[test]
    fn class_mutation_is_idempotent() {
        let mut stage = TestStage::new();
        let el = stage.add_target("div");
        stage.add_class(el, "active");
        stage.add_class(el, "active");
        assert!(stage.has_class(el, "active"));
        assert_eq!(stage.snapshot(el)["classes"], serde_json::json!(["active"]));
        stage.remove_class(el, "active");
        assert!(!stage.has_class(el, "active"));
    }

    #[test]
    fn timers_fire_in_due_order_on_advance() {
        let mut stage = TestStage::new();
        stage.set_timeout(100.0, TimerId(0));
        stage.set_timeout(50.0, TimerId(1));
        stage.set_timeout(500.0, TimerId(2));
        stage.clear_timeout(TimerId(0));

        assert_eq!(stage.advance(40.0), vec![]);
        assert_eq!(stage.advance(60.0), vec![TimerId(1)]);
        assert_eq!(stage.pending_timers(), vec![TimerId(2)]);
        assert_eq!(stage.now_ms(), 100.0);
    }

    #[test]
    fn frame_requests_coalesce() {
        let mut stage = TestStage::new();
        assert!(!stage.take_frame_request());
        stage.request_frame();
        stage.request_frame();
        assert!(stage.take_frame_request());
        assert!(!stage.take_frame_request());
    }
}
