use choreo_animation_core::{Animation, FinishEvent, NodeId, PlayOptions};
use choreo_test_fixtures::TestStage;
use std::cell::RefCell;
use std::rc::Rc;

fn counter() -> (Rc<RefCell<u32>>, impl FnMut(&FinishEvent)) {
    let count = Rc::new(RefCell::new(0u32));
    let inner = count.clone();
    (count, move |_| *inner.borrow_mut() += 1)
}

fn swipe_node(anim: &mut Animation, stage: &mut TestStage) -> NodeId {
    let el = stage.add_target("div");
    let root = anim.create_node();
    anim.element(root, stage, el);
    anim.node_mut(root)
        .from_to("opacity", "0", "1", false)
        .from_to("translateX", "0px", "100px", false);
    root
}

/// it should write interpolated values with the to endpoint's unit and merge
/// transform-family properties into one composite write
#[test]
fn progress_steps_interpolate_with_the_to_unit() {
    let mut stage = TestStage::new();
    let mut anim = Animation::default();
    let root = swipe_node(&mut anim, &mut stage);
    let el = anim.node(root).targets()[0];

    anim.progress_start(root, &mut stage);
    assert_eq!(stage.style_of(el, "transition"), Some("none"));

    anim.progress_step(root, &mut stage, 0.5);
    assert_eq!(stage.style_of(el, "opacity"), Some("0.5"));
    assert_eq!(
        stage.style_of(el, "transform"),
        Some("translateX(50px) translateZ(0px)")
    );
}

/// it should write the literal endpoints verbatim at the boundaries
#[test]
fn progress_boundaries_write_literals() {
    let mut stage = TestStage::new();
    let el = stage.add_target("div");
    let mut anim = Animation::default();
    let root = anim.create_node();
    anim.element(root, &mut stage, el);
    // The malformed from literal parses to no magnitude; it is still honored
    // verbatim at the boundary and simply never interpolates.
    anim.node_mut(root).from_to("width", "calc(100%-10px)", "320px", false);

    anim.progress_start(root, &mut stage);
    anim.progress_step(root, &mut stage, 0.0);
    assert_eq!(stage.style_of(el, "width"), Some("calc(100%-10px)"));

    // Interior steps cannot interpolate an opaque endpoint, so nothing moves.
    stage.advance(20.0);
    anim.progress_step(root, &mut stage, 0.5);
    assert_eq!(stage.style_of(el, "width"), Some("calc(100%-10px)"));

    stage.advance(20.0);
    anim.progress_step(root, &mut stage, 1.0);
    assert_eq!(stage.style_of(el, "width"), Some("320px"));
}

/// it should skip the write for properties whose endpoints share a magnitude
#[test]
fn equal_magnitudes_skip_the_intermediate_write() {
    let mut stage = TestStage::new();
    let el = stage.add_target("div");
    let mut anim = Animation::default();
    let root = anim.create_node();
    anim.element(root, &mut stage, el);
    anim.node_mut(root).from_to("opacity", "1", "1.0", false);

    anim.progress_start(root, &mut stage);
    stage.clear_writes();
    anim.progress_step(root, &mut stage, 0.5);
    assert!(stage.writes().is_empty());
    assert_eq!(stage.style_of(el, "opacity"), None);
}

/// it should throttle scrub writes against the stage clock
#[test]
fn progress_steps_throttle_on_the_stage_clock() {
    let mut stage = TestStage::new();
    let mut anim = Animation::default();
    let root = swipe_node(&mut anim, &mut stage);
    let el = anim.node(root).targets()[0];

    anim.progress_start(root, &mut stage);
    anim.progress_step(root, &mut stage, 0.25);
    assert_eq!(stage.style_of(el, "opacity"), Some("0.25"));

    // 10 ms later: inside the 16 ms throttle window, dropped.
    stage.advance(10.0);
    anim.progress_step(root, &mut stage, 0.5);
    assert_eq!(stage.style_of(el, "opacity"), Some("0.25"));

    stage.advance(10.0);
    anim.progress_step(root, &mut stage, 0.5);
    assert_eq!(stage.style_of(el, "opacity"), Some("0.5"));
}

/// it should make a reversed step observationally equal to the mirrored
/// unreversed step
#[test]
fn reversed_scrub_mirrors_the_step() {
    let mut stage = TestStage::new();
    let mut anim = Animation::default();
    let root = swipe_node(&mut anim, &mut stage);
    let el = anim.node(root).targets()[0];
    anim.reverse(root, true);

    anim.progress_start(root, &mut stage);
    anim.progress_step(root, &mut stage, 0.25);
    assert_eq!(stage.style_of(el, "opacity"), Some("0.75"));
    assert_eq!(
        stage.style_of(el, "transform"),
        Some("translateX(75px) translateZ(0px)")
    );
}

/// it should settle immediately when released within the threshold of a
/// boundary, applying the after batch with no watch armed
#[test]
fn progress_end_near_boundary_settles_immediately() {
    let mut stage = TestStage::new();
    let mut anim = Animation::default();
    let root = swipe_node(&mut anim, &mut stage);
    let el = anim.node(root).targets()[0];
    anim.node_mut(root).after().add_class("open");
    let (finishes, on_finish) = counter();
    anim.node_mut(root).on_finish(on_finish, false, false);

    anim.progress_start(root, &mut stage);
    anim.progress_step(root, &mut stage, 0.02);
    anim.progress_end(root, &mut stage, true, 0.02);

    assert_eq!(stage.style_of(el, "opacity"), Some("1"));
    assert!(stage.has_class(el, "open"));
    assert_eq!(*finishes.borrow(), 1);
    assert!(anim.node(root).has_completed());
    assert!(stage.active_watches().is_empty());
    assert!(stage.pending_timers().is_empty());
}

/// it should report a cancelled near-boundary release as not completed
#[test]
fn cancelled_settled_release_reports_incomplete() {
    let mut stage = TestStage::new();
    let mut anim = Animation::default();
    let root = swipe_node(&mut anim, &mut stage);
    let el = anim.node(root).targets()[0];

    anim.progress_start(root, &mut stage);
    anim.progress_step(root, &mut stage, 0.03);
    anim.progress_end(root, &mut stage, false, 0.03);

    assert_eq!(stage.style_of(el, "opacity"), Some("0"));
    assert!(!anim.node(root).has_completed());
    assert!(!anim.node(root).is_playing());
}

/// it should arm a short watch for a mid-flight release and finish through
/// the fallback timer
#[test]
fn progress_end_midway_arms_a_short_watch() {
    let mut stage = TestStage::new();
    let mut anim = Animation::default();
    let root = swipe_node(&mut anim, &mut stage);
    let el = anim.node(root).targets()[0];
    anim.node_mut(root).after().add_class("open");
    let (finishes, on_finish) = counter();
    anim.node_mut(root).on_finish(on_finish, false, false);

    anim.progress_start(root, &mut stage);
    anim.progress_step(root, &mut stage, 0.5);
    anim.progress_end(root, &mut stage, true, 0.5);

    // Snapped to the endpoint under a short primed transition; completion
    // still pending.
    assert_eq!(stage.style_of(el, "opacity"), Some("1"));
    assert_eq!(stage.style_of(el, "transition-duration"), Some("64ms"));
    assert_eq!(stage.style_of(el, "transition-timing-function"), Some("linear"));
    assert!(!stage.has_class(el, "open"));
    assert_eq!(*finishes.borrow(), 0);
    assert_eq!(stage.active_watches().len(), 1);
    assert_eq!(stage.pending_timers().len(), 1);

    // 64 ms short transition + 400 ms padding
    for timer in stage.advance(500.0) {
        anim.timer_fired(&mut stage, timer);
    }
    assert!(stage.has_class(el, "open"));
    assert_eq!(*finishes.borrow(), 1);
    assert!(anim.node(root).has_completed());
}

/// it should snap to the end state on stop even while a cancelled scrub is
/// still landing
#[test]
fn stop_during_scrub_landing_snaps_to_the_end() {
    let mut stage = TestStage::new();
    let mut anim = Animation::default();
    let root = swipe_node(&mut anim, &mut stage);
    let el = anim.node(root).targets()[0];
    anim.node_mut(root).after().add_class("open");

    anim.progress_start(root, &mut stage);
    anim.progress_step(root, &mut stage, 0.4);
    anim.progress_end(root, &mut stage, false, 0.4);
    assert_eq!(stage.style_of(el, "opacity"), Some("0"));

    // Stop overrides the cancelled landing and forces full completion.
    anim.stop(root, &mut stage);
    assert_eq!(stage.style_of(el, "opacity"), Some("1"));
    assert!(stage.has_class(el, "open"));
    assert!(anim.node(root).has_completed());
    assert!(stage.active_watches().is_empty());
    assert!(stage.pending_timers().is_empty());
}

/// it should release an in-flight play watch when the caller switches to
/// scrubbing, so the stale fallback cannot double-finish
#[test]
fn progress_start_releases_an_inflight_play_watch() {
    let mut stage = TestStage::new();
    let mut anim = Animation::default();
    let root = swipe_node(&mut anim, &mut stage);
    let el = anim.node(root).targets()[0];
    anim.node_mut(root).duration(300.0);
    let (finishes, on_finish) = counter();
    anim.node_mut(root).on_finish(on_finish, false, false);

    anim.play(root, &mut stage, PlayOptions::default());
    while stage.take_frame_request() {
        anim.frame(&mut stage);
    }
    assert_eq!(stage.active_watches().len(), 1);
    assert_eq!(stage.pending_timers().len(), 1);

    anim.progress_start(root, &mut stage);
    assert!(stage.active_watches().is_empty());
    assert!(stage.pending_timers().is_empty());

    // Long past the abandoned cycle's fallback: nothing fires.
    for timer in stage.advance(800.0) {
        anim.timer_fired(&mut stage, timer);
    }
    assert_eq!(*finishes.borrow(), 0);

    anim.progress_step(root, &mut stage, 0.98);
    anim.progress_end(root, &mut stage, true, 0.98);
    assert_eq!(stage.style_of(el, "opacity"), Some("1"));
    assert_eq!(*finishes.borrow(), 1);
}

/// it should land a cancelled mid-flight release back at the start through
/// the native end event
#[test]
fn cancelled_midway_release_returns_to_start() {
    let mut stage = TestStage::new();
    let mut anim = Animation::default();
    let root = swipe_node(&mut anim, &mut stage);
    let el = anim.node(root).targets()[0];
    anim.node_mut(root).after().add_class("open");

    anim.progress_start(root, &mut stage);
    anim.progress_step(root, &mut stage, 0.4);
    anim.progress_end(root, &mut stage, false, 0.4);
    assert_eq!(stage.style_of(el, "opacity"), Some("0"));

    let (_, watch) = stage.active_watches()[0];
    anim.transition_ended(&mut stage, watch);
    assert!(stage.has_class(el, "open"));
    assert!(!anim.node(root).has_completed());
    assert!(!anim.node(root).is_playing());
    assert!(stage.pending_timers().is_empty());
}
