use choreo_animation_core::{Animation, NodeId, PlayOptions};
use choreo_test_fixtures::TestStage;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_tree(anim: &mut Animation, stage: &mut TestStage, fanout: usize) -> NodeId {
    let root = anim.create_node();
    let el = stage.add_target("div");
    anim.element(root, stage, el);
    anim.node_mut(root)
        .duration(300.0)
        .from_to("opacity", "0", "1", false);
    for i in 0..fanout {
        let child = anim.create_node();
        let el = stage.add_target("span");
        anim.element(child, stage, el);
        anim.node_mut(child)
            .from_to("translateX", "0px", format!("{}px", 10 * (i + 1)).as_str(), false);
        anim.add(root, child);
    }
    root
}

fn bench_play_cycle(c: &mut Criterion) {
    c.bench_function("play_cycle_16_children", |b| {
        b.iter(|| {
            let mut stage = TestStage::new();
            let mut anim = Animation::default();
            let root = build_tree(&mut anim, &mut stage, 16);
            anim.play(root, &mut stage, PlayOptions::default());
            while stage.take_frame_request() {
                anim.frame(&mut stage);
            }
            for timer in stage.advance(1000.0) {
                anim.timer_fired(&mut stage, timer);
            }
            black_box(anim.node(root).has_completed())
        })
    });
}

fn bench_progress_scrub(c: &mut Criterion) {
    c.bench_function("progress_scrub_64_steps", |b| {
        b.iter(|| {
            let mut stage = TestStage::new();
            let mut anim = Animation::default();
            let root = build_tree(&mut anim, &mut stage, 16);
            anim.progress_start(root, &mut stage);
            for i in 0..64u32 {
                stage.advance(17.0);
                anim.progress_step(root, &mut stage, f64::from(i) / 64.0);
            }
            anim.progress_end(root, &mut stage, true, 0.98);
            black_box(anim.node(root).has_completed())
        })
    });
}

criterion_group!(benches, bench_play_cycle, bench_progress_scrub);
criterion_main!(benches);
