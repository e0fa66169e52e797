use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tweenline_core::{ease_out, tween, AnimationSpec, Animator, Config};

fn pump_1000_animations(c: &mut Criterion) {
    c.bench_function("frame_pump_1000_live", |b| {
        b.iter_batched(
            || {
                let mut animator = Animator::new(Config {
                    animations_capacity: 1024,
                    ..Config::default()
                });
                for i in 0..1000u32 {
                    let from = i as f64;
                    let to = from * 2.0;
                    animator.animate(AnimationSpec::new(1000.0).on_tick(move |p| {
                        black_box(tween(ease_out(p), from, to));
                    }));
                }
                animator.frame(0.0); // anchor frame
                animator
            },
            |mut animator| {
                for frame in 1..=16u32 {
                    animator.frame(f64::from(frame) * 16.0);
                }
                animator
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, pump_1000_animations);
criterion_main!(benches);
