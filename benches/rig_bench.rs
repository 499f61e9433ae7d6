#![allow(missing_docs, unused_results)]

use std::hint::black_box;

use anchorcam::camera::{CameraRig, OrbitCameraRig, Pose};
use anchorcam::input::{ButtonState, FrameInput, InputEvent, InputProcessor, Viewport};
use anchorcam::options::{CameraOptions, InputOptions};
use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

fn drag_frame(right: bool) -> FrameInput {
    let button = ButtonState::HELD;
    FrameInput {
        mouse_delta: Vec2::new(0.3, -0.1),
        right: if right { button } else { ButtonState::default() },
        middle: if right { ButtonState::default() } else { button },
        scroll: 0.05,
        pointer_position: Some(Vec2::new(400.0, 300.0)),
        viewport: Viewport::new(800.0, 600.0),
        ..FrameInput::default()
    }
}

fn rig_frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rig_frame");
    let camera =
        Pose::looking_at(Vec3::new(0.0, 4.0, -8.0), Vec3::ZERO, Vec3::Y);

    for (name, right) in [("orbit", true), ("pan", false)] {
        let mut rig =
            OrbitCameraRig::attached_to(&CameraOptions::default(), camera);
        let press = FrameInput {
            right: if right { ButtonState::JUST_PRESSED } else { ButtonState::default() },
            middle: if right { ButtonState::default() } else { ButtonState::JUST_PRESSED },
            ..drag_frame(right)
        };
        rig.on_frame(&press, DT);
        let input = drag_frame(right);

        group.bench_function(name, |b| {
            b.iter(|| {
                rig.on_frame(black_box(&input), DT);
                rig.on_late_frame(DT);
                black_box(rig.camera_pose().view_matrix())
            });
        });
    }
    group.finish();
}

fn input_snapshot_benchmark(c: &mut Criterion) {
    let mut input = InputProcessor::new(InputOptions::default());
    input.handle_event(InputEvent::Resized {
        width: 1920.0,
        height: 1080.0,
    });

    c.bench_function("input_snapshot_100_events", |b| {
        b.iter(|| {
            for i in 0..100 {
                let t = i as f32;
                input.handle_event(InputEvent::CursorMoved {
                    x: 960.0 + t,
                    y: 540.0 - t,
                });
            }
            black_box(input.snapshot())
        });
    });
}

criterion_group!(benches, rig_frame_benchmark, input_snapshot_benchmark);
criterion_main!(benches);
