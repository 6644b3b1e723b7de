use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};

use flycam::{Button, Controller, FlyCam, Transform};

/// Worst realistic frame: full movement plus an active drag.
struct Busy {
    pointer: Vec2,
}

impl Controller for Busy {
    fn is_down(&self, button: Button) -> bool {
        matches!(
            button,
            Button::KeyW | Button::KeyD | Button::KeyE | Button::Shift | Button::MouseLeft
        )
    }

    fn just_pressed(&self, _button: Button) -> bool {
        false
    }

    fn just_released(&self, _button: Button) -> bool {
        false
    }

    fn pointer_position(&self) -> Option<Vec2> {
        Some(self.pointer)
    }
}

fn bench_update(c: &mut Criterion) {
    let mut cam = FlyCam::new();
    let mut target = Transform::new(Vec3::ZERO, 0.3, -0.1);
    let input = Busy {
        pointer: Vec2::new(320.0, 240.0),
    };

    c.bench_function("flycam_update", |b| {
        b.iter(|| {
            cam.update(black_box(&mut target), &input, 1.0 / 60.0);
        })
    });

    c.bench_function("transform_compose", |b| {
        let parent = Transform::new(Vec3::new(1.0, 2.0, 3.0), 0.5, 0.2);
        let child = Transform::new(Vec3::new(0.0, 1.6, 0.0), 0.1, -0.1);
        b.iter(|| black_box(parent).compose(black_box(&child)))
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
