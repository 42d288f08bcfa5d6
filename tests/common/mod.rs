#![allow(dead_code)]

use ppv2::{Beatmap, HitObject, Pos2, TimingPoint};

/// Three circles on a default map.
pub fn three_circles() -> Beatmap {
    Beatmap {
        hit_objects: vec![
            circle(100.0, 100.0, 1000.0),
            circle(250.0, 150.0, 1250.0),
            circle(400.0, 100.0, 1500.0),
        ],
        ..Default::default()
    }
}

/// Jumps, a slider, a stream, a spinner, and a slider on a faster
/// inherited velocity.
///
/// 60 circles, 2 sliders, 1 spinner, max combo 68.
pub fn mixed() -> Beatmap {
    let mut hit_objects = Vec::with_capacity(63);
    let mut time = 2000.0;

    for i in 0..40 {
        let x = 64.0 + f64::from(i % 4) * 128.0;
        let y = if (i / 4) % 2 == 0 { 96.0 } else { 288.0 };
        hit_objects.push(circle(x, y, time));
        time += 150.0;
    }

    hit_objects.push(HitObject::slider(Pos2 { x: 256.0, y: 192.0 }, time, 280.0, 2));
    time += 900.0;

    for i in 0..20 {
        hit_objects.push(circle(200.0 + f64::from(i % 2) * 60.0, 200.0, time));
        time += 100.0;
    }

    hit_objects.push(HitObject::spinner(time, time + 1500.0));
    time += 2000.0;

    hit_objects.push(HitObject::slider(Pos2 { x: 100.0, y: 300.0 }, time, 140.0, 1));

    let timing_points = vec![
        TimingPoint {
            time: 0.0,
            beat_len: 300.0,
            change: true,
        },
        TimingPoint {
            time: time - 10.0,
            beat_len: -50.0,
            change: false,
        },
    ];

    Beatmap {
        ar: 9.0,
        od: 8.0,
        cs: 4.0,
        hp: 6.0,
        slider_multiplier: 1.4,
        tick_rate: 1.0,
        hit_objects,
        timing_points,
        ..Default::default()
    }
}

/// `n_circles` evenly timed jumps over a 5x3 grid.
pub fn jumps(n_circles: u32) -> Beatmap {
    let hit_objects = (0..n_circles)
        .map(|i| {
            let x = 64.0 + f64::from(i % 5) * 96.0;
            let y = 64.0 + f64::from(i % 3) * 128.0;

            circle(x, y, 1000.0 + f64::from(i) * 200.0)
        })
        .collect();

    Beatmap {
        ar: 9.5,
        od: 8.5,
        cs: 4.0,
        hp: 5.0,
        slider_multiplier: 1.4,
        tick_rate: 1.0,
        hit_objects,
        ..Default::default()
    }
}

pub fn jumps_150() -> Beatmap {
    jumps(150)
}

pub fn jumps_300() -> Beatmap {
    jumps(300)
}

pub fn jumps_600() -> Beatmap {
    jumps(600)
}

pub fn circle(x: f64, y: f64, time: f64) -> HitObject {
    HitObject::circle(Pos2 { x, y }, time)
}

/// Asserts that two floats agree up to a relative error.
///
/// Values are only computed with `f64` so the error stems from
/// differences in `powf` and friends between platforms.
#[track_caller]
pub fn assert_eq_float(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);

    assert!(
        (actual - expected).abs() < tolerance,
        "{actual} != {expected}"
    );
}

/// Compare calculated attributes against expected ones.
pub trait AssertEq {
    fn assert_eq(&self, expected: &Self);
}
