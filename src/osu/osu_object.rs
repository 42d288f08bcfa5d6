use crate::beatmap::{HitObject, HitObjectKind, Pos2};

use super::scaling_factor::ScalingFactor;

/// A hit object whose position is normalized w.r.t. circle size.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct OsuObject {
    pub(crate) time: f64,
    pub(crate) pos: Pos2,
    /// Turning angle at the previous object. `None` for the first two objects.
    pub(crate) angle: Option<f64>,
    pub(crate) kind: OsuObjectKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OsuObjectKind {
    Circle,
    Slider,
    Spinner,
}

impl OsuObject {
    #[inline]
    pub(crate) fn is_spinner(&self) -> bool {
        self.kind == OsuObjectKind::Spinner
    }
}

/// Scale all positions by the scaling factor and compute the angle between
/// each object and its two predecessors.
///
/// Spinners are placed onto the scaled playfield center.
pub(crate) fn normalize(hit_objects: &[HitObject], scaling: &ScalingFactor) -> Vec<OsuObject> {
    let center = scaling.playfield_center();
    let mut objects: Vec<OsuObject> = Vec::with_capacity(hit_objects.len());

    for h in hit_objects {
        let (pos, kind) = match h.kind {
            HitObjectKind::Circle => (h.pos * scaling.factor, OsuObjectKind::Circle),
            HitObjectKind::Slider { .. } => (h.pos * scaling.factor, OsuObjectKind::Slider),
            HitObjectKind::Spinner { .. } => (center, OsuObjectKind::Spinner),
        };

        let angle = match objects.as_slice() {
            [.., prev_prev, prev] => Some(angle_between(prev_prev.pos, prev.pos, pos)),
            _ => None,
        };

        objects.push(OsuObject {
            time: h.start_time,
            pos,
            angle,
            kind,
        });
    }

    objects
}

/// Angle at `prev` of the triangle spanned by the three positions, in `[0, PI]`.
fn angle_between(prev_prev: Pos2, prev: Pos2, curr: Pos2) -> f64 {
    let v1 = prev_prev - prev;
    let v2 = curr - prev;

    v1.cross(v2).atan2(v1.dot(v2)).abs()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn circle(x: f64, y: f64, time: f64) -> HitObject {
        HitObject::circle(Pos2 { x, y }, time)
    }

    #[test]
    fn first_two_have_no_angle() {
        let hit_objects = [
            circle(0.0, 0.0, 0.0),
            circle(100.0, 0.0, 100.0),
            circle(100.0, 100.0, 200.0),
        ];

        let objects = normalize(&hit_objects, &ScalingFactor::new(5.0));

        assert_eq!(objects[0].angle, None);
        assert_eq!(objects[1].angle, None);

        let angle = objects[2].angle.unwrap();
        assert!((angle - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn straight_line_and_back() {
        let hit_objects = [
            circle(0.0, 0.0, 0.0),
            circle(100.0, 0.0, 100.0),
            circle(200.0, 0.0, 200.0),
            circle(100.0, 0.0, 300.0),
        ];

        let objects = normalize(&hit_objects, &ScalingFactor::new(5.0));

        assert!((objects[2].angle.unwrap() - PI).abs() < 1e-12);
        assert!(objects[3].angle.unwrap().abs() < 1e-12);
    }

    #[test]
    fn positions_are_scaled() {
        let scaling = ScalingFactor::new(4.0);
        let hit_objects = [circle(100.0, 50.0, 0.0), HitObject::spinner(100.0, 500.0)];

        let objects = normalize(&hit_objects, &scaling);

        assert!((objects[0].pos.x - 100.0 * scaling.factor).abs() < 1e-12);
        assert!((objects[0].pos.y - 50.0 * scaling.factor).abs() < 1e-12);
        assert!((objects[1].pos.x - 256.0 * scaling.factor).abs() < 1e-12);
        assert!((objects[1].pos.y - 192.0 * scaling.factor).abs() < 1e-12);
        assert!(objects[1].is_spinner());
    }
}
