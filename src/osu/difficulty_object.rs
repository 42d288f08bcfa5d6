use super::osu_object::OsuObject;

// jumps further than this are too far apart to be alternated comfortably
pub(crate) const SINGLE_SPACING_THRESHOLD: f64 = 125.0;

/// Relation between an object and its predecessor.
#[derive(Clone, Debug)]
pub(crate) struct DifficultyObject<'h> {
    pub(crate) base: &'h OsuObject,
    /// Time since the previous object, adjusted by the clock rate.
    pub(crate) delta: f64,
    /// Normalized distance to the previous object. `0.0` for spinners.
    pub(crate) dist: f64,
    /// `(dist, delta)` of the previous object, zeroes for the second object.
    pub(crate) prev: (f64, f64),
    pub(crate) is_single: bool,
}

impl<'h> DifficultyObject<'h> {
    pub(crate) fn new(
        base: &'h OsuObject,
        prev: &OsuObject,
        prev_vals: Option<(f64, f64)>,
        clock_rate: f64,
    ) -> Self {
        let delta = (base.time - prev.time) / clock_rate;

        let dist = if base.is_spinner() {
            0.0
        } else {
            base.pos.distance(prev.pos)
        };

        Self {
            base,
            delta,
            dist,
            prev: prev_vals.unwrap_or((0.0, 0.0)),
            is_single: dist > SINGLE_SPACING_THRESHOLD,
        }
    }

    #[inline]
    pub(crate) fn angle(&self) -> Option<f64> {
        self.base.angle
    }
}

/// Build the difficulty objects for every object but the first.
pub(crate) fn difficulty_objects(
    objects: &[OsuObject],
    clock_rate: f64,
) -> Vec<DifficultyObject<'_>> {
    let mut diff_objects: Vec<DifficultyObject<'_>> =
        Vec::with_capacity(objects.len().saturating_sub(1));

    for (prev, curr) in objects.iter().zip(objects.iter().skip(1)) {
        let prev_vals = diff_objects.last().map(|h| (h.dist, h.delta));
        diff_objects.push(DifficultyObject::new(curr, prev, prev_vals, clock_rate));
    }

    diff_objects
}

#[cfg(test)]
mod tests {
    use crate::beatmap::Pos2;

    use super::*;
    use crate::osu::osu_object::OsuObjectKind;

    fn object(x: f64, y: f64, time: f64, kind: OsuObjectKind) -> OsuObject {
        OsuObject {
            time,
            pos: Pos2 { x, y },
            angle: None,
            kind,
        }
    }

    #[test]
    fn deltas_and_previous_values() {
        let objects = [
            object(0.0, 0.0, 0.0, OsuObjectKind::Circle),
            object(150.0, 0.0, 150.0, OsuObjectKind::Circle),
            object(150.0, 100.0, 300.0, OsuObjectKind::Slider),
            object(200.0, 200.0, 600.0, OsuObjectKind::Spinner),
        ];

        let diff_objects = difficulty_objects(&objects, 1.5);

        assert_eq!(diff_objects.len(), 3);

        assert!((diff_objects[0].delta - 100.0).abs() < 1e-12);
        assert!((diff_objects[0].dist - 150.0).abs() < 1e-12);
        assert!(diff_objects[0].is_single);
        assert_eq!(diff_objects[0].prev, (0.0, 0.0));

        assert!((diff_objects[1].dist - 100.0).abs() < 1e-12);
        assert!(!diff_objects[1].is_single);
        assert!((diff_objects[1].prev.0 - 150.0).abs() < 1e-12);
        assert!((diff_objects[1].prev.1 - 100.0).abs() < 1e-12);

        assert!((diff_objects[2].dist).abs() < f64::EPSILON);
        assert!((diff_objects[2].delta - 200.0).abs() < 1e-12);
    }
}
