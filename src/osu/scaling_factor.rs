use crate::beatmap::Pos2;

const PLAYFIELD_WIDTH: f64 = 512.0;
const PLAYFIELD_HEIGHT: f64 = 384.0;

const NORMALIZED_RADIUS: f64 = 52.0;

// non-normalized radius below which small circles get buffed
const CIRCLE_SIZE_BUFF_THRESHOLD: f64 = 30.0;

/// Scale that maps positions of any circle size onto a common circle size.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ScalingFactor {
    pub(crate) factor: f64,
}

impl ScalingFactor {
    pub(crate) fn new(cs: f64) -> Self {
        let radius = (PLAYFIELD_WIDTH / 16.0) * (1.0 - 0.7 * (cs - 5.0) / 5.0);
        let factor = NORMALIZED_RADIUS / radius;

        let factor = if radius < CIRCLE_SIZE_BUFF_THRESHOLD {
            factor * (1.0 + (CIRCLE_SIZE_BUFF_THRESHOLD - radius).min(5.0) / 50.0)
        } else {
            factor
        };

        Self { factor }
    }

    /// The scaled playfield center, used as position for spinners.
    ///
    /// This is the center of the full 512x384 field, i.e. `(256, 192)`,
    /// not `(256, 256)`.
    pub(crate) fn playfield_center(&self) -> Pos2 {
        let center = Pos2 {
            x: PLAYFIELD_WIDTH / 2.0,
            y: PLAYFIELD_HEIGHT / 2.0,
        };

        center * self.factor
    }
}
