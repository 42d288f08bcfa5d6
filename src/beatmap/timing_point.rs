/// A timing section of the map.
///
/// Uninherited points define a new beat length in `beat_len`.
/// Inherited points carry a negative `beat_len` which encodes a slider velocity
/// multiplier of `-100 / beat_len`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimingPoint {
    /// Start time in milliseconds.
    pub time: f64,
    /// Milliseconds per beat, or a negative velocity multiplier for inherited points.
    pub beat_len: f64,
    /// Whether the point defines a new beat length i.e. is uninherited.
    pub change: bool,
}

impl TimingPoint {
    pub const DEFAULT_SLIDER_VELOCITY: f64 = 1.0;

    /// The slider velocity multiplier this point applies.
    #[inline]
    pub fn slider_velocity(&self) -> f64 {
        if !self.change && self.beat_len < 0.0 {
            -100.0 / self.beat_len
        } else {
            Self::DEFAULT_SLIDER_VELOCITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimingPoint;

    #[test]
    fn inherited_velocity() {
        let point = TimingPoint {
            time: 0.0,
            beat_len: -50.0,
            change: false,
        };

        assert!((point.slider_velocity() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn uninherited_velocity() {
        let point = TimingPoint {
            time: 0.0,
            beat_len: 300.0,
            change: true,
        };

        assert!((point.slider_velocity() - 1.0).abs() < f64::EPSILON);

        // a negative beat length on an uninherited point is not a multiplier
        let point = TimingPoint {
            beat_len: -50.0,
            ..point
        };

        assert!((point.slider_velocity() - 1.0).abs() < f64::EPSILON);
    }
}
