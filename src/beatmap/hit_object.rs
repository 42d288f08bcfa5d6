use super::Pos2;

/// A hit object as provided by the parser.
///
/// Objects of a [`Beatmap`](crate::Beatmap) must be ordered by their start time.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    /// Position in the 512x384 playfield. Meaningless for spinners.
    pub pos: Pos2,
    /// Start time in milliseconds.
    pub start_time: f64,
    /// Kind-specific data.
    pub kind: HitObjectKind,
}

/// Further data related to specific object types.
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider {
        /// Length of the slider path in osu!pixels.
        pixel_len: f64,
        /// How often the path is traversed, at least `1`.
        repeats: u32,
    },
    Spinner {
        end_time: f64,
    },
}

impl HitObject {
    /// Create a circle.
    #[inline]
    pub const fn circle(pos: Pos2, start_time: f64) -> Self {
        Self {
            pos,
            start_time,
            kind: HitObjectKind::Circle,
        }
    }

    /// Create a slider.
    #[inline]
    pub const fn slider(pos: Pos2, start_time: f64, pixel_len: f64, repeats: u32) -> Self {
        Self {
            pos,
            start_time,
            kind: HitObjectKind::Slider { pixel_len, repeats },
        }
    }

    /// Create a spinner.
    #[inline]
    pub fn spinner(start_time: f64, end_time: f64) -> Self {
        Self {
            pos: Pos2::zero(),
            start_time,
            kind: HitObjectKind::Spinner { end_time },
        }
    }

    #[inline]
    pub fn end_time(&self) -> f64 {
        match self.kind {
            HitObjectKind::Circle | HitObjectKind::Slider { .. } => self.start_time,
            HitObjectKind::Spinner { end_time } => end_time,
        }
    }

    #[inline]
    pub const fn is_circle(&self) -> bool {
        matches!(self.kind, HitObjectKind::Circle)
    }

    #[inline]
    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, HitObjectKind::Slider { .. })
    }

    #[inline]
    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, HitObjectKind::Spinner { .. })
    }
}
