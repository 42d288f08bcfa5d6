use crate::{
    beatmap::Beatmap,
    error::{PpError, PpResult},
    mods::Mods,
};

use super::{
    attributes::{OsuDifficultyAttributes, OsuPerformanceAttributes},
    score_state::{hitresults_from_acc, OsuScoreState},
    stars::{OsuStars, DIFFICULTY_MULTIPLIER},
};

/// Determines which hit results the accuracy portion of the pp is based on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScoreVersion {
    /// Sliders and spinners count as free 300s and are excluded
    /// from the accuracy portion.
    #[default]
    V1,
    /// All objects count towards the accuracy portion.
    V2,
}

impl TryFrom<u32> for ScoreVersion {
    type Error = PpError;

    fn try_from(version: u32) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(PpError::UnsupportedScoreVersion(other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum MapOrAttrs<'map> {
    Map(&'map Beatmap),
    Attrs(OsuDifficultyAttributes),
}

/// Calculator for pp on osu!standard maps.
///
/// # Example
///
/// ```
/// # use ppv2::{OsuPP, Beatmap, HitObject, Pos2};
/// # /*
/// let map: Beatmap = ...
/// # */
/// # let map = Beatmap {
/// #     hit_objects: vec![
/// #         HitObject::circle(Pos2 { x: 0.0, y: 0.0 }, 0.0),
/// #         HitObject::circle(Pos2 { x: 200.0, y: 0.0 }, 200.0),
/// #     ],
/// #     ..Default::default()
/// # };
/// let attrs = OsuPP::new(&map)
///     .mods(8 + 64) // HDDT
///     .combo(2)
///     .misses(0)
///     .accuracy(98.5)
///     .calculate()
///     .unwrap();
///
/// println!("PP: {} | Stars: {}", attrs.pp(), attrs.stars());
///
/// let next_result = OsuPP::new(&map)
///     .attributes(attrs) // reusing previous results for performance
///     .mods(8 + 64)      // has to be the same to reuse attributes
///     .accuracy(99.5)
///     .calculate()
///     .unwrap();
///
/// println!("PP: {} | Stars: {}", next_result.pp(), next_result.stars());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct OsuPP<'map> {
    map_or_attrs: MapOrAttrs<'map>,
    mods: u32,
    combo: Option<u32>,
    acc: Option<f64>,

    n300: Option<u32>,
    n100: Option<u32>,
    n50: Option<u32>,
    n_misses: u32,
    score_version: u32,
}

impl<'map> OsuPP<'map> {
    /// Creates a new calculator for the given map.
    #[inline]
    pub const fn new(map: &'map Beatmap) -> Self {
        Self::with(MapOrAttrs::Map(map))
    }

    /// Creates a new calculator for the given attributes.
    #[inline]
    pub const fn from_attributes(attributes: OsuDifficultyAttributes) -> Self {
        Self::with(MapOrAttrs::Attrs(attributes))
    }

    const fn with(map_or_attrs: MapOrAttrs<'map>) -> Self {
        Self {
            map_or_attrs,
            mods: 0,
            combo: None,
            acc: None,
            n300: None,
            n100: None,
            n50: None,
            n_misses: 0,
            score_version: 1,
        }
    }

    /// Provide the result of a previous difficulty or performance calculation.
    /// If you already calculated the attributes for the current map-mod combination,
    /// be sure to put them in here so that they don't have to be recalculated.
    #[inline]
    pub fn attributes(mut self, attributes: impl OsuAttributeProvider) -> Self {
        if let Some(attributes) = attributes.attributes() {
            self.map_or_attrs = MapOrAttrs::Attrs(attributes);
        }

        self
    }

    /// Specify mods through their bit values.
    ///
    /// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
    #[inline]
    pub const fn mods(mut self, mods: u32) -> Self {
        self.mods = mods;

        self
    }

    /// Specify the max combo of the play.
    ///
    /// Defaults to the map's max combo for score version 2
    /// and to the map's max combo minus misses for score version 1.
    #[inline]
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Specify the amount of 300s of a play.
    ///
    /// Hit results are only used if 300s, 100s, and 50s are all specified.
    #[inline]
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of 100s of a play.
    #[inline]
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of 50s of a play.
    #[inline]
    pub const fn n50(mut self, n50: u32) -> Self {
        self.n50 = Some(n50);

        self
    }

    /// Specify the amount of misses of a play.
    #[inline]
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.n_misses = n_misses;

        self
    }

    /// Specify the accuracy of a play between `0.0` and `100.0`.
    /// Hit results will be generated based on this value and the misses.
    ///
    /// Ignored if 300s, 100s, and 50s are all specified.
    #[inline]
    pub const fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(acc);

        self
    }

    /// Specify the score version, either `1` or `2`. Defaults to `1`.
    ///
    /// Any other value makes the calculation fail.
    #[inline]
    pub const fn score_version(mut self, score_version: u32) -> Self {
        self.score_version = score_version;

        self
    }

    /// Provide parameters through an [`OsuScoreState`].
    #[inline]
    pub const fn state(mut self, state: OsuScoreState) -> Self {
        let OsuScoreState {
            max_combo,
            n300,
            n100,
            n50,
            n_misses,
        } = state;

        self.combo = Some(max_combo);
        self.n300 = Some(n300);
        self.n100 = Some(n100);
        self.n50 = Some(n50);
        self.n_misses = n_misses;

        self
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(self) -> PpResult<OsuPerformanceAttributes> {
        let score_version = ScoreVersion::try_from(self.score_version)?;

        let attributes = match self.map_or_attrs {
            MapOrAttrs::Map(map) => OsuStars::new(map).mods(self.mods).calculate()?,
            MapOrAttrs::Attrs(attributes) => attributes,
        };

        let n_objects = attributes.n_objects();

        if n_objects == 0 {
            return Err(PpError::EmptyMap);
        }

        if attributes.max_combo == 0 {
            return Err(PpError::NoCombo);
        }

        if self.n_misses > n_objects {
            tracing::warn!(
                misses = self.n_misses,
                n_objects,
                "misses exceed the amount of objects, capping"
            );
        }

        let n_misses = self.n_misses.min(n_objects);

        let (n300, n100, n50) = match (self.n300, self.n100, self.n50) {
            (Some(n300), Some(n100), Some(n50)) => (n300, n100, n50),
            _ => hitresults_from_acc(self.acc.unwrap_or(100.0), n_misses, n_objects),
        };

        let combo = match self.combo {
            Some(combo) if combo > attributes.max_combo => {
                tracing::warn!(
                    combo,
                    max_combo = attributes.max_combo,
                    "combo exceeds the max combo, capping"
                );

                attributes.max_combo
            }
            Some(combo) => combo,
            None => match score_version {
                ScoreVersion::V1 => attributes.max_combo.saturating_sub(n_misses),
                ScoreVersion::V2 => attributes.max_combo,
            },
        };

        let state = OsuScoreState {
            max_combo: combo,
            n300,
            n100,
            n50,
            n_misses,
        };

        let inner = OsuPpInner {
            attributes,
            mods: self.mods,
            state,
            acc: state.accuracy(),
            score_version,
        };

        let attrs = inner.calculate();

        tracing::debug!(
            pp = attrs.pp,
            aim = attrs.pp_aim,
            speed = attrs.pp_speed,
            acc = attrs.pp_acc,
            accuracy = attrs.accuracy,
            "calculated performance"
        );

        Ok(attrs)
    }
}

impl From<OsuDifficultyAttributes> for OsuPP<'_> {
    fn from(attributes: OsuDifficultyAttributes) -> Self {
        Self::from_attributes(attributes)
    }
}

struct OsuPpInner {
    attributes: OsuDifficultyAttributes,
    mods: u32,
    state: OsuScoreState,
    acc: f64,
    score_version: ScoreVersion,
}

impl OsuPpInner {
    fn calculate(self) -> OsuPerformanceAttributes {
        let n_objects = f64::from(self.attributes.n_objects());
        let n_spinners = f64::from(self.attributes.n_spinners);

        let mut multiplier = 1.12;

        // NF penalty
        if self.mods.nf() {
            multiplier *= (1.0 - 0.2 * f64::from(self.state.n_misses)).max(0.9);
        }

        // SO penalty
        if self.mods.so() {
            multiplier *= 1.0 - (n_spinners / n_objects).powf(0.85);
        }

        let aim_value = self.compute_aim_value(n_objects);
        let speed_value = self.compute_speed_value(n_objects);
        let acc_value = self.compute_accuracy_value();

        let pp = (aim_value.powf(1.1) + speed_value.powf(1.1) + acc_value.powf(1.1))
            .powf(1.0 / 1.1)
            * multiplier;

        OsuPerformanceAttributes {
            difficulty: self.attributes,
            pp,
            pp_acc: acc_value,
            pp_aim: aim_value,
            pp_speed: speed_value,
            accuracy: self.acc,
            state: self.state,
            score_version: self.score_version,
        }
    }

    fn compute_aim_value(&self, n_objects: f64) -> f64 {
        let attributes = &self.attributes;

        let mut aim_value = base_value(attributes.aim);

        // Longer maps are worth more
        aim_value *= length_bonus(n_objects);

        // Penalize misses
        if self.state.n_misses > 0 {
            let n_misses = f64::from(self.state.n_misses);
            aim_value *= 0.97 * miss_penalty_base(n_misses, n_objects).powf(n_misses);
        }

        aim_value *= self.combo_break();

        // AR bonus
        let ar_factor = ar_bonus(attributes.ar);
        aim_value *= 1.0 + ar_factor.min(ar_factor * (n_objects / 1000.0));

        // HD bonus
        if self.mods.hd() {
            aim_value *= hidden_bonus(attributes.ar);
        }

        // FL bonus
        if self.mods.fl() {
            let mut fl_bonus = 1.0 + 0.35 * (n_objects / 200.0).min(1.0);

            if n_objects > 200.0 {
                fl_bonus += 0.3 * ((n_objects - 200.0) / 300.0).min(1.0);
            }

            if n_objects > 500.0 {
                fl_bonus += (n_objects - 500.0) / 1200.0;
            }

            aim_value *= fl_bonus;
        }

        // Scale with accuracy
        aim_value *= 0.5 + self.acc / 2.0;
        aim_value *= 0.98 + attributes.od * attributes.od / 2500.0;

        aim_value
    }

    fn compute_speed_value(&self, n_objects: f64) -> f64 {
        let attributes = &self.attributes;

        let mut speed_value = base_value(attributes.speed);

        // Longer maps are worth more
        speed_value *= length_bonus(n_objects);

        // Penalize misses
        if self.state.n_misses > 0 {
            let n_misses = f64::from(self.state.n_misses);
            speed_value *=
                0.97 * miss_penalty_base(n_misses, n_objects).powf(n_misses.powf(0.875));
        }

        speed_value *= self.combo_break();

        // High AR bonus
        if attributes.ar > 10.33 {
            let ar_factor = ar_bonus(attributes.ar);
            speed_value *= 1.0 + ar_factor.min(ar_factor * (n_objects / 1000.0));
        }

        // HD bonus
        if self.mods.hd() {
            speed_value *= hidden_bonus(attributes.ar);
        }

        // Scaling the speed value with accuracy and OD
        speed_value *= (0.95 + attributes.od * attributes.od / 750.0)
            * self.acc.powf((14.5 - attributes.od.max(8.0)) / 2.0);

        // Penalize 50s to punish doubletapping
        let n50 = f64::from(self.state.n50);

        if n50 >= n_objects / 500.0 {
            speed_value *= 0.98_f64.powf(n50 - n_objects / 500.0);
        }

        speed_value
    }

    fn compute_accuracy_value(&self) -> f64 {
        let attributes = &self.attributes;
        let OsuScoreState {
            n300,
            n100,
            n50,
            n_misses,
            ..
        } = self.state;

        let (real_acc, n_circles) = match self.score_version {
            ScoreVersion::V1 => {
                // Sliders and spinners are free 300s, the remainder may be negative
                let n300 = i64::from(n300)
                    - i64::from(attributes.n_sliders)
                    - i64::from(attributes.n_spinners);
                let (n100, n50) = (i64::from(n100), i64::from(n50));
                let total = n300 + n100 + n50 + i64::from(n_misses);

                let real_acc = if total > 0 {
                    (50 * n50 + 100 * n100 + 300 * n300) as f64 / (300 * total) as f64
                } else {
                    0.0
                };

                (real_acc.max(0.0), attributes.n_circles)
            }
            ScoreVersion::V2 => (self.acc, attributes.n_objects()),
        };

        let mut acc_value = 1.52163_f64.powf(attributes.od) * real_acc.powi(24) * 2.83;

        // Bonus for many hitcircles
        acc_value *= (f64::from(n_circles) / 1000.0).powf(0.3).min(1.15);

        // HD bonus
        if self.mods.hd() {
            acc_value *= 1.08;
        }

        // FL bonus
        if self.mods.fl() {
            acc_value *= 1.02;
        }

        acc_value
    }

    fn combo_break(&self) -> f64 {
        (f64::from(self.state.max_combo) / f64::from(self.attributes.max_combo)).powf(0.8)
    }
}

#[inline]
fn base_value(stars: f64) -> f64 {
    (5.0 * (stars / DIFFICULTY_MULTIPLIER).max(1.0) - 4.0).powi(3) / 100_000.0
}

#[inline]
fn length_bonus(n_objects: f64) -> f64 {
    let over_2k = n_objects / 2000.0;
    let mut bonus = 0.95 + 0.4 * over_2k.min(1.0);

    if n_objects > 2000.0 {
        bonus += over_2k.log10() * 0.5;
    }

    bonus
}

#[inline]
fn miss_penalty_base(n_misses: f64, n_objects: f64) -> f64 {
    1.0 - (n_misses / n_objects).powf(0.775)
}

#[inline]
fn ar_bonus(ar: f64) -> f64 {
    if ar > 10.33 {
        0.4 * (ar - 10.33)
    } else if ar < 8.0 {
        0.1 * (8.0 - ar)
    } else {
        0.0
    }
}

#[inline]
fn hidden_bonus(ar: f64) -> f64 {
    1.0 + 0.04 * (12.0 - ar)
}

/// Provides attributes for an osu!standard beatmap.
pub trait OsuAttributeProvider {
    /// Returns the attributes of the map.
    fn attributes(self) -> Option<OsuDifficultyAttributes>;
}

impl OsuAttributeProvider for OsuDifficultyAttributes {
    #[inline]
    fn attributes(self) -> Option<OsuDifficultyAttributes> {
        Some(self)
    }
}

impl OsuAttributeProvider for OsuPerformanceAttributes {
    #[inline]
    fn attributes(self) -> Option<OsuDifficultyAttributes> {
        Some(self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes() -> OsuDifficultyAttributes {
        OsuDifficultyAttributes {
            aim: 2.5,
            speed: 2.0,
            stars: 4.75,
            ar: 9.0,
            od: 8.0,
            cs: 4.0,
            hp: 5.0,
            clock_rate: 1.0,
            n_circles: 400,
            n_sliders: 100,
            n_spinners: 2,
            max_combo: 700,
            ..Default::default()
        }
    }

    #[test]
    fn score_versions() {
        assert_eq!(ScoreVersion::try_from(1_u32), Ok(ScoreVersion::V1));
        assert_eq!(ScoreVersion::try_from(2_u32), Ok(ScoreVersion::V2));
        assert_eq!(
            ScoreVersion::try_from(3_u32),
            Err(PpError::UnsupportedScoreVersion(3))
        );
    }

    #[test]
    fn unknown_score_version_fails() {
        let result = OsuPP::from_attributes(attributes())
            .score_version(0)
            .calculate();

        assert_eq!(result, Err(PpError::UnsupportedScoreVersion(0)));
    }

    #[test]
    fn empty_attributes_fail() {
        let result = OsuPP::from_attributes(OsuDifficultyAttributes::default()).calculate();

        assert_eq!(result, Err(PpError::EmptyMap));
    }

    #[test]
    fn default_combo_per_version() {
        let v1 = OsuPP::from_attributes(attributes())
            .misses(3)
            .calculate()
            .unwrap();

        assert_eq!(v1.state.max_combo, 697);

        let v2 = OsuPP::from_attributes(attributes())
            .misses(3)
            .score_version(2)
            .calculate()
            .unwrap();

        assert_eq!(v2.state.max_combo, 700);
    }

    #[test]
    fn explicit_hitresults() {
        let attrs = OsuPP::from_attributes(attributes())
            .n300(490)
            .n100(10)
            .n50(1)
            .misses(1)
            .accuracy(50.0)
            .calculate()
            .unwrap();

        assert_eq!(attrs.state.n300, 490);
        assert_eq!(attrs.state.n100, 10);
        assert_eq!(attrs.state.n50, 1);

        let expected = (490.0 * 300.0 + 10.0 * 100.0 + 50.0) / (502.0 * 300.0);
        assert!((attrs.accuracy - expected).abs() < 1e-12);
    }

    #[test]
    fn partial_hitresults_use_accuracy() {
        let attrs = OsuPP::from_attributes(attributes())
            .n100(10)
            .accuracy(100.0)
            .calculate()
            .unwrap();

        assert_eq!(attrs.state.n300, 502);
        assert_eq!(attrs.state.n100, 0);
    }

    #[test]
    fn combo_is_capped() {
        let attrs = OsuPP::from_attributes(attributes())
            .combo(10_000)
            .calculate()
            .unwrap();

        assert_eq!(attrs.state.max_combo, 700);
    }

    #[test]
    fn all_misses_stay_finite() {
        let attrs = OsuPP::from_attributes(attributes())
            .misses(502)
            .mods(u32::NF | u32::SO)
            .calculate()
            .unwrap();

        assert!(attrs.accuracy.abs() < f64::EPSILON);
        assert!(attrs.pp_aim.abs() < f64::EPSILON);
        assert!(attrs.pp_speed.abs() < f64::EPSILON);

        for value in [attrs.pp, attrs.pp_aim, attrs.pp_speed, attrs.pp_acc] {
            assert!(value.is_finite() && value >= 0.0, "{value}");
        }
    }

    #[test]
    fn v1_accuracy_counts_missing_300s_against_circles() {
        let attributes = OsuDifficultyAttributes {
            od: 8.0,
            n_circles: 100,
            n_sliders: 300,
            max_combo: 400,
            ..Default::default()
        };

        let attrs = OsuPP::from_attributes(attributes)
            .n300(290)
            .n100(110)
            .n50(0)
            .calculate()
            .unwrap();

        // (300 * (290 - 300) + 100 * 110) / (300 * (290 - 300 + 110))
        let real_acc: f64 = 8000.0 / 30_000.0;
        let expected = 1.52163_f64.powf(8.0) * real_acc.powi(24) * 2.83 * 0.1_f64.powf(0.3);

        assert!(
            ((attrs.pp_acc - expected) / expected).abs() < 1e-6,
            "{} vs {expected}",
            attrs.pp_acc
        );
        assert!(((attrs.pp_acc - 6.815_669_249_359_836e-13) / expected).abs() < 1e-6);
    }

    #[test]
    fn v1_accuracy_is_clamped_at_zero() {
        let attributes = OsuDifficultyAttributes {
            n_circles: 10,
            n_sliders: 40,
            max_combo: 60,
            ..Default::default()
        };

        let attrs = OsuPP::from_attributes(attributes)
            .n300(0)
            .n100(0)
            .n50(50)
            .calculate()
            .unwrap();

        assert!(attrs.pp_acc.abs() < f64::EPSILON, "{}", attrs.pp_acc);
    }

    #[test]
    fn length_bonus_beyond_2000() {
        assert!((length_bonus(1000.0) - 1.15).abs() < 1e-12);
        assert!((length_bonus(4000.0) - (1.35 + 2.0_f64.log10() * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn ar_bonus_ranges() {
        assert!(ar_bonus(9.0).abs() < f64::EPSILON);
        assert!((ar_bonus(11.0) - 0.4 * 0.67).abs() < 1e-12);
        assert!((ar_bonus(7.0) - 0.1).abs() < 1e-12);
    }
}
