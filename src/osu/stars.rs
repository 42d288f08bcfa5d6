use crate::{
    beatmap::{Beatmap, GameMode},
    error::{PpError, PpResult},
    mods::Mods,
};

use super::{
    attributes::OsuDifficultyAttributes,
    combo::count_combo,
    difficulty_object::{difficulty_objects, DifficultyObject},
    osu_object::normalize,
    scaling_factor::ScalingFactor,
    skill::Skill,
    skill_kind::SkillKind,
};

const SECTION_LEN: f64 = 400.0;

pub(crate) const DIFFICULTY_MULTIPLIER: f64 = 0.0675;

// default interval in milliseconds from which on an object counts as single tapped
const DEFAULT_SINGLETAP_THRESHOLD: f64 = 125.0;

/// Difficulty calculator on osu!standard maps.
///
/// # Example
///
/// ```
/// use ppv2::{Beatmap, HitObject, OsuStars, Pos2};
///
/// let map = Beatmap {
///     hit_objects: vec![
///         HitObject::circle(Pos2 { x: 64.0, y: 64.0 }, 0.0),
///         HitObject::circle(Pos2 { x: 256.0, y: 192.0 }, 150.0),
///     ],
///     ..Default::default()
/// };
///
/// let attrs = OsuStars::new(&map)
///     .mods(16) // HR
///     .singletap_threshold(100.0)
///     .calculate()
///     .unwrap();
///
/// println!("Stars: {}", attrs.stars);
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct OsuStars<'map> {
    map: &'map Beatmap,
    mods: u32,
    singletap_threshold: f64,
}

impl<'map> OsuStars<'map> {
    /// Create a new difficulty calculator for osu!standard maps.
    #[inline]
    pub const fn new(map: &'map Beatmap) -> Self {
        Self {
            map,
            mods: 0,
            singletap_threshold: DEFAULT_SINGLETAP_THRESHOLD,
        }
    }

    /// Specify mods through their bit values.
    ///
    /// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
    #[inline]
    pub const fn mods(mut self, mods: u32) -> Self {
        self.mods = mods;

        self
    }

    /// Interval in milliseconds, adjusted by the clock rate, from which on
    /// an object is counted in [`OsuDifficultyAttributes::n_singles_threshold`].
    ///
    /// Defaults to `125.0`.
    #[inline]
    pub const fn singletap_threshold(mut self, threshold: f64) -> Self {
        self.singletap_threshold = threshold;

        self
    }

    /// Calculate all difficulty related values, including stars.
    pub fn calculate(self) -> PpResult<OsuDifficultyAttributes> {
        let map = self.map;

        if map.mode != GameMode::Osu {
            return Err(PpError::UnsupportedMode(map.mode));
        }

        let Some(first) = map.hit_objects.first() else {
            return Err(PpError::EmptyMap);
        };

        let map_attrs = map.attributes().mods(self.mods);
        let clock_rate = map_attrs.clock_rate;
        let combo = count_combo(map);

        let scaling = ScalingFactor::new(map_attrs.cs);
        let objects = normalize(&map.hit_objects, &scaling);
        let diff_objects = difficulty_objects(&objects, clock_rate);

        let section_len = SECTION_LEN * clock_rate;
        let (mut aim, mut speed) = calculate_skills(first.start_time, &diff_objects, section_len);

        let aim_values = aim.difficulty_values();
        let speed_values = speed.difficulty_values();

        let mut aim_rating = aim_values.difficulty.sqrt() * DIFFICULTY_MULTIPLIER;
        let speed_rating = speed_values.difficulty.sqrt() * DIFFICULTY_MULTIPLIER;

        if self.mods.td() {
            aim_rating = aim_rating.powf(0.8);
        }

        let stars = aim_rating + speed_rating + (aim_rating - speed_rating).abs() / 2.0;

        let (n_singles, n_singles_threshold) =
            count_singles(&diff_objects, self.singletap_threshold);

        let attrs = OsuDifficultyAttributes {
            aim: aim_rating,
            speed: speed_rating,
            stars,
            aim_difficulty: aim_values.difficulty,
            aim_total: aim_values.total,
            aim_length_bonus: aim_values.length_bonus(),
            speed_difficulty: speed_values.difficulty,
            speed_total: speed_values.total,
            speed_length_bonus: speed_values.length_bonus(),
            n_singles,
            n_singles_threshold,
            ar: map_attrs.ar,
            od: map_attrs.od,
            cs: map_attrs.cs,
            hp: map_attrs.hp,
            clock_rate,
            mods: self.mods,
            n_circles: combo.n_circles,
            n_sliders: combo.n_sliders,
            n_spinners: combo.n_spinners,
            max_combo: combo.max_combo,
        };

        tracing::debug!(
            stars = attrs.stars,
            aim = attrs.aim,
            speed = attrs.speed,
            max_combo = attrs.max_combo,
            mods = attrs.mods,
            "calculated difficulty"
        );

        Ok(attrs)
    }
}

/// Calculate the difficulty attributes of `map` for the given mods.
#[inline]
pub fn stars(map: &Beatmap, mods: u32) -> PpResult<OsuDifficultyAttributes> {
    OsuStars::new(map).mods(mods).calculate()
}

#[cfg(not(feature = "parallel"))]
fn calculate_skills(
    first_time: f64,
    diff_objects: &[DifficultyObject<'_>],
    section_len: f64,
) -> (Skill, Skill) {
    let aim = Skill::calculate(SkillKind::Aim, first_time, diff_objects, section_len);
    let speed = Skill::calculate(SkillKind::Speed, first_time, diff_objects, section_len);

    (aim, speed)
}

#[cfg(feature = "parallel")]
fn calculate_skills(
    first_time: f64,
    diff_objects: &[DifficultyObject<'_>],
    section_len: f64,
) -> (Skill, Skill) {
    rayon::join(
        || Skill::calculate(SkillKind::Aim, first_time, diff_objects, section_len),
        || Skill::calculate(SkillKind::Speed, first_time, diff_objects, section_len),
    )
}

/// Count objects that are spaced too far apart to alternate, and circles
/// and sliders whose interval reaches `threshold`.
fn count_singles(diff_objects: &[DifficultyObject<'_>], threshold: f64) -> (u32, u32) {
    diff_objects
        .iter()
        .fold((0, 0), |(n_singles, n_threshold), h| {
            let n_singles = n_singles + u32::from(h.is_single);

            let n_threshold = if !h.base.is_spinner() && h.delta >= threshold {
                n_threshold + 1
            } else {
                n_threshold
            };

            (n_singles, n_threshold)
        })
}
