use crate::beatmap::BeatmapAttributes;

use super::{pp::OsuPP, score_state::OsuScoreState, ScoreVersion};

/// The result of a difficulty calculation on an osu!standard map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OsuDifficultyAttributes {
    /// The aim star rating.
    pub aim: f64,
    /// The speed star rating.
    pub speed: f64,
    /// The final star rating.
    pub stars: f64,
    /// Weighted sum of the aim strain peaks.
    pub aim_difficulty: f64,
    /// Sum of the aim strain peaks to the power of `1.2`.
    pub aim_total: f64,
    /// Length bonus of the aim skill.
    pub aim_length_bonus: f64,
    /// Weighted sum of the speed strain peaks.
    pub speed_difficulty: f64,
    /// Sum of the speed strain peaks to the power of `1.2`.
    pub speed_total: f64,
    /// Length bonus of the speed skill.
    pub speed_length_bonus: f64,
    /// The amount of objects that are spaced too far apart to be alternated.
    pub n_singles: u32,
    /// The amount of circles and sliders whose interval to the previous
    /// object reaches the single tap threshold.
    pub n_singles_threshold: u32,
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate.
    pub hp: f64,
    /// The clock rate with respect to mods.
    pub clock_rate: f64,
    /// The mods that were used.
    pub mods: u32,
    /// The amount of circles.
    pub n_circles: u32,
    /// The amount of sliders.
    pub n_sliders: u32,
    /// The amount of spinners.
    pub n_spinners: u32,
    /// The maximum combo.
    pub max_combo: u32,
}

impl OsuDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Return the amount of hitobjects.
    pub const fn n_objects(&self) -> u32 {
        self.n_circles + self.n_sliders + self.n_spinners
    }

    /// The mod-adjusted difficulty values.
    pub const fn beatmap_attributes(&self) -> BeatmapAttributes {
        BeatmapAttributes {
            ar: self.ar,
            od: self.od,
            cs: self.cs,
            hp: self.hp,
            clock_rate: self.clock_rate,
            mods: self.mods,
        }
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> OsuPP<'a> {
        OsuPP::from_attributes(self)
    }
}

/// The result of a performance calculation on an osu!standard map.
#[derive(Clone, Debug, PartialEq)]
pub struct OsuPerformanceAttributes {
    /// The difficulty attributes that were used for the performance calculation
    pub difficulty: OsuDifficultyAttributes,
    /// The final performance points.
    pub pp: f64,
    /// The accuracy portion of the final pp.
    pub pp_acc: f64,
    /// The aim portion of the final pp.
    pub pp_aim: f64,
    /// The speed portion of the final pp.
    pub pp_speed: f64,
    /// Accuracy between `0.0` and `1.0` of the resolved hit results.
    pub accuracy: f64,
    /// The hit results and combo the pp are based on.
    pub state: OsuScoreState,
    /// The score version that determined the accuracy portion.
    pub score_version: ScoreVersion,
}

impl OsuPerformanceAttributes {
    /// Return the star value.
    pub const fn stars(&self) -> f64 {
        self.difficulty.stars
    }

    /// Return the performance point value.
    pub const fn pp(&self) -> f64 {
        self.pp
    }

    /// Return the maximum combo of the map.
    pub const fn max_combo(&self) -> u32 {
        self.difficulty.max_combo
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> OsuPP<'a> {
        self.difficulty.into()
    }
}

impl From<OsuPerformanceAttributes> for OsuDifficultyAttributes {
    fn from(attributes: OsuPerformanceAttributes) -> Self {
        attributes.difficulty
    }
}
