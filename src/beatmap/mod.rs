pub use self::{
    attributes::{ApplyFlags, BeatmapAttributes},
    hit_object::{HitObject, HitObjectKind},
    mode::GameMode,
    pos2::Pos2,
    timing_point::TimingPoint,
};

use crate::{
    error::PpResult,
    osu::{OsuDifficultyAttributes, OsuPP, OsuStars},
};

mod attributes;
mod hit_object;
mod mode;
mod pos2;
mod timing_point;

/// The main beatmap struct containing all data relevant
/// for difficulty and performance calculation.
///
/// Hit objects and timing points must be sorted by their time,
/// the calculation relies on it and never re-sorts them.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    /// The game mode.
    pub mode: GameMode,
    /// The version of the .osu file.
    pub version: i32,

    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate.
    pub hp: f64,
    /// Base slider velocity in hundreds of osu!pixels per beat.
    pub slider_multiplier: f64,
    /// Amount of slider ticks per beat.
    pub tick_rate: f64,

    /// All hitobjects of the beatmap.
    pub hit_objects: Vec<HitObject>,
    /// All timing points, inherited and uninherited.
    pub timing_points: Vec<TimingPoint>,
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            mode: GameMode::Osu,
            version: 14,
            ar: 5.0,
            od: 5.0,
            cs: 5.0,
            hp: 5.0,
            slider_multiplier: 1.0,
            tick_rate: 1.0,
            hit_objects: Vec::new(),
            timing_points: Vec::new(),
        }
    }
}

impl Beatmap {
    /// Extract a beatmap's attributes into their own type.
    #[inline]
    pub const fn attributes(&self) -> BeatmapAttributes {
        BeatmapAttributes::new(self.ar, self.od, self.cs, self.hp)
    }

    /// Calculate the difficulty attributes for the given mods.
    ///
    /// Use [`OsuStars`] for further configuration.
    #[inline]
    pub fn stars(&self, mods: u32) -> PpResult<OsuDifficultyAttributes> {
        OsuStars::new(self).mods(mods).calculate()
    }

    /// Returns a builder for performance calculation.
    #[inline]
    pub fn pp(&self) -> OsuPP<'_> {
        OsuPP::new(self)
    }

    /// The maximum achievable combo.
    #[inline]
    pub fn max_combo(&self) -> u32 {
        crate::osu::max_combo(self)
    }

    /// The amount of circles.
    pub fn n_circles(&self) -> u32 {
        self.hit_objects.iter().filter(|h| h.is_circle()).count() as u32
    }

    /// The amount of sliders.
    pub fn n_sliders(&self) -> u32 {
        self.hit_objects.iter().filter(|h| h.is_slider()).count() as u32
    }

    /// The amount of spinners.
    pub fn n_spinners(&self) -> u32 {
        self.hit_objects.iter().filter(|h| h.is_spinner()).count() as u32
    }
}
