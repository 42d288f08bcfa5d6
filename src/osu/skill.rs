use std::cmp::Ordering;

use super::{difficulty_object::DifficultyObject, skill_kind::SkillKind};

// max strains are weighted from highest to lowest, this is how much the weight decays
const DECAY_WEIGHT: f64 = 0.9;

/// Strain aggregation of one skill over a map.
pub(crate) struct Skill {
    current_strain: f64,
    current_section_peak: f64,

    kind: SkillKind,
    pub(crate) strain_peaks: Vec<f64>,

    prev_time: f64,
}

/// The reduced strain peaks of a skill.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct SkillValues {
    /// Weighted sum of the sorted strain peaks.
    pub(crate) difficulty: f64,
    /// Sum of all strain peaks to the power of `1.2`.
    pub(crate) total: f64,
}

impl Skill {
    /// The first object has no predecessor and thus no strain, its start time is
    /// only used to decay into the first section end.
    #[inline]
    pub(crate) fn new(kind: SkillKind, first_time: f64) -> Self {
        Self {
            current_strain: 0.0,
            current_section_peak: 0.0,

            kind,
            strain_peaks: Vec::with_capacity(128),

            prev_time: first_time,
        }
    }

    /// Process all objects, starting a new section every `section_len` milliseconds.
    pub(crate) fn calculate(
        kind: SkillKind,
        first_time: f64,
        diff_objects: &[DifficultyObject<'_>],
        section_len: f64,
    ) -> Self {
        let mut skill = Self::new(kind, first_time);
        let mut current_section_end = (first_time / section_len).ceil() * section_len;

        for h in diff_objects {
            while h.base.time > current_section_end {
                skill.save_current_peak();
                skill.start_new_section_from(current_section_end);

                current_section_end += section_len;
            }

            skill.process(h);
        }

        skill.save_current_peak();

        tracing::trace!(
            kind = ?kind,
            sections = skill.strain_peaks.len(),
            "processed strains"
        );

        skill
    }

    #[inline]
    pub(crate) fn save_current_peak(&mut self) {
        self.strain_peaks.push(self.current_section_peak);
    }

    #[inline]
    pub(crate) fn start_new_section_from(&mut self, time: f64) {
        self.current_section_peak = self.peak_strain(time - self.prev_time);
    }

    #[inline]
    pub(crate) fn process(&mut self, current: &DifficultyObject<'_>) {
        self.current_strain *= self.strain_decay(current.delta);
        self.current_strain += self.kind.strain_value_of(current) * self.kind.skill_multiplier();

        self.current_section_peak = self.current_section_peak.max(self.current_strain);
        self.prev_time = current.base.time;
    }

    pub(crate) fn difficulty_values(&mut self) -> SkillValues {
        let mut difficulty = 0.0;
        let mut total = 0.0;
        let mut weight = 1.0;

        self.strain_peaks
            .sort_unstable_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

        for &strain in self.strain_peaks.iter() {
            total += strain.powf(1.2);
            difficulty += strain * weight;
            weight *= DECAY_WEIGHT;
        }

        SkillValues { difficulty, total }
    }

    #[inline]
    fn peak_strain(&self, delta_time: f64) -> f64 {
        self.current_strain * self.strain_decay(delta_time)
    }

    #[inline]
    fn strain_decay(&self, ms: f64) -> f64 {
        self.kind.strain_decay_base().powf(ms / 1000.0)
    }
}

impl SkillValues {
    /// Bonus for longer maps derived from the ratio of total strain to difficulty.
    ///
    /// `0.0` if there is no difficulty.
    pub(crate) fn length_bonus(&self) -> f64 {
        if self.difficulty <= 0.0 {
            return 0.0;
        }

        0.32 + 0.5 * ((self.total + self.difficulty).log10() - self.difficulty.log10())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        beatmap::Pos2,
        osu::osu_object::{OsuObject, OsuObjectKind},
    };

    use super::*;

    #[test]
    fn weighted_peaks() {
        let mut skill = Skill::new(SkillKind::Aim, 0.0);
        skill.strain_peaks = vec![1.0, 3.0, 2.0];

        let values = skill.difficulty_values();

        assert_eq!(skill.strain_peaks, vec![3.0, 2.0, 1.0]);
        assert!((values.difficulty - (3.0 + 2.0 * 0.9 + 0.81)).abs() < 1e-12);

        let total = 3.0_f64.powf(1.2) + 2.0_f64.powf(1.2) + 1.0;
        assert!((values.total - total).abs() < 1e-12);
    }

    #[test]
    fn no_difficulty_no_length_bonus() {
        assert!(SkillValues::default().length_bonus().abs() < f64::EPSILON);
    }

    #[test]
    fn sections_carry_decayed_strain() {
        let objects: Vec<_> = [0.0, 100.0, 1000.0]
            .into_iter()
            .map(|time| OsuObject {
                time,
                pos: Pos2::zero(),
                angle: None,
                kind: OsuObjectKind::Circle,
            })
            .collect();

        let diff_objects: Vec<_> = objects
            .windows(2)
            .map(|w| DifficultyObject {
                base: &w[1],
                delta: w[1].time - w[0].time,
                dist: 100.0,
                prev: (0.0, 0.0),
                is_single: false,
            })
            .collect();

        let kind = SkillKind::Speed;
        let skill = Skill::calculate(kind, 0.0, &diff_objects, 400.0);

        let first = kind.strain_value_of(&diff_objects[0]) * kind.skill_multiplier();
        let second = first * 0.3_f64.powf(0.9)
            + kind.strain_value_of(&diff_objects[1]) * kind.skill_multiplier();

        // sections end at 0, 400, 800, 1200
        assert_eq!(skill.strain_peaks.len(), 4);
        assert!(skill.strain_peaks[0].abs() < f64::EPSILON);
        assert!((skill.strain_peaks[1] - first).abs() < 1e-12);

        let decayed = first * 0.3_f64.powf(0.3);
        assert!((skill.strain_peaks[2] - decayed).abs() < 1e-12);
        assert!((skill.strain_peaks[3] - second).abs() < 1e-12);
    }
}
