use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};

use super::difficulty_object::{DifficultyObject, SINGLE_SPACING_THRESHOLD};

const SPEED_SKILL_MULTIPLIER: f64 = 1400.0;
const SPEED_STRAIN_DECAY_BASE: f64 = 0.3;

const AIM_SKILL_MULTIPLIER: f64 = 26.25;
const AIM_STRAIN_DECAY_BASE: f64 = 0.15;

const MIN_SPEED_BONUS: f64 = 75.0; // ~200BPM 1/4 streams
const MAX_SPEED_BONUS: f64 = 45.0; // ~330BPM 1/4 streams
const SPEED_BALANCING_FACTOR: f64 = 40.0;
const SPEED_ANGLE_BONUS_BEGIN: f64 = 5.0 * FRAC_PI_6;

const AIM_ANGLE_BONUS_BEGIN: f64 = FRAC_PI_3;
const ANGLE_BONUS_SCALE: f64 = 90.0;
const TIMING_THRESHOLD: f64 = 107.0;

const MIN_STRAIN_TIME: f64 = 50.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SkillKind {
    Aim,
    Speed,
}

impl SkillKind {
    #[inline]
    pub(crate) const fn skill_multiplier(self) -> f64 {
        match self {
            Self::Aim => AIM_SKILL_MULTIPLIER,
            Self::Speed => SPEED_SKILL_MULTIPLIER,
        }
    }

    #[inline]
    pub(crate) const fn strain_decay_base(self) -> f64 {
        match self {
            Self::Aim => AIM_STRAIN_DECAY_BASE,
            Self::Speed => SPEED_STRAIN_DECAY_BASE,
        }
    }

    /// Spacing weight of the object, not yet scaled by the skill multiplier.
    pub(crate) fn strain_value_of(self, current: &DifficultyObject<'_>) -> f64 {
        if current.base.is_spinner() {
            return 0.0;
        }

        match self {
            Self::Aim => aim_value(current),
            Self::Speed => speed_value(current),
        }
    }
}

fn aim_value(current: &DifficultyObject<'_>) -> f64 {
    let strain_time = current.delta.max(MIN_STRAIN_TIME);
    let (prev_dist, prev_delta) = current.prev;
    let prev_strain_time = prev_delta.max(MIN_STRAIN_TIME);

    let mut result = 0.0;

    if let Some(angle) = current.angle().filter(|a| *a > AIM_ANGLE_BONUS_BEGIN) {
        let angle_bonus = ((prev_dist - ANGLE_BONUS_SCALE).max(0.0)
            * (angle - AIM_ANGLE_BONUS_BEGIN).sin().powi(2)
            * (current.dist - ANGLE_BONUS_SCALE).max(0.0))
        .sqrt();

        result = 1.5 * apply_diminishing_exp(angle_bonus.max(0.0))
            / TIMING_THRESHOLD.max(prev_strain_time);
    }

    let weighted_dist = apply_diminishing_exp(current.dist);

    (result + weighted_dist / TIMING_THRESHOLD.max(strain_time)).max(weighted_dist / strain_time)
}

fn speed_value(current: &DifficultyObject<'_>) -> f64 {
    let strain_time = current.delta.max(MIN_STRAIN_TIME);
    let dist = current.dist.min(SINGLE_SPACING_THRESHOLD);
    let delta_time = current.delta.max(MAX_SPEED_BONUS);

    let mut speed_bonus = 1.0;

    if delta_time < MIN_SPEED_BONUS {
        let exp_base = (MIN_SPEED_BONUS - delta_time) / SPEED_BALANCING_FACTOR;
        speed_bonus += exp_base * exp_base;
    }

    let mut angle_bonus = 1.0;

    if let Some(angle) = current.angle().filter(|a| *a < SPEED_ANGLE_BONUS_BEGIN) {
        let exp_base = (1.5 * (SPEED_ANGLE_BONUS_BEGIN - angle)).sin();
        angle_bonus += exp_base * exp_base / 3.57;

        if angle < FRAC_PI_2 {
            angle_bonus = 1.28;

            if dist < ANGLE_BONUS_SCALE && angle < FRAC_PI_4 {
                angle_bonus +=
                    (1.0 - angle_bonus) * ((ANGLE_BONUS_SCALE - dist) / 10.0).min(1.0);
            } else if dist < ANGLE_BONUS_SCALE {
                angle_bonus += (1.0 - angle_bonus)
                    * ((ANGLE_BONUS_SCALE - dist) / 10.0).min(1.0)
                    * ((FRAC_PI_2 - angle) / FRAC_PI_4).sin();
            }
        }
    }

    (1.0 + (speed_bonus - 1.0) * 0.75)
        * angle_bonus
        * (0.95 + speed_bonus * (dist / SINGLE_SPACING_THRESHOLD).powf(3.5))
        / strain_time
}

#[inline]
fn apply_diminishing_exp(val: f64) -> f64 {
    val.powf(0.99)
}
