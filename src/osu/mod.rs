pub use self::{
    attributes::{OsuDifficultyAttributes, OsuPerformanceAttributes},
    combo::max_combo,
    pp::{OsuAttributeProvider, OsuPP, ScoreVersion},
    score_state::{accuracy, hitresults_from_acc, OsuScoreState},
    stars::{stars, OsuStars},
};

mod attributes;
mod combo;
mod difficulty_object;
mod osu_object;
mod pp;
mod scaling_factor;
mod score_state;
mod skill;
mod skill_kind;
mod stars;
