use thiserror::Error;

use crate::beatmap::GameMode;

/// `Result<_, PpError>`
pub type PpResult<T> = Result<T, PpError>;

/// Anything that could go wrong while calculating stars or pp.
///
/// There is no partial result: a calculation either succeeds entirely
/// or returns one of these.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum PpError {
    /// The map's mode has no positional scoring.
    #[error("unsupported game mode {0}, only osu!standard maps can be calculated")]
    UnsupportedMode(GameMode),
    /// The score version is neither 1 nor 2.
    #[error("unsupported score version {0}, expected 1 or 2")]
    UnsupportedScoreVersion(u32),
    /// The map has no hit objects.
    #[error("the map contains no hit objects")]
    EmptyMap,
    /// The difficulty attributes claim a max combo of zero.
    #[error("the max combo is zero, no combo-based pp can be derived")]
    NoCombo,
}

impl PpError {
    /// Whether the error stems from invalid settings rather than from the map's content.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::UnsupportedMode(_) | Self::UnsupportedScoreVersion(_))
    }
}
