use std::fmt;

/// The mode of a beatmap.
///
/// Only [`GameMode::Osu`] maps can be calculated, the other variants exist so
/// that a parser can hand over any map and have it rejected properly.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub enum GameMode {
    /// osu!standard
    #[default]
    Osu = 0,
    /// osu!taiko
    Taiko = 1,
    /// osu!catch
    Catch = 2,
    /// osu!mania
    Mania = 3,
}

impl TryFrom<u8> for GameMode {
    type Error = u8;

    /// The error contains the unknown value.
    #[inline]
    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(Self::Osu),
            1 => Ok(Self::Taiko),
            2 => Ok(Self::Catch),
            3 => Ok(Self::Mania),
            other => Err(other),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Osu => "osu!standard",
            Self::Taiko => "osu!taiko",
            Self::Catch => "osu!catch",
            Self::Mania => "osu!mania",
        };

        f.write_str(name)
    }
}
