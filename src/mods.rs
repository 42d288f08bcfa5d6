//! Mods are handled as plain `u32` bitmasks.
//!
//! See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)

macro_rules! impl_mods {
    ($func_name:ident, $const_name:ident) => {
        #[inline]
        fn $func_name(self) -> bool {
            self & Self::$const_name > 0
        }
    };
}

/// Symbol and bit value of every mod that has an acronym.
///
/// Ordered the way mods are usually displayed.
pub const ACRONYMS: [(&str, u32); 15] = [
    ("NF", u32::NF),
    ("EZ", u32::EZ),
    ("TD", u32::TD),
    ("HD", u32::HD),
    ("HR", u32::HR),
    ("SD", u32::SD),
    ("DT", u32::DT),
    ("RX", u32::RX),
    ("HT", u32::HT),
    ("NC", u32::NC),
    ("FL", u32::FL),
    ("AT", u32::AT),
    ("SO", u32::SO),
    ("AP", u32::AP),
    ("PF", u32::PF),
];

/// Render a mod bitmask as concatenated acronyms, e.g. `"HDDT"`.
///
/// NC implies DT and PF implies SD, so the implied acronym is omitted.
/// An empty mask yields `"NM"`.
pub fn to_acronyms(mods: u32) -> String {
    let mut mods = mods;

    if mods.nc() {
        mods &= !u32::DT;
    }

    if mods & u32::PF > 0 {
        mods &= !u32::SD;
    }

    let acronyms: String = ACRONYMS
        .iter()
        .filter(|(_, bit)| mods & bit > 0)
        .map(|(acronym, _)| *acronym)
        .collect();

    if acronyms.is_empty() {
        String::from("NM")
    } else {
        acronyms
    }
}

/// Bit checks and derived values of a mod bitmask.
pub trait Mods: Copy {
    const NF: u32 = 1 << 0;
    const EZ: u32 = 1 << 1;
    const TD: u32 = 1 << 2;
    const HD: u32 = 1 << 3;
    const HR: u32 = 1 << 4;
    const SD: u32 = 1 << 5;
    const DT: u32 = 1 << 6;
    const RX: u32 = 1 << 7;
    const HT: u32 = 1 << 8;
    const NC: u32 = 1 << 9;
    const FL: u32 = 1 << 10;
    const AT: u32 = 1 << 11;
    const SO: u32 = 1 << 12;
    const AP: u32 = 1 << 13;
    const PF: u32 = 1 << 14;

    /// Mods that alter the clock rate.
    const SPEED_CHANGING: u32 = Self::DT | Self::HT | Self::NC;
    /// Mods that alter any of the map's difficulty values.
    const MAP_CHANGING: u32 = Self::SPEED_CHANGING | Self::HR | Self::EZ;

    fn change_speed(self) -> bool;
    fn change_map(self) -> bool;
    fn speed(self) -> f64;
    fn od_ar_hp_multiplier(self) -> f64;
    fn nf(self) -> bool;
    fn ez(self) -> bool;
    fn td(self) -> bool;
    fn hd(self) -> bool;
    fn hr(self) -> bool;
    fn dt(self) -> bool;
    fn ht(self) -> bool;
    fn nc(self) -> bool;
    fn fl(self) -> bool;
    fn so(self) -> bool;
}

impl Mods for u32 {
    #[inline]
    fn change_speed(self) -> bool {
        self & Self::SPEED_CHANGING > 0
    }

    #[inline]
    fn change_map(self) -> bool {
        self & Self::MAP_CHANGING > 0
    }

    // DT and NC take precedence over HT
    #[inline]
    fn speed(self) -> f64 {
        if self & (Self::DT | Self::NC) > 0 {
            1.5
        } else if self & Self::HT > 0 {
            0.75
        } else {
            1.0
        }
    }

    #[inline]
    fn od_ar_hp_multiplier(self) -> f64 {
        if self & Self::HR > 0 {
            1.4
        } else if self & Self::EZ > 0 {
            0.5
        } else {
            1.0
        }
    }

    impl_mods!(nf, NF);
    impl_mods!(ez, EZ);
    impl_mods!(td, TD);
    impl_mods!(hd, HD);
    impl_mods!(hr, HR);
    impl_mods!(dt, DT);
    impl_mods!(ht, HT);
    impl_mods!(nc, NC);
    impl_mods!(fl, FL);
    impl_mods!(so, SO);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_rate() {
        assert!((0_u32.speed() - 1.0).abs() < f64::EPSILON);
        assert!((u32::DT.speed() - 1.5).abs() < f64::EPSILON);
        assert!((u32::NC.speed() - 1.5).abs() < f64::EPSILON);
        assert!((u32::HT.speed() - 0.75).abs() < f64::EPSILON);
        assert!(((u32::DT | u32::HT).speed() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn map_changing() {
        assert!(!(u32::HD | u32::FL | u32::NF).change_map());
        assert!(u32::HR.change_map());
        assert!(u32::EZ.change_map());
        assert!(u32::NC.change_map());
        assert!(u32::NC.change_speed());
        assert!(!u32::HR.change_speed());
    }

    #[test]
    fn acronyms() {
        assert_eq!(to_acronyms(0), "NM");
        assert_eq!(to_acronyms(u32::HD | u32::DT), "HDDT");
        assert_eq!(to_acronyms(u32::DT | u32::NC | u32::HR), "HRNC");
        assert_eq!(to_acronyms(u32::SD | u32::PF), "PF");
    }
}
