use bitflags::bitflags;

use crate::mods::Mods;

bitflags! {
    /// Which difficulty values should be adjusted by mods.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ApplyFlags: u8 {
        const AR = 1 << 0;
        const OD = 1 << 1;
        const CS = 1 << 2;
        const HP = 1 << 3;
    }
}

impl Default for ApplyFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Summary struct for a [`Beatmap`](crate::Beatmap)'s attributes.
///
/// Created through [`Beatmap::attributes`](crate::Beatmap::attributes) and then
/// adjusted through [`BeatmapAttributes::mods`].
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
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
    /// The mods that were applied.
    pub mods: u32,
}

impl BeatmapAttributes {
    const AR0_MS: f64 = 1800.0;
    const AR5_MS: f64 = 1200.0;
    const AR10_MS: f64 = 450.0;
    const AR_MS_STEP_1: f64 = (Self::AR0_MS - Self::AR5_MS) / 5.0;
    const AR_MS_STEP_2: f64 = (Self::AR5_MS - Self::AR10_MS) / 5.0;

    const OD0_MS: f64 = 80.0;
    const OD10_MS: f64 = 20.0;
    const OD_MS_STEP: f64 = (Self::OD0_MS - Self::OD10_MS) / 10.0;

    /// Create attributes from raw values without any mods.
    #[inline]
    pub const fn new(ar: f64, od: f64, cs: f64, hp: f64) -> Self {
        Self {
            ar,
            od,
            cs,
            hp,
            clock_rate: 1.0,
            mods: 0,
        }
    }

    /// Adjusts all attributes w.r.t. mods.
    #[inline]
    pub fn mods(self, mods: u32) -> Self {
        self.mods_with(mods, ApplyFlags::all())
    }

    /// Adjusts only the attributes specified by `flags` w.r.t. mods.
    ///
    /// AR and OD are converted to their hit windows in milliseconds, scaled by the
    /// clock rate, and converted back.
    pub fn mods_with(self, mods: u32, flags: ApplyFlags) -> Self {
        if !mods.change_map() {
            return Self { mods, ..self };
        }

        let clock_rate = mods.speed();
        let multiplier = mods.od_ar_hp_multiplier();

        let mut ar = self.ar;
        let mut od = self.od;
        let mut cs = self.cs;
        let mut hp = self.hp;

        if flags.contains(ApplyFlags::AR) {
            ar *= multiplier;

            let mut ar_ms = if ar <= 5.0 {
                Self::AR0_MS - Self::AR_MS_STEP_1 * ar
            } else {
                Self::AR5_MS - Self::AR_MS_STEP_2 * (ar - 5.0)
            };

            ar_ms = ar_ms.clamp(Self::AR10_MS, Self::AR0_MS);
            ar_ms /= clock_rate;

            ar = if ar_ms > Self::AR5_MS {
                (Self::AR0_MS - ar_ms) / Self::AR_MS_STEP_1
            } else {
                5.0 + (Self::AR5_MS - ar_ms) / Self::AR_MS_STEP_2
            };
        }

        if flags.contains(ApplyFlags::OD) {
            od *= multiplier;

            let mut od_ms = Self::OD0_MS - (Self::OD_MS_STEP * od).ceil();
            od_ms = od_ms.clamp(Self::OD10_MS, Self::OD0_MS);
            od_ms /= clock_rate;

            od = (Self::OD0_MS - od_ms) / Self::OD_MS_STEP;
        }

        if flags.contains(ApplyFlags::CS) {
            if mods.hr() {
                cs *= 1.3;
            }

            if mods.ez() {
                cs *= 0.5;
            }

            cs = cs.min(10.0);
        }

        if flags.contains(ApplyFlags::HP) {
            hp = (hp * multiplier).min(10.0);
        }

        Self {
            ar,
            od,
            cs,
            hp,
            clock_rate,
            mods,
        }
    }
}
