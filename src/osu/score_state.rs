/// Aggregation for a score's hit results and combo.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OsuScoreState {
    /// Maximum combo that the score has had. **Not** the maximum
    /// possible combo of the map.
    pub max_combo: u32,
    /// Amount of 300s.
    pub n300: u32,
    /// Amount of 100s.
    pub n100: u32,
    /// Amount of 50s.
    pub n50: u32,
    /// Amount of misses.
    pub n_misses: u32,
}

impl OsuScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            n300: 0,
            n100: 0,
            n50: 0,
            n_misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up.
    pub const fn total_hits(&self) -> u32 {
        self.n300 + self.n100 + self.n50 + self.n_misses
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    pub fn accuracy(&self) -> f64 {
        accuracy(self.n300, self.n100, self.n50, self.n_misses)
    }
}

/// Accuracy between `0.0` and `1.0` of the given hit results.
///
/// No hits at all yield `0.0`.
pub fn accuracy(n300: u32, n100: u32, n50: u32, n_misses: u32) -> f64 {
    let total = u64::from(n300) + u64::from(n100) + u64::from(n50) + u64::from(n_misses);

    if total == 0 {
        return 0.0;
    }

    let numerator = 50 * u64::from(n50) + 100 * u64::from(n100) + 300 * u64::from(n300);

    numerator as f64 / (300 * total) as f64
}

/// Generate the hit results `(n300, n100, n50)` closest to the given accuracy
/// between `0.0` and `100.0`.
///
/// Misses are capped at `n_objects` and the accuracy at the highest value
/// that is reachable with that many misses. 100s are preferred; 50s are used
/// only if the accuracy can't be reached with 100s alone.
pub fn hitresults_from_acc(acc: f64, n_misses: u32, n_objects: u32) -> (u32, u32, u32) {
    let n_misses = n_misses.min(n_objects);
    let max300 = n_objects - n_misses;

    let max_acc = accuracy(max300, 0, 0, n_misses) * 100.0;

    if acc > max_acc {
        tracing::warn!(acc, max_acc, n_misses, "accuracy is not reachable, capping");
    }

    let acc = acc.max(0.0).min(max_acc);

    let n_objects_f = f64::from(n_objects);
    let missing = (acc * 0.01 - 1.0) * n_objects_f + f64::from(n_misses);

    let mut n100 = (-3.0 * missing * 0.5).round().max(0.0) as u32;
    let mut n50 = 0;

    if n100 > max300 {
        // accuracy below all 100s, use 50s instead
        n100 = 0;
        n50 = ((-6.0 * missing * 0.5).round().max(0.0) as u32).min(max300);
    }

    let n300 = n_objects - n100 - n50 - n_misses;

    (n300, n100, n50)
}
