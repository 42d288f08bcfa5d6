use crate::beatmap::{Beatmap, HitObjectKind, TimingPoint};

/// Object counts and maximum combo of a map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ComboCount {
    pub(crate) n_circles: u32,
    pub(crate) n_sliders: u32,
    pub(crate) n_spinners: u32,
    pub(crate) max_combo: u32,
}

/// Walk all hit objects and sum up their combo.
///
/// Circles and spinners give one combo each, sliders give one for their
/// head, one per repeat, and one for each tick.
pub(crate) fn count_combo(map: &Beatmap) -> ComboCount {
    let mut count = ComboCount::default();
    let mut state = SliderState::new(&map.timing_points);

    for h in map.hit_objects.iter() {
        match h.kind {
            HitObjectKind::Circle => {
                count.n_circles += 1;
                count.max_combo += 1;
            }
            HitObjectKind::Slider { pixel_len, repeats } => {
                count.n_sliders += 1;
                count.max_combo += count_ticks(h.start_time, pixel_len, repeats, map, &mut state);
            }
            HitObjectKind::Spinner { .. } => {
                count.n_spinners += 1;
                count.max_combo += 1;
            }
        }
    }

    count
}

/// The maximum achievable combo of the map.
pub fn max_combo(map: &Beatmap) -> u32 {
    count_combo(map).max_combo
}

/// Cursor over the timing points that tracks the current slider velocity.
struct SliderState<'p> {
    timing_points: &'p [TimingPoint],
    idx: usize,
    next_time: f64,
    slider_velocity: f64,
}

impl<'p> SliderState<'p> {
    #[inline]
    const fn new(timing_points: &'p [TimingPoint]) -> Self {
        let next_time = match timing_points {
            [first, ..] => first.time,
            [] => f64::INFINITY,
        };

        Self {
            timing_points,
            idx: 0,
            next_time,
            slider_velocity: TimingPoint::DEFAULT_SLIDER_VELOCITY,
        }
    }

    /// Advance to the timing point that is active at `time`.
    ///
    /// Objects before the first timing point keep the default velocity.
    fn advance(&mut self, time: f64) {
        while time >= self.next_time {
            let Some(point) = self.timing_points.get(self.idx) else {
                self.next_time = f64::INFINITY;

                break;
            };

            self.idx += 1;

            self.next_time = self
                .timing_points
                .get(self.idx)
                .map_or(f64::INFINITY, |next| next.time);

            self.slider_velocity = point.slider_velocity();
        }
    }
}

fn count_ticks(
    time: f64,
    pixel_len: f64,
    repeats: u32,
    map: &Beatmap,
    state: &mut SliderState<'_>,
) -> u32 {
    state.advance(time);

    let mut px_per_beat = map.slider_multiplier * 100.0 * state.slider_velocity;

    if map.version < 8 {
        px_per_beat /= state.slider_velocity;
    }

    let spans = f64::from(repeats);
    let beats = pixel_len * spans / px_per_beat;

    // the last tick coincides with the slider end and is not counted
    let mut ticks = ((beats - 0.1) / spans * map.tick_rate).ceil() as i64;
    ticks -= 1;
    ticks *= i64::from(repeats);
    ticks += i64::from(repeats) + 1;

    ticks.max(0) as u32
}
