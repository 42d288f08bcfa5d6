//! Library to calculate star rating and performance points for [osu!standard] maps.
//!
//! ## Description
//!
//! `ppv2` implements the classic strain-based difficulty algorithm together with
//! the matching performance point formula. Results are meant to match the
//! reference calculator numerically, so every constant of the algorithm is kept
//! as is, including the ones that are only empirically tuned.
//!
//! The calculation is a strict pipeline:
//!   1. mods are applied to the map's base difficulty ([`BeatmapAttributes`])
//!   2. hit object positions are normalized w.r.t. the circle size and
//!      the aim and speed strains are aggregated into star ratings
//!      ([`OsuDifficultyAttributes`])
//!   3. the star ratings, max combo, and a play result are turned into
//!      performance points ([`OsuPerformanceAttributes`])
//!
//! Parsing `.osu` files is not part of this crate, a [`Beatmap`] is assembled by
//! the caller.
//!
//! ## Usage
//!
//! ```
//! use ppv2::{Beatmap, HitObject, Pos2};
//!
//! let map = Beatmap {
//!     hit_objects: vec![
//!         HitObject::circle(Pos2 { x: 100.0, y: 100.0 }, 1000.0),
//!         HitObject::circle(Pos2 { x: 250.0, y: 150.0 }, 1250.0),
//!         HitObject::circle(Pos2 { x: 400.0, y: 100.0 }, 1500.0),
//!     ],
//!     ..Default::default()
//! };
//!
//! // Calculate difficulty attributes
//! let diff_attrs = map.stars(8 + 64).unwrap(); // HDDT
//!
//! // Calculate performance attributes, re-using the difficulty attributes
//! let perf_attrs = map
//!     .pp()
//!     .attributes(diff_attrs)
//!     .mods(8 + 64) // has to be the same as before
//!     .combo(3)
//!     .misses(0)
//!     .accuracy(99.2)
//!     .calculate()
//!     .unwrap();
//!
//! println!("Stars: {} | PP: {}", perf_attrs.stars(), perf_attrs.pp());
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `parallel` | The aim and speed strains are calculated concurrently. | [`rayon`]
//!
//! Diagnostics are emitted through [`tracing`]; install a subscriber to see them.
//!
//! [osu!standard]: https://osu.ppy.sh/home
//! [`rayon`]: https://docs.rs/rayon
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[doc(inline)]
pub use self::{
    beatmap::{
        ApplyFlags, Beatmap, BeatmapAttributes, GameMode, HitObject, HitObjectKind, Pos2,
        TimingPoint,
    },
    cache::DifficultyCache,
    error::{PpError, PpResult},
    mods::Mods,
    osu::{OsuDifficultyAttributes, OsuPP, OsuPerformanceAttributes, OsuStars, ScoreVersion},
};

/// Beatmap data as provided by a parser.
pub mod beatmap;

/// Memoized difficulty attributes per mod combination.
pub mod cache;

mod error;

/// Mod bits and their effects.
pub mod mods;

/// Types for osu!standard calculations.
pub mod osu;
