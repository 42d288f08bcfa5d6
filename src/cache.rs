use std::collections::HashMap;

use crate::{
    beatmap::Beatmap,
    error::PpResult,
    osu::{OsuDifficultyAttributes, OsuPP, OsuStars},
};

/// Difficulty attributes of a map, memoized per mod combination.
///
/// Attributes only depend on the map and the mods so they can be reused
/// for any amount of performance calculations. Nothing is persisted beyond
/// the lifetime of the cache.
///
/// # Example
///
/// ```
/// use ppv2::{Beatmap, DifficultyCache, HitObject, Pos2};
///
/// let map = Beatmap {
///     hit_objects: vec![
///         HitObject::circle(Pos2 { x: 0.0, y: 0.0 }, 0.0),
///         HitObject::circle(Pos2 { x: 300.0, y: 0.0 }, 200.0),
///     ],
///     ..Default::default()
/// };
///
/// let mut cache = DifficultyCache::new(&map);
///
/// let stars = cache.get(64).unwrap().stars; // computed
/// let pp = cache.pp(64).unwrap().accuracy(97.0).calculate().unwrap(); // cached
///
/// assert_eq!(pp.stars(), stars);
/// ```
#[derive(Clone, Debug)]
pub struct DifficultyCache<'map> {
    map: &'map Beatmap,
    entries: HashMap<u32, OsuDifficultyAttributes>,
}

impl<'map> DifficultyCache<'map> {
    /// Create an empty cache for the given map.
    pub fn new(map: &'map Beatmap) -> Self {
        Self {
            map,
            entries: HashMap::default(),
        }
    }

    /// The map whose attributes are cached.
    pub const fn map(&self) -> &'map Beatmap {
        self.map
    }

    /// Returns the cached attributes for `mods`, calculating them if necessary.
    ///
    /// Errors are not cached.
    pub fn get(&mut self, mods: u32) -> PpResult<&OsuDifficultyAttributes> {
        if !self.entries.contains_key(&mods) {
            return self.get_forced(mods);
        }

        tracing::trace!(mods, "difficulty cache hit");

        // checked above
        Ok(&self.entries[&mods])
    }

    /// Recalculates the attributes for `mods`, replacing any cached ones.
    pub fn get_forced(&mut self, mods: u32) -> PpResult<&OsuDifficultyAttributes> {
        let attrs = OsuStars::new(self.map).mods(mods).calculate()?;

        let entry = self
            .entries
            .entry(mods)
            .and_modify(|cached| *cached = attrs.clone())
            .or_insert(attrs);

        Ok(entry)
    }

    /// Removes the cached attributes for `mods`, returning them if present.
    pub fn invalidate(&mut self, mods: u32) -> Option<OsuDifficultyAttributes> {
        self.entries.remove(&mods)
    }

    /// Removes all cached attributes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether attributes for `mods` are cached.
    pub fn contains(&self, mods: u32) -> bool {
        self.entries.contains_key(&mods)
    }

    /// The amount of cached mod combinations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a performance calculator for `mods` that reuses the
    /// cached attributes.
    pub fn pp(&mut self, mods: u32) -> PpResult<OsuPP<'map>> {
        let attrs = self.get(mods)?.clone();

        Ok(OsuPP::from_attributes(attrs).mods(mods))
    }
}
