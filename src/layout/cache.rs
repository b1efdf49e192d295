//! Memoized geometry.
//!
//! Geometry depends only on (layout, face, playtest sizing), a key space
//! of a few dozen entries. `layout_data` serves every key from a
//! process-wide table built eagerly on first use and read-only after.

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::data::LayoutData;
use super::derive::{resolve, resolve_unchecked};
use crate::cards::LayoutType;
use crate::core::card_size;
use crate::error::{ProxyError, Result};

/// Cache key of one face's geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutKey {
    pub layout: LayoutType,
    pub face_index: u8,
    pub playtest: bool,
}

impl LayoutKey {
    #[must_use]
    pub const fn new(layout: LayoutType, face_index: u8, playtest: bool) -> Self {
        Self {
            layout,
            face_index,
            playtest,
        }
    }

    /// Every valid key, in layout order.
    pub fn all() -> impl Iterator<Item = LayoutKey> {
        LayoutType::ALL.into_iter().flat_map(|layout| {
            (0..layout.face_count()).flat_map(move |face| {
                [false, true]
                    .into_iter()
                    .map(move |playtest| LayoutKey::new(layout, face, playtest))
            })
        })
    }
}

/// Geometry table with a count of how many entries it had to derive.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: FxHashMap<LayoutKey, Arc<LayoutData>>,
    computations: usize,
}

impl LayoutCache {
    /// Create an empty cache that fills lazily.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache holding every valid key.
    pub fn eager() -> Self {
        let mut cache = Self::new();
        for key in LayoutKey::all() {
            let data = resolve_unchecked(key.layout, key.face_index, card_size(key.playtest));
            cache.entries.insert(key, Arc::new(data));
            cache.computations += 1;
        }
        debug!(entries = cache.entries.len(), "built layout cache");
        cache
    }

    /// Cached geometry for `key`, deriving it on first request.
    pub fn get_or_compute(&mut self, key: LayoutKey) -> Result<Arc<LayoutData>> {
        if let Some(data) = self.entries.get(&key) {
            trace!(?key, "layout cache hit");
            return Ok(Arc::clone(data));
        }
        let data = Arc::new(resolve(key.layout, key.face_index, card_size(key.playtest))?);
        self.computations += 1;
        self.entries.insert(key, Arc::clone(&data));
        Ok(data)
    }

    /// Cached geometry for `key`, without deriving.
    pub fn get(&self, key: LayoutKey) -> Option<Arc<LayoutData>> {
        self.entries.get(&key).cloned()
    }

    /// Number of geometry derivations performed so far.
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Geometry of one face from the process-wide table.
///
/// Fails with `InvalidFaceAccess` when `face` is not a face of `layout`.
pub fn layout_data(layout: LayoutType, face: u8, playtest: bool) -> Result<Arc<LayoutData>> {
    static CACHE: OnceLock<LayoutCache> = OnceLock::new();
    let cache = CACHE.get_or_init(LayoutCache::eager);
    cache.get(LayoutKey::new(layout, face, playtest)).ok_or_else(|| {
        ProxyError::face_access(
            layout.as_str(),
            format!("layout has {} face(s), face {face} requested", layout.face_count()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_space() {
        let two_faced = LayoutType::ALL
            .iter()
            .filter(|layout| layout.face_count() == 2)
            .count();
        let expected = 2 * (LayoutType::ALL.len() + two_faced);
        assert_eq!(LayoutKey::all().count(), expected);
    }

    #[test]
    fn test_lazy_cache_counts_computations() {
        let mut cache = LayoutCache::new();
        let key = LayoutKey::new(LayoutType::Split, 1, false);

        let first = cache.get_or_compute(key).unwrap();
        let second = cache.get_or_compute(key).unwrap();
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.computations(), 1);

        cache
            .get_or_compute(LayoutKey::new(LayoutType::Split, 1, true))
            .unwrap();
        assert_eq!(cache.computations(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalid_key_is_not_cached() {
        let mut cache = LayoutCache::new();
        let key = LayoutKey::new(LayoutType::Land, 1, false);
        assert!(cache.get_or_compute(key).is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.computations(), 0);
    }

    #[test]
    fn test_eager_cache_is_complete() {
        let mut cache = LayoutCache::eager();
        let built = cache.computations();
        assert_eq!(built, LayoutKey::all().count());
        for key in LayoutKey::all() {
            cache.get_or_compute(key).unwrap();
        }
        assert_eq!(cache.computations(), built);
    }

    #[test]
    fn test_global_table() {
        let data = layout_data(LayoutType::Flip, 1, false).unwrap();
        assert_eq!(data.face_index, 1);
        assert!(Arc::ptr_eq(&data, &layout_data(LayoutType::Flip, 1, false).unwrap()));
        assert!(layout_data(LayoutType::Standard, 1, false).is_err());
    }
}
