use super::{BilinearResizer, ResizeError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Cache key: source and target dimensions of a resampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResizeKey {
    pub src: (usize, usize),
    pub dst: (usize, usize),
}

/// Shared store of built resamplers keyed by dimension pair.
///
/// Construction happens under the lock, so each key is built once even when
/// several threads ask for it concurrently. Built resizers are immutable and
/// handed out as `Arc`s. When `capacity` distinct keys are held the cache is
/// cleared before inserting the next one.
#[derive(Debug)]
pub struct ResizeCache {
    entries: Mutex<HashMap<ResizeKey, Arc<BilinearResizer>>>,
    capacity: usize,
}

impl Default for ResizeCache {
    fn default() -> Self {
        Self::with_capacity(16)
    }
}

impl ResizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Return the resizer for `src → dst`, building it on first use.
    pub fn get_or_build(
        &self,
        src: (usize, usize),
        dst: (usize, usize),
    ) -> Result<Arc<BilinearResizer>, ResizeError> {
        let key = ResizeKey { src, dst };
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(resizer) = entries.get(&key) {
            return Ok(Arc::clone(resizer));
        }
        let resizer = Arc::new(BilinearResizer::new(src.0, src.1, dst.0, dst.1)?);
        if entries.len() >= self.capacity {
            log::debug!(
                "ResizeCache: capacity {} reached, dropping cached resizers",
                self.capacity
            );
            entries.clear();
        }
        entries.insert(key, Arc::clone(&resizer));
        Ok(resizer)
    }

    /// Number of cached resizers.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_returns_shared_instance() {
        let cache = ResizeCache::new();
        let a = cache.get_or_build((128, 96), (64, 64)).unwrap();
        let b = cache.get_or_build((128, 96), (64, 64)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let c = cache.get_or_build((130, 96), (64, 64)).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn failed_builds_are_not_cached() {
        let cache = ResizeCache::new();
        assert!(cache.get_or_build((10, 10), (64, 64)).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_bounds_the_number_of_entries() {
        let cache = ResizeCache::with_capacity(2);
        for w in 64..70 {
            cache.get_or_build((w, 64), (32, 32)).unwrap();
            assert!(cache.len() <= 2);
        }
    }

    #[test]
    fn concurrent_callers_share_one_build() {
        let cache = Arc::new(ResizeCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get_or_build((200, 100), (64, 64)).unwrap())
            })
            .collect();
        let built: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for r in &built[1..] {
            assert!(Arc::ptr_eq(&built[0], r));
        }
    }
}
