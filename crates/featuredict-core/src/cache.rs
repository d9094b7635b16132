// crates/featuredict-core/src/cache.rs
use crate::error::Result;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

/// Lazily populated map where every value is built at most once.
///
/// The map lock is only held to look up or insert the per-key cell; the
/// builder runs inside that cell's own initialization. Callers racing for
/// the same missing key wait for the one build that runs, callers for other
/// keys never wait on it. A failed build leaves the key empty so the next
/// caller tries again.
///
/// Values are handed out by clone, so they should be cheap to clone (`Arc`).
pub struct LazyCache<K, V> {
    cells: RwLock<HashMap<K, Arc<OnceCell<V>>>>,
}

impl<K: Eq + Hash + Clone, V: Clone> LazyCache<K, V> {
    pub fn new() -> Self {
        Self {
            cells: RwLock::new(HashMap::new()),
        }
    }

    pub fn get_or_try_init<F>(&self, key: &K, build: F) -> Result<V>
    where
        F: FnOnce(&K) -> Result<V>,
    {
        let cell = self.cell(key);
        cell.get_or_try_init(|| build(key)).cloned()
    }

    /// The value for `key` if it has been built already.
    pub fn get(&self, key: &K) -> Option<V> {
        let cells = self.cells.read().unwrap_or_else(PoisonError::into_inner);
        cells.get(key).and_then(|c| c.get().cloned())
    }

    /// Number of keys with a built value.
    pub fn len(&self) -> usize {
        let cells = self.cells.read().unwrap_or_else(PoisonError::into_inner);
        cells.values().filter(|c| c.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell(&self, key: &K) -> Arc<OnceCell<V>> {
        {
            let cells = self.cells.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cell) = cells.get(key) {
                return Arc::clone(cell);
            }
        }
        let mut cells = self.cells.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cells.entry(key.clone()).or_default())
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Default for LazyCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
