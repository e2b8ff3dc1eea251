//! Request-scoped memoization of by-id lookups.

use std::collections::HashMap;
use std::future::Future;

use photogram_core::types::DbId;

/// Remembers lookups by id, including misses, for the lifetime of one
/// request. Build one inside a list operation and let it drop with it.
#[derive(Debug)]
pub struct LookupCache<V> {
    entries: HashMap<DbId, Option<V>>,
}

impl<V> Default for LookupCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V: Clone> LookupCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `id`, calling `load` only on the first
    /// request for that id. Errors are not cached.
    pub async fn get_or_load<F, Fut, E>(&mut self, id: DbId, load: F) -> Result<Option<V>, E>
    where
        F: FnOnce(DbId) -> Fut,
        Fut: Future<Output = Result<Option<V>, E>>,
    {
        if let Some(hit) = self.entries.get(&id) {
            return Ok(hit.clone());
        }
        let loaded = load(id).await?;
        self.entries.insert(id, loaded.clone());
        Ok(loaded)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
