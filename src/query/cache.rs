//! Shared cache of query definitions.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::error::Result;

use super::string_query::StringQuery;

/// Caches one [`StringQuery`] per query method.
///
/// Definitions are built on first use and handed out as `Arc`s, so every
/// invocation of the same method reads the same bindings.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<String, Arc<StringQuery>>>,
}

impl QueryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached definition for `method`, building it with `build` on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the error from `build`; nothing is cached in that case.
    pub fn get_or_build<F>(&self, method: &str, build: F) -> Result<Arc<StringQuery>>
    where
        F: FnOnce() -> Result<StringQuery>,
    {
        if let Some(query) = self.entries.read().get(method) {
            return Ok(Arc::clone(query));
        }

        let query = Arc::new(build()?);
        let mut entries = self.entries.write();
        // Another thread may have won the race while the lock was released.
        let entry = entries
            .entry(method.to_string())
            .or_insert_with(|| Arc::clone(&query));
        trace!(method, "cached query definition");
        Ok(Arc::clone(entry))
    }

    /// Returns the cached definition for `method`, if any.
    #[must_use]
    pub fn get(&self, method: &str) -> Option<Arc<StringQuery>> {
        self.entries.read().get(method).cloned()
    }

    /// Returns the number of cached definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every cached definition.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
