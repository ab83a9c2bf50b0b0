//! In-memory table caching.

use chrono::NaiveDate;
use std::collections::HashMap;

use feeder_core::types::PriceTable;

/// Simple in-memory cache of fetched price tables.
pub struct TableCache {
    cache: HashMap<String, PriceTable>,
}

impl TableCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    fn cache_key(symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        format!("{}_{}_{}", symbol, start, end)
    }

    /// Get a cached table.
    pub fn get(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Option<&PriceTable> {
        self.cache.get(&Self::cache_key(symbol, start, end))
    }

    /// Store a table.
    pub fn put(&mut self, symbol: &str, start: NaiveDate, end: NaiveDate, table: PriceTable) {
        self.cache
            .insert(Self::cache_key(symbol, start, end), table);
    }

    /// Drop every cached range for a symbol.
    pub fn clear(&mut self, symbol: &str) {
        let prefix = format!("{}_", symbol);
        self.cache.retain(|k, _| !k.starts_with(&prefix));
    }

    /// Drop everything.
    pub fn clear_all(&mut self) {
        self.cache.clear();
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}
