//! Immutable symbol table built from one parse of a tags file.

use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{CompactString, TagRecord};

/// Symbol name to definition sites, frozen at build time.
///
/// Every key maps to a non-empty slice in tags-file order. A symbol with no
/// records has no key at all.
#[derive(Debug, Default)]
pub struct TagIndex {
    entries: HashMap<CompactString, Arc<[TagRecord]>>,
    record_count: usize,
}

impl TagIndex {
    /// Group records by symbol, keeping first-defined-first order per symbol.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TagRecord>,
    {
        let mut grouped: HashMap<CompactString, Vec<TagRecord>> = HashMap::new();
        let mut record_count = 0;

        for record in records {
            record_count += 1;
            grouped
                .entry(record.symbol.clone())
                .or_default()
                .push(record.clone());
        }

        let entries = grouped
            .into_iter()
            .map(|(symbol, sites)| (symbol, Arc::from(sites)))
            .collect();

        Self {
            entries,
            record_count,
        }
    }

    /// Exact-name lookup. `None` means the symbol is not in the tags file.
    pub fn get(&self, symbol: &str) -> Option<Arc<[TagRecord]>> {
        self.entries.get(symbol).cloned()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Number of distinct symbol names.
    pub fn symbol_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of records the index was built from.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| &**s)
    }
}
