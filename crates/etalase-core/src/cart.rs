//! Aggregation over fetched cart entries
//!
//! Fetchers hand back entries untouched; these helpers are for the
//! calling side.

use crate::types::CartEntry;
use std::collections::HashSet;

/// Sum of quantities over all entries
pub fn total_quantity(entries: &[CartEntry]) -> u64 {
    entries.iter().map(|e| e.quantity).sum()
}

/// Number of different products referenced by the entries
pub fn distinct_products(entries: &[CartEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.product_id)
        .collect::<HashSet<_>>()
        .len()
}
