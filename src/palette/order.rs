//! Dense ordering of a palette
//!
//! After every completed mutation the `order` values of a palette of size N
//! are exactly `1..=N`. These helpers restore that from any sequence that is
//! already in its intended order.

use std::collections::HashMap;

use super::color::{ColorId, ColorRecord};

/// Stable sort by `order` ascending; ties keep their current sequence
pub fn sort_by_order(records: &mut [ColorRecord]) {
    records.sort_by_key(|r| r.order);
}

/// Assign `1, 2, 3, ...` following the sequence, ignoring previous values
pub fn reindex(records: Vec<ColorRecord>) -> Vec<ColorRecord> {
    records
        .into_iter()
        .zip(1u32..)
        .map(|(record, order)| ColorRecord { order, ..record })
        .collect()
}

/// True when the orders are a bijection onto `1..=len`
pub fn is_dense(records: &[ColorRecord]) -> bool {
    let mut seen = vec![false; records.len()];
    for record in records {
        let Some(slot) = (record.order as usize)
            .checked_sub(1)
            .and_then(|i| seen.get_mut(i))
        else {
            return false;
        };
        if *slot {
            return false;
        }
        *slot = true;
    }
    true
}

/// Snapshot of `id -> order`, used to diff before and after a mutation
pub fn order_map(records: &[ColorRecord]) -> HashMap<ColorId, u32> {
    records.iter().map(|r| (r.id, r.order)).collect()
}

/// Records whose order differs from the snapshot (or that are new to it)
pub fn changed_since<'a>(
    before: &HashMap<ColorId, u32>,
    records: &'a [ColorRecord],
) -> Vec<&'a ColorRecord> {
    records
        .iter()
        .filter(|r| before.get(&r.id) != Some(&r.order))
        .collect()
}
