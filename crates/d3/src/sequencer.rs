//! Deterministic placement order.
//!
//! Items are sorted by height (descending), then volume (descending), then
//! identifier (ascending). Tall items go first so they are not blocked by
//! shorter items occupying the low, wide footprints they would need.

use crate::geometry::Item;
use cubestack_core::geometry::Geometry;
use std::cmp::Ordering;

/// Compares two items by placement priority.
pub fn placement_order(a: &Item, b: &Item) -> Ordering {
    b.height()
        .total_cmp(&a.height())
        .then_with(|| b.volume().total_cmp(&a.volume()))
        .then_with(|| a.id().cmp(b.id()))
}

/// Returns the items in placement order.
///
/// The result does not depend on the input order unless two items share
/// height, volume and identifier.
pub fn sequence(items: &[Item]) -> Vec<&Item> {
    let mut ordered: Vec<&Item> = items.iter().collect();
    ordered.sort_by(|a, b| placement_order(a, b));
    ordered
}
