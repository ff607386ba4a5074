//! Occupancy index: the set of committed boxes.
//!
//! Candidate Z-levels are derived from the committed set on every query, so
//! they can never drift out of sync with it. Boxes are only ever appended.

use crate::support;
use cubestack_core::{PlacedItem, SupportRule, AABB3D};

/// The committed boxes of a packing run.
#[derive(Debug, Clone)]
pub struct OccupancyIndex {
    /// Placed boxes in commit order.
    placed: Vec<PlacedItem>,
    /// Tolerance for height and overlap comparisons.
    epsilon: f64,
}

impl OccupancyIndex {
    /// Creates an empty index.
    pub fn new(epsilon: f64) -> Self {
        Self {
            placed: Vec::new(),
            epsilon,
        }
    }

    /// Returns the number of placed boxes.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Returns true if nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Returns the placed boxes in commit order.
    pub fn placed(&self) -> &[PlacedItem] {
        &self.placed
    }

    /// Commits a box. There is no way to remove it afterwards.
    pub fn commit(&mut self, item: PlacedItem) {
        self.placed.push(item);
    }

    /// Returns the distinct heights a new box may rest on, ascending: the
    /// floor plus every top face.
    pub fn z_levels(&self) -> Vec<f64> {
        let mut levels: Vec<f64> = std::iter::once(0.0)
            .chain(self.placed.iter().map(PlacedItem::top))
            .collect();
        levels.sort_by(f64::total_cmp);
        levels.dedup_by(|a, b| (*a - *b).abs() <= self.epsilon);
        levels
    }

    /// Returns the highest top face (0 when empty).
    pub fn max_height(&self) -> f64 {
        self.placed.iter().map(PlacedItem::top).fold(0.0, f64::max)
    }

    /// Returns total placed volume.
    pub fn total_volume(&self) -> f64 {
        self.placed.iter().map(PlacedItem::volume).sum()
    }

    /// Checks if `candidate` overlaps any placed box.
    pub fn collides(&self, candidate: &AABB3D<f64>) -> bool {
        self.placed
            .iter()
            .any(|p| candidate.overlaps_within(&p.aabb(), self.epsilon))
    }

    /// Checks if `candidate` would be supported by the floor or placed boxes.
    pub fn supports(&self, candidate: &AABB3D<f64>, rule: &SupportRule) -> bool {
        support::is_supported(candidate, &self.placed, rule, self.epsilon)
    }
}
