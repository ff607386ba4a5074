//! Packing result representation.

use crate::geometry::GeometryId;
use crate::placement::PlacedItem;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why an item was left out of the arrangement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnplacedReason {
    /// The item can never fit: a non-positive extent or one exceeding the container.
    InvalidSpec(String),
    /// Every candidate position was rejected.
    NoValidPosition,
}

/// An item the engine could not place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnplacedItem {
    /// The ID of the item.
    pub geometry_id: GeometryId,
    /// Why it was not placed.
    pub reason: UnplacedReason,
}

impl UnplacedItem {
    /// Creates a new unplaced record.
    pub fn new(geometry_id: impl Into<GeometryId>, reason: UnplacedReason) -> Self {
        Self {
            geometry_id: geometry_id.into(),
            reason,
        }
    }

    /// Converts the record into the matching error.
    pub fn to_error(&self) -> Error {
        match &self.reason {
            UnplacedReason::InvalidSpec(msg) => Error::InvalidGeometry(msg.clone()),
            UnplacedReason::NoValidPosition => Error::NoPlacement(self.geometry_id.clone()),
        }
    }
}

/// Pass/fail outcome of each global invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InvariantChecks {
    /// Every input item was placed.
    pub completeness: bool,
    /// Every placed box lies inside the container.
    pub boundary: bool,
    /// No two placed boxes overlap.
    pub non_overlap: bool,
    /// Every placed box is supported.
    pub support: bool,
}

impl Default for InvariantChecks {
    fn default() -> Self {
        Self {
            completeness: true,
            boundary: true,
            non_overlap: true,
            support: true,
        }
    }
}

impl InvariantChecks {
    /// Returns true if the geometric invariants hold. Completeness is excluded:
    /// an unplaceable input is not an engine defect.
    pub fn geometry_valid(&self) -> bool {
        self.boundary && self.non_overlap && self.support
    }

    /// Returns true if every check passed.
    pub fn all_passed(&self) -> bool {
        self.completeness && self.geometry_valid()
    }
}

/// Result of a packing run, as verified by the validator.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingResult {
    /// Placed items in commit order.
    pub placements: Vec<PlacedItem>,

    /// Items that could not be placed, in sequencing order.
    pub unplaced: Vec<UnplacedItem>,

    /// Number of input items.
    pub total_items: usize,

    /// Highest top face among placed items (0 if nothing was placed).
    pub max_height: f64,

    /// Sum of placed item volumes.
    pub placed_volume: f64,

    /// Utilization ratio (0.0 - 1.0).
    /// Calculated as: placed_volume / container volume
    pub utilization: f64,

    /// Per-invariant outcome.
    pub checks: InvariantChecks,

    /// Human-readable description of each geometric violation found.
    pub violations: Vec<String>,
}

impl PackingResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if all items were placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty() && self.placements.len() == self.total_items
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of unplaced items.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Returns the IDs of the unplaced items.
    pub fn unplaced_ids(&self) -> Vec<&str> {
        self.unplaced
            .iter()
            .map(|u| u.geometry_id.as_str())
            .collect()
    }

    /// Finds the placement of the given item.
    pub fn placement_of(&self, id: &str) -> Option<&PlacedItem> {
        self.placements.iter().find(|p| p.geometry_id == id)
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Fails with [`Error::InvariantViolation`] if a geometric check failed.
    pub fn ensure_valid(&self) -> Result<()> {
        if self.checks.geometry_valid() {
            return Ok(());
        }
        Err(Error::InvariantViolation(self.violations.join("; ")))
    }
}

/// Summary statistics for a packing result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingSummary {
    /// Total items requested.
    pub total_requested: usize,
    /// Total items placed.
    pub total_placed: usize,
    /// Highest top face.
    pub max_height: f64,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// IDs of the unplaced items.
    pub unplaced: Vec<GeometryId>,
    /// Outcome of each invariant check.
    pub checks: InvariantChecks,
}

impl From<&PackingResult> for PackingSummary {
    fn from(result: &PackingResult) -> Self {
        Self {
            total_requested: result.total_items,
            total_placed: result.placements.len(),
            max_height: result.max_height,
            utilization_percent: result.utilization * 100.0,
            unplaced: result
                .unplaced
                .iter()
                .map(|u| u.geometry_id.clone())
                .collect(),
            checks: result.checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_result_new() {
        let result = PackingResult::new();
        assert!(result.placements.is_empty());
        assert_eq!(result.utilization, 0.0);
        assert!(result.all_placed());
        assert!(result.checks.all_passed());
    }

    #[test]
    fn test_result_with_unplaced() {
        let mut result = PackingResult::new();
        result.total_items = 2;
        result
            .unplaced
            .push(UnplacedItem::new("G1", UnplacedReason::NoValidPosition));
        result.unplaced.push(UnplacedItem::new(
            "G2",
            UnplacedReason::InvalidSpec("too tall".into()),
        ));

        assert!(!result.all_placed());
        assert_eq!(result.unplaced_count(), 2);
        assert_eq!(result.unplaced_ids(), vec!["G1", "G2"]);
        assert_eq!(
            result.unplaced[0].to_error(),
            Error::NoPlacement("G1".into())
        );
        assert_eq!(
            result.unplaced[1].to_error(),
            Error::InvalidGeometry("too tall".into())
        );
    }

    #[test]
    fn test_ensure_valid() {
        let mut result = PackingResult::new();
        result.checks.completeness = false;
        assert!(result.ensure_valid().is_ok());

        result.checks.non_overlap = false;
        result.violations.push("A overlaps B".into());
        assert_eq!(
            result.ensure_valid(),
            Err(Error::InvariantViolation("A overlaps B".into()))
        );
    }

    #[test]
    fn test_summary() {
        let mut result = PackingResult::new();
        result.placements.push(PlacedItem::new(
            "B1",
            Vector3::zeros(),
            Vector3::new(10.0, 10.0, 10.0),
        ));
        result.total_items = 1;
        result.max_height = 10.0;
        result.utilization = 0.001;

        let summary = PackingSummary::from(&result);
        assert_eq!(summary.total_placed, 1);
        assert_eq!(summary.total_requested, 1);
        assert_eq!(summary.max_height, 10.0);
        assert!(summary.unplaced.is_empty());
        assert_eq!(result.utilization_percent(), "0.1%");
    }
}
