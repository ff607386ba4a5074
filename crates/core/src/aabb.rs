//! Axis-aligned box primitives.
//!
//! Overlap is tested on open intervals: boxes that only share a face, an edge
//! or a corner do not overlap. All tolerance-aware variants shrink the
//! intervals by `tolerance` before comparing, so values closer than the
//! tolerance are treated as touching.

use nalgebra::{RealField, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Minimum z coordinate.
    pub min_z: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
    /// Maximum z coordinate.
    pub max_z: S,
}

impl<S: RealField + Copy> AABB3D<S> {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: S, min_y: S, min_z: S, max_x: S, max_y: S, max_z: S) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Creates an AABB from its minimum corner and extents.
    pub fn from_origin_extents(origin: &Vector3<S>, extents: &Vector3<S>) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.z,
            origin.x + extents.x,
            origin.y + extents.y,
            origin.z + extents.z,
        )
    }

    /// Creates an AABB spanning from the origin to `extents`.
    pub fn from_extents(extents: &Vector3<S>) -> Self {
        Self::from_origin_extents(&Vector3::zeros(), extents)
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Vector3<S> {
        Vector3::new(self.min_x, self.min_y, self.min_z)
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Vector3<S> {
        Vector3::new(self.max_x, self.max_y, self.max_z)
    }

    /// Returns the width (x dimension) of the AABB.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Returns the depth (y dimension) of the AABB.
    pub fn depth(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns the height (z dimension) of the AABB.
    pub fn height(&self) -> S {
        self.max_z - self.min_z
    }

    /// Returns the volume of the AABB.
    pub fn volume(&self) -> S {
        self.width() * self.depth() * self.height()
    }

    /// Returns the area of the bottom face.
    pub fn footprint_area(&self) -> S {
        self.width() * self.depth()
    }

    /// Checks if this AABB overlaps another with nonzero volume.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.overlaps_within(other, S::zero())
    }

    /// Tolerance-aware variant of [`overlaps`](Self::overlaps).
    pub fn overlaps_within(&self, other: &Self, tolerance: S) -> bool {
        self.footprints_overlap_within(other, tolerance)
            && self.min_z < other.max_z - tolerance
            && self.max_z > other.min_z + tolerance
    }

    /// Checks if the XY projections overlap with nonzero area.
    pub fn footprints_overlap_within(&self, other: &Self, tolerance: S) -> bool {
        self.min_x < other.max_x - tolerance
            && self.max_x > other.min_x + tolerance
            && self.min_y < other.max_y - tolerance
            && self.max_y > other.min_y + tolerance
    }

    /// Returns the area shared by the XY projections of both boxes.
    pub fn footprint_overlap_area(&self, other: &Self) -> S {
        let dx = self.max_x.min(other.max_x) - self.min_x.max(other.min_x);
        let dy = self.max_y.min(other.max_y) - self.min_y.max(other.min_y);
        if dx > S::zero() && dy > S::zero() {
            dx * dy
        } else {
            S::zero()
        }
    }

    /// Checks if `other` lies fully inside this AABB.
    pub fn contains(&self, other: &Self) -> bool {
        self.contains_within(other, S::zero())
    }

    /// Tolerance-aware variant of [`contains`](Self::contains).
    pub fn contains_within(&self, other: &Self, tolerance: S) -> bool {
        other.min_x >= self.min_x - tolerance
            && other.min_y >= self.min_y - tolerance
            && other.min_z >= self.min_z - tolerance
            && other.max_x <= self.max_x + tolerance
            && other.max_y <= self.max_y + tolerance
            && other.max_z <= self.max_z + tolerance
    }
}
