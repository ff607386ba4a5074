//! Candidate search for a single item.
//!
//! # Scan order
//!
//! Z-levels are visited in ascending order. At each level the container
//! footprint is rastered with origins at whole multiples of the grid step,
//! X outer and Y inner, both ascending. The first origin that passes the
//! boundary, collision and support checks (in that order) wins. Changing the
//! order changes every deterministic result.

use crate::boundary::Container;
use crate::geometry::Item;
use crate::occupancy::OccupancyIndex;
use cubestack_core::{PackingConfig, AABB3D};
use nalgebra::Vector3;

/// Finds placements for one item at a time against an occupancy index.
#[derive(Debug, Clone, Copy)]
pub struct PlacementSearch<'a> {
    container: &'a Container,
    config: &'a PackingConfig,
}

impl<'a> PlacementSearch<'a> {
    /// Creates a search over the given container.
    pub fn new(container: &'a Container, config: &'a PackingConfig) -> Self {
        Self { container, config }
    }

    /// Returns the first valid origin for `item`, or `None` if no candidate
    /// passes every check.
    ///
    /// The answer depends only on the index contents and the configuration.
    pub fn find(&self, item: &Item, index: &OccupancyIndex) -> Option<Vector3<f64>> {
        let dims = item.dimensions();
        let bounds = self.container.dimensions();
        let eps = self.config.epsilon;
        let step = self.config.grid_step;

        let nx = raster_len(bounds.x - dims.x, step, eps);
        let ny = raster_len(bounds.y - dims.y, step, eps);

        for z in index.z_levels() {
            // Levels ascend, so nothing higher can fit either.
            if z + dims.z > bounds.z + eps {
                break;
            }

            for i in 0..nx {
                let x = i as f64 * step;
                for j in 0..ny {
                    let y = j as f64 * step;
                    let origin = Vector3::new(x, y, z);
                    if self.accepts(&AABB3D::from_origin_extents(&origin, dims), index) {
                        return Some(origin);
                    }
                }
            }
        }

        None
    }

    /// Runs the three placement checks on a candidate box.
    pub fn accepts(&self, candidate: &AABB3D<f64>, index: &OccupancyIndex) -> bool {
        self.container.contains_within(candidate, self.config.epsilon)
            && !index.collides(candidate)
            && index.supports(candidate, &self.config.support)
    }
}

/// Number of raster origins `0, step, 2*step, ...` not exceeding `free`.
fn raster_len(free: f64, step: f64, eps: f64) -> usize {
    if free < -eps {
        return 0;
    }
    ((free.max(0.0) + eps) / step).floor() as usize + 1
}
