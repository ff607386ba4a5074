//! Packing engine.

use crate::boundary::Container;
use crate::geometry::Item;
use crate::occupancy::OccupancyIndex;
use crate::search::PlacementSearch;
use crate::sequencer::sequence;
use crate::validator::Validator;
use cubestack_core::geometry::{Boundary, Geometry};
use cubestack_core::solver::{PackingConfig, Solver};
use cubestack_core::{
    Error, PackingResult, PlacedItem, Result, UnplacedItem, UnplacedReason,
};

/// Committed boxes and rejected items of a run, before validation.
#[derive(Debug, Clone)]
pub struct PackingRun {
    /// The final occupancy index.
    pub index: OccupancyIndex,
    /// Items that could not be placed, in sequencing order.
    pub unplaced: Vec<UnplacedItem>,
}

/// Deterministic gravity-aware packer.
///
/// Items are placed one at a time in sequencer order. A committed item is
/// never moved, and an item that cannot be placed is recorded and skipped.
#[derive(Debug, Clone, Default)]
pub struct Packer {
    config: PackingConfig,
}

impl Packer {
    /// Creates a new packer with the given configuration.
    pub fn new(config: PackingConfig) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(PackingConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PackingConfig {
        &self.config
    }

    /// Places every item it can and returns the unvalidated run.
    ///
    /// Fails only for an invalid configuration or container.
    pub fn place_all(&self, items: &[Item], container: &Container) -> Result<PackingRun> {
        self.config.validate()?;
        container.validate()?;

        let search = PlacementSearch::new(container, &self.config);
        let mut index = OccupancyIndex::new(self.config.epsilon);
        let mut unplaced = Vec::new();

        for item in sequence(items) {
            if let Err(err) = item.validate_for(container) {
                log::warn!(
                    "Skipping item '{}' ({}): {}",
                    item.id(),
                    item.kind().unwrap_or("-"),
                    err
                );
                let reason = match err {
                    Error::InvalidGeometry(msg) => msg,
                    other => other.to_string(),
                };
                unplaced.push(UnplacedItem::new(
                    item.id().clone(),
                    UnplacedReason::InvalidSpec(reason),
                ));
                continue;
            }

            match search.find(item, &index) {
                Some(position) => {
                    log::debug!(
                        "Placed item '{}' ({}) at ({}, {}, {})",
                        item.id(),
                        item.kind().unwrap_or("-"),
                        position.x,
                        position.y,
                        position.z
                    );
                    index.commit(
                        PlacedItem::new(item.id().clone(), position, *item.dimensions())
                            .with_kind(item.kind().map(str::to_owned)),
                    );
                }
                None => {
                    log::warn!(
                        "Could not place item '{}' ({})",
                        item.id(),
                        item.kind().unwrap_or("-")
                    );
                    unplaced.push(UnplacedItem::new(
                        item.id().clone(),
                        UnplacedReason::NoValidPosition,
                    ));
                }
            }
        }

        log::debug!(
            "Committed {} items, stack height {}, volume {}",
            index.len(),
            index.max_height(),
            index.total_volume()
        );

        Ok(PackingRun { index, unplaced })
    }

    /// Packs `items` into `container` and validates the outcome.
    ///
    /// Unplaced items are reported on the result. An invariant violation in the
    /// committed arrangement is returned as [`Error::InvariantViolation`].
    pub fn pack(&self, items: &[Item], container: &Container) -> Result<PackingResult> {
        let run = self.place_all(items, container)?;
        let result = Validator::new(container, &self.config).validate(
            run.index.placed(),
            items.len(),
            run.unplaced,
        );

        log::info!(
            "Packed {}/{} items, max height {} of {}, utilization {}",
            result.placed_count(),
            result.total_items,
            result.max_height,
            container.height(),
            result.utilization_percent()
        );

        result.ensure_valid()?;
        Ok(result)
    }
}

impl Solver for Packer {
    type Geometry = Item;
    type Boundary = Container;

    fn solve(&self, geometries: &[Item], boundary: &Container) -> Result<PackingResult> {
        self.pack(geometries, boundary)
    }
}
