//! Post-placement verification.
//!
//! The validator re-checks a finished arrangement against the global
//! invariants without looking at how it was produced. It only reads the
//! placements it is given.

use crate::boundary::Container;
use crate::support;
use cubestack_core::geometry::Boundary;
use cubestack_core::{
    InvariantChecks, PackingConfig, PackingResult, PlacedItem, SupportRule, UnplacedItem,
};

/// Widest tolerance the validator accepts, whatever the search used.
pub const MAX_TOLERANCE: f64 = 1e-6;

/// Checks completeness, containment, non-overlap and support.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    container: &'a Container,
    support: SupportRule,
    epsilon: f64,
}

impl<'a> Validator<'a> {
    /// Creates a validator using the support rule of `config`. The tolerance
    /// is the configured one, capped at [`MAX_TOLERANCE`].
    pub fn new(container: &'a Container, config: &PackingConfig) -> Self {
        Self {
            container,
            support: config.support,
            epsilon: config.epsilon.min(MAX_TOLERANCE),
        }
    }

    /// Verifies `placements` and builds the result.
    ///
    /// `total_items` is the size of the original input; `unplaced` lists the
    /// items the engine gave up on.
    pub fn validate(
        &self,
        placements: &[PlacedItem],
        total_items: usize,
        unplaced: Vec<UnplacedItem>,
    ) -> PackingResult {
        let mut checks = InvariantChecks {
            completeness: unplaced.is_empty() && placements.len() == total_items,
            ..InvariantChecks::default()
        };
        let mut violations = Vec::new();

        for p in placements {
            if !self.container.contains_within(&p.aabb(), self.epsilon) {
                checks.boundary = false;
                violations.push(format!(
                    "'{}' at {:?} leaves the container",
                    p.geometry_id,
                    p.pos()
                ));
            }
        }

        for (i, a) in placements.iter().enumerate() {
            for b in &placements[i + 1..] {
                if a.aabb().overlaps_within(&b.aabb(), self.epsilon) {
                    checks.non_overlap = false;
                    violations.push(format!(
                        "'{}' overlaps '{}'",
                        a.geometry_id, b.geometry_id
                    ));
                }
            }
        }

        for (i, p) in placements.iter().enumerate() {
            let others = placements
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| other);
            if !support::is_supported(&p.aabb(), others, &self.support, self.epsilon) {
                checks.support = false;
                violations.push(format!(
                    "'{}' at {:?} is not supported",
                    p.geometry_id,
                    p.pos()
                ));
            }
        }

        let placed_volume: f64 = placements.iter().map(PlacedItem::volume).sum();

        PackingResult {
            placements: placements.to_vec(),
            unplaced,
            total_items,
            max_height: placements.iter().map(PlacedItem::top).fold(0.0, f64::max),
            placed_volume,
            utilization: placed_volume / self.container.measure(),
            checks,
            violations,
        }
    }
}
