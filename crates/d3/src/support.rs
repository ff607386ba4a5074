//! Support predicate.
//!
//! A box resting on the container floor is always supported. Above the floor,
//! only placed boxes whose top face sits at the candidate's bottom height can
//! hold it up, and the area they cover is judged by a [`SupportRule`].

use cubestack_core::{PlacedItem, SupportRule, AABB3D};

/// Returns the footprint area of `candidate` covered by top faces at its
/// bottom height.
///
/// Boxes whose tops share a height cannot overlap in XY without overlapping
/// in volume, so the per-box contributions can be summed.
pub fn support_coverage<'a, I>(candidate: &AABB3D<f64>, others: I, epsilon: f64) -> f64
where
    I: IntoIterator<Item = &'a PlacedItem>,
{
    others
        .into_iter()
        .filter(|other| (other.top() - candidate.min_z).abs() <= epsilon)
        .map(|other| candidate.footprint_overlap_area(&other.aabb()))
        .sum()
}

/// Checks whether `candidate` is supported by the floor or by `others`.
pub fn is_supported<'a, I>(
    candidate: &AABB3D<f64>,
    others: I,
    rule: &SupportRule,
    epsilon: f64,
) -> bool
where
    I: IntoIterator<Item = &'a PlacedItem>,
{
    if candidate.min_z.abs() <= epsilon {
        return true;
    }

    let covered = support_coverage(candidate, others, epsilon);
    rule.is_satisfied(covered, candidate.footprint_area(), epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    const EPS: f64 = 1e-9;

    fn placed(id: &str, x: f64, y: f64, z: f64, l: f64, w: f64, h: f64) -> PlacedItem {
        PlacedItem::new(id, Vector3::new(x, y, z), Vector3::new(l, w, h))
    }

    fn candidate(x: f64, y: f64, z: f64, l: f64, w: f64, h: f64) -> AABB3D<f64> {
        AABB3D::from_origin_extents(&Vector3::new(x, y, z), &Vector3::new(l, w, h))
    }

    #[test]
    fn test_floor_always_supports() {
        let none: [PlacedItem; 0] = [];
        let c = candidate(40.0, 40.0, 0.0, 10.0, 10.0, 10.0);
        assert!(is_supported(&c, &none, &SupportRule::FullBase, EPS));
    }

    #[test]
    fn test_floating_box_unsupported() {
        let none: [PlacedItem; 0] = [];
        let c = candidate(0.0, 0.0, 5.0, 10.0, 10.0, 10.0);
        assert!(!is_supported(&c, &none, &SupportRule::Contact, EPS));
    }

    #[test]
    fn test_only_matching_tops_count() {
        let base = [placed("A", 0.0, 0.0, 0.0, 20.0, 20.0, 10.0)];
        let on_top = candidate(0.0, 0.0, 10.0, 10.0, 10.0, 10.0);
        let above = candidate(0.0, 0.0, 12.0, 10.0, 10.0, 10.0);

        assert!(is_supported(&on_top, &base, &SupportRule::Contact, EPS));
        assert!(!is_supported(&above, &base, &SupportRule::Contact, EPS));
    }

    #[test]
    fn test_edge_contact_is_not_support() {
        let base = [placed("A", 0.0, 0.0, 0.0, 10.0, 10.0, 10.0)];
        let beside = candidate(10.0, 0.0, 10.0, 10.0, 10.0, 10.0);
        assert!(!is_supported(&beside, &base, &SupportRule::Contact, EPS));
    }

    #[test]
    fn test_coverage_sums_over_supporters() {
        let base = [
            placed("A", 0.0, 0.0, 0.0, 10.0, 20.0, 10.0),
            placed("B", 10.0, 0.0, 0.0, 10.0, 20.0, 10.0),
        ];
        let bridge = candidate(5.0, 0.0, 10.0, 10.0, 10.0, 10.0);

        assert_relative_eq!(support_coverage(&bridge, &base, EPS), 100.0);
        assert!(is_supported(&bridge, &base, &SupportRule::FullBase, EPS));
    }

    #[test]
    fn test_partial_base_threshold() {
        let base = [placed("A", 0.0, 0.0, 0.0, 10.0, 10.0, 10.0)];
        // Half of the 10 x 10 footprint overhangs.
        let half = candidate(5.0, 0.0, 10.0, 10.0, 10.0, 10.0);

        assert!(is_supported(&half, &base, &SupportRule::Contact, EPS));
        assert!(is_supported(&half, &base, &SupportRule::partial_base(0.5), EPS));
        assert!(!is_supported(&half, &base, &SupportRule::partial_base(0.51), EPS));
        assert!(!is_supported(&half, &base, &SupportRule::FullBase, EPS));
    }
}
