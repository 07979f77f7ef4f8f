//! # Edge Builder
//!
//! Curves the dish edges of dished pellets.
//!
//! Each end face of a dished pellet gets two arcs, one per wedge side,
//! running from the inner corner on the dish floor to the dish rim and
//! passing through the mid-point of the spherical profile:
//!
//! ```text
//! bottom:  0 → 1 (−y)   3 → 2 (+y)
//! top:     4 → 5 (−y)   7 → 6 (+y)
//! ```

use crate::mesh::ArcEdge;
use crate::plan::SegmentPlan;
use crate::shape::Side;
use crate::vertices::Wedge;

/// Arc edges of one segment; empty unless it carries a dish arc.
pub fn segment_edges(plan: &SegmentPlan, wedge: &Wedge) -> Vec<ArcEdge> {
    let Some(arc) = plan.arc else {
        return Vec::new();
    };

    let bottom = arc.height + plan.z0;
    let top = (plan.height - arc.height) + plan.z0;
    let base = plan.base;

    [
        (0, 1, Side::Minus, bottom),
        (3, 2, Side::Plus, bottom),
        (4, 5, Side::Minus, top),
        (7, 6, Side::Plus, top),
    ]
    .into_iter()
    .map(|(from, to, side, z)| ArcEdge {
        from: base + from,
        to: base + to,
        through: wedge.project(arc.radius, side, z),
    })
    .collect()
}

/// Arc edge groups, one per dished pellet, in stack order.
pub fn build_edges(plans: &[SegmentPlan], wedge: &Wedge) -> Vec<Vec<ArcEdge>> {
    let groups: Vec<_> = plans
        .iter()
        .map(|plan| segment_edges(plan, wedge))
        .filter(|edges| !edges.is_empty())
        .collect();
    log::debug!("Built {} arc edge group(s)", groups.len());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan_segments;
    use crate::tests::discrete_rod;
    use approx::assert_relative_eq;

    #[test]
    fn test_dished_pellet_has_four_arcs() {
        let rod = discrete_rod(1, 2.5e-3, 0.0);
        let plans = plan_segments(&rod);
        let wedge = Wedge::new(rod.wedge_angle);
        let edges = segment_edges(&plans[0], &wedge);

        let pairs: Vec<_> = edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![(0, 1), (3, 2), (4, 5), (7, 6)]);

        let arc = plans[0].arc.unwrap();
        assert_eq!(edges[0].through, wedge.project(1.25e-3, Side::Minus, arc.height));
        assert_eq!(edges[1].through.y, -edges[0].through.y);
        assert_relative_eq!(edges[2].through.z, plans[0].height - arc.height);
    }

    #[test]
    fn test_arc_lies_between_floor_and_face() {
        let rod = discrete_rod(1, 2.5e-3, 5e-4);
        let plans = plan_segments(&rod);
        let edges = segment_edges(&plans[0], &Wedge::new(rod.wedge_angle));
        // The mid-point sits above the dish floor but below the end face.
        assert!(edges[0].through.z > 0.0);
        assert!(edges[0].through.z < plans[0].dish_depth);
    }

    #[test]
    fn test_only_dished_pellets_get_edges() {
        let rod = discrete_rod(3, 2.5e-3, 0.0);
        let plans = plan_segments(&rod);
        let groups = build_edges(&plans, &Wedge::new(rod.wedge_angle));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2][0].from, 24);

        let flat = discrete_rod(3, 0.0, 5e-4);
        assert!(build_edges(&plan_segments(&flat), &Wedge::new(2.0)).is_empty());
    }
}
