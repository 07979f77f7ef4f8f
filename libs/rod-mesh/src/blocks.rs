//! # Block Builder
//!
//! Emits the hexahedra of every segment with global vertex indices.

use crate::mesh::HexBlock;
use crate::plan::SegmentPlan;

/// Hexahedra of one segment, in layout order.
///
/// Each layout block takes its radial cell count from the matching entry
/// of `plan.radial_cells`; all blocks of a segment share its axial count
/// and zone.
pub fn segment_blocks(plan: &SegmentPlan) -> Vec<HexBlock> {
    let layout = plan.layout();
    debug_assert_eq!(layout.block_count(), plan.radial_cells.len());

    layout
        .blocks
        .iter()
        .zip(&plan.radial_cells)
        .map(|(local, &radial)| {
            let vertices = local.map(|offset| plan.base + offset);
            HexBlock::new(vertices, plan.zone.as_str(), radial, plan.axial_cells)
        })
        .collect()
}

/// Hexahedra of all segments.
pub fn build_blocks(plans: &[SegmentPlan]) -> Vec<HexBlock> {
    let blocks: Vec<_> = plans.iter().flat_map(segment_blocks).collect();
    log::debug!("Built {} block(s)", blocks.len());
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{plan_segments, SegmentKind};
    use crate::shape::PelletShape;
    use crate::tests::discrete_rod;

    #[test]
    fn test_dished_chamfered_blocks() {
        let rod = discrete_rod(1, 2.5e-3, 5e-4);
        let plans = plan_segments(&rod);
        assert_eq!(plans[0].kind, SegmentKind::Pellet(PelletShape::DishedChamfered));

        let blocks = segment_blocks(&plans[0]);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].vertices, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(blocks[1].vertices, [1, 8, 9, 2, 5, 10, 11, 6]);
        assert_eq!(blocks[2].vertices, [8, 12, 13, 9, 10, 14, 15, 11]);
        let radial: Vec<_> = blocks.iter().map(|b| b.cells[0]).collect();
        assert_eq!(radial, vec![5, 3, 1]);
        assert!(blocks.iter().all(|b| b.cells[2] == 10 && b.zone == "fuel"));
    }

    #[test]
    fn test_blocks_are_offset_by_base() {
        let rod = discrete_rod(2, 2.5e-3, 0.0);
        let plans = plan_segments(&rod);
        let blocks = build_blocks(&plans);

        // Two dished pellets (2 blocks each) plus one cladding block.
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[2].vertices, [12, 13, 14, 15, 16, 17, 18, 19]);
        assert_eq!(blocks[3].vertices, [13, 20, 21, 14, 17, 22, 23, 18]);
        assert_eq!(blocks[4].zone, "clad");
    }

    #[test]
    fn test_every_vertex_is_used() {
        let rod = discrete_rod(3, 2.5e-3, 5e-4);
        let plans = plan_segments(&rod);
        let total: usize = plans.iter().map(|p| p.layout().vertex_count()).sum();

        let mut used = vec![false; total];
        for block in build_blocks(&plans) {
            for v in block.vertices {
                used[v] = true;
            }
        }
        assert!(used.into_iter().all(|u| u));
    }
}
