//! # Patch Builder
//!
//! Classifies the outward faces of every segment into named boundary
//! patches and records which stacked interfaces are merged.
//!
//! ## Naming
//!
//! Fuel sections run `1..=N` up the stack, cladding sections `1..=M`
//! through bottom cap, tubes and top cap. End faces are numbered except at
//! the ends of the stack:
//!
//! ```text
//! section 1:   fuelBottom      fuelTop_1
//! section k:   fuelBottom_k    fuelTop_k
//! section N:   fuelBottom_N    fuelTop
//! ```
//!
//! Neighbouring end faces are either coupled to each other or, when the
//! region merges its patch pairs, left as plain patches and listed as a
//! merge pair.

use crate::input::{GeometryType, RodDescription};
use crate::mesh::{Boundary, MergePair, PatchKind};
use crate::plan::{Region, SegmentKind, SegmentPlan};
use crate::shape::FaceRole;

// =============================================================================
// NAMES
// =============================================================================

const BOTTOM_CAP_INNER: &str = "bottomCapInner";
const TOP_CAP_INNER: &str = "topCapInner";

/// Patch name prefix of a region.
const fn prefix(region: Region) -> &'static str {
    match region {
        Region::Fuel => "fuel",
        Region::Clad => "clad",
    }
}

/// Name of a lower end face of section `section`.
///
/// ## Parameters
///
/// - `region`: fuel or cladding
/// - `section`: 1-based section number; section 1 is unnumbered
fn bottom_name(region: Region, section: usize) -> String {
    if section == 1 {
        format!("{}Bottom", prefix(region))
    } else {
        format!("{}Bottom_{}", prefix(region), section)
    }
}

/// Name of an upper end face; the last section is unnumbered.
fn top_name(region: Region, section: usize, sections: usize) -> String {
    if section == sections {
        format!("{}Top", prefix(region))
    } else {
        format!("{}Top_{}", prefix(region), section)
    }
}

// =============================================================================
// SECTION PATCHES
// =============================================================================

/// How the boundary of the whole rod is assembled.
struct Rules {
    one_d: bool,
    merge_fuel: bool,
    merge_clad: bool,
    bottom_cap: bool,
    top_cap: bool,
}

impl Rules {
    fn new(rod: &RodDescription) -> Self {
        Self {
            one_d: rod.geometry == GeometryType::OneD,
            merge_fuel: rod.merge_fuel_patch_pairs,
            merge_clad: rod.merge_clad_patch_pairs,
            bottom_cap: rod.bottom_cap.is_some(),
            top_cap: rod.top_cap.is_some(),
        }
    }

    fn merges(&self, region: Region) -> bool {
        match region {
            Region::Fuel => self.merge_fuel,
            Region::Clad => self.merge_clad,
        }
    }

    /// Name and kind of the lower end face of a segment.
    fn bottom(&self, plan: &SegmentPlan) -> (String, PatchKind) {
        let region = plan.region();
        let name = bottom_name(region, plan.section);

        // A fuel end facing a cap stays coupled to it, in 1D too.
        let kind = if plan.is_first() && region == Region::Fuel && self.bottom_cap {
            PatchKind::coupled(BOTTOM_CAP_INNER, true, false)
        } else if self.one_d {
            PatchKind::Empty
        } else if plan.is_first() || self.merges(region) {
            PatchKind::Patch
        } else {
            let neighbour = top_name(region, plan.section - 1, plan.sections);
            PatchKind::coupled(neighbour, false, false)
        };

        (name, kind)
    }

    /// Name and kind of the upper end face of a segment.
    fn top(&self, plan: &SegmentPlan) -> (String, PatchKind) {
        let region = plan.region();
        let name = top_name(region, plan.section, plan.sections);

        let kind = if plan.is_last() && region == Region::Fuel && self.top_cap {
            PatchKind::coupled(TOP_CAP_INNER, true, false)
        } else if self.one_d {
            PatchKind::Empty
        } else if plan.is_last() || self.merges(region) {
            PatchKind::Patch
        } else {
            PatchKind::coupled(bottom_name(region, plan.section + 1), true, false)
        };

        (name, kind)
    }

    /// Merge pair joining a segment's top to the next section, if merged.
    fn merge_pair(&self, plan: &SegmentPlan) -> Option<MergePair> {
        let region = plan.region();
        (self.merges(region) && !plan.is_last()).then(|| MergePair {
            master: top_name(region, plan.section, plan.sections),
            slave: bottom_name(region, plan.section + 1),
        })
    }
}

/// Name and kind of every role a segment's faces can take.
struct SectionPatches {
    bottom: (String, PatchKind),
    top: (String, PatchKind),
    inner: Option<(&'static str, PatchKind)>,
    outer: (&'static str, PatchKind),
    cap_inner: Option<(&'static str, PatchKind)>,
    front: &'static str,
    back: &'static str,
}

impl SectionPatches {
    fn new(rules: &Rules, plan: &SegmentPlan) -> Self {
        let region = plan.region();

        let inner = plan.inner_face.then(|| match region {
            Region::Fuel => ("fuelInner", PatchKind::Patch),
            Region::Clad => ("cladInner", PatchKind::coupled("fuelOuter", false, true)),
        });
        let outer = match region {
            Region::Fuel => ("fuelOuter", PatchKind::coupled("cladInner", true, true)),
            Region::Clad => ("cladOuter", PatchKind::Patch),
        };
        let cap_inner = match plan.kind {
            SegmentKind::BottomCap => Some((
                BOTTOM_CAP_INNER,
                PatchKind::coupled("fuelBottom", false, false),
            )),
            SegmentKind::TopCap => Some((
                TOP_CAP_INNER,
                PatchKind::coupled("fuelTop", false, false),
            )),
            _ => None,
        };
        let (front, back) = match region {
            Region::Fuel => ("fuelFront", "fuelBack"),
            Region::Clad => ("cladFront", "cladBack"),
        };

        Self {
            bottom: rules.bottom(plan),
            top: rules.top(plan),
            inner,
            outer,
            cap_inner,
            front,
            back,
        }
    }

    /// Patch a face of the given role belongs to; `None` drops the face.
    fn patch(&self, role: FaceRole) -> Option<(&str, PatchKind)> {
        match role {
            FaceRole::Bottom => Some((self.bottom.0.as_str(), self.bottom.1.clone())),
            FaceRole::Top => Some((self.top.0.as_str(), self.top.1.clone())),
            FaceRole::Inner => self.inner.clone(),
            FaceRole::Outer => Some(self.outer.clone()),
            FaceRole::CapInner => self.cap_inner.clone(),
            FaceRole::Front => Some((self.front, PatchKind::Wedge)),
            FaceRole::Back => Some((self.back, PatchKind::Wedge)),
        }
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Classify every outward face of every segment.
///
/// ## Parameters
///
/// - `rod`: supplies geometry type, merge flags and cap presence
/// - `plans`: segments in vertex order, fuel before cladding
///
/// ## Returns
///
/// The boundary, patches in first-seen order, and the merge pairs in
/// stack order.
pub fn build_boundary(rod: &RodDescription, plans: &[SegmentPlan]) -> (Boundary, Vec<MergePair>) {
    let rules = Rules::new(rod);
    let mut boundary = Boundary::new();
    let mut merge_pairs = Vec::new();

    for plan in plans {
        let patches = SectionPatches::new(&rules, plan);

        for (role, quad) in plan.layout().faces {
            if let Some((name, kind)) = patches.patch(*role) {
                boundary.add_face(name, kind, quad.map(|offset| plan.base + offset));
            }
        }

        merge_pairs.extend(rules.merge_pair(plan));
    }

    log::debug!(
        "Built {} patch(es) and {} merge pair(s)",
        boundary.len(),
        merge_pairs.len()
    );
    (boundary, merge_pairs)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::EndCap;
    use crate::mesh::Coupling;
    use crate::plan::plan_segments;
    use crate::tests::discrete_rod;

    fn boundary_of(rod: &RodDescription) -> (Boundary, Vec<MergePair>) {
        build_boundary(rod, &plan_segments(rod))
    }

    fn coupling(boundary: &Boundary, name: &str) -> Coupling {
        match &boundary.get(name).unwrap().kind {
            PatchKind::Coupled(c) => c.clone(),
            other => panic!("{} is {:?}", name, other),
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(bottom_name(Region::Fuel, 1), "fuelBottom");
        assert_eq!(bottom_name(Region::Clad, 3), "cladBottom_3");
        assert_eq!(top_name(Region::Fuel, 2, 2), "fuelTop");
        assert_eq!(top_name(Region::Fuel, 1, 2), "fuelTop_1");
    }

    #[test]
    fn test_stacked_pellets_are_coupled() {
        let (boundary, pairs) = boundary_of(&discrete_rod(3, 0.0, 0.0));
        assert!(pairs.is_empty());

        let top = coupling(&boundary, "fuelTop_1");
        assert_eq!(top.neighbour, "fuelBottom_2");
        assert!(top.owner && !top.update_mapping);

        let bottom = coupling(&boundary, "fuelBottom_3");
        assert_eq!(bottom.neighbour, "fuelTop_2");
        assert!(!bottom.owner);

        assert_eq!(boundary.get("fuelBottom").unwrap().kind, PatchKind::Patch);
        assert_eq!(boundary.get("fuelTop").unwrap().kind, PatchKind::Patch);
    }

    #[test]
    fn test_merged_pellets_list_pairs() {
        let mut rod = discrete_rod(3, 2.5e-3, 0.0);
        rod.merge_fuel_patch_pairs = true;
        let (boundary, pairs) = boundary_of(&rod);

        let pairs: Vec<_> = pairs
            .iter()
            .map(|p| (p.master.as_str(), p.slave.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("fuelTop_1", "fuelBottom_2"), ("fuelTop_2", "fuelBottom_3")]
        );
        assert_eq!(boundary.get("fuelTop_1").unwrap().kind, PatchKind::Patch);
        assert_eq!(boundary.get("fuelBottom_2").unwrap().kind, PatchKind::Patch);
        // The single cladding block is unaffected.
        assert_eq!(boundary.get("cladTop").unwrap().kind, PatchKind::Patch);
    }

    #[test]
    fn test_dish_facets_share_end_face_patch() {
        let (boundary, _) = boundary_of(&discrete_rod(2, 2.5e-3, 5e-4));
        // Dish, land and chamfer facets all land on the numbered end face.
        assert_eq!(
            boundary.get("fuelTop_1").unwrap().faces,
            vec![[4, 5, 6, 7], [5, 10, 11, 6], [10, 14, 15, 11]]
        );
        assert_eq!(boundary.get("fuelBottom_2").unwrap().faces.len(), 3);
        assert_eq!(boundary.get("fuelFront").unwrap().faces.len(), 6);
        assert_eq!(
            boundary.get("fuelOuter").unwrap().faces,
            vec![[12, 13, 15, 14], [28, 29, 31, 30]]
        );
    }

    #[test]
    fn test_radial_interface() {
        let (boundary, _) = boundary_of(&discrete_rod(1, 0.0, 0.0));
        let outer = coupling(&boundary, "fuelOuter");
        assert_eq!(outer.neighbour, "cladInner");
        assert!(outer.owner && outer.update_mapping);

        let inner = coupling(&boundary, "cladInner");
        assert_eq!(inner.neighbour, "fuelOuter");
        assert!(!inner.owner && inner.update_mapping);

        assert!(boundary.get("fuelInner").is_none());
        assert_eq!(boundary.get("cladOuter").unwrap().kind, PatchKind::Patch);
        assert_eq!(boundary.get("cladFront").unwrap().kind, PatchKind::Wedge);
    }

    #[test]
    fn test_annular_fuel_has_inner_patch() {
        let mut rod = discrete_rod(1, 0.0, 0.0);
        rod.fuel[0].inner_radius = 1e-3;
        let (boundary, _) = boundary_of(&rod);
        assert_eq!(boundary.get("fuelInner").unwrap().faces, vec![[0, 4, 7, 3]]);
    }

    #[test]
    fn test_bottom_cap_couples_to_fuel_bottom() {
        let mut rod = discrete_rod(2, 0.0, 0.0);
        rod.bottom_cap = Some(EndCap {
            height: 2e-3,
            radial_cells: 4,
            axial_cells: 3,
        });
        let (boundary, _) = boundary_of(&rod);

        let fuel = coupling(&boundary, "fuelBottom");
        assert_eq!(fuel.neighbour, "bottomCapInner");
        assert!(fuel.owner);

        let cap = coupling(&boundary, "bottomCapInner");
        assert_eq!(cap.neighbour, "fuelBottom");
        assert!(!cap.owner);
        // Cap segment starts after two flat pellets.
        assert_eq!(boundary.get("bottomCapInner").unwrap().faces, vec![[20, 21, 22, 23]]);

        // Cap bottom covers disc and ring; its top is the ring only.
        assert_eq!(
            boundary.get("cladBottom").unwrap().faces,
            vec![[16, 19, 18, 17], [17, 18, 25, 24]]
        );
        assert_eq!(boundary.get("cladTop_1").unwrap().faces, vec![[21, 26, 27, 22]]);
        assert_eq!(coupling(&boundary, "cladBottom_2").neighbour, "cladTop_1");
        // Only the tube faces the fuel.
        assert_eq!(boundary.get("cladInner").unwrap().faces, vec![[28, 32, 35, 31]]);
    }

    #[test]
    fn test_top_cap_owned_by_fuel() {
        let mut rod = discrete_rod(2, 0.0, 0.0);
        rod.top_cap = Some(EndCap {
            height: 2e-3,
            radial_cells: 4,
            axial_cells: 3,
        });
        let (boundary, _) = boundary_of(&rod);

        let fuel = coupling(&boundary, "fuelTop");
        assert_eq!(fuel.neighbour, "topCapInner");
        assert!(fuel.owner);

        let cap = coupling(&boundary, "topCapInner");
        assert_eq!(cap.neighbour, "fuelTop");
        assert!(!cap.owner);

        assert_eq!(coupling(&boundary, "cladTop_1").neighbour, "cladBottom_2");
        assert_eq!(boundary.get("cladTop").unwrap().faces.len(), 2);
        assert_eq!(boundary.get("fuelBottom").unwrap().kind, PatchKind::Patch);
    }

    #[test]
    fn test_one_d_end_faces_are_empty() {
        let mut rod = discrete_rod(1, 0.0, 0.0);
        rod.geometry = GeometryType::OneD;
        rod.fuel.push(rod.fuel[0].clone());
        let (boundary, _) = boundary_of(&rod);

        let names = [
            "fuelBottom",
            "fuelTop_1",
            "fuelBottom_2",
            "fuelTop",
            "cladBottom",
            "cladTop",
        ];
        for name in names {
            assert_eq!(boundary.get(name).unwrap().kind, PatchKind::Empty, "{}", name);
        }
        assert_eq!(coupling(&boundary, "fuelOuter").neighbour, "cladInner");
    }

    #[test]
    fn test_one_d_fuel_ends_stay_coupled_to_caps() {
        let mut rod = discrete_rod(1, 0.0, 0.0);
        rod.geometry = GeometryType::OneD;
        rod.bottom_cap = Some(EndCap {
            height: 2e-3,
            radial_cells: 4,
            axial_cells: 1,
        });
        rod.top_cap = rod.bottom_cap;
        let (boundary, _) = boundary_of(&rod);

        let bottom = coupling(&boundary, "fuelBottom");
        assert_eq!(bottom.neighbour, "bottomCapInner");
        assert!(bottom.owner);
        assert_eq!(coupling(&boundary, "bottomCapInner").neighbour, "fuelBottom");

        let top = coupling(&boundary, "fuelTop");
        assert_eq!(top.neighbour, "topCapInner");
        assert!(top.owner);
        assert_eq!(coupling(&boundary, "topCapInner").neighbour, "fuelTop");

        // Cladding ends and the cap-to-tube interfaces are still empty.
        for name in ["cladBottom", "cladTop_1", "cladBottom_2", "cladTop_2", "cladTop"] {
            assert_eq!(boundary.get(name).unwrap().kind, PatchKind::Empty, "{}", name);
        }
    }

    #[test]
    fn test_patch_order() {
        let (boundary, _) = boundary_of(&discrete_rod(2, 0.0, 0.0));
        let names: Vec<_> = boundary.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "fuelBottom",
                "fuelTop_1",
                "fuelOuter",
                "fuelFront",
                "fuelBack",
                "fuelBottom_2",
                "fuelTop",
                "cladBottom",
                "cladTop",
                "cladInner",
                "cladOuter",
                "cladFront",
                "cladBack",
            ]
        );
    }
}
