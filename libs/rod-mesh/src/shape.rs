//! # Segment Layouts
//!
//! Static corner/block/face tables for every segment shape.
//!
//! A segment is one pellet, one smeared fuel column, one cladding block or
//! one end cap. Its vertices are the layout's corners in order, so the
//! vertex stride, the hexahedra and the boundary faces all come from the
//! same table.
//!
//! ## Cross-section (r-z half plane, dished-chamfered pellet)
//!
//! ```text
//!  z
//!  ^   4 ----- 5 ------- 10
//!  |   |       |          \ 14
//!  |   |       |           |
//!  |   |       |           | 12
//!  |   0 ----- 1 ------- 8 /
//!  +-----------------------------> r
//!    inner   dish      land  outer
//! ```
//!
//! Each point in the diagram is a pair of corners, one on each side of the
//! wedge (`−` gives the even offsets above, `+` the matching odd ones).

// =============================================================================
// CORNERS
// =============================================================================

/// Radial position of a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    /// Rod centerline (end caps only).
    Axis,
    Inner,
    /// Outer edge of the dish.
    Dish,
    /// Outer edge of the flat land (start of the chamfer).
    Land,
    Outer,
}

/// Wedge side of a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `−y` face of the wedge.
    Minus,
    /// `+y` face of the wedge.
    Plus,
}

/// Axial position of a corner within its segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Bottom,
    Top,
    /// Dish floor near the bottom face.
    DishBottom,
    /// Dish floor near the top face.
    DishTop,
    /// End of the bottom chamfer on the outer surface.
    ChamferBottom,
    /// Start of the top chamfer on the outer surface.
    ChamferTop,
}

/// One vertex of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    pub ring: Ring,
    pub side: Side,
    pub level: Level,
}

const fn corner(ring: Ring, side: Side, level: Level) -> Corner {
    Corner { ring, side, level }
}

// =============================================================================
// FACES
// =============================================================================

/// What an outward boundary face of a segment touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceRole {
    /// Lower end face, including dish and chamfer facets.
    Bottom,
    /// Upper end face, including dish and chamfer facets.
    Top,
    /// Inner radial surface (annular pellets, cladding tube).
    Inner,
    /// Outer radial surface.
    Outer,
    /// `−y` wedge face.
    Front,
    /// `+y` wedge face.
    Back,
    /// End cap disc facing the fuel stack.
    CapInner,
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Corners, hexahedra and boundary faces of one segment shape.
///
/// Block and face entries are local vertex offsets; add the segment's
/// base to get global indices.
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeLayout {
    pub name: &'static str,
    pub corners: &'static [Corner],
    pub blocks: &'static [[usize; 8]],
    /// Outward faces in emission order.
    pub faces: &'static [(FaceRole, [usize; 4])],
}

impl ShapeLayout {
    /// Vertices per segment of this shape.
    #[inline]
    pub const fn vertex_count(&self) -> usize {
        self.corners.len()
    }

    /// Hexahedra per segment of this shape.
    #[inline]
    pub const fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Faces with the given role, in emission order.
    pub fn faces_with(&self, role: FaceRole) -> impl Iterator<Item = [usize; 4]> + '_ {
        self.faces
            .iter()
            .filter(move |(r, _)| *r == role)
            .map(|(_, quad)| *quad)
    }
}

use Level::{
    Bottom as B, ChamferBottom as CB, ChamferTop as CT, DishBottom as DB, DishTop as DT, Top as T,
};
use Ring::{Axis, Dish, Inner, Land, Outer};
use Side::{Minus as M, Plus as P};

const CORE_BLOCK: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
const SECOND_BLOCK: [usize; 8] = [1, 8, 9, 2, 5, 10, 11, 6];
const THIRD_BLOCK: [usize; 8] = [8, 12, 13, 9, 10, 14, 15, 11];

/// Boundary of a two-block pellet (dished or chamfered).
const TWO_BLOCK_PELLET_FACES: &[(FaceRole, [usize; 4])] = &[
    (FaceRole::Bottom, [0, 3, 2, 1]),
    (FaceRole::Bottom, [1, 2, 9, 8]),
    (FaceRole::Top, [4, 5, 6, 7]),
    (FaceRole::Top, [5, 10, 11, 6]),
    (FaceRole::Inner, [0, 4, 7, 3]),
    (FaceRole::Outer, [8, 9, 11, 10]),
    (FaceRole::Front, [0, 1, 5, 4]),
    (FaceRole::Front, [1, 8, 10, 5]),
    (FaceRole::Back, [3, 7, 6, 2]),
    (FaceRole::Back, [2, 6, 11, 9]),
];

/// Single hexahedron: flat pellet, smeared column, cladding block.
pub static FLAT: ShapeLayout = ShapeLayout {
    name: "flat",
    corners: &[
        corner(Inner, M, B),
        corner(Outer, M, B),
        corner(Outer, P, B),
        corner(Inner, P, B),
        corner(Inner, M, T),
        corner(Outer, M, T),
        corner(Outer, P, T),
        corner(Inner, P, T),
    ],
    blocks: &[CORE_BLOCK],
    faces: &[
        (FaceRole::Bottom, [0, 3, 2, 1]),
        (FaceRole::Top, [4, 5, 6, 7]),
        (FaceRole::Inner, [0, 4, 7, 3]),
        (FaceRole::Outer, [1, 2, 6, 5]),
        (FaceRole::Front, [0, 1, 5, 4]),
        (FaceRole::Back, [3, 7, 6, 2]),
    ],
};

/// Pellet with dished end faces: dish block and land block.
pub static DISHED: ShapeLayout = ShapeLayout {
    name: "dished",
    corners: &[
        corner(Inner, M, DB),
        corner(Dish, M, B),
        corner(Dish, P, B),
        corner(Inner, P, DB),
        corner(Inner, M, DT),
        corner(Dish, M, T),
        corner(Dish, P, T),
        corner(Inner, P, DT),
        corner(Outer, M, B),
        corner(Outer, P, B),
        corner(Outer, M, T),
        corner(Outer, P, T),
    ],
    blocks: &[CORE_BLOCK, SECOND_BLOCK],
    faces: TWO_BLOCK_PELLET_FACES,
};

/// Pellet with chamfered edges: land block and chamfer block.
pub static CHAMFERED: ShapeLayout = ShapeLayout {
    name: "chamfered",
    corners: &[
        corner(Inner, M, B),
        corner(Land, M, B),
        corner(Land, P, B),
        corner(Inner, P, B),
        corner(Inner, M, T),
        corner(Land, M, T),
        corner(Land, P, T),
        corner(Inner, P, T),
        corner(Outer, M, CB),
        corner(Outer, P, CB),
        corner(Outer, M, CT),
        corner(Outer, P, CT),
    ],
    blocks: &[CORE_BLOCK, SECOND_BLOCK],
    faces: TWO_BLOCK_PELLET_FACES,
};

/// Pellet with both: dish, land and chamfer blocks.
pub static DISHED_CHAMFERED: ShapeLayout = ShapeLayout {
    name: "dishedChamfered",
    corners: &[
        corner(Inner, M, DB),
        corner(Dish, M, B),
        corner(Dish, P, B),
        corner(Inner, P, DB),
        corner(Inner, M, DT),
        corner(Dish, M, T),
        corner(Dish, P, T),
        corner(Inner, P, DT),
        corner(Land, M, B),
        corner(Land, P, B),
        corner(Land, M, T),
        corner(Land, P, T),
        corner(Outer, M, CB),
        corner(Outer, P, CB),
        corner(Outer, M, CT),
        corner(Outer, P, CT),
    ],
    blocks: &[CORE_BLOCK, SECOND_BLOCK, THIRD_BLOCK],
    faces: &[
        (FaceRole::Bottom, [0, 3, 2, 1]),
        (FaceRole::Bottom, [1, 2, 9, 8]),
        (FaceRole::Bottom, [8, 9, 13, 12]),
        (FaceRole::Top, [4, 5, 6, 7]),
        (FaceRole::Top, [5, 10, 11, 6]),
        (FaceRole::Top, [10, 14, 15, 11]),
        (FaceRole::Inner, [0, 4, 7, 3]),
        (FaceRole::Outer, [12, 13, 15, 14]),
        (FaceRole::Front, [0, 1, 5, 4]),
        (FaceRole::Front, [1, 8, 10, 5]),
        (FaceRole::Front, [8, 12, 14, 10]),
        (FaceRole::Back, [3, 7, 6, 2]),
        (FaceRole::Back, [2, 6, 11, 9]),
        (FaceRole::Back, [9, 11, 15, 13]),
    ],
};

/// Corners shared by both end caps: a disc block collapsed onto the axis
/// and a ring block under/over the cladding tube.
const CAP_CORNERS: &[Corner] = &[
    corner(Axis, M, B),
    corner(Inner, M, B),
    corner(Inner, P, B),
    corner(Axis, P, B),
    corner(Axis, M, T),
    corner(Inner, M, T),
    corner(Inner, P, T),
    corner(Axis, P, T),
    corner(Outer, M, B),
    corner(Outer, P, B),
    corner(Outer, M, T),
    corner(Outer, P, T),
];

/// End cap below the fuel stack; its disc top faces the fuel.
pub static BOTTOM_CAP: ShapeLayout = ShapeLayout {
    name: "bottomCap",
    corners: CAP_CORNERS,
    blocks: &[CORE_BLOCK, SECOND_BLOCK],
    faces: &[
        (FaceRole::Bottom, [0, 3, 2, 1]),
        (FaceRole::Bottom, [1, 2, 9, 8]),
        (FaceRole::Top, [5, 10, 11, 6]),
        (FaceRole::CapInner, [4, 5, 6, 7]),
        (FaceRole::Outer, [8, 9, 11, 10]),
        (FaceRole::Front, [0, 1, 5, 4]),
        (FaceRole::Front, [1, 8, 10, 5]),
        (FaceRole::Back, [3, 7, 6, 2]),
        (FaceRole::Back, [2, 6, 11, 9]),
    ],
};

/// End cap above the fuel stack; its disc bottom faces the fuel.
pub static TOP_CAP: ShapeLayout = ShapeLayout {
    name: "topCap",
    corners: CAP_CORNERS,
    blocks: &[CORE_BLOCK, SECOND_BLOCK],
    faces: &[
        (FaceRole::Bottom, [1, 2, 9, 8]),
        (FaceRole::CapInner, [0, 3, 2, 1]),
        (FaceRole::Top, [4, 5, 6, 7]),
        (FaceRole::Top, [5, 10, 11, 6]),
        (FaceRole::Outer, [8, 9, 11, 10]),
        (FaceRole::Front, [0, 1, 5, 4]),
        (FaceRole::Front, [1, 8, 10, 5]),
        (FaceRole::Back, [3, 7, 6, 2]),
        (FaceRole::Back, [2, 6, 11, 9]),
    ],
};

// =============================================================================
// PELLET SHAPE
// =============================================================================

/// End-face profile of a discrete pellet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PelletShape {
    Flat,
    Dished,
    Chamfered,
    DishedChamfered,
}

impl PelletShape {
    /// Classify from the dish radius and chamfer width.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rod_mesh::shape::PelletShape;
    ///
    /// assert_eq!(PelletShape::classify(2.5e-3, 0.0), PelletShape::Dished);
    /// assert_eq!(PelletShape::classify(0.0, 0.0).layout().vertex_count(), 8);
    /// ```
    pub fn classify(dish_radius: f64, chamfer_width: f64) -> Self {
        match (dish_radius > 0.0, chamfer_width > 0.0) {
            (true, true) => Self::DishedChamfered,
            (true, false) => Self::Dished,
            (false, true) => Self::Chamfered,
            (false, false) => Self::Flat,
        }
    }

    /// Static layout of this shape.
    pub fn layout(&self) -> &'static ShapeLayout {
        match self {
            Self::Flat => &FLAT,
            Self::Dished => &DISHED,
            Self::Chamfered => &CHAMFERED,
            Self::DishedChamfered => &DISHED_CHAMFERED,
        }
    }

    pub const fn is_dished(&self) -> bool {
        matches!(self, Self::Dished | Self::DishedChamfered)
    }

    pub const fn is_chamfered(&self) -> bool {
        matches!(self, Self::Chamfered | Self::DishedChamfered)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> [&'static ShapeLayout; 6] {
        [&FLAT, &DISHED, &CHAMFERED, &DISHED_CHAMFERED, &BOTTOM_CAP, &TOP_CAP]
    }

    #[test]
    fn test_vertex_and_block_counts() {
        let counts: Vec<_> = [
            PelletShape::Flat,
            PelletShape::Dished,
            PelletShape::Chamfered,
            PelletShape::DishedChamfered,
        ]
        .iter()
        .map(|s| (s.layout().vertex_count(), s.layout().block_count()))
        .collect();
        assert_eq!(counts, vec![(8, 1), (12, 2), (12, 2), (16, 3)]);
        assert_eq!(BOTTOM_CAP.vertex_count(), 12);
        assert_eq!(TOP_CAP.block_count(), 2);
    }

    #[test]
    fn test_blocks_cover_every_corner() {
        for layout in all() {
            let mut used = vec![false; layout.vertex_count()];
            for block in layout.blocks {
                for &v in block {
                    used[v] = true;
                }
            }
            assert!(used.iter().all(|&u| u), "{} leaves a corner unused", layout.name);
        }
    }

    #[test]
    fn test_faces_stay_in_range() {
        for layout in all() {
            for (_, quad) in layout.faces {
                assert!(quad.iter().all(|&v| v < layout.vertex_count()), "{}", layout.name);
            }
        }
    }

    #[test]
    fn test_caps_have_no_inner_face() {
        assert_eq!(BOTTOM_CAP.faces_with(FaceRole::Inner).count(), 0);
        let bottom: Vec<_> = BOTTOM_CAP.faces_with(FaceRole::CapInner).collect();
        assert_eq!(bottom, vec![[4, 5, 6, 7]]);
        let top: Vec<_> = TOP_CAP.faces_with(FaceRole::CapInner).collect();
        assert_eq!(top, vec![[0, 3, 2, 1]]);
        assert_eq!(FLAT.faces_with(FaceRole::CapInner).count(), 0);
    }

    #[test]
    fn test_every_block_face_is_boundary_or_shared() {
        // Each hex has six faces; a face is either on the boundary, shared
        // by two hexes of the same segment, or collapsed onto the axis.
        for layout in all() {
            let mut counts = std::collections::HashMap::new();
            for b in layout.blocks {
                let hex_faces = [
                    [b[0], b[3], b[2], b[1]],
                    [b[4], b[5], b[6], b[7]],
                    [b[0], b[4], b[7], b[3]],
                    [b[1], b[2], b[6], b[5]],
                    [b[0], b[1], b[5], b[4]],
                    [b[3], b[7], b[6], b[2]],
                ];
                for face in hex_faces {
                    let mut key = face;
                    key.sort_unstable();
                    *counts.entry(key).or_insert(0) += 1;
                }
            }
            let mut boundary: Vec<_> = layout
                .faces
                .iter()
                .map(|(_, q)| {
                    let mut key = *q;
                    key.sort_unstable();
                    key
                })
                .collect();
            boundary.sort_unstable();
            let on_axis =
                |key: &[usize; 4]| key.iter().all(|&v| layout.corners[v].ring == Ring::Axis);
            let mut single: Vec<_> = counts
                .iter()
                .filter(|(k, &n)| n == 1 && !on_axis(k))
                .map(|(k, _)| *k)
                .collect();
            single.sort_unstable();
            assert_eq!(boundary, single, "{}", layout.name);
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(PelletShape::classify(0.0, 0.0), PelletShape::Flat);
        assert_eq!(PelletShape::classify(0.0, 1e-4), PelletShape::Chamfered);
        assert_eq!(PelletShape::classify(2e-3, 1e-4), PelletShape::DishedChamfered);
        assert!(PelletShape::DishedChamfered.is_dished());
        assert!(!PelletShape::Dished.is_chamfered());
    }
}
