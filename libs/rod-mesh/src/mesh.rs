//! # Block Mesh Data Structure
//!
//! In-memory form of a `blockMeshDict`: vertices, hexahedral blocks, curved
//! edges, boundary patches and merge pairs.

use config::constants::{CIRCUMFERENTIAL_CELLS, UNIFORM_GRADING};
use glam::DVec3;
use std::collections::HashMap;

// =============================================================================
// BLOCK MESH
// =============================================================================

/// A complete block mesh description, ready to serialize.
///
/// # Example
///
/// ```rust
/// use rod_mesh::generate;
///
/// let mesh = generate(r#"{
///     'convertToMeters': 1, 'wedgeAngle': 2, 'geometryType': '2DsmearedFuel',
///     'rInnerFuel': [0], 'rOuterFuel': [4e-3], 'heightFuel': [0.1],
///     'nCellsRFuel': [10], 'nCellsZFuel': [50], 'blockNameFuel': ['fuel'],
///     'rInnerClad': [4.1e-3], 'rOuterClad': [4.7e-3], 'heightClad': [0.1],
///     'nCellsRClad': [3], 'nCellsZClad': [50], 'blockNameClad': ['clad'],
/// }"#).unwrap();
///
/// assert_eq!(mesh.vertex_count(), 8 + 8);
/// assert_eq!(mesh.segment_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMesh {
    pub convert_to_meters: f64,
    /// All vertices, segment after segment.
    pub vertices: Vec<DVec3>,
    /// Index of the first vertex of each segment.
    pub segment_starts: Vec<usize>,
    pub blocks: Vec<HexBlock>,
    /// Curved edges, one group per dished pellet.
    pub edges: Vec<Vec<ArcEdge>>,
    pub boundary: Boundary,
    pub merge_pairs: Vec<MergePair>,
}

impl BlockMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of hexahedral blocks.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the number of segments (pellets, columns, cladding blocks, caps).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segment_starts.len()
    }

    /// Returns the number of arc edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Vertices of segment `i`.
    pub fn segment_vertices(&self, i: usize) -> &[DVec3] {
        let start = self.segment_starts[i];
        let end = self
            .segment_starts
            .get(i + 1)
            .copied()
            .unwrap_or(self.vertices.len());
        &self.vertices[start..end]
    }
}

// =============================================================================
// BLOCKS AND EDGES
// =============================================================================

/// One hexahedral block.
#[derive(Debug, Clone, PartialEq)]
pub struct HexBlock {
    /// Global vertex indices in `hex` order.
    pub vertices: [usize; 8],
    pub zone: String,
    /// Cells as `[radial, circumferential, axial]`.
    pub cells: [u32; 3],
    pub grading: [f64; 3],
}

impl HexBlock {
    /// Creates a block with one circumferential cell and uniform grading.
    pub fn new(vertices: [usize; 8], zone: impl Into<String>, radial: u32, axial: u32) -> Self {
        Self {
            vertices,
            zone: zone.into(),
            cells: [radial, CIRCUMFERENTIAL_CELLS, axial],
            grading: UNIFORM_GRADING,
        }
    }
}

/// Circular arc between two vertices through an intermediate point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcEdge {
    pub from: usize,
    pub to: usize,
    pub through: DVec3,
}

// =============================================================================
// PATCHES
// =============================================================================

/// Link from a coupled patch to its partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupling {
    pub neighbour: String,
    pub owner: bool,
    /// Whether the interface mapping is recomputed as the mesh moves.
    pub update_mapping: bool,
}

/// Boundary condition type of a patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchKind {
    /// Generic physical boundary.
    Patch,
    /// Periodic wedge side.
    Wedge,
    /// Collapsed direction (1D axial faces).
    Empty,
    /// Interface to another patch of the same mesh.
    Coupled(Coupling),
}

impl PatchKind {
    /// Creates a coupled kind.
    pub fn coupled(neighbour: impl Into<String>, owner: bool, update_mapping: bool) -> Self {
        Self::Coupled(Coupling {
            neighbour: neighbour.into(),
            owner,
            update_mapping,
        })
    }
}

/// Named boundary patch with its quad faces.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub name: String,
    pub kind: PatchKind,
    pub faces: Vec<[usize; 4]>,
}

/// Top patch to be fused with the bottom patch of the next segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePair {
    pub master: String,
    pub slave: String,
}

// =============================================================================
// BOUNDARY
// =============================================================================

/// Insertion-ordered collection of patches keyed by name.
///
/// Iteration order is the order in which names were first seen; this is
/// the order patches are written in.
///
/// # Example
///
/// ```rust
/// use rod_mesh::mesh::{Boundary, PatchKind};
///
/// let mut boundary = Boundary::new();
/// boundary.add_face("fuelFront", PatchKind::Wedge, [0, 1, 5, 4]);
/// boundary.add_face("fuelBack", PatchKind::Wedge, [3, 7, 6, 2]);
/// boundary.add_face("fuelFront", PatchKind::Wedge, [8, 9, 13, 12]);
///
/// let names: Vec<_> = boundary.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["fuelFront", "fuelBack"]);
/// assert_eq!(boundary.get("fuelFront").unwrap().faces.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boundary {
    patches: Vec<Patch>,
    index: HashMap<String, usize>,
}

impl Boundary {
    /// Creates an empty boundary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a face to the named patch, creating the patch if needed.
    ///
    /// The kind given when a patch is first created is kept; a different
    /// kind on a later face is logged and ignored.
    pub fn add_face(&mut self, name: &str, kind: PatchKind, face: [usize; 4]) {
        match self.index.get(name) {
            Some(&i) => {
                let patch = &mut self.patches[i];
                if patch.kind != kind {
                    log::warn!(
                        "Patch '{}' already has kind {:?}; ignoring {:?} for face {:?}",
                        name,
                        patch.kind,
                        kind,
                        face
                    );
                }
                patch.faces.push(face);
            }
            None => {
                self.index.insert(name.to_string(), self.patches.len());
                self.patches.push(Patch {
                    name: name.to_string(),
                    kind,
                    faces: vec![face],
                });
            }
        }
    }

    /// Looks up a patch by name.
    pub fn get(&self, name: &str) -> Option<&Patch> {
        self.index.get(name).map(|&i| &self.patches[i])
    }

    /// Iterates patches in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Patch> {
        self.patches.iter()
    }

    /// Returns the number of patches.
    #[inline]
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Returns true if there are no patches.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_keeps_first_kind() {
        let mut boundary = Boundary::new();
        boundary.add_face("fuelTop", PatchKind::Patch, [4, 5, 6, 7]);
        boundary.add_face("fuelTop", PatchKind::Empty, [5, 10, 11, 6]);

        let patch = boundary.get("fuelTop").unwrap();
        assert_eq!(patch.kind, PatchKind::Patch);
        assert_eq!(patch.faces, vec![[4, 5, 6, 7], [5, 10, 11, 6]]);
        assert_eq!(boundary.len(), 1);
    }

    #[test]
    fn test_boundary_order_is_first_registration() {
        let mut boundary = Boundary::new();
        for name in ["b", "a", "b", "c", "a"] {
            boundary.add_face(name, PatchKind::Wedge, [0, 1, 2, 3]);
        }
        let names: Vec<_> = boundary.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert!(boundary.get("d").is_none());
    }

    #[test]
    fn test_hex_block_defaults() {
        let block = HexBlock::new([0, 1, 2, 3, 4, 5, 6, 7], "fuel", 10, 20);
        assert_eq!(block.cells, [10, 1, 20]);
        assert_eq!(block.grading, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_segment_vertices() {
        let mesh = BlockMesh {
            convert_to_meters: 1.0,
            vertices: (0..20).map(|i| DVec3::splat(i as f64)).collect(),
            segment_starts: vec![0, 8],
            blocks: Vec::new(),
            edges: Vec::new(),
            boundary: Boundary::new(),
            merge_pairs: Vec::new(),
        };
        assert_eq!(mesh.segment_vertices(0).len(), 8);
        assert_eq!(mesh.segment_vertices(1).len(), 12);
        assert_eq!(mesh.segment_vertices(1)[0], DVec3::splat(8.0));
    }
}
