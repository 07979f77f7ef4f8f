//! # blockMeshDict Writer
//!
//! Serializes a [`BlockMesh`] in the OpenFOAM dictionary grammar.
//!
//! ## Layout
//!
//! ```text
//! banner + FoamFile header
//! convertToMeters
//! vertices         (blank line after each segment)
//! blocks
//! edges            (blank line after each pellet)
//! boundary
//! mergePatchPairs
//! ```
//!
//! Coordinates are written with the shortest representation that reads
//! back to the same `f64`, so the output is byte-for-byte reproducible.

use crate::mesh::{ArcEdge, BlockMesh, HexBlock, Patch, PatchKind};
use config::constants::{
    FOAM_BANNER, FOAM_FILE_ENTRIES, FOAM_SEPARATOR, NEIGHBOUR_REGION, REGION_COUPLED_TYPE,
};
use glam::DVec3;
use std::fmt;

/// Renders the complete dictionary text.
pub fn render(mesh: &BlockMesh) -> String {
    mesh.to_string()
}

impl fmt::Display for BlockMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f)?;
        writeln!(f)?;
        writeln!(f, "convertToMeters {};", self.convert_to_meters)?;
        writeln!(f)?;

        writeln!(f, "vertices")?;
        writeln!(f, "(")?;
        for i in 0..self.segment_count() {
            for &v in self.segment_vertices(i) {
                writeln!(f, "    {}", Point(v))?;
            }
            writeln!(f)?;
        }
        close_list(f)?;

        writeln!(f, "blocks")?;
        writeln!(f, "(")?;
        for block in &self.blocks {
            writeln!(f, "    {}", block)?;
        }
        close_list(f)?;

        writeln!(f, "edges")?;
        writeln!(f, "(")?;
        for group in &self.edges {
            for edge in group {
                writeln!(f, "    {}", edge)?;
            }
            writeln!(f)?;
        }
        close_list(f)?;

        writeln!(f, "boundary")?;
        writeln!(f, "(")?;
        for patch in self.boundary.iter() {
            write!(f, "{}", patch)?;
            writeln!(f)?;
        }
        close_list(f)?;

        writeln!(f, "mergePatchPairs")?;
        writeln!(f, "(")?;
        for pair in &self.merge_pairs {
            writeln!(f, "\t({} {})", pair.master, pair.slave)?;
        }
        close_list(f)
    }
}

fn write_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for line in FOAM_BANNER {
        writeln!(f, "{}", line)?;
    }
    writeln!(f, "FoamFile")?;
    writeln!(f, "{{")?;
    for (key, value) in FOAM_FILE_ENTRIES {
        writeln!(f, "    {:<12}{};", key, value)?;
    }
    writeln!(f, "}}")?;
    writeln!(f, "{}", FOAM_SEPARATOR)
}

fn close_list(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, ");")?;
    writeln!(f)
}

/// `(x y z)` with round-trip float formatting.
struct Point(DVec3);

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} {:?} {:?})", self.0.x, self.0.y, self.0.z)
    }
}

impl fmt::Display for HexBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hex (")?;
        for v in self.vertices {
            write!(f, " {}", v)?;
        }
        let [nr, nt, nz] = self.cells;
        let [gr, gt, gz] = self.grading;
        write!(
            f,
            " ) {} ({} {} {}) simpleGrading ({} {} {})",
            self.zone, nr, nt, nz, gr, gt, gz
        )
    }
}

impl fmt::Display for ArcEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arc {} {} {}", self.from, self.to, Point(self.through))
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    {}", self.name)?;
        writeln!(f, "    {{")?;
        match &self.kind {
            PatchKind::Patch => writeln!(f, "        type patch;")?,
            PatchKind::Wedge => writeln!(f, "        type wedge;")?,
            PatchKind::Empty => writeln!(f, "        type empty;")?,
            PatchKind::Coupled(c) => {
                writeln!(f, "        type {};", REGION_COUPLED_TYPE)?;
                writeln!(f, "        neighbourPatch {};", c.neighbour)?;
                writeln!(f, "        neighbourRegion {};", NEIGHBOUR_REGION)?;
                writeln!(f, "        owner {};", c.owner)?;
                writeln!(f, "        updateAMI {};", c.update_mapping)?;
            }
        }
        writeln!(f, "        faces")?;
        writeln!(f, "        (")?;
        for [a, b, c, d] in &self.faces {
            writeln!(f, "            ({} {} {} {})", a, b, c, d)?;
        }
        writeln!(f, "        );")?;
        writeln!(f, "    }}")
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Boundary, MergePair};

    fn tiny_mesh() -> BlockMesh {
        let mut boundary = Boundary::new();
        boundary.add_face(
            "fuelTop_1",
            PatchKind::coupled("fuelBottom_2", true, false),
            [4, 5, 6, 7],
        );
        boundary.add_face("fuelFront", PatchKind::Wedge, [0, 1, 5, 4]);
        BlockMesh {
            convert_to_meters: 0.001,
            vertices: vec![DVec3::new(4.0, -0.07, 0.0), DVec3::new(4.0, 0.07, 12.5)],
            segment_starts: vec![0, 1],
            blocks: vec![HexBlock::new([0, 1, 2, 3, 4, 5, 6, 7], "fuel", 10, 50)],
            edges: vec![vec![ArcEdge {
                from: 0,
                to: 1,
                through: DVec3::new(1.25, -0.02, 0.1),
            }]],
            boundary,
            merge_pairs: vec![MergePair {
                master: "cladTop_1".into(),
                slave: "cladBottom_2".into(),
            }],
        }
    }

    #[test]
    fn test_point_round_trips() {
        let p = Point(DVec3::new(0.1 + 0.2, -0.0, 1e-20));
        assert_eq!(p.to_string(), "(0.30000000000000004 -0.0 1e-20)");
    }

    #[test]
    fn test_hex_line() {
        let block = HexBlock::new([8, 9, 10, 11, 12, 13, 14, 15], "clad", 3, 40);
        assert_eq!(
            block.to_string(),
            "hex ( 8 9 10 11 12 13 14 15 ) clad (3 1 40) simpleGrading (1 1 1)"
        );
    }

    #[test]
    fn test_coupled_patch_entry() {
        let mesh = tiny_mesh();
        let text = mesh.boundary.get("fuelTop_1").unwrap().to_string();
        assert_eq!(
            text,
            "    fuelTop_1\n    {\n        type regionCoupledOFFBEAT;\n        neighbourPatch fuelBottom_2;\n        neighbourRegion region0;\n        owner true;\n        updateAMI false;\n        faces\n        (\n            (4 5 6 7)\n        );\n    }\n"
        );
    }

    #[test]
    fn test_document_sections() {
        let text = render(&tiny_mesh());
        assert!(text.starts_with(FOAM_BANNER[0]));
        assert!(text.contains("    object      blockMeshDict;\n}\n"));
        assert!(text.contains(
            "\nconvertToMeters 0.001;\n\nvertices\n(\n    (4.0 -0.07 0.0)\n\n    (4.0 0.07 12.5)\n\n);\n\n"
        ));
        assert!(text.contains("edges\n(\n    arc 0 1 (1.25 -0.02 0.1)\n\n);\n\n"));
        assert!(text.contains("        type wedge;\n        faces\n"));
        assert!(text.ends_with("mergePatchPairs\n(\n\t(cladTop_1 cladBottom_2)\n);\n\n"));

        let order: Vec<_> = ["vertices", "blocks", "edges", "boundary", "mergePatchPairs"]
            .iter()
            .map(|s| text.find(&format!("\n{}\n(", s)).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let text = render(&tiny_mesh());
        assert!(text.lines().all(|line| line == line.trim_end()));
    }
}
