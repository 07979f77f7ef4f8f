//! # Rod Mesh
//!
//! Block-structured mesh generation for wedge-sliced nuclear fuel rods.
//! Turns a rod description into an OpenFOAM `blockMeshDict`.
//!
//! ## Architecture
//!
//! ```text
//! rodDict text → rod-dict (Value) → RodDescription → plan → BlockMesh → text
//! ```
//!
//! The planner places every segment (pellet, fuel column, cladding block,
//! end cap) and assigns its first global vertex. The builders then work
//! segment by segment from static layout tables:
//!
//! - **Vertices**: layout corners projected onto the wedge
//! - **Blocks**: layout hexahedra with the segment's cell counts
//! - **Edges**: dish arcs of dished pellets
//! - **Patches**: layout faces classified into named, coupled patches
//!
//! ## Usage
//!
//! ```rust
//! use rod_mesh::{generate, render};
//!
//! let mesh = generate(r#"{
//!     'convertToMeters': 1, 'wedgeAngle': 2, 'geometryType': '1D',
//!     'rInnerFuel': [0], 'rOuterFuel': [4e-3], 'heightFuel': [1.0],
//!     'nCellsRFuel': [20], 'nCellsZFuel': [1], 'blockNameFuel': ['fuel'],
//!     'rInnerClad': [4.1e-3], 'rOuterClad': [4.7e-3], 'heightClad': [1.0],
//!     'nCellsRClad': [5], 'nCellsZClad': [1], 'blockNameClad': ['clad'],
//! }"#).unwrap();
//!
//! let text = render(&mesh);
//! assert!(text.contains("type empty;"));
//! ```

pub mod blocks;
pub mod edges;
pub mod error;
pub mod input;
pub mod mesh;
pub mod patches;
pub mod plan;
pub mod shape;
pub mod vertices;
pub mod writer;

pub use error::MeshError;
pub use input::{GeometryType, RodDescription};
pub use mesh::{BlockMesh, Boundary, Patch, PatchKind};
pub use writer::render;

use config::constants::MAX_INPUT_SIZE;
use std::fs;
use std::path::Path;
use vertices::Wedge;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parses and meshes a rod description.
///
/// ## Parameters
///
/// - `source`: text of a `rodDict` file
///
/// ## Returns
///
/// The block mesh, or the first error found while parsing or validating.
pub fn generate(source: &str) -> Result<BlockMesh, MeshError> {
    let value = rod_dict::parse(source)?;
    let rod = RodDescription::from_value(&value)?;
    Ok(build_mesh(&rod))
}

/// Builds the block mesh of a validated rod description.
pub fn build_mesh(rod: &RodDescription) -> BlockMesh {
    let plans = plan::plan_segments(rod);
    let wedge = Wedge::new(rod.wedge_angle);

    let (vertices, segment_starts) = vertices::build_vertices(&plans, &wedge);
    let blocks = blocks::build_blocks(&plans);
    let edges = edges::build_edges(&plans, &wedge);
    let (boundary, merge_pairs) = patches::build_boundary(rod, &plans);

    BlockMesh {
        convert_to_meters: rod.convert_to_meters,
        vertices,
        segment_starts,
        blocks,
        edges,
        boundary,
        merge_pairs,
    }
}

/// Reads `input`, meshes it and writes the dictionary to `output`.
///
/// Nothing is written unless the whole mesh was generated.
///
/// ## Returns
///
/// The generated mesh, for reporting.
pub fn run(input: &Path, output: &Path) -> Result<BlockMesh, MeshError> {
    let size = fs::metadata(input).map_err(|e| MeshError::io(input, e))?.len();
    if size > MAX_INPUT_SIZE as u64 {
        return Err(MeshError::InputTooLarge {
            size,
            max: MAX_INPUT_SIZE,
        });
    }

    let source = fs::read_to_string(input).map_err(|e| MeshError::io(input, e))?;
    let mesh = generate(&source)?;
    fs::write(output, render(&mesh)).map_err(|e| MeshError::io(output, e))?;

    log::info!(
        "Wrote {}: {} vertices, {} blocks, {} arcs, {} patches, {} merge pairs",
        output.display(),
        mesh.vertex_count(),
        mesh.block_count(),
        mesh.edge_count(),
        mesh.boundary.len(),
        mesh.merge_pairs.len()
    );
    Ok(mesh)
}
