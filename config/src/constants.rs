//! # Configuration Constants
//!
//! Centralized constants for the rod mesh pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point tolerances
//! - **Files**: Default input/output locations
//! - **Limits**: Maximum values for safety bounds
//! - **Grammar**: Keywords of the `blockMeshDict` output format

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum dish arc height for which curved edges are emitted.
///
/// Below this the dish profile is treated as flat and no `arc` record is
/// written, since a zero-curvature arc is rejected by the mesher.
///
/// # Example
///
/// ```rust
/// use config::constants::ARC_HEIGHT_EPSILON;
///
/// let h_arc = 5e-10;
/// assert!(!(h_arc > ARC_HEIGHT_EPSILON));
/// ```
pub const ARC_HEIGHT_EPSILON: f64 = 1e-9;

/// Epsilon for floating-point comparisons in tests and sanity checks.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// assert!((0.1_f64 + 0.2 - 0.3).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// FILE CONSTANTS
// =============================================================================

/// Input rod description read when no path is given.
pub const DEFAULT_INPUT_FILE: &str = "rodDict";

/// Mesh description written when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "blockMeshDict";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum accepted size of a rod description file (bytes).
///
/// Real descriptions are a few kilobytes; anything larger is almost
/// certainly the wrong file.
pub const MAX_INPUT_SIZE: usize = 16 * 1024 * 1024;

/// Maximum nesting depth of lists/dicts accepted by the input parser.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Maximum number of fuel blocks, cladding blocks, or pellets in total
/// that a description may ask for.
///
/// A full-length rod holds a few hundred pellets.
pub const MAX_SEGMENTS: usize = 100_000;

// =============================================================================
// MESH CONSTANTS
// =============================================================================

/// Cells in the circumferential direction of every wedge block.
pub const CIRCUMFERENTIAL_CELLS: u32 = 1;

/// Uniform expansion ratios written as `simpleGrading`.
pub const UNIFORM_GRADING: [f64; 3] = [1.0, 1.0, 1.0];

// =============================================================================
// GRAMMAR CONSTANTS
// =============================================================================

/// Patch type of inter-region coupled boundaries.
pub const REGION_COUPLED_TYPE: &str = "regionCoupledOFFBEAT";

/// Region name written as `neighbourRegion` of coupled patches.
///
/// Fuel and cladding live in one mesh region; coupling happens between
/// patches of that region.
pub const NEIGHBOUR_REGION: &str = "region0";

/// Banner written at the top of every generated mesh description.
pub const FOAM_BANNER: &[&str] = &[
    "/*--------------------------------*- C++ -*----------------------------------*\\",
    "| =========                 |                                                 |",
    "| \\\\      /  F ield         | OpenFOAM: The Open Source CFD Toolbox           |",
    "|  \\\\    /   O peration     | Version:  5.0                                   |",
    "|   \\\\  /    A nd           | Web:      www.OpenFOAM.org                      |",
    "|    \\\\/     M anipulation  |                                                 |",
    "\\*---------------------------------------------------------------------------*/",
];

/// `FoamFile` header entries as (keyword, value) pairs.
pub const FOAM_FILE_ENTRIES: &[(&str, &str)] = &[
    ("version", "9.0"),
    ("format", "ascii"),
    ("class", "dictionary"),
    ("object", "blockMeshDict"),
];

/// Separator line closing the header.
pub const FOAM_SEPARATOR: &str =
    "// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Check if a length is effectively zero.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-12));
/// assert!(!approx_zero(1e-3));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
