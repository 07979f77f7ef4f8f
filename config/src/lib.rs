//! # Config Crate
//!
//! Centralized configuration constants for the rod mesh pipeline.
//! File-name defaults, numeric tolerances and the keywords of the
//! `blockMeshDict` grammar are defined here so the parser, the mesh
//! builders and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ARC_HEIGHT_EPSILON, DEFAULT_INPUT_FILE};
//!
//! let arc_height = 1e-12;
//! assert!(arc_height <= ARC_HEIGHT_EPSILON);
//! assert_eq!(DEFAULT_INPUT_FILE, "rodDict");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Wire Compatible**: Keywords match the external solver's grammar

pub mod constants;
