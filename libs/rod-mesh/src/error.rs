//! # Mesh Errors
//!
//! Error types for loading a rod description and generating its mesh.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while turning a rod description into a mesh.
///
/// Every variant is fatal: nothing is written once one is raised.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Syntax error in the rod description
    #[error("Parse error: {0}")]
    Parse(#[from] rod_dict::ParseError),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file larger than the accepted limit
    #[error("Input too large: {size} bytes (max: {max})")]
    InputTooLarge { size: u64, max: usize },

    /// Required key absent from the description
    #[error("Missing key '{key}'")]
    MissingKey { key: String },

    /// Key present but holding the wrong kind of value
    #[error("Invalid value for '{key}': expected {expected}, found {found}")]
    InvalidValue {
        key: String,
        expected: &'static str,
        found: String,
    },

    /// Per-block array shorter than the block count
    #[error("'{key}' has {found} entries, expected at least {expected}")]
    LengthMismatch {
        key: String,
        expected: usize,
        found: usize,
    },

    /// `geometryType` not one of the supported layouts
    #[error("Unknown geometryType '{name}' (expected '1D', '2DsmearedFuel' or '2Ddiscrete')")]
    UnknownGeometry { name: String },

    /// Dimensions that cannot describe a real rod
    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },
}

impl MeshError {
    /// Creates an I/O error for a path.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a missing key error.
    pub fn missing(key: &str) -> Self {
        Self::MissingKey {
            key: key.to_string(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(key: &str, expected: &'static str, found: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            expected,
            found: found.into(),
        }
    }

    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(MeshError::missing("wedgeAngle").to_string(), "Missing key 'wedgeAngle'");
        assert_eq!(
            MeshError::invalid_value("nCellsZFuel", "non-negative integer", "-1").to_string(),
            "Invalid value for 'nCellsZFuel': expected non-negative integer, found -1"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let err: MeshError = rod_dict::parse("{").unwrap_err().into();
        assert!(matches!(err, MeshError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: unexpected end of input"));
    }
}
