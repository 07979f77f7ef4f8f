//! # Rod Description
//!
//! Typed, validated view of a parsed rod description.
//!
//! ## Keys
//!
//! Per-block quantities are arrays indexed by block (`rOuterFuel[i]`,
//! `nCellsZClad[i]`, ...). Arrays longer than the block count are accepted
//! and their extra entries ignored; shorter ones are an error.
//!
//! ## Example
//!
//! ```rust
//! use rod_mesh::input::{GeometryType, RodDescription};
//!
//! let value = rod_dict::parse(r#"{
//!     'convertToMeters': 1, 'wedgeAngle': 2, 'geometryType': '2DsmearedFuel',
//!     'rInnerFuel': [0], 'rOuterFuel': [4e-3], 'heightFuel': [0.1],
//!     'nCellsRFuel': [10], 'nCellsZFuel': [50], 'blockNameFuel': ['fuel'],
//!     'rInnerClad': [4.1e-3], 'rOuterClad': [4.7e-3], 'heightClad': [0.1],
//!     'nCellsRClad': [3], 'nCellsZClad': [50], 'blockNameClad': ['clad'],
//! }"#).unwrap();
//!
//! let rod = RodDescription::from_value(&value).unwrap();
//! assert_eq!(rod.geometry, GeometryType::Smeared);
//! assert_eq!(rod.fuel.len(), 1);
//! ```

use crate::error::MeshError;
use config::constants::MAX_SEGMENTS;
use rod_dict::{Dict, Value};

// =============================================================================
// DESCRIPTION TYPES
// =============================================================================

/// How the fuel column is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    /// `1D`: one cell axially per block; axial faces are `empty`.
    OneD,
    /// `2DsmearedFuel`: each fuel block is one continuous column.
    Smeared,
    /// `2Ddiscrete`: each fuel block is a stack of individual pellets.
    Discrete,
}

impl GeometryType {
    /// Parse the `geometryType` keyword.
    pub fn from_name(name: &str) -> Result<Self, MeshError> {
        match name {
            "1D" => Ok(Self::OneD),
            "2DsmearedFuel" => Ok(Self::Smeared),
            "2Ddiscrete" => Ok(Self::Discrete),
            _ => Err(MeshError::UnknownGeometry {
                name: name.to_string(),
            }),
        }
    }

    /// Keyword as written in the description.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OneD => "1D",
            Self::Smeared => "2DsmearedFuel",
            Self::Discrete => "2Ddiscrete",
        }
    }
}

/// Cell counts of one fuel block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuelCells {
    /// Radial cells of a smeared/1D column.
    pub radial: u32,
    /// Axial cells of each pellet (or of the column).
    pub axial: u32,
    /// Radial cells across the dish (discrete only).
    pub dish: u32,
    /// Radial cells across the land (discrete only).
    pub land: u32,
    /// Radial cells across the chamfer (discrete only).
    pub chamfer: u32,
}

/// One fuel block: a smeared column, or `pellets` identical pellets.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelSegment {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Total height of the block; each pellet is `height / pellets` tall.
    pub height: f64,
    pub pellets: u32,
    pub dish_radius: f64,
    pub dish_curvature_radius: f64,
    pub chamfer_width: f64,
    pub chamfer_height: f64,
    pub cells: FuelCells,
    pub zone: String,
}

impl FuelSegment {
    /// Height of a single pellet.
    pub fn pellet_height(&self) -> f64 {
        self.height / f64::from(self.pellets)
    }
}

/// One cladding block.
#[derive(Debug, Clone, PartialEq)]
pub struct CladSegment {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub height: f64,
    pub radial_cells: u32,
    pub axial_cells: u32,
    pub zone: String,
}

/// A solid end cap closing the cladding tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndCap {
    pub height: f64,
    /// Radial cells from the centerline to the cladding inner radius.
    pub radial_cells: u32,
    pub axial_cells: u32,
}

/// Complete, validated rod description.
#[derive(Debug, Clone, PartialEq)]
pub struct RodDescription {
    pub convert_to_meters: f64,
    /// Wedge opening angle in degrees.
    pub wedge_angle: f64,
    pub geometry: GeometryType,
    /// Axial coordinate of the bottom of the fuel stack.
    pub fuel_offset: f64,
    /// Axial coordinate of the bottom of the first cladding block.
    pub clad_offset: f64,
    pub fuel: Vec<FuelSegment>,
    pub clad: Vec<CladSegment>,
    pub bottom_cap: Option<EndCap>,
    pub top_cap: Option<EndCap>,
    pub merge_fuel_patch_pairs: bool,
    pub merge_clad_patch_pairs: bool,
}

// =============================================================================
// LOADING
// =============================================================================

impl RodDescription {
    /// Build a description from a parsed value (a top-level dict).
    ///
    /// ## Errors
    ///
    /// - `MissingKey` / `InvalidValue` / `LengthMismatch` for malformed keys
    /// - `UnknownGeometry` for an unsupported `geometryType`
    /// - `InvalidGeometry` for a dish that cannot exist, or an end cap
    ///   without any cladding block to attach to
    pub fn from_value(value: &Value) -> Result<Self, MeshError> {
        let dict = value
            .as_dict()
            .ok_or_else(|| MeshError::invalid_value("rodDict", "dict", value.type_name()))?;
        let keys = Keys { dict };

        let geometry = GeometryType::from_name(keys.string("geometryType")?)?;

        let fuel = load_fuel(&keys, geometry)?;
        let clad = load_clad(&keys)?;

        let bottom_cap = load_cap(
            &keys,
            "bottomCapHeight",
            "nCellsRBottomCap",
            "nCellsZBottomCap",
        )?;
        let top_cap = load_cap(&keys, "topCapHeight", "nCellsRTopCap", "nCellsZTopCap")?;
        if (bottom_cap.is_some() || top_cap.is_some()) && clad.is_empty() {
            return Err(MeshError::invalid_geometry(
                "end caps require at least one cladding block",
            ));
        }

        let rod = Self {
            convert_to_meters: keys.number("convertToMeters")?,
            wedge_angle: keys.number("wedgeAngle")?,
            geometry,
            fuel_offset: keys.number_or("offsetFuel", 0.0)?,
            clad_offset: keys.number_or("offsetClad", 0.0)?,
            fuel,
            clad,
            bottom_cap,
            top_cap,
            merge_fuel_patch_pairs: keys.flag_or("mergeFuelPatchPairs", false)?,
            merge_clad_patch_pairs: keys.flag_or("mergeCladPatchPairs", false)?,
        };

        log::debug!(
            "Loaded {} rod: {} fuel block(s), {} cladding block(s), caps: bottom={} top={}",
            rod.geometry.name(),
            rod.fuel.len(),
            rod.clad.len(),
            rod.bottom_cap.is_some(),
            rod.top_cap.is_some()
        );

        Ok(rod)
    }
}

/// Load the fuel blocks.
fn load_fuel(keys: &Keys<'_>, geometry: GeometryType) -> Result<Vec<FuelSegment>, MeshError> {
    let n = keys.block_count("nBlocksFuel", "rOuterFuel")?;

    let inner = keys.numbers("rInnerFuel", n)?;
    let outer = keys.numbers("rOuterFuel", n)?;
    let height = keys.numbers("heightFuel", n)?;
    let axial = keys.counts("nCellsZFuel", n)?;
    let zones = keys.names("blockNameFuel", n)?;

    let discrete = geometry == GeometryType::Discrete;
    let radial = if discrete {
        keys.counts_or("nCellsRFuel", n)?
    } else {
        Some(keys.counts("nCellsRFuel", n)?)
    };
    let pellets = if discrete {
        let arrays = PelletArrays::load(keys, n)?;
        let total: u64 = arrays.pellets.iter().map(|&p| u64::from(p)).sum();
        check_segment_limit("nPelletsFuel", total)?;
        Some(arrays)
    } else {
        None
    };

    let mut segments = Vec::with_capacity(n);
    for i in 0..n {
        let mut segment = FuelSegment {
            inner_radius: inner[i],
            outer_radius: outer[i],
            height: height[i],
            pellets: 1,
            dish_radius: 0.0,
            dish_curvature_radius: 0.0,
            chamfer_width: 0.0,
            chamfer_height: 0.0,
            cells: FuelCells {
                radial: radial.as_ref().map_or(0, |r| r[i]),
                axial: axial[i],
                ..FuelCells::default()
            },
            zone: zones[i].clone(),
        };

        if let Some(arrays) = &pellets {
            arrays.apply(i, &mut segment)?;
        }
        segments.push(segment);
    }

    Ok(segments)
}

/// Per-block pellet keys, present in discrete mode only.
struct PelletArrays {
    pellets: Vec<u32>,
    dish_radius: Vec<f64>,
    dish_curvature_radius: Vec<f64>,
    chamfer_width: Vec<f64>,
    chamfer_height: Vec<f64>,
    dish_cells: Vec<u32>,
    land_cells: Vec<u32>,
    chamfer_cells: Vec<u32>,
}

impl PelletArrays {
    fn load(keys: &Keys<'_>, n: usize) -> Result<Self, MeshError> {
        Ok(Self {
            pellets: keys.counts("nPelletsFuel", n)?,
            dish_radius: keys.numbers("rDishFuel", n)?,
            dish_curvature_radius: keys.numbers("rCurvatureDish", n)?,
            chamfer_width: keys.numbers("chamferWidth", n)?,
            chamfer_height: keys.numbers("heightChamferFuel", n)?,
            dish_cells: keys.counts("nCellsRDish", n)?,
            land_cells: keys.counts("nCellsRLand", n)?,
            chamfer_cells: keys.counts("nCellsRChamfer", n)?,
        })
    }

    /// Fill in the pellet geometry of fuel block `i`.
    fn apply(&self, i: usize, segment: &mut FuelSegment) -> Result<(), MeshError> {
        if self.pellets[i] == 0 {
            return Err(MeshError::invalid_value("nPelletsFuel", "positive integer", "0"));
        }

        segment.pellets = self.pellets[i];
        segment.dish_radius = self.dish_radius[i];
        segment.dish_curvature_radius = self.dish_curvature_radius[i];
        segment.chamfer_width = self.chamfer_width[i];
        segment.chamfer_height = self.chamfer_height[i];
        segment.cells.dish = self.dish_cells[i];
        segment.cells.land = self.land_cells[i];
        segment.cells.chamfer = self.chamfer_cells[i];

        if segment.dish_radius > 0.0 {
            if segment.dish_curvature_radius <= 0.0 {
                return Err(MeshError::invalid_geometry(format!(
                    "fuel block {} ('{}'): rCurvatureDish must be positive for a dished pellet, found {}",
                    i, segment.zone, segment.dish_curvature_radius
                )));
            }
            if segment.dish_radius > segment.dish_curvature_radius {
                return Err(MeshError::invalid_geometry(format!(
                    "fuel block {} ('{}'): rDishFuel ({}) exceeds rCurvatureDish ({})",
                    i, segment.zone, segment.dish_radius, segment.dish_curvature_radius
                )));
            }
        }

        Ok(())
    }
}

/// Load the cladding blocks.
fn load_clad(keys: &Keys<'_>) -> Result<Vec<CladSegment>, MeshError> {
    let n = keys.block_count("nBlocksClad", "rOuterClad")?;

    let inner = keys.numbers("rInnerClad", n)?;
    let outer = keys.numbers("rOuterClad", n)?;
    let height = keys.numbers("heightClad", n)?;
    let radial = keys.counts("nCellsRClad", n)?;
    let axial = keys.counts("nCellsZClad", n)?;
    let zones = keys.names("blockNameClad", n)?;

    Ok((0..n)
        .map(|i| CladSegment {
            inner_radius: inner[i],
            outer_radius: outer[i],
            height: height[i],
            radial_cells: radial[i],
            axial_cells: axial[i],
            zone: zones[i].clone(),
        })
        .collect())
}

/// Load an end cap; a missing or non-positive height disables it.
fn load_cap(
    keys: &Keys<'_>,
    height_key: &str,
    radial_key: &str,
    axial_key: &str,
) -> Result<Option<EndCap>, MeshError> {
    let height = keys.number_or(height_key, 0.0)?;
    if height <= 0.0 {
        return Ok(None);
    }

    Ok(Some(EndCap {
        height,
        radial_cells: keys.count(radial_key)?,
        axial_cells: keys.count(axial_key)?,
    }))
}

// =============================================================================
// KEY ACCESS
// =============================================================================

/// Typed accessors over the top-level dict.
struct Keys<'a> {
    dict: &'a Dict,
}

impl<'a> Keys<'a> {
    fn get(&self, key: &str) -> Result<&'a Value, MeshError> {
        self.dict.get(key).ok_or_else(|| MeshError::missing(key))
    }

    fn number(&self, key: &str) -> Result<f64, MeshError> {
        let value = self.get(key)?;
        value
            .as_f64()
            .ok_or_else(|| MeshError::invalid_value(key, "number", value.to_string()))
    }

    fn number_or(&self, key: &str, default: f64) -> Result<f64, MeshError> {
        if self.dict.contains_key(key) {
            self.number(key)
        } else {
            Ok(default)
        }
    }

    fn flag_or(&self, key: &str, default: bool) -> Result<bool, MeshError> {
        match self.dict.get(key) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| MeshError::invalid_value(key, "True or False", value.to_string())),
        }
    }

    fn string(&self, key: &str) -> Result<&'a str, MeshError> {
        let value = self.get(key)?;
        value
            .as_str()
            .ok_or_else(|| MeshError::invalid_value(key, "string", value.to_string()))
    }

    fn count(&self, key: &str) -> Result<u32, MeshError> {
        to_count(key, self.get(key)?)
    }

    /// Block count: the explicit key, or the length of a reference array.
    fn block_count(&self, count_key: &str, array_key: &str) -> Result<usize, MeshError> {
        if self.dict.contains_key(count_key) {
            let n = self.count(count_key)?;
            check_segment_limit(count_key, u64::from(n))?;
            return Ok(n as usize);
        }
        Ok(self.sequence(array_key, 0)?.len())
    }

    /// An array with at least `n` entries.
    fn sequence(&self, key: &str, n: usize) -> Result<&'a [Value], MeshError> {
        let value = self.get(key)?;
        let items = value
            .as_sequence()
            .ok_or_else(|| MeshError::invalid_value(key, "list", value.to_string()))?;
        if items.len() < n {
            return Err(MeshError::LengthMismatch {
                key: key.to_string(),
                expected: n,
                found: items.len(),
            });
        }
        Ok(items)
    }

    fn numbers(&self, key: &str, n: usize) -> Result<Vec<f64>, MeshError> {
        self.sequence(key, n)?[..n]
            .iter()
            .map(|v| {
                v.as_f64()
                    .ok_or_else(|| MeshError::invalid_value(key, "number", v.to_string()))
            })
            .collect()
    }

    fn counts(&self, key: &str, n: usize) -> Result<Vec<u32>, MeshError> {
        self.sequence(key, n)?[..n]
            .iter()
            .map(|v| to_count(key, v))
            .collect()
    }

    fn counts_or(&self, key: &str, n: usize) -> Result<Option<Vec<u32>>, MeshError> {
        if self.dict.contains_key(key) {
            self.counts(key, n).map(Some)
        } else {
            Ok(None)
        }
    }

    fn names(&self, key: &str, n: usize) -> Result<Vec<String>, MeshError> {
        self.sequence(key, n)?[..n]
            .iter()
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| MeshError::invalid_value(key, "string", v.to_string()))
            })
            .collect()
    }
}

/// A non-negative integer that fits a cell count.
fn to_count(key: &str, value: &Value) -> Result<u32, MeshError> {
    value
        .as_i64()
        .and_then(|i| u32::try_from(i).ok())
        .ok_or_else(|| MeshError::invalid_value(key, "non-negative integer", value.to_string()))
}

/// Rejects block or pellet totals the mesh could not hold.
fn check_segment_limit(key: &str, total: u64) -> Result<(), MeshError> {
    if total > MAX_SEGMENTS as u64 {
        return Err(MeshError::invalid_value(
            key,
            "total within the segment limit",
            format!("{} (limit {})", total, MAX_SEGMENTS),
        ));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
