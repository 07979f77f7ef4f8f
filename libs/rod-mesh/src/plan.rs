//! # Segment Planner
//!
//! Expands a rod description into an ordered list of segments, each bound
//! to a layout and placed in the global vertex numbering.
//!
//! ## Order
//!
//! ```text
//! fuel (bottom → top) → bottom cap → cladding (bottom → top) → top cap
//! ```
//!
//! Every later stage addresses vertices as `plan.base + local offset`, so
//! once bases are assigned here nothing else keeps a running index.

use crate::input::{CladSegment, EndCap, GeometryType, RodDescription};
use crate::shape::{Level, PelletShape, Ring, ShapeLayout, BOTTOM_CAP, FLAT, TOP_CAP};
use config::constants::ARC_HEIGHT_EPSILON;

// =============================================================================
// TYPES
// =============================================================================

/// Which part of the rod a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Fuel,
    Clad,
}

/// What a segment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// One discrete pellet.
    Pellet(PelletShape),
    /// A smeared (or 1D) fuel column.
    Column,
    /// A cladding tube block.
    Tube,
    BottomCap,
    TopCap,
}

impl SegmentKind {
    /// Static layout used by this kind of segment.
    pub fn layout(&self) -> &'static ShapeLayout {
        match self {
            Self::Pellet(shape) => shape.layout(),
            Self::Column | Self::Tube => &FLAT,
            Self::BottomCap => &BOTTOM_CAP,
            Self::TopCap => &TOP_CAP,
        }
    }

    pub const fn region(&self) -> Region {
        match self {
            Self::Pellet(_) | Self::Column => Region::Fuel,
            Self::Tube | Self::BottomCap | Self::TopCap => Region::Clad,
        }
    }
}

/// Mid-point of the dish profile, through which the dish edges are curved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DishArc {
    /// Radius of the arc mid-point (half the dish radius).
    pub radius: f64,
    /// Depth of the arc mid-point below the pellet end face.
    pub height: f64,
}

/// One placed segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPlan {
    pub kind: SegmentKind,
    /// Global index of the segment's first vertex.
    pub base: usize,
    pub zone: String,
    pub inner_radius: f64,
    pub dish_radius: f64,
    pub land_radius: f64,
    pub outer_radius: f64,
    /// Axial coordinate of the segment bottom.
    pub z0: f64,
    pub height: f64,
    pub dish_depth: f64,
    pub chamfer_height: f64,
    pub arc: Option<DishArc>,
    /// Radial cells of each layout block, in layout order.
    pub radial_cells: Vec<u32>,
    pub axial_cells: u32,
    /// 1-based section number within the segment's region.
    pub section: usize,
    /// Number of sections in the segment's region.
    pub sections: usize,
    /// Whether the inner radial surface is a boundary of its own.
    pub inner_face: bool,
}

impl SegmentPlan {
    #[inline]
    pub fn layout(&self) -> &'static ShapeLayout {
        self.kind.layout()
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.kind.region()
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.section == 1
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.section == self.sections
    }

    /// Radius of a corner ring.
    pub fn radius(&self, ring: Ring) -> f64 {
        match ring {
            Ring::Axis => 0.0,
            Ring::Inner => self.inner_radius,
            Ring::Dish => self.dish_radius,
            Ring::Land => self.land_radius,
            Ring::Outer => self.outer_radius,
        }
    }

    /// Axial coordinate of a corner level.
    pub fn level(&self, level: Level) -> f64 {
        let z0 = self.z0;
        match level {
            Level::Bottom => z0,
            Level::Top => z0 + self.height,
            Level::DishBottom => z0 + self.dish_depth,
            Level::DishTop => z0 - self.dish_depth + self.height,
            Level::ChamferBottom => z0 + self.chamfer_height,
            Level::ChamferTop => z0 + self.height - self.chamfer_height,
        }
    }
}

// =============================================================================
// PLANNING
// =============================================================================

/// Plan every segment of the rod.
///
/// ## Returns
///
/// Segments in vertex order with their bases assigned.
pub fn plan_segments(rod: &RodDescription) -> Vec<SegmentPlan> {
    let mut plans = plan_fuel(rod);
    plans.extend(plan_clad(rod));
    assign_bases(&mut plans);

    log::debug!(
        "Planned {} segment(s), {} vertices",
        plans.len(),
        plans.last().map_or(0, |p| p.base + p.layout().vertex_count())
    );
    plans
}

/// Number each segment's first vertex by a running sum of layout strides.
fn assign_bases(plans: &mut [SegmentPlan]) {
    let mut next = 0;
    for plan in plans {
        plan.base = next;
        next += plan.layout().vertex_count();
    }
}

/// Fuel pellets or columns, stacked upward from the fuel offset.
fn plan_fuel(rod: &RodDescription) -> Vec<SegmentPlan> {
    let discrete = rod.geometry == GeometryType::Discrete;
    let mut plans = Vec::with_capacity(rod.fuel.iter().map(|f| f.pellets as usize).sum());
    let mut z = rod.fuel_offset;

    for fuel in &rod.fuel {
        let height = fuel.pellet_height();

        let (kind, radial_cells) = if discrete {
            let shape = PelletShape::classify(fuel.dish_radius, fuel.chamfer_width);
            let c = fuel.cells;
            let cells = match shape {
                PelletShape::Flat => vec![c.land],
                PelletShape::Dished => vec![c.dish, c.land],
                PelletShape::Chamfered => vec![c.land, c.chamfer],
                PelletShape::DishedChamfered => vec![c.dish, c.land, c.chamfer],
            };
            (SegmentKind::Pellet(shape), cells)
        } else {
            (SegmentKind::Column, vec![fuel.cells.radial])
        };

        let (dish_depth, arc) = match kind {
            SegmentKind::Pellet(shape) if shape.is_dished() => {
                dish_profile(fuel.dish_radius, fuel.dish_curvature_radius)
            }
            _ => (0.0, None),
        };
        let chamfered = matches!(kind, SegmentKind::Pellet(shape) if shape.is_chamfered());
        let land_radius = if chamfered {
            fuel.outer_radius - fuel.chamfer_width
        } else {
            fuel.outer_radius
        };

        for _ in 0..fuel.pellets {
            plans.push(SegmentPlan {
                kind,
                base: 0,
                zone: fuel.zone.clone(),
                inner_radius: fuel.inner_radius,
                dish_radius: fuel.dish_radius,
                land_radius,
                outer_radius: fuel.outer_radius,
                z0: z,
                height,
                dish_depth,
                chamfer_height: fuel.chamfer_height,
                arc,
                radial_cells: radial_cells.clone(),
                axial_cells: fuel.cells.axial,
                section: 0,
                sections: 0,
                inner_face: fuel.inner_radius > 0.0,
            });
            z += height;
        }
    }

    number_sections(&mut plans);
    plans
}

/// End caps and cladding blocks, stacked upward from the cladding offset.
fn plan_clad(rod: &RodDescription) -> Vec<SegmentPlan> {
    let (first, last) = match (rod.clad.first(), rod.clad.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Vec::new(),
    };

    let mut plans = Vec::with_capacity(rod.clad.len() + 2);
    let mut z = rod.clad_offset;

    if let Some(cap) = &rod.bottom_cap {
        z -= cap.height;
        plans.push(cap_plan(SegmentKind::BottomCap, first, cap, z));
        z += cap.height;
    }

    for clad in &rod.clad {
        plans.push(tube_plan(SegmentKind::Tube, clad, z, clad.height));
        z += clad.height;
    }

    if let Some(cap) = &rod.top_cap {
        plans.push(cap_plan(SegmentKind::TopCap, last, cap, z));
    }

    number_sections(&mut plans);
    plans
}

/// A cladding-radius segment with the block's own cell counts.
fn tube_plan(kind: SegmentKind, clad: &CladSegment, z0: f64, height: f64) -> SegmentPlan {
    SegmentPlan {
        kind,
        base: 0,
        zone: clad.zone.clone(),
        inner_radius: clad.inner_radius,
        dish_radius: 0.0,
        land_radius: clad.outer_radius,
        outer_radius: clad.outer_radius,
        z0,
        height,
        dish_depth: 0.0,
        chamfer_height: 0.0,
        arc: None,
        radial_cells: vec![clad.radial_cells],
        axial_cells: clad.axial_cells,
        section: 0,
        sections: 0,
        inner_face: kind == SegmentKind::Tube,
    }
}

/// An end cap under or over `clad`: a disc out to the tube's inner radius
/// plus a ring matching the tube wall.
fn cap_plan(kind: SegmentKind, clad: &CladSegment, cap: &EndCap, z0: f64) -> SegmentPlan {
    SegmentPlan {
        radial_cells: vec![cap.radial_cells, clad.radial_cells],
        axial_cells: cap.axial_cells,
        ..tube_plan(kind, clad, z0, cap.height)
    }
}

/// Number sections `1..=n` in stack order.
fn number_sections(plans: &mut [SegmentPlan]) {
    let sections = plans.len();
    for (i, plan) in plans.iter_mut().enumerate() {
        plan.section = i + 1;
        plan.sections = sections;
    }
}

/// Dish depth and arc mid-point for a spherical dish.
///
/// `dish_radius <= curvature_radius` is checked when the description is
/// loaded.
///
/// # Example
///
/// ```rust
/// use rod_mesh::plan::dish_profile;
///
/// let (depth, arc) = dish_profile(0.0, 1.5e-2);
/// assert_eq!(depth, 0.0);
/// assert!(arc.is_none());
/// ```
pub fn dish_profile(dish_radius: f64, curvature_radius: f64) -> (f64, Option<DishArc>) {
    if dish_radius <= 0.0 {
        return (0.0, None);
    }

    let rim = (dish_radius / curvature_radius).acos().sin();
    let depth = curvature_radius * (1.0 - rim);

    let mid = (dish_radius / curvature_radius / 2.0).acos().sin();
    let height = curvature_radius * (mid - rim);
    let arc = (height > ARC_HEIGHT_EPSILON).then_some(DishArc {
        radius: dish_radius / 2.0,
        height,
    });

    (depth, arc)
}

// =============================================================================
// TESTS
// =============================================================================
