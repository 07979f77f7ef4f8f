//! # Vertex Builder
//!
//! Places every layout corner of every segment on the wedge.
//!
//! ## Wedge projection
//!
//! The rod is modeled as a thin wedge of opening angle `θ` symmetric about
//! the x axis. A corner at radius `r` lies at
//!
//! ```text
//! (r·cos(θ/2)·c, ∓r·sin(θ/2)·c, z)      c = sqrt(sin(θ/2) / (θ/2))
//! ```
//!
//! The factor `c` compensates the volume lost by replacing the arc with a
//! straight chord. It only matters for large angles and tends to 1 as
//! `θ` → 0.

use crate::plan::SegmentPlan;
use crate::shape::{Corner, Ring, Side};
use config::constants::approx_zero;
use glam::DVec3;
use std::f64::consts::PI;

// =============================================================================
// WEDGE
// =============================================================================

/// Projection of (radius, side, z) onto the wedge faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    cos: f64,
    sin: f64,
    correction: f64,
}

impl Wedge {
    /// Creates the projection for an opening angle in degrees.
    pub fn new(angle_degrees: f64) -> Self {
        let half = angle_degrees / 180.0 * PI / 2.0;
        Self {
            cos: half.cos(),
            sin: half.sin(),
            correction: Self::correction(angle_degrees),
        }
    }

    /// Chord correction factor for an opening angle in degrees.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rod_mesh::vertices::Wedge;
    ///
    /// assert_eq!(Wedge::correction(0.0), 1.0);
    /// assert!((Wedge::correction(1e-6) - 1.0).abs() < 1e-12);
    /// assert!(Wedge::correction(90.0) < 1.0);
    /// ```
    pub fn correction(angle_degrees: f64) -> f64 {
        let half = angle_degrees / 180.0 * PI / 2.0;
        if approx_zero(half) {
            return 1.0;
        }
        (half.sin() / half).sqrt()
    }

    /// In-plane (x, y) offsets of radius `r` on the `+` side.
    #[inline]
    pub fn offsets(&self, r: f64) -> (f64, f64) {
        (r * self.cos * self.correction, r * self.sin * self.correction)
    }

    /// Point at radius `r` on one side of the wedge.
    pub fn project(&self, r: f64, side: Side, z: f64) -> DVec3 {
        let (x, y) = self.offsets(r);
        match side {
            Side::Minus => DVec3::new(x, -y, z),
            Side::Plus => DVec3::new(x, y, z),
        }
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Position of one layout corner of a segment.
pub fn corner_position(plan: &SegmentPlan, corner: &Corner, wedge: &Wedge) -> DVec3 {
    let z = plan.level(corner.level);
    match corner.ring {
        Ring::Axis => DVec3::new(0.0, 0.0, z),
        ring => wedge.project(plan.radius(ring), corner.side, z),
    }
}

/// Vertices of one segment, in layout order.
pub fn segment_vertices(plan: &SegmentPlan, wedge: &Wedge) -> Vec<DVec3> {
    plan.layout()
        .corners
        .iter()
        .map(|corner| corner_position(plan, corner, wedge))
        .collect()
}

/// Vertices of all segments and the start index of each segment.
pub fn build_vertices(plans: &[SegmentPlan], wedge: &Wedge) -> (Vec<DVec3>, Vec<usize>) {
    let mut vertices = Vec::with_capacity(plans.iter().map(|p| p.layout().vertex_count()).sum());
    let mut starts = Vec::with_capacity(plans.len());

    for plan in plans {
        debug_assert_eq!(plan.base, vertices.len(), "segment base out of step");
        starts.push(vertices.len());
        vertices.extend(segment_vertices(plan, wedge));
    }

    log::debug!("Built {} vertices for {} segment(s)", vertices.len(), starts.len());
    (vertices, starts)
}

// =============================================================================
// TESTS
// =============================================================================
