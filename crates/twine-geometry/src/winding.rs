//! Curves with prescribed winding numbers on the torus of revolution.
//!
//! The planar pieces produced by [`PlanarCurve::trace`] are resampled
//! proportionally to their true planar length, scaled to angles, and
//! evaluated on the torus surface. Sampling by arc length rather than by
//! step count keeps the 3D point spacing roughly uniform even though the
//! split pieces have unequal lengths.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use twine_core::{Result, Tolerance, TwineError, Validate};
use twine_math::{linspace, Point2, Point3};

use crate::domain::PlanarCurve;
use crate::surface::{Surface, Torus};

/// Samples generated per unit of planar arc length when unspecified.
pub const DEFAULT_SAMPLES_PER_UNIT: u32 = 50;

/// Parameters for [`curve_on_torus`].
///
/// `poloidal_turns` and `toroidal_turns` are the number of times the
/// curve winds around the tube and around the axis of revolution; their
/// ratio fixes the slope of the generating line in the fundamental
/// domain. `samples_per_unit` scales how densely each split piece is
/// resampled. `start` places the curve in the fundamental domain; when
/// `None`, a point is drawn uniformly from `[0,1) x [0,1)`; this is the
/// only non-deterministic part of the construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorusCurveParams {
    pub minor_radius: f64,
    pub major_radius: f64,
    pub poloidal_turns: u32,
    pub toroidal_turns: u32,
    pub samples_per_unit: u32,
    pub start: Option<Point2>,
}

impl TorusCurveParams {
    pub fn new(
        minor_radius: f64,
        major_radius: f64,
        poloidal_turns: u32,
        toroidal_turns: u32,
    ) -> Self {
        Self {
            minor_radius,
            major_radius,
            poloidal_turns,
            toroidal_turns,
            samples_per_unit: DEFAULT_SAMPLES_PER_UNIT,
            start: None,
        }
    }

    pub fn samples_per_unit(mut self, samples_per_unit: u32) -> Self {
        self.samples_per_unit = samples_per_unit;
        self
    }

    pub fn start(mut self, start: Point2) -> Self {
        self.start = Some(start);
        self
    }
}

impl Validate for TorusCurveParams {
    fn validate(&self) -> Result<()> {
        if self.poloidal_turns == 0 || self.toroidal_turns == 0 {
            return Err(TwineError::InvalidParameter(format!(
                "turn counts must be positive, got ({}, {})",
                self.poloidal_turns, self.toroidal_turns
            )));
        }
        if self.samples_per_unit == 0 {
            return Err(TwineError::InvalidParameter(
                "samples_per_unit must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// A discretized curve on the torus surface, along with the planar
/// intermediates it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorusCurve {
    /// The 3D curve on the torus.
    pub points: Vec<Point3>,
    /// The generating walk in the fundamental domain (step polyline plus
    /// boundary-split pieces).
    pub planar: PlanarCurve,
}

impl TorusCurve {
    /// Whether the underlying planar walk returns to its start under
    /// toroidal identification.
    pub fn is_closed(&self, tol: Tolerance) -> bool {
        self.planar.closes_up(tol)
    }
}

/// Build a discretized curve winding `poloidal_turns` times around the
/// tube and `toroidal_turns` times around the axis of a torus of
/// revolution, returning the 3D curve together with its planar
/// intermediates.
pub fn curve_on_torus(params: &TorusCurveParams) -> Result<TorusCurve> {
    params.validate()?;
    let torus = Torus::new(params.major_radius, params.minor_radius);
    torus.validate()?;

    let start = params.start.unwrap_or_else(random_start);
    let planar = PlanarCurve::trace(params.poloidal_turns, params.toroidal_turns, start)?;
    let points = map_pieces(&planar.pieces, &torus, params.samples_per_unit);

    Ok(TorusCurve { points, planar })
}

/// Short form of [`curve_on_torus`]: only the 3D points.
pub fn curve_on_torus_points(params: &TorusCurveParams) -> Result<Vec<Point3>> {
    curve_on_torus(params).map(|curve| curve.points)
}

fn random_start() -> Point2 {
    Point2::new(rand::random::<f64>(), rand::random::<f64>())
}

/// Resample each piece proportionally to its planar length and evaluate
/// the torus parametrization at the resulting angles.
///
/// Each piece contributes `round(length * samples_per_unit)` samples; its
/// true endpoint is omitted because the next piece starts at the same
/// surface point (wrapped back into the domain), so shared boundary
/// points are never duplicated. A piece too short for even one sample
/// contributes nothing.
fn map_pieces(pieces: &[Vec<Point2>], torus: &Torus, samples_per_unit: u32) -> Vec<Point3> {
    let mut points = Vec::new();
    for piece in pieces {
        let (Some(first), Some(last)) = (piece.first(), piece.last()) else {
            continue;
        };
        let length = (*last - *first).length();
        let count = (length * samples_per_unit as f64).round() as usize;

        let thetas = linspace(first.x, last.x, count + 1);
        let phis = linspace(first.y, last.y, count + 1);
        for k in 0..count {
            points.push(torus.point_at(2.0 * PI * thetas[k], 2.0 * PI * phis[k]));
        }
    }
    points
}
