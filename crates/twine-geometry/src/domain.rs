//! Straight-line walks across the unit-square fundamental domain of the
//! torus.
//!
//! The flat torus is the unit square `[0,1] x [0,1]` with opposite edges
//! identified. A curve that winds `a1` times poloidally and `a2` times
//! toroidally is a straight line of slope `a2/a1` in this square; walking
//! it in unit steps of `t = (1/a1, 1/a2)` closes up after
//! `lcm(a1, a2)` steps. The identification is expressed purely through
//! wrap arithmetic (a coordinate hitting 1 is reset to 0), never through
//! a cyclic data structure.

use serde::{Deserialize, Serialize};
use twine_core::{BoundingBox, Result, Tolerance, TwineError};
use twine_math::{lcm, Point2};

/// A discrete straight-line curve in the fundamental domain.
///
/// `points` is the step-by-step polyline, one point per unit step plus
/// the start (`lcm(a1, a2) + 1` entries); points that fall on a boundary
/// crossing are stored wrapped. `pieces` is the same path split at every
/// boundary crossing: each piece is a maximal sub-polyline that stays
/// inside the square, beginning where the previous piece's endpoint was
/// wrapped back in. Concatenating the pieces traverses the full toroidal
/// path without ever leaving the square.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanarCurve {
    pub points: Vec<Point2>,
    pub pieces: Vec<Vec<Point2>>,
}

impl PlanarCurve {
    /// Walk the straight line with `poloidal_turns` windings in the first
    /// coordinate and `toroidal_turns` in the second, starting at `start`.
    ///
    /// Both turn counts must be positive. `start` must have both
    /// coordinates `<= 1`; violating that is a caller bug and panics.
    pub fn trace(poloidal_turns: u32, toroidal_turns: u32, start: Point2) -> Result<Self> {
        if poloidal_turns == 0 || toroidal_turns == 0 {
            return Err(TwineError::InvalidParameter(format!(
                "turn counts must be positive, got ({}, {})",
                poloidal_turns, toroidal_turns
            )));
        }
        assert!(
            start.x <= 1.0 && start.y <= 1.0,
            "start point {:?} outside the fundamental domain",
            start
        );

        let step = Point2::new(1.0 / poloidal_turns as f64, 1.0 / toroidal_turns as f64);
        let n = lcm(poloidal_turns as u64, toroidal_turns as u64) as usize;

        let mut p = start;
        let mut points = Vec::with_capacity(n + 1);
        points.push(p);
        let mut pieces = vec![vec![p]];
        let mut piece = 0;

        for _ in 0..n {
            let mut pnew = p + step;

            if pnew.x >= 1.0 || pnew.y >= 1.0 {
                // Fractional travel along `step` until each coordinate
                // reaches its bound. The smaller one crosses first; on a
                // tie the first coordinate wins (kept for output
                // compatibility, not geometrically meaningful).
                let lengths = (Point2::ONE - p) / step;
                let first = if lengths.x <= lengths.y { 0 } else { 1 };
                let second = 1 - first;
                let l0 = lengths[first];

                // close the current piece at the crossing point
                pnew = p + l0 * step;
                pieces[piece].push(pnew);

                // wrap and open the next piece there
                p = pnew;
                p[first] = 0.0;
                piece += 1;
                pieces.push(vec![p]);

                // spend the remaining travel from the wrapped point
                pnew = p + (1.0 - l0) * step;
                debug_assert!(pnew[first] <= 1.0);

                // a single unit step can cross both boundaries, never more
                if pnew[second] >= 1.0 {
                    let l1 = (1.0 - p[second]) / step[second];

                    pnew = p + l1 * step;
                    pieces[piece].push(pnew);

                    p = pnew;
                    p[second] = 0.0;
                    piece += 1;
                    pieces.push(vec![p]);

                    pnew = p + (1.0 - l0 - l1) * step;
                }
            }

            debug_assert!(pnew.x <= 1.0 && pnew.y <= 1.0);
            pieces[piece].push(pnew);
            points.push(pnew);
            p = pnew;
        }

        Ok(Self { points, pieces })
    }

    /// Number of unit steps in the walk (`lcm(a1, a2)`).
    pub fn step_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Straight-chord length of each piece, first point to last.
    ///
    /// Pieces are straight by construction, so the chord is the true
    /// unwrapped length of the piece. This is the quantity that drives
    /// arc-length-proportional resampling.
    pub fn piece_lengths(&self) -> Vec<f64> {
        self.pieces
            .iter()
            .filter_map(|piece| Some((*piece.last()? - *piece.first()?).length()))
            .collect()
    }

    /// Total path length traversed by the pieces.
    pub fn total_length(&self) -> f64 {
        self.pieces
            .iter()
            .map(|piece| piece.windows(2).map(|w| (w[1] - w[0]).length()).sum::<f64>())
            .sum()
    }

    /// Whether the walk returns to its start under toroidal
    /// identification, within `tol.linear` per coordinate.
    pub fn closes_up(&self, tol: Tolerance) -> bool {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return false;
        };
        let diff = (*last - *first).abs();
        // distance on the circle: 0 and 1 are the same point
        let wrap = |d: f64| d.min((1.0 - d).abs());
        tol.is_zero(wrap(diff.x)) && tol.is_zero(wrap(diff.y))
    }
}

impl BoundingBox for PlanarCurve {
    type Point = Point2;

    fn bounding_box(&self) -> (Point2, Point2) {
        let mut min = Point2::splat(f64::INFINITY);
        let mut max = Point2::splat(f64::NEG_INFINITY);
        for p in self.pieces.iter().flatten() {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, max)
    }
}
