//! Build a (2,3) torus knot and print its discretization statistics.
//!
//! Run with: cargo run -p twine-geometry --example trefoil

use twine_core::Tolerance;
use twine_geometry::{curve_on_torus, TorusCurveParams};
use twine_math::Point2;

fn main() {
    let params = TorusCurveParams::new(0.3, 1.0, 2, 3).start(Point2::new(0.25, 0.25));
    let curve = curve_on_torus(&params).expect("valid parameters");

    println!("trefoil on torus (r=0.3, R=1.0)");
    println!("  planar steps:   {}", curve.planar.step_count());
    println!("  split pieces:   {}", curve.planar.pieces.len());
    for (i, len) in curve.planar.piece_lengths().iter().enumerate() {
        println!("    piece {}: length {:.4}", i, len);
    }
    println!("  planar length:  {:.4}", curve.planar.total_length());
    println!("  3D points:      {}", curve.points.len());
    println!(
        "  closes up:      {}",
        curve.is_closed(Tolerance::default_precision())
    );

    if let Some(p) = curve.points.first() {
        println!("  first point:    ({:.4}, {:.4}, {:.4})", p.x, p.y, p.z);
    }
}
