//! Twine geometry: curves with prescribed winding numbers on the torus
//! of revolution.
//!
//! The construction runs in two stages. [`domain::PlanarCurve`] walks a
//! straight line across the unit-square fundamental domain of the torus,
//! wrapping toroidally at the boundaries and splitting the path into
//! pieces that never leave the square. [`winding::curve_on_torus`] then
//! resamples those pieces proportionally to their planar length and maps
//! them through the torus-of-revolution parametrization to 3D.

pub mod domain;
pub mod surface;
pub mod winding;

pub use domain::PlanarCurve;
pub use surface::{Surface, Torus};
pub use winding::{curve_on_torus, curve_on_torus_points, TorusCurve, TorusCurveParams};
