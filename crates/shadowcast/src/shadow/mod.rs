//! Shadow projection engine.
//!
//! Purpose
//! - Project a light through the top of a vertical stick onto the ground line
//!   and report the shadow's horizontal extent.
//! - Extended (disc) lights are approximated by their two horizontal edge
//!   points; the umbra is the intersection of the two edge shadows and the
//!   penumbra their union.
//!
//! Degenerate inputs (light at or below the ground) are reported as data via
//! `visible == false`, never as errors. Every function here is total over
//! finite reals.
//!
//! Code cross-refs: `Occluder`, `PointShadow`, `ExtendedShadow`, `LightSide`

mod extended;
mod point;
mod types;

pub use extended::{compute_extended_shadow, extended_shadow};
pub use point::{compute_point_shadow, point_shadow};
pub use types::{ExtendedShadow, LightSide, Occluder, PointShadow};

#[cfg(test)]
mod tests;
