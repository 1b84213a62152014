//! Tolerance defaults for shadow geometry.
//!
//! Policy
//! - Fixed constants, not runtime configuration. The values are tied to the
//!   pixel scale of the front end; rescaled scenes should rescale these too.

/// Minimum umbra width (in ground units) for `ExtendedShadow::has_umbra`.
/// The comparison is strict: a width of exactly `UMBRA_EPS` has no umbra.
pub const UMBRA_EPS: f64 = 1.0;
