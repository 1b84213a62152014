//! Curated re-exports for front ends and the CLI.
//!
//! The flat-argument engine functions mirror the request fields one to one;
//! the `Vector2`/`Occluder` forms are preferred inside Rust code.

pub use crate::cfg::UMBRA_EPS;
pub use crate::rand::{draw_scene, ReplayToken, SceneCfg};
pub use crate::scene::{
    cast_shadows, Canvas, LightKind, LightShadow, LightSource, Scene, Shadow, ShadowResponse,
};
pub use crate::shadow::{
    compute_extended_shadow, compute_point_shadow, extended_shadow, point_shadow, ExtendedShadow,
    LightSide, Occluder, PointShadow,
};
pub use crate::validate::InvalidInput;
