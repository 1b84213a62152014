//! Shadow geometry for a vertical stick on a flat ground plane.
//!
//! Coordinates follow screen convention: `y` grows downward, so a light
//! above the ground has `y < ground_y`.
//!
//! Layout
//! - `shadow`: the projection engine (point and extended lights).
//! - `scene`: per-request orchestration over many lights.
//! - `validate`: boundary checks for callers that accept untrusted numbers.
//! - `rand`: reproducible random scenes for tests and benches.

pub mod api;
pub mod cfg;
pub mod rand;
pub mod scene;
pub mod shadow;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_scene, ReplayToken, SceneCfg};
    pub use crate::scene::{
        cast_shadows, Canvas, LightKind, LightShadow, LightSource, Scene, Shadow, ShadowResponse,
    };
    pub use crate::shadow::{
        compute_extended_shadow, compute_point_shadow, extended_shadow, point_shadow,
        ExtendedShadow, LightSide, Occluder, PointShadow,
    };
    pub use crate::validate::InvalidInput;
    pub use nalgebra::Vector2 as Vec2;
}
