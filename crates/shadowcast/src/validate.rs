//! Boundary validation for scenes built from untrusted input.
//!
//! The engine is total over finite reals and never calls into this module.
//! Only non-finite numbers are rejected; negative radii or heights are
//! geometrically odd but well defined.

use std::fmt;

use crate::scene::{LightKind, Scene};

/// Errors surfaced by `Scene::validate`.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidInput {
    NonFiniteScene { field: &'static str, value: f64 },
    NonFiniteLight {
        index: usize,
        field: &'static str,
        value: f64,
    },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NonFiniteScene { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            InvalidInput::NonFiniteLight {
                index,
                field,
                value,
            } => write!(f, "lights[{index}].{field} must be finite, got {value}"),
        }
    }
}

impl std::error::Error for InvalidInput {}

impl Scene {
    /// Check every number the request supplied; first failure wins.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        let scene_fields = [
            ("stickX", self.occluder.x),
            ("stickHeight", self.occluder.height),
            ("groundY", self.occluder.ground_y),
            ("canvasWidth", self.canvas.width),
            ("canvasHeight", self.canvas.height),
        ];
        for (field, value) in scene_fields {
            if !value.is_finite() {
                return Err(InvalidInput::NonFiniteScene { field, value });
            }
        }
        for (index, light) in self.lights.iter().enumerate() {
            let radius = match light.kind {
                LightKind::Point => 0.0,
                LightKind::Extended { radius } => radius,
            };
            let light_fields = [
                ("x", light.pos.x),
                ("y", light.pos.y),
                ("radius", radius),
                ("intensity", light.intensity),
            ];
            for (field, value) in light_fields {
                if !value.is_finite() {
                    return Err(InvalidInput::NonFiniteLight {
                        index,
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}
