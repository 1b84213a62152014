//! Per-request orchestration: many lights, one stick.
//!
//! A `Scene` is built fresh for each request by the caller (after defaults are
//! applied) and `cast_shadows` maps it to a `ShadowResponse`, one entry per
//! light in input order.

use nalgebra::Vector2;

use crate::shadow::{extended_shadow, point_shadow, ExtendedShadow, Occluder, PointShadow};

/// Point lights have no extent; extended lights are discs of `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Point,
    Extended { radius: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    pub pos: Vector2<f64>,
    pub kind: LightKind,
    /// Carried through to the response; not used by the geometry.
    pub intensity: f64,
}

impl LightSource {
    #[inline]
    pub fn point(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            kind: LightKind::Point,
            intensity: 1.0,
        }
    }

    #[inline]
    pub fn extended(x: f64, y: f64, radius: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            kind: LightKind::Extended { radius },
            intensity: 1.0,
        }
    }

    #[inline]
    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    #[inline]
    pub fn is_extended(&self) -> bool {
        matches!(self.kind, LightKind::Extended { .. })
    }

    /// Shadow of this light alone.
    pub fn cast(&self, occ: &Occluder) -> Shadow {
        match self.kind {
            LightKind::Point => Shadow::Point(point_shadow(self.pos, occ)),
            LightKind::Extended { radius } => {
                Shadow::Extended(extended_shadow(self.pos, radius, occ))
            }
        }
    }
}

impl Default for LightSource {
    fn default() -> Self {
        Self::point(200.0, 150.0)
    }
}

/// Drawing surface size. Accepted from requests, ignored by the geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub lights: Vec<LightSource>,
    pub occluder: Occluder,
    pub canvas: Canvas,
}

impl Scene {
    pub fn new(occluder: Occluder, lights: Vec<LightSource>) -> Self {
        Self {
            lights,
            occluder,
            canvas: Canvas::default(),
        }
    }

    #[inline]
    pub fn cast_shadows(&self) -> ShadowResponse {
        cast_shadows(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shadow {
    Point(PointShadow),
    Extended(ExtendedShadow),
}

impl Shadow {
    #[inline]
    pub fn visible(&self) -> bool {
        match self {
            Shadow::Point(s) => s.visible,
            Shadow::Extended(s) => s.visible,
        }
    }
}

/// One response entry: a shadow tagged with its light's input position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightShadow {
    pub light_index: usize,
    pub intensity: f64,
    pub shadow: Shadow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShadowResponse {
    pub shadows: Vec<LightShadow>,
    pub stick_x: f64,
    pub stick_height: f64,
}

impl ShadowResponse {
    pub fn visible_count(&self) -> usize {
        self.shadows.iter().filter(|s| s.shadow.visible()).count()
    }
}

/// Cast every light in `scene` against its stick, preserving input order.
pub fn cast_shadows(scene: &Scene) -> ShadowResponse {
    let occ = &scene.occluder;
    let shadows = scene
        .lights
        .iter()
        .enumerate()
        .map(|(light_index, light)| LightShadow {
            light_index,
            intensity: light.intensity,
            shadow: light.cast(occ),
        })
        .collect();
    ShadowResponse {
        shadows,
        stick_x: occ.x,
        stick_height: occ.height,
    }
}
