//! JSON request/response bodies (camelCase) and their mapping onto the library.
//!
//! Every request field is optional; missing fields take the defaults the
//! front end assumes. Unknown fields (e.g. a light's `color`) are ignored.

use serde::{Deserialize, Serialize};
use shadowcast::api::{
    Canvas, ExtendedShadow, LightKind, LightShadow, LightSource, Occluder, PointShadow, Scene,
    Shadow, ShadowResponse,
};
use shadowcast::Vec2;

fn default_light_x() -> f64 {
    200.0
}
fn default_light_y() -> f64 {
    150.0
}
fn default_radius() -> f64 {
    20.0
}
fn default_intensity() -> f64 {
    1.0
}
fn default_stick_x() -> f64 {
    400.0
}
fn default_stick_height() -> f64 {
    150.0
}
fn default_ground_y() -> f64 {
    500.0
}
fn default_canvas_width() -> f64 {
    800.0
}
fn default_canvas_height() -> f64 {
    600.0
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightSpec {
    #[serde(default = "default_light_x")]
    pub x: f64,
    #[serde(default = "default_light_y")]
    pub y: f64,
    #[serde(default)]
    pub is_extended: bool,
    /// Ignored unless `is_extended`.
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

impl Default for LightSpec {
    fn default() -> Self {
        Self {
            x: default_light_x(),
            y: default_light_y(),
            is_extended: false,
            radius: default_radius(),
            intensity: default_intensity(),
        }
    }
}

impl From<&LightSpec> for LightSource {
    fn from(spec: &LightSpec) -> Self {
        let kind = if spec.is_extended {
            LightKind::Extended {
                radius: spec.radius,
            }
        } else {
            LightKind::Point
        };
        LightSource {
            pos: Vec2::new(spec.x, spec.y),
            kind,
            intensity: spec.intensity,
        }
    }
}

impl From<&LightSource> for LightSpec {
    fn from(light: &LightSource) -> Self {
        let (is_extended, radius) = match light.kind {
            LightKind::Point => (false, default_radius()),
            LightKind::Extended { radius } => (true, radius),
        };
        LightSpec {
            x: light.pos.x,
            y: light.pos.y,
            is_extended,
            radius,
            intensity: light.intensity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowRequest {
    #[serde(default)]
    pub lights: Vec<LightSpec>,
    #[serde(default = "default_stick_x")]
    pub stick_x: f64,
    #[serde(default = "default_stick_height")]
    pub stick_height: f64,
    #[serde(default = "default_ground_y")]
    pub ground_y: f64,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
}

impl Default for ShadowRequest {
    fn default() -> Self {
        Self {
            lights: Vec::new(),
            stick_x: default_stick_x(),
            stick_height: default_stick_height(),
            ground_y: default_ground_y(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
        }
    }
}

impl From<&ShadowRequest> for Scene {
    fn from(req: &ShadowRequest) -> Self {
        Scene {
            lights: req.lights.iter().map(LightSource::from).collect(),
            occluder: Occluder::new(req.stick_x, req.stick_height, req.ground_y),
            canvas: Canvas {
                width: req.canvas_width,
                height: req.canvas_height,
            },
        }
    }
}

impl From<&Scene> for ShadowRequest {
    fn from(scene: &Scene) -> Self {
        ShadowRequest {
            lights: scene.lights.iter().map(LightSpec::from).collect(),
            stick_x: scene.occluder.x,
            stick_height: scene.occluder.height,
            ground_y: scene.occluder.ground_y,
            canvas_width: scene.canvas.width,
            canvas_height: scene.canvas.height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointEntry {
    pub shadow_start: f64,
    pub shadow_end: f64,
    pub shadow_length: f64,
    pub visible: bool,
    pub light_index: usize,
    pub intensity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedEntry {
    pub umbra_start: f64,
    pub umbra_end: f64,
    pub penumbra_left: f64,
    pub penumbra_right: f64,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_umbra: Option<bool>,
    pub light_index: usize,
    pub intensity: f64,
}

/// One `shadows[]` element, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShadowEntry {
    Point(PointEntry),
    Extended(ExtendedEntry),
}

impl ShadowEntry {
    fn point(s: &PointShadow, light_index: usize, intensity: f64) -> Self {
        ShadowEntry::Point(PointEntry {
            shadow_start: s.start,
            shadow_end: s.end,
            shadow_length: s.length,
            visible: s.visible,
            light_index,
            intensity,
        })
    }

    fn extended(s: &ExtendedShadow, light_index: usize, intensity: f64) -> Self {
        ShadowEntry::Extended(ExtendedEntry {
            umbra_start: s.umbra_start,
            umbra_end: s.umbra_end,
            penumbra_left: s.penumbra_left,
            penumbra_right: s.penumbra_right,
            visible: s.visible,
            has_umbra: s.has_umbra,
            light_index,
            intensity,
        })
    }
}

impl From<&LightShadow> for ShadowEntry {
    fn from(ls: &LightShadow) -> Self {
        match &ls.shadow {
            Shadow::Point(s) => ShadowEntry::point(s, ls.light_index, ls.intensity),
            Shadow::Extended(s) => ShadowEntry::extended(s, ls.light_index, ls.intensity),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowResponseBody {
    pub shadows: Vec<ShadowEntry>,
    pub stick_x: f64,
    pub stick_height: f64,
}

impl From<&ShadowResponse> for ShadowResponseBody {
    fn from(resp: &ShadowResponse) -> Self {
        ShadowResponseBody {
            shadows: resp.shadows.iter().map(ShadowEntry::from).collect(),
            stick_x: resp.stick_x,
            stick_height: resp.stick_height,
        }
    }
}
