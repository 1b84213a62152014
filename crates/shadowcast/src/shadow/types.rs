//! Value types for the shadow engine.
//!
//! - `Occluder`: the stick and the ground line it stands on.
//! - `PointShadow`: single segment cast by a point light.
//! - `ExtendedShadow`: umbra/penumbra pair cast by a disc light.
//! - `LightSide`: which side of the stick a light centre sits on.

/// Vertical stick standing on the ground line `y = ground_y`.
///
/// `height` is measured upward from the ground; since `y` grows downward the
/// stick top sits at `ground_y - height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Occluder {
    pub x: f64,
    pub height: f64,
    pub ground_y: f64,
}

impl Occluder {
    #[inline]
    pub fn new(x: f64, height: f64, ground_y: f64) -> Self {
        Self {
            x,
            height,
            ground_y,
        }
    }
}

impl Default for Occluder {
    fn default() -> Self {
        Self {
            x: 400.0,
            height: 150.0,
            ground_y: 500.0,
        }
    }
}

/// Shadow of a point light: the segment `[start, end]` on the ground.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointShadow {
    pub start: f64,
    pub end: f64,
    /// Always non-negative.
    pub length: f64,
    pub visible: bool,
}

impl PointShadow {
    /// Zero-length, not-visible shadow anchored at the stick base.
    #[inline]
    pub fn hidden(stick_x: f64) -> Self {
        Self {
            start: stick_x,
            end: stick_x,
            length: 0.0,
            visible: false,
        }
    }
}

/// Umbra/penumbra decomposition of a disc light's shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtendedShadow {
    pub umbra_start: f64,
    pub umbra_end: f64,
    pub penumbra_left: f64,
    pub penumbra_right: f64,
    pub visible: bool,
    /// `Some` exactly when `visible`.
    pub has_umbra: Option<bool>,
}

impl ExtendedShadow {
    /// Not-visible result with every boundary collapsed onto the stick base.
    #[inline]
    pub fn hidden(stick_x: f64) -> Self {
        Self {
            umbra_start: stick_x,
            umbra_end: stick_x,
            penumbra_left: stick_x,
            penumbra_right: stick_x,
            visible: false,
            has_umbra: None,
        }
    }

    #[inline]
    pub fn umbra_width(&self) -> f64 {
        (self.umbra_end - self.umbra_start).abs()
    }

    #[inline]
    pub fn penumbra_width(&self) -> f64 {
        (self.penumbra_right - self.penumbra_left).abs()
    }
}

/// Horizontal position of a light centre relative to the stick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightSide {
    /// `light_x < stick_x`.
    LeftOfOccluder,
    /// `light_x >= stick_x`, including a light directly above the stick.
    AtOrRightOfOccluder,
}

impl LightSide {
    #[inline]
    pub fn of(light_x: f64, stick_x: f64) -> Self {
        if light_x < stick_x {
            LightSide::LeftOfOccluder
        } else {
            LightSide::AtOrRightOfOccluder
        }
    }
}
