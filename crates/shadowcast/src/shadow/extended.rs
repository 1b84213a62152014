use nalgebra::Vector2;

use super::point::point_shadow;
use super::types::{ExtendedShadow, LightSide, Occluder};
use crate::cfg::UMBRA_EPS;

/// Umbra/penumbra of a disc light of `radius` centred at `light`.
///
/// The disc is reduced to its horizontal edge points `light.x ± radius` at the
/// centre height; the vertical extent of the disc is ignored. Both edge shadows
/// share the stick base as anchor, so intersection and union of the two
/// intervals reduce to `min`/`max` of their far ends.
///
/// If either edge projection is not visible the whole result is hidden.
pub fn extended_shadow(light: Vector2<f64>, radius: f64, occ: &Occluder) -> ExtendedShadow {
    let left = point_shadow(Vector2::new(light.x - radius, light.y), occ);
    let right = point_shadow(Vector2::new(light.x + radius, light.y), occ);
    if !left.visible || !right.visible {
        return ExtendedShadow::hidden(occ.x);
    }

    let near = left.end.min(right.end);
    let far = left.end.max(right.end);
    let (umbra_start, umbra_end, penumbra_left, penumbra_right) =
        match LightSide::of(light.x, occ.x) {
            LightSide::LeftOfOccluder => (occ.x, near, occ.x, far),
            LightSide::AtOrRightOfOccluder => (far, occ.x, near, occ.x),
        };

    ExtendedShadow {
        umbra_start,
        umbra_end,
        penumbra_left,
        penumbra_right,
        visible: true,
        has_umbra: Some((umbra_end - umbra_start).abs() > UMBRA_EPS),
    }
}

/// Flat-argument form of [`extended_shadow`], matching the request fields.
#[inline]
pub fn compute_extended_shadow(
    light_x: f64,
    light_y: f64,
    radius: f64,
    stick_x: f64,
    stick_height: f64,
    ground_y: f64,
) -> ExtendedShadow {
    extended_shadow(
        Vector2::new(light_x, light_y),
        radius,
        &Occluder::new(stick_x, stick_height, ground_y),
    )
}
