use nalgebra::Vector2;

use super::types::{Occluder, PointShadow};

/// Shadow of a point light at `light` cast by `occ`.
///
/// Similar triangles: the ray through the stick top travels `dy = ground_y - light.y`
/// downward while the stick top is `height` above the ground, so the ground hit
/// lies `height * dx / dy` from the stick base. Only the magnitude is kept: the
/// shadow is always reported as extending toward `+x` from the base.
///
/// A light at or below the ground (`dy <= 0`) gives `PointShadow::hidden`.
pub fn point_shadow(light: Vector2<f64>, occ: &Occluder) -> PointShadow {
    let dx = occ.x - light.x;
    let dy = occ.ground_y - light.y;
    if dy <= 0.0 {
        return PointShadow::hidden(occ.x);
    }
    let length = (occ.height * dx / dy).abs();
    PointShadow {
        start: occ.x,
        end: occ.x + length,
        length,
        visible: true,
    }
}

/// Flat-argument form of [`point_shadow`], matching the request fields.
#[inline]
pub fn compute_point_shadow(
    light_x: f64,
    light_y: f64,
    stick_x: f64,
    stick_height: f64,
    ground_y: f64,
) -> PointShadow {
    point_shadow(
        Vector2::new(light_x, light_y),
        &Occluder::new(stick_x, stick_height, ground_y),
    )
}
