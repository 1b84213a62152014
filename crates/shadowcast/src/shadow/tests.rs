use super::*;
use crate::cfg::UMBRA_EPS;
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn stick() -> Occluder {
    Occluder::new(400.0, 150.0, 500.0)
}

#[test]
fn point_similar_triangles() {
    // dx = 200, dy = 500 -> 150 * 200 / 500 = 60
    let s = compute_point_shadow(200.0, 0.0, 400.0, 150.0, 500.0);
    assert!(s.visible);
    assert_eq!(s.start, 400.0);
    assert!((s.length - 60.0).abs() < 1e-12);
    assert!((s.end - 460.0).abs() < 1e-12);
}

#[test]
fn point_light_right_of_stick_keeps_magnitude_only() {
    // Mirror of the similar-triangles case; boundary still extends toward +x.
    let s = compute_point_shadow(600.0, 0.0, 400.0, 150.0, 500.0);
    assert!(s.visible);
    assert!((s.length - 60.0).abs() < 1e-12);
    assert!((s.end - 460.0).abs() < 1e-12);
}

#[test]
fn point_light_on_ground_is_hidden() {
    let s = point_shadow(vector![100.0, 500.0], &stick());
    assert_eq!(s, PointShadow::hidden(400.0));
    let below = point_shadow(vector![100.0, 650.0], &stick());
    assert!(!below.visible);
    assert_eq!(below.length, 0.0);
}

#[test]
fn point_negative_height_reports_absolute_length() {
    let occ = Occluder::new(400.0, -150.0, 500.0);
    let s = point_shadow(vector![200.0, 0.0], &occ);
    assert!(s.visible);
    assert!((s.length - 60.0).abs() < 1e-12);
}

#[test]
fn light_side_classification() {
    assert_eq!(LightSide::of(399.9, 400.0), LightSide::LeftOfOccluder);
    assert_eq!(LightSide::of(400.0, 400.0), LightSide::AtOrRightOfOccluder);
    assert_eq!(LightSide::of(500.0, 400.0), LightSide::AtOrRightOfOccluder);
}

#[test]
fn extended_light_left_of_stick() {
    // Edges at 180 and 220, dy = 350: ends 400 + 150*220/350 and 400 + 150*180/350.
    let e = extended_shadow(vector![200.0, 150.0], 20.0, &stick());
    assert!(e.visible);
    let near = 400.0 + 150.0 * 180.0 / 350.0;
    let far = 400.0 + 150.0 * 220.0 / 350.0;
    assert_eq!(e.umbra_start, 400.0);
    assert!((e.umbra_end - near).abs() < 1e-9);
    assert_eq!(e.penumbra_left, 400.0);
    assert!((e.penumbra_right - far).abs() < 1e-9);
    assert_eq!(e.has_umbra, Some(true));
}

#[test]
fn extended_light_right_of_stick_uses_mirrored_assignment() {
    let e = extended_shadow(vector![600.0, 150.0], 20.0, &stick());
    assert!(e.visible);
    let near = 400.0 + 150.0 * 180.0 / 350.0;
    let far = 400.0 + 150.0 * 220.0 / 350.0;
    assert!((e.umbra_start - far).abs() < 1e-9);
    assert_eq!(e.umbra_end, 400.0);
    assert!((e.penumbra_left - near).abs() < 1e-9);
    assert_eq!(e.penumbra_right, 400.0);
}

#[test]
fn extended_hidden_when_any_edge_below_ground() {
    let e = compute_extended_shadow(200.0, 520.0, 20.0, 400.0, 150.0, 500.0);
    assert_eq!(e, ExtendedShadow::hidden(400.0));
    assert_eq!(e.has_umbra, None);
    assert_eq!(e.umbra_width(), 0.0);
    assert_eq!(e.penumbra_width(), 0.0);
}

#[test]
fn extended_zero_radius_matches_point_light() {
    let p = point_shadow(vector![250.0, 100.0], &stick());
    let e = extended_shadow(vector![250.0, 100.0], 0.0, &stick());
    assert_eq!(e.umbra_end, p.end);
    assert_eq!(e.penumbra_right, p.end);
}

#[test]
fn has_umbra_threshold_is_strict() {
    // dy = 100 and height = 100, so the umbra width equals the right edge's dx.
    let occ = Occluder::new(400.0, 100.0, 500.0);
    let at = extended_shadow(vector![389.0, 400.0], 10.0, &occ);
    assert_eq!(at.umbra_width(), UMBRA_EPS);
    assert_eq!(at.has_umbra, Some(false));

    let above = extended_shadow(vector![388.9999, 400.0], 10.0, &occ);
    assert!(above.umbra_width() > UMBRA_EPS);
    assert_eq!(above.has_umbra, Some(true));
}

#[test]
fn extended_randomized_seeded_left_union_contains_intersection() {
    let mut rng = StdRng::seed_from_u64(7);
    let occ = stick();
    for _ in 0..200 {
        let light = vector![rng.gen_range(0.0..399.0), rng.gen_range(0.0..480.0)];
        let r = rng.gen_range(0.0..20.0);
        let e = extended_shadow(light, r, &occ);
        if !e.visible {
            continue;
        }
        assert!(e.penumbra_width() + 1e-12 >= e.umbra_width());
    }
}

proptest! {
    #[test]
    fn prop_point_hidden_at_or_below_ground(
        lx in -1e3f64..1e3,
        ground in -1e3f64..1e3,
        above in 0.0f64..1e3,
        sx in -1e3f64..1e3,
        h in 0.0f64..500.0,
    ) {
        let s = compute_point_shadow(lx, ground + above, sx, h, ground);
        prop_assert!(!s.visible);
        prop_assert_eq!(s.start, sx);
        prop_assert_eq!(s.end, sx);
        prop_assert_eq!(s.length, 0.0);
    }

    #[test]
    fn prop_point_directly_above_has_no_offset(
        sx in -1e3f64..1e3,
        h in 0.0f64..500.0,
        ground in -1e3f64..1e3,
        rise in 1e-3f64..1e3,
    ) {
        let s = compute_point_shadow(sx, ground - rise, sx, h, ground);
        prop_assert!(s.visible);
        prop_assert_eq!(s.end, sx);
        prop_assert_eq!(s.length, 0.0);
    }

    #[test]
    fn prop_extended_left_ordering(
        sx in -1e3f64..1e3,
        offset in 1e-3f64..500.0,
        r in 0.0f64..100.0,
        h in 0.0f64..500.0,
        rise in 1e-3f64..1e3,
    ) {
        let occ = Occluder::new(sx, h, 500.0);
        let e = extended_shadow(vector![sx - offset, 500.0 - rise], r, &occ);
        prop_assert!(e.visible);
        prop_assert!(e.penumbra_left <= e.umbra_start);
        prop_assert!(e.umbra_start <= e.umbra_end);
        prop_assert!(e.umbra_end <= e.penumbra_right);
    }

    #[test]
    fn prop_extended_right_mirrored(
        sx in -1e3f64..1e3,
        offset in 0.0f64..500.0,
        r in 0.0f64..100.0,
        h in 0.0f64..500.0,
        rise in 1e-3f64..1e3,
    ) {
        let occ = Occluder::new(sx, h, 500.0);
        let e = extended_shadow(vector![sx + offset, 500.0 - rise], r, &occ);
        prop_assert!(e.visible);
        prop_assert_eq!(e.umbra_end, sx);
        prop_assert_eq!(e.penumbra_right, sx);
        prop_assert!(e.penumbra_left <= e.umbra_start);
        prop_assert!(e.umbra_end <= e.penumbra_right);
        prop_assert_eq!(e.has_umbra, Some(e.umbra_width() > UMBRA_EPS));
    }
}
