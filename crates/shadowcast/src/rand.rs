//! Random scenes (light layouts) with replay tokens.
//!
//! Model
//! - Lights are placed the way the interactive front end adds them:
//!   `x ∈ [50, canvas.width - 50)`, `y ∈ [100, 300)`.
//! - Each light is extended with probability `extended_frac`, with a radius
//!   drawn from `radius`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::ops::Range;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::scene::{Canvas, LightKind, LightSource, Scene};
use crate::shadow::Occluder;

/// Sampler configuration.
#[derive(Clone, Debug)]
pub struct SceneCfg {
    pub light_count: usize,
    /// Probability that a light is extended. Clamped to [0, 1]; NaN means 0.
    pub extended_frac: f64,
    pub radius: Range<f64>,
    /// Horizontal margin kept free on both canvas sides.
    pub margin_x: f64,
    pub light_y: Range<f64>,
    pub occluder: Occluder,
    pub canvas: Canvas,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            light_count: 3,
            extended_frac: 0.5,
            radius: 10.0..40.0,
            margin_x: 50.0,
            light_y: 100.0..300.0,
            occluder: Occluder::default(),
            canvas: Canvas::default(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

fn sample_range<R: Rng>(rng: &mut R, r: &Range<f64>) -> f64 {
    if r.end > r.start {
        rng.gen_range(r.clone())
    } else {
        r.start
    }
}

/// Draw a scene with `cfg.light_count` lights. Same token, same scene.
pub fn draw_scene(cfg: &SceneCfg, tok: ReplayToken) -> Scene {
    let mut rng = tok.to_std_rng();
    let p_ext = if cfg.extended_frac.is_nan() {
        0.0
    } else {
        cfg.extended_frac.clamp(0.0, 1.0)
    };
    let x_range = cfg.margin_x..(cfg.canvas.width - cfg.margin_x);
    let lights = (0..cfg.light_count)
        .map(|_| {
            let pos = Vector2::new(
                sample_range(&mut rng, &x_range),
                sample_range(&mut rng, &cfg.light_y),
            );
            let kind = if rng.gen_bool(p_ext) {
                LightKind::Extended {
                    radius: sample_range(&mut rng, &cfg.radius),
                }
            } else {
                LightKind::Point
            };
            LightSource {
                pos,
                kind,
                intensity: 1.0,
            }
        })
        .collect();
    Scene {
        lights,
        occluder: cfg.occluder,
        canvas: cfg.canvas,
    }
}
