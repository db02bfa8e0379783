//! Procedural spiral galaxy: one bounded loop producing parallel
//! position / color buffers.

use std::f32::consts::TAU;

use crate::components::points::{PointCloud, PointStyle};
use crate::config::{GalaxyParameters, JitterMode};
use crate::core::rng::Rng;

/// Generate `params.count` points on `params.branches` spiral arms.
///
/// Each point gets a uniform radius in [0, radius), is placed on its arm
/// (`i mod branches`) twisted by `spin × radius`, perturbed per axis, and
/// colored by blending inside → outside color with `radius / params.radius`.
pub fn generate_galaxy(params: &GalaxyParameters, rng: &mut Rng) -> PointCloud {
    let count = params.count as usize;
    let branches = params.branches.get();
    let (inside, outside) = params.colors();

    let mut positions = Vec::with_capacity(count * 3);
    let mut colors = Vec::with_capacity(count * 3);

    for i in 0..params.count {
        let radius = rng.next_f32() * params.radius;
        let spin = params.spin * radius;
        let branch_angle = (i % branches) as f32 / branches as f32 * TAU;

        let jx = jitter(params, radius, rng);
        let jy = jitter(params, radius, rng);
        let jz = jitter(params, radius, rng);

        let angle = branch_angle + spin;
        positions.extend_from_slice(&[
            angle.cos() * radius + jx,
            jy + params.center_height,
            angle.sin() * radius + jz,
        ]);

        let mix = if params.radius > 0.0 {
            radius / params.radius
        } else {
            0.0
        };
        colors.extend_from_slice(&inside.lerp(outside, mix).to_array());
    }

    PointCloud::new(positions, colors, PointStyle::from(params))
}

/// Single-axis displacement, scaled by the point's radius.
fn jitter(params: &GalaxyParameters, radius: f32, rng: &mut Rng) -> f32 {
    match params.jitter {
        JitterMode::Power => {
            rng.next_f32().powf(params.randomness_power)
                * rng.next_sign()
                * params.randomness
                * radius
        }
        JitterMode::Uniform => (rng.next_f32() - 0.5) * params.randomness * radius,
    }
}
