use std::f64::consts::PI;

use glam::Vec3;

use crate::components::entity::Entity;
use crate::components::orbit::OrbitComponent;

/// Position on a circular orbit after `elapsed` seconds.
///
/// `x = sin(π·t·rate)·radius`, `z = cos(π·t·rate)·radius`, `y = height`.
/// The angle is computed in f64 so long sessions keep their precision.
pub fn orbit_position(elapsed: f64, rate: f32, radius: f32, height: f32) -> Vec3 {
    let angle = PI * elapsed * rate as f64;
    let radius = radius as f64;
    Vec3::new(
        (angle.sin() * radius) as f32,
        height,
        (angle.cos() * radius) as f32,
    )
}

impl OrbitComponent {
    pub fn position_at(&self, elapsed: f64) -> Vec3 {
        orbit_position(elapsed, self.rate, self.radius, self.height)
    }
}

/// Move every active orbiting entity to its position at `elapsed`.
pub fn tick_orbits<'a>(entities: impl Iterator<Item = &'a mut Entity>, elapsed: f64) {
    for entity in entities {
        if !entity.active {
            continue;
        }
        if let Some(orbit) = &entity.orbit {
            entity.pos = orbit.position_at(elapsed);
        }
    }
}
