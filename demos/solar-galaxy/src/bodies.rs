//! Sun and planet data for the scene.
//!
//! Periods are the rounded sidereal periods in Earth days; the angular rate is
//! `100 / period`, so one simulated "day" passes every hundredth of a second.
//! Orbit radii are evenly spaced scene units, not astronomical distances.

/// Height of the orbital plane (and of the sun).
pub const SCENE_HEIGHT: f32 = 5.0;

/// Height the planet lights are placed at before the first frame moves them.
pub const INITIAL_LIGHT_HEIGHT: f32 = 3.0;

/// Size of the marker drawn at each planet light.
pub const LIGHT_HELPER_SIZE: f32 = 0.2;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 1.0;
pub const SUN_COLOR: u32 = 0xffc500;
pub const SUN_EMISSIVE: f32 = 1.0;

// ── Planets ──────────────────────────────────────────────────────────

/// One orbiting planet: a coloured point light with a small sphere.
#[derive(Debug, Clone, Copy)]
pub struct CelestialBody {
    pub name: &'static str,
    pub color: u32,
    pub light_intensity: f32,
    /// Radius of the sphere drawn at the light.
    pub display_radius: f32,
    pub orbit_radius: f32,
    pub period_days: f32,
}

impl CelestialBody {
    /// Angular rate fed to the orbit updater.
    pub fn rate(&self) -> f32 {
        100.0 / self.period_days
    }
}

pub const PLANET_COUNT: usize = 7;

pub const PLANETS: [CelestialBody; PLANET_COUNT] = [
    CelestialBody { name: "Mercury", color: 0xc0c0c0, light_intensity: 0.5,  display_radius: 0.08, orbit_radius: 3.0, period_days: 88.0 },
    CelestialBody { name: "Venus",   color: 0xffa500, light_intensity: 0.45, display_radius: 0.12, orbit_radius: 4.0, period_days: 225.0 },
    CelestialBody { name: "Mars",    color: 0xff4500, light_intensity: 0.4,  display_radius: 0.10, orbit_radius: 5.0, period_days: 685.0 },
    CelestialBody { name: "Jupiter", color: 0xf5a623, light_intensity: 0.35, display_radius: 0.30, orbit_radius: 6.0, period_days: 4345.0 },
    CelestialBody { name: "Saturn",  color: 0xfdb813, light_intensity: 0.3,  display_radius: 0.26, orbit_radius: 7.0, period_days: 10767.0 },
    CelestialBody { name: "Uranus",  color: 0x00ff7f, light_intensity: 0.25, display_radius: 0.18, orbit_radius: 8.0, period_days: 30660.0 },
    CelestialBody { name: "Neptune", color: 0x87cefa, light_intensity: 0.2,  display_radius: 0.17, orbit_radius: 9.0, period_days: 59860.0 },
];
