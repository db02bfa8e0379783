/// Point lights for the 3D scene.
///
/// Lights live on entities (`LightComponent`) so they move with their body.
/// Each frame the engine gathers them into a flat `LightState` buffer for the
/// renderer's lighting pass.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::components::entity::Entity;
use crate::components::light::LightComponent;

/// A 3D point light with position, color, intensity and helper marker size.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, helper_size]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    pub helper_size: f32,
}

impl PointLight {
    /// Create a point light at `pos` from a light component.
    pub fn new(pos: Vec3, light: &LightComponent) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: light.color.r,
            g: light.color.g,
            b: light.color.b,
            intensity: light.intensity,
            helper_size: light.helper_size,
        }
    }
}

/// Frame's active lights plus the ambient color.
///
/// The ambient color defaults to black: only point lights (and emissive
/// meshes) contribute light.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
    max_lights: usize,
}

impl LightState {
    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: [0.0, 0.0, 0.0],
            max_lights,
        }
    }

    /// Add a point light. Lights beyond capacity are dropped.
    pub fn add(&mut self, light: PointLight) -> bool {
        if self.lights.len() >= self.max_lights {
            return false;
        }
        self.lights.push(light);
        true
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, color: [f32; 3]) {
        self.ambient = color;
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    /// Pointer to the lights data for the renderer.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::with_capacity(crate::bridge::protocol::DEFAULT_MAX_LIGHTS)
    }
}

/// Gather the lights of all active entities at their current positions.
pub fn build_light_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, state: &mut LightState) {
    state.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        if let Some(light) = &entity.light {
            if !state.add(PointLight::new(entity.pos, light)) {
                log::warn!("light capacity reached, skipping '{}'", entity.tag);
                break;
            }
        }
    }
}
