use crate::core::color::Color;

/// Point light attached to an entity; it shines from the entity's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightComponent {
    pub color: Color,
    pub intensity: f32,
    /// Size of the debug marker drawn at the light (0.0 = no marker).
    pub helper_size: f32,
}

impl LightComponent {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            helper_size: 0.0,
        }
    }

    pub fn with_helper(mut self, size: f32) -> Self {
        self.helper_size = size;
        self
    }
}
