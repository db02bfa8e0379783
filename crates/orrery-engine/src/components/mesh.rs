use crate::core::color::Color;

/// Mesh shape primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    Sphere { radius: f32 },
}

/// Component for renderer-drawn meshes (lit spheres).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: Color,
    /// Self-illumination multiplier (default: 0.0, the sun uses > 0).
    pub emissive: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: MeshShape::Sphere { radius: 1.0 },
            color: Color::WHITE,
            emissive: 0.0,
        }
    }
}

impl MeshComponent {
    pub fn new(shape: MeshShape, color: Color) -> Self {
        Self {
            shape,
            color,
            ..Default::default()
        }
    }

    pub fn sphere(radius: f32, color: Color) -> Self {
        Self::new(MeshShape::Sphere { radius }, color)
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    /// Bounding radius of the shape.
    pub fn radius(&self) -> f32 {
        match self.shape {
            MeshShape::Sphere { radius } => radius,
        }
    }
}
