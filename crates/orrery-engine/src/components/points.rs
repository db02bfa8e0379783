use glam::Vec3;

use crate::config::GalaxyParameters;
use crate::core::color::Color;

/// One galaxy point, read back from a `PointCloud`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyPoint {
    pub position: Vec3,
    pub color: Color,
}

/// Material settings the renderer applies to a point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub size: f32,
    pub size_attenuation: bool,
    pub additive_blending: bool,
}

impl PointStyle {
    /// Bit 0: size attenuation, bit 1: additive blending.
    pub fn flags(&self) -> u32 {
        (self.size_attenuation as u32) | (self.additive_blending as u32) << 1
    }
}

impl From<&GalaxyParameters> for PointStyle {
    fn from(params: &GalaxyParameters) -> Self {
        Self {
            size: params.size,
            size_attenuation: params.size_attenuation,
            additive_blending: params.additive_blending,
        }
    }
}

/// Point cloud with parallel position / color buffers (3 floats per point each).
/// Immutable once built; regeneration replaces the whole cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    positions: Vec<f32>,
    colors: Vec<f32>,
    pub style: PointStyle,
}

impl PointCloud {
    /// Build from parallel buffers. Both must hold `3 × n` floats.
    pub fn new(positions: Vec<f32>, colors: Vec<f32>, style: PointStyle) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        debug_assert_eq!(positions.len() % 3, 0);
        Self { positions, colors, style }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    pub fn colors_ptr(&self) -> *const f32 {
        self.colors.as_ptr()
    }

    pub fn iter(&self) -> impl Iterator<Item = GalaxyPoint> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| GalaxyPoint {
                position: Vec3::new(p[0], p[1], p[2]),
                color: Color::new(c[0], c[1], c[2]),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_pairs_positions_with_colors() {
        let style = PointStyle::from(&GalaxyParameters::default());
        let cloud = PointCloud::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
            style,
        );
        assert_eq!(cloud.len(), 2);
        let points: Vec<_> = cloud.iter().collect();
        assert_eq!(points[1].position, Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(points[1].color, Color::new(0.4, 0.5, 0.6));
    }

    #[test]
    fn style_flags() {
        let mut style = PointStyle::from(&GalaxyParameters::default());
        assert_eq!(style.flags(), 0b11);
        style.size_attenuation = false;
        assert_eq!(style.flags(), 0b10);
    }
}
