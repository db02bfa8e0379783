use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::light::LightComponent;
use crate::components::mesh::MeshComponent;
use crate::components::orbit::OrbitComponent;
use crate::components::points::PointCloud;

/// Fat Entity: a single struct with optional components.
/// Designed for simplicity over ECS purity: a scene holds a sun, a handful of
/// planets and one galaxy.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Uniform scale applied to the mesh radius.
    pub scale: f32,
    /// Drawn sphere (lights without a mesh are invisible).
    pub mesh: Option<MeshComponent>,
    /// Point light emitted from `pos`.
    pub light: Option<LightComponent>,
    /// Circular orbit driving `pos` every frame.
    pub orbit: Option<OrbitComponent>,
    /// Point cloud (the galaxy).
    pub points: Option<PointCloud>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            scale: 1.0,
            mesh: None,
            light: None,
            orbit: None,
            points: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_light(mut self, light: LightComponent) -> Self {
        self.light = Some(light);
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitComponent) -> Self {
        self.orbit = Some(orbit);
        self
    }

    pub fn with_points(mut self, points: PointCloud) -> Self {
        self.points = Some(points);
        self
    }
}
