use crate::components::entity::Entity;
use crate::renderer::instance::{BodyBuffer, BodyInstance};

/// Build the body buffer from a set of entities.
/// Every active entity with a mesh becomes one sphere instance.
pub fn build_body_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut BodyBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        let instance = BodyInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius: mesh.radius() * entity.scale,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            emissive: mesh.emissive,
        };

        if !buffer.push(instance) {
            log::warn!("body capacity reached, skipping '{}'", entity.tag);
            break;
        }
    }
}
