use bytemuck::{Pod, Zeroable};

/// Per-body render data read by the host renderer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// World-space sphere radius (mesh radius × entity scale).
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of sphere instances, capped at the protocol capacity.
pub struct BodyBuffer {
    instances: Vec<BodyInstance>,
    max_instances: usize,
}

impl BodyBuffer {
    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            max_instances,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Push an instance; returns false once the buffer is full.
    pub fn push(&mut self, instance: BodyInstance) -> bool {
        if self.instances.len() >= self.max_instances {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    /// Raw pointer to instance data for the renderer.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 32);
        assert_eq!(BodyInstance::FLOATS, 8);
    }

    #[test]
    fn push_stops_at_capacity() {
        let mut buf = BodyBuffer::with_capacity(2);
        assert!(buf.push(BodyInstance::default()));
        assert!(buf.push(BodyInstance::default()));
        assert!(!buf.push(BodyInstance::default()));
        assert_eq!(buf.instance_count(), 2);
    }
}
