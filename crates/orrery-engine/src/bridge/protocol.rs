/// Shared frame buffer layout.
/// Must stay in sync with the host renderer that reads it.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Bodies: max_bodies × 8 floats]
/// [Lights: max_lights × 8 floats]
/// [Events: max_events × 4 floats]
/// [Camera: 20 floats]
/// ```
///
/// Galaxy positions/colors are not part of the frame buffer: their size comes
/// from configuration and they only change on regeneration, so the host reads
/// them through their own pointers when `HEADER_GALAXY_GENERATION` changes.

use crate::api::app::SceneConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_BODIES: usize = 3;
pub const HEADER_BODY_COUNT: usize = 4;
pub const HEADER_MAX_LIGHTS: usize = 5;
pub const HEADER_LIGHT_COUNT: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_EVENT_COUNT: usize = 8;
pub const HEADER_ELAPSED_SECONDS: usize = 9;
pub const HEADER_GALAXY_POINT_COUNT: usize = 10;
pub const HEADER_GALAXY_GENERATION: usize = 11;
pub const HEADER_GALAXY_POINT_SIZE: usize = 12;
pub const HEADER_GALAXY_FLAGS: usize = 13;
pub const HEADER_PIXEL_RATIO: usize = 14;
pub const HEADER_CAMERA_ASPECT: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body instance: x, y, z, radius, r, g, b, emissive.
pub const BODY_FLOATS: usize = 8;

/// Floats per point light: x, y, z, r, g, b, intensity, helper_size.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per scene event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Floats for the camera: view-projection (16) + eye position (4).
pub const CAMERA_FLOATS: usize = 20;

pub const DEFAULT_MAX_BODIES: usize = 32;
pub const DEFAULT_MAX_LIGHTS: usize = 8;
pub const DEFAULT_MAX_EVENTS: usize = 16;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_bodies: usize,
    pub max_lights: usize,
    pub max_events: usize,

    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where camera data begins.
    pub camera_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_bodies: usize, max_lights: usize, max_events: usize) -> Self {
        let body_data_offset = HEADER_FLOATS;
        let light_data_offset = body_data_offset + max_bodies * BODY_FLOATS;
        let event_data_offset = light_data_offset + max_lights * LIGHT_FLOATS;
        let camera_data_offset = event_data_offset + max_events * EVENT_FLOATS;
        let buffer_total_floats = camera_data_offset + CAMERA_FLOATS;

        Self {
            max_bodies,
            max_lights,
            max_events,
            body_data_offset,
            light_data_offset,
            event_data_offset,
            camera_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a SceneConfig.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.max_bodies, config.max_lights, config.max_events)
    }
}

/// Per-frame values written into the header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameHeader {
    pub frame_counter: u32,
    pub body_count: usize,
    pub light_count: usize,
    pub event_count: usize,
    pub elapsed_seconds: f64,
    pub galaxy_point_count: usize,
    pub galaxy_generation: u32,
    pub galaxy_point_size: f32,
    pub galaxy_flags: u32,
    pub pixel_ratio: f32,
    pub camera_aspect: f32,
}

impl FrameHeader {
    /// Serialize into header floats. Counts are clamped to the layout capacities.
    pub fn to_floats(&self, layout: &ProtocolLayout) -> [f32; HEADER_FLOATS] {
        let mut h = [0.0; HEADER_FLOATS];
        h[HEADER_LOCK] = 0.0;
        h[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_MAX_BODIES] = layout.max_bodies as f32;
        h[HEADER_BODY_COUNT] = self.body_count.min(layout.max_bodies) as f32;
        h[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        h[HEADER_LIGHT_COUNT] = self.light_count.min(layout.max_lights) as f32;
        h[HEADER_MAX_EVENTS] = layout.max_events as f32;
        h[HEADER_EVENT_COUNT] = self.event_count.min(layout.max_events) as f32;
        h[HEADER_ELAPSED_SECONDS] = self.elapsed_seconds as f32;
        h[HEADER_GALAXY_POINT_COUNT] = self.galaxy_point_count as f32;
        h[HEADER_GALAXY_GENERATION] = self.galaxy_generation as f32;
        h[HEADER_GALAXY_POINT_SIZE] = self.galaxy_point_size;
        h[HEADER_GALAXY_FLAGS] = self.galaxy_flags as f32;
        h[HEADER_PIXEL_RATIO] = self.pixel_ratio;
        h[HEADER_CAMERA_ASPECT] = self.camera_aspect;
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&SceneConfig::default());

        assert_eq!(layout.max_bodies, DEFAULT_MAX_BODIES);
        assert_eq!(layout.max_lights, DEFAULT_MAX_LIGHTS);
        assert_eq!(layout.max_events, DEFAULT_MAX_EVENTS);

        let expected = HEADER_FLOATS
            + DEFAULT_MAX_BODIES * BODY_FLOATS
            + DEFAULT_MAX_LIGHTS * LIGHT_FLOATS
            + DEFAULT_MAX_EVENTS * EVENT_FLOATS
            + CAMERA_FLOATS;
        assert_eq!(layout.buffer_total_floats, expected);
        assert_eq!(layout.buffer_total_bytes, expected * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 7, 3);

        assert_eq!(layout.body_data_offset, HEADER_FLOATS);
        assert_eq!(layout.light_data_offset, layout.body_data_offset + 10 * BODY_FLOATS);
        assert_eq!(layout.event_data_offset, layout.light_data_offset + 7 * LIGHT_FLOATS);
        assert_eq!(layout.camera_data_offset, layout.event_data_offset + 3 * EVENT_FLOATS);
        assert_eq!(layout.buffer_total_floats, layout.camera_data_offset + CAMERA_FLOATS);
    }

    #[test]
    fn header_clamps_counts_to_capacity() {
        let layout = ProtocolLayout::new(4, 2, 1);
        let header = FrameHeader {
            frame_counter: 12,
            body_count: 9,
            light_count: 7,
            event_count: 3,
            elapsed_seconds: 1.5,
            galaxy_point_count: 100_000,
            galaxy_generation: 2,
            galaxy_point_size: 0.01,
            galaxy_flags: 0b11,
            pixel_ratio: 2.0,
            camera_aspect: 1.5,
        };
        let h = header.to_floats(&layout);

        assert_eq!(h[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(h[HEADER_FRAME_COUNTER], 12.0);
        assert_eq!(h[HEADER_BODY_COUNT], 4.0);
        assert_eq!(h[HEADER_LIGHT_COUNT], 2.0);
        assert_eq!(h[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(h[HEADER_ELAPSED_SECONDS], 1.5);
        assert_eq!(h[HEADER_GALAXY_POINT_COUNT], 100_000.0);
        assert_eq!(h[HEADER_GALAXY_FLAGS], 3.0);
        assert_eq!(h[HEADER_CAMERA_ASPECT], 1.5);
    }
}
