pub mod api;
pub mod bridge;
pub mod components;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::app::{SceneApp, SceneConfig, EngineContext, GALAXY_TAG};
pub use api::types::{EntityId, SceneEvent};
pub use bridge::protocol::{FrameHeader, ProtocolLayout, HEADER_FLOATS, LIGHT_FLOATS};
pub use components::entity::Entity;
pub use components::light::LightComponent;
pub use components::mesh::{MeshComponent, MeshShape};
pub use components::orbit::OrbitComponent;
pub use components::points::{GalaxyPoint, PointCloud, PointStyle};
pub use config::{GalaxyParameters, JitterMode};
pub use core::color::Color;
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::Clock;
pub use error::{ColorError, ConfigError};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{clamp_pixel_ratio, CameraUniform, PerspectiveCamera};
pub use renderer::instance::{BodyBuffer, BodyInstance};
pub use systems::galaxy::generate_galaxy;
pub use systems::lighting::{build_light_buffer, LightState, PointLight};
pub use systems::orbit::{orbit_position, tick_orbits};
pub use systems::render::build_body_buffer;
