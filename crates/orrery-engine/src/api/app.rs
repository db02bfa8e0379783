use crate::api::types::{EntityId, SceneEvent};
use crate::bridge::protocol::{DEFAULT_MAX_BODIES, DEFAULT_MAX_EVENTS, DEFAULT_MAX_LIGHTS};
use crate::components::entity::Entity;
use crate::components::points::PointCloud;
use crate::config::GalaxyParameters;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::Clock;
use crate::error::ConfigError;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::galaxy::generate_galaxy;
use crate::systems::lighting::LightState;
use crate::systems::orbit::tick_orbits;

/// Tag of the galaxy entity.
pub const GALAXY_TAG: &str = "galaxy";

/// Configuration for the engine, provided by the scene.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Seed for the procedural generators.
    pub seed: u64,
    /// Camera; its aspect ratio is replaced by the viewport at init.
    pub camera: PerspectiveCamera,
    /// Upper bound for the device pixel ratio (default: 2).
    pub max_pixel_ratio: f32,
    /// Ambient light color (default: black).
    pub ambient: [f32; 3],
    /// Maximum number of sphere instances (default: 32).
    pub max_bodies: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of scene events per frame (default: 16).
    pub max_events: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            camera: PerspectiveCamera::default(),
            max_pixel_ratio: 2.0,
            ambient: [0.0, 0.0, 0.0],
            max_bodies: DEFAULT_MAX_BODIES,
            max_lights: DEFAULT_MAX_LIGHTS,
            max_events: DEFAULT_MAX_EVENTS,
        }
    }
}

/// The contract every scene must fulfill.
pub trait SceneApp {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Build the scene graph: spawn bodies, generate the galaxy.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame hook, run before the orbit update. React to input here.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Apply a JSON configuration sent by the host page.
    fn load_config(&mut self, _ctx: &mut EngineContext, _json: &str) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Scene context: sole owner of everything the scene draws.
/// Passed to `SceneApp::init` and `SceneApp::update`.
pub struct EngineContext {
    pub scene: Scene,
    pub lights: LightState,
    pub events: Vec<SceneEvent>,
    pub rng: Rng,
    pub clock: Clock,
    next_id: u32,
    galaxy_id: Option<EntityId>,
    galaxy_generation: u32,
}

impl EngineContext {
    pub fn new(config: &SceneConfig) -> Self {
        let mut lights = LightState::with_capacity(config.max_lights);
        lights.set_ambient(config.ambient);
        Self {
            scene: Scene::new(),
            lights,
            events: Vec::with_capacity(config.max_events),
            rng: Rng::new(config.seed),
            clock: Clock::new(),
            next_id: 1,
            galaxy_id: None,
            galaxy_generation: 0,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a scene event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Drop the first `published` events, the ones the host has already seen.
    /// Events emitted since then (from `init` or `load_config`) are kept for
    /// the next frame.
    pub fn retire_events(&mut self, published: usize) {
        let published = published.min(self.events.len());
        self.events.drain(..published);
    }

    /// Seconds since the first frame.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Replace the galaxy with a freshly generated one.
    ///
    /// The previous point cloud is despawned (and its buffers dropped) before
    /// the new one is generated, so at most one cloud is ever alive.
    pub fn regenerate_galaxy(&mut self, params: &GalaxyParameters) -> EntityId {
        if let Some(old) = self.galaxy_id.take() {
            if let Some(entity) = self.scene.despawn(old) {
                let released = entity.points.as_ref().map_or(0, PointCloud::len);
                log::debug!("galaxy: released generation {} ({released} points)", self.galaxy_generation);
            }
        }

        let cloud = generate_galaxy(params, &mut self.rng);
        self.galaxy_generation += 1;
        log::info!(
            "galaxy: generation {} with {} points on {} branches",
            self.galaxy_generation,
            cloud.len(),
            params.branches
        );

        let id = self.next_id();
        self.scene.spawn(Entity::new(id).with_tag(GALAXY_TAG).with_points(cloud));
        self.galaxy_id = Some(id);
        id
    }

    /// The live galaxy, if one has been generated.
    pub fn galaxy(&self) -> Option<&PointCloud> {
        self.galaxy_id
            .and_then(|id| self.scene.get(id))
            .and_then(|e| e.points.as_ref())
    }

    /// How many times the galaxy has been generated.
    pub fn galaxy_generation(&self) -> u32 {
        self.galaxy_generation
    }

    /// Move every orbiting body to its position at `elapsed` seconds.
    pub fn update_orbits(&mut self, elapsed: f64) {
        tick_orbits(self.scene.iter_mut(), elapsed);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}
