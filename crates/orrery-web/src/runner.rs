use orrery_engine::{
    build_body_buffer, build_light_buffer, clamp_pixel_ratio, BodyBuffer, ConfigError,
    EngineContext, FrameHeader, InputEvent, InputQueue, PerspectiveCamera, ProtocolLayout,
    SceneApp, SceneConfig, HEADER_FLOATS,
};
use orrery_engine::bridge::protocol::CAMERA_FLOATS;

/// Generic scene runner that wires up the frame loop.
///
/// Each concrete scene creates a `thread_local!` SceneRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export generic
/// structs directly.
pub struct SceneRunner<A: SceneApp> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    bodies: BodyBuffer,
    camera: PerspectiveCamera,
    /// View-projection (16 floats) followed by the eye position (4 floats).
    camera_data: [f32; CAMERA_FLOATS],
    config: SceneConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    frame_counter: u32,
    /// Events exposed to the host by the previous frame.
    published_events: usize,
    pixel_ratio: f32,
    initialized: bool,
}

impl<A: SceneApp> SceneRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            ctx: EngineContext::new(&config),
            bodies: BodyBuffer::with_capacity(config.max_bodies),
            camera: config.camera.clone(),
            camera_data: [0.0; CAMERA_FLOATS],
            input: InputQueue::new(),
            header: [0.0; HEADER_FLOATS],
            frame_counter: 0,
            published_events: 0,
            pixel_ratio: 1.0,
            initialized: false,
            layout,
            config,
            app,
        }
    }

    /// Initialize the scene. Call once after construction.
    ///
    /// The viewport is read here and only here: the camera aspect ratio is
    /// fixed for the session.
    pub fn init(&mut self, viewport_width: f32, viewport_height: f32, device_pixel_ratio: f32) {
        self.camera.set_viewport(viewport_width, viewport_height);
        self.pixel_ratio = clamp_pixel_ratio(device_pixel_ratio, self.config.max_pixel_ratio);
        self.app.init(&mut self.ctx);
        self.initialized = true;
        log::debug!(
            "scene initialized: {} entities, aspect {:.3}, pixel ratio {}",
            self.ctx.scene.len(),
            self.camera.aspect,
            self.pixel_ratio
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Forward a JSON configuration to the scene.
    pub fn load_config(&mut self, json: &str) -> Result<(), ConfigError> {
        self.app.load_config(&mut self.ctx, json)
    }

    /// Run one frame: read the clock, update the scene, move the bodies,
    /// pack the buffers the renderer reads.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        // Drop what the host read last frame; events raised between frames survive
        self.ctx.retire_events(self.published_events);

        let elapsed = self.ctx.clock.tick(now_ms);

        self.app.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.ctx.update_orbits(elapsed);

        build_body_buffer(self.ctx.scene.iter(), &mut self.bodies);
        build_light_buffer(self.ctx.scene.iter(), &mut self.ctx.lights);

        let uniform = self.camera.uniform();
        self.camera_data[..16].copy_from_slice(uniform.view_projection.as_flattened());
        self.camera_data[16..].copy_from_slice(&uniform.position);

        self.published_events = self.ctx.events.len();
        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.header = self.frame_header(elapsed).to_floats(&self.layout);
    }

    fn frame_header(&self, elapsed: f64) -> FrameHeader {
        let galaxy = self.ctx.galaxy();
        FrameHeader {
            frame_counter: self.frame_counter,
            body_count: self.bodies.instance_count() as usize,
            light_count: self.ctx.lights.count(),
            event_count: self.ctx.events.len(),
            elapsed_seconds: elapsed,
            galaxy_point_count: galaxy.map_or(0, |g| g.len()),
            galaxy_generation: self.ctx.galaxy_generation(),
            galaxy_point_size: galaxy.map_or(0.0, |g| g.style.size),
            galaxy_flags: galaxy.map_or(0, |g| g.style.flags()),
            pixel_ratio: self.pixel_ratio,
            camera_aspect: self.camera.aspect,
        }
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    // ---- Pointer accessors for the host renderer ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn bodies_ptr(&self) -> *const f32 {
        self.bodies.instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.bodies.instance_count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ctx.lights.ambient()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera_data.as_ptr()
    }

    pub fn galaxy_positions_ptr(&self) -> *const f32 {
        self.ctx.galaxy().map_or(std::ptr::null(), |g| g.positions_ptr())
    }

    pub fn galaxy_colors_ptr(&self) -> *const f32 {
        self.ctx.galaxy().map_or(std::ptr::null(), |g| g.colors_ptr())
    }

    pub fn galaxy_point_count(&self) -> u32 {
        self.ctx.galaxy().map_or(0, |g| g.len() as u32)
    }

    pub fn galaxy_generation(&self) -> u32 {
        self.ctx.galaxy_generation()
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::bridge::protocol::{
        HEADER_BODY_COUNT, HEADER_ELAPSED_SECONDS, HEADER_EVENT_COUNT, HEADER_FRAME_COUNTER,
        HEADER_GALAXY_GENERATION, HEADER_GALAXY_POINT_COUNT, HEADER_LIGHT_COUNT,
    };
    use orrery_engine::{
        Color, Entity, GalaxyParameters, LightComponent, MeshComponent, OrbitComponent,
        SceneEvent,
    };

    /// Minimal scene: one orbiting lit planet and a tiny galaxy.
    struct TestScene {
        updates: u32,
    }

    const KEY_R: u32 = 82;

    impl SceneApp for TestScene {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("planet")
                    .with_mesh(MeshComponent::sphere(0.2, Color::WHITE))
                    .with_light(LightComponent::new(Color::WHITE, 0.5))
                    .with_orbit(OrbitComponent::new(100.0 / 88.0, 2.0, 5.0)),
            );
            regenerate(ctx, 64);
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            for event in input.iter() {
                if let InputEvent::KeyDown { key_code: KEY_R } = event {
                    regenerate(ctx, 32);
                }
            }
        }

        fn load_config(&mut self, ctx: &mut EngineContext, json: &str) -> Result<(), ConfigError> {
            let params = GalaxyParameters::from_json(json)?;
            regenerate(ctx, params.count);
            Ok(())
        }
    }

    /// Regenerate and report the new generation to the host.
    fn regenerate(ctx: &mut EngineContext, count: u32) {
        ctx.regenerate_galaxy(&GalaxyParameters { count, ..Default::default() });
        let generation = ctx.galaxy_generation() as f32;
        ctx.emit_event(SceneEvent { kind: 1.0, a: count as f32, b: generation, c: 0.0 });
    }

    fn runner() -> SceneRunner<TestScene> {
        let mut r = SceneRunner::new(TestScene { updates: 0 });
        r.init(1600.0, 900.0, 3.0);
        r
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let mut r = SceneRunner::new(TestScene { updates: 0 });
        r.tick(0.0);
        assert_eq!(r.app.updates, 0);
        assert_eq!(r.header()[HEADER_FRAME_COUNTER], 0.0);
    }

    #[test]
    fn init_reads_viewport_once() {
        let r = runner();
        assert!((r.camera.aspect - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(r.pixel_ratio(), 2.0);
    }

    #[test]
    fn tick_moves_bodies_by_elapsed_time() {
        let mut r = runner();
        r.tick(10_000.0);
        let b = r.bodies.instances()[0];
        assert_eq!((b.x, b.y, b.z), (0.0, 5.0, 2.0));

        // Half a revolution later (t = 0.88 s).
        r.tick(10_880.0);
        let b = r.bodies.instances()[0];
        assert!(b.x.abs() < 1e-4 && (b.z + 2.0).abs() < 1e-4, "{b:?}");

        let light = r.context().lights.iter().next().copied().unwrap();
        assert_eq!((light.x, light.y, light.z), (b.x, b.y, b.z));
    }

    #[test]
    fn header_reflects_frame() {
        let mut r = runner();
        r.tick(0.0);
        r.tick(500.0);
        let h = r.header();
        assert_eq!(h[HEADER_FRAME_COUNTER], 2.0);
        assert_eq!(h[HEADER_BODY_COUNT], 1.0);
        assert_eq!(h[HEADER_LIGHT_COUNT], 1.0);
        assert_eq!(h[HEADER_ELAPSED_SECONDS], 0.5);
        assert_eq!(h[HEADER_GALAXY_POINT_COUNT], 64.0);
        assert_eq!(h[HEADER_GALAXY_GENERATION], 1.0);
    }

    #[test]
    fn input_is_drained_after_update() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: KEY_R });
        r.tick(0.0);
        assert_eq!(r.galaxy_generation(), 2);
        assert_eq!(r.galaxy_point_count(), 32);
        assert!(r.input.is_empty());

        r.tick(16.0);
        assert_eq!(r.galaxy_generation(), 2);
    }

    #[test]
    fn camera_data_holds_matrix_and_eye() {
        let mut r = runner();
        r.tick(0.0);
        assert_eq!(&r.camera_data[16..], &[0.0, 10.0, 15.0, 1.0]);
        assert!(r.camera_data[..16].iter().any(|v| *v != 0.0));
    }

    #[test]
    fn init_event_reaches_first_frame() {
        let mut r = runner();
        r.tick(0.0);
        assert_eq!(r.events_len(), 1);
        assert_eq!(r.context().events[0].b, 1.0);

        r.tick(16.0);
        assert_eq!(r.events_len(), 0);
    }

    #[test]
    fn config_event_survives_until_next_frame() {
        let mut r = runner();
        r.tick(0.0);
        r.load_config(r#"{ "count": 64 }"#).unwrap();
        r.tick(16.0);
        assert!(r.events_len() > 0);
        let event = r.context().events[0];
        assert_eq!((event.a, event.b), (64.0, 2.0));
        assert_eq!(r.galaxy_generation(), 2);

        r.tick(32.0);
        assert_eq!(r.events_len(), 0);
    }

    #[test]
    fn frame_events_are_kept_with_pending_ones() {
        let mut r = runner();
        r.tick(0.0);
        r.load_config(r#"{ "count": 16 }"#).unwrap();
        r.push_input(InputEvent::KeyDown { key_code: KEY_R });
        r.tick(16.0);
        assert_eq!(r.events_len(), 2);
        assert_eq!(r.header()[HEADER_EVENT_COUNT], 2.0);
    }
}
