//! Solar galaxy: seven coloured planet lights circling an emissive sun,
//! inside a procedurally generated spiral galaxy.
//!
//! The galaxy panel in the host page sends custom events; every accepted
//! edit regenerates the galaxy, rejected edits keep the current one.

use std::num::NonZeroU32;

use glam::Vec3;
use orrery_engine::*;

use crate::bodies;

// ── Custom event kinds from the galaxy panel ─────────────────────────

const CUSTOM_REGENERATE: u32 = 1;
const CUSTOM_SET_COUNT: u32 = 2;
const CUSTOM_SET_SIZE: u32 = 3;
const CUSTOM_SET_RADIUS: u32 = 4;
const CUSTOM_SET_SPIN: u32 = 5;
const CUSTOM_SET_BRANCHES: u32 = 6;
/// a = randomness, b = randomness power.
const CUSTOM_SET_RANDOMNESS: u32 = 7;
/// a = 0 for power jitter, anything else for uniform.
const CUSTOM_SET_JITTER: u32 = 8;
/// a = new seed.
const CUSTOM_RESEED: u32 = 9;

/// Keyboard `R`.
const KEY_REGENERATE: u32 = 82;

// ── Scene event kinds to the host ────────────────────────────────────

/// a = point count, b = generation, c = branches.
const EVENT_GALAXY_INFO: f32 = 1.0;
/// a = custom event kind that was rejected.
const EVENT_EDIT_REJECTED: f32 = 2.0;

pub struct SolarGalaxy {
    params: GalaxyParameters,
}

impl SolarGalaxy {
    pub fn new() -> Self {
        Self::with_parameters(GalaxyParameters::default())
    }

    pub fn with_parameters(params: GalaxyParameters) -> Self {
        Self { params }
    }

    #[cfg(test)]
    pub fn parameters(&self) -> &GalaxyParameters {
        &self.params
    }

    fn regenerate(&self, ctx: &mut EngineContext) {
        ctx.regenerate_galaxy(&self.params);
        let points = ctx.galaxy().map_or(0, PointCloud::len);
        ctx.emit_event(SceneEvent {
            kind: EVENT_GALAXY_INFO,
            a: points as f32,
            b: ctx.galaxy_generation() as f32,
            c: self.params.branches.get() as f32,
        });
    }

    /// Apply one panel edit to a copy of the parameters. `None` when the
    /// event kind is not an edit.
    fn edited(&self, kind: u32, a: f32, b: f32) -> Option<Result<GalaxyParameters, String>> {
        let mut next = self.params.clone();
        match kind {
            CUSTOM_SET_COUNT => next.count = a as u32,
            CUSTOM_SET_SIZE => next.size = a,
            CUSTOM_SET_RADIUS => next.radius = a,
            CUSTOM_SET_SPIN => next.spin = a,
            CUSTOM_SET_BRANCHES => match NonZeroU32::new(a as u32) {
                Some(branches) => next.branches = branches,
                None => return Some(Err(format!("branches must be at least 1, got {a}"))),
            },
            CUSTOM_SET_RANDOMNESS => {
                next.randomness = a;
                next.randomness_power = b;
            }
            CUSTOM_SET_JITTER => {
                next.jitter = if a == 0.0 { JitterMode::Power } else { JitterMode::Uniform };
            }
            _ => return None,
        }
        Some(next.validate().map(|()| next).map_err(|e| e.to_string()))
    }

    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32, a: f32, b: f32) {
        match kind {
            CUSTOM_REGENERATE => self.regenerate(ctx),
            CUSTOM_RESEED => {
                ctx.rng = Rng::new(a as u64);
                log::debug!("galaxy: reseeded with {}", a as u64);
                self.regenerate(ctx);
            }
            _ => match self.edited(kind, a, b) {
                Some(Ok(params)) => {
                    self.params = params;
                    self.regenerate(ctx);
                }
                Some(Err(reason)) => {
                    log::warn!("galaxy: edit {kind} rejected: {reason}");
                    ctx.emit_event(SceneEvent {
                        kind: EVENT_EDIT_REJECTED,
                        a: kind as f32,
                        ..Default::default()
                    });
                }
                None => log::debug!("ignoring custom event {kind}"),
            },
        }
    }
}

impl Default for SolarGalaxy {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneApp for SolarGalaxy {
    fn config(&self) -> SceneConfig {
        SceneConfig {
            max_bodies: bodies::PLANET_COUNT + 1,
            max_lights: bodies::PLANET_COUNT,
            ..SceneConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Sun ──────────────────────────────────────────────────────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id)
                .with_tag("sun")
                .with_pos(Vec3::new(0.0, bodies::SCENE_HEIGHT, 0.0))
                .with_mesh(
                    MeshComponent::sphere(bodies::SUN_RADIUS, Color::from_hex(bodies::SUN_COLOR))
                        .with_emissive(bodies::SUN_EMISSIVE),
                ),
        );

        // ── Planets ──────────────────────────────────────────────────
        for planet in &bodies::PLANETS {
            let color = Color::from_hex(planet.color);
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(planet.name)
                    .with_pos(Vec3::new(0.0, bodies::INITIAL_LIGHT_HEIGHT, 0.0))
                    .with_light(
                        LightComponent::new(color, planet.light_intensity)
                            .with_helper(bodies::LIGHT_HELPER_SIZE),
                    )
                    .with_mesh(MeshComponent::sphere(planet.display_radius, color))
                    .with_orbit(OrbitComponent::new(
                        planet.rate(),
                        planet.orbit_radius,
                        bodies::SCENE_HEIGHT,
                    )),
            );
        }

        // ── Galaxy ───────────────────────────────────────────────────
        self.regenerate(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::KeyDown { key_code: KEY_REGENERATE } => self.regenerate(ctx),
                InputEvent::Custom { kind, a, b, .. } => self.handle_custom(ctx, kind, a, b),
                _ => {}
            }
        }
    }

    fn load_config(&mut self, ctx: &mut EngineContext, json: &str) -> Result<(), ConfigError> {
        self.params = GalaxyParameters::from_json(json)?;
        log::info!("galaxy: loaded configuration ({} points)", self.params.count);
        self.regenerate(ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> SolarGalaxy {
        SolarGalaxy::with_parameters(GalaxyParameters {
            count: 500,
            ..Default::default()
        })
    }

    fn started() -> (SolarGalaxy, EngineContext) {
        let mut app = small();
        let mut ctx = EngineContext::new(&app.config());
        app.init(&mut ctx);
        ctx.clear_frame_data();
        (app, ctx)
    }

    fn send(app: &mut SolarGalaxy, ctx: &mut EngineContext, event: InputEvent) {
        let mut input = InputQueue::new();
        input.push(event);
        app.update(ctx, &input);
    }

    #[test]
    fn init_spawns_sun_planets_and_galaxy() {
        let (_, ctx) = started();
        let planets = ctx.scene.iter().filter(|e| e.orbit.is_some()).count();
        assert_eq!(planets, bodies::PLANET_COUNT);
        // sun + planets + galaxy
        assert_eq!(ctx.scene.len(), bodies::PLANET_COUNT + 2);
        assert_eq!(ctx.galaxy().map(PointCloud::len), Some(500));

        let sun = ctx.scene.find_by_tag("sun").unwrap();
        assert_eq!(sun.pos, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(sun.mesh.unwrap().color, Color::from_hex(0xffc500));
    }

    #[test]
    fn planets_carry_lights_and_orbits() {
        let (_, mut ctx) = started();
        let mercury = ctx.scene.find_by_tag("Mercury").unwrap();
        assert_eq!(mercury.pos.y, bodies::INITIAL_LIGHT_HEIGHT);
        let light = mercury.light.unwrap();
        assert_eq!(light.intensity, 0.5);
        assert_eq!(light.helper_size, 0.2);
        assert_eq!(mercury.orbit.unwrap().radius, 3.0);

        ctx.update_orbits(0.0);
        let mercury = ctx.scene.find_by_tag("Mercury").unwrap();
        assert_eq!(mercury.pos, Vec3::new(0.0, 5.0, 3.0));

        let mut lights = LightState::with_capacity(bodies::PLANET_COUNT);
        build_light_buffer(ctx.scene.iter(), &mut lights);
        assert_eq!(lights.count(), bodies::PLANET_COUNT);
    }

    #[test]
    fn key_r_regenerates() {
        let (mut app, mut ctx) = started();
        send(&mut app, &mut ctx, InputEvent::KeyDown { key_code: KEY_REGENERATE });
        assert_eq!(ctx.galaxy_generation(), 2);
        assert_eq!(ctx.scene.find_all_by_tag(GALAXY_TAG).len(), 1);
        assert_eq!(ctx.events[0].kind, EVENT_GALAXY_INFO);
        assert_eq!(ctx.events[0].b, 2.0);
    }

    #[test]
    fn count_edit_regenerates_with_new_count() {
        let (mut app, mut ctx) = started();
        send(
            &mut app,
            &mut ctx,
            InputEvent::Custom { kind: CUSTOM_SET_COUNT, a: 120.0, b: 0.0, c: 0.0 },
        );
        assert_eq!(app.parameters().count, 120);
        assert_eq!(ctx.galaxy().map(PointCloud::len), Some(120));
        assert_eq!(ctx.events[0].a, 120.0);
    }

    #[test]
    fn zero_branches_is_rejected() {
        let (mut app, mut ctx) = started();
        send(
            &mut app,
            &mut ctx,
            InputEvent::Custom { kind: CUSTOM_SET_BRANCHES, a: 0.0, b: 0.0, c: 0.0 },
        );
        assert_eq!(app.parameters().branches.get(), 3);
        assert_eq!(ctx.galaxy_generation(), 1);
        assert_eq!(ctx.events[0].kind, EVENT_EDIT_REJECTED);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let (mut app, mut ctx) = started();
        send(
            &mut app,
            &mut ctx,
            InputEvent::Custom { kind: CUSTOM_SET_RADIUS, a: -1.0, b: 0.0, c: 0.0 },
        );
        assert_eq!(app.parameters().radius, 3.0);
        assert_eq!(ctx.galaxy_generation(), 1);
    }

    #[test]
    fn randomness_and_jitter_edits() {
        let (mut app, mut ctx) = started();
        send(
            &mut app,
            &mut ctx,
            InputEvent::Custom { kind: CUSTOM_SET_RANDOMNESS, a: 0.2, b: 3.0, c: 0.0 },
        );
        send(
            &mut app,
            &mut ctx,
            InputEvent::Custom { kind: CUSTOM_SET_JITTER, a: 1.0, b: 0.0, c: 0.0 },
        );
        let p = app.parameters();
        assert_eq!((p.randomness, p.randomness_power), (0.2, 3.0));
        assert_eq!(p.jitter, JitterMode::Uniform);
        assert_eq!(ctx.galaxy_generation(), 3);
    }

    #[test]
    fn reseed_reproduces_galaxy() {
        let (mut app, mut ctx) = started();
        let reseed = InputEvent::Custom { kind: CUSTOM_RESEED, a: 7.0, b: 0.0, c: 0.0 };
        send(&mut app, &mut ctx, reseed);
        let first = ctx.galaxy().unwrap().positions().to_vec();
        send(&mut app, &mut ctx, reseed);
        assert_eq!(ctx.galaxy().unwrap().positions(), first.as_slice());
    }

    #[test]
    fn unknown_custom_event_is_ignored() {
        let (mut app, mut ctx) = started();
        send(
            &mut app,
            &mut ctx,
            InputEvent::Custom { kind: 42, a: 1.0, b: 0.0, c: 0.0 },
        );
        assert_eq!(ctx.galaxy_generation(), 1);
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn load_config_applies_json() {
        let (mut app, mut ctx) = started();
        app.load_config(&mut ctx, r#"{ "count": 64, "branche": 5, "spin": 1 }"#)
            .unwrap();
        assert_eq!(app.parameters().branches.get(), 5);
        assert_eq!(ctx.galaxy().map(PointCloud::len), Some(64));
    }

    #[test]
    fn load_config_rejects_bad_input() {
        let (mut app, mut ctx) = started();
        assert!(matches!(
            app.load_config(&mut ctx, "{ not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            app.load_config(&mut ctx, r##"{ "insideColor": "#ff28423" }"##),
            Err(ConfigError::Color { field: "insideColor", .. })
        ));
        assert_eq!(app.parameters().count, 500);
        assert_eq!(ctx.galaxy_generation(), 1);
    }
}
