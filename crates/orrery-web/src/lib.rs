pub mod frame_loop;
pub mod runner;

pub use runner::SceneRunner;

// Re-exported so the `export_scene!` expansion can name `js_sys::Function`
// without every scene crate depending on js-sys.
pub use js_sys;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_tick, scene_start, input and
///   configuration entry points, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod scene;
/// use scene::MyScene;
///
/// orrery_web::export_scene!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The scene struct type that implements `orrery_engine::SceneApp`
/// - `$scene_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_scene {
    ($app_type:ty, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        /// Build the scene. The viewport size and device pixel ratio are read
        /// once here; later window resizes are not tracked.
        #[wasm_bindgen]
        pub fn scene_init(viewport_width: f32, viewport_height: f32, device_pixel_ratio: f32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::SceneRunner::new(app);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init(viewport_width, viewport_height, device_pixel_ratio));
            log::info!("{}: initialized", $scene_name);
        }

        /// Advance one frame. `now_ms` is a `performance.now()` timestamp.
        #[wasm_bindgen]
        pub fn scene_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms));
        }

        /// Start the requestAnimationFrame loop: every frame ticks the scene and
        /// then calls `render` so the host can draw from the shared buffers.
        #[wasm_bindgen]
        pub fn scene_start(render: $crate::js_sys::Function) -> Result<(), JsValue> {
            $crate::frame_loop::run_frame_loop(move |now_ms| {
                with_runner(|r| r.tick(now_ms));
                if let Err(err) = render.call0(&JsValue::NULL) {
                    log::error!("{}: render callback failed: {:?}", $scene_name, err);
                }
            })?;
            log::info!("{}: frame loop started", $scene_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn scene_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn scene_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn scene_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        /// Apply a JSON configuration. Invalid input is rejected as a JS error
        /// and leaves the scene untouched.
        #[wasm_bindgen]
        pub fn scene_load_config(json: &str) -> Result<(), JsValue> {
            with_runner(|r| r.load_config(json)).map_err(|err| {
                log::warn!("{}: rejected configuration: {}", $scene_name, err);
                JsValue::from_str(&err.to_string())
            })
        }

        // ---- Buffer accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_bodies_ptr() -> *const f32 {
            with_runner(|r| r.bodies_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count())
        }

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient()[0])
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient()[1])
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient()[2])
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_galaxy_positions_ptr() -> *const f32 {
            with_runner(|r| r.galaxy_positions_ptr())
        }

        #[wasm_bindgen]
        pub fn get_galaxy_colors_ptr() -> *const f32 {
            with_runner(|r| r.galaxy_colors_ptr())
        }

        #[wasm_bindgen]
        pub fn get_galaxy_point_count() -> u32 {
            with_runner(|r| r.galaxy_point_count())
        }

        #[wasm_bindgen]
        pub fn get_galaxy_generation() -> u32 {
            with_runner(|r| r.galaxy_generation())
        }

        #[wasm_bindgen]
        pub fn get_pixel_ratio() -> f32 {
            with_runner(|r| r.pixel_ratio())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_bodies() -> u32 {
            with_runner(|r| r.max_bodies())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
