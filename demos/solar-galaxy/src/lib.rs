use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod scene;
use scene::SolarGalaxy;

orrery_web::export_scene!(SolarGalaxy, "solar-galaxy");
