pub mod color;
pub mod rng;
pub mod scene;
pub mod time;
