pub mod galaxy;
pub mod lighting;
pub mod orbit;
pub mod render;
