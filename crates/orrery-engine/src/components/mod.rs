pub mod entity;
pub mod light;
pub mod mesh;
pub mod orbit;
pub mod points;
