pub mod galaxy;

pub use galaxy::{GalaxyParameters, JitterMode, MAX_GALAXY_POINTS};
