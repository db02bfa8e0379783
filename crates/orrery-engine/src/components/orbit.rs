/// Circular orbit around the scene's vertical axis.
///
/// `rate` is a display constant, not a physical one: the body completes one
/// revolution every `2 / rate` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitComponent {
    pub rate: f32,
    pub radius: f32,
    /// Fixed vertical position while orbiting.
    pub height: f32,
}

impl OrbitComponent {
    pub fn new(rate: f32, radius: f32, height: f32) -> Self {
        Self { rate, radius, height }
    }

    /// Seconds per revolution (infinite for a zero rate).
    pub fn period(&self) -> f64 {
        2.0 / self.rate as f64
    }
}
