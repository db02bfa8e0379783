/// Monotonic scene clock.
///
/// Fed with host timestamps (`performance.now()`, milliseconds). The first
/// timestamp becomes the origin. Elapsed time never decreases, so a host that
/// reports a smaller timestamp than before simply repeats the last frame's time.
/// There is no catch-up or frame skipping: a slow frame just shows a bigger delta.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    origin_ms: Option<f64>,
    /// Seconds since the first tick.
    elapsed: f64,
    /// Seconds between the last two ticks.
    delta: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `now_ms` and return the elapsed seconds since the first tick.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let elapsed = ((now_ms - origin) / 1000.0).max(self.elapsed);
        self.delta = elapsed - self.elapsed;
        self.elapsed = elapsed;
        elapsed
    }

    /// Seconds since the first tick.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Seconds between the last two ticks.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn is_started(&self) -> bool {
        self.origin_ms.is_some()
    }
}
