//! Activity brightness ramp for the indicator ring.

/// Monotonic brightness ramp, stepped once per tick while an activity
/// is in progress and reset to zero when it ends.
#[derive(Clone, Copy, Debug)]
pub struct LightRamp {
    level: u8,
    step: u8,
}

impl LightRamp {
    /// Create a ramp with the given per-tick increment.
    pub fn new(step: u8) -> Self {
        Self { level: 0, step }
    }

    /// Advance the ramp one tick, clamping at full brightness.
    #[inline]
    pub fn tick(&mut self) {
        self.level = self.level.saturating_add(self.step);
    }

    /// Current brightness level.
    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Reset to dark.
    #[inline]
    pub fn reset(&mut self) {
        self.level = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_clamps_at_full() {
        let mut ramp = LightRamp::new(25);

        for _ in 0..10 {
            ramp.tick();
        }
        assert_eq!(ramp.level(), 250);

        ramp.tick();
        assert_eq!(ramp.level(), 255);

        ramp.tick();
        assert_eq!(ramp.level(), 255);
    }

    #[test]
    fn test_reset() {
        let mut ramp = LightRamp::new(25);
        ramp.tick();
        ramp.reset();
        assert_eq!(ramp.level(), 0);
    }
}
