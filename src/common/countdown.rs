//! Explicit remaining-time values advanced once per tick.

/// Seconds left on a timed window. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Countdown(f32);

impl Countdown {
    #[inline]
    pub fn new(seconds: f32) -> Self {
        Self(seconds.max(0.0))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn tick_down(&mut self, dt: f32) {
        self.0 = (self.0 - dt).max(0.0);
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_negative() {
        let mut c = Countdown::new(0.25);
        c.tick_down(1.0);
        assert_eq!(c.get(), 0.0);
        assert!(!c.is_positive());
        assert_eq!(Countdown::new(-3.0).get(), 0.0);
    }
}
