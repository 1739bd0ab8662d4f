//! Closed numeric intervals used by parameter and score clamping.

/// Inclusive `[lo, hi]` interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lo: f64,
    pub hi: f64,
}

impl Bounds {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.lo, self.hi)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

/// `max(lo, min(hi, v))`. A NaN input collapses to `hi`.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(value))
}
