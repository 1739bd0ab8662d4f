pub mod bounds;

pub use bounds::{Bounds, clamp};

/// Ratio with the denominator held at or above `floor`.
pub fn guarded_ratio(numerator: f64, denominator: f64, floor: f64) -> f64 {
    numerator / denominator.max(floor)
}
