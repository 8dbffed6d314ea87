//! Closed numeric range value object.

use serde::{Deserialize, Serialize};

/// A `[min, max]` pair of numbers.
///
/// Serialized as a two-element array so it matches the `[lo, hi]` wire form.
/// No ordering between `min` and `max` is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Zero-width range at the origin.
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    /// Creates a range from its two ends.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the midpoint of the range.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Applies `f` to both ends.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.min), f(self.max))
    }

    /// Returns true when both ends are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl From<(f64, f64)> for ValueRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

impl From<ValueRange> for (f64, f64) {
    fn from(range: ValueRange) -> Self {
        (range.min, range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_serializes_as_array() {
        let json = serde_json::to_string(&ValueRange::new(8.0, 12.0)).unwrap();
        assert_eq!(json, "[8.0,12.0]");
    }

    #[test]
    fn range_deserializes_from_integer_array() {
        let range: ValueRange = serde_json::from_str("[20, 25]").unwrap();
        assert_eq!(range, ValueRange::new(20.0, 25.0));
    }

    #[test]
    fn range_rejects_wrong_arity() {
        assert!(serde_json::from_str::<ValueRange>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<ValueRange>("[1]").is_err());
    }

    #[test]
    fn midpoint_and_map() {
        let range = ValueRange::new(3.2, 4.8);
        assert!((range.midpoint() - 4.0).abs() < 1e-9);
        assert_eq!(range.map(|v| v * 10.0), ValueRange::new(32.0, 48.0));
    }
}
