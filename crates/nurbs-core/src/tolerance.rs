/// Tolerances used when validating kernel geometry.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Smallest parameter span a knot domain may have
    pub linear: f64,
    /// Smallest weight a rational control vertex may carry
    pub weight: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_WEIGHT: f64 = 1e-12;

    pub fn new(linear: f64, weight: f64) -> Self {
        Self { linear, weight }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            weight: Self::DEFAULT_WEIGHT,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check that a rational weight is usable as a divisor.
    pub fn is_valid_weight(self, w: f64) -> bool {
        w.is_finite() && w > self.weight
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
