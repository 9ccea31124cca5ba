//! Easing curves for keyframe interpolation

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// Curve applied to the linear progress between two adjacent keyframes.
///
/// Every curve maps `0.0 -> 0.0` and `1.0 -> 1.0` and stays inside
/// `[0, 1]` for inputs inside `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// y = x
    #[default]
    Linear,
    /// y = x²
    QuadraticEaseIn,
    /// y = -x(x - 2)
    QuadraticEaseOut,
    /// 2x² below the midpoint, -2x² + 4x - 1 above it
    QuadraticEaseInOut,
    /// y = sin(π/2 · (x - 1)) + 1
    SineEaseIn,
    /// y = sin(π/2 · x)
    SineEaseOut,
    /// y = (1 - cos(π · x)) / 2
    SineEaseInOut,
}

impl CurveType {
    pub const ALL: [CurveType; 7] = [
        CurveType::Linear,
        CurveType::QuadraticEaseIn,
        CurveType::QuadraticEaseOut,
        CurveType::QuadraticEaseInOut,
        CurveType::SineEaseIn,
        CurveType::SineEaseOut,
        CurveType::SineEaseInOut,
    ];

    /// Apply the curve to a progress value (0.0 to 1.0).
    ///
    /// Inputs outside `[0, 1]` are not clamped here; tracks clamp before
    /// calling.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            CurveType::Linear => x,
            CurveType::QuadraticEaseIn => x * x,
            CurveType::QuadraticEaseOut => -x * (x - 2.0),
            CurveType::QuadraticEaseInOut => {
                if x < 0.5 {
                    2.0 * x * x
                } else {
                    -2.0 * x * x + 4.0 * x - 1.0
                }
            }
            CurveType::SineEaseIn => (FRAC_PI_2 * (x - 1.0)).sin() + 1.0,
            CurveType::SineEaseOut => (FRAC_PI_2 * x).sin(),
            CurveType::SineEaseInOut => (1.0 - (PI * x).cos()) / 2.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CurveType::Linear => "linear",
            CurveType::QuadraticEaseIn => "quadratic-ease-in",
            CurveType::QuadraticEaseOut => "quadratic-ease-out",
            CurveType::QuadraticEaseInOut => "quadratic-ease-in-out",
            CurveType::SineEaseIn => "sine-ease-in",
            CurveType::SineEaseOut => "sine-ease-out",
            CurveType::SineEaseInOut => "sine-ease-in-out",
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
