//! Tweenable values
//!
//! A closed set of value shapes. Every shape except `Boolean` is a fixed
//! array of `f64` components that interpolates channel by channel.

use std::fmt;

use smallvec::SmallVec;
use tweenspirit_core::{Affine2D, Color, Point, Rect};

use crate::error::TweenError;

/// Inline storage large enough for the widest shape (an affine transform)
pub type Components = SmallVec<[f64; 6]>;

/// Tag identifying which shape a value or track holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Scalar,
    Boolean,
    Point,
    Rect,
    Color,
    Transform,
}

impl ValueKind {
    /// Number of `f64` components in this shape
    pub const fn component_count(self) -> usize {
        match self {
            ValueKind::Scalar | ValueKind::Boolean => 1,
            ValueKind::Point => 2,
            ValueKind::Rect | ValueKind::Color => 4,
            ValueKind::Transform => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Scalar => "scalar",
            ValueKind::Boolean => "boolean",
            ValueKind::Point => "point",
            ValueKind::Rect => "rect",
            ValueKind::Color => "color",
            ValueKind::Transform => "transform",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value held by a keyframe
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenValue {
    Scalar(f64),
    Boolean(bool),
    Point(Point),
    Rect(Rect),
    Color(Color),
    /// Affine transform; interpolated coefficient by coefficient, which does
    /// not follow the arc of a rotation
    Transform(Affine2D),
}

impl TweenValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            TweenValue::Scalar(_) => ValueKind::Scalar,
            TweenValue::Boolean(_) => ValueKind::Boolean,
            TweenValue::Point(_) => ValueKind::Point,
            TweenValue::Rect(_) => ValueKind::Rect,
            TweenValue::Color(_) => ValueKind::Color,
            TweenValue::Transform(_) => ValueKind::Transform,
        }
    }

    /// Flatten into components, in the order documented on each core type.
    /// Booleans flatten to `0.0` / `1.0`.
    pub fn components(&self) -> Components {
        match *self {
            TweenValue::Scalar(v) => SmallVec::from_slice(&[v]),
            TweenValue::Boolean(b) => SmallVec::from_slice(&[if b { 1.0 } else { 0.0 }]),
            TweenValue::Point(p) => SmallVec::from_slice(&p.to_array()),
            TweenValue::Rect(r) => SmallVec::from_slice(&r.to_array()),
            TweenValue::Color(c) => SmallVec::from_slice(&c.to_array()),
            TweenValue::Transform(t) => SmallVec::from_slice(&t.to_array()),
        }
    }

    /// Rebuild a value of `kind` from its components.
    ///
    /// Returns `None` if `components` has the wrong length for `kind`.
    pub fn from_components(kind: ValueKind, components: &[f64]) -> Option<Self> {
        if components.len() != kind.component_count() {
            return None;
        }
        let c = components;
        Some(match kind {
            ValueKind::Scalar => TweenValue::Scalar(c[0]),
            ValueKind::Boolean => TweenValue::Boolean(c[0] >= 0.5),
            ValueKind::Point => TweenValue::Point(Point::new(c[0], c[1])),
            ValueKind::Rect => TweenValue::Rect(Rect::new(c[0], c[1], c[2], c[3])),
            ValueKind::Color => TweenValue::Color(Color::rgba(c[0], c[1], c[2], c[3])),
            ValueKind::Transform => {
                TweenValue::Transform(Affine2D::new(c[0], c[1], c[2], c[3], c[4], c[5]))
            }
        })
    }

    /// Interpolate towards `to` by an already-eased `progress`.
    ///
    /// Booleans switch to `to` once `progress >= 0.5`. Every other shape is
    /// lerped per component. Values of different kinds fail with
    /// `TypeMismatch`.
    pub(crate) fn interpolate(
        &self,
        to: &TweenValue,
        progress: f64,
    ) -> Result<TweenValue, TweenError> {
        let (expected, found) = (self.kind(), to.kind());
        if expected != found {
            return Err(TweenError::TypeMismatch { expected, found });
        }

        if let (TweenValue::Boolean(from), TweenValue::Boolean(to)) = (self, to) {
            return Ok(TweenValue::Boolean(if progress >= 0.5 { *to } else { *from }));
        }

        let mixed: Components = self
            .components()
            .iter()
            .zip(to.components().iter())
            .map(|(a, b)| lerp(*a, *b, progress))
            .collect();

        TweenValue::from_components(expected, &mixed)
            .ok_or(TweenError::TypeMismatch { expected, found })
    }
}

/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

macro_rules! native_conversions {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$native> for TweenValue {
                fn from(value: $native) -> Self {
                    TweenValue::$variant(value)
                }
            }

            impl TryFrom<TweenValue> for $native {
                type Error = TweenError;

                fn try_from(value: TweenValue) -> Result<Self, Self::Error> {
                    match value {
                        TweenValue::$variant(inner) => Ok(inner),
                        other => Err(TweenError::TypeMismatch {
                            expected: ValueKind::$variant,
                            found: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

native_conversions! {
    f64 => Scalar,
    bool => Boolean,
    Point => Point,
    Rect => Rect,
    Color => Color,
    Affine2D => Transform,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_counts_match_components() {
        let samples = [
            TweenValue::Scalar(1.0),
            TweenValue::Boolean(true),
            TweenValue::Point(Point::new(1.0, 2.0)),
            TweenValue::Rect(Rect::new(1.0, 2.0, 3.0, 4.0)),
            TweenValue::Color(Color::rgba(0.1, 0.2, 0.3, 0.4)),
            TweenValue::Transform(Affine2D::IDENTITY),
        ];
        for value in samples {
            assert_eq!(value.components().len(), value.kind().component_count());
            assert_eq!(
                TweenValue::from_components(value.kind(), &value.components()),
                Some(value)
            );
        }
    }

    #[test]
    fn test_from_components_rejects_wrong_length() {
        assert_eq!(TweenValue::from_components(ValueKind::Point, &[1.0]), None);
        assert_eq!(
            TweenValue::from_components(ValueKind::Scalar, &[1.0, 2.0]),
            None
        );
    }

    #[test]
    fn test_scalar_lerp() {
        let v = TweenValue::Scalar(10.0).interpolate(&TweenValue::Scalar(20.0), 0.25);
        assert_eq!(v, Ok(TweenValue::Scalar(12.5)));
    }

    #[test]
    fn test_boolean_switches_at_half() {
        let from = TweenValue::Boolean(false);
        let to = TweenValue::Boolean(true);
        assert_eq!(from.interpolate(&to, 0.49), Ok(TweenValue::Boolean(false)));
        assert_eq!(from.interpolate(&to, 0.5), Ok(TweenValue::Boolean(true)));
        assert_eq!(to.interpolate(&from, 0.2), Ok(TweenValue::Boolean(true)));
    }

    #[test]
    fn test_mismatched_kinds_are_rejected() {
        let from = TweenValue::Scalar(3.0);
        let to = TweenValue::Point(Point::new(1.0, 1.0));
        assert_eq!(
            from.interpolate(&to, 0.5),
            Err(TweenError::TypeMismatch {
                expected: ValueKind::Scalar,
                found: ValueKind::Point,
            })
        );
    }

    #[test]
    fn test_native_conversions() {
        let value: TweenValue = Point::new(1.0, 2.0).into();
        assert_eq!(Point::try_from(value), Ok(Point::new(1.0, 2.0)));
        assert_eq!(
            f64::try_from(value),
            Err(TweenError::TypeMismatch {
                expected: ValueKind::Scalar,
                found: ValueKind::Point,
            })
        );
        assert_eq!(bool::try_from(TweenValue::from(true)), Ok(true));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Transform.to_string(), "transform");
        assert_eq!(
            TweenError::TypeMismatch {
                expected: ValueKind::Scalar,
                found: ValueKind::Color,
            }
            .to_string(),
            "Value type mismatch: expected scalar, found color"
        );
    }
}
