//! Typed keyframe tracks
//!
//! One track type per value shape. Each wraps a [`KeyframeTrack`] whose
//! kind is fixed at construction, takes keys in its native type and
//! returns native values.
//!
//! ```rust
//! use tweenspirit_animation::{BooleanTrack, CurveType};
//!
//! let mut visible = BooleanTrack::new(CurveType::Linear);
//! visible.insert(0.0, false);
//! visible.insert(10.0, true);
//!
//! assert!(!visible.value_at(4.0).unwrap());
//! assert!(visible.value_at(6.0).unwrap());
//! ```

use tweenspirit_core::{Affine2D, Color, Point, Rect};

use crate::curve::CurveType;
use crate::error::Result;
use crate::keyframe::{Keyframe, KeyframeTrack, Tween};
use crate::value::{TweenValue, ValueKind};

macro_rules! typed_track {
    ($(#[$meta:meta])* $name:ident, $native:ty, $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            track: KeyframeTrack,
        }

        impl $name {
            pub fn new(curve: CurveType) -> Self {
                Self {
                    track: KeyframeTrack::with_kind(curve, ValueKind::$kind),
                }
            }

            /// Anchor `value` at `time`, replacing any key at exactly that time
            pub fn insert(&mut self, time: f64, value: $native) {
                self.track.insert_keyframe(Keyframe::new(time, value));
            }

            /// Builder: anchor `value` at `time`
            pub fn key(mut self, time: f64, value: $native) -> Self {
                self.insert(time, value);
                self
            }

            /// Insert an already-wrapped value.
            ///
            /// Fails with `TypeMismatch` if `value` is of another kind.
            pub fn insert_value(&mut self, time: f64, value: TweenValue) -> Result<()> {
                self.track.insert(time, value)
            }

            /// Interpolated value at `time`; `EmptyTrack` if no keys exist
            pub fn value_at(&self, time: f64) -> Result<$native> {
                <$native>::try_from(self.track.value_at(time)?)
            }

            pub fn nearest_keyframes(&self, time: f64) -> Option<(&Keyframe, &Keyframe)> {
                self.track.nearest_keyframes(time)
            }

            pub fn curve(&self) -> CurveType {
                self.track.curve()
            }

            pub fn keyframes(&self) -> &[Keyframe] {
                self.track.keyframes()
            }

            pub fn len(&self) -> usize {
                self.track.len()
            }

            pub fn is_empty(&self) -> bool {
                self.track.is_empty()
            }

            /// Read-only access to the underlying engine
            pub fn track(&self) -> &KeyframeTrack {
                &self.track
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(CurveType::Linear)
            }
        }

        impl Tween for $name {
            fn value_kind(&self) -> Option<ValueKind> {
                Some(ValueKind::$kind)
            }

            fn tween_value_at(&self, time: f64) -> Result<TweenValue> {
                self.track.value_at(time)
            }
        }

        impl From<$name> for KeyframeTrack {
            fn from(typed: $name) -> Self {
                typed.track
            }
        }
    };
}

typed_track!(
    /// Track of `f64` values
    ScalarTrack,
    f64,
    Scalar
);

typed_track!(
    /// Track of `bool` values.
    ///
    /// Booleans are not interpolated: between two keys the track reports the
    /// earlier key's value until the *eased* progress reaches one half, then
    /// the later key's value. With an easing curve the switch therefore
    /// happens away from the midpoint in time.
    BooleanTrack,
    bool,
    Boolean
);

typed_track!(
    /// Track of [`Point`] values, interpolated per coordinate
    PointTrack,
    Point,
    Point
);

typed_track!(
    /// Track of [`Rect`] values, interpolated per x, y, width and height
    RectTrack,
    Rect,
    Rect
);

typed_track!(
    /// Track of [`Color`] values, interpolated per channel with no gamma
    /// correction
    ColorTrack,
    Color,
    Color
);

typed_track!(
    /// Track of [`Affine2D`] values.
    ///
    /// The six matrix coefficients are interpolated independently. This is
    /// correct for translation and scale but not for rotation: a matrix
    /// halfway between two rotations is not itself a rotation.
    TransformTrack,
    Affine2D,
    Transform
);
