//! Tweenspirit Animation System
//!
//! Keyframe tracks with eased interpolation, and a small time driver.
//!
//! # Features
//!
//! - **Curves**: linear, quadratic and sine easing, all exact at 0 and 1
//! - **Keyframe Tracks**: sorted (time, value) anchors with binary-search lookup
//! - **Typed Tracks**: scalar, boolean, point, rect, color and affine transform
//! - **Animator**: time cursor with eased transitions and an optional observer
//!
//! # Example
//!
//! ```rust
//! use tweenspirit_animation::{CurveType, ScalarTrack};
//!
//! let mut track = ScalarTrack::new(CurveType::Linear);
//! track.insert(0.0, 0.0);
//! track.insert(10.0, 100.0);
//!
//! assert_eq!(track.value_at(5.0).unwrap(), 50.0);
//! assert_eq!(track.value_at(-5.0).unwrap(), 0.0);
//! assert_eq!(track.value_at(15.0).unwrap(), 100.0);
//! ```

pub mod animator;
pub mod curve;
pub mod error;
pub mod keyframe;
pub mod tracks;
pub mod value;

pub use animator::{AnimatorConfig, AnimatorObserver, TweenAnimator, TweenId};
pub use curve::CurveType;
pub use error::{Result, TweenError};
pub use keyframe::{Keyframe, KeyframeTrack, Tween};
pub use tracks::{BooleanTrack, ColorTrack, PointTrack, RectTrack, ScalarTrack, TransformTrack};
pub use value::{TweenValue, ValueKind};
