//! Keyframe tracks
//!
//! A track is a time-sorted list of keyframes sharing one curve and one
//! value kind. Queries find the bounding pair by binary search, shape the
//! linear progress through the curve and interpolate the pair.
//!
//! Querying an empty track is an error (`TweenError::EmptyTrack`) for every
//! value kind; no zero value is invented.

use std::cmp::Ordering;

use crate::curve::CurveType;
use crate::error::{Result, TweenError};
use crate::value::{TweenValue, ValueKind};

/// Anything that can produce a value for a point on a timeline
pub trait Tween {
    /// Kind of value this tween produces, if known yet
    fn value_kind(&self) -> Option<ValueKind>;

    /// Value at `time` (seconds). Must be free of side effects.
    fn tween_value_at(&self, time: f64) -> Result<TweenValue>;
}

/// A value anchored at a time (seconds)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    time: f64,
    value: TweenValue,
}

impl Keyframe {
    pub fn new(time: f64, value: impl Into<TweenValue>) -> Self {
        Self {
            time,
            value: value.into(),
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn value(&self) -> &TweenValue {
        &self.value
    }
}

/// Generic keyframe engine.
///
/// Not constructible outside this crate; use one of the typed tracks in
/// [`crate::tracks`].
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTrack {
    curve: CurveType,
    /// Established by construction or by the first insert
    kind: Option<ValueKind>,
    /// Sorted by time, at most one keyframe per exact time
    keyframes: Vec<Keyframe>,
}

impl KeyframeTrack {
    /// An untyped track; its kind is taken from the first insert
    pub(crate) fn new(curve: CurveType) -> Self {
        Self {
            curve,
            kind: None,
            keyframes: Vec::new(),
        }
    }

    /// A track that only accepts values of `kind`
    pub(crate) fn with_kind(curve: CurveType, kind: ValueKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::new(curve)
        }
    }

    pub fn curve(&self) -> CurveType {
        self.curve
    }

    pub fn value_kind(&self) -> Option<ValueKind> {
        self.kind
    }

    /// Keyframes in ascending time order
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Anchor `value` at `time`, replacing any keyframe at exactly that time.
    ///
    /// Fails with `TypeMismatch` if `value` is not of the track's kind; the
    /// track is left untouched in that case.
    pub fn insert(&mut self, time: f64, value: TweenValue) -> Result<()> {
        let found = value.kind();
        match self.kind {
            Some(expected) if expected != found => {
                tracing::debug!(%expected, %found, time, "rejected keyframe of wrong kind");
                return Err(TweenError::TypeMismatch { expected, found });
            }
            Some(_) => {}
            None => self.kind = Some(found),
        }

        self.insert_keyframe(Keyframe { time, value });
        Ok(())
    }

    /// Sorted insert without a kind check. Callers guarantee the kind.
    pub(crate) fn insert_keyframe(&mut self, keyframe: Keyframe) {
        match self
            .keyframes
            .binary_search_by(|kf| kf.time.partial_cmp(&keyframe.time).unwrap_or(Ordering::Less))
        {
            Ok(index) => {
                tracing::trace!(time = keyframe.time, "replacing keyframe");
                self.keyframes[index] = keyframe;
            }
            Err(index) => self.keyframes.insert(index, keyframe),
        }
    }

    /// The keyframes bounding `time`: `(prev, next)` with
    /// `prev.time <= time <= next.time`.
    ///
    /// Before the first keyframe both are the first keyframe; after the last
    /// both are the last. `None` for an empty track.
    pub fn nearest_keyframes(&self, time: f64) -> Option<(&Keyframe, &Keyframe)> {
        let first = self.keyframes.first()?;
        let last = self.keyframes.last()?;

        if self.keyframes.len() == 1 || time <= first.time {
            return Some((first, first));
        }
        if time >= last.time {
            return Some((last, last));
        }

        // NaN falls through both checks above; the clamp keeps it in range
        let next = self
            .keyframes
            .partition_point(|kf| kf.time <= time)
            .clamp(1, self.keyframes.len() - 1);
        Some((&self.keyframes[next - 1], &self.keyframes[next]))
    }

    /// Interpolated value at `time`.
    ///
    /// Times outside the keyframe range hold the nearest end value; there is
    /// no extrapolation.
    pub fn value_at(&self, time: f64) -> Result<TweenValue> {
        let (prev, next) = self.nearest_keyframes(time).ok_or(TweenError::EmptyTrack)?;

        let span = next.time - prev.time;
        if span <= 0.0 {
            return Ok(prev.value);
        }

        let delta = ((time - prev.time) / span).clamp(0.0, 1.0);
        let eased = self.curve.apply(delta);

        prev.value.interpolate(&next.value, eased)
    }
}

impl Tween for KeyframeTrack {
    fn value_kind(&self) -> Option<ValueKind> {
        self.kind
    }

    fn tween_value_at(&self, time: f64) -> Result<TweenValue> {
        self.value_at(time)
    }
}
