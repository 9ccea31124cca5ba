//! Tween animator
//!
//! Owns a set of tweens, each paired with an update callback, and a time
//! cursor. Moving the cursor, either directly or through an eased
//! transition advanced by `tick`, pushes every tween's value at the new
//! time into its callback.
//!
//! # Observer timing
//!
//! - `will_begin_animating` runs before a transition is installed.
//! - `did_animate` runs after every callback has received the new values,
//!   for direct `set_time` jumps as well as transition steps.
//! - `did_finish_animating` runs after a transition completes or is
//!   stopped, once the transition state has been cleared. It does not run
//!   for `set_time`, nor when `animate_to` retargets a running transition.

use slotmap::{new_key_type, SlotMap};

use crate::curve::CurveType;
use crate::keyframe::Tween;
use crate::value::{lerp, TweenValue};

new_key_type! {
    pub struct TweenId;
}

/// Receives animator state changes. Every method defaults to a no-op.
pub trait AnimatorObserver {
    /// A transition towards `to_time` lasting `duration` seconds is about to start
    fn will_begin_animating(&mut self, to_time: f64, duration: f64) {
        let _ = (to_time, duration);
    }

    /// Values for `time` have been delivered
    fn did_animate(&mut self, time: f64) {
        let _ = time;
    }

    /// A transition ended at `time`, either completed or stopped
    fn did_finish_animating(&mut self, time: f64) {
        let _ = time;
    }
}

/// Animator configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorConfig {
    /// Cursor position before the first update
    pub initial_time: f64,
    /// Curve shaping the cursor's motion during `animate_to`
    pub transition_curve: CurveType,
    /// Seconds used by [`TweenAnimator::animate_to_default`]
    pub default_duration: f64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            initial_time: 0.0,
            transition_curve: CurveType::SineEaseInOut,
            default_duration: 0.5,
        }
    }
}

struct TweenEntry {
    tween: Box<dyn Tween>,
    on_update: Box<dyn FnMut(&TweenValue)>,
}

/// An in-flight move of the cursor
#[derive(Clone, Copy, Debug)]
struct Transition {
    from_time: f64,
    to_time: f64,
    duration: f64,
    elapsed: f64,
}

/// Drives a set of tweens along a shared timeline
pub struct TweenAnimator {
    entries: SlotMap<TweenId, TweenEntry>,
    time: f64,
    transition: Option<Transition>,
    transition_curve: CurveType,
    default_duration: f64,
    observer: Option<Box<dyn AnimatorObserver>>,
}

impl TweenAnimator {
    pub fn new() -> Self {
        Self::with_config(AnimatorConfig::default())
    }

    pub fn with_config(config: AnimatorConfig) -> Self {
        Self {
            entries: SlotMap::with_key(),
            time: config.initial_time,
            transition: None,
            transition_curve: config.transition_curve,
            default_duration: config.default_duration,
            observer: None,
        }
    }

    /// Register a tween; `on_update` receives its value whenever the cursor moves
    pub fn add_tween<T, F>(&mut self, tween: T, on_update: F) -> TweenId
    where
        T: Tween + 'static,
        F: FnMut(&TweenValue) + 'static,
    {
        self.entries.insert(TweenEntry {
            tween: Box::new(tween),
            on_update: Box::new(on_update),
        })
    }

    /// Remove a tween. Returns false if `id` was not registered.
    pub fn remove_tween(&mut self, id: TweenId) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn tween(&self, id: TweenId) -> Option<&dyn Tween> {
        self.entries.get(id).map(|entry| entry.tween.as_ref())
    }

    /// Every registered tween, in no particular order
    pub fn tweens(&self) -> impl Iterator<Item = (TweenId, &dyn Tween)> + '_ {
        self.entries
            .iter()
            .map(|(id, entry)| (id, entry.tween.as_ref()))
    }

    pub fn tween_count(&self) -> usize {
        self.entries.len()
    }

    pub fn set_observer(&mut self, observer: Option<Box<dyn AnimatorObserver>>) {
        self.observer = observer;
    }

    /// Current cursor position
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Jump the cursor to `time`, cancelling any transition, and apply values
    pub fn set_time(&mut self, time: f64) {
        if self.transition.take().is_some() {
            tracing::debug!(time, "transition cancelled by direct time change");
        }
        self.apply_time(time);
    }

    /// Move the cursor to `time` over `duration` seconds, advanced by `tick`.
    ///
    /// A non-positive or NaN duration jumps immediately and finishes at once.
    pub fn animate_to(&mut self, time: f64, duration: f64) {
        if let Some(observer) = self.observer.as_mut() {
            observer.will_begin_animating(time, duration);
        }

        if duration.is_nan() || duration <= 0.0 {
            self.transition = None;
            self.apply_time(time);
            self.notify_finished();
            return;
        }

        tracing::debug!(from = self.time, to = time, duration, "starting transition");
        self.transition = Some(Transition {
            from_time: self.time,
            to_time: time,
            duration,
            elapsed: 0.0,
        });
    }

    /// `animate_to` over the configured default duration
    pub fn animate_to_default(&mut self, time: f64) {
        self.animate_to(time, self.default_duration);
    }

    /// Advance a running transition by `dt` seconds.
    ///
    /// Returns whether a transition is still running afterwards.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(mut transition) = self.transition else {
            return false;
        };

        transition.elapsed += dt.max(0.0);

        if transition.elapsed >= transition.duration {
            self.transition = None;
            self.apply_time(transition.to_time);
            self.notify_finished();
            return false;
        }

        let progress = self
            .transition_curve
            .apply(transition.elapsed / transition.duration);
        self.transition = Some(transition);
        self.apply_time(lerp(transition.from_time, transition.to_time, progress));
        true
    }

    /// Cancel a running transition, leaving the cursor where it is
    pub fn stop(&mut self) {
        if self.transition.take().is_some() {
            tracing::debug!(time = self.time, "transition stopped");
            self.notify_finished();
        }
    }

    fn apply_time(&mut self, time: f64) {
        self.time = time;

        for (id, entry) in self.entries.iter_mut() {
            match entry.tween.tween_value_at(time) {
                Ok(value) => (entry.on_update)(&value),
                Err(err) => tracing::trace!(?id, %err, "skipping tween"),
            }
        }

        if let Some(observer) = self.observer.as_mut() {
            observer.did_animate(time);
        }
    }

    fn notify_finished(&mut self) {
        let time = self.time;
        if let Some(observer) = self.observer.as_mut() {
            observer.did_finish_animating(time);
        }
    }
}

impl Default for TweenAnimator {
    fn default() -> Self {
        Self::new()
    }
}
