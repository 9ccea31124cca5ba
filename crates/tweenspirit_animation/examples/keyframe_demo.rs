//! Keyframe Demo
//!
//! Builds a few typed tracks, samples them directly, then drives them with
//! a `TweenAnimator` at 60 fps and prints what the callbacks receive.
//!
//! Run with: RUST_LOG=debug cargo run -p tweenspirit_animation --example keyframe_demo

use tweenspirit_animation::{
    AnimatorConfig, AnimatorObserver, BooleanTrack, ColorTrack, CurveType, Result, ScalarTrack,
    TweenAnimator, TweenValue,
};
use tweenspirit_core::Color;

struct LogObserver;

impl AnimatorObserver for LogObserver {
    fn will_begin_animating(&mut self, to_time: f64, duration: f64) {
        tracing::info!(to_time, duration, "animation starting");
    }

    fn did_finish_animating(&mut self, time: f64) {
        tracing::info!(time, "animation finished");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let opacity = ScalarTrack::new(CurveType::SineEaseInOut)
        .key(0.0, 0.0)
        .key(1.0, 1.0)
        .key(3.0, 0.25);
    let tint = ColorTrack::new(CurveType::QuadraticEaseOut)
        .key(0.0, Color::from_hex(0x1E90FF))
        .key(3.0, Color::from_hex(0xFF4500));
    let visible = BooleanTrack::new(CurveType::Linear)
        .key(0.0, false)
        .key(0.5, true);

    for t in [0.0, 0.5, 1.0, 2.0, 3.0] {
        println!(
            "t={t:.1}  opacity={:.3}  tint={:?}  visible={}",
            opacity.value_at(t)?,
            tint.value_at(t)?.to_array(),
            visible.value_at(t)?,
        );
    }

    let mut animator = TweenAnimator::with_config(AnimatorConfig {
        transition_curve: CurveType::QuadraticEaseInOut,
        ..Default::default()
    });
    animator.set_observer(Some(Box::new(LogObserver)));
    animator.add_tween(opacity, |value| {
        if let TweenValue::Scalar(v) = value {
            println!("  opacity -> {v:.3}");
        }
    });
    animator.add_tween(visible, |value| {
        if let TweenValue::Boolean(v) = value {
            println!("  visible -> {v}");
        }
    });

    animator.animate_to(3.0, 0.25);
    let mut frames = 0;
    while animator.tick(1.0 / 60.0) {
        frames += 1;
    }
    println!("reached t={} after {} frames", animator.time(), frames + 1);

    Ok(())
}
