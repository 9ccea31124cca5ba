use tweenspirit_animation::{
    BooleanTrack, ColorTrack, CurveType, PointTrack, RectTrack, ScalarTrack, TransformTrack,
    Tween, TweenAnimator, TweenError, TweenValue, ValueKind,
};
use tweenspirit_core::{Affine2D, Color, Point, Rect};

#[test]
fn curves_are_exact_at_both_ends() {
    for curve in CurveType::ALL {
        assert!(curve.apply(0.0).abs() <= f64::EPSILON, "{curve} at 0");
        assert!((curve.apply(1.0) - 1.0).abs() <= f64::EPSILON, "{curve} at 1");
    }
}

#[test]
fn single_keyframe_is_returned_for_any_time() {
    for curve in CurveType::ALL {
        let track = PointTrack::new(curve).key(3.0, Point::new(4.0, 5.0));
        for t in [-1.0, 0.0, 3.0, 3.5, 100.0] {
            assert_eq!(
                track.value_at(t),
                Ok(Point::new(4.0, 5.0)),
                "Curve {curve} at time {t}"
            );
        }
    }
}

#[test]
fn scalar_track_clamps_outside_the_keyed_range() {
    let mut track = ScalarTrack::new(CurveType::Linear);
    track.insert(0.0, 0.0);
    track.insert(10.0, 100.0);

    assert_eq!(track.value_at(5.0), Ok(50.0));
    assert_eq!(track.value_at(-5.0), Ok(0.0));
    assert_eq!(track.value_at(15.0), Ok(100.0));
}

#[test]
fn keys_inserted_out_of_order_interpolate_in_time_order() {
    let mut track = ScalarTrack::new(CurveType::Linear);
    track.insert(20.0, 0.0);
    track.insert(0.0, 0.0);
    track.insert(10.0, 10.0);

    assert_eq!(track.value_at(5.0), Ok(5.0));
    assert_eq!(track.value_at(15.0), Ok(5.0));
    let times: Vec<f64> = track.keyframes().iter().map(|kf| kf.time()).collect();
    assert_eq!(times, vec![0.0, 10.0, 20.0]);
}

#[test]
fn boolean_track_switches_on_shaped_progress() {
    let mut track = BooleanTrack::new(CurveType::Linear);
    track.insert(0.0, false);
    track.insert(10.0, true);

    assert_eq!(track.value_at(4.0), Ok(false));
    assert_eq!(track.value_at(6.0), Ok(true));

    // ease-out reaches one half early: -x(x-2) = 0.5 at x ≈ 0.293
    let eased = BooleanTrack::new(CurveType::QuadraticEaseOut)
        .key(0.0, false)
        .key(10.0, true);
    assert_eq!(eased.value_at(2.5), Ok(false));
    assert_eq!(eased.value_at(3.0), Ok(true));
}

#[test]
fn reinserting_at_a_time_replaces_the_key() {
    let mut track = ScalarTrack::new(CurveType::Linear);
    track.insert(0.0, 0.0);
    track.insert(5.0, 1.0);
    track.insert(10.0, 0.0);
    let len = track.len();

    track.insert(5.0, 2.0);

    assert_eq!(track.len(), len);
    let at_five: Vec<_> = track
        .keyframes()
        .iter()
        .filter(|kf| kf.time() == 5.0)
        .collect();
    assert_eq!(at_five.len(), 1);
    assert_eq!(at_five[0].value(), &TweenValue::Scalar(2.0));
    assert_eq!(track.value_at(5.0), Ok(2.0));
}

#[test]
fn mismatched_insert_fails_and_leaves_keys_untouched() {
    let mut track = RectTrack::new(CurveType::SineEaseIn)
        .key(0.0, Rect::new(0.0, 0.0, 10.0, 10.0))
        .key(1.0, Rect::new(5.0, 5.0, 20.0, 20.0));
    let before = track.keyframes().to_vec();

    let result = track.insert_value(0.5, TweenValue::Boolean(true));

    assert_eq!(
        result,
        Err(TweenError::TypeMismatch {
            expected: ValueKind::Rect,
            found: ValueKind::Boolean,
        })
    );
    assert_eq!(track.keyframes(), before.as_slice());
}

#[test]
fn empty_tracks_report_an_error() {
    let track = ColorTrack::new(CurveType::Linear);
    assert!(track.is_empty());
    assert_eq!(track.value_at(0.0), Err(TweenError::EmptyTrack));
    assert_eq!(track.tween_value_at(0.0), Err(TweenError::EmptyTrack));
}

#[test]
fn color_channels_follow_the_scalar_formula() {
    let from = Color::rgba(0.2, 0.4, 0.6, 1.0);
    let to = Color::rgba(1.0, 0.0, 0.5, 0.5);
    let track = ColorTrack::new(CurveType::Linear).key(0.0, from).key(4.0, to);

    let mid = track.value_at(1.0).unwrap();
    let d = 0.25;
    assert_eq!(mid.r, from.r + (to.r - from.r) * d);
    assert_eq!(mid.g, from.g + (to.g - from.g) * d);
    assert_eq!(mid.b, from.b + (to.b - from.b) * d);
    assert_eq!(mid.a, from.a + (to.a - from.a) * d);
}

#[test]
fn transform_translation_interpolates() {
    let track = TransformTrack::new(CurveType::Linear)
        .key(0.0, Affine2D::translation(0.0, 0.0))
        .key(2.0, Affine2D::translation(100.0, -50.0));

    assert_eq!(track.value_at(1.0), Ok(Affine2D::translation(50.0, -25.0)));
}

#[test]
fn tracks_compare_structurally() {
    let a = ScalarTrack::new(CurveType::Linear).key(0.0, 1.0).key(1.0, 2.0);
    let b = ScalarTrack::new(CurveType::Linear).key(1.0, 2.0).key(0.0, 1.0);
    let c = ScalarTrack::new(CurveType::SineEaseOut).key(0.0, 1.0).key(1.0, 2.0);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.clone(), a);
}

#[test]
fn animator_drives_typed_tracks() {
    use std::cell::Cell;
    use std::rc::Rc;

    let position = Rc::new(Cell::new(Point::ZERO));
    let sink = position.clone();

    let mut animator = TweenAnimator::new();
    animator.add_tween(
        PointTrack::new(CurveType::Linear)
            .key(0.0, Point::new(0.0, 0.0))
            .key(1.0, Point::new(10.0, 20.0)),
        move |value| {
            if let Ok(point) = Point::try_from(*value) {
                sink.set(point);
            }
        },
    );

    animator.animate_to(1.0, 0.5);
    while animator.tick(1.0 / 60.0) {}

    assert_eq!(animator.time(), 1.0);
    assert_eq!(position.get(), Point::new(10.0, 20.0));
}
