use super::*;

#[test]
fn endpoints_are_exact() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::Sharp,
    ] {
        assert_eq!(easing.transform(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.transform(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn linear_is_identity() {
    for i in 0..=10 {
        let fraction = i as f32 / 10.0;
        assert!((Easing::Linear.transform(fraction) - fraction).abs() < 1e-6);
    }
}

#[test]
fn curves_are_monotonic() {
    for easing in [Easing::FastOutSlowIn, Easing::LinearOutSlowIn, Easing::Sharp] {
        let mut previous = 0.0;
        for i in 1..=20 {
            let value = easing.transform(i as f32 / 20.0);
            assert!(
                value >= previous - 1e-4,
                "{:?} not monotonic at step {}: {} < {}",
                easing,
                i,
                value,
                previous
            );
            previous = value;
        }
    }
}

#[test]
fn deceleration_curve_front_loads_progress() {
    // LinearOutSlowIn covers most of the distance in the first half.
    assert!(Easing::LinearOutSlowIn.transform(0.5) > 0.6);
}
