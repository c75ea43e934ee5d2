use super::*;

#[test]
fn none_has_no_profile() {
    let timings = TransitionTimings::default();
    assert_eq!(timings.spec_for(Transition::None), None);
}

#[test]
fn default_profiles_match_reference_durations() {
    let timings = TransitionTimings::default();
    assert_eq!(timings.spec_for(Transition::Enter).unwrap().duration_millis, 225);
    assert_eq!(timings.spec_for(Transition::Exit).unwrap().duration_millis, 195);
}

#[test]
fn tween_holds_during_delay() {
    let spec = TransitionSpec::linear(100).with_delay(50);
    let tween = Tween::new(spec, 10.0, 110.0);
    assert_eq!(tween.value_at(0), 10.0);
    assert_eq!(tween.value_at(49), 10.0);
}

#[test]
fn tween_reaches_target() {
    let spec = TransitionSpec::linear(100);
    let tween = Tween::new(spec, 0.0, 200.0);
    assert_eq!(tween.value_at(0), 0.0);
    assert!((tween.value_at(50) - 100.0).abs() < 1e-3);
    assert_eq!(tween.value_at(100), 200.0);
    assert_eq!(tween.value_at(500), 200.0);
    assert!(tween.is_finished(100));
    assert!(!tween.is_finished(99));
}

#[test]
fn tween_runs_backward() {
    let spec = TransitionSpec::linear(100);
    let tween = Tween::new(spec, 200.0, 0.0);
    assert!((tween.value_at(50) - 100.0).abs() < 1e-3);
    assert_eq!(tween.value_at(100), 0.0);
}
