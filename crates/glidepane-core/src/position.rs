//! Translation clamping, backdrop opacity, and release resolution.
//!
//! `translate` measures the panel's distance from its fully-open
//! position: 0 means fully open, `max_translate` means fully closed. The
//! functions here are pure so the position controller can be tested with
//! no surfaces attached.

use crate::classify::SwipeDirection;
use glidepane_animation::Transition;

/// Compute the clamped translation for the current finger position.
///
/// A closing gesture measures covered distance down from the fully-open
/// baseline; an opening gesture measures the travel still remaining, so
/// it starts at `max_translate` and shrinks toward 0.
pub fn compute_translate(
    direction: SwipeDirection,
    start_primary: f32,
    current_primary: f32,
    max_translate: f32,
) -> f32 {
    let max_translate = max_translate.max(0.0);
    let raw = match direction {
        SwipeDirection::Closing => start_primary - current_primary,
        SwipeDirection::Opening => max_translate + start_primary - current_primary,
    };
    raw.clamp(0.0, max_translate)
}

/// Backdrop opacity is linear in the translation: 1 at fully open, 0 at
/// fully closed. A zero-extent panel behaves as pinned at the open
/// position.
pub fn backdrop_opacity(translate: f32, max_translate: f32) -> f32 {
    if max_translate <= 0.0 {
        return 1.0;
    }
    (1.0 - translate / max_translate).clamp(0.0, 1.0)
}

/// What a released gesture resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettleAction {
    /// The opening swipe crossed the midpoint: propose opening.
    EmitOpen,
    /// The closing swipe crossed the midpoint: propose closing.
    EmitClose,
    /// The swipe under-shot: snap back to where it started.
    Restore {
        translate: f32,
        transition: Transition,
    },
}

/// Resolve a release at the given translation.
pub fn resolve_on_release(
    direction: SwipeDirection,
    translate: f32,
    max_translate: f32,
) -> SettleAction {
    let ratio = if max_translate > 0.0 {
        translate / max_translate
    } else {
        0.0
    };

    if ratio > 0.5 {
        match direction {
            // The open attempt stalled short of the midpoint: back to closed.
            SwipeDirection::Opening => SettleAction::Restore {
                translate: max_translate,
                transition: Transition::Enter,
            },
            SwipeDirection::Closing => SettleAction::EmitClose,
        }
    } else {
        match direction {
            SwipeDirection::Opening => SettleAction::EmitOpen,
            // The close attempt stalled short of the midpoint: back to open.
            SwipeDirection::Closing => SettleAction::Restore {
                translate: 0.0,
                transition: Transition::Exit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: f32 = 200.0;

    #[test]
    fn translate_is_always_clamped() {
        for direction in [SwipeDirection::Opening, SwipeDirection::Closing] {
            let mut displacement = -500.0;
            while displacement <= 500.0 {
                let translate = compute_translate(direction, 300.0, 300.0 + displacement, MAX);
                assert!(
                    (0.0..=MAX).contains(&translate),
                    "{:?} displacement {} produced {}",
                    direction,
                    displacement,
                    translate
                );
                displacement += 7.0;
            }
        }
    }

    #[test]
    fn closing_counts_up_from_open() {
        assert_eq!(
            compute_translate(SwipeDirection::Closing, 300.0, 300.0, MAX),
            0.0
        );
        assert_eq!(
            compute_translate(SwipeDirection::Closing, 300.0, 180.0, MAX),
            120.0
        );
    }

    #[test]
    fn opening_counts_down_from_closed() {
        assert_eq!(
            compute_translate(SwipeDirection::Opening, 0.0, 0.0, MAX),
            MAX
        );
        assert_eq!(
            compute_translate(SwipeDirection::Opening, 0.0, 120.0, MAX),
            80.0
        );
    }

    #[test]
    fn release_threshold_symmetry() {
        // Closing swipe that covered 120 of 200 crossed the midpoint.
        assert_eq!(
            resolve_on_release(SwipeDirection::Closing, 120.0, MAX),
            SettleAction::EmitClose
        );
        // Covered only 90: snap back to open, no intent.
        assert_eq!(
            resolve_on_release(SwipeDirection::Closing, 90.0, MAX),
            SettleAction::Restore {
                translate: 0.0,
                transition: Transition::Exit,
            }
        );
        // Opening swipe with 90 still to travel crossed the midpoint.
        assert_eq!(
            resolve_on_release(SwipeDirection::Opening, 90.0, MAX),
            SettleAction::EmitOpen
        );
        // 120 still to travel: snap back to closed, no intent.
        assert_eq!(
            resolve_on_release(SwipeDirection::Opening, 120.0, MAX),
            SettleAction::Restore {
                translate: MAX,
                transition: Transition::Enter,
            }
        );
    }

    #[test]
    fn midpoint_release_favors_completion_for_opening() {
        assert_eq!(
            resolve_on_release(SwipeDirection::Opening, 100.0, MAX),
            SettleAction::EmitOpen
        );
        assert_eq!(
            resolve_on_release(SwipeDirection::Closing, 100.0, MAX),
            SettleAction::Restore {
                translate: 0.0,
                transition: Transition::Exit,
            }
        );
    }

    #[test]
    fn zero_extent_degenerates_without_nan() {
        assert_eq!(
            compute_translate(SwipeDirection::Opening, 0.0, 50.0, 0.0),
            0.0
        );
        assert_eq!(
            resolve_on_release(SwipeDirection::Opening, 0.0, 0.0),
            SettleAction::EmitOpen
        );
        assert_eq!(
            resolve_on_release(SwipeDirection::Closing, 0.0, 0.0),
            SettleAction::Restore {
                translate: 0.0,
                transition: Transition::Exit,
            }
        );
    }

    #[test]
    fn backdrop_opacity_tracks_translation() {
        assert_eq!(backdrop_opacity(0.0, MAX), 1.0);
        assert_eq!(backdrop_opacity(100.0, MAX), 0.5);
        assert_eq!(backdrop_opacity(MAX, MAX), 0.0);
        assert_eq!(backdrop_opacity(0.0, 0.0), 1.0);
    }
}
