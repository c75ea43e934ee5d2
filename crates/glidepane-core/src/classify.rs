//! Swipe-vs-scroll classification.
//!
//! A touch stays `Undetermined` until the finger has moved far enough on
//! exactly one axis to make the intent unambiguous. The threshold is
//! close to what browsers use internally to trigger a native scroll.

pub const UNCERTAINTY_THRESHOLD: f32 = 3.0;

/// Which way a classified swipe is driving the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Opening,
    Closing,
}

/// The three-state classification of an in-progress touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeClassification {
    /// Not enough motion yet to tell a swipe from a scroll or tap.
    Undetermined,
    /// The motion is a swipe along the panel's travel axis.
    Swiping(SwipeDirection),
    /// The motion won on the cross axis: a scroll, not a swipe.
    Rejected,
}

impl SwipeClassification {
    pub fn is_resolved(self) -> bool {
        !matches!(self, SwipeClassification::Undetermined)
    }

    pub fn direction(self) -> Option<SwipeDirection> {
        match self {
            SwipeClassification::Swiping(direction) => Some(direction),
            _ => None,
        }
    }
}

/// Pure classification transition.
///
/// `delta_primary`/`delta_cross` are the absolute displacements from the
/// gesture's start point. A panel that was open at gesture start can only
/// be swiped closed; a closed one can only be swiped open.
pub fn classify(delta_primary: f32, delta_cross: f32, open_at_start: bool) -> SwipeClassification {
    if delta_primary > UNCERTAINTY_THRESHOLD && delta_cross <= UNCERTAINTY_THRESHOLD {
        let direction = if open_at_start {
            SwipeDirection::Closing
        } else {
            SwipeDirection::Opening
        };
        SwipeClassification::Swiping(direction)
    } else if delta_primary <= UNCERTAINTY_THRESHOLD && delta_cross > UNCERTAINTY_THRESHOLD {
        SwipeClassification::Rejected
    } else {
        SwipeClassification::Undetermined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_motion_resolves_to_swipe() {
        assert_eq!(
            classify(10.0, 1.0, false),
            SwipeClassification::Swiping(SwipeDirection::Opening)
        );
        assert_eq!(
            classify(10.0, 1.0, true),
            SwipeClassification::Swiping(SwipeDirection::Closing)
        );
    }

    #[test]
    fn cross_motion_rejects() {
        assert_eq!(classify(1.0, 10.0, false), SwipeClassification::Rejected);
        assert_eq!(classify(1.0, 10.0, true), SwipeClassification::Rejected);
    }

    #[test]
    fn small_motion_stays_undetermined() {
        assert_eq!(classify(2.0, 2.0, false), SwipeClassification::Undetermined);
        assert_eq!(classify(3.0, 3.0, false), SwipeClassification::Undetermined);
    }

    #[test]
    fn diagonal_motion_stays_undetermined() {
        // Both axes over threshold: intent still ambiguous.
        assert_eq!(
            classify(10.0, 10.0, false),
            SwipeClassification::Undetermined
        );
    }

    #[test]
    fn threshold_is_exclusive_on_primary() {
        assert_eq!(classify(3.0, 0.0, false), SwipeClassification::Undetermined);
        assert!(classify(3.1, 0.0, false).is_resolved());
    }
}
