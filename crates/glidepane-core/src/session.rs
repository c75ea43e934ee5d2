//! Per-touch gesture session state.

use crate::classify::{classify, SwipeClassification, SwipeDirection};
use crate::position;

/// State owned by one touch-start-to-end cycle. Created on touch-start,
/// discarded (never reused) on end/cancel.
#[derive(Debug, Clone)]
pub struct GestureSession {
    start_primary: f32,
    start_cross: f32,
    max_translate: f32,
    open_at_start: bool,
    classification: SwipeClassification,
}

impl GestureSession {
    /// `start_primary`/`start_cross` are the normalized coordinates of
    /// the touch-start; `max_translate` is the panel extent read once at
    /// session creation.
    pub fn new(start_primary: f32, start_cross: f32, max_translate: f32, open_at_start: bool) -> Self {
        Self {
            start_primary,
            start_cross,
            max_translate,
            open_at_start,
            classification: SwipeClassification::Undetermined,
        }
    }

    pub fn classification(&self) -> SwipeClassification {
        self.classification
    }

    pub fn direction(&self) -> Option<SwipeDirection> {
        self.classification.direction()
    }

    pub fn start_primary(&self) -> f32 {
        self.start_primary
    }

    pub fn max_translate(&self) -> f32 {
        self.max_translate
    }

    /// Feed a move sample while undetermined. Once resolved the
    /// classification is frozen for the rest of the session.
    pub fn classify_sample(&mut self, primary: f32, cross: f32) -> SwipeClassification {
        if self.classification == SwipeClassification::Undetermined {
            let delta_primary = (primary - self.start_primary).abs();
            let delta_cross = (cross - self.start_cross).abs();
            self.classification = classify(delta_primary, delta_cross, self.open_at_start);
        }
        self.classification
    }

    /// Pull the start coordinate back to compensate for the sliver of
    /// panel already visible when the gesture began.
    pub fn compensate_start(&mut self, amount: f32) {
        self.start_primary -= amount;
    }

    /// The clamped translation for the current finger position, once the
    /// session has resolved to a swipe.
    pub fn translate(&self, current_primary: f32) -> Option<f32> {
        self.direction().map(|direction| {
            position::compute_translate(
                direction,
                self.start_primary,
                current_primary,
                self.max_translate,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_freezes_once_resolved() {
        let mut session = GestureSession::new(0.0, 0.0, 200.0, false);
        assert_eq!(
            session.classify_sample(10.0, 1.0),
            SwipeClassification::Swiping(SwipeDirection::Opening)
        );
        // A later cross-heavy sample must not flip it to rejected.
        assert_eq!(
            session.classify_sample(10.0, 50.0),
            SwipeClassification::Swiping(SwipeDirection::Opening)
        );
    }

    #[test]
    fn no_translation_before_resolution() {
        let session = GestureSession::new(0.0, 0.0, 200.0, false);
        assert_eq!(session.translate(10.0), None);
    }

    #[test]
    fn compensation_shifts_tracking() {
        let mut session = GestureSession::new(0.0, 0.0, 200.0, false);
        session.classify_sample(20.0, 0.0);
        session.compensate_start(20.0);
        // Revealed extent = finger travel + compensation.
        assert_eq!(session.translate(20.0), Some(160.0));
    }
}
