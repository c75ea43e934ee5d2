//! Named settle transition profiles and a pure tween evaluator.

use crate::easing::Easing;

/// Advisory transition metadata attached to a visual update.
///
/// `None` means direct 1:1 tracking with no animation; `Enter`/`Exit`
/// select which precomputed timing profile the rendering surface applies
/// when the panel settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Enter,
    Exit,
}

/// Timing specification for one transition profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting in milliseconds.
    pub delay_millis: u64,
}

impl TransitionSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

/// The pair of settle profiles a surface resolves [`Transition`] tags
/// against. Defaults match the screen-transition durations of the
/// reference drawer: 225 ms to enter, 195 ms to leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTimings {
    pub enter: TransitionSpec,
    pub exit: TransitionSpec,
}

impl TransitionTimings {
    /// Resolve a transition tag to its profile. `Transition::None` has no
    /// profile; the update applies immediately.
    pub fn spec_for(&self, transition: Transition) -> Option<TransitionSpec> {
        match transition {
            Transition::None => None,
            Transition::Enter => Some(self.enter),
            Transition::Exit => Some(self.exit),
        }
    }
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            enter: TransitionSpec::tween(225, Easing::LinearOutSlowIn),
            exit: TransitionSpec::tween(195, Easing::Sharp),
        }
    }
}

/// A pure tween between two values, evaluated against elapsed time.
///
/// Surfaces that actually animate a settle drive this from whatever frame
/// clock their environment provides; the gesture engine never ticks it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub spec: TransitionSpec,
    pub from: f32,
    pub to: f32,
}

impl Tween {
    pub fn new(spec: TransitionSpec, from: f32, to: f32) -> Self {
        Self { spec, from, to }
    }

    /// The tweened value at `elapsed_millis` since the transition began.
    pub fn value_at(&self, elapsed_millis: u64) -> f32 {
        if elapsed_millis < self.spec.delay_millis {
            return self.from;
        }
        let active = elapsed_millis - self.spec.delay_millis;
        let duration = self.spec.duration_millis.max(1);
        let linear = (active as f32 / duration as f32).clamp(0.0, 1.0);
        let progress = self.spec.easing.transform(linear);
        self.from + (self.to - self.from) * progress
    }

    pub fn is_finished(&self, elapsed_millis: u64) -> bool {
        elapsed_millis >= self.spec.delay_millis + self.spec.duration_millis
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
