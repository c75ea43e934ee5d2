//! Settle transition profiles and easing for Glidepane
//!
//! The gesture engine never animates anything itself; it tags visual
//! updates with a [`Transition`] and the rendering side picks the matching
//! timing profile. This crate holds those profiles and a pure tween
//! evaluator a surface can drive from its own frame clock.

mod easing;
mod transition;

pub use easing::Easing;
pub use transition::{Transition, TransitionSpec, TransitionTimings, Tween};

pub mod prelude {
    pub use crate::easing::Easing;
    pub use crate::transition::{Transition, TransitionSpec, TransitionTimings, Tween};
}
