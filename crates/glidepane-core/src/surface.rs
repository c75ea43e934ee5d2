//! Capability seams to the rendering side.
//!
//! The engine never touches a concrete widget tree; it drives these
//! traits and any rendering technology implements them.

use glidepane_animation::Transition;

/// The sliding panel surface.
pub trait PanelSurface {
    /// Set the panel's translation along its travel axis. 0 is the
    /// fully-open position, `extent()` the fully-closed one.
    fn set_translation(&self, translate: f32);

    /// Tag the current update with a transition profile. `None` means
    /// direct tracking with no animation.
    fn set_transition(&self, transition: Transition);

    /// The panel's open-to-closed travel distance in its current layout.
    /// May be 0 before layout has run.
    fn extent(&self) -> f32;
}

/// The dimming backdrop behind a temporary drawer.
pub trait BackdropSurface {
    fn set_opacity(&self, opacity: f32);
    fn set_transition(&self, transition: Transition);
}

/// High-level intents emitted on release. Fire-and-forget: the engine
/// proposes transitions, the host owns the resulting open/closed state
/// and pushes it back with `set_open`.
pub trait DrawerCallbacks {
    fn on_open(&self);
    fn on_close(&self);
}
