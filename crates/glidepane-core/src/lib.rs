//! Edge-swipe gesture recognition and drawer position control.
//!
//! This crate decides whether an in-progress touch is a swipe or an
//! unrelated scroll/tap, tracks the live drag displacement, converts it
//! into a bounded panel translation and backdrop opacity, arbitrates
//! gesture ownership when several drawers share one touch surface, and
//! resolves every release to an open/close intent or a settle animation.

pub mod arbiter;
pub mod classify;
pub mod config;
pub mod drawer;
pub mod position;
pub mod session;
pub mod surface;

#[cfg(test)]
mod tests;

pub use arbiter::{InstanceId, SwipeArbiter};
pub use classify::{SwipeClassification, SwipeDirection, UNCERTAINTY_THRESHOLD};
pub use config::{DrawerConfig, DrawerVariant};
pub use drawer::SwipeableDrawer;
pub use position::{backdrop_opacity, compute_translate, resolve_on_release, SettleAction};
pub use session::GestureSession;
pub use surface::{BackdropSurface, DrawerCallbacks, PanelSurface};

pub mod prelude {
    pub use crate::arbiter::{InstanceId, SwipeArbiter};
    pub use crate::classify::{SwipeClassification, SwipeDirection};
    pub use crate::config::{DrawerConfig, DrawerVariant};
    pub use crate::drawer::SwipeableDrawer;
    pub use crate::position::SettleAction;
    pub use crate::surface::{BackdropSurface, DrawerCallbacks, PanelSurface};
}
