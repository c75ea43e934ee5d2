//! Testing utilities and gesture robot for Glidepane
//!
//! Provides recording implementations of the rendering seams and a
//! robot-style driver that synthesizes ordered touch streams against a
//! drawer under test.

pub mod robot;
pub mod surfaces;


pub use robot::SwipeRobot;
pub use surfaces::{IntentLog, RecordingBackdrop, RecordingPanel};
