//! Touch-lifecycle event model and dispatch queue for Glidepane

pub mod dispatcher;
pub mod types;

pub use dispatcher::TouchDispatcher;
pub use types::{TouchEvent, TouchId, TouchPhase, TouchPoint};

pub mod prelude {
    pub use crate::dispatcher::TouchDispatcher;
    pub use crate::types::{TouchEvent, TouchId, TouchPhase, TouchPoint};
}
