//! Pure math/data for gesture geometry in Glidepane
//!
//! This crate contains the point/size primitives, the anchor-edge model,
//! and the coordinate normalization used by the gesture engine.

mod edge;
mod geometry;

pub use edge::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::edge::{Axis, Edge};
    pub use crate::geometry::{Point, Size};
}
