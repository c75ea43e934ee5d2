//! Drawer configuration.

use glidepane_geometry::Edge;

/// How the drawer is presented. Only `Temporary` drawers listen for
/// gestures at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerVariant {
    Temporary,
    Persistent,
    Permanent,
}

/// Read-only configuration for one drawer instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerConfig {
    /// The viewport edge the panel slides from.
    pub edge: Edge,
    /// Width of the activation strip in which a closed panel accepts
    /// touch-start for an opening swipe.
    pub swipe_area_width: f32,
    /// Disables the discovery nudge that slides the panel partially into
    /// view at the start of a valid opening swipe.
    pub disable_discovery: bool,
    /// Leaves the backdrop untouched during gestures. Improves frame
    /// rates on low-end devices.
    pub disable_backdrop_transition: bool,
    pub variant: DrawerVariant,
}

impl DrawerConfig {
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            ..Self::default()
        }
    }

    pub fn with_swipe_area_width(mut self, width: f32) -> Self {
        self.swipe_area_width = width;
        self
    }

    pub fn with_variant(mut self, variant: DrawerVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            edge: Edge::Left,
            swipe_area_width: 20.0,
            disable_discovery: false,
            disable_backdrop_transition: false,
            variant: DrawerVariant::Temporary, // Mobile first.
        }
    }
}
