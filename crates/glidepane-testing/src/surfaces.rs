//! Recording implementations of the rendering seams.

use glidepane_animation::Transition;
use glidepane_core::{BackdropSurface, DrawerCallbacks, PanelSurface};
use std::cell::{Cell, RefCell};

/// Panel surface that records every applied translation and transition.
pub struct RecordingPanel {
    extent: Cell<f32>,
    translations: RefCell<Vec<f32>>,
    transitions: RefCell<Vec<Transition>>,
}

impl RecordingPanel {
    pub fn new(extent: f32) -> Self {
        Self {
            extent: Cell::new(extent),
            translations: RefCell::new(Vec::new()),
            transitions: RefCell::new(Vec::new()),
        }
    }

    /// Simulate a layout change.
    pub fn set_extent(&self, extent: f32) {
        self.extent.set(extent);
    }

    pub fn translations(&self) -> Vec<f32> {
        self.translations.borrow().clone()
    }

    pub fn last_translation(&self) -> Option<f32> {
        self.translations.borrow().last().copied()
    }

    pub fn last_transition(&self) -> Option<Transition> {
        self.transitions.borrow().last().copied()
    }

    pub fn update_count(&self) -> usize {
        self.translations.borrow().len()
    }
}

impl PanelSurface for RecordingPanel {
    fn set_translation(&self, translate: f32) {
        self.translations.borrow_mut().push(translate);
    }

    fn set_transition(&self, transition: Transition) {
        self.transitions.borrow_mut().push(transition);
    }

    fn extent(&self) -> f32 {
        self.extent.get()
    }
}

/// Backdrop surface that records every applied opacity.
#[derive(Default)]
pub struct RecordingBackdrop {
    opacities: RefCell<Vec<f32>>,
    transitions: RefCell<Vec<Transition>>,
}

impl RecordingBackdrop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacities(&self) -> Vec<f32> {
        self.opacities.borrow().clone()
    }

    pub fn last_opacity(&self) -> Option<f32> {
        self.opacities.borrow().last().copied()
    }

    pub fn last_transition(&self) -> Option<Transition> {
        self.transitions.borrow().last().copied()
    }
}

impl BackdropSurface for RecordingBackdrop {
    fn set_opacity(&self, opacity: f32) {
        self.opacities.borrow_mut().push(opacity);
    }

    fn set_transition(&self, transition: Transition) {
        self.transitions.borrow_mut().push(transition);
    }
}

/// Counts the open/close intents a drawer proposes.
#[derive(Default)]
pub struct IntentLog {
    opens: Cell<u32>,
    closes: Cell<u32>,
}

impl IntentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_count(&self) -> u32 {
        self.opens.get()
    }

    pub fn close_count(&self) -> u32 {
        self.closes.get()
    }
}

impl DrawerCallbacks for IntentLog {
    fn on_open(&self) {
        self.opens.set(self.opens.get() + 1);
    }

    fn on_close(&self) {
        self.closes.set(self.closes.get() + 1);
    }
}
