//! The swipeable drawer gesture controller.
//!
//! One `SwipeableDrawer` consumes the touch-lifecycle stream for a panel
//! surface: touch-start attempts an ownership claim and opens a session,
//! moves feed the classifier and then drive the panel 1:1, and end/cancel
//! resolves the settle and releases the claim. All processing is
//! synchronous inside the handler for each event; delivery order from
//! the input subsystem is assumed and not re-checked.

use std::rc::Rc;

use glidepane_animation::Transition;
use glidepane_geometry::Size;
use glidepane_input::{TouchEvent, TouchPhase};

use crate::arbiter::{InstanceId, SwipeArbiter};
use crate::classify::{SwipeClassification, SwipeDirection};
use crate::config::{DrawerConfig, DrawerVariant};
use crate::position::{self, SettleAction};
use crate::session::GestureSession;
use crate::surface::{BackdropSurface, DrawerCallbacks, PanelSurface};

pub struct SwipeableDrawer {
    config: DrawerConfig,
    arbiter: SwipeArbiter,
    id: InstanceId,
    panel: Rc<dyn PanelSurface>,
    backdrop: Rc<dyn BackdropSurface>,
    callbacks: Rc<dyn DrawerCallbacks>,
    viewport: Size,
    open: bool,
    running: bool,
    session: Option<GestureSession>,
}

impl SwipeableDrawer {
    pub fn new(
        config: DrawerConfig,
        arbiter: SwipeArbiter,
        panel: Rc<dyn PanelSurface>,
        backdrop: Rc<dyn BackdropSurface>,
        callbacks: Rc<dyn DrawerCallbacks>,
    ) -> Self {
        let id = arbiter.register();
        Self {
            config,
            arbiter,
            id,
            panel,
            backdrop,
            callbacks,
            viewport: Size::ZERO,
            open: false,
            running: false,
            session: None,
        }
    }

    /// Begin listening for touch-starts. Only the `Temporary` variant
    /// ever attaches; calling this on other variants records the intent
    /// so a later `set_variant` can take effect.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Detach and release any held claim. Hosts must call this on
    /// teardown; a drawer dropped mid-gesture without `stop` wedges the
    /// arbiter slot for every other instance.
    pub fn stop(&mut self) {
        self.running = false;
        if self.arbiter.is_owner(self.id) {
            self.arbiter.release();
        }
        self.session = None;
    }

    /// Push the host-owned open/closed state. Read at gesture start to
    /// pick the swipe direction and the strip gating.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Trailing edges (right/bottom) normalize touch coordinates against
    /// the viewport; hosts must keep this current across resizes.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Switching away from `Temporary` stops accepting new touch-starts;
    /// a gesture already in flight runs to completion.
    pub fn set_variant(&mut self, variant: DrawerVariant) {
        self.config.variant = variant;
    }

    pub fn is_attached(&self) -> bool {
        self.running && self.config.variant == DrawerVariant::Temporary
    }

    /// True from an accepted touch-start until end/cancel. Hosts use this
    /// to keep a temporary drawer mounted while a touch is being tracked.
    pub fn maybe_swiping(&self) -> bool {
        self.session.is_some()
    }

    pub fn classification(&self) -> SwipeClassification {
        self.session
            .as_ref()
            .map(|session| session.classification())
            .unwrap_or(SwipeClassification::Undetermined)
    }

    pub fn instance_id(&self) -> InstanceId {
        self.id
    }

    pub fn handle_event(&mut self, event: &TouchEvent) {
        match event.phase {
            TouchPhase::Start => self.on_touch_start(event),
            TouchPhase::Move => self.on_touch_move(event),
            // A cancelled touch still has a last known position; settle
            // resolution is identical to end.
            TouchPhase::End | TouchPhase::Cancel => self.on_touch_end(event),
        }
    }

    fn on_touch_start(&mut self, event: &TouchEvent) {
        if !self.is_attached() {
            return;
        }
        let Some(touch) = event.primary() else {
            return;
        };
        if !self.arbiter.try_claim(self.id) {
            log::debug!(
                "drawer {}: touch-start ignored, gesture owned elsewhere",
                self.id
            );
            return;
        }

        let edge = self.config.edge;
        let primary = edge.primary(touch.position, self.viewport);
        let cross = edge.cross(touch.position, self.viewport);

        // A closed panel only accepts starts inside the activation strip.
        if !self.open && primary > self.config.swipe_area_width {
            self.arbiter.release();
            return;
        }

        let max_translate = self.panel.extent();
        self.session = Some(GestureSession::new(primary, cross, max_translate, self.open));
        log::debug!(
            "drawer {}: session opened at primary {:.1} (extent {:.1})",
            self.id,
            primary,
            max_translate
        );

        if !self.open {
            // Nudge the panel into view so the gesture is discoverable.
            let peek = if self.config.disable_discovery {
                0.0
            } else {
                self.config.swipe_area_width
            };
            self.apply_visual((max_translate - peek).max(0.0), max_translate, Transition::None);
        }
    }

    fn on_touch_move(&mut self, event: &TouchEvent) {
        if !self.arbiter.is_owner(self.id) {
            return;
        }
        let Some(touch) = event.primary() else {
            return;
        };
        let edge = self.config.edge;
        let primary = edge.primary(touch.position, self.viewport);
        let cross = edge.cross(touch.position, self.viewport);

        let classification = {
            let Some(session) = self.session.as_mut() else {
                return;
            };
            if session.classification() == SwipeClassification::Undetermined {
                let resolved = session.classify_sample(primary, cross);
                if resolved == SwipeClassification::Swiping(SwipeDirection::Opening)
                    && !self.config.disable_discovery
                {
                    // Compensate for the sliver shown on touch start so
                    // tracking is 1:1 from here on.
                    session.compensate_start(self.config.swipe_area_width);
                }
                resolved
            } else {
                session.classification()
            }
        };

        match classification {
            // Still ambiguous: the panel must not jitter.
            SwipeClassification::Undetermined => {}
            SwipeClassification::Rejected => {
                log::debug!("drawer {}: cross-axis motion won, abandoning session", self.id);
                self.arbiter.release();
                self.session = None;
            }
            SwipeClassification::Swiping(direction) => {
                if let Some(session) = self.session.as_ref() {
                    if let Some(translate) = session.translate(primary) {
                        log::trace!(
                            "drawer {}: {:?} tracking at translate {:.1}",
                            self.id,
                            direction,
                            translate
                        );
                        self.apply_visual(translate, session.max_translate(), Transition::None);
                    }
                }
            }
        }
    }

    fn on_touch_end(&mut self, event: &TouchEvent) {
        if !self.arbiter.is_owner(self.id) {
            return;
        }
        self.arbiter.release();
        let Some(session) = self.session.take() else {
            return;
        };
        let Some(direction) = session.direction() else {
            // Pure tap or never-resolved touch: nothing to settle.
            return;
        };
        let Some(touch) = event.primary_changed().or_else(|| event.primary()) else {
            return;
        };

        let primary = self.config.edge.primary(touch.position, self.viewport);
        let translate = position::compute_translate(
            direction,
            session.start_primary(),
            primary,
            session.max_translate(),
        );

        match position::resolve_on_release(direction, translate, session.max_translate()) {
            SettleAction::EmitOpen => {
                log::debug!("drawer {}: swipe resolved, proposing open", self.id);
                self.callbacks.on_open();
            }
            SettleAction::EmitClose => {
                log::debug!("drawer {}: swipe resolved, proposing close", self.id);
                self.callbacks.on_close();
            }
            SettleAction::Restore {
                translate,
                transition,
            } => {
                log::debug!(
                    "drawer {}: swipe aborted, restoring to {:.1}",
                    self.id,
                    translate
                );
                self.apply_visual(translate, session.max_translate(), transition);
            }
        }
    }

    fn apply_visual(&self, translate: f32, max_translate: f32, transition: Transition) {
        self.panel.set_translation(translate);
        self.panel.set_transition(transition);
        if !self.config.disable_backdrop_transition {
            self.backdrop
                .set_opacity(position::backdrop_opacity(translate, max_translate));
            self.backdrop.set_transition(transition);
        }
    }
}
