//! Robot-style gesture driver.
//!
//! The robot synthesizes strictly ordered touch streams (one start, moves,
//! one end/cancel) and pumps them through a [`TouchDispatcher`] into the
//! drawer under test, the same delivery path a platform integration uses.
//!
//! # Example
//!
//! ```ignore
//! let mut robot = SwipeRobot::new(drawer);
//! robot.swipe(Point::new(0.0, 100.0), Point::new(150.0, 100.0), 5);
//! assert_eq!(intents.open_count(), 1);
//! ```

use glidepane_core::SwipeableDrawer;
use glidepane_geometry::Point;
use glidepane_input::{TouchDispatcher, TouchEvent};

pub struct SwipeRobot {
    drawer: SwipeableDrawer,
    dispatcher: TouchDispatcher,
    last_position: Option<Point>,
}

impl SwipeRobot {
    pub fn new(drawer: SwipeableDrawer) -> Self {
        Self {
            drawer,
            dispatcher: TouchDispatcher::new(),
            last_position: None,
        }
    }

    pub fn drawer(&self) -> &SwipeableDrawer {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut SwipeableDrawer {
        &mut self.drawer
    }

    /// Put a finger down at the given position.
    pub fn touch_down(&mut self, x: f32, y: f32) {
        let position = Point::new(x, y);
        self.last_position = Some(position);
        self.dispatcher.push(TouchEvent::start(position));
        self.pump();
    }

    /// Drag the finger to the given position.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        let position = Point::new(x, y);
        self.last_position = Some(position);
        self.dispatcher.push(TouchEvent::movement(position));
        self.pump();
    }

    /// Lift the finger at its last known position.
    pub fn lift(&mut self) {
        if let Some(position) = self.last_position.take() {
            self.dispatcher.push(TouchEvent::end(position));
            self.pump();
        }
    }

    /// Cancel the touch at its last known position, as the input
    /// subsystem does when something else steals the stream.
    pub fn cancel(&mut self) {
        if let Some(position) = self.last_position.take() {
            self.dispatcher.push(TouchEvent::cancel(position));
            self.pump();
        }
    }

    /// Full swipe: down at `from`, `steps` interpolated moves, lift at
    /// `to`.
    pub fn swipe(&mut self, from: Point, to: Point, steps: usize) {
        self.touch_down(from.x, from.y);
        let steps = steps.max(1);
        for i in 1..=steps {
            let fraction = i as f32 / steps as f32;
            self.drag_to(
                from.x + (to.x - from.x) * fraction,
                from.y + (to.y - from.y) * fraction,
            );
        }
        self.lift();
    }

    fn pump(&mut self) {
        let drawer = &mut self.drawer;
        self.dispatcher.drain(|event| drawer.handle_event(&event));
    }
}
