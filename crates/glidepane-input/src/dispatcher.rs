//! Touch event dispatch plumbing.
//!
//! Platform integrations enqueue touch events here and drain them into
//! the gesture engine. Delivery order is the enqueue order; the engine
//! relies on that ordering and does not tolerate reordered streams.

use super::types::TouchEvent;

#[derive(Default)]
pub struct TouchDispatcher {
    queue: Vec<TouchEvent>,
}

impl TouchDispatcher {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: TouchEvent) {
        self.queue.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(TouchEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glidepane_geometry::Point;

    #[test]
    fn drains_in_delivery_order() {
        let mut dispatcher = TouchDispatcher::new();
        dispatcher.push(TouchEvent::start(Point::new(0.0, 0.0)));
        dispatcher.push(TouchEvent::movement(Point::new(10.0, 0.0)));
        dispatcher.push(TouchEvent::end(Point::new(10.0, 0.0)));

        let mut phases = Vec::new();
        dispatcher.drain(|event| phases.push(event.phase));

        use crate::types::TouchPhase::*;
        assert_eq!(phases, vec![Start, Move, End]);
        assert!(dispatcher.is_empty());
    }
}
