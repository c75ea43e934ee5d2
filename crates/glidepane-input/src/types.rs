use glidepane_geometry::Point;
use smallvec::SmallVec;

pub type TouchId = u64;

/// Lifecycle phase of a touch-stream event. A stream is strictly ordered:
/// one `Start`, zero or more `Move`, then exactly one of `End`/`Cancel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One active pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    pub position: Point,
}

impl TouchPoint {
    pub fn new(id: TouchId, position: Point) -> Self {
        Self { id, position }
    }
}

/// A touch-lifecycle event: the list of currently active touches plus the
/// touches whose state changed in this event. On `End`/`Cancel` the lifted
/// touch appears only in `changed`, mirroring how input subsystems report
/// `changedTouches` separately from the active list.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: SmallVec<[TouchPoint; 2]>,
    pub changed: SmallVec<[TouchPoint; 2]>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase) -> Self {
        Self {
            phase,
            touches: SmallVec::new(),
            changed: SmallVec::new(),
        }
    }

    /// Single-touch `Start` event at `position`.
    pub fn start(position: Point) -> Self {
        let point = TouchPoint::new(0, position);
        let mut event = Self::new(TouchPhase::Start);
        event.touches.push(point);
        event.changed.push(point);
        event
    }

    /// Single-touch `Move` event at `position`.
    pub fn movement(position: Point) -> Self {
        let point = TouchPoint::new(0, position);
        let mut event = Self::new(TouchPhase::Move);
        event.touches.push(point);
        event.changed.push(point);
        event
    }

    /// Single-touch `End` event; the lifted touch is reported in
    /// `changed` only.
    pub fn end(position: Point) -> Self {
        let mut event = Self::new(TouchPhase::End);
        event.changed.push(TouchPoint::new(0, position));
        event
    }

    /// Single-touch `Cancel` event. A cancelled touch still has a last
    /// known position.
    pub fn cancel(position: Point) -> Self {
        let mut event = Self::new(TouchPhase::Cancel);
        event.changed.push(TouchPoint::new(0, position));
        event
    }

    /// The first active touch, if any.
    pub fn primary(&self) -> Option<&TouchPoint> {
        self.touches.first()
    }

    /// The first touch whose state changed in this event.
    pub fn primary_changed(&self) -> Option<&TouchPoint> {
        self.changed.first()
    }
}
