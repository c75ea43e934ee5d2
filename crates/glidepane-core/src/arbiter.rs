//! Gesture ownership arbitration.
//!
//! Only one drawer instance may react to a given touch stream. The
//! arbiter is a single-slot registry handed by reference to every drawer
//! at construction; a drawer claims the slot on touch-start and releases
//! it on end/cancel. There is no timeout: an owner torn down without
//! releasing wedges the slot until [`SwipeArbiter::reset`] is called.

use std::cell::Cell;
use std::rc::Rc;

pub type InstanceId = u64;

/// Shared single-slot ownership registry. Cloning yields another handle
/// to the same slot.
#[derive(Clone, Default)]
pub struct SwipeArbiter {
    inner: Rc<ArbiterInner>,
}

#[derive(Default)]
struct ArbiterInner {
    owner: Cell<Option<InstanceId>>,
    next_id: Cell<InstanceId>,
}

impl SwipeArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh instance id for a drawer joining this registry.
    pub fn register(&self) -> InstanceId {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        id
    }

    /// Claim the gesture slot. Granted when the slot is free or already
    /// held by the same instance.
    pub fn try_claim(&self, instance: InstanceId) -> bool {
        match self.inner.owner.get() {
            None => {
                self.inner.owner.set(Some(instance));
                true
            }
            Some(owner) => owner == instance,
        }
    }

    pub fn is_owner(&self, instance: InstanceId) -> bool {
        self.inner.owner.get() == Some(instance)
    }

    pub fn is_claimed(&self) -> bool {
        self.inner.owner.get().is_some()
    }

    /// Release the slot. Idempotent; releasing an already-free slot is a
    /// no-op.
    pub fn release(&self) {
        self.inner.owner.set(None);
    }

    /// Clear the slot regardless of owner. Exported for test purposes.
    pub fn reset(&self) {
        self.inner.owner.set(None);
    }
}
