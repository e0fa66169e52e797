//! Revalidation queue: a deduplicated pending-work set drained once per
//! frame, so an owner is revalidated exactly once no matter how many tween
//! ticks touched it.

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

use crate::record::TweenTarget;

/// A record collection shared between its host, the coordinator's tick
/// closures and the queue. Identity (the allocation) is what the queue
/// deduplicates on.
pub type SharedTarget = Rc<RefCell<dyn TweenTarget>>;

#[derive(Default)]
pub struct RevalidateQueue {
    pending: Vec<SharedTarget>,
}

impl RevalidateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `owner` to the pending set unless the same allocation is already
    /// queued. Insertion order is preserved.
    pub fn enqueue(&mut self, owner: &SharedTarget) {
        if self.pending.iter().any(|p| Rc::ptr_eq(p, owner)) {
            return;
        }
        self.pending.push(Rc::clone(owner));
    }

    /// Number of owners currently pending.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Revalidate each pending owner once, in insertion order, then clear.
    pub fn drain_and_revalidate(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        trace!("revalidating {} owner(s)", self.pending.len());
        for owner in self.pending.drain(..) {
            owner.borrow_mut().revalidate();
        }
    }
}
