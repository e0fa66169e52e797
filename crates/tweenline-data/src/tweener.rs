//! Data tween coordinator: tweens a whole record collection from its
//! current values to supplied new values with one animation, and batches
//! the host's revalidation to once per frame.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use tweenline_core::{tween, AnimationHandle, AnimationSpec, Animator, Ease};

use crate::queue::{RevalidateQueue, SharedTarget};
use crate::record::ValueBag;

/// Schedule-time precondition failures. The running tween itself never
/// errors; garbage numeric inputs propagate as garbage numeric outputs.
#[derive(Debug, Error)]
pub enum TweenError {
    #[error("target has {records} record(s) but {values} new value bag(s) were supplied")]
    LengthMismatch { records: usize, values: usize },
    #[error("new value bag {index} is missing field '{field}'")]
    MissingField { index: usize, field: String },
}

/// Options for one collection tween.
pub struct TweenOptions {
    duration: f64,
    easing: Ease,
    complete: Option<Box<dyn FnOnce()>>,
}

impl TweenOptions {
    /// Duration in milliseconds; easing defaults to [`Ease::Out`].
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            easing: Ease::default(),
            complete: None,
        }
    }

    pub fn easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }

    /// Invoked once after the final values have been written.
    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.complete = Some(Box::new(f));
        self
    }
}

/// Coordinator owning the shared revalidation queue. Install one per
/// animator; installation registers the queue drain as an after-frame
/// observer, so every frame ends with at most one revalidation per owner.
pub struct DataTweener {
    queue: Rc<RefCell<RevalidateQueue>>,
}

impl DataTweener {
    pub fn install(animator: &mut Animator) -> Self {
        let queue = Rc::new(RefCell::new(RevalidateQueue::new()));
        let drain = Rc::clone(&queue);
        animator.on_after_frame(move |_now| drain.borrow_mut().drain_and_revalidate());
        Self { queue }
    }

    /// Tween every listed field of every record in `target` from its value
    /// at call time to the value in the positionally aligned `new_values`
    /// bag, over `duration` milliseconds.
    ///
    /// Old values are snapshotted here, not on the first frame, so the
    /// start point is fixed to the state at scheduling. Each tick writes
    /// eased in-between values for all records and enqueues `target` for a
    /// single end-of-frame revalidation; the end callback re-applies at
    /// progress 1 so the final values are exact. Returns the handle for
    /// external cancellation.
    ///
    /// The collection's length must not change while the tween runs; ticks
    /// clamp to the snapshot length, so a shrunk collection is never
    /// indexed out of bounds, but the written values are unspecified.
    pub fn tween_collection(
        &self,
        animator: &mut Animator,
        target: &SharedTarget,
        new_values: &[ValueBag],
        fields: &[String],
        options: TweenOptions,
    ) -> Result<AnimationHandle, TweenError> {
        let records = target.borrow().len();
        if new_values.len() != records {
            return Err(TweenError::LengthMismatch {
                records,
                values: new_values.len(),
            });
        }

        // Dense [record][field] buffers, aligned with `fields`.
        let mut new_snapshot: Vec<Vec<f64>> = Vec::with_capacity(records);
        for (index, bag) in new_values.iter().enumerate() {
            let mut row = Vec::with_capacity(fields.len());
            for field in fields {
                match bag.get(field) {
                    Some(value) => row.push(*value),
                    None => {
                        return Err(TweenError::MissingField {
                            index,
                            field: field.clone(),
                        })
                    }
                }
            }
            new_snapshot.push(row);
        }

        let old_snapshot: Vec<Vec<f64>> = {
            let current = target.borrow();
            (0..records)
                .map(|i| fields.iter().map(|f| current.get(i, f)).collect())
                .collect()
        };

        let fields: Vec<String> = fields.to_vec();
        let easing = options.easing.resolve();
        let owner = Rc::clone(target);
        let queue = Rc::clone(&self.queue);

        // Shared between tick and end: the end callback re-runs the same
        // body at progress 1 for exact final values.
        let apply = Rc::new(RefCell::new(move |progress: f64| {
            let eased = easing(progress);
            {
                let mut target = owner.borrow_mut();
                debug_assert!(
                    target.len() == old_snapshot.len(),
                    "record collection length changed mid-tween"
                );
                let rows = old_snapshot.len().min(target.len());
                for i in 0..rows {
                    for (j, field) in fields.iter().enumerate() {
                        target.set(i, field, tween(eased, old_snapshot[i][j], new_snapshot[i][j]));
                    }
                }
            }
            queue.borrow_mut().enqueue(&owner);
        }));

        let tick_apply = Rc::clone(&apply);
        let mut complete = options.complete;
        let spec = AnimationSpec::new(options.duration)
            .on_tick(move |progress| (&mut *tick_apply.borrow_mut())(progress))
            .on_end(move |progress| {
                (&mut *apply.borrow_mut())(progress);
                if let Some(f) = complete.take() {
                    f();
                }
            });

        Ok(animator.animate(spec))
    }
}
