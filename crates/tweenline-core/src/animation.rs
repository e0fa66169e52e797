//! Animation: a single timed task advanced once per frame by the animator.
//!
//! Lifecycle: pending (no start timestamp) -> started (first advance anchors
//! the clock) -> running -> finished (terminal; natural completion or
//! cancellation). Once finished, all callback boxes are dropped and no
//! callback can ever fire again.

use std::cell::Cell;
use std::rc::Rc;

/// Per-frame callback receiving normalized progress (or a timestamp-anchored
/// constant for start/end; see [`Animation::advance`]).
pub type FrameCallback = Box<dyn FnMut(f64)>;

/// Builder for a single animation: duration in milliseconds plus optional
/// start/tick/end callbacks. Missing callbacks default to no-ops.
pub struct AnimationSpec {
    duration: f64,
    start: Option<FrameCallback>,
    tick: Option<FrameCallback>,
    end: Option<FrameCallback>,
}

impl AnimationSpec {
    /// New spec with the given duration in milliseconds (non-negative).
    /// A zero duration completes on the first frame after the anchor frame.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            start: None,
            tick: None,
            end: None,
        }
    }

    /// Invoked once, with `0.0`, on the animation's first frame.
    pub fn on_start(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.start = Some(Box::new(f));
        self
    }

    /// Invoked each running frame with linear progress `elapsed / duration`
    /// in `[0, 1)`. Easing is the callback's responsibility.
    pub fn on_tick(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.tick = Some(Box::new(f));
        self
    }

    /// Invoked once, with `1.0`, on natural completion. Not invoked on
    /// cancellation.
    pub fn on_end(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.end = Some(Box::new(f));
        self
    }

    /// Build the animation and its external handle.
    pub fn build(self) -> (Animation, AnimationHandle) {
        let finished = Rc::new(Cell::new(false));
        let animation = Animation {
            duration: self.duration,
            start_time: None,
            finished: Rc::clone(&finished),
            start: self.start,
            tick: self.tick,
            end: self.end,
        };
        (animation, AnimationHandle { finished })
    }
}

/// Opaque external handle to a scheduled animation. Cloneable; the only
/// capabilities it grants are cancellation and completion inspection.
#[derive(Clone, Debug)]
pub struct AnimationHandle {
    finished: Rc<Cell<bool>>,
}

impl AnimationHandle {
    /// Force the animation into its terminal state without running its end
    /// callback. Idempotent, and safe to call from within any of the
    /// animation's own callbacks. Once this returns, no further callback
    /// from the animation will ever fire.
    pub fn cancel(&self) {
        self.finished.set(true);
    }

    /// True once the animation has completed or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }
}

/// A single timed task. Owned by the [`Animator`](crate::Animator) that
/// scheduled it; external code only ever holds an [`AnimationHandle`].
pub struct Animation {
    duration: f64,
    start_time: Option<f64>,
    finished: Rc<Cell<bool>>,
    start: Option<FrameCallback>,
    tick: Option<FrameCallback>,
    end: Option<FrameCallback>,
}

impl Animation {
    /// The single per-frame step. Returns true once the animation is
    /// finished (the caller removes it from the active set).
    ///
    /// The first call never ticks: it only records `now` as the start
    /// timestamp and fires the start callback, so at least one frame
    /// boundary separates scheduling from the first interpolated tick.
    /// Subsequent calls tick at `elapsed / duration` until `elapsed`
    /// reaches the duration, at which point the end callback fires with
    /// `1.0` and the animation becomes terminal.
    pub fn advance(&mut self, now: f64) -> bool {
        if self.finished.get() {
            // Cancelled (or a stray call after completion): drop the
            // callbacks so nothing can fire, report finished.
            self.release();
            return true;
        }

        match self.start_time {
            None => {
                self.start_time = Some(now);
                if let Some(f) = self.start.as_mut() {
                    f(0.0);
                }
                false
            }
            Some(start) => {
                let elapsed = now - start;
                if elapsed < self.duration {
                    if let Some(f) = self.tick.as_mut() {
                        f(elapsed / self.duration);
                    }
                    false
                } else {
                    if let Some(f) = self.end.as_mut() {
                        f(1.0);
                    }
                    self.finished.set(true);
                    self.release();
                    true
                }
            }
        }
    }

    fn release(&mut self) {
        self.start = None;
        self.tick = None;
        self.end = None;
    }
}
