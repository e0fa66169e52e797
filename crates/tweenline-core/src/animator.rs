//! Animator: the per-process scheduler that owns the active animation set
//! and the frame pump.
//!
//! The core is host-agnostic: it never requests display-refresh callbacks
//! itself. The host drives the pump by calling [`Animator::frame`] once per
//! refresh with the frame timestamp, for as long as [`Animator::is_pumping`]
//! (equivalently, the previous `frame` return value) says frames are wanted.

use log::debug;

use crate::animation::{Animation, AnimationHandle, AnimationSpec};
use crate::config::Config;

/// Frame observer, invoked once per pumped frame with the frame timestamp.
pub type FrameObserver = Box<dyn FnMut(f64)>;

/// The scheduler. Construct one per process (or per independent timeline)
/// and share it by mutable reference; it holds no external resources and
/// needs no teardown.
pub struct Animator {
    pumping: bool,
    animations: Vec<Animation>,
    before_frame: Vec<FrameObserver>,
    after_frame: Vec<FrameObserver>,
}

impl Animator {
    pub fn new(cfg: Config) -> Self {
        Self {
            pumping: false,
            animations: Vec::with_capacity(cfg.animations_capacity),
            before_frame: Vec::with_capacity(cfg.observers_capacity),
            after_frame: Vec::with_capacity(cfg.observers_capacity),
        }
    }

    /// Schedule an animation. Returns the external handle for cancellation.
    ///
    /// If the pump was stopped this raises the pumping flag; the host is
    /// expected to notice (via [`Animator::is_pumping`]) and resume calling
    /// [`Animator::frame`]. Animations scheduled between frames are first
    /// advanced by the next pump; scheduling from within a frame callback is
    /// not possible (the pump holds the exclusive borrow), which pins the
    /// same-frame-visibility question to "defer to next frame".
    pub fn animate(&mut self, spec: AnimationSpec) -> AnimationHandle {
        let (animation, handle) = spec.build();
        self.animations.push(animation);

        if !self.pumping {
            self.pumping = true;
            debug!("frame pump started ({} active)", self.animations.len());
        }

        handle
    }

    /// Register an observer invoked before the animations of every pumped
    /// frame, in registration order. Observers live for the animator's
    /// lifetime; there is no unregister.
    pub fn on_before_frame(&mut self, f: impl FnMut(f64) + 'static) {
        self.before_frame.push(Box::new(f));
    }

    /// Register an observer invoked after the animations of every pumped
    /// frame, in registration order.
    pub fn on_after_frame(&mut self, f: impl FnMut(f64) + 'static) {
        self.after_frame.push(Box::new(f));
    }

    /// Whether the host should keep requesting refresh callbacks.
    pub fn is_pumping(&self) -> bool {
        self.pumping
    }

    /// Number of animations in the active set (finished ones are removed by
    /// the pump).
    pub fn active(&self) -> usize {
        self.animations.len()
    }

    /// One pump iteration. Returns true if another frame is wanted.
    ///
    /// Order per frame: before-frame observers, then every active
    /// animation's `advance` with the *same* `now` (no per-animation clock
    /// re-sampling), then after-frame observers. Before-frame observers see
    /// the world before this frame's mutations, after-frame observers see it
    /// after. Finished animations are removed in a single forward pass;
    /// removal never skips or re-visits an element.
    pub fn frame(&mut self, now: f64) -> bool {
        for f in self.before_frame.iter_mut() {
            f(now);
        }

        self.animations.retain_mut(|animation| !animation.advance(now));

        for f in self.after_frame.iter_mut() {
            f(now);
        }

        if self.animations.is_empty() {
            if self.pumping {
                self.pumping = false;
                debug!("frame pump stopped");
            }
            false
        } else {
            true
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
