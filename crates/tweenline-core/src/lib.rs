//! Tweenline core (host-agnostic)
//!
//! A small frame-driven animation scheduler: quartic easing and linear
//! tweening helpers, a single-animation state machine with external
//! cancellation, and an animator that advances every active animation once
//! per display-refresh callback with pre/post-frame observer hooks.
//!
//! The crate never touches a clock or a display itself; the host calls
//! [`Animator::frame`] with its own refresh timestamps.

pub mod animation;
pub mod animator;
pub mod config;
pub mod interp;

// Re-exports for consumers
pub use animation::{Animation, AnimationHandle, AnimationSpec, FrameCallback};
pub use animator::{Animator, FrameObserver};
pub use config::Config;
pub use interp::{ease_in, ease_in_out, ease_out, linear, tween, Ease, EasingFn};
