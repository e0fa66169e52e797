//! Tweenline data layer
//!
//! Batched interpolation of record collections on top of `tweenline-core`:
//! one animation tweens every animatable field of every record from its
//! value at scheduling to a supplied new value, and the owning collection's
//! revalidation runs exactly once per frame regardless of how many tweens
//! touched it.
//!
//! The host collection sits behind the [`TweenTarget`] trait; field
//! discovery stays on the host side and the animatable field names are
//! passed in as a plain list.

pub mod queue;
pub mod record;
pub mod tweener;

pub use queue::{RevalidateQueue, SharedTarget};
pub use record::{MemoryDataSet, TweenTarget, ValueBag};
pub use tweener::{DataTweener, TweenError, TweenOptions};
