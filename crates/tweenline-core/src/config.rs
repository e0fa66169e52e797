//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Capacity hints for the animator's internal vectors.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity of the active-animation set.
    pub animations_capacity: usize,
    /// Initial capacity of each observer list (before-frame and after-frame).
    pub observers_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animations_capacity: 16,
            observers_capacity: 4,
        }
    }
}
