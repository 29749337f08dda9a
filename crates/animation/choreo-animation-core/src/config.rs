//! Core configuration for choreo-animation-core.

use serde::{Deserialize, Serialize};

/// Timing thresholds for the play and scrub pipelines.
/// All durations are in milliseconds, matching the host clock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Durations at or below this are treated as "no perceptible transition":
    /// the node snaps straight to its end state within the staging frame.
    pub duration_min_ms: f64,

    /// Padding added to the fallback timer armed alongside the transition-end
    /// listener. The fallback fires at duration + padding if the native event
    /// never arrives.
    pub fallback_padding_ms: f64,

    /// Duration of the short transition used to land a scrub that was
    /// released away from either boundary.
    pub scrub_end_duration_ms: f64,

    /// Minimum interval between two progress writes while scrubbing.
    pub scrub_throttle_ms: f64,

    /// A scrub released within this distance of a boundary is treated as
    /// already settled and finishes immediately, no watcher armed.
    pub settle_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_min_ms: 32.0,
            fallback_padding_ms: 400.0,
            scrub_end_duration_ms: 64.0,
            scrub_throttle_ms: 16.0,
            settle_threshold: 0.05,
        }
    }
}
