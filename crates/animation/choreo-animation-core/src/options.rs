//! Options accepted at node creation and at play time.

use serde::{Deserialize, Serialize};

/// Options a node is created with. The registry passes these to factories;
/// the base node seeds its own overrides from them and keeps them around for
/// factories that read extra context later.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationOptions {
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub easing: Option<String>,
    #[serde(default)]
    pub reversed: bool,
}

/// Per-play overrides. A duration given here wins over inherited durations
/// but loses to a node's own override.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayOptions {
    #[serde(default)]
    pub duration: Option<f64>,
}

impl PlayOptions {
    pub fn with_duration(ms: f64) -> Self {
        Self { duration: Some(ms) }
    }
}
