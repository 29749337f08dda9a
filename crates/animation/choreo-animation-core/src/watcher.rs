//! Armed completion state for one play or scrub-end cycle.
//!
//! While a transition is in flight the cycle root holds one of these: an
//! optional transition-end listener on the witness target plus the fallback
//! timer that fires if the native event never arrives. Taking the watch out
//! of the node is the cancellation flip: whichever delivery path takes it
//! first runs the finish logic, and the loser finds nothing to take.

use choreo_api_core::{Stage, TargetHandle, TimerId, WatchId};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitionWatch {
    /// Listener arm, absent when no node in the tree qualified as a witness.
    pub listener: Option<(TargetHandle, WatchId)>,
    /// Fallback timer arm, always present.
    pub timer: TimerId,
    /// Outcome flag handed to the finish fan-out when this watch resolves.
    pub should_complete: bool,
    /// Progress step the forced end pass snaps to (1 for play, 0 for a
    /// cancelled scrub).
    pub end_step: f64,
}

impl TransitionWatch {
    /// Disarm both arms at the stage. Call after taking the watch out of its
    /// node so a stale delivery of either id no-ops.
    pub fn release(self, stage: &mut dyn Stage) {
        if let Some((_, watch)) = self.listener {
            stage.unwatch_transition_end(watch);
        }
        stage.clear_timeout(self.timer);
    }

    #[inline]
    pub fn watch_id(&self) -> Option<WatchId> {
        self.listener.map(|(_, id)| id)
    }
}
