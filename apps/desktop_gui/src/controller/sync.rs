//! Mutation/refresh cycle of the list view.
//!
//! `Idle -> Submitting` on a validated submission, `Submitting ->
//! AwaitingRefresh` once the transport call settles (success and failure
//! alike; the alert already communicated the outcome), `AwaitingRefresh ->
//! Idle` once the re-fetched list has been rendered. Submit affordances are
//! disabled outside `Idle`, so overlapping submissions cannot start.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    #[default]
    Idle,
    Submitting,
    AwaitingRefresh,
}

impl SyncPhase {
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    /// Enters `Submitting`. Returns false (and stays put) unless idle.
    pub fn begin_submission(&mut self) -> bool {
        if *self != Self::Idle {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// The transport call settled; the unconditional refresh is next.
    pub fn mark_settled(&mut self) {
        if *self == Self::Submitting {
            *self = Self::AwaitingRefresh;
        }
    }

    /// The refreshed list has been rendered.
    pub fn mark_refreshed(&mut self) {
        if *self == Self::AwaitingRefresh {
            *self = Self::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_idle() {
        let mut phase = SyncPhase::default();
        assert!(phase.begin_submission());
        assert_eq!(phase, SyncPhase::Submitting);
        phase.mark_settled();
        assert_eq!(phase, SyncPhase::AwaitingRefresh);
        phase.mark_refreshed();
        assert_eq!(phase, SyncPhase::Idle);
    }

    #[test]
    fn submissions_cannot_overlap() {
        let mut phase = SyncPhase::default();
        assert!(phase.begin_submission());
        assert!(!phase.begin_submission());
        phase.mark_settled();
        assert!(!phase.begin_submission());
        assert_eq!(phase, SyncPhase::AwaitingRefresh);
    }

    #[test]
    fn refresh_outside_cycle_keeps_idle() {
        // Startup and post-delete refreshes reuse the same list path; a
        // rendered list while idle must not change phase.
        let mut phase = SyncPhase::Idle;
        phase.mark_refreshed();
        assert_eq!(phase, SyncPhase::Idle);
    }
}
