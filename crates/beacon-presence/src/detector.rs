//! Tracks the last successful snapshot and reports what moved.

use crate::snapshot::PresenceSnapshot;

/// What differs between two consecutive successful fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub status_changed: bool,
    pub activity_changed: bool,
}

impl Changes {
    pub fn any(&self) -> bool {
        self.status_changed || self.activity_changed
    }
}

/// Compare `current` against the previous successful snapshot.
///
/// Nothing counts as changed on the first fetch. An activity appearing
/// where there was none is not a change either; only a previous activity
/// that ended or was replaced is.
pub fn detect_change(previous: Option<&PresenceSnapshot>, current: &PresenceSnapshot) -> Changes {
    let Some(previous) = previous else {
        return Changes::default();
    };

    Changes {
        status_changed: previous.status != current.status,
        activity_changed: previous
            .activity
            .as_ref()
            .is_some_and(|prev| Some(prev) != current.activity.as_ref()),
    }
}

#[derive(Debug, Default)]
pub struct ChangeDetector {
    previous: Option<PresenceSnapshot>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff against the stored snapshot, then remember `snapshot`.
    ///
    /// Only successful fetches should be observed; a failed one leaves
    /// the stored values untouched.
    pub fn observe(&mut self, snapshot: &PresenceSnapshot) -> Changes {
        let changes = detect_change(self.previous.as_ref(), snapshot);
        self.previous = Some(snapshot.clone());
        changes
    }

    pub fn previous(&self) -> Option<&PresenceSnapshot> {
        self.previous.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Activity, ActivityKind, Status};

    fn game(name: &str) -> Option<Activity> {
        Some(Activity {
            kind: ActivityKind::Game,
            name: name.into(),
            details: None,
        })
    }

    #[test]
    fn first_observation_reports_nothing() {
        let mut detector = ChangeDetector::new();
        let changes = detector.observe(&PresenceSnapshot::new(Status::Dnd, game("Minecraft")));
        assert!(!changes.any());
        assert!(detector.previous().is_some());
    }

    #[test]
    fn identical_snapshots_report_nothing() {
        let mut detector = ChangeDetector::new();
        let snapshot = PresenceSnapshot::new(Status::Online, game("Minecraft"));
        detector.observe(&snapshot);
        assert_eq!(detector.observe(&snapshot), Changes::default());
    }

    #[test]
    fn status_change_is_reported() {
        let mut detector = ChangeDetector::new();
        detector.observe(&PresenceSnapshot::new(Status::Online, None));
        let changes = detector.observe(&PresenceSnapshot::new(Status::Dnd, None));
        assert!(changes.status_changed);
        assert!(!changes.activity_changed);
    }

    #[test]
    fn activity_starting_from_nothing_is_not_a_change() {
        let previous = PresenceSnapshot::new(Status::Online, None);
        let current = PresenceSnapshot::new(Status::Online, game("Minecraft"));
        assert!(!detect_change(Some(&previous), &current).activity_changed);
    }

    #[test]
    fn activity_ending_is_a_change() {
        let previous = PresenceSnapshot::new(Status::Online, game("Minecraft"));
        let current = PresenceSnapshot::new(Status::Online, None);
        assert!(detect_change(Some(&previous), &current).activity_changed);
    }

    #[test]
    fn activity_replaced_is_a_change() {
        let previous = PresenceSnapshot::new(Status::Online, game("Minecraft"));
        let current = PresenceSnapshot::new(Status::Online, game("Terraria"));
        assert!(detect_change(Some(&previous), &current).activity_changed);
    }

    #[test]
    fn details_change_is_an_activity_change() {
        let previous = PresenceSnapshot::new(Status::Online, game("Minecraft"));
        let mut current = previous.clone();
        if let Some(activity) = current.activity.as_mut() {
            activity.details = Some("Nether".into());
        }
        assert!(detect_change(Some(&previous), &current).activity_changed);
    }

    #[test]
    fn unknown_statuses_compare_by_raw_value() {
        let previous = PresenceSnapshot::new(Status::Unknown("a".into()), None);
        let current = PresenceSnapshot::new(Status::Unknown("b".into()), None);
        assert!(detect_change(Some(&previous), &current).status_changed);
    }
}
