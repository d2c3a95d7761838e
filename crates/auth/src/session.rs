//! Session state for the authenticated user

use crate::types::UserProfile;

/// Initialization state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl SessionStatus {
    /// Whether initialization has finished, one way or the other.
    ///
    /// Route guards must not make a render/redirect decision before this
    /// returns true.
    pub fn is_settled(&self) -> bool {
        matches!(self, SessionStatus::Succeeded | SessionStatus::Failed)
    }
}

/// Point-in-time view of the session.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub status: SessionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_terminal_statuses_are_settled() {
        assert!(!SessionStatus::Idle.is_settled());
        assert!(!SessionStatus::Loading.is_settled());
        assert!(SessionStatus::Succeeded.is_settled());
        assert!(SessionStatus::Failed.is_settled());
    }

    #[test]
    fn default_snapshot_is_anonymous_and_idle() {
        let snapshot = SessionSnapshot::default();
        assert!(snapshot.user.is_none());
        assert!(!snapshot.is_authenticated);
        assert_eq!(snapshot.status, SessionStatus::Idle);
    }
}
