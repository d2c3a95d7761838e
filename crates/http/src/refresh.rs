//! Single-flight coordination for the token refresh call

use std::sync::Mutex;

use log::debug;
use tokio::sync::oneshot;

/// Outcome of a settled refresh: the fresh access token, or the failure
/// message every queued caller is rejected with.
pub type RefreshOutcome = Result<String, String>;

/// What a caller joining the refresh is handed.
#[derive(Debug)]
pub enum RefreshTicket {
    /// This caller runs the refresh and must report back via
    /// [`RefreshCoordinator::settle`].
    Leader,
    /// A refresh is already in flight; await its outcome.
    Follower(oneshot::Receiver<RefreshOutcome>),
}

/// Single-flight gate for the token refresh call.
///
/// The first caller to observe an expired token becomes the leader and
/// performs the refresh; every other caller that arrives while it is in
/// flight parks on a oneshot receiver and is woken with the leader's
/// outcome. At most one refresh is ever in flight.
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    refreshing: bool,
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the refresh. Exactly one concurrent caller gets
    /// [`RefreshTicket::Leader`].
    pub fn join(&self) -> RefreshTicket {
        let mut state = self.state.lock().unwrap();
        if state.refreshing {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            debug!(
                "refresh already in flight, queueing request ({} waiting)",
                state.waiters.len()
            );
            RefreshTicket::Follower(rx)
        } else {
            state.refreshing = true;
            RefreshTicket::Leader
        }
    }

    /// Settle the in-flight refresh and wake every queued waiter.
    ///
    /// Each waiter is resolved exactly once and the queue is empty
    /// afterwards, whatever the outcome.
    pub fn settle(&self, outcome: RefreshOutcome) {
        let waiters = {
            let mut state = self.state.lock().unwrap();
            state.refreshing = false;
            std::mem::take(&mut state.waiters)
        };
        if !waiters.is_empty() {
            debug!("releasing {} queued request(s)", waiters.len());
        }
        for waiter in waiters {
            // A dropped receiver just means that caller went away.
            let _ = waiter.send(outcome.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_joiner_leads_rest_follow() {
        let coordinator = RefreshCoordinator::new();

        assert!(matches!(coordinator.join(), RefreshTicket::Leader));
        assert!(matches!(coordinator.join(), RefreshTicket::Follower(_)));
        assert!(matches!(coordinator.join(), RefreshTicket::Follower(_)));
    }

    #[test]
    fn settle_wakes_every_waiter_once() {
        tokio_test::block_on(async {
            let coordinator = RefreshCoordinator::new();

            let RefreshTicket::Leader = coordinator.join() else {
                panic!("expected leader");
            };
            let RefreshTicket::Follower(rx1) = coordinator.join() else {
                panic!("expected follower");
            };
            let RefreshTicket::Follower(rx2) = coordinator.join() else {
                panic!("expected follower");
            };

            coordinator.settle(Ok("fresh".to_string()));

            assert_eq!(rx1.await.unwrap(), Ok("fresh".to_string()));
            assert_eq!(rx2.await.unwrap(), Ok("fresh".to_string()));

            // Settled: the next joiner leads a new flight.
            assert!(matches!(coordinator.join(), RefreshTicket::Leader));
        });
    }

    #[test]
    fn settle_propagates_failure_to_waiters() {
        tokio_test::block_on(async {
            let coordinator = RefreshCoordinator::new();

            let RefreshTicket::Leader = coordinator.join() else {
                panic!("expected leader");
            };
            let RefreshTicket::Follower(rx) = coordinator.join() else {
                panic!("expected follower");
            };

            coordinator.settle(Err("session ended".to_string()));
            assert_eq!(rx.await.unwrap(), Err("session ended".to_string()));
        });
    }
}
