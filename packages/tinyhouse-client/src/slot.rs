//! The single state slot owned by one hook instance.
//!
//! All writes go through [`reduce`]; readers only ever see clones or watch
//! receivers. Every dispatch notifies subscribers, which is how views know
//! to re-render.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::warn;

use crate::config::OverlapPolicy;
use crate::state::{reduce, Action, RequestState};

/// Sequence number handed out when a cycle starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

pub struct StateSlot<T> {
    sender: watch::Sender<RequestState<T>>,
    issued: AtomicU64,
    policy: OverlapPolicy,
}

impl<T> StateSlot<T> {
    pub fn new(policy: OverlapPolicy) -> Self {
        let (sender, _) = watch::channel(RequestState::default());
        Self {
            sender,
            issued: AtomicU64::new(0),
            policy,
        }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Start a cycle: take a ticket and dispatch `Fetch`.
    ///
    /// The ticket is drawn under the slot's write lock so that no terminal
    /// action can interleave between numbering and dispatch.
    pub fn begin(&self) -> Ticket {
        let mut ticket = Ticket(0);
        self.sender.send_modify(|state| {
            ticket = Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1);
            apply(state, Action::Fetch);
        });
        ticket
    }

    /// Finish a cycle with `FetchSuccess` or `FetchError`.
    ///
    /// Returns `false` if the action was dropped because a newer cycle
    /// started under [`OverlapPolicy::LatestIssued`].
    pub fn settle(&self, ticket: Ticket, action: Action<T>) -> bool {
        let name = action.name();
        let applied = self.sender.send_if_modified(|state| {
            if self.policy == OverlapPolicy::LatestIssued
                && ticket.0 != self.issued.load(Ordering::SeqCst)
            {
                return false;
            }
            apply(state, action);
            true
        });

        if !applied {
            warn!(
                seq = ticket.0,
                latest = self.issued.load(Ordering::SeqCst),
                action = name,
                "Dropping terminal action from superseded request"
            );
        }
        applied
    }

    /// Number of cycles started on this slot.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.sender.subscribe()
    }
}

impl<T: Clone> StateSlot<T> {
    pub fn snapshot(&self) -> RequestState<T> {
        self.sender.borrow().clone()
    }
}

fn apply<T>(state: &mut RequestState<T>, action: Action<T>) {
    *state = reduce(std::mem::take(state), action);
}

impl<T> std::fmt::Debug for StateSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateSlot")
            .field("issued", &self.issued())
            .field("policy", &self.policy)
            .finish()
    }
}
