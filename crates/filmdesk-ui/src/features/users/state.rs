//! Transient user list state.
//!
//! # Design
//! - Track only what outlives a single handler call: in-flight deletes.
//! - Clear entries when the request settles, whatever the outcome.

use std::collections::BTreeSet;

use filmdesk_api_models::UserId;

/// Users with a delete request awaiting a response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingDeletes {
    ids: BTreeSet<UserId>,
}

impl PendingDeletes {
    /// Whether a delete for `id` is outstanding.
    #[must_use]
    pub fn is_pending(&self, id: UserId) -> bool {
        self.ids.contains(&id)
    }

    /// Claim `id`; returns `false` when a request is already in flight.
    pub fn begin(&mut self, id: UserId) -> bool {
        self.ids.insert(id)
    }

    /// Release `id` once its request settles.
    pub fn finish(&mut self, id: UserId) {
        self.ids.remove(&id);
    }
}
