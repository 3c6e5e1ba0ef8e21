//! Cross-page refresh signals.
//!
//! DESIGN
//! ======
//! A page that changes shared data bumps a counter; pages that display that
//! data track the counter in an `Effect` and reload. Counters only grow, so a
//! reader never misses a bump that happened before it subscribed.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshState {
    /// Bumped after a leave request is created, approved, rejected, or cancelled.
    pub leaves_seq: u64,
    /// Bumped after a role is created, renamed, or deleted, or a user's roles change.
    pub roles_seq: u64,
}

impl RefreshState {
    pub fn leaves_changed(&mut self) {
        self.leaves_seq = self.leaves_seq.wrapping_add(1);
    }

    pub fn roles_changed(&mut self) {
        self.roles_seq = self.roles_seq.wrapping_add(1);
    }
}
