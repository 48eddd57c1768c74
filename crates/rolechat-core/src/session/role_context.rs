//! The session's active role.

use tracing::debug;

use crate::role::Role;

/// Holds exactly one active role, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleContext {
    active: Option<Role>,
}

impl RoleContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `role` the active role, replacing any previous one.
    ///
    /// Returns the role that was active before.
    pub fn select(&mut self, role: Role) -> Option<Role> {
        let previous = self.active.replace(role);
        debug!(%role, ?previous, "role selected");
        previous
    }

    /// Returns to the unselected state.
    pub fn clear(&mut self) -> Option<Role> {
        let previous = self.active.take();
        debug!(?previous, "role cleared");
        previous
    }

    pub fn active(&self) -> Option<Role> {
        self.active
    }
}
