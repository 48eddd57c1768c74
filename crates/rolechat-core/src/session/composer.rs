//! Pending input state: the urgent toggle for the next message.

use crate::error::{ChatError, Result};
use crate::role::Role;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composer {
    urgent: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn urgent(&self) -> bool {
        self.urgent
    }

    /// Sets the urgent flag on behalf of `role`.
    ///
    /// Turning the flag off is always allowed.
    pub fn set_urgent(&mut self, role: Role, urgent: bool) -> Result<()> {
        if urgent && !role.urgent_eligible() {
            return Err(ChatError::UrgentNotAllowed(role));
        }
        self.urgent = urgent;
        Ok(())
    }

    /// Flips the urgent flag on behalf of `role`, returning the new value.
    pub fn toggle_urgent(&mut self, role: Role) -> Result<bool> {
        self.set_urgent(role, !self.urgent)?;
        Ok(self.urgent)
    }

    /// Returns the current flag and resets it.
    pub fn take_urgent(&mut self) -> bool {
        std::mem::take(&mut self.urgent)
    }

    pub fn reset(&mut self) {
        self.urgent = false;
    }
}
