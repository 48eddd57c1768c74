//! Error types for the rolechat core.

use thiserror::Error;

use crate::role::Role;

/// A shared error type for the rolechat core.
///
/// Transcript operations themselves never fail; these variants cover the
/// session controller's policy checks and configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// An operation that needs an active role was called before one was selected
    #[error("No role selected")]
    NoActiveRole,

    /// A message was attributed to a role other than the active one
    #[error("Role mismatch: active role is '{active}', message claims '{claimed}'")]
    RoleMismatch { active: Role, claimed: Role },

    /// The role is not allowed to flag messages as urgent
    #[error("Role '{0}' cannot mark messages as urgent")]
    UrgentNotAllowed(Role),

    /// The role is not allowed to perform the action
    #[error("Role '{role}' is not permitted to {action}")]
    Forbidden { role: Role, action: &'static str },

    /// A role name that is not one of the known roles
    #[error("Unknown role: '{0}'")]
    UnknownRole(String),

    /// IO error (config file access)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChatError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Forbidden error
    pub fn forbidden(role: Role, action: &'static str) -> Self {
        Self::Forbidden { role, action }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error is a role/permission policy rejection.
    ///
    /// Policy rejections leave the session untouched, so callers can report
    /// them and keep going.
    pub fn is_policy(&self) -> bool {
        matches!(
            self,
            Self::NoActiveRole
                | Self::RoleMismatch { .. }
                | Self::UrgentNotAllowed(_)
                | Self::Forbidden { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ChatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for ChatError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ChatError>`.
pub type Result<T> = std::result::Result<T, ChatError>;
