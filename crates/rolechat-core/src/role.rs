//! Chat participant roles and their display metadata.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{ChatError, Result};

/// One of the three fixed participant kinds in a chat session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    /// System administrator; may clear the transcript.
    Admin,
    /// Medical imaging specialist; may flag messages as urgent.
    Radiologist,
    /// Medical center representative; may flag messages as urgent.
    Center,
}

/// Accent color used for a role's icon and avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Accent {
    Blue,
    Emerald,
    Purple,
}

/// Display metadata for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleProfile {
    pub label: &'static str,
    pub description: &'static str,
    /// Icon key understood by the renderer.
    pub icon: &'static str,
    pub accent: Accent,
}

impl Role {
    /// Parses a role name, ignoring ASCII case and surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| ChatError::UnknownRole(name.trim().to_string()))
    }

    /// All roles in selection-screen order.
    pub fn all() -> impl Iterator<Item = Role> {
        Role::iter()
    }

    /// Whether this role may flag a message as urgent.
    pub fn urgent_eligible(self) -> bool {
        match self {
            Role::Admin => false,
            Role::Radiologist | Role::Center => true,
        }
    }

    /// Whether this role may clear the whole transcript.
    pub fn can_clear_transcript(self) -> bool {
        match self {
            Role::Admin => true,
            Role::Radiologist | Role::Center => false,
        }
    }

    pub fn profile(self) -> RoleProfile {
        match self {
            Role::Admin => RoleProfile {
                label: "Admin",
                description: "System administrator with full access",
                icon: "shield",
                accent: Accent::Blue,
            },
            Role::Radiologist => RoleProfile {
                label: "Radiologist",
                description: "Medical imaging specialist",
                icon: "stethoscope",
                accent: Accent::Emerald,
            },
            Role::Center => RoleProfile {
                label: "Center",
                description: "Medical center representative",
                icon: "building",
                accent: Accent::Purple,
            },
        }
    }
}
