//! Session domain module.
//!
//! # Module Structure
//!
//! - `message`: Transcript message types (`Message`, `MessageId`)
//! - `transcript`: The ordered message store (`Transcript`)
//! - `role_context`: The active role (`RoleContext`)
//! - `composer`: Pending urgent toggle (`Composer`)
//! - `manager`: The session state container (`ChatSession`)

mod composer;
mod manager;
mod message;
mod role_context;
mod transcript;

// Re-export public API
pub use composer::Composer;
pub use manager::ChatSession;
pub use message::{Message, MessageId};
pub use role_context::RoleContext;
pub use transcript::Transcript;
