//! Core state for a role-switching chat: the active role, the transcript
//! and the display attributes derived from them.
//!
//! ```
//! use rolechat_core::{ChatConfig, ChatSession, Role};
//!
//! let mut session = ChatSession::new(&ChatConfig::default());
//! session.select_role(Role::Center);
//! session.toggle_urgent().unwrap();
//! session.send("Need review").unwrap();
//!
//! let last = session.transcript().last().unwrap();
//! assert_eq!(last.role(), Role::Center);
//! assert!(last.priority());
//! ```

pub mod config;
pub mod error;
pub mod presentation;
pub mod role;
pub mod session;

pub use config::ChatConfig;
pub use error::{ChatError, Result};
pub use presentation::{Alignment, MessageView, Presenter, TranscriptView};
pub use role::{Accent, Role, RoleProfile};
pub use session::{ChatSession, Message, MessageId, Transcript};
