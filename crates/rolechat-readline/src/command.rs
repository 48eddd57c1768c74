//! Parsing of REPL input lines.

use rolechat_core::{ChatError, Role};

/// Slash commands offered for completion and hints.
pub const COMMANDS: [&str; 5] = ["/urgent", "/clear", "/switch", "/online", "/help"];

/// A line typed on the chat screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Plain text to send.
    Send(String),
    ToggleUrgent,
    Clear,
    Switch,
    Online,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if matches!(trimmed, "quit" | "exit") {
            return Self::Quit;
        }

        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::Send(line.to_string());
        };

        match rest.split_whitespace().next().unwrap_or("") {
            "urgent" => Self::ToggleUrgent,
            "clear" => Self::Clear,
            "switch" | "logout" => Self::Switch,
            "online" => Self::Online,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Parses a selection-screen answer: a 1-based index or a role name.
pub fn parse_role_choice(input: &str) -> Result<Role, ChatError> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| Role::all().nth(i))
            .ok_or_else(|| ChatError::UnknownRole(input.to_string()));
    }
    Role::parse(input)
}

/// Whether a confirmation answer means yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
