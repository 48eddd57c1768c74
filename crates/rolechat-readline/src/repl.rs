//! Chat-screen line handling.

use anyhow::Result;
use colored::Colorize;

use rolechat_core::{ChatError, ChatSession};

use crate::command::{is_yes, ReplCommand};
use crate::render;

/// What the main loop should do after handling a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Result of a `/clear` request.
#[derive(Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    Cancelled,
    /// Admin asked to clear an already empty transcript.
    NothingToClear,
    Rejected(ChatError),
}

fn report(err: &ChatError) {
    if err.is_policy() {
        println!("{}", err.to_string().yellow());
    } else {
        println!("{}", err.to_string().red());
    }
}

/// Clears the transcript, asking `confirm` first when the clear is offered.
///
/// `confirm` receives the prompt and returns the answer, `None` on Ctrl-D.
pub fn clear_transcript<F>(session: &mut ChatSession, confirm: F) -> Result<ClearOutcome>
where
    F: FnOnce(&str) -> Result<Option<String>>,
{
    let offered = session.view().is_some_and(|view| view.can_clear);
    if !offered && session.active_role().is_some_and(|r| r.can_clear_transcript()) {
        return Ok(ClearOutcome::NothingToClear);
    }

    if offered {
        println!(
            "{}",
            "This action cannot be undone. This will permanently delete all chat messages."
                .yellow()
        );
        let answer = confirm("Clear all messages? [y/N] ")?;
        if !answer.as_deref().is_some_and(is_yes) {
            return Ok(ClearOutcome::Cancelled);
        }
    }

    Ok(match session.clear_transcript() {
        Ok(()) => ClearOutcome::Cleared,
        Err(e) => ClearOutcome::Rejected(e),
    })
}

fn show_transcript(session: &ChatSession) {
    if let Some(view) = session.view() {
        render::transcript(&view);
    }
}

/// Handles one chat-screen line.
pub fn handle_chat_line<F>(session: &mut ChatSession, line: &str, confirm: F) -> Result<Flow>
where
    F: FnOnce(&str) -> Result<Option<String>>,
{
    match ReplCommand::parse(line) {
        ReplCommand::Quit => return Ok(Flow::Quit),
        ReplCommand::Send(text) => match session.send(&text).map(|sent| sent.is_some()) {
            Ok(true) => show_transcript(session),
            Ok(false) => {}
            Err(e) => report(&e),
        },
        ReplCommand::ToggleUrgent => match session.toggle_urgent() {
            Ok(true) => println!("{}", "Next message will be marked urgent.".yellow()),
            Ok(false) => println!("{}", "Urgent flag removed.".bright_black()),
            Err(e) => report(&e),
        },
        ReplCommand::Clear => match clear_transcript(session, confirm)? {
            ClearOutcome::Cleared => show_transcript(session),
            ClearOutcome::Cancelled => println!("{}", "Cancelled.".bright_black()),
            ClearOutcome::NothingToClear => println!("{}", "Nothing to clear.".bright_black()),
            ClearOutcome::Rejected(e) => report(&e),
        },
        ReplCommand::Switch => {
            session.switch_role();
        }
        ReplCommand::Online => render::online(session.online_roles()),
        ReplCommand::Help => {
            if let Some(view) = session.view() {
                render::help(&view);
            }
        }
        ReplCommand::Unknown(name) => {
            println!("{}", format!("Unknown command '/{name}'. Type /help.").bright_black());
        }
    }
    Ok(Flow::Continue)
}
