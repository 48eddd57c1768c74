use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing_subscriber::EnvFilter;

use rolechat_core::{ChatSession, Role};

mod cli;
mod command;
mod helper;
mod render;
mod repl;

use cli::Cli;
use command::parse_role_choice;
use helper::CliHelper;
use repl::{handle_chat_line, Flow};

type Repl = Editor<CliHelper, DefaultHistory>;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads one line, mapping Ctrl-D to `None`.
fn read_line(rl: &mut Repl, prompt: &str) -> Result<Option<String>> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => return Ok(Some(line)),
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Runs the role selection screen until a role is picked or the user quits.
fn choose_role(rl: &mut Repl) -> Result<Option<Role>> {
    render::role_selection_screen();
    loop {
        let Some(line) = read_line(rl, "role> ")? else {
            return Ok(None);
        };
        let answer = line.trim();
        if matches!(answer, "quit" | "exit") {
            return Ok(None);
        }
        if answer.is_empty() {
            continue;
        }
        match parse_role_choice(answer) {
            Ok(role) => return Ok(Some(role)),
            Err(e) => println!("{}", format!("{e}. Enter 1-3 or a role name.").red()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config()?;
    if !config.display.color {
        colored::control::set_override(false);
    }

    let mut session = ChatSession::new(&config);
    tracing::info!(session_id = session.id(), "session started");
    if let Some(role) = cli.role {
        session.select_role(role);
    }
    if let Some(view) = session.view() {
        render::transcript(&view);
        render::help(&view);
    }

    let mut rl: Repl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    loop {
        let Some(role) = session.active_role() else {
            match choose_role(&mut rl)? {
                Some(role) => {
                    session.select_role(role);
                    if let Some(view) = session.view() {
                        render::transcript(&view);
                        render::help(&view);
                    }
                    continue;
                }
                None => break,
            }
        };

        let prompt = render::prompt(role, session.urgent_pending());
        let Some(line) = read_line(&mut rl, &prompt)? else {
            break;
        };
        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }

        let flow = handle_chat_line(&mut session, &line, |prompt| read_line(&mut rl, prompt))?;
        if flow == Flow::Quit {
            break;
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}
