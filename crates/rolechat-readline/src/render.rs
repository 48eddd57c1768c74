//! Terminal rendering of the derived views.

use colored::{ColoredString, Colorize};

use rolechat_core::presentation::{Alignment, MessageView, TranscriptView};
use rolechat_core::{Accent, Role};

/// Indentation that pushes the active role's own messages to the right.
const OWN_INDENT: &str = "                        ";

fn paint(text: &str, accent: Accent) -> ColoredString {
    match accent {
        Accent::Blue => text.blue(),
        Accent::Emerald => text.green(),
        Accent::Purple => text.magenta(),
    }
}

fn indent(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Own => OWN_INDENT,
        Alignment::Other => "",
    }
}

pub fn role_selection_screen() {
    println!("{}", "Select Your Role".bold());
    println!("{}", "Choose a role to enter the chat".bright_black());
    for (i, role) in Role::all().enumerate() {
        let profile = role.profile();
        println!(
            "  {} {}  {}",
            format!("{}.", i + 1).bright_black(),
            paint(profile.label, profile.accent).bold(),
            profile.description.bright_black()
        );
    }
    println!();
}

/// Plain-text lines for one message, without color.
pub fn message_lines(view: &MessageView<'_>) -> Vec<String> {
    let indent = indent(view.alignment);
    let badge = if view.urgent { " [URGENT]" } else { "" };

    let mut lines = vec![format!("{indent}{}{badge}  {}", view.label, view.time)];
    lines.extend(view.content.lines().map(|l| format!("{indent}  {l}")));
    lines
}

fn print_message(view: &MessageView<'_>) {
    if !colored::control::SHOULD_COLORIZE.should_colorize() {
        for line in message_lines(view) {
            println!("{line}");
        }
        return;
    }

    let indent = indent(view.alignment);

    let mut header = format!("{indent}{}", paint(view.label, view.accent).bold());
    if view.urgent {
        header.push_str(&format!(" {}", "URGENT".on_red().white().bold()));
    }
    header.push_str(&format!("  {}", view.time.bright_black()));
    println!("{header}");

    for line in view.content.lines() {
        let body = match (view.alignment, view.urgent) {
            (_, true) => line.bright_red(),
            (Alignment::Own, false) => line.bright_white(),
            (Alignment::Other, false) => line.normal(),
        };
        println!("{indent}  {body}");
    }
}

pub fn transcript(view: &TranscriptView<'_>) {
    let profile = view.active.profile();
    println!();
    println!(
        "{}  {}  {}",
        "=== Multi-Role Chat ===".bright_magenta().bold(),
        paint(&view.header, profile.accent),
        format!("online: {}", view.online_count).bright_black()
    );

    if let Some(placeholder) = view.placeholder {
        println!("{}", placeholder.bright_black());
    }
    for message in &view.messages {
        print_message(message);
    }
    println!();
}

pub fn help(view: &TranscriptView<'_>) {
    println!("{}", "Type a message and press Enter to send.".bright_black());
    if view.urgent_toggle {
        println!("{}", "  /urgent  mark the next message as urgent".bright_black());
    }
    if view.active.can_clear_transcript() {
        println!("{}", "  /clear   delete all messages".bright_black());
    }
    println!("{}", "  /switch  go back to role selection".bright_black());
    println!("{}", "  /online  list online roles".bright_black());
    println!("{}", "  quit     exit".bright_black());
}

pub fn online(roles: &[Role]) {
    println!("{}", format!("{} online", roles.len()).bright_black());
    for role in roles {
        let profile = role.profile();
        println!("  {}", paint(profile.label, profile.accent));
    }
}

pub fn prompt(active: Role, urgent: bool) -> String {
    if urgent {
        format!("{active} [urgent]> ")
    } else {
        format!("{active}> ")
    }
}
