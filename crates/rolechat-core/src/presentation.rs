//! Display attributes derived from the transcript and the active role.
//!
//! Everything here is a pure function of `(Message, active role)`; nothing
//! borrows the transcript mutably.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use std::fmt::{self, Write};
use tracing::warn;

use crate::role::{Accent, Role};
use crate::session::{Message, MessageId, Transcript};

/// Shown in place of the transcript when it has no messages.
pub const EMPTY_PLACEHOLDER: &str = "No messages yet. Start the conversation!";

/// Roles reported as online. Nothing tracks presence, so this is every role.
pub const ONLINE_ROLES: [Role; 3] = [Role::Admin, Role::Radiologist, Role::Center];

/// Time format used when the configured one cannot be rendered.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Formats `at` with a strftime pattern, or `None` if chrono cannot render
/// the pattern (unknown or parse-only specifiers such as `%#z`).
pub fn format_time<Tz>(at: &DateTime<Tz>, pattern: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", at.format(pattern)).ok()?;
    Some(out)
}

/// Which side of the transcript a message renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Written by the active role.
    Own,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView<'a> {
    pub id: MessageId,
    pub role: Role,
    pub label: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub content: &'a str,
    pub urgent: bool,
    pub alignment: Alignment,
    /// Local wall-clock time.
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptView<'a> {
    pub active: Role,
    /// `Logged in as <label>`
    pub header: String,
    pub online_count: usize,
    /// Admin with a non-empty transcript.
    pub can_clear: bool,
    pub urgent_toggle: bool,
    pub messages: Vec<MessageView<'a>>,
    /// Set only when `messages` is empty.
    pub placeholder: Option<&'static str>,
}

/// Derives views, formatting times in `Tz`.
#[derive(Debug, Clone)]
pub struct Presenter<Tz: TimeZone = Local> {
    time_format: String,
    tz: Tz,
}

impl Presenter<Local> {
    /// A presenter that formats times in the local timezone.
    pub fn new(time_format: impl Into<String>) -> Self {
        Self::with_timezone(time_format, Local)
    }
}

impl<Tz> Presenter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    /// A presenter formatting times in `tz`.
    ///
    /// A pattern chrono cannot render is replaced by [`DEFAULT_TIME_FORMAT`].
    pub fn with_timezone(time_format: impl Into<String>, tz: Tz) -> Self {
        let mut time_format = time_format.into();
        if format_time(&chrono::Utc::now().with_timezone(&tz), &time_format).is_none() {
            warn!(%time_format, "unusable time format, falling back to {DEFAULT_TIME_FORMAT}");
            time_format = DEFAULT_TIME_FORMAT.to_string();
        }
        Self { time_format, tz }
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    pub fn time_label(&self, message: &Message) -> String {
        format_time(&message.timestamp().with_timezone(&self.tz), &self.time_format)
            .unwrap_or_default()
    }

    pub fn message_view<'a>(&self, message: &'a Message, active: Role) -> MessageView<'a> {
        let profile = message.role().profile();
        let alignment = if message.role() == active {
            Alignment::Own
        } else {
            Alignment::Other
        };

        MessageView {
            id: message.id(),
            role: message.role(),
            label: profile.label,
            icon: profile.icon,
            accent: profile.accent,
            content: message.content(),
            urgent: message.priority(),
            alignment,
            time: self.time_label(message),
        }
    }

    pub fn transcript_view<'a>(&self, transcript: &'a Transcript, active: Role) -> TranscriptView<'a> {
        let messages: Vec<MessageView<'a>> = transcript
            .iter()
            .map(|m| self.message_view(m, active))
            .collect();
        let placeholder = messages.is_empty().then_some(EMPTY_PLACEHOLDER);

        TranscriptView {
            active,
            header: format!("Logged in as {}", active.profile().label),
            online_count: ONLINE_ROLES.len(),
            can_clear: active.can_clear_transcript() && !transcript.is_empty(),
            urgent_toggle: Transcript::urgent_eligible(active),
            messages,
            placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, Utc};

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn utc_presenter() -> Presenter<Utc> {
        Presenter::with_timezone("%H:%M", Utc)
    }

    #[test]
    fn test_alignment_follows_active_role() {
        let transcript = Transcript::seeded(at("2025-03-01T09:30:00Z"));
        let view = utc_presenter().transcript_view(&transcript, Role::Radiologist);

        let alignments: Vec<Alignment> = view.messages.iter().map(|m| m.alignment).collect();
        assert_eq!(
            alignments,
            vec![Alignment::Other, Alignment::Own, Alignment::Other]
        );
        assert!(view.messages[2].urgent);
        assert_eq!(view.messages[2].label, "Center");
    }

    #[test]
    fn test_time_label_uses_timezone() {
        let mut transcript = Transcript::new();
        transcript.append_at(Role::Admin, "hi", false, at("2025-03-01T09:05:00Z"));
        let message = &transcript.messages()[0];

        assert_eq!(utc_presenter().time_label(message), "09:05");

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let presenter = Presenter::with_timezone("%H:%M", tokyo);
        assert_eq!(presenter.time_label(message), "18:05");
    }

    #[test]
    fn test_unrenderable_format_falls_back() {
        let mut transcript = Transcript::new();
        transcript.append_at(Role::Admin, "hi", false, at("2025-03-01T09:05:00Z"));

        for pattern in ["%#z", "%Q"] {
            let presenter = Presenter::with_timezone(pattern, Utc);
            assert_eq!(presenter.time_format(), DEFAULT_TIME_FORMAT);
            assert_eq!(presenter.time_label(&transcript.messages()[0]), "09:05");
        }
    }

    #[test]
    fn test_format_time_reports_failure() {
        let ts = at("2025-03-01T09:05:00Z");
        assert_eq!(format_time(&ts, "%H:%M").as_deref(), Some("09:05"));
        assert_eq!(format_time(&ts, "%#z"), None);
    }

    #[test]
    fn test_clear_offered_to_admin_with_messages() {
        let mut transcript = Transcript::seeded(at("2025-03-01T09:30:00Z"));
        let presenter = utc_presenter();

        assert!(presenter.transcript_view(&transcript, Role::Admin).can_clear);
        assert!(!presenter.transcript_view(&transcript, Role::Center).can_clear);

        transcript.clear();
        let view = presenter.transcript_view(&transcript, Role::Admin);
        assert!(!view.can_clear);
        assert_eq!(view.placeholder, Some(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_header_and_toggle() {
        let transcript = Transcript::new();
        let presenter = utc_presenter();

        let admin = presenter.transcript_view(&transcript, Role::Admin);
        assert_eq!(admin.header, "Logged in as Admin");
        assert!(!admin.urgent_toggle);
        assert_eq!(admin.online_count, 3);

        let center = presenter.transcript_view(&transcript, Role::Center);
        assert!(center.urgent_toggle);
    }

    #[test]
    fn test_view_serializes_for_frontends() {
        let transcript = Transcript::seeded(at("2025-03-01T09:30:00Z"));
        let view = utc_presenter().transcript_view(&transcript, Role::Center);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["active"], "center");
        assert_eq!(json["messages"][2]["alignment"], "own");
        assert_eq!(json["messages"][0]["time"], "09:25");
        assert!(json["placeholder"].is_null());
    }
}
