use tracing::{debug, info_span, warn, Span};
use uuid::Uuid;

use super::composer::Composer;
use super::message::Message;
use super::role_context::RoleContext;
use super::transcript::Transcript;
use crate::config::ChatConfig;
use crate::error::{ChatError, Result};
use crate::presentation::{Presenter, TranscriptView, ONLINE_ROLES};
use crate::role::Role;

/// The explicit state container for one chat session.
///
/// Owns the active role, the transcript and the pending urgent toggle.
/// The methods here are the only way to mutate any of them; the role
/// selection screen and the chat screen both drive the session through
/// this type.
#[derive(Debug)]
pub struct ChatSession {
    id: String,
    roles: RoleContext,
    transcript: Transcript,
    composer: Composer,
    presenter: Presenter,
    span: Span,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}

impl ChatSession {
    /// Creates a session with no role selected.
    ///
    /// The transcript is seeded with the example conversation unless
    /// `config.transcript.seed` is off.
    pub fn new(config: &ChatConfig) -> Self {
        let id = Uuid::new_v4().to_string();
        let span = info_span!("chat_session", session_id = %id);

        let mut transcript =
            Transcript::new().with_trim_content(config.transcript.trim_content);
        if config.transcript.seed {
            transcript.seed(chrono::Utc::now());
        }

        span.in_scope(|| debug!(seeded = transcript.len(), "session created"));

        Self {
            id,
            roles: RoleContext::new(),
            transcript,
            composer: Composer::new(),
            presenter: Presenter::new(config.display.time_format.clone()),
            span,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn active_role(&self) -> Option<Role> {
        self.roles.active()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The urgent flag that the next `send` will use.
    pub fn urgent_pending(&self) -> bool {
        self.composer.urgent()
    }

    /// Roles shown as online.
    pub fn online_roles(&self) -> &'static [Role] {
        &ONLINE_ROLES
    }

    // ============================================================================
    // Role context
    // ============================================================================

    /// Makes `role` the active role. Existing messages keep their authors.
    pub fn select_role(&mut self, role: Role) {
        let _guard = self.span.enter();
        if self.roles.select(role) != Some(role) {
            self.composer.reset();
        }
    }

    /// Leaves the chat screen and goes back to role selection.
    ///
    /// The transcript stays as it is for the rest of the session.
    pub fn switch_role(&mut self) -> Option<Role> {
        let _guard = self.span.enter();
        self.composer.reset();
        self.roles.clear()
    }

    fn require_role(&self) -> Result<Role> {
        self.roles.active().ok_or(ChatError::NoActiveRole)
    }

    // ============================================================================
    // Composer
    // ============================================================================

    /// Flips the urgent flag for the next message, returning the new value.
    pub fn toggle_urgent(&mut self) -> Result<bool> {
        let _guard = self.span.enter();
        let role = self.require_role()?;
        self.composer.toggle_urgent(role).inspect_err(|e| warn!(%e, "urgent toggle rejected"))
    }

    pub fn set_urgent(&mut self, urgent: bool) -> Result<()> {
        let _guard = self.span.enter();
        let role = self.require_role()?;
        self.composer.set_urgent(role, urgent).inspect_err(|e| warn!(%e, "urgent flag rejected"))
    }

    // ============================================================================
    // Transcript
    // ============================================================================

    /// Sends `content` as the active role, using and then resetting the
    /// pending urgent flag.
    ///
    /// Blank content is ignored: the result is `Ok(None)` and the urgent
    /// flag is kept for the next attempt.
    pub fn send(&mut self, content: &str) -> Result<Option<&Message>> {
        let _guard = self.span.enter();
        let role = self.require_role()?;
        if content.trim().is_empty() {
            debug!("blank message ignored");
            return Ok(None);
        }

        let urgent = self.composer.take_urgent();
        Ok(self.transcript.append_at(role, content, urgent, chrono::Utc::now()))
    }

    /// Sends on behalf of an explicit role, checking it against the active one.
    pub fn send_as(&mut self, role: Role, content: &str, urgent: bool) -> Result<Option<&Message>> {
        let _guard = self.span.enter();
        let active = self.require_role()?;
        if role != active {
            warn!(%active, claimed = %role, "send rejected: role mismatch");
            return Err(ChatError::RoleMismatch {
                active,
                claimed: role,
            });
        }
        if urgent && !Transcript::urgent_eligible(role) {
            warn!(%role, "send rejected: urgent not allowed");
            return Err(ChatError::UrgentNotAllowed(role));
        }

        Ok(self.transcript.append_at(role, content, urgent, chrono::Utc::now()))
    }

    /// Empties the transcript. Only the admin may do this.
    pub fn clear_transcript(&mut self) -> Result<()> {
        let _guard = self.span.enter();
        let role = self.require_role()?;
        if !role.can_clear_transcript() {
            warn!(%role, "clear rejected");
            return Err(ChatError::forbidden(role, "clear the transcript"));
        }
        self.transcript.clear();
        Ok(())
    }

    // ============================================================================
    // Presentation
    // ============================================================================

    /// The chat screen for the active role, or `None` on the selection screen.
    pub fn view(&self) -> Option<TranscriptView<'_>> {
        self.roles
            .active()
            .map(|role| self.presenter.transcript_view(&self.transcript, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unseeded() -> ChatSession {
        let mut config = ChatConfig::default();
        config.transcript.seed = false;
        ChatSession::new(&config)
    }

    #[test]
    fn test_new_session_is_seeded_and_unselected() {
        let session = ChatSession::default();
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.active_role(), None);
        assert!(session.view().is_none());
        assert!(!session.id().is_empty());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(ChatSession::default().id(), ChatSession::default().id());
    }

    #[test]
    fn test_send_requires_role() {
        let mut session = unseeded();
        assert_eq!(session.send("hello").unwrap_err(), ChatError::NoActiveRole);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_send_stamps_active_role_and_resets_urgent() {
        let mut session = unseeded();
        session.select_role(Role::Center);
        assert_eq!(session.toggle_urgent(), Ok(true));

        let message = session.send("Need review").unwrap().unwrap();
        assert_eq!(message.role(), Role::Center);
        assert!(message.priority());
        assert!(!session.urgent_pending());

        let message = session.send("follow-up").unwrap().unwrap();
        assert!(!message.priority());
    }

    #[test]
    fn test_blank_send_keeps_urgent_flag() {
        let mut session = unseeded();
        session.select_role(Role::Radiologist);
        session.set_urgent(true).unwrap();

        assert_eq!(session.send("   ").unwrap(), None);
        assert!(session.urgent_pending());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_admin_cannot_mark_urgent() {
        let mut session = unseeded();
        session.select_role(Role::Admin);

        assert_eq!(
            session.toggle_urgent(),
            Err(ChatError::UrgentNotAllowed(Role::Admin))
        );
        assert_eq!(
            session.send_as(Role::Admin, "notice", true).unwrap_err(),
            ChatError::UrgentNotAllowed(Role::Admin)
        );
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_send_as_rejects_other_role() {
        let mut session = unseeded();
        session.select_role(Role::Radiologist);

        let err = session.send_as(Role::Center, "spoofed", false).unwrap_err();
        assert_eq!(
            err,
            ChatError::RoleMismatch {
                active: Role::Radiologist,
                claimed: Role::Center
            }
        );
        assert!(session.send_as(Role::Radiologist, "ok", true).unwrap().is_some());
    }

    #[test]
    fn test_only_admin_clears() {
        let mut session = ChatSession::default();
        session.select_role(Role::Center);
        assert!(matches!(
            session.clear_transcript(),
            Err(ChatError::Forbidden { role: Role::Center, .. })
        ));
        assert_eq!(session.transcript().len(), 3);

        session.select_role(Role::Admin);
        session.clear_transcript().unwrap();
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_switch_role_resets_composer() {
        let mut session = unseeded();
        session.select_role(Role::Center);
        session.set_urgent(true).unwrap();

        assert_eq!(session.switch_role(), Some(Role::Center));
        assert!(!session.urgent_pending());
        assert!(session.view().is_none());
        assert_eq!(session.toggle_urgent(), Err(ChatError::NoActiveRole));
    }

    #[test]
    fn test_reselecting_same_role_keeps_composer() {
        let mut session = unseeded();
        session.select_role(Role::Center);
        session.set_urgent(true).unwrap();
        session.select_role(Role::Center);
        assert!(session.urgent_pending());

        session.select_role(Role::Radiologist);
        assert!(!session.urgent_pending());
    }
}
