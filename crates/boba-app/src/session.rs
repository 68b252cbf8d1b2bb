//! Conversation session state machine.
//!
//! This module defines the [`Session`] state machine, which owns the widget's
//! visibility, draft input, and transcript completely decoupled from I/O and
//! transport mechanics.
//!
//! This is a pure state machine: its operations and [`crate::SessionEvent`]
//! inputs produce [`crate::SessionAction`] instructions for the runtime to
//! execute.
//!
//! # Responsibilities
//!
//! - Tracks open/closed visibility (both transitions idempotent).
//! - Appends user messages synchronously and assistant replies on settle.
//! - Admits at most one in-flight request; sends while awaiting are rejected.
//! - Hides quick suggestions from send until the settle timer of the same
//!   turn fires.

use crate::{KeyInput, Message, Scroll, SessionAction, SessionEvent, WidgetConfig};

/// Conversation session state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct Session {
    /// Static configuration (greeting, fallbacks, suggestions).
    config: WidgetConfig,
    /// Append-only transcript, seeded with the greeting.
    transcript: Vec<Message>,
    /// Uncommitted user text.
    draft: String,
    /// Caret position in `draft`, in characters.
    caret: usize,
    /// Widget visibility.
    is_open: bool,
    /// True exactly while one request is in flight.
    is_awaiting_reply: bool,
    /// Gates display of quick suggestions.
    quick_suggestions_visible: bool,
    /// Turn of the in-flight or most recent request. Zero before any send.
    turn: u64,
}

impl Session {
    /// Create a closed session with the greeting as its only message.
    pub fn new(config: WidgetConfig) -> Self {
        let transcript = vec![Message::assistant(config.greeting.clone())];
        Self {
            config,
            transcript,
            draft: String::new(),
            caret: 0,
            is_open: false,
            is_awaiting_reply: false,
            quick_suggestions_visible: true,
            turn: 0,
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<SessionAction> {
        match event {
            SessionEvent::Key(key) => self.handle_key(key),
            SessionEvent::Tick => {
                // Only the loading indicator animates.
                if self.is_open && self.is_awaiting_reply {
                    vec![SessionAction::Render]
                } else {
                    vec![]
                }
            },
            SessionEvent::Resize(..) => vec![SessionAction::Render],
            SessionEvent::ReplyReceived { turn, reply } => {
                let text = if reply.trim().is_empty() {
                    tracing::warn!(turn, "assistant sent no usable reply");
                    self.config.empty_reply_text.clone()
                } else {
                    reply
                };
                self.settle(turn, text)
            },
            SessionEvent::ReplyFailed { turn, reason } => {
                tracing::warn!(turn, %reason, "assistant request failed");
                let text = self.config.transport_failure_text.clone();
                self.settle(turn, text)
            },
            SessionEvent::Settled { turn } => {
                if turn != self.turn || self.is_awaiting_reply || self.quick_suggestions_visible {
                    return vec![];
                }
                self.quick_suggestions_visible = true;
                vec![SessionAction::Render]
            },
        }
    }

    /// Show the widget. No-op if already open.
    pub fn open(&mut self) -> Vec<SessionAction> {
        if self.is_open {
            return vec![];
        }
        self.is_open = true;
        vec![SessionAction::Scroll(Scroll::ToEnd), SessionAction::Render]
    }

    /// Hide the widget. No-op if already closed.
    ///
    /// An in-flight request keeps running and still lands in the transcript.
    pub fn close(&mut self) -> Vec<SessionAction> {
        if !self.is_open {
            return vec![];
        }
        self.is_open = false;
        vec![SessionAction::Render]
    }

    /// Replace the draft. Any string is accepted; the caret moves to the end.
    pub fn update_draft(&mut self, text: impl Into<String>) -> Vec<SessionAction> {
        self.draft = text.into();
        self.caret = self.draft.chars().count();
        vec![SessionAction::Render]
    }

    /// Send `explicit` if given, otherwise the draft.
    ///
    /// Blank text and sends while a reply is pending are no-ops. Otherwise
    /// the user message is appended immediately and a
    /// [`SessionAction::PostMessage`] carries the transcript as it was before
    /// that append.
    pub fn send(&mut self, explicit: Option<String>) -> Vec<SessionAction> {
        let text = explicit.unwrap_or_else(|| self.draft.clone());
        if text.trim().is_empty() {
            return vec![];
        }
        if self.is_awaiting_reply {
            tracing::debug!(turn = self.turn, "send rejected, reply still pending");
            return vec![];
        }

        self.quick_suggestions_visible = false;
        let history = self.transcript.clone();
        self.transcript.push(Message::user(text.clone()));
        self.draft.clear();
        self.caret = 0;
        self.is_awaiting_reply = true;
        self.turn += 1;

        tracing::info!(turn = self.turn, history_len = history.len(), "posting message");

        vec![
            SessionAction::Scroll(Scroll::ToEnd),
            SessionAction::Render,
            SessionAction::PostMessage { turn: self.turn, message: text, history },
        ]
    }

    /// Send the quick suggestion at `index` (0-based).
    ///
    /// Ignored while suggestions are hidden or if `index` is out of range.
    pub fn send_suggestion(&mut self, index: usize) -> Vec<SessionAction> {
        if !self.quick_suggestions_visible {
            return vec![];
        }
        match self.config.quick_suggestions.get(index) {
            Some(prompt) => {
                let prompt = prompt.clone();
                self.send(Some(prompt))
            },
            None => vec![],
        }
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<SessionAction> {
        vec![SessionAction::Quit]
    }

    fn settle(&mut self, turn: u64, text: String) -> Vec<SessionAction> {
        if !self.is_awaiting_reply || turn != self.turn {
            tracing::warn!(turn, current = self.turn, "dropping completion for stale turn");
            return vec![];
        }
        self.transcript.push(Message::assistant(text));
        self.is_awaiting_reply = false;
        vec![
            SessionAction::Scroll(Scroll::ToEnd),
            SessionAction::Render,
            SessionAction::ScheduleSettle { turn, after: self.config.settle_delay },
        ]
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<SessionAction> {
        if key == KeyInput::Interrupt {
            return self.quit();
        }
        if !self.is_open {
            return match key {
                KeyInput::Enter => self.open(),
                KeyInput::Esc => self.quit(),
                _ => vec![],
            };
        }

        match key {
            KeyInput::Char(c) => {
                let at = self.caret_byte_index();
                self.draft.insert(at, c);
                self.caret += 1;
                vec![SessionAction::Render]
            },
            KeyInput::Backspace => {
                if self.caret > 0 {
                    self.caret -= 1;
                    let at = self.caret_byte_index();
                    self.draft.remove(at);
                }
                vec![SessionAction::Render]
            },
            KeyInput::Delete => {
                if self.caret < self.draft_len() {
                    let at = self.caret_byte_index();
                    self.draft.remove(at);
                }
                vec![SessionAction::Render]
            },
            KeyInput::Left => {
                self.caret = self.caret.saturating_sub(1);
                vec![SessionAction::Render]
            },
            KeyInput::Right => {
                self.caret = (self.caret + 1).min(self.draft_len());
                vec![SessionAction::Render]
            },
            KeyInput::Home => {
                self.caret = 0;
                vec![SessionAction::Render]
            },
            KeyInput::End => {
                self.caret = self.draft_len();
                vec![SessionAction::Render]
            },
            KeyInput::Up => vec![SessionAction::Scroll(Scroll::Older), SessionAction::Render],
            KeyInput::Down => vec![SessionAction::Scroll(Scroll::Newer), SessionAction::Render],
            KeyInput::Enter => self.send(None),
            KeyInput::Function(n) => match usize::from(n).checked_sub(1) {
                Some(index) => self.send_suggestion(index),
                None => vec![],
            },
            KeyInput::Esc => self.close(),
            KeyInput::Interrupt => self.quit(),
        }
    }

    fn draft_len(&self) -> usize {
        self.draft.chars().count()
    }

    fn caret_byte_index(&self) -> usize {
        self.draft.char_indices().nth(self.caret).map_or(self.draft.len(), |(i, _)| i)
    }

    /// Static configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Transcript, oldest first.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Current uncommitted user text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Caret position in the draft, in characters.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Widget visibility.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// True while a request is in flight.
    pub fn is_awaiting_reply(&self) -> bool {
        self.is_awaiting_reply
    }

    /// True if quick suggestions should be displayed.
    pub fn quick_suggestions_visible(&self) -> bool {
        self.quick_suggestions_visible
    }

    /// Canned prompts, in key order.
    pub fn quick_suggestions(&self) -> &[String] {
        &self.config.quick_suggestions
    }

    /// Turn of the in-flight or most recent request. Zero before any send.
    pub fn turn(&self) -> u64 {
        self.turn
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::Origin;

    fn session() -> Session {
        Session::new(WidgetConfig::default().with_greeting("greeting"))
    }

    fn open_session() -> Session {
        let mut session = session();
        let _ = session.open();
        session
    }

    fn type_text(session: &mut Session, text: &str) {
        for c in text.chars() {
            let _ = session.handle(SessionEvent::Key(KeyInput::Char(c)));
        }
    }

    fn transcript_pairs(session: &Session) -> Vec<(Origin, &str)> {
        session.transcript().iter().map(|m| (m.origin(), m.text())).collect()
    }

    #[test]
    fn starts_closed_with_greeting() {
        let session = session();

        assert!(!session.is_open());
        assert!(!session.is_awaiting_reply());
        assert!(session.quick_suggestions_visible());
        assert_eq!(transcript_pairs(&session), vec![(Origin::Assistant, "greeting")]);
    }

    #[test]
    fn open_is_idempotent() {
        let mut session = session();

        assert!(!session.open().is_empty());
        assert!(session.open().is_empty());
        assert!(session.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut session = open_session();

        assert_eq!(session.close(), vec![SessionAction::Render]);
        assert!(session.close().is_empty());
        assert!(!session.is_open());
    }

    #[test]
    fn blank_send_is_ignored() {
        let mut session = open_session();

        assert!(session.send(Some(String::new())).is_empty());
        assert!(session.send(Some("   ".into())).is_empty());
        let _ = session.update_draft(" \t ");
        assert!(session.send(None).is_empty());

        assert_eq!(session.transcript().len(), 1);
        assert!(!session.is_awaiting_reply());
        assert!(session.quick_suggestions_visible());
    }

    #[test]
    fn send_appends_user_message_and_posts_prior_history() {
        let mut session = open_session();
        let _ = session.update_draft("Sekolah apa ini?");

        let actions = session.send(None);

        assert!(matches!(actions.as_slice(), [
            SessionAction::Scroll(Scroll::ToEnd),
            SessionAction::Render,
            SessionAction::PostMessage { turn: 1, .. }
        ]));
        if let Some(SessionAction::PostMessage { message, history, .. }) = actions.last() {
            assert_eq!(message, "Sekolah apa ini?");
            assert_eq!(history, &vec![Message::assistant("greeting")]);
        }
        assert_eq!(session.transcript().len(), 2);
        assert!(session.draft().is_empty());
        assert_eq!(session.caret(), 0);
        assert!(session.is_awaiting_reply());
        assert!(!session.quick_suggestions_visible());
    }

    #[test]
    fn explicit_text_wins_over_draft_and_clears_it() {
        let mut session = open_session();
        let _ = session.update_draft("draft");

        let _ = session.send(Some("explicit".into()));

        assert_eq!(session.transcript().last(), Some(&Message::user("explicit")));
        assert!(session.draft().is_empty());
    }

    #[test]
    fn reply_completes_turn() {
        let mut session = open_session();
        let _ = session.send(Some("Sekolah apa ini?".into()));

        let actions =
            session.handle(SessionEvent::ReplyReceived { turn: 1, reply: "SMK TI Bazma".into() });

        assert_eq!(transcript_pairs(&session), vec![
            (Origin::Assistant, "greeting"),
            (Origin::User, "Sekolah apa ini?"),
            (Origin::Assistant, "SMK TI Bazma"),
        ]);
        assert!(!session.is_awaiting_reply());
        assert!(!session.quick_suggestions_visible());
        assert_eq!(actions.last(), Some(&SessionAction::ScheduleSettle {
            turn: 1,
            after: Duration::from_millis(500),
        }));
    }

    #[test]
    fn blank_reply_uses_empty_reply_fallback() {
        let mut session = open_session();
        let _ = session.send(Some("halo".into()));

        let _ = session.handle(SessionEvent::ReplyReceived { turn: 1, reply: "  ".into() });

        assert_eq!(
            session.transcript().last(),
            Some(&Message::assistant(session.config().empty_reply_text.clone()))
        );
    }

    #[test]
    fn failure_uses_transport_fallback() {
        let mut session = open_session();
        let _ = session.send(Some("halo".into()));

        let _ = session
            .handle(SessionEvent::ReplyFailed { turn: 1, reason: "connection refused".into() });

        assert_eq!(transcript_pairs(&session), vec![
            (Origin::Assistant, "greeting"),
            (Origin::User, "halo"),
            (Origin::Assistant, "Server error bro 😔"),
        ]);
        assert!(!session.is_awaiting_reply());
    }

    #[test]
    fn second_send_while_awaiting_is_rejected() {
        let mut session = open_session();

        let first = session.send(Some("satu".into()));
        let second = session.send(Some("dua".into()));

        assert!(!first.is_empty());
        assert!(second.is_empty());
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.turn(), 1);
    }

    #[test]
    fn rejected_send_keeps_draft() {
        let mut session = open_session();
        let _ = session.send(Some("satu".into()));
        let _ = session.update_draft("dua");

        assert!(session.send(None).is_empty());
        assert_eq!(session.draft(), "dua");
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut session = open_session();
        let _ = session.send(Some("satu".into()));

        let actions = session.handle(SessionEvent::ReplyReceived { turn: 7, reply: "x".into() });

        assert!(actions.is_empty());
        assert!(session.is_awaiting_reply());
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn settle_restores_suggestions() {
        let mut session = open_session();
        let _ = session.send(Some("satu".into()));
        let _ = session.handle(SessionEvent::ReplyReceived { turn: 1, reply: "ok".into() });

        let actions = session.handle(SessionEvent::Settled { turn: 1 });

        assert_eq!(actions, vec![SessionAction::Render]);
        assert!(session.quick_suggestions_visible());
    }

    #[test]
    fn stale_settle_does_not_show_suggestions_during_next_turn() {
        let mut session = open_session();
        let _ = session.send(Some("satu".into()));
        let _ = session.handle(SessionEvent::ReplyReceived { turn: 1, reply: "ok".into() });
        let _ = session.send(Some("dua".into()));

        let actions = session.handle(SessionEvent::Settled { turn: 1 });

        assert!(actions.is_empty());
        assert!(!session.quick_suggestions_visible());
    }

    #[test]
    fn close_does_not_cancel_pending_reply() {
        let mut session = open_session();
        let _ = session.send(Some("satu".into()));
        let _ = session.close();

        let _ = session.handle(SessionEvent::ReplyReceived { turn: 1, reply: "ok".into() });
        let _ = session.handle(SessionEvent::Settled { turn: 1 });

        assert_eq!(session.transcript().len(), 3);
        assert!(session.quick_suggestions_visible());
        assert!(!session.is_open());
    }

    #[test]
    fn suggestion_key_sends_prompt() {
        let mut session = open_session();

        let actions = session.handle(SessionEvent::Key(KeyInput::Function(1)));

        assert!(matches!(
            actions.last(),
            Some(SessionAction::PostMessage { message, .. }) if message == "Sekolah apa ini?"
        ));
    }

    #[test]
    fn suggestion_ignored_while_hidden_or_out_of_range() {
        let mut session = open_session();

        assert!(session.handle(SessionEvent::Key(KeyInput::Function(0))).is_empty());
        assert!(session.handle(SessionEvent::Key(KeyInput::Function(12))).is_empty());

        let _ = session.send(Some("satu".into()));
        let _ = session.handle(SessionEvent::ReplyReceived { turn: 1, reply: "ok".into() });
        assert!(session.send_suggestion(0).is_empty());
    }

    #[test]
    fn closed_widget_opens_on_enter_and_quits_on_esc() {
        let mut session = session();

        let _ = session.handle(SessionEvent::Key(KeyInput::Char('x')));
        assert!(session.draft().is_empty());

        let _ = session.handle(SessionEvent::Key(KeyInput::Enter));
        assert!(session.is_open());

        let _ = session.handle(SessionEvent::Key(KeyInput::Esc));
        assert!(!session.is_open());

        assert_eq!(session.handle(SessionEvent::Key(KeyInput::Esc)), vec![SessionAction::Quit]);
    }

    #[test]
    fn interrupt_always_quits() {
        let mut session = open_session();
        assert_eq!(session.handle(SessionEvent::Key(KeyInput::Interrupt)), vec![
            SessionAction::Quit
        ]);
    }

    #[test]
    fn editing_handles_multibyte_text() {
        let mut session = open_session();
        type_text(&mut session, "hai🤖x");

        let _ = session.handle(SessionEvent::Key(KeyInput::Left));
        let _ = session.handle(SessionEvent::Key(KeyInput::Backspace));
        assert_eq!(session.draft(), "haix");
        assert_eq!(session.caret(), 3);

        let _ = session.handle(SessionEvent::Key(KeyInput::Home));
        let _ = session.handle(SessionEvent::Key(KeyInput::Delete));
        assert_eq!(session.draft(), "aix");

        let _ = session.handle(SessionEvent::Key(KeyInput::End));
        let _ = session.handle(SessionEvent::Key(KeyInput::Right));
        assert_eq!(session.caret(), 3);
    }

    #[test]
    fn enter_sends_typed_draft() {
        let mut session = open_session();
        type_text(&mut session, "halo");

        let actions = session.handle(SessionEvent::Key(KeyInput::Enter));

        assert!(matches!(
            actions.last(),
            Some(SessionAction::PostMessage { turn: 1, message, .. }) if message == "halo"
        ));
    }

    #[test]
    fn tick_renders_only_while_loading() {
        let mut session = open_session();
        assert!(session.handle(SessionEvent::Tick).is_empty());

        let _ = session.send(Some("satu".into()));
        assert_eq!(session.handle(SessionEvent::Tick), vec![SessionAction::Render]);
    }
}
