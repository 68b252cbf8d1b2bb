//! Session side-effects and intents.
//!
//! This module defines the [`SessionAction`] enum, which represents
//! instructions produced by the [`crate::Session`] state machine for the
//! runtime to execute.

use std::time::Duration;

use crate::Message;

/// Scroll request for the transcript view.
///
/// Scroll position is presentation state; the session only says which way to
/// move it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    /// Jump so the newest message is visible.
    ToEnd,
    /// Move one line towards older messages.
    Older,
    /// Move one line towards newer messages.
    Newer,
}

/// Actions produced by the Session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Render the widget.
    Render,

    /// Quit the application.
    Quit,

    /// Adjust the transcript scroll position.
    Scroll(Scroll),

    /// Post a user message to the assistant service.
    PostMessage {
        /// Turn this request belongs to.
        turn: u64,
        /// Text the user just sent.
        message: String,
        /// Transcript as it was before `message` was appended.
        history: Vec<Message>,
    },

    /// Deliver [`crate::SessionEvent::Settled`] for `turn` once `after` has
    /// elapsed.
    ScheduleSettle {
        /// Turn that just settled.
        turn: u64,
        /// Delay before quick suggestions come back.
        after: Duration,
    },
}
