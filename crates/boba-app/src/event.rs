//! Session input events.
//!
//! This module defines [`SessionEvent`], the set of inputs that drive the
//! [`crate::Session`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (Keyboard, Resize) and animation ticks.
//! - Completions of work the runtime started on the session's behalf
//!   (assistant replies and settle timers).

use crate::KeyInput;

/// Events processed by the Session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// The assistant service answered.
    ReplyReceived {
        /// Turn the reply belongs to.
        turn: u64,
        /// Reply text. May be empty if the service sent no usable reply.
        reply: String,
    },

    /// The request failed (network error, timeout, non-success status).
    ReplyFailed {
        /// Turn the failure belongs to.
        turn: u64,
        /// Error description, for logging only.
        reason: String,
    },

    /// The settle delay for `turn` has elapsed.
    Settled {
        /// Turn whose settle timer fired.
        turn: u64,
    },
}
