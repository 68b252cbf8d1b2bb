//! Observable transcript types.
//!
//! This module defines [`Message`] and [`Origin`], the entries of the
//! append-only transcript held by [`crate::Session`].
//!
//! These structures serve as the "View Model" for the widget. The transport
//! layer derives its wire encoding from them, and the presentation layer
//! renders them without further interpretation.

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Typed or selected by the person using the widget.
    User,
    /// Produced by the remote assistant (or a local fallback).
    Assistant,
}

/// A single transcript entry.
///
/// Immutable once created: the session only ever appends new messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    origin: Origin,
    text: String,
}

impl Message {
    /// Message authored by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self { origin: Origin::User, text: text.into() }
    }

    /// Message authored by the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self { origin: Origin::Assistant, text: text.into() }
    }

    /// Author of this message.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if the user wrote this message.
    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_origin() {
        assert_eq!(Message::user("hai").origin(), Origin::User);
        assert_eq!(Message::assistant("halo").origin(), Origin::Assistant);
        assert!(Message::user("x").is_user());
        assert!(!Message::assistant("x").is_user());
    }
}
