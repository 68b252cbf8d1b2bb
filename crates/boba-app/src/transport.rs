//! Transport trait for reaching the assistant service.
//!
//! The [`Transport`] trait is the seam between the session and whatever
//! answers user messages: the HTTP client in production, an offline canned
//! responder in demo mode, or a scripted double in tests.

use std::future::Future;

use crate::Message;

/// Sends one user message to the assistant and waits for its reply.
///
/// The runtime calls [`post_message`](Transport::post_message) exactly once
/// per accepted send and never retries. Any timeout is the implementation's
/// responsibility.
pub trait Transport: Send + Sync + 'static {
    /// Implementation-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Post `message` along with the prior `history`.
    ///
    /// Returns the reply text, which may be empty if the service answered
    /// without one.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, timeout, or a non-success status.
    fn post_message(
        &self,
        message: &str,
        history: &[Message],
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
