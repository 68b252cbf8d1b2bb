//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the session runtime from specific
//! presentation implementations. Each frontend implements the trait to provide
//! platform-specific input and rendering, while the generic
//! [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use crate::{Scroll, Session, SessionEvent};

/// Abstracts user-facing I/O for the session runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the terminal and in tests.
///
/// # Implementations
///
/// - **TUI**: Uses crossterm for terminal events and ratatui for rendering
/// - **Tests**: Scripted key sequences with recorded renders
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input event.
    ///
    /// Returns an event or `None` if nothing happened. May stay pending; the
    /// runtime drops and re-polls the future whenever a completion arrives.
    fn poll_event(
        &mut self,
    ) -> impl Future<Output = Result<Option<SessionEvent>, Self::Error>> + Send;

    /// Render the session state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, session: &Session) -> Result<(), Self::Error>;

    /// Adjust the transcript scroll position.
    fn scroll(&mut self, scroll: Scroll);

    /// Release platform resources.
    fn stop(&mut self);
}
