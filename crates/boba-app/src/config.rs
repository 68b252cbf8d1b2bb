//! Widget configuration.

use std::time::Duration;

/// Greeting seeded as the first assistant message.
pub const DEFAULT_GREETING: &str = "Assalammualaikum, Hai! Aku Boba 🤖, ada yang bisa dibantu?";

/// Shown when the service answers without a usable reply.
pub const DEFAULT_EMPTY_REPLY: &str = "Boba lagi error nih 😅";

/// Shown when the request itself fails.
pub const DEFAULT_TRANSPORT_FAILURE: &str = "Server error bro 😔";

/// Delay between a reply settling and quick suggestions reappearing.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Canned prompts offered as quick suggestions.
pub const DEFAULT_QUICK_SUGGESTIONS: [&str; 4] = [
    "Sekolah apa ini?",
    "Jurusan apa saja yang ada?",
    "Bagaimana cara mendaftar?",
    "Di mana lokasi sekolah?",
];

/// Static configuration for a [`crate::Session`].
///
/// Nothing here changes after the session is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// First assistant message in every transcript.
    pub greeting: String,
    /// Fallback for a success response with an absent or blank reply.
    pub empty_reply_text: String,
    /// Fallback for network errors, timeouts, and non-success statuses.
    pub transport_failure_text: String,
    /// Canned prompts, bound to `F1`.. in order.
    pub quick_suggestions: Vec<String>,
    /// Delay before quick suggestions come back after a reply settles.
    pub settle_delay: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            empty_reply_text: DEFAULT_EMPTY_REPLY.to_string(),
            transport_failure_text: DEFAULT_TRANSPORT_FAILURE.to_string(),
            quick_suggestions: DEFAULT_QUICK_SUGGESTIONS.iter().map(ToString::to_string).collect(),
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl WidgetConfig {
    /// Override the settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    /// Override the seeded greeting.
    #[must_use]
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }
}
