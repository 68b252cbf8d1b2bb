//! Chat endpoint wire format.
//!
//! ```json
//! // POST /api/chat
//! { "message": "Sekolah apa ini?",
//!   "history": [{ "from": "bot", "text": "Assalammualaikum, Hai!" }] }
//!
//! // 200 OK
//! { "reply": "SMK TI Bazma" }
//! ```

use boba_app::{Message, Origin};
use serde::{Deserialize, Serialize};

/// Wire encoding of [`Origin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireOrigin {
    /// `"user"`
    User,
    /// `"bot"`
    Bot,
}

impl From<Origin> for WireOrigin {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::User => Self::User,
            Origin::Assistant => Self::Bot,
        }
    }
}

/// One history entry as sent to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    /// Author.
    pub from: WireOrigin,
    /// Display text.
    pub text: String,
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        Self { from: message.origin().into(), text: message.text().to_string() }
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Text the user just sent.
    pub message: String,
    /// Prior turns, oldest first. Does not include `message`.
    pub history: Vec<WireMessage>,
}

impl ChatRequest {
    /// Build a request from the session's view of a send.
    pub fn new(message: &str, history: &[Message]) -> Self {
        Self { message: message.to_string(), history: history.iter().map(Into::into).collect() }
    }
}

/// Successful response body.
///
/// `reply` is optional on the wire; an absent or null reply decodes to
/// `None` and is treated as "no usable reply" by the session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply.
    #[serde(default)]
    pub reply: Option<String>,
}
