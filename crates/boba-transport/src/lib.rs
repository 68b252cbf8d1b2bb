//! Transports for the Boba chat widget
//!
//! Implementations of [`boba_app::Transport`] that the runtime uses to reach
//! the assistant service.
//!
//! # Components
//!
//! - [`HttpTransport`]: JSON over HTTP to `POST /api/chat`
//! - [`CannedTransport`]: offline keyword responder for demo mode
//! - [`wire`]: request/response bodies of the chat endpoint

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod canned;
mod error;
mod http;
pub mod wire;

pub use canned::CannedTransport;
pub use error::TransportError;
pub use http::{DEFAULT_TIMEOUT, HttpTransport, HttpTransportConfig};
