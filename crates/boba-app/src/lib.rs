//! Application layer for the Boba chat widget
//!
//! Pure session state machine and generic runtime for the school assistant
//! widget, enabling deterministic testing with the same code that runs in
//! production.
//!
//! # Components
//!
//! - [`Session`]: conversation state machine (visibility, draft, transcript)
//! - [`Transport`]: trait for reaching the assistant service
//! - [`Driver`]: trait for platform-specific input and rendering
//! - [`Runtime`]: generic orchestration loop using Driver and Transport

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod config;
mod driver;
mod event;
mod input;
mod runtime;
mod session;
mod state;
mod transport;

pub use action::{Scroll, SessionAction};
pub use config::{
    DEFAULT_EMPTY_REPLY, DEFAULT_GREETING, DEFAULT_QUICK_SUGGESTIONS, DEFAULT_SETTLE_DELAY,
    DEFAULT_TRANSPORT_FAILURE, WidgetConfig,
};
pub use driver::Driver;
pub use event::SessionEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
pub use session::Session;
pub use state::{Message, Origin};
pub use transport::Transport;
