//! Terminal UI for the Boba chat widget
//!
//! A thin shell over [`boba_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`boba_app::Runtime`].
//!
//! This crate only handles terminal input and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;
pub mod view;

pub use boba_app::{Driver, KeyInput, Runtime, Session, SessionAction, SessionEvent};
pub use terminal::{TerminalDriver, TerminalError};
pub use view::ViewState;
