//! UI rendering
//!
//! Rendering functions that convert Session state into terminal output using
//! ratatui widgets. Apart from recording scroll bounds in [`ViewState`], all
//! functions are pure: they take state and draw widget trees.
//!
//! The widget floats in the bottom-right corner: a small launcher badge while
//! closed, the chat panel while open.

mod chat;
mod input;
mod launcher;
mod suggestions;

use boba_app::Session;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::ViewState;

/// Bot name shown in the panel header.
pub const HEADER_TITLE: &str = " Boba (Bot Bazma) ";

/// Render the entire UI.
pub fn render(frame: &mut Frame, session: &Session, view: &mut ViewState) {
    if session.is_open() {
        render_panel(frame, session, view);
    } else {
        let area = frame.area();
        launcher::render(frame, session, area);
    }
}

/// Render the open chat panel (header, transcript, suggestions, input).
fn render_panel(frame: &mut Frame, session: &Session, view: &mut ViewState) {
    const PANEL_MAX_WIDTH: u16 = 52;
    const PANEL_MAX_HEIGHT: u16 = 26;
    const TRANSCRIPT_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;

    let area = anchor_bottom_right(frame.area(), PANEL_MAX_WIDTH, PANEL_MAX_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue))
        .title(HEADER_TITLE)
        .title_style(Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(TRANSCRIPT_MIN_HEIGHT),
            Constraint::Length(suggestions::height(session)),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(inner);

    let [transcript_area, suggestions_area, input_area] = chunks.as_ref() else {
        return;
    };

    chat::render(frame, session, view, *transcript_area);
    suggestions::render(frame, session, *suggestions_area);
    input::render(frame, session, *input_area);
}

/// Largest rect of at most `width` x `height` in the bottom-right of `area`.
fn anchor_bottom_right(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(area.right() - width, area.bottom() - height, width, height)
}
