//! Launcher badge
//!
//! The closed-state affordance: a small badge in the bottom-right corner
//! inviting the user to open the chat.

use boba_app::Session;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const LAUNCHER_WIDTH: u16 = 26;
const LAUNCHER_HEIGHT: u16 = 3;
const LAUNCHER_TEXT: &str = "Enter: chat dengan Boba";
const LAUNCHER_BUSY_TEXT: &str = "Boba sedang menjawab…";

/// Render the launcher badge inside `area`.
pub fn render(frame: &mut Frame, session: &Session, area: Rect) {
    let area = super::anchor_bottom_right(area, LAUNCHER_WIDTH, LAUNCHER_HEIGHT);

    // A reply can still arrive after the panel was closed.
    let text = if session.is_awaiting_reply() { LAUNCHER_BUSY_TEXT } else { LAUNCHER_TEXT };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue));
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
