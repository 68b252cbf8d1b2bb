//! Input line
//!
//! Displays the draft with a caret, or a placeholder while the draft is empty.

use boba_app::Session;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

const PLACEHOLDER: &str = "Tanya seputar sekolah..";
const SEND_HINT: &str = " Enter: Kirim ";
const PROMPT: &str = "> ";
const PROMPT_WIDTH: u16 = 3; // border + "> "
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render the input line.
pub fn render(frame: &mut Frame, session: &Session, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(SEND_HINT);

    let available_width = usize::from(area.width.saturating_sub(PROMPT_WIDTH + RIGHT_PADDING));
    let caret = session.caret();
    let first_visible = caret.saturating_sub(available_width);

    let paragraph = if session.draft().is_empty() {
        Paragraph::new(format!("{PROMPT}{PLACEHOLDER}")).style(Style::default().fg(Color::DarkGray))
    } else {
        let visible: String =
            session.draft().chars().skip(first_visible).take(available_width).collect();
        Paragraph::new(format!("{PROMPT}{visible}")).style(Style::default().fg(Color::White))
    };

    frame.render_widget(paragraph.block(block), area);

    let cursor_offset = u16::try_from(caret - first_visible).unwrap_or(u16::MAX);
    let cursor_x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);

    frame.set_cursor_position((cursor_x.min(max_x), cursor_y));
}
