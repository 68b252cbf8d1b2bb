//! Quick suggestions
//!
//! One row per canned prompt, labelled with the function key that sends it.
//! Hidden entirely while suggestions are not visible.

use boba_app::Session;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Rows needed for the suggestions, zero while hidden.
pub fn height(session: &Session) -> u16 {
    if session.quick_suggestions_visible() {
        u16::try_from(session.quick_suggestions().len()).unwrap_or(u16::MAX)
    } else {
        0
    }
}

/// Render the quick suggestions.
pub fn render(frame: &mut Frame, session: &Session, area: Rect) {
    if !session.quick_suggestions_visible() || area.height == 0 {
        return;
    }

    let lines: Vec<Line> = session
        .quick_suggestions()
        .iter()
        .enumerate()
        .map(|(i, prompt)| {
            Line::from(vec![
                Span::styled(
                    format!("F{}", i + 1),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(prompt.as_str(), Style::default().fg(Color::Blue)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
