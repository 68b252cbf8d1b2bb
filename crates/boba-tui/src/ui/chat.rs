//! Transcript area
//!
//! Displays the conversation: assistant bubbles on the left under a "Boba"
//! label, user bubbles on the right, and a loading line while a reply is
//! pending.

use boba_app::{Message, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{ViewState, view::LOADING_DOTS};

const BOT_LABEL: &str = "Boba";
const TYPING_TEXT: &str = " sedang mengetik ";
const DOT_ACTIVE: &str = "●";
const DOT_IDLE: &str = "·";

/// Bubbles use at most this share of the width, in percent.
const BUBBLE_WIDTH_PERCENT: usize = 75;

/// Render the transcript.
pub fn render(frame: &mut Frame, session: &Session, view: &mut ViewState, area: Rect) {
    let width = usize::from(area.width);
    let bubble_width = (width * BUBBLE_WIDTH_PERCENT / 100).max(1);

    let mut lines: Vec<Line> = Vec::new();
    for message in session.transcript() {
        push_message(&mut lines, message, bubble_width);
        lines.push(Line::default());
    }
    if session.is_awaiting_reply() {
        lines.push(loading_line(view.active_dot()));
    }

    let window = view.window(lines.len(), usize::from(area.height));
    let visible: Vec<Line> = lines.into_iter().skip(window.start).take(window.len()).collect();

    frame.render_widget(Paragraph::new(visible), area);
}

fn push_message(lines: &mut Vec<Line<'static>>, message: &Message, bubble_width: usize) {
    if message.is_user() {
        let style = Style::default().fg(Color::White).bg(Color::Blue);
        for row in wrap(message.text(), bubble_width) {
            lines.push(Line::from(Span::styled(row, style)).alignment(Alignment::Right));
        }
    } else {
        lines.push(Line::from(Span::styled(
            BOT_LABEL,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        let style = Style::default().fg(Color::Black).bg(Color::Gray);
        for row in wrap(message.text(), bubble_width) {
            lines.push(Line::from(Span::styled(row, style)));
        }
    }
}

fn loading_line(active_dot: usize) -> Line<'static> {
    let mut spans = vec![
        Span::styled(BOT_LABEL, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(TYPING_TEXT, Style::default().fg(Color::DarkGray)),
    ];
    for dot in 0..LOADING_DOTS {
        let (symbol, color) =
            if dot == active_dot { (DOT_ACTIVE, Color::Gray) } else { (DOT_IDLE, Color::DarkGray) };
        spans.push(Span::styled(symbol, Style::default().fg(color)));
    }
    Line::from(spans)
}

/// Greedy word wrap to `width` display columns. Words wider than a line are
/// split.
///
/// An empty text still yields one (empty) row so every message is visible.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.lines() {
        let mut row = String::new();
        let mut row_width = 0;

        for mut word in paragraph.split_whitespace() {
            if row_width > 0 && row_width + 1 + word.width() > width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            while word.width() > width {
                if row_width > 0 {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                let (head, rest) = word.split_at(split_index(word, width));
                rows.push(head.to_string());
                word = rest;
            }
            if word.is_empty() {
                continue;
            }
            if row_width > 0 {
                row.push(' ');
                row_width += 1;
            }
            row_width += word.width();
            row.push_str(word);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

/// Byte index of the longest prefix of `word` that fits in `width` columns.
///
/// Always includes the first char, so a glyph wider than `width` still makes
/// progress.
fn split_index(word: &str, width: usize) -> usize {
    let mut used = 0;
    for (index, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if index > 0 && used + w > width {
            return index;
        }
        used += w;
    }
    word.len()
}
