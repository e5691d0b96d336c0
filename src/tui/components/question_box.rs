//! # QuestionBox Component
//!
//! Multi-line text entry bound to the controller's question.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, Ctrl+J newline)
//! - Handle editing (backspace, delete, cursor left/right/home/end)
//! - Emit `Changed` after every edit so the controller's question stays in sync
//! - Emit `Submit` on Enter
//!
//! Unlike a chat input, the buffer is never cleared on submit: the question
//! stays on screen next to its answer and can be edited and re-asked.
//! Whether a submit is accepted is decided by the controller, not here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use std::ops::Range;

use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (2) + horizontal padding (2)
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
pub const VERTICAL_OVERHEAD: u16 = 2;
/// Content lines shown before the box starts scrolling internally
pub const MAX_VISIBLE_LINES: u16 = 6;

const TITLE: &str = "Ask your question:";
const PLACEHOLDER: &str = "How can I reset my password?";

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionEvent {
    /// The buffer was edited; carries the full new text.
    Changed(String),
    /// Enter pressed.
    Submit,
}

pub struct QuestionBox {
    /// Mirror of the controller's question.
    pub buffer: String,
    /// Cursor position as a byte offset into `buffer`.
    cursor: usize,
}

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .word_splitter(textwrap::WordSplitter::NoHyphenation)
}

fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Byte ranges of `line` (no newlines) as wrapped rows.
///
/// Whitespace dropped at a break belongs to no row. Never empty.
fn wrap_ranges(line: &str, width: u16) -> Vec<Range<usize>> {
    if width == 0 || line.is_empty() {
        return vec![0..line.len()];
    }
    let mut pos = 0;
    let ranges: Vec<Range<usize>> = textwrap::wrap(line, wrap_options(width))
        .iter()
        .filter_map(|segment| {
            let start = pos + line[pos..].find(&**segment)?;
            pos = start + segment.len();
            Some(start..pos)
        })
        .collect();
    if ranges.is_empty() {
        vec![0..line.len()]
    } else {
        ranges
    }
}

/// Rows exactly as drawn: each logical line wrapped on its own.
fn wrapped_rows(text: &str, width: u16) -> Vec<&str> {
    text.split('\n')
        .flat_map(|line| {
            wrap_ranges(line, width)
                .into_iter()
                .map(move |range| &line[range])
        })
        .collect()
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

impl QuestionBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Box height for the current buffer, clamped to `MAX_VISIBLE_LINES` of content.
    pub fn calculate_height(&self, area_width: u16) -> u16 {
        let rows = wrapped_rows(&self.buffer, inner_width(area_width)).len();
        let rows = u16::try_from(rows).unwrap_or(u16::MAX).max(1);
        rows.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Wrapped (row, column) of the cursor inside the content area.
    ///
    /// Uses the same rows `render` draws, so whitespace dropped at a break
    /// never shifts the column.
    fn cursor_row_col(&self, width: u16) -> (u16, u16) {
        if width == 0 {
            return (0, 0);
        }
        let line_start = self.buffer[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let line_end = self.buffer[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.buffer.len());
        let rows_above = if line_start == 0 {
            0
        } else {
            wrapped_rows(&self.buffer[..line_start - 1], width).len()
        };

        let line = &self.buffer[line_start..line_end];
        let offset = self.cursor - line_start;
        let ranges = wrap_ranges(line, width);
        let index = ranges
            .iter()
            .rposition(|range| range.start <= offset)
            .unwrap_or(0);
        let row_start = ranges[index].start.min(offset);

        let col = line[row_start..offset].width().min(width as usize) as u16;
        let row = u16::try_from(rows_above + index).unwrap_or(u16::MAX);
        (row, col)
    }

    fn changed(&self) -> Option<QuestionEvent> {
        Some(QuestionEvent::Changed(self.buffer.clone()))
    }
}

impl Default for QuestionBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for QuestionBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        let (row, col) = self.cursor_row_col(width);
        let scroll = row.saturating_sub(MAX_VISIBLE_LINES - 1);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
            .title(TITLE);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let lines: Vec<Line> = wrapped_rows(&self.buffer, width)
                .into_iter()
                .map(Line::raw)
                .collect();
            Paragraph::new(lines)
                .style(Style::default().fg(Color::Green))
                .scroll((scroll, 0))
        };

        frame.render_widget(paragraph.block(block), area);

        // 1 border + 1 padding on the left, 1 border on top
        let cursor_x = area.x + 2 + col;
        let cursor_y = area.y + 1 + (row - scroll);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for QuestionBox {
    type Event = QuestionEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Terminals send CRLF in pastes on some platforms
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                None
            }
            TuiEvent::Submit => Some(QuestionEvent::Submit),
            _ => None,
        }
    }
}
