//! # AnswerPanel Component
//!
//! Shows the last answer in a scrollable bordered box.
//!
//! Answer text is rendered literally: no trimming, newlines and runs of
//! spaces kept (the backend often returns "Based on our documentation:\n\n...").
//! Answers from failed exchanges are drawn in red.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;

pub struct AnswerPanel<'a> {
    pub answer: &'a str,
    pub is_error: bool,
    pub scroll_state: &'a mut ScrollViewState,
}

impl<'a> AnswerPanel<'a> {
    pub fn new(answer: &'a str, is_error: bool, scroll_state: &'a mut ScrollViewState) -> Self {
        Self {
            answer,
            is_error,
            scroll_state,
        }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let style = if self.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        Paragraph::new(self.answer)
            .style(style)
            .wrap(Wrap { trim: false })
    }
}

/// Wrapped height of `paragraph`, saturating at `u16::MAX`.
fn content_height(paragraph: &Paragraph, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX)
}

impl Component for AnswerPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Answer:");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // -1 column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        if content_width == 0 || inner.height == 0 {
            return;
        }

        let paragraph = self.paragraph();
        let height = content_height(&paragraph, content_width);

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));

        frame.render_stateful_widget(scroll_view, inner, &mut *self.scroll_state);
    }
}
