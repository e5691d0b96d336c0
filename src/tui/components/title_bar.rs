//! # TitleBar Component
//!
//! Top status line: app name, the endpoint being asked, and the exchange status.
//!
//! `"Smart Helpdesk Bot (http://localhost:8000/ask) | Ready"`
//!
//! Stateless; all fields are props set by the parent each frame.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Where questions are sent
    pub endpoint: String,
    /// Status text (e.g. "Ready", "Waiting for answer...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String) -> Self {
        Self {
            endpoint,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Smart Helpdesk Bot",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({})", self.endpoint)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
