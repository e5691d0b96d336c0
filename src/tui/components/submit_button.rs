//! # SubmitButton Component
//!
//! One-line button under the question box. Stateless: label and enabled
//! flag are props computed from the controller every frame.
//!
//! - Ready: `[ Ask ]`
//! - Working: `[ ⠹ Thinking... ]` with a braille spinner
//! - Disabled (busy or blank question): rendered dim

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
    pub busy: bool,
    pub spinner_frame: usize,
}

impl SubmitButton {
    pub fn new(label: &'static str, enabled: bool, busy: bool, spinner_frame: usize) -> Self {
        Self {
            label,
            enabled,
            busy,
            spinner_frame,
        }
    }

    fn text(&self) -> String {
        if self.busy {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            format!("[ {} {} ]", spinner, self.label)
        } else {
            format!("[ {} ]", self.label)
        }
    }

    fn style(&self) -> Style {
        if self.enabled {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button = Paragraph::new(self.text())
            .style(self.style())
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}
