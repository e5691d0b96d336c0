use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::QueryController;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AnswerPanel, SubmitButton, TitleBar};

const HELP_TEXT: &str = "Enter: ask · Ctrl+J: newline · ↑/↓ PgUp/PgDn: scroll answer · Esc: quit";

/// Screen regions, top to bottom.
struct Areas {
    title: Rect,
    question: Rect,
    button: Rect,
    answer: Rect,
    help: Rect,
}

fn layout(area: Rect, question_height: u16) -> Areas {
    use Constraint::{Length, Min};
    let [title, question, button, answer, help] = Layout::vertical([
        Length(1),
        Length(question_height),
        Length(1),
        Min(0),
        Length(1),
    ])
    .areas(area);

    Areas {
        title,
        question,
        button,
        answer,
        help,
    }
}

fn status_message(controller: &QueryController) -> &'static str {
    if controller.is_busy() {
        "Waiting for answer..."
    } else {
        "Ready"
    }
}

pub fn draw_ui(frame: &mut Frame, controller: &QueryController, tui: &mut TuiState, spinner_frame: usize) {
    let question_height = tui.question_box.calculate_height(frame.area().width);
    let areas = layout(frame.area(), question_height);

    TitleBar::new(tui.endpoint.clone(), status_message(controller).to_string())
        .render(frame, areas.title);

    tui.question_box.render(frame, areas.question);

    SubmitButton::new(
        controller.submit_label(),
        controller.can_submit(),
        controller.is_busy(),
        spinner_frame,
    )
    .render(frame, areas.button);

    // Result display only exists once there is something to show
    if controller.has_answer() {
        AnswerPanel::new(
            controller.answer(),
            controller.last_answer_failed(),
            &mut tui.answer_scroll,
        )
            .render(frame, areas.answer);
    }

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        areas.help,
    );
}
