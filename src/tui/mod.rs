//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form and
//! result, and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Exchange Flow
//!
//! ```text
//! Enter ─► update(Submit) ─► Effect::Dispatch(exchange)
//!                                   │
//!                          tokio::spawn(ask)
//!                                   │
//!        update(ExchangeCompleted) ◄┘  (via mpsc, always exactly once)
//! ```
//!
//! ## Redraw Strategy
//!
//! - **Busy**: draws every ~80ms so the button spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::exchange::{Exchange, Outcome, SettleGuard};
use crate::core::state::QueryController;
use crate::service::AnswerService;
use crate::tui::component::EventHandler;
use crate::tui::components::{QuestionBox, QuestionEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub question_box: QuestionBox,
    pub answer_scroll: ScrollViewState,
    /// Shown in the title bar
    pub endpoint: String,
}

impl TuiState {
    pub fn new(endpoint: String) -> Self {
        Self {
            question_box: QuestionBox::new(),
            answer_scroll: ScrollViewState::default(),
            endpoint,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Enter insert a newline; terminals
        // without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(endpoint: String, service: Arc<dyn AnswerService>) -> std::io::Result<()> {
    let mut controller = QueryController::new();
    let mut tui = TuiState::new(endpoint);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Exchange outcomes come back from the request task on this channel
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        let animating = controller.is_busy();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &controller, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit => {
                    if update(&mut controller, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::ScrollUp => tui.answer_scroll.scroll_up(),
                TuiEvent::ScrollDown => tui.answer_scroll.scroll_down(),
                TuiEvent::ScrollPageUp => tui.answer_scroll.scroll_page_up(),
                TuiEvent::ScrollPageDown => tui.answer_scroll.scroll_page_down(),
                _ => {
                    let Some(question_event) = tui.question_box.handle_event(&event) else {
                        continue;
                    };
                    let action = match question_event {
                        QuestionEvent::Changed(text) => Action::UpdateQuestion(text),
                        QuestionEvent::Submit => Action::Submit,
                    };
                    if let Effect::Dispatch(exchange) = update(&mut controller, action) {
                        tui.answer_scroll = ScrollViewState::default();
                        spawn_exchange(service.clone(), exchange, tx.clone());
                    }
                }
            }
        }

        if should_quit {
            if controller.is_busy() {
                info!("Quitting with an exchange still in flight");
            }
            break;
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut controller, action);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs one exchange on a tokio task and reports its outcome as an action.
///
/// The `SettleGuard` guarantees an `ExchangeCompleted` is sent even if the
/// task panics, so the controller can never stay busy.
fn spawn_exchange(service: Arc<dyn AnswerService>, exchange: Exchange, tx: mpsc::Sender<Action>) {
    info!("Spawning exchange via {} service", service.name());
    tokio::spawn(async move {
        let guard = SettleGuard::new(move |outcome: Outcome| {
            if tx.send(Action::ExchangeCompleted(outcome)).is_err() {
                warn!("Failed to send exchange outcome: receiver dropped");
            }
        });
        let outcome = Outcome::from(service.ask(&exchange.question).await);
        guard.settle(outcome);
    });
}
