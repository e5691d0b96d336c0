//! # Actions
//!
//! Everything that can happen to the controller becomes an `Action`.
//! User edits the question? That's `Action::UpdateQuestion(text)`.
//! The service replies? That's `Action::ExchangeCompleted(outcome)`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing any I/O the caller must perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::exchange::{Exchange, Outcome};
use crate::core::state::QueryController;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UpdateQuestion(String),
    Submit,
    ExchangeCompleted(Outcome),
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Send this exchange to the answer service and report back with
    /// `Action::ExchangeCompleted`.
    Dispatch(Exchange),
    Quit,
}

pub fn update(controller: &mut QueryController, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::UpdateQuestion(text) => {
            controller.update_question(text);
            Effect::None
        }
        Action::Submit => match controller.begin_exchange() {
            Some(exchange) => Effect::Dispatch(exchange),
            None => Effect::None,
        },
        Action::ExchangeCompleted(outcome) => {
            controller.finish_exchange(outcome);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exchange::{CONNECT_ERROR_ANSWER, SERVER_ERROR_ANSWER};

    fn controller_with(question: &str) -> QueryController {
        let mut controller = QueryController::new();
        update(&mut controller, Action::UpdateQuestion(question.to_string()));
        controller
    }

    #[test]
    fn test_submit_dispatches_once() {
        let mut controller = controller_with("How can I reset my password?");

        let effect = update(&mut controller, Action::Submit);
        assert_eq!(
            effect,
            Effect::Dispatch(Exchange {
                question: "How can I reset my password?".to_string()
            })
        );

        // Second submit while busy: no new exchange
        assert_eq!(update(&mut controller, Action::Submit), Effect::None);
        assert!(controller.is_busy());
    }

    #[test]
    fn test_submit_blank_has_no_effect() {
        let mut controller = controller_with("   ");
        assert_eq!(update(&mut controller, Action::Submit), Effect::None);
        assert!(!controller.is_busy());
        assert_eq!(controller.question(), "   ");
    }

    #[test]
    fn test_every_outcome_returns_to_idle() {
        let outcomes = [
            (
                Outcome::Answered("Visit Settings > Security.".to_string()),
                "Visit Settings > Security.",
            ),
            (Outcome::ServerRejection, SERVER_ERROR_ANSWER),
            (Outcome::TransportFailure, CONNECT_ERROR_ANSWER),
        ];

        for (outcome, expected) in outcomes {
            let mut controller = controller_with("How can I reset my password?");
            update(&mut controller, Action::Submit);

            let effect = update(&mut controller, Action::ExchangeCompleted(outcome));

            assert_eq!(effect, Effect::None);
            assert!(!controller.is_busy());
            assert_eq!(controller.answer(), expected);
            assert_eq!(controller.question(), "How can I reset my password?");
        }
    }

    #[test]
    fn test_cycles_indefinitely() {
        let mut controller = controller_with("again");
        for round in 0..5 {
            let effect = update(&mut controller, Action::Submit);
            assert!(matches!(effect, Effect::Dispatch(_)), "round {round}");
            update(
                &mut controller,
                Action::ExchangeCompleted(Outcome::Answered(format!("answer {round}"))),
            );
        }
        assert_eq!(controller.answer(), "answer 4");
    }

    #[test]
    fn test_quit() {
        let mut controller = QueryController::new();
        assert_eq!(update(&mut controller, Action::Quit), Effect::Quit);
    }
}
