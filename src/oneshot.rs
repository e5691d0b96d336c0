//! Non-interactive mode: ask one question, print the answer, exit.
//!
//! Drives the same `QueryController` as the TUI, through `submit()`.

use log::info;

use crate::core::state::QueryController;
use crate::service::AnswerService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneShot {
    /// The service produced an answer.
    Answered(String),
    /// The exchange failed; carries its sentinel message.
    Failed(String),
    /// Blank question, nothing was sent.
    Skipped,
}

impl OneShot {
    pub fn exit_code(&self) -> i32 {
        match self {
            OneShot::Answered(_) => 0,
            OneShot::Failed(_) => 1,
            OneShot::Skipped => 2,
        }
    }
}

pub async fn ask(service: &dyn AnswerService, question: &str) -> OneShot {
    let mut controller = QueryController::new();
    controller.update_question(question);

    if !controller.submit(service).await {
        info!("One-shot question was blank, nothing sent");
        return OneShot::Skipped;
    }

    let answer = controller.answer().to_string();
    if controller.last_answer_failed() {
        OneShot::Failed(answer)
    } else {
        OneShot::Answered(answer)
    }
}
