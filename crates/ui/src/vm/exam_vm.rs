use quiz_core::model::{ExamResult, Question};
use services::{ExamPhase, ExamService, ExamSession};

use crate::views::ViewError;

/// User actions the exam screen can dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamIntent {
    Select(usize),
    Submit,
    ToggleTranslations,
    Advance,
}

/// What happened after applying an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamOutcome {
    Continue,
    Completed(ExamResult),
}

/// View model owning the exam session for the screen's lifetime.
pub struct ExamVm {
    session: ExamSession,
}

impl ExamVm {
    #[must_use]
    pub fn new(session: ExamSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn phase(&self) -> ExamPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.session.position()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.total_questions()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.session.selected()
    }

    #[must_use]
    pub fn show_translations(&self) -> bool {
        self.session.show_translations()
    }

    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.session.last_answer_correct()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.session.is_last_question()
    }

    /// Progress fraction for the progress bar, in `[0, 1]`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.session.progress().fraction()
    }

    /// Apply a user intent to the session.
    ///
    /// Invalid intents for the current phase fall through as no-ops, so the
    /// outcome is `Continue` unless the completing advance happened.
    pub fn apply(&mut self, service: &ExamService, intent: ExamIntent) -> ExamOutcome {
        match intent {
            ExamIntent::Select(index) => {
                self.session.select_option(index);
            }
            ExamIntent::Submit => {
                self.session.submit_answer();
            }
            ExamIntent::ToggleTranslations => {
                self.session.toggle_translations();
            }
            ExamIntent::Advance => {
                if let Some(result) = service.advance(&mut self.session) {
                    return ExamOutcome::Completed(result);
                }
            }
        }
        ExamOutcome::Continue
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyExam` when the question source is empty and
/// `ViewError::Unknown` for other failures.
pub fn start_exam(service: &ExamService) -> Result<ExamVm, ViewError> {
    let session = match service.start_exam() {
        Ok(session) => session,
        Err(services::ExamError::Empty) => return Err(ViewError::EmptyExam),
        Err(_) => return Err(ViewError::Unknown),
    };

    Ok(ExamVm::new(session))
}
