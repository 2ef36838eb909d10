use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::grading::{self, GradeReport};
use quiz_core::model::ExamResult;

use crate::error::ExamError;
use crate::question_bank::QuestionSource;
use super::session::ExamSession;

/// Orchestrates exam start, advancement and grading.
#[derive(Clone)]
pub struct ExamService {
    clock: Clock,
    source: Arc<dyn QuestionSource>,
}

impl ExamService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn QuestionSource>) -> Self {
        Self { clock, source }
    }

    /// Start a new exam over the configured question source.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Empty` if the source yields no questions and
    /// propagates question construction failures.
    pub fn start_exam(&self) -> Result<ExamSession, ExamError> {
        let questions = self.source.load()?;
        ExamSession::new(questions, self.clock.now())
    }

    /// Advance past the current feedback, stamping completion time from the
    /// service clock. Returns the final result on the completing advance.
    pub fn advance(&self, session: &mut ExamSession) -> Option<ExamResult> {
        session.advance(self.clock.now())
    }

    /// Grade a completed exam result.
    ///
    /// # Errors
    ///
    /// Propagates `GradeError` for a zero total or an out-of-range score.
    pub fn grade_result(&self, result: &ExamResult) -> Result<GradeReport, ExamError> {
        Ok(grading::grade_result(result)?)
    }
}

impl std::fmt::Debug for ExamService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExamService")
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
