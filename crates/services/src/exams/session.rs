use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

use quiz_core::model::{ExamResult, Question};

use super::progress::ExamProgress;
use crate::error::ExamError;

/// How long feedback stays on screen before the exam advances on its own.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(5000);

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where the session currently is in its answer/feedback cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamPhase {
    /// Awaiting a selection and submission for the current question.
    Answering,
    /// Correctness is on display; the next advance leaves this question.
    Feedback,
    /// All questions answered. Terminal.
    Complete,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state machine for one exam attempt.
///
/// Steps through a fixed question sequence. Submitting an answer enters a
/// feedback phase during which the selection is locked; advancing moves to
/// the next question or, after the last one, completes the session.
///
/// Operations invoked in the wrong phase are silent no-ops rather than
/// errors: an invalid tap simply has no effect.
pub struct ExamSession {
    questions: Vec<Question>,
    position: usize,
    selected: Option<usize>,
    score: u32,
    phase: ExamPhase,
    last_correct: bool,
    show_translations: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl ExamSession {
    /// Create a session over a fixed question sequence.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, ExamError> {
        if questions.is_empty() {
            return Err(ExamError::Empty);
        }

        Ok(Self {
            questions,
            position: 0,
            selected: None,
            score: 0,
            phase: ExamPhase::Answering,
            last_correct: false,
            show_translations: true,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> ExamPhase {
        self.phase
    }

    /// 0-based index of the question currently shown.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn show_translations(&self) -> bool {
        self.show_translations
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, ExamPhase::Complete)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            None
        } else {
            self.questions.get(self.position)
        }
    }

    /// Whether the current question is the last one in the sequence.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.position + 1 == self.questions.len()
    }

    /// Whether the last submitted answer was correct.
    ///
    /// Only meaningful while feedback is on display; `None` otherwise.
    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        match self.phase {
            ExamPhase::Feedback => Some(self.last_correct),
            ExamPhase::Answering | ExamPhase::Complete => None,
        }
    }

    /// Returns a summary of the current exam progress.
    #[must_use]
    pub fn progress(&self) -> ExamProgress {
        ExamProgress {
            position: self.position,
            total: self.questions.len(),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// The final result, once the session has completed.
    #[must_use]
    pub fn result(&self) -> Option<ExamResult> {
        self.is_complete().then(|| self.snapshot_result())
    }

    /// Select an answer option for the current question.
    ///
    /// Ignored outside the answering phase (the selection is locked once
    /// feedback begins) and for out-of-range indices.
    pub fn select_option(&mut self, index: usize) {
        if self.phase != ExamPhase::Answering {
            return;
        }
        let Some(question) = self.questions.get(self.position) else {
            return;
        };
        if index < question.options().len() {
            self.selected = Some(index);
        }
    }

    /// Submit the selected answer and enter the feedback phase.
    ///
    /// Ignored when nothing is selected or feedback is already showing.
    pub fn submit_answer(&mut self) {
        if self.phase != ExamPhase::Answering {
            return;
        }
        let Some(selected) = self.selected else {
            return;
        };
        let Some(question) = self.questions.get(self.position) else {
            return;
        };

        self.last_correct = question.is_correct(selected);
        if self.last_correct {
            self.score += 1;
        }
        self.phase = ExamPhase::Feedback;
    }

    /// Leave the feedback phase: move to the next question, or complete the
    /// session after the last one.
    ///
    /// Returns the final result exactly once, on the advance that completes
    /// the session. Ignored outside the feedback phase.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Option<ExamResult> {
        if self.phase != ExamPhase::Feedback {
            return None;
        }

        if self.is_last_question() {
            self.phase = ExamPhase::Complete;
            self.completed_at = Some(now);
            return Some(self.snapshot_result());
        }

        self.position += 1;
        self.selected = None;
        self.phase = ExamPhase::Answering;
        None
    }

    /// Flip the bilingual display flag. Valid in any phase; never touches
    /// scoring or progression.
    pub fn toggle_translations(&mut self) {
        self.show_translations = !self.show_translations;
    }

    fn snapshot_result(&self) -> ExamResult {
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        ExamResult::new(self.score, total)
    }
}

impl fmt::Debug for ExamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExamSession")
            .field("questions_len", &self.questions.len())
            .field("position", &self.position)
            .field("selected", &self.selected)
            .field("score", &self.score)
            .field("phase", &self.phase)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;
    use quiz_core::time::fixed_now;

    fn greeting_question() -> Question {
        Question::new(
            "Wie sagt man 'hello'?",
            vec!["Hallo".to_string(), "Tschüss".to_string()],
            0,
        )
        .unwrap()
    }

    fn two_question_session() -> ExamSession {
        let questions = vec![greeting_question(), greeting_question()];
        ExamSession::new(questions, fixed_now()).unwrap()
    }

    #[test]
    fn empty_exam_returns_error() {
        let err = ExamSession::new(Vec::new(), fixed_now()).unwrap_err();
        assert!(matches!(err, ExamError::Empty));
    }

    #[test]
    fn starts_answering_first_question_with_nothing_selected() {
        let session = two_question_session();
        assert_eq!(session.phase(), ExamPhase::Answering);
        assert_eq!(session.position(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected(), None);
        assert!(session.show_translations());
        assert_eq!(session.last_answer_correct(), None);
    }

    #[test]
    fn single_question_exam_runs_to_completion() {
        let mut session = ExamSession::new(vec![greeting_question()], fixed_now()).unwrap();

        session.select_option(0);
        session.submit_answer();
        assert_eq!(session.phase(), ExamPhase::Feedback);
        assert_eq!(session.last_answer_correct(), Some(true));
        assert_eq!(session.score(), 1);

        let result = session.advance(fixed_now()).expect("result on completion");
        assert_eq!(result.score(), 1);
        assert_eq!(result.total(), 1);
        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(fixed_now()));
        assert_eq!(session.result(), Some(result));
    }

    #[test]
    fn wrong_answer_keeps_score_and_advance_resets_selection() {
        let mut session = two_question_session();

        session.select_option(1);
        session.submit_answer();
        assert_eq!(session.score(), 0);
        assert_eq!(session.last_answer_correct(), Some(false));

        assert_eq!(session.advance(fixed_now()), None);
        assert_eq!(session.position(), 1);
        assert_eq!(session.selected(), None);
        assert_eq!(session.phase(), ExamPhase::Answering);
        assert_eq!(session.last_answer_correct(), None);
    }

    #[test]
    fn selection_is_locked_during_feedback() {
        let mut session = two_question_session();
        session.select_option(0);
        session.submit_answer();

        session.select_option(1);
        assert_eq!(session.selected(), Some(0));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut session = two_question_session();
        session.select_option(5);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn submit_without_selection_is_ignored() {
        let mut session = two_question_session();
        session.submit_answer();
        assert_eq!(session.phase(), ExamPhase::Answering);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn double_submit_scores_at_most_once() {
        let mut session = two_question_session();
        session.select_option(0);
        session.submit_answer();
        session.submit_answer();
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn advance_outside_feedback_is_ignored() {
        let mut session = two_question_session();
        assert_eq!(session.advance(fixed_now()), None);
        assert_eq!(session.position(), 0);
        assert_eq!(session.phase(), ExamPhase::Answering);
    }

    #[test]
    fn completion_is_reached_exactly_once() {
        let mut session = ExamSession::new(vec![greeting_question()], fixed_now()).unwrap();
        session.select_option(0);
        session.submit_answer();

        assert!(session.advance(fixed_now()).is_some());
        assert!(session.advance(fixed_now()).is_none());
        assert!(session.is_complete());
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn toggle_translations_touches_only_the_display_flag() {
        let mut session = two_question_session();
        session.select_option(0);

        session.toggle_translations();
        assert!(!session.show_translations());
        assert_eq!(session.position(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected(), Some(0));
        assert_eq!(session.phase(), ExamPhase::Answering);

        session.toggle_translations();
        assert!(session.show_translations());
    }

    #[test]
    fn position_never_decreases_and_stays_in_range() {
        let mut session = two_question_session();
        let mut last_position = session.position();

        while !session.is_complete() {
            assert!(session.position() < session.total_questions());
            assert!(session.position() >= last_position);
            last_position = session.position();

            session.select_option(0);
            session.submit_answer();
            session.advance(fixed_now());
        }

        assert_eq!(session.result().unwrap().total(), 2);
    }

    #[test]
    fn progress_reports_position_total_and_score() {
        let mut session = two_question_session();
        session.select_option(0);
        session.submit_answer();

        let progress = session.progress();
        assert_eq!(progress.position, 0);
        assert_eq!(progress.total, 2);
        assert_eq!(progress.score, 1);
        assert!(!progress.is_complete);
        assert!((progress.fraction() - 0.5).abs() < f64::EPSILON);
    }
}
