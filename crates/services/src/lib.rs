#![forbid(unsafe_code)]

pub mod error;
pub mod exams;
pub mod question_bank;

pub use quiz_core::Clock;

pub use error::ExamError;
pub use exams::{ExamPhase, ExamProgress, ExamService, ExamSession, FEEDBACK_DELAY};
pub use question_bank::{GermanQuestionBank, QuestionSource};
