//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::grading::GradeError;
use quiz_core::model::QuestionError;

/// Errors emitted by exam services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExamError {
    #[error("no questions available for exam")]
    Empty,
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Grade(#[from] GradeError),
}
