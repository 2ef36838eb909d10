use thiserror::Error;

use crate::grading::GradeError;
use crate::model::QuestionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Grade(#[from] GradeError),
}
