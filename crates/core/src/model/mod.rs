mod exam_result;
mod question;

pub use exam_result::ExamResult;
pub use question::{Question, QuestionError};
