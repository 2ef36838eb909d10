mod progress;
mod session;
mod workflow;

// Public API of the exam subsystem.
pub use crate::error::ExamError;
pub use progress::ExamProgress;
pub use session::{ExamPhase, ExamSession, FEEDBACK_DELAY};
pub use workflow::ExamService;
