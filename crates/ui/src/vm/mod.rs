mod exam_vm;
mod result_vm;

pub use exam_vm::{ExamIntent, ExamOutcome, ExamVm, start_exam};
pub use result_vm::{ResultVm, map_result};
