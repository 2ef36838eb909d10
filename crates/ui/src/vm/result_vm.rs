use quiz_core::grading::{self, GradeLetter};

use crate::views::ViewError;

/// Display fields for the result screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub grade_label: &'static str,
    pub grade_class: &'static str,
    pub percentage: u32,
    pub message: &'static str,
    pub score: u32,
    pub total: u32,
}

/// Map a final score/total pair to its graded display form.
///
/// # Errors
///
/// Returns `ViewError::Unknown` when grading rejects the pair (zero total
/// or score above total), which only happens for a tampered route.
pub fn map_result(score: u32, total: u32) -> Result<ResultVm, ViewError> {
    let report = grading::grade(score, total).map_err(|_| ViewError::Unknown)?;
    let letter = report.letter();

    Ok(ResultVm {
        grade_label: letter.label(),
        grade_class: grade_class(letter),
        percentage: report.percentage(),
        message: report.message(),
        score,
        total,
    })
}

fn grade_class(letter: GradeLetter) -> &'static str {
    match letter {
        GradeLetter::APlus | GradeLetter::A => "grade grade--excellent",
        GradeLetter::B => "grade grade--good",
        GradeLetter::C => "grade grade--fair",
        GradeLetter::D => "grade grade--pass",
        GradeLetter::F => "grade grade--fail",
    }
}
