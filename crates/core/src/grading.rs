use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ExamResult;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while grading an exam result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GradeError {
    #[error("cannot grade an exam with zero questions")]
    ZeroTotal,

    #[error("score {score} exceeds total question count {total}")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

//
// ─── GRADE LETTER ─────────────────────────────────────────────────────────────
//

/// Letter classification derived from the percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeLetter {
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl GradeLetter {
    /// Maps a percentage to a letter. Thresholds are inclusive lower bounds.
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::APlus,
            80..=89 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            50..=59 => Self::D,
            _ => Self::F,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Encouraging message shown on the result screen. A+ and A share one.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::APlus | Self::A => "🎉 Excellent work! Outstanding performance!",
            Self::B => "👏 Good job! Well done!",
            Self::C => "👍 Fair performance. Keep practicing!",
            Self::D => "📚 You passed, but there's room for improvement.",
            Self::F => "💪 Don't give up! Study more and try again.",
        }
    }
}

impl std::fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── GRADE REPORT ─────────────────────────────────────────────────────────────
//

/// Graded view of an exam result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    percentage: u32,
    letter: GradeLetter,
}

impl GradeReport {
    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn letter(&self) -> GradeLetter {
        self.letter
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.letter.message()
    }
}

/// Grade a score against a total question count.
///
/// The percentage is the integer floor of `score / total * 100`.
///
/// # Errors
///
/// Returns `GradeError::ZeroTotal` if `total` is zero and
/// `GradeError::ScoreExceedsTotal` if `score > total`.
pub fn grade(score: u32, total: u32) -> Result<GradeReport, GradeError> {
    if total == 0 {
        return Err(GradeError::ZeroTotal);
    }
    if score > total {
        return Err(GradeError::ScoreExceedsTotal { score, total });
    }

    let percentage = score * 100 / total;
    Ok(GradeReport {
        percentage,
        letter: GradeLetter::from_percentage(percentage),
    })
}

/// Grade a completed exam result.
///
/// # Errors
///
/// Same conditions as [`grade`].
pub fn grade_result(result: &ExamResult) -> Result<GradeReport, GradeError> {
    grade(result.score(), result.total())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
