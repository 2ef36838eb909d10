use serde::{Deserialize, Serialize};

/// Final outcome of a completed exam: how many questions were answered
/// correctly out of how many asked.
///
/// Produced exactly once when a session reaches its terminal state and
/// handed to the result presentation for grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamResult {
    score: u32,
    total: u32,
}

impl ExamResult {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}
