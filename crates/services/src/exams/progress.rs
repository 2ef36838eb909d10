/// Aggregated view of exam progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamProgress {
    /// 0-based index of the question currently shown.
    pub position: usize,
    pub total: usize,
    pub score: u32,
    pub is_complete: bool,
}

impl ExamProgress {
    /// Fraction of the exam reached so far, including the current question.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.position + 1) as f64 / self.total as f64
    }
}
