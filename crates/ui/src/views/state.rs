/// User-facing failure categories at the view boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyExam,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyExam => "No questions are available right now.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}
