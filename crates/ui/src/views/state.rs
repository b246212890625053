#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyQuiz,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::EmptyQuiz => "There are no questions to ask.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
