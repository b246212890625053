use quiz_core::model::{ImageRef, Question, QuestionError};
use serde::Deserialize;

/// One CSV row as it appears on disk.
///
/// Column names match the header of the question file; unknown columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QuestionRecord {
    pub image_path: String,
    pub answer: String,
    pub wrong1: String,
    pub wrong2: String,
    pub wrong3: String,
}

impl QuestionRecord {
    /// Convert the row into a validated domain `Question`.
    pub(crate) fn into_question(self) -> Result<Question, QuestionError> {
        let image = ImageRef::new(self.image_path)?;
        Question::new(image, self.answer, [self.wrong1, self.wrong2, self.wrong3])
    }
}
