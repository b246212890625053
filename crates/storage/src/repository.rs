use std::path::PathBuf;

use quiz_core::model::{Question, QuestionBank, QuestionError};
use thiserror::Error;

/// Errors surfaced while reading question data.
///
/// All of them are fatal at startup: there is no partial quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("cannot open question data at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question data: {0}")]
    Csv(#[from] csv::Error),

    #[error("question data is missing required column `{column}`")]
    MissingColumn { column: &'static str },

    #[error("invalid question in row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: QuestionError,
    },
}

/// A place questions can be loaded from.
pub trait QuestionSource: Send + Sync {
    /// Read the whole source once and return the questions in source order.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the source is missing, malformed or holds an invalid row.
    fn load(&self) -> Result<QuestionBank, LoadError>;
}

/// Source backed by questions already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionSource {
    questions: Vec<Question>,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }
}

impl QuestionSource for InMemoryQuestionSource {
    fn load(&self) -> Result<QuestionBank, LoadError> {
        Ok(QuestionBank::new(self.questions.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_source_returns_questions_in_order() {
        let mut source = InMemoryQuestionSource::default();
        source.push(Question::parse("a.png", "A", ["B", "C", "D"]).unwrap());
        source.push(Question::parse("x.png", "X", ["Y", "Z", "W"]).unwrap());

        let bank = source.load().unwrap();
        let answers: Vec<_> = bank.iter().map(Question::answer).collect();
        assert_eq!(answers, ["A", "X"]);
    }

    #[test]
    fn sources_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryQuestionSource>();
        assert_send_sync::<crate::CsvQuestionSource>();
    }
}
