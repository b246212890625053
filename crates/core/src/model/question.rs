use thiserror::Error;

use crate::model::image::{ImageRef, ImageRefError};

/// Wrong answers offered alongside the correct one.
pub const DISTRACTOR_COUNT: usize = 3;

/// Choices displayed per question: the answer plus its distractors.
pub const CHOICE_COUNT: usize = DISTRACTOR_COUNT + 1;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error(transparent)]
    Image(#[from] ImageRefError),

    #[error("Answer cannot be empty.")]
    EmptyAnswer,

    #[error("Wrong answer {position} cannot be empty.")]
    EmptyDistractor { position: usize },

    #[error("Choice \"{choice}\" appears more than once.")]
    DuplicateChoice { choice: String },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single quiz item: an image prompt, its correct answer and three distractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    image: ImageRef,
    answer: String,
    distractors: [String; DISTRACTOR_COUNT],
}

impl Question {
    /// Build a validated question.
    ///
    /// Text fields are trimmed. The four choices must be non-empty and pairwise distinct.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyAnswer` / `EmptyDistractor` for blank text and
    /// `QuestionError::DuplicateChoice` when two choices are equal.
    pub fn new(
        image: ImageRef,
        answer: impl Into<String>,
        distractors: [String; DISTRACTOR_COUNT],
    ) -> Result<Self, QuestionError> {
        let answer = answer.into().trim().to_owned();
        if answer.is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }

        let distractors = distractors.map(|d| d.trim().to_owned());
        if let Some(idx) = distractors.iter().position(String::is_empty) {
            return Err(QuestionError::EmptyDistractor { position: idx + 1 });
        }

        let question = Self {
            image,
            answer,
            distractors,
        };

        let choices = question.choices();
        for (i, choice) in choices.iter().enumerate() {
            if choices[..i].contains(choice) {
                return Err(QuestionError::DuplicateChoice {
                    choice: choice.clone(),
                });
            }
        }

        Ok(question)
    }

    /// Convenience constructor from raw strings, validating the image path too.
    ///
    /// # Errors
    ///
    /// Same as [`Question::new`], plus `QuestionError::Image` for a blank path.
    pub fn parse(
        image: &str,
        answer: &str,
        distractors: [&str; DISTRACTOR_COUNT],
    ) -> Result<Self, QuestionError> {
        let image = ImageRef::new(image.trim())?;
        Self::new(image, answer, distractors.map(str::to_owned))
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn distractors(&self) -> &[String; DISTRACTOR_COUNT] {
        &self.distractors
    }

    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.answer == selected
    }

    /// All four candidate strings, answer first. Callers shuffle before display.
    #[must_use]
    pub fn choices(&self) -> [String; CHOICE_COUNT] {
        let [a, b, c] = &self.distractors;
        [self.answer.clone(), a.clone(), b.clone(), c.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_trims_fields() {
        let q = Question::parse(" img/a.png ", " bayit ", ["sefer", " ish", "yom "]).unwrap();
        assert_eq!(q.answer(), "bayit");
        assert_eq!(q.distractors(), &["sefer", "ish", "yom"].map(String::from));
        assert_eq!(q.image().to_string(), "img/a.png");
        assert!(q.is_correct("bayit"));
        assert!(!q.is_correct("sefer"));
    }

    #[test]
    fn choices_start_with_answer() {
        let q = Question::parse("a.png", "A", ["B", "C", "D"]).unwrap();
        assert_eq!(q.choices(), ["A", "B", "C", "D"].map(String::from));
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            Question::parse("a.png", "  ", ["B", "C", "D"]).unwrap_err(),
            QuestionError::EmptyAnswer
        );
        assert_eq!(
            Question::parse("a.png", "A", ["B", "", "D"]).unwrap_err(),
            QuestionError::EmptyDistractor { position: 2 }
        );
        assert_eq!(
            Question::parse("", "A", ["B", "C", "D"]).unwrap_err(),
            QuestionError::Image(ImageRefError::Empty)
        );
    }

    #[test]
    fn rejects_duplicate_choices() {
        let err = Question::parse("a.png", "A", ["B", "A", "D"]).unwrap_err();
        assert_eq!(
            err,
            QuestionError::DuplicateChoice {
                choice: "A".to_string()
            }
        );

        let err = Question::parse("a.png", "A", ["B", "C", "B"]).unwrap_err();
        assert!(matches!(err, QuestionError::DuplicateChoice { choice } if choice == "B"));
    }
}
