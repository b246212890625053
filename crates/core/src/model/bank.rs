use crate::model::question::Question;

/// Ordered, immutable collection of quiz questions.
///
/// Row order of the source is preserved; only the choices of a question are
/// ever shuffled, never the question order itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Index of the final question, if any.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.questions.len().checked_sub(1)
    }
}

impl FromIterator<Question> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: &str) -> Question {
        Question::parse("img.png", answer, ["w1", "w2", "w3"]).unwrap()
    }

    #[test]
    fn preserves_order() {
        let bank: QuestionBank = ["one", "two", "three"].into_iter().map(question).collect();
        let answers: Vec<_> = bank.iter().map(Question::answer).collect();
        assert_eq!(answers, ["one", "two", "three"]);
        assert_eq!(bank.last_index(), Some(2));
        assert_eq!(bank.get(1).map(Question::answer), Some("two"));
        assert!(bank.get(3).is_none());
    }

    #[test]
    fn empty_bank_has_no_last_index() {
        let bank = QuestionBank::default();
        assert!(bank.is_empty());
        assert_eq!(bank.last_index(), None);
    }
}
