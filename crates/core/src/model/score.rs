use std::fmt;

/// Final result of a quiz run: first-attempt correct answers out of the bank size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of correct answers in percent. An empty bank scores 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    /// Percentage with one decimal place, e.g. `"66.7%"`.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage())
    }

    /// e.g. `"Score: 2/3"`.
    #[must_use]
    pub fn fraction_label(&self) -> String {
        format!("Score: {}/{}", self.correct, self.total)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.1}%)", self.correct, self.total, self.percentage())
    }
}
