use std::sync::Arc;

use chrono::Duration;
use log::info;
use rand::rngs::StdRng;

use quiz_core::model::QuestionBank;
use storage::QuestionSource;

use crate::Clock;
use crate::error::{QuizServiceError, SessionError};
use crate::sessions::{QuizSession, default_feedback_ttl};

/// Owns the loaded question bank and hands out fresh quiz sessions.
#[derive(Debug, Clone)]
pub struct QuizService {
    clock: Clock,
    bank: Arc<QuestionBank>,
    feedback_ttl: Duration,
}

impl QuizService {
    /// # Errors
    ///
    /// Returns `QuizServiceError::EmptyBank` if the bank holds no questions.
    pub fn new(bank: QuestionBank, clock: Clock) -> Result<Self, QuizServiceError> {
        if bank.is_empty() {
            return Err(QuizServiceError::EmptyBank);
        }
        Ok(Self {
            clock,
            bank: Arc::new(bank),
            feedback_ttl: default_feedback_ttl(),
        })
    }

    /// Load the bank from `source` once.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Load` if the source cannot be read and
    /// `QuizServiceError::EmptyBank` if it holds no questions.
    pub fn from_source(source: &dyn QuestionSource, clock: Clock) -> Result<Self, QuizServiceError> {
        let bank = source.load()?;
        info!("question bank ready ({} questions)", bank.len());
        Self::new(bank, clock)
    }

    #[must_use]
    pub fn with_feedback_ttl(mut self, ttl: Duration) -> Self {
        self.feedback_ttl = ttl;
        self
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    /// Start a new quiz on the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` if the bank holds no questions.
    pub fn start_session(&self) -> Result<QuizSession, SessionError> {
        Ok(QuizSession::new(Arc::clone(&self.bank), self.clock)?
            .with_feedback_ttl(self.feedback_ttl))
    }

    /// Start a new quiz with a caller-provided RNG for choice shuffling.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` if the bank holds no questions.
    pub fn start_session_with_rng(&self, rng: StdRng) -> Result<QuizSession, SessionError> {
        Ok(QuizSession::with_rng(Arc::clone(&self.bank), self.clock, rng)?
            .with_feedback_ttl(self.feedback_ttl))
    }
}
