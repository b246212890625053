use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::Clock;
use quiz_core::model::{Question, QuestionBank, Score};

use super::choices::ChoiceSet;
use super::feedback::{Feedback, default_feedback_ttl};
use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// What a single submission did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The question was already solved or the quiz is over; nothing changed.
    Ignored,
    /// Wrong guess. Feedback is set and the question stays on screen.
    Wrong,
    /// Correct guess. `counted` is true when it was the first attempt.
    Correct { counted: bool, completed: bool },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through the question bank.
///
/// Questions are asked in bank order. Each question shows its answer and
/// distractors in a random order that is fixed until the question changes.
/// Only questions solved on the first guess count toward the score.
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    clock: Clock,
    rng: StdRng,
    feedback_ttl: Duration,

    current: usize,
    correct_count: usize,
    choices: ChoiceSet,
    answered_correctly: bool,
    first_attempt: bool,
    feedback: Option<Feedback>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session on the first question, shuffling with an OS-seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` if the bank holds no questions.
    pub fn new(bank: Arc<QuestionBank>, clock: Clock) -> Result<Self, SessionError> {
        Self::with_rng(bank, clock, StdRng::from_os_rng())
    }

    /// Start a session using the given RNG for choice shuffling.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` if the bank holds no questions.
    pub fn with_rng(
        bank: Arc<QuestionBank>,
        clock: Clock,
        rng: StdRng,
    ) -> Result<Self, SessionError> {
        if bank.is_empty() {
            return Err(SessionError::EmptyBank);
        }

        let mut session = Self {
            bank,
            clock,
            rng,
            feedback_ttl: default_feedback_ttl(),
            current: 0,
            correct_count: 0,
            choices: ChoiceSet::default(),
            answered_correctly: false,
            first_attempt: true,
            feedback: None,
            started_at: clock.now(),
            completed_at: None,
        };
        session.load_question();
        info!("quiz started with {} questions", session.total());
        Ok(session)
    }

    #[must_use]
    pub fn with_feedback_ttl(mut self, ttl: Duration) -> Self {
        self.feedback_ttl = ttl;
        self
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.current)
    }

    /// Choices for the current question in display order.
    #[must_use]
    pub fn choices(&self) -> &ChoiceSet {
        &self.choices
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn answered_correctly(&self) -> bool {
        self.answered_correctly
    }

    #[must_use]
    pub fn is_first_attempt(&self) -> bool {
        self.first_attempt
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn feedback_ttl(&self) -> Duration {
        self.feedback_ttl
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Final score. Only meaningful once `is_complete()` is true.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::new(self.correct_count, self.total())
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            index: self.current,
            total: self.total(),
            correct: self.correct_count,
            is_complete: self.is_complete(),
        }
    }

    /// Submit a guess for the current question.
    ///
    /// Any string that is not the current answer counts as a wrong guess.
    pub fn submit_answer(&mut self, selected: &str) -> AnswerOutcome {
        if self.answered_correctly || self.is_complete() {
            debug!("ignoring answer {selected:?}: question already solved");
            return AnswerOutcome::Ignored;
        }

        let Some(question) = self.bank.get(self.current) else {
            return AnswerOutcome::Ignored;
        };

        if question.is_correct(selected) {
            let counted = self.first_attempt;
            if counted {
                self.correct_count += 1;
            }
            self.answered_correctly = true;
            self.feedback = None;
            debug!(
                "question {} solved (first attempt: {counted})",
                self.current + 1
            );
            self.advance();
            AnswerOutcome::Correct {
                counted,
                completed: self.is_complete(),
            }
        } else {
            self.feedback = Some(Feedback::wrong_answer(self.clock.now()));
            self.first_attempt = false;
            debug!("wrong answer {selected:?} on question {}", self.current + 1);
            AnswerOutcome::Wrong
        }
    }

    /// Submit the displayed choice at `index`.
    ///
    /// An index with no displayed choice behind it is a wrong guess.
    pub fn select_choice(&mut self, index: usize) -> AnswerOutcome {
        let selected = self.choices.get(index).map(str::to_owned).unwrap_or_default();
        self.submit_answer(&selected)
    }

    /// Abandon progress and start over from the first question.
    pub fn restart(&mut self) {
        self.current = 0;
        self.correct_count = 0;
        self.completed_at = None;
        self.feedback = None;
        self.started_at = self.clock.now();
        self.load_question();
        debug!("quiz restarted");
    }

    /// True when feedback is showing and a `tick()` now would clear it.
    #[must_use]
    pub fn is_feedback_expired(&self) -> bool {
        let now = self.clock.now();
        self.feedback
            .as_ref()
            .is_some_and(|f| f.is_expired(now, self.feedback_ttl))
    }

    /// Clear expired feedback using the session clock. Returns true if it cleared.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.tick_at(now)
    }

    /// Clear feedback that has been visible for at least the feedback TTL at `now`.
    pub fn tick_at(&mut self, now: DateTime<Utc>) -> bool {
        let expired = self
            .feedback
            .as_ref()
            .is_some_and(|f| f.is_expired(now, self.feedback_ttl));
        if expired {
            self.feedback = None;
        }
        expired
    }

    fn advance(&mut self) {
        if Some(self.current) == self.bank.last_index() {
            self.completed_at = Some(self.clock.now());
            info!("quiz complete: {}", self.score());
        } else {
            self.current += 1;
            self.load_question();
        }
    }

    fn load_question(&mut self) {
        if let Some(question) = self.bank.get(self.current) {
            self.choices = ChoiceSet::shuffled(question, &mut self.rng);
        }
        self.answered_correctly = false;
        self.first_attempt = true;
        self.feedback = None;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("bank_len", &self.bank.len())
            .field("current", &self.current)
            .field("correct_count", &self.correct_count)
            .field("choices", &self.choices)
            .field("answered_correctly", &self.answered_correctly)
            .field("first_attempt", &self.first_attempt)
            .field("feedback", &self.feedback)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
