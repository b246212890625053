use chrono::{DateTime, Duration, Utc};

/// Message shown after a wrong guess.
pub const WRONG_ANSWER_MESSAGE: &str = "Wrong answer, try again.";

/// How long feedback stays on screen before a tick clears it.
pub const DEFAULT_FEEDBACK_TTL_MS: i64 = 1500;

#[must_use]
pub fn default_feedback_ttl() -> Duration {
    Duration::milliseconds(DEFAULT_FEEDBACK_TTL_MS)
}

/// Transient, time-boxed message attached to the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    message: &'static str,
    shown_at: DateTime<Utc>,
}

impl Feedback {
    #[must_use]
    pub fn wrong_answer(shown_at: DateTime<Utc>) -> Self {
        Self {
            message: WRONG_ANSWER_MESSAGE,
            shown_at,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }

    #[must_use]
    pub fn shown_at(&self) -> DateTime<Utc> {
        self.shown_at
    }

    /// True once at least `ttl` has passed since the message was shown.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.shown_at >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;

    #[test]
    fn expires_at_ttl_boundary() {
        let feedback = Feedback::wrong_answer(fixed_now());
        let ttl = default_feedback_ttl();
        assert!(!feedback.is_expired(fixed_now(), ttl));
        assert!(!feedback.is_expired(fixed_now() + Duration::milliseconds(1499), ttl));
        assert!(feedback.is_expired(fixed_now() + Duration::milliseconds(1500), ttl));
        assert_eq!(feedback.message(), "Wrong answer, try again.");
    }
}
