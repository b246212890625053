mod choices;
mod feedback;
mod progress;
mod quiz;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use choices::ChoiceSet;
pub use feedback::{
    DEFAULT_FEEDBACK_TTL_MS, Feedback, WRONG_ANSWER_MESSAGE, default_feedback_ttl,
};
pub use progress::SessionProgress;
pub use quiz::{AnswerOutcome, QuizSession};
