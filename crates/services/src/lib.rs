#![forbid(unsafe_code)]

pub mod error;
pub mod quiz_service;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{QuizServiceError, SessionError};
pub use quiz_service::QuizService;

pub use sessions::{
    AnswerOutcome, ChoiceSet, Feedback, QuizSession, SessionProgress, WRONG_ANSWER_MESSAGE,
};
