//! Shared error types for the services crate.

use thiserror::Error;

use storage::LoadError;

/// Errors emitted by quiz sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for a quiz")]
    EmptyBank,
}

/// Errors emitted while preparing the quiz at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("question data contains no questions")]
    EmptyBank,
}
