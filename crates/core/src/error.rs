use thiserror::Error;

use crate::model::{ImageRefError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Image(#[from] ImageRefError),
    #[error(transparent)]
    Question(#[from] QuestionError),
}
