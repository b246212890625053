mod bank;
mod image;
mod question;
mod score;

pub use bank::QuestionBank;
pub use image::{ImageRef, ImageRefError};
pub use question::{CHOICE_COUNT, DISTRACTOR_COUNT, Question, QuestionError};
pub use score::Score;
