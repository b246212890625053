mod quiz_vm;
mod score_vm;
mod time_fmt;

pub use quiz_vm::{ChoiceVm, QuizIntent, QuizOutcome, QuizScreen, QuizVm};
pub use score_vm::{ScoreVm, map_score};
pub use time_fmt::format_elapsed;
