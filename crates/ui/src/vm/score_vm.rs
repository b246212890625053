use services::QuizSession;

use crate::vm::time_fmt::format_elapsed;

/// Pre-formatted result lines for the final screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub fraction_label: String,
    pub percentage_label: String,
    pub elapsed_label: Option<String>,
}

/// Map a finished session to its result lines. Returns `None` while in progress.
#[must_use]
pub fn map_score(session: &QuizSession) -> Option<ScoreVm> {
    if !session.is_complete() {
        return None;
    }
    let score = session.score();
    let elapsed_label = session
        .completed_at()
        .map(|done| format!("Time: {}", format_elapsed(done - session.started_at())));
    Some(ScoreVm {
        fraction_label: score.fraction_label(),
        percentage_label: score.percentage_label(),
        elapsed_label,
    })
}
