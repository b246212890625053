/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Zero-based index of the question on screen.
    pub index: usize,
    pub total: usize,
    pub correct: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// One-based position label, e.g. `"3 / 10"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", (self.index + 1).min(self.total), self.total)
    }
}
