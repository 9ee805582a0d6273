/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    /// Zero-based page currently shown.
    pub page: usize,
    pub page_count: usize,
    /// Presentation slots on pages before the current one.
    pub slots_behind: usize,
    pub total_statements: usize,
    pub is_last_page: bool,
    pub results_visible: bool,
}
