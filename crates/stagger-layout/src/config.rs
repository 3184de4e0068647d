use web_time::Duration;

/// Default time budget for one layout pass.
///
/// Passes run on the host's UI thread; one that takes longer than a frame
/// is logged so hosts notice oversized sections.
pub const DEFAULT_PASS_TIME_BUDGET: Duration = Duration::from_millis(16);

/// Tunables of a [`LayoutEngine`](crate::LayoutEngine).
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Header and footer heights at or below this are suppressed.
    pub negligible_height: f32,

    /// Hash the shape of the data source on every pass and drop the whole
    /// cache when it changed.
    ///
    /// Hosts that always call
    /// [`invalidate_for_data_change`](crate::LayoutEngine::invalidate_for_data_change)
    /// themselves can turn this off.
    pub detect_structural_changes: bool,

    /// A pass slower than this logs a warning.
    pub pass_time_budget: Duration,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            negligible_height: f32::MIN_POSITIVE,
            detect_structural_changes: true,
            pass_time_budget: DEFAULT_PASS_TIME_BUDGET,
        }
    }
}
