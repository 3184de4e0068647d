//! Host-side simulation of the self-sizing loop.
//!
//! A real host renders the visible items, measures the self-sizing ones and
//! reports their sizes back, then lays out again. [`settle`] runs that loop
//! headlessly against a [`MeasureHost`] until the layout stops changing.

use stagger_geometry::{Rect, Size};
use stagger_layout::{IndexPath, LayoutDataSource, LayoutEngine};

/// Measures rendered items.
pub trait MeasureHost {
    /// Returns the fitted size of the item at `index_path` laid out in `frame`.
    fn measure(&mut self, index_path: IndexPath, frame: Rect) -> Size;
}

impl<F> MeasureHost for F
where
    F: FnMut(IndexPath, Rect) -> Size,
{
    fn measure(&mut self, index_path: IndexPath, frame: Rect) -> Size {
        self(index_path, frame)
    }
}

/// Outcome of [`settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleReport {
    /// Number of `prepare` calls made.
    pub passes: usize,
    /// Number of reported sizes that invalidated the layout.
    pub invalidating_reports: usize,
    /// Whether the last pass produced no further invalidation.
    pub settled: bool,
}

/// Lays out, measures the self-sizing items visible in `viewport` and
/// reports them, batching each round into one invalidation, until a round
/// changes nothing or `max_passes` is reached.
pub fn settle<S, H>(
    engine: &mut LayoutEngine,
    source: &S,
    width: f32,
    viewport: Rect,
    host: &mut H,
    max_passes: usize,
) -> SettleReport
where
    S: LayoutDataSource + ?Sized,
    H: MeasureHost + ?Sized,
{
    let mut report = SettleReport {
        passes: 0,
        invalidating_reports: 0,
        settled: false,
    };

    while report.passes < max_passes {
        engine.prepare(source, width);
        report.passes += 1;

        let (context, changed) =
            engine.measure_visible_items(source, viewport, |index_path, frame| {
                Some(host.measure(index_path, frame))
            });
        report.invalidating_reports += changed;

        if context.is_empty() {
            report.settled = true;
            return report;
        }
        engine.invalidate(context);
    }

    log::warn!(
        "layout did not settle within {} passes ({} invalidating reports)",
        max_passes,
        report.invalidating_reports
    );
    report
}
