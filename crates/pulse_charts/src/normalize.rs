use pulse_core::{GraphSeries, QueryResult};

use crate::color::base_color;

/// Caller-supplied display mode. Changes trigger re-normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayMode {
    pub stacked: bool,
    pub use_local_time: bool,
}

/// Convert a raw query result into drawable series.
///
/// Pure and deterministic: the same `(data, mode)` pair always yields
/// deep-equal output, so callers may cache on shallow input comparison.
///
/// - one result entry → one series; input order becomes `index`, so
///   indexes are exactly `0..N`
/// - sample times (unix seconds) are scaled to milliseconds
/// - a value string that does not parse as a finite f64 ("NaN", "+Inf",
///   garbage) becomes `y = None` rather than being dropped, preserving
///   x-axis continuity for gap rendering
/// - histogram samples are passed through untouched; their value
///   representation is the backend's business (mode-dependent handling is
///   the extension point, never zero-filling)
/// - colors come from [`base_color`] keyed on `(index, total)`, not on
///   label content, so coloring is stable under reordering-free updates
pub fn normalize(data: &QueryResult, mode: DisplayMode) -> Vec<GraphSeries> {
    tracing::trace!(
        entries = data.result.len(),
        stacked = mode.stacked,
        use_local_time = mode.use_local_time,
        "normalizing query result"
    );

    let total = data.result.len();
    data.result
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let points = entry
                .values
                .iter()
                .map(|(t, v)| {
                    let y = v.parse::<f64>().ok().filter(|y| y.is_finite());
                    (t * 1000.0, y)
                })
                .collect();
            GraphSeries {
                labels: entry.metric.clone(),
                color: base_color(index, total),
                points,
                histograms: entry.histograms.clone(),
                index,
            }
        })
        .collect()
}
