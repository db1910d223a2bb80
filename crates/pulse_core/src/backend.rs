//! The drawing-backend contract.
//!
//! The chart controller never draws; it owns exactly one live
//! `PlotInstance` and drives it through this seam. Two kinds of update
//! exist and backends may assume the controller picks correctly:
//!
//! - **replot**: `destroy()` + `create()` with a new series/options set,
//!   whenever the set or shape of rendered series changes
//! - **redraw**: `set_data()` + `draw()` on the live instance, for pure
//!   color mutation (hover feedback)

use crate::options::RenderOptions;
use crate::series::GraphSeries;

/// Factory side of the backend. One per chart controller.
pub trait PlotBackend {
    /// Create a plot bound to the host container.
    ///
    /// Returns `None` when the container element does not exist yet (the
    /// mount race); callers treat that as a silent no-op, not an error.
    fn create(
        &mut self,
        series: &[GraphSeries],
        options: &RenderOptions,
    ) -> Option<Box<dyn PlotInstance>>;
}

/// A live plot. Exclusively owned by its controller.
pub trait PlotInstance {
    /// Replace the plotted series in place without re-creating the plot.
    fn set_data(&mut self, series: &[GraphSeries]);

    /// Repaint with the data from the last `set_data`/`create`.
    fn draw(&mut self);

    /// The series the instance currently holds. Used on resize to preserve
    /// an in-flight selection-filtered view.
    fn get_data(&self) -> Vec<GraphSeries>;

    /// Clear the visual brush-selection box.
    fn clear_selection(&mut self);

    /// Release backend resources. The instance must not be used afterwards.
    fn destroy(&mut self);
}
