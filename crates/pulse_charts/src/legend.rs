use pulse_core::GraphSeries;

/// Snapshot handed to the legend collaborator on each render.
///
/// The legend owns its own visual selection state; `should_reset` tells it
/// to clear that state because the controller's selection set is empty
/// (e.g. after a data change). Events travel the other way through
/// `ChartController::on_legend_hover` / `on_legend_mouse_out` /
/// `on_legend_select`.
#[derive(Clone, Copy, Debug)]
pub struct LegendView<'a> {
    pub chart_data: &'a [GraphSeries],
    pub should_reset: bool,
}
