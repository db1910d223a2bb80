use pulse_core::{RenderOptions, SelectionMode, SeriesOptions, TimeAxisOptions};

/// Derive backend configuration from the display mode.
///
/// Pure mapping from the two booleans; called on every full replot. The
/// crosshair, x-axis brush selection and tooltip are always on for query
/// graphs.
pub fn build_options(stacked: bool, use_local_time: bool) -> RenderOptions {
    RenderOptions {
        series: SeriesOptions {
            stacked,
            fill: stacked,
        },
        x_axis: TimeAxisOptions { use_local_time },
        crosshair: true,
        selection: SelectionMode::X,
        tooltip: true,
    }
}
