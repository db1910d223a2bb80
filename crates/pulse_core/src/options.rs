/// Backend configuration for one full replot.
///
/// Pure data: built fresh from the display mode on every replot and handed
/// to `PlotBackend::create`. Cosmetic parameters (tick formatting, tooltip
/// text, theme colors) stay on the backend side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub series: SeriesOptions,
    pub x_axis: TimeAxisOptions,
    pub crosshair: bool,
    pub selection: SelectionMode,
    pub tooltip: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesOptions {
    pub stacked: bool,
    /// Stacked bands are filled; overlaid lines are not.
    pub fill: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeAxisOptions {
    /// Format axis timestamps in the viewer's local timezone instead of UTC.
    pub use_local_time: bool,
}

/// Which brush gesture the backend should report selections for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    None,
    X,
}
