//! pulse_charts
//!
//! The rendering/interaction pipeline for time-series query graphs.
//!
//! Data flow: raw query result → [`normalize`] → drawable series →
//! [`options::build_options`] → [`ChartController`] → drawing backend.
//! Interaction events (legend hover/select, container resize, time-range
//! brush) flow back into the controller, which either replots (structural
//! change) or redraws in place (color-only change).
//!
//! The drawing backend and legend UI are collaborators behind narrow
//! contracts ([`pulse_core::PlotBackend`], [`legend::LegendView`]); this
//! crate never draws a pixel itself.

pub mod backend;
pub mod color;
pub mod controller;
pub mod frame;
pub mod legend;
pub mod normalize;
pub mod options;
pub mod segments;

pub use backend::{BackendCall, RecordingBackend};
pub use color::{base_color, to_hover_color};
pub use controller::{ChartController, GraphProps};
pub use frame::{FrameScheduler, FrameSlot, ManualScheduler};
pub use legend::LegendView;
pub use normalize::{normalize, DisplayMode};
pub use options::build_options;
pub use segments::runs_by_gap;

/// Common imports for chart hosts.
pub mod prelude {
    pub use crate::controller::{ChartController, GraphProps};
    pub use crate::frame::{FrameScheduler, ManualScheduler};
    pub use crate::legend::LegendView;
    pub use crate::normalize::{normalize, DisplayMode};
    pub use crate::options::build_options;
    pub use pulse_core::{
        Color, GraphSeries, LabelSet, PlotBackend, PlotInstance, QueryResult, RenderOptions,
    };
}
