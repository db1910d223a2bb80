//! Pulse Core
//!
//! Foundational types shared by the Pulse chart crates:
//!
//! - **Color**: linear RGBA colors used for per-series styling
//! - **Series model**: drawable series with stable indexes and gap-bearing points
//! - **Query model**: serde types for Prometheus-style range-query results
//! - **Backend contract**: the narrow trait seam a drawing backend implements
//!
//! The drawing backend itself (GPU, canvas, terminal, test double) lives
//! outside this workspace; everything here is the data it consumes and the
//! calls it must answer.

pub mod backend;
pub mod color;
pub mod options;
pub mod query;
pub mod series;

pub use backend::{PlotBackend, PlotInstance};
pub use color::Color;
pub use options::{RenderOptions, SelectionMode, SeriesOptions, TimeAxisOptions};
pub use query::{QueryResult, ResultEntry, SampleHistogram};
pub use series::{GraphSeries, LabelSet};
