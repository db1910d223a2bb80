//! The chart controller: one instance per rendered graph.
//!
//! Owns the backend instance lifecycle and mediates between upstream
//! changes (new query result, display mode) and interaction events (legend
//! hover/select, resize, brush). Structural changes replot (destroy +
//! recreate); hover recoloring redraws in place, coalesced to one recolor
//! per animation frame.

use pulse_core::{GraphSeries, PlotBackend, PlotInstance, QueryResult};

use crate::color::to_hover_color;
use crate::frame::{FrameScheduler, FrameSlot};
use crate::legend::LegendView;
use crate::normalize::{normalize, DisplayMode};
use crate::options::build_options;

/// Caller input contract.
pub struct GraphProps {
    pub data: QueryResult,
    pub stacked: bool,
    pub use_local_time: bool,
    /// Opaque request context, carried for the host's tooltip/export UI.
    pub query_params: Option<serde_json::Value>,
    /// Invoked with `(start_ms, end_ms)` when a brush selection completes.
    pub on_time_range_select: Box<dyn FnMut(f64, f64)>,
}

pub struct ChartController {
    backend: Box<dyn PlotBackend>,
    scheduler: Box<dyn FrameScheduler>,
    instance: Option<Box<dyn PlotInstance>>,

    data: QueryResult,
    mode: DisplayMode,
    chart_data: Vec<GraphSeries>,

    /// Indexes of legend-selected series; always a subset of the current
    /// normalized indexes.
    selected: Vec<usize>,
    pending_hover: FrameSlot<usize>,

    query_params: Option<serde_json::Value>,
    on_time_range_select: Box<dyn FnMut(f64, f64)>,
}

impl ChartController {
    pub fn new(
        props: GraphProps,
        backend: Box<dyn PlotBackend>,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Self {
        let mode = DisplayMode {
            stacked: props.stacked,
            use_local_time: props.use_local_time,
        };
        let chart_data = normalize(&props.data, mode);
        Self {
            backend,
            scheduler,
            instance: None,
            data: props.data,
            mode,
            chart_data,
            selected: Vec::new(),
            pending_hover: FrameSlot::default(),
            query_params: props.query_params,
            on_time_range_select: props.on_time_range_select,
        }
    }

    // ── lifecycle ──

    /// First plot. The host binds interaction listeners around this call;
    /// if the container is not laid out yet the backend returns no
    /// instance and the next structural transition retries.
    pub fn mount(&mut self) {
        tracing::debug!(series = self.chart_data.len(), "mount");
        self.render_full(self.chart_data.clone());
    }

    pub fn unmount(&mut self) {
        tracing::debug!("unmount");
        self.pending_hover.cancel(&mut *self.scheduler);
        if let Some(mut inst) = self.instance.take() {
            inst.destroy();
        }
    }

    // ── upstream changes ──

    /// A new query result arrived. Selection state is tied to the old
    /// result's indexes, so it resets; everything is re-normalized and
    /// replotted.
    pub fn set_data(&mut self, data: QueryResult) {
        self.selected.clear();
        self.data = data;
        self.chart_data = normalize(&self.data, self.mode);
        tracing::debug!(series = self.chart_data.len(), "query result replaced");
        self.render_full(self.chart_data.clone());
    }

    /// Stacking changed: re-normalize under the new mode. A non-empty
    /// selection survives and the replot stays restricted to it.
    pub fn set_stacked(&mut self, stacked: bool) {
        if self.mode.stacked == stacked {
            return;
        }
        self.mode.stacked = stacked;
        self.chart_data = normalize(&self.data, self.mode);
        self.selected.retain(|&i| i < self.chart_data.len());
        if self.selected.is_empty() {
            self.render_full(self.chart_data.clone());
        } else {
            let filtered = self.selected_series();
            self.render_full(filtered);
        }
    }

    /// Axis semantics changed; points are unchanged, but the backend's axis
    /// configuration is baked in at create time, so this is a full replot.
    pub fn set_use_local_time(&mut self, use_local_time: bool) {
        if self.mode.use_local_time == use_local_time {
            return;
        }
        self.mode.use_local_time = use_local_time;
        self.render_full(self.chart_data.clone());
    }

    // ── legend events ──

    /// Coalesced via the frame slot: at most one recolor per frame, and a
    /// newer hover supersedes a pending one.
    pub fn on_legend_hover(&mut self, index: usize) {
        self.pending_hover.schedule(index, &mut *self.scheduler);
    }

    /// Host callback for the scheduled animation frame.
    pub fn on_animation_frame(&mut self) {
        let Some(hover) = self.pending_hover.fire() else {
            return;
        };
        if hover >= self.chart_data.len() {
            tracing::trace!(hover, "stale hover index ignored");
            return;
        }
        let recolored = to_hover_color(&self.chart_data, hover, self.mode.stacked);
        self.redraw_in_place(&recolored);
    }

    pub fn on_legend_mouse_out(&mut self) {
        self.pending_hover.cancel(&mut *self.scheduler);
        let base = self.chart_data.clone();
        self.redraw_in_place(&base);
    }

    /// Legend toggle. Normally replots only the series at `selected`; the
    /// special case is clicking the sole selected series again, which
    /// toggles back to all series with the clicked one hover-highlighted.
    pub fn on_legend_select(&mut self, selected: &[usize], clicked: usize) {
        let toggled_back_to_all =
            selected.len() == 1 && selected[0] == clicked && self.selected.as_slice() == selected;
        let series = if toggled_back_to_all {
            to_hover_color(&self.chart_data, clicked, self.mode.stacked)
        } else {
            self.chart_data
                .iter()
                .enumerate()
                .filter(|(i, _)| selected.contains(i))
                .map(|(_, s)| s.clone())
                .collect()
        };
        self.render_full(series);
        self.selected = selected
            .iter()
            .copied()
            .filter(|&i| i < self.chart_data.len())
            .collect();
    }

    // ── backend events ──

    /// Re-measure replot. Uses the instance's current data, not
    /// `chart_data`, so a selection-filtered view survives the resize.
    ///
    /// The resize collaborator must not invoke this for the initial mount
    /// measurement.
    pub fn on_resize(&mut self) {
        let Some(inst) = self.instance.as_ref() else {
            return;
        };
        let current = inst.get_data();
        self.render_full(current);
    }

    /// A brush selection completed on the chart. Clears the backend's
    /// visual selection box and reports the range; series and zoom are
    /// untouched (acting on the range is the caller's decision).
    pub fn on_brush_select(&mut self, start_ms: f64, end_ms: f64) {
        let Some(inst) = self.instance.as_mut() else {
            return;
        };
        inst.clear_selection();
        tracing::debug!(start_ms, end_ms, "time range selected");
        (self.on_time_range_select)(start_ms, end_ms);
    }

    // ── collaborator snapshots / accessors ──

    pub fn legend_view(&self) -> LegendView<'_> {
        LegendView {
            chart_data: &self.chart_data,
            should_reset: self.selected.is_empty(),
        }
    }

    pub fn series(&self) -> &[GraphSeries] {
        &self.chart_data
    }

    pub fn selected_indexes(&self) -> &[usize] {
        &self.selected
    }

    pub fn query_params(&self) -> Option<&serde_json::Value> {
        self.query_params.as_ref()
    }

    pub fn is_rendered(&self) -> bool {
        self.instance.is_some()
    }

    // ── internal rendering ──

    /// Full replot: destroy + recreate. Structural, so any pending
    /// frame-scheduled recolor is cancelled first; it must never apply to a
    /// mismatched series set.
    fn render_full(&mut self, series: Vec<GraphSeries>) {
        self.pending_hover.cancel(&mut *self.scheduler);
        if let Some(mut old) = self.instance.take() {
            old.destroy();
        }
        let options = build_options(self.mode.stacked, self.mode.use_local_time);
        self.instance = self.backend.create(&series, &options);
        if self.instance.is_none() {
            tracing::trace!("replot skipped: no container");
        }
    }

    /// Cheap redraw: update the live instance's data in place. No instance,
    /// no work.
    fn redraw_in_place(&mut self, series: &[GraphSeries]) {
        match self.instance.as_mut() {
            Some(inst) => {
                inst.set_data(series);
                inst.draw();
            }
            None => tracing::trace!("redraw skipped: no instance"),
        }
    }

    fn selected_series(&self) -> Vec<GraphSeries> {
        self.chart_data
            .iter()
            .enumerate()
            .filter(|(i, _)| self.selected.contains(i))
            .map(|(_, s)| s.clone())
            .collect()
    }
}
