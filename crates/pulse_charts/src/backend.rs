//! An in-memory drawing backend that records every call.
//!
//! Reference implementation of the backend contract and the test double for
//! controller tests: assertions read the call log to check which transition
//! replotted, redrew, or did nothing. `Rc<RefCell<…>>` is deliberate; the
//! whole pipeline is single-threaded by contract.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pulse_core::{GraphSeries, PlotBackend, PlotInstance, RenderOptions};

#[derive(Clone, Debug, PartialEq)]
pub enum BackendCall {
    Create {
        series: Vec<GraphSeries>,
        options: RenderOptions,
    },
    SetData(Vec<GraphSeries>),
    Draw,
    ClearSelection,
    Destroy,
}

pub type CallLog = Rc<RefCell<Vec<BackendCall>>>;

pub struct RecordingBackend {
    calls: CallLog,
    has_container: Rc<Cell<bool>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            has_container: Rc::new(Cell::new(true)),
        }
    }

    /// Simulate the mount race: `create` returns `None` until the container
    /// exists.
    pub fn without_container() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            has_container: Rc::new(Cell::new(false)),
        }
    }

    /// Shared handle onto the container flag, so the "container appeared
    /// later" race can be driven after the backend moves into a controller.
    pub fn container_flag(&self) -> Rc<Cell<bool>> {
        self.has_container.clone()
    }

    /// Shared handle onto the call log; clone it before handing the backend
    /// to a controller.
    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotBackend for RecordingBackend {
    fn create(
        &mut self,
        series: &[GraphSeries],
        options: &RenderOptions,
    ) -> Option<Box<dyn PlotInstance>> {
        if !self.has_container.get() {
            return None;
        }
        self.calls.borrow_mut().push(BackendCall::Create {
            series: series.to_vec(),
            options: *options,
        });
        Some(Box::new(RecordingInstance {
            calls: self.calls.clone(),
            data: series.to_vec(),
        }))
    }
}

struct RecordingInstance {
    calls: CallLog,
    data: Vec<GraphSeries>,
}

impl PlotInstance for RecordingInstance {
    fn set_data(&mut self, series: &[GraphSeries]) {
        self.data = series.to_vec();
        self.calls
            .borrow_mut()
            .push(BackendCall::SetData(series.to_vec()));
    }

    fn draw(&mut self) {
        self.calls.borrow_mut().push(BackendCall::Draw);
    }

    fn get_data(&self) -> Vec<GraphSeries> {
        self.data.clone()
    }

    fn clear_selection(&mut self) {
        self.calls.borrow_mut().push(BackendCall::ClearSelection);
    }

    fn destroy(&mut self) {
        self.calls.borrow_mut().push(BackendCall::Destroy);
    }
}
