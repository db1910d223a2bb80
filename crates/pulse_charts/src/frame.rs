//! Animation-frame coalescing.
//!
//! Rapid hover events must collapse into at most one recolor per display
//! frame. We model that as a single-slot task queue: scheduling replaces
//! the pending task (it never queues behind it), and mouse-out, unmount and
//! any structural replot cancel it.

/// The host's animation-frame primitive.
///
/// After `request_frame` the host calls back into the controller
/// (`ChartController::on_animation_frame`) on the next display frame,
/// unless `cancel_frame` arrives first. Requests do not stack: a second
/// `request_frame` before the frame fires still yields one callback.
pub trait FrameScheduler {
    fn request_frame(&mut self);
    fn cancel_frame(&mut self);
}

/// At most one pending frame task.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSlot<T> {
    pending: Option<T>,
}

impl<T> FrameSlot<T> {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule `task` for the next frame, superseding any pending task.
    pub fn schedule(&mut self, task: T, scheduler: &mut dyn FrameScheduler) {
        if self.pending.is_some() {
            scheduler.cancel_frame();
        }
        self.pending = Some(task);
        scheduler.request_frame();
    }

    /// Drop the pending task, if any, and cancel its frame.
    pub fn cancel(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.pending.take().is_some() {
            scheduler.cancel_frame();
        }
    }

    /// Take the pending task when the frame fires.
    pub fn fire(&mut self) -> Option<T> {
        self.pending.take()
    }
}

/// A scheduler that only counts. Suits hosts that drive
/// `on_animation_frame` from their own render loop, and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualScheduler {
    pub requested: usize,
    pub cancelled: usize,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.requested += 1;
    }

    fn cancel_frame(&mut self) {
        self.cancelled += 1;
    }
}
