// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::trace;

/// Identifies one requested frame callback.
///
/// Handles are issued by a [`FrameScheduler`] and are only compared for
/// equality; their numeric value carries no meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Source of animation-frame callbacks.
///
/// After [`request_frame`](Self::request_frame) the host is expected to call
/// back into its owner once, on the next frame, passing the returned handle
/// and the frame timestamp. A cancelled handle must not be delivered; owners
/// still tolerate it through [`FrameSlot::take`].
pub trait FrameScheduler {
    /// Requests one callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraws a callback requested earlier.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle);
    }
}

/// At most one outstanding frame, tagged with the work it should perform.
///
/// `T` names the work, for example "flush the drag target" or "step the
/// fling". Scheduling while a frame is already outstanding keeps the existing
/// request and replaces its task, so writes are never duplicated within a
/// frame.
#[derive(Clone, Debug)]
pub struct FrameSlot<T> {
    pending: Option<(FrameHandle, T)>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameSlot<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Returns `true` while a frame is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the outstanding handle, if any.
    #[must_use]
    pub fn handle(&self) -> Option<FrameHandle> {
        self.pending.as_ref().map(|(h, _)| *h)
    }

    /// Returns the task of the outstanding frame, if any.
    #[must_use]
    pub fn task(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, t)| t)
    }

    /// Ensures a frame is outstanding and sets its task.
    ///
    /// Only requests a new frame from `scheduler` if none is outstanding.
    pub fn schedule(&mut self, scheduler: &mut impl FrameScheduler, task: T) -> FrameHandle {
        if let Some((handle, pending)) = &mut self.pending {
            *pending = task;
            return *handle;
        }
        let handle = scheduler.request_frame();
        self.pending = Some((handle, task));
        handle
    }

    /// Cancels the outstanding frame and returns its task.
    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) -> Option<T> {
        let (handle, task) = self.pending.take()?;
        scheduler.cancel_frame(handle);
        Some(task)
    }

    /// Claims the task for a delivered frame.
    ///
    /// Returns `None` for a handle that is not the outstanding one: the frame
    /// was cancelled or replaced after it was requested.
    pub fn take(&mut self, handle: FrameHandle) -> Option<T> {
        if self.handle() == Some(handle) {
            return self.pending.take().map(|(_, t)| t);
        }
        trace!(handle = handle.0, "ignoring stale frame");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualFrames;

    #[test]
    fn empty_slot_is_idle() {
        let slot = FrameSlot::<u8>::new();
        assert!(!slot.is_pending());
        assert_eq!(slot.handle(), None);
        assert_eq!(slot.task(), None);
    }

    #[test]
    fn schedule_coalesces_and_replaces_task() {
        let mut frames = ManualFrames::new();
        let mut slot = FrameSlot::new();

        let a = slot.schedule(&mut frames, 1);
        let b = slot.schedule(&mut frames, 2);

        assert_eq!(a, b);
        assert_eq!(frames.requested(), 1);
        assert_eq!(slot.task(), Some(&2));
    }

    #[test]
    fn cancel_withdraws_from_scheduler() {
        let mut frames = ManualFrames::new();
        let mut slot = FrameSlot::new();
        let h = slot.schedule(&mut frames, 'x');

        assert_eq!(slot.cancel(&mut frames), Some('x'));
        assert!(frames.pending().is_empty());
        assert_eq!(frames.cancelled(), &[h]);
        assert_eq!(slot.cancel(&mut frames), None);
    }

    #[test]
    fn stale_handle_is_rejected() {
        let mut frames = ManualFrames::new();
        let mut slot = FrameSlot::new();
        let old = slot.schedule(&mut frames, 1);
        slot.cancel(&mut frames);
        let new = slot.schedule(&mut frames, 2);

        assert_ne!(old, new);
        assert_eq!(slot.take(old), None);
        assert!(slot.is_pending());
        assert_eq!(slot.take(new), Some(2));
        assert!(!slot.is_pending());
    }
}
