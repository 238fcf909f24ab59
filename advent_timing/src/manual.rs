// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::scheduler::{FrameHandle, FrameScheduler};

/// Scheduler that records requests and fires them only when asked.
///
/// Hosts without a real frame loop (headless demos, tests) drain
/// [`take_pending`](Self::take_pending) once per simulated frame and deliver
/// each handle to its owner with a synthetic timestamp.
#[derive(Clone, Debug, Default)]
pub struct ManualFrames {
    next: u64,
    pending: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

impl ManualFrames {
    /// Creates a scheduler with no outstanding frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handles that would fire on the next frame, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Removes and returns every outstanding handle, as a frame tick would.
    pub fn take_pending(&mut self) -> Vec<FrameHandle> {
        core::mem::take(&mut self.pending)
    }

    /// Returns every handle cancelled so far.
    #[must_use]
    pub fn cancelled(&self) -> &[FrameHandle] {
        &self.cancelled
    }

    /// Returns how many frames were ever requested.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.next
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}
