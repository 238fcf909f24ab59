// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advent Timing: animation-frame scheduling without a frame clock.
//!
//! Browser code reaches for `requestAnimationFrame` directly, which makes
//! anything frame-driven hard to test. Here frame scheduling is a trait:
//!
//! - [`FrameScheduler`] requests and cancels frame callbacks, identified by
//!   [`FrameHandle`]. Hosts implement it on top of their frame loop.
//! - [`FrameSlot`] keeps at most one outstanding frame per owner, coalesces
//!   repeated requests into it, and recognizes stale callbacks.
//! - [`ManualFrames`] is a scheduler that only records requests, so tests can
//!   fire frames by hand with synthetic timestamps.
//! - [`TickTimer`] turns frame timestamps into a cyclic tick counter for
//!   looping animations.
//!
//! ## Minimal example
//!
//! ```rust
//! use advent_timing::{FrameSlot, ManualFrames};
//!
//! let mut frames = ManualFrames::new();
//! let mut slot = FrameSlot::new();
//!
//! // Several requests before the frame fires collapse into one.
//! let first = slot.schedule(&mut frames, "flush");
//! let second = slot.schedule(&mut frames, "flush");
//! assert_eq!(first, second);
//! assert_eq!(frames.pending(), &[first]);
//!
//! // When the frame fires, the slot hands back its task exactly once.
//! for handle in frames.take_pending() {
//!     assert_eq!(slot.take(handle), Some("flush"));
//!     assert_eq!(slot.take(handle), None);
//! }
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod manual;
mod scheduler;
mod tick;

pub use manual::ManualFrames;
pub use scheduler::{FrameHandle, FrameScheduler, FrameSlot};
pub use tick::{Tick, TickTimer};
