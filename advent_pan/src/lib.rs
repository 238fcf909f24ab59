// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advent Pan: a headless controller for a pannable viewport.
//!
//! [`PanController`] combines the lower-level Advent crates into the full
//! behavior of a drag-to-pan surface:
//!
//! - Tap-versus-drag recognition with a distance threshold and pointer-id
//!   validation (`advent_gesture`).
//! - Offset clamping and resize handling (`advent_view`).
//! - Velocity sampling and frame-rate independent fling decay (`advent_inertia`).
//! - One outstanding animation frame at a time, requested through an injected
//!   scheduler (`advent_timing`).
//!
//! The page itself sits behind the [`PanHost`] trait: it reports sizes,
//! receives translations and [`PanEvent`]s, captures pointers and installs the
//! [`Listeners`] the controller asks for. Nothing here touches a DOM or reads
//! a clock, so whole gestures can be replayed with synthetic timestamps.
//!
//! ## Minimal example
//!
//! ```rust
//! use advent_pan::{
//!     Listeners, PanConfig, PanController, PanEvent, PanHost, PointerId, PointerInput,
//! };
//! use advent_timing::ManualFrames;
//! use kurbo::{Point, Size, Vec2};
//!
//! #[derive(Default)]
//! struct Page {
//!     events: Vec<PanEvent>,
//! }
//!
//! impl PanHost for Page {
//!     fn viewport_size(&self) -> Size { Size::new(400.0, 300.0) }
//!     fn content_size(&self) -> Size { Size::new(600.0, 400.0) }
//!     fn apply_translation(&mut self, _offset: Vec2) {}
//!     fn emit(&mut self, event: PanEvent) { self.events.push(event); }
//!     fn capture_pointer(&mut self, _pointer: PointerId) {}
//!     fn release_pointer(&mut self, _pointer: PointerId) {}
//!     fn add_listeners(&mut self, _listeners: Listeners) {}
//!     fn remove_listeners(&mut self, _listeners: Listeners) {}
//! }
//!
//! let mut pan = PanController::new(Page::default(), ManualFrames::new(), PanConfig::default())
//!     .unwrap();
//! pan.attach();
//!
//! // Programmatic pans are clamped to the (200, 100) extent.
//! pan.pan_to(-1000.0, -1000.0);
//! assert_eq!(pan.offset(), Vec2::new(-200.0, -100.0));
//!
//! // Drag back 50px to the right and let the frame flush.
//! let finger = PointerId(1);
//! pan.on_pointer_down(PointerInput::new(finger, Point::new(100.0, 100.0), 0.0));
//! pan.on_pointer_move(PointerInput::new(finger, Point::new(150.0, 100.0), 16.0));
//! for handle in pan.scheduler_mut().take_pending() {
//!     pan.on_frame(handle, 16.0);
//! }
//! assert_eq!(pan.offset(), Vec2::new(-150.0, -100.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod host;

pub use advent_gesture::{ClickAction, GesturePhase, PointerButton, PointerId};
pub use advent_view::Alignment;
pub use config::{PanConfig, PanConfigError};
pub use controller::{FrameTask, PanController, PanDebugInfo};
pub use host::{Listeners, PanEvent, PanHost, PointerInput, Propagation};
