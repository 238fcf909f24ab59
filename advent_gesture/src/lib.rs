// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advent Gesture: pointer state machine that tells taps from drags.
//!
//! A press on a pannable surface is ambiguous until the pointer has travelled
//! far enough: below the threshold it is a tap that should reach the content
//! underneath, beyond it the press becomes a pan. This crate models that as a
//! three-phase machine:
//!
//! - [`GesturePhase::Idle`]: no pointer is tracked.
//! - [`GesturePhase::Pending`]: a primary press is tracked but has not moved
//!   past [`GestureConfig::drag_threshold`].
//! - [`GesturePhase::Dragging`]: the press has been promoted to a drag; every
//!   move produces a target offset.
//!
//! Only events from the tracked pointer id advance the machine, so stray
//! input from a second finger or pen is ignored. After a drag is released the
//! browser still delivers a synthetic click; [`PanGesture::on_click`] swallows
//! exactly that one.
//!
//! The machine does not clamp offsets, schedule frames or own listeners. It
//! accepts raw pointer data and the current offset and reports transitions
//! that a controller turns into side effects.
//!
//! ## Minimal example
//!
//! ```rust
//! use advent_gesture::{
//!     ClickAction, GestureConfig, MoveOutcome, PanGesture, PointerButton, PointerId, Release,
//! };
//! use kurbo::{Point, Vec2};
//!
//! let mut gesture = PanGesture::new(GestureConfig::default());
//! let finger = PointerId(1);
//!
//! gesture.on_pointer_down(finger, PointerButton::Primary, Point::ZERO, Vec2::ZERO);
//!
//! // 3px is still a tap candidate.
//! assert_eq!(gesture.on_pointer_move(finger, Point::new(3.0, 0.0)), MoveOutcome::BelowThreshold);
//!
//! // 50px crosses the threshold: the drag starts and yields a target offset.
//! assert_eq!(
//!     gesture.on_pointer_move(finger, Point::new(50.0, 0.0)),
//!     MoveOutcome::Started { target: Vec2::new(50.0, 0.0) }
//! );
//!
//! assert!(matches!(gesture.on_pointer_up(finger), Some(Release::Drag(_))));
//! assert_eq!(gesture.on_click(), ClickAction::Suppress);
//! assert_eq!(gesture.on_click(), ClickAction::Allow);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod click;
mod config;
mod drag;
mod pointer;

pub use click::{ClickAction, ClickSuppressor};
pub use config::GestureConfig;
pub use drag::{DragSession, GesturePhase, MoveOutcome, PanGesture, PressOutcome, Release};
pub use pointer::{PointerButton, PointerId};
