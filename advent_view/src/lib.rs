// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advent View: bounds and offset model for a pannable surface.
//!
//! A pannable surface is a content area rendered inside a fixed viewport.
//! The content is translated by an offset that always lies in
//! `[-max_x, 0] × [-max_y, 0]`, where `max_x = max(0, content_width - viewport_width)`
//! and likewise for Y. This crate keeps that invariant:
//! - [`PanSurface`] stores the viewport/content sizes and the current offset.
//! - Every offset write goes through [`clamp_offset`].
//! - [`PanSurface::resize`] re-clamps the offset when the scrollable extent shrinks.
//!
//! It does **not** render or observe anything. Callers are expected to:
//! - Report viewport and content sizes whenever they change.
//! - Write the returned offset to their content layer (for example as a
//!   `translate3d` transform).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use advent_view::PanSurface;
//!
//! // 400x300 viewport over 600x400 content: max offset is (200, 100).
//! let mut surface = PanSurface::new(Size::new(400.0, 300.0), Size::new(600.0, 400.0));
//! assert_eq!(surface.max_offset(), Vec2::new(200.0, 100.0));
//!
//! // Writes are clamped per axis.
//! let applied = surface.set_offset(Vec2::new(-1000.0, -1000.0));
//! assert_eq!(applied, Vec2::new(-200.0, -100.0));
//!
//! // Shrinking the content pulls the offset back into range.
//! let moved = surface.resize(Size::new(400.0, 300.0), Size::new(500.0, 400.0));
//! assert_eq!(moved, Some(Vec2::new(-100.0, -100.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod surface;

pub use modes::Alignment;
pub use surface::{PanSurface, PanSurfaceDebugInfo, clamp_axis, clamp_offset};
