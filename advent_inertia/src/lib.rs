// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advent Inertia: coasting motion after a drag is released.
//!
//! Two pieces cooperate:
//!
//! - [`VelocitySampler`] measures offset velocity (offset units per
//!   millisecond) from consecutive drag samples and caps each axis at
//!   [`InertiaConfig::max_velocity`].
//! - [`Inertia`] takes the release velocity and advances the offset once per
//!   frame. Decay is exponential in elapsed time, `v *= exp(-friction * dt)`,
//!   so the same fling covers the same distance at 30 Hz and at 120 Hz.
//!
//! The simulation stops when both axes fall to [`InertiaConfig::min_velocity`]
//! or below. An axis that runs into a bound is zeroed at once, so the content
//! parks exactly on the edge instead of pressing against it.
//!
//! Time is fed in explicitly as millisecond timestamps; nothing here reads a
//! clock or schedules frames.
//!
//! ## Minimal example
//!
//! ```rust
//! use advent_inertia::{Inertia, InertiaConfig};
//! use kurbo::Vec2;
//!
//! let max = Vec2::new(1000.0, 0.0);
//! let mut inertia = Inertia::new(InertiaConfig::default());
//! assert!(inertia.start(Vec2::new(-0.5, 0.0), 0.0));
//!
//! let mut offset = Vec2::new(-100.0, 0.0);
//! let mut now = 0.0;
//! loop {
//!     now += 16.0;
//!     let step = inertia.step(now, offset, max);
//!     assert!(step.offset.x <= offset.x);
//!     offset = step.offset;
//!     if step.settled {
//!         break;
//!     }
//! }
//! assert!(!inertia.is_active());
//! assert!(offset.x < -100.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod simulator;
mod velocity;

pub use config::InertiaConfig;
pub use simulator::{Inertia, InertiaStep};
pub use velocity::VelocitySampler;
