// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;
use tracing::{debug, trace};

use advent_view::clamp_offset;

use crate::config::InertiaConfig;

/// Result of one [`Inertia::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaStep {
    /// Clamped offset to apply for this frame.
    pub offset: Vec2,
    /// `true` once the simulation has stopped; no further frames are needed.
    pub settled: bool,
}

/// Post-release coasting simulation.
///
/// An `Inertia` is idle until [`start`](Self::start) hands it a nonzero
/// velocity. While active, each [`step`](Self::step):
///
/// 1. Integrates the time since the previous step, capped at
///    [`InertiaConfig::max_frame_delta_ms`].
/// 2. Decays the velocity by `exp(-friction * dt)`.
/// 3. Advances the offset by `velocity * dt` and clamps it; an axis whose
///    position was altered by the clamp has its velocity zeroed.
/// 4. Settles once both axes are at or below
///    [`InertiaConfig::min_velocity`].
#[derive(Clone, Copy, Debug)]
pub struct Inertia {
    config: InertiaConfig,
    velocity: Vec2,
    last_time: Option<f64>,
}

impl Inertia {
    /// Creates an idle simulator.
    #[must_use]
    pub fn new(config: InertiaConfig) -> Self {
        Self {
            config,
            velocity: Vec2::ZERO,
            last_time: None,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &InertiaConfig {
        &self.config
    }

    /// Returns `true` while the simulation is coasting.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_time.is_some()
    }

    /// Returns the current velocity; zero while idle.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Starts coasting with `velocity` from time `now_ms`.
    ///
    /// Returns `false` and stays idle if both components are zero.
    pub fn start(&mut self, velocity: Vec2, now_ms: f64) -> bool {
        if velocity.x == 0.0 && velocity.y == 0.0 {
            self.cancel();
            return false;
        }
        self.velocity = velocity;
        self.last_time = Some(now_ms);
        debug!(vx = velocity.x, vy = velocity.y, "inertia started");
        true
    }

    /// Stops coasting and zeroes the velocity.
    pub fn cancel(&mut self) {
        self.velocity = Vec2::ZERO;
        self.last_time = None;
    }

    /// Advances the simulation to `now_ms` from `offset`, within `[-max, 0]`.
    ///
    /// Stepping an idle simulator returns `offset` clamped and settled.
    pub fn step(&mut self, now_ms: f64, offset: Vec2, max: Vec2) -> InertiaStep {
        let Some(last) = self.last_time else {
            return InertiaStep {
                offset: clamp_offset(offset, max),
                settled: true,
            };
        };

        let dt = (now_ms - last).clamp(0.0, self.config.max_frame_delta_ms);
        self.last_time = Some(now_ms);

        self.velocity *= (-self.config.friction * dt).exp();

        let unclamped = offset + self.velocity * dt;
        let next = clamp_offset(unclamped, max);
        if next.x != unclamped.x {
            self.velocity.x = 0.0;
        }
        if next.y != unclamped.y {
            self.velocity.y = 0.0;
        }
        trace!(dt, x = next.x, y = next.y, vx = self.velocity.x, vy = self.velocity.y, "inertia step");

        let min = self.config.min_velocity;
        let settled = self.velocity.x.abs() <= min && self.velocity.y.abs() <= min;
        if settled {
            debug!(x = next.x, y = next.y, "inertia settled");
            self.cancel();
        }
        InertiaStep {
            offset: next,
            settled,
        }
    }
}
