// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Measures drag velocity from consecutive offset samples.
///
/// Each sample yields `Δoffset / Δt` against the previous one, clamped per
/// axis to `[-max_velocity, max_velocity]`. The first sample after a
/// [`reset`](Self::reset) has nothing to compare against and reports zero.
#[derive(Clone, Copy, Debug)]
pub struct VelocitySampler {
    max_velocity: f64,
    last: Option<(Vec2, f64)>,
    velocity: Vec2,
}

impl VelocitySampler {
    /// Creates a sampler that caps each axis at `max_velocity`.
    #[must_use]
    pub fn new(max_velocity: f64) -> Self {
        Self {
            max_velocity,
            last: None,
            velocity: Vec2::ZERO,
        }
    }

    /// Forgets previous samples and zeroes the velocity.
    pub fn reset(&mut self) {
        self.last = None;
        self.velocity = Vec2::ZERO;
    }

    /// Returns the most recently measured velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Records `offset` at `time_ms` and returns the updated velocity.
    ///
    /// Samples that do not advance the clock keep the previous measurement and
    /// are folded into the next one.
    pub fn sample(&mut self, offset: Vec2, time_ms: f64) -> Vec2 {
        if let Some((prev_offset, prev_time)) = self.last {
            let dt = time_ms - prev_time;
            if dt.is_nan() || dt <= 0.0 {
                return self.velocity;
            }
            let raw = (offset - prev_offset) / dt;
            let cap = self.max_velocity;
            self.velocity = Vec2::new(raw.x.clamp(-cap, cap), raw.y.clamp(-cap, cap));
        }
        self.last = Some((offset, time_ms));
        self.velocity
    }
}
