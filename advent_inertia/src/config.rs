// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning for [`crate::Inertia`] and [`crate::VelocitySampler`].
///
/// Velocities are in offset units (pixels) per millisecond.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InertiaConfig {
    /// Exponential decay rate per millisecond.
    pub friction: f64,
    /// Speed at or below which an axis counts as stopped.
    pub min_velocity: f64,
    /// Per-axis cap on sampled drag velocity.
    pub max_velocity: f64,
    /// Longest frame delta a single step may integrate, in milliseconds.
    ///
    /// Frames delivered after the loop was suspended (for example in a
    /// background tab) are treated as this long.
    pub max_frame_delta_ms: f64,
}

impl InertiaConfig {
    /// Default friction per millisecond.
    pub const DEFAULT_FRICTION: f64 = 0.003;
    /// Default stop speed.
    pub const DEFAULT_MIN_VELOCITY: f64 = 0.03;
    /// Default per-axis speed cap.
    pub const DEFAULT_MAX_VELOCITY: f64 = 0.8;
    /// Default frame delta cap.
    pub const DEFAULT_MAX_FRAME_DELTA_MS: f64 = 50.0;

    /// Returns a copy with a different friction.
    #[must_use]
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    /// Returns a copy with a different stop speed.
    #[must_use]
    pub fn with_min_velocity(mut self, min_velocity: f64) -> Self {
        self.min_velocity = min_velocity;
        self
    }

    /// Returns a copy with a different per-axis speed cap.
    #[must_use]
    pub fn with_max_velocity(mut self, max_velocity: f64) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    /// Returns a copy with a different frame delta cap.
    #[must_use]
    pub fn with_max_frame_delta_ms(mut self, max_frame_delta_ms: f64) -> Self {
        self.max_frame_delta_ms = max_frame_delta_ms;
        self
    }
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            friction: Self::DEFAULT_FRICTION,
            min_velocity: Self::DEFAULT_MIN_VELOCITY,
            max_velocity: Self::DEFAULT_MAX_VELOCITY,
            max_frame_delta_ms: Self::DEFAULT_MAX_FRAME_DELTA_MS,
        }
    }
}
