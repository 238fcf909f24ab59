// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use advent_gesture::GestureConfig;
use advent_inertia::InertiaConfig;
use advent_view::Alignment;

/// Configuration for a [`crate::PanController`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanConfig {
    /// Tap-versus-drag tuning.
    pub gesture: GestureConfig,
    /// Fling tuning.
    pub inertia: InertiaConfig,
    /// Where the content sits after the first attach.
    pub initial_alignment: Alignment,
}

/// Reasons a [`PanConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PanConfigError {
    /// The drag threshold is negative or not finite.
    #[error("drag threshold must be finite and non-negative, got {0}")]
    DragThreshold(f64),
    /// The friction is not a positive finite number.
    #[error("friction must be finite and positive, got {0}")]
    Friction(f64),
    /// The stop speed is negative or not finite.
    #[error("minimum velocity must be finite and non-negative, got {0}")]
    MinVelocity(f64),
    /// The speed cap is not a positive finite number.
    #[error("maximum velocity must be finite and positive, got {0}")]
    MaxVelocity(f64),
    /// The stop speed is not below the speed cap, so no fling could ever run.
    #[error("minimum velocity {min} must be below maximum velocity {max}")]
    VelocityRange {
        /// Configured stop speed.
        min: f64,
        /// Configured speed cap.
        max: f64,
    },
    /// The frame delta cap is not a positive finite number.
    #[error("frame delta cap must be finite and positive, got {0}ms")]
    MaxFrameDelta(f64),
}

impl PanConfig {
    /// Returns a copy with different gesture tuning.
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Returns a copy with different fling tuning.
    #[must_use]
    pub fn with_inertia(mut self, inertia: InertiaConfig) -> Self {
        self.inertia = inertia;
        self
    }

    /// Returns a copy with a different initial alignment.
    #[must_use]
    pub fn with_initial_alignment(mut self, alignment: Alignment) -> Self {
        self.initial_alignment = alignment;
        self
    }

    /// Checks that every tunable is usable.
    pub fn validate(&self) -> Result<(), PanConfigError> {
        let threshold = self.gesture.drag_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(PanConfigError::DragThreshold(threshold));
        }

        let InertiaConfig {
            friction,
            min_velocity,
            max_velocity,
            max_frame_delta_ms,
        } = self.inertia;
        if !friction.is_finite() || friction <= 0.0 {
            return Err(PanConfigError::Friction(friction));
        }
        if !min_velocity.is_finite() || min_velocity < 0.0 {
            return Err(PanConfigError::MinVelocity(min_velocity));
        }
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return Err(PanConfigError::MaxVelocity(max_velocity));
        }
        if min_velocity >= max_velocity {
            return Err(PanConfigError::VelocityRange {
                min: min_velocity,
                max: max_velocity,
            });
        }
        if !max_frame_delta_ms.is_finite() || max_frame_delta_ms <= 0.0 {
            return Err(PanConfigError::MaxFrameDelta(max_frame_delta_ms));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use advent_gesture::GestureConfig;
    use advent_inertia::InertiaConfig;

    use super::{PanConfig, PanConfigError};

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PanConfig::default().validate(), Ok(()));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let config =
            PanConfig::default().with_gesture(GestureConfig::default().with_drag_threshold(-1.0));
        assert_eq!(config.validate(), Err(PanConfigError::DragThreshold(-1.0)));
    }

    #[test]
    fn zero_friction_is_rejected() {
        let config =
            PanConfig::default().with_inertia(InertiaConfig::default().with_friction(0.0));
        assert_eq!(config.validate(), Err(PanConfigError::Friction(0.0)));
    }

    #[test]
    fn nan_frame_cap_is_rejected() {
        let config = PanConfig::default()
            .with_inertia(InertiaConfig::default().with_max_frame_delta_ms(f64::NAN));
        assert!(matches!(
            config.validate(),
            Err(PanConfigError::MaxFrameDelta(v)) if v.is_nan()
        ));
    }

    #[test]
    fn inverted_velocity_range_is_rejected() {
        let config = PanConfig::default().with_inertia(
            InertiaConfig::default()
                .with_min_velocity(1.0)
                .with_max_velocity(0.5),
        );
        assert_eq!(
            config.validate(),
            Err(PanConfigError::VelocityRange { min: 1.0, max: 0.5 })
        );
    }
}
