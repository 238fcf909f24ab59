// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning for [`crate::PanGesture`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Minimum pointer travel, in pixels, that promotes a press to a drag.
    ///
    /// Travel is the Euclidean distance from the press position.
    pub drag_threshold: f64,
}

impl GestureConfig {
    /// Default drag threshold in pixels.
    pub const DEFAULT_DRAG_THRESHOLD: f64 = 6.0;

    /// Returns a copy with a different drag threshold.
    #[must_use]
    pub fn with_drag_threshold(mut self, drag_threshold: f64) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: Self::DEFAULT_DRAG_THRESHOLD,
        }
    }
}
