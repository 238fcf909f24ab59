// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::modes::Alignment;

/// Clamps a single offset axis into `[-max, 0]`.
///
/// `max` is the scrollable extent along the axis and is expected to be
/// non-negative. A NaN `value` clamps to `0.0`.
#[must_use]
pub fn clamp_axis(value: f64, max: f64) -> f64 {
    (-max).max(value.min(0.0))
}

/// Clamps an offset into `[-max.x, 0] × [-max.y, 0]`, independently per axis.
#[must_use]
pub fn clamp_offset(offset: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(clamp_axis(offset.x, max.x), clamp_axis(offset.y, max.y))
}

/// Content area panned inside a fixed viewport.
///
/// `PanSurface` owns the current offset together with the scrollable extent
/// derived from the viewport and content sizes. The offset is the content's
/// translation relative to the viewport, so it is never positive: dragging
/// the content left moves it towards `-max_x`.
///
/// All mutation paths keep the offset within bounds:
/// - [`PanSurface::set_offset`] clamps its argument.
/// - [`PanSurface::resize`] recomputes the extent and re-clamps.
#[derive(Clone, Debug)]
pub struct PanSurface {
    viewport: Size,
    content: Size,
    max: Vec2,
    offset: Vec2,
}

impl Default for PanSurface {
    fn default() -> Self {
        Self::new(Size::ZERO, Size::ZERO)
    }
}

impl PanSurface {
    /// Creates a surface with the given sizes and a zero offset.
    #[must_use]
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            viewport,
            content,
            max: scroll_extent(viewport, content),
            offset: Vec2::ZERO,
        }
    }

    /// Returns the viewport size the bounds were last computed from.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Returns the content size the bounds were last computed from.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Returns the scrollable extent `(max_x, max_y)`.
    ///
    /// Both components are non-negative.
    #[must_use]
    pub fn max_offset(&self) -> Vec2 {
        self.max
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Clamps `target` against the current bounds without storing it.
    #[must_use]
    pub fn clamp(&self, target: Vec2) -> Vec2 {
        clamp_offset(target, self.max)
    }

    /// Returns `true` if `offset` already lies within the current bounds.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        self.clamp(offset) == offset
    }

    /// Clamps `target`, stores it as the current offset and returns it.
    pub fn set_offset(&mut self, target: Vec2) -> Vec2 {
        self.offset = self.clamp(target);
        self.offset
    }

    /// Recomputes the scrollable extent for new viewport/content sizes.
    ///
    /// Returns the corrected offset if the current one no longer fits the new
    /// bounds, or `None` when the offset was left untouched.
    pub fn resize(&mut self, viewport: Size, content: Size) -> Option<Vec2> {
        self.viewport = viewport;
        self.content = content;
        self.max = scroll_extent(viewport, content);

        let clamped = self.clamp(self.offset);
        if clamped == self.offset {
            return None;
        }
        self.offset = clamped;
        Some(clamped)
    }

    /// Returns the offset that realizes `alignment` under the current bounds.
    #[must_use]
    pub fn aligned_offset(&self, alignment: Alignment) -> Vec2 {
        match alignment {
            Alignment::Origin => Vec2::ZERO,
            Alignment::Center => -self.max * 0.5,
        }
    }

    /// Snapshot of the current surface state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanSurfaceDebugInfo {
        PanSurfaceDebugInfo {
            viewport: self.viewport,
            content: self.content,
            max_offset: self.max,
            offset: self.offset,
        }
    }
}

fn scroll_extent(viewport: Size, content: Size) -> Vec2 {
    // `f64::max` returns the non-NaN operand, so unknown sizes give no extent.
    Vec2::new(
        (content.width - viewport.width).max(0.0),
        (content.height - viewport.height).max(0.0),
    )
}

/// Debug snapshot of a [`PanSurface`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSurfaceDebugInfo {
    /// Viewport size.
    pub viewport: Size,
    /// Content size.
    pub content: Size,
    /// Scrollable extent `(max_x, max_y)`.
    pub max_offset: Vec2,
    /// Current offset.
    pub offset: Vec2,
}
