// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Where the content sits inside the viewport when it is first laid out.
///
/// This is consulted by [`crate::PanSurface::aligned_offset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Keep the content's top-left corner at the viewport origin.
    #[default]
    Origin,
    /// Center the content within the viewport.
    ///
    /// The offset is `(-max_x / 2, -max_y / 2)`, so an axis without any
    /// scrollable extent stays at zero.
    Center,
}
