// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifier of a pointer stream, as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub i32);

/// Button that caused a pointer press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// The platform did not report a button.
    #[default]
    Unknown,
    /// Left mouse button, touch contact or pen tip.
    Primary,
    /// Middle mouse button.
    Auxiliary,
    /// Right mouse button.
    Secondary,
    /// Any other button, by platform index.
    Other(u16),
    /// The event did not change any button state (DOM index `-1`).
    NoChange,
}

impl PointerButton {
    /// Maps a DOM `PointerEvent.button` index.
    ///
    /// Negative values mean "no button change" and map to [`PointerButton::NoChange`],
    /// which never starts a pan. Hosts that have no button information at all
    /// use [`PointerButton::Unknown`].
    #[must_use]
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            i if i < 0 => Self::NoChange,
            i => Self::Other(i.unsigned_abs()),
        }
    }

    /// Returns `true` if a press with this button may start a pan.
    #[must_use]
    pub fn can_pan(self) -> bool {
        matches!(self, Self::Primary | Self::Unknown)
    }
}
