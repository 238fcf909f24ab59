// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the controller and the page it runs in.

use advent_gesture::{PointerButton, PointerId};
use kurbo::{Point, Size, Vec2};

bitflags::bitflags! {
    /// Listener registrations the controller asks its host to hold.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Pointer presses on the viewport.
        const POINTER_DOWN   = 0b0000_0001;
        /// Capturing click listener on the component.
        const CLICK_CAPTURE  = 0b0000_0010;
        /// Size observation of the viewport and the content area.
        const RESIZE         = 0b0000_0100;
        /// Global pointer moves.
        const POINTER_MOVE   = 0b0000_1000;
        /// Global pointer releases.
        const POINTER_UP     = 0b0001_0000;
        /// Global pointer cancellations.
        const POINTER_CANCEL = 0b0010_0000;

        /// Held for as long as the controller is attached.
        const SURFACE = Self::POINTER_DOWN.bits()
            | Self::CLICK_CAPTURE.bits()
            | Self::RESIZE.bits();
        /// Held only while a press is pending or dragging.
        const SESSION = Self::POINTER_MOVE.bits()
            | Self::POINTER_UP.bits()
            | Self::POINTER_CANCEL.bits();
    }
}

/// Notification emitted whenever the pan state changes.
///
/// Each carries the offset at the time of emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    /// A press crossed the drag threshold.
    Start(Vec2),
    /// The offset changed.
    Update(Vec2),
    /// A drag was released.
    End(Vec2),
}

impl PanEvent {
    /// Returns the DOM event name for this notification.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start(_) => "pan-start",
            Self::Update(_) => "pan-update",
            Self::End(_) => "pan-end",
        }
    }

    /// Returns the offset carried by the event.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        match self {
            Self::Start(o) | Self::Update(o) | Self::End(o) => *o,
        }
    }
}

/// Pointer data delivered to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer stream the event belongs to.
    pub pointer: PointerId,
    /// Button that changed; only meaningful for presses.
    pub button: PointerButton,
    /// Position in client coordinates.
    pub position: Point,
    /// Event timestamp in milliseconds.
    pub time_ms: f64,
}

impl PointerInput {
    /// Creates an input with an unknown button.
    #[must_use]
    pub fn new(pointer: PointerId, position: Point, time_ms: f64) -> Self {
        Self {
            pointer,
            button: PointerButton::Unknown,
            position,
            time_ms,
        }
    }

    /// Returns a copy with `button` set.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// Whether the host should cancel the default action of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Leave the event alone.
    Continue,
    /// Call `preventDefault` so the browser does not select text or scroll.
    PreventDefault,
}

/// Environment a [`crate::PanController`] drives.
///
/// Implementations wrap the viewport element, the content layer and the
/// event target the controller dispatches on. The controller never resizes
/// anything; it only reads sizes when told they changed.
pub trait PanHost {
    /// Visible size of the viewport.
    fn viewport_size(&self) -> Size;

    /// Full scrollable size of the content area.
    fn content_size(&self) -> Size;

    /// Writes `offset` to the content layer as a 2D translation.
    fn apply_translation(&mut self, offset: Vec2);

    /// Dispatches a bubbling, composed notification.
    fn emit(&mut self, event: PanEvent);

    /// Routes all further events of `pointer` to the viewport.
    fn capture_pointer(&mut self, pointer: PointerId);

    /// Undoes [`capture_pointer`](Self::capture_pointer).
    fn release_pointer(&mut self, pointer: PointerId);

    /// Installs the given listeners or observers.
    fn add_listeners(&mut self, listeners: Listeners);

    /// Removes the given listeners or observers.
    fn remove_listeners(&mut self, listeners: Listeners);
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{Listeners, PanEvent};

    #[test]
    fn surface_and_session_sets_are_disjoint() {
        assert!(Listeners::SURFACE.intersection(Listeners::SESSION).is_empty());
        assert_eq!(
            Listeners::SURFACE | Listeners::SESSION,
            Listeners::all()
        );
    }

    #[test]
    fn event_names_match_dom_names() {
        let o = Vec2::new(-1.0, -2.0);
        assert_eq!(PanEvent::Start(o).name(), "pan-start");
        assert_eq!(PanEvent::Update(o).name(), "pan-update");
        assert_eq!(PanEvent::End(o).name(), "pan-end");
        assert_eq!(PanEvent::End(o).offset(), o);
    }
}
