// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press/drag state machine: promote a press to a drag once it travels far enough.
//!
//! ## Usage
//!
//! 1) Feed presses to [`PanGesture::on_pointer_down`] together with the current offset.
//! 2) Feed moves to [`PanGesture::on_pointer_move`]; once the press travels past the
//!    threshold it returns [`MoveOutcome::Started`], then [`MoveOutcome::Moved`] for
//!    every later move. Both carry the unclamped target offset.
//! 3) Feed releases and cancellations to [`PanGesture::on_pointer_up`]. A
//!    [`Release::Tap`] means the press never became a drag; a [`Release::Drag`] arms
//!    the click suppressor.
//! 4) Route captured clicks through [`PanGesture::on_click`].

use kurbo::{Point, Vec2};
use tracing::debug;

use crate::click::{ClickAction, ClickSuppressor};
use crate::config::GestureConfig;
use crate::pointer::{PointerButton, PointerId};

/// Coarse phase of a [`PanGesture`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is tracked.
    Idle,
    /// A press is tracked but has not crossed the drag threshold.
    Pending,
    /// The tracked press is dragging the content.
    Dragging,
}

/// Data recorded when a press starts a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer that owns the session.
    pub pointer: PointerId,
    /// Client position of the press.
    pub start_position: Point,
    /// Content offset at the time of the press.
    pub start_offset: Vec2,
}

impl DragSession {
    /// Offset that follows the pointer from the press position to `position`.
    #[must_use]
    pub fn target_for(&self, position: Point) -> Vec2 {
        self.start_offset + (position - self.start_position)
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// The press never crossed the threshold; its click must reach the content.
    Tap(DragSession),
    /// The press was dragging.
    Drag(DragSession),
}

impl Release {
    /// Returns the session that ended.
    #[must_use]
    pub fn session(&self) -> &DragSession {
        match self {
            Self::Tap(s) | Self::Drag(s) => s,
        }
    }

    /// Returns `true` if the session had been dragging.
    #[must_use]
    pub fn was_drag(&self) -> bool {
        matches!(self, Self::Drag(_))
    }
}

/// Result of [`PanGesture::on_pointer_down`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressOutcome {
    /// The press was not eligible: wrong button, or another pointer is tracked.
    Ignored,
    /// A new pending session started.
    Pending {
        /// Session of the same pointer that was still open (its release was lost).
        superseded: Option<Release>,
    },
}

/// Result of [`PanGesture::on_pointer_move`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No session, or the move belongs to a different pointer.
    Ignored,
    /// The press has not travelled far enough to become a drag.
    BelowThreshold,
    /// The press was promoted to a drag by this move.
    Started {
        /// Unclamped offset that follows the pointer.
        target: Vec2,
    },
    /// An ongoing drag moved.
    Moved {
        /// Unclamped offset that follows the pointer.
        target: Vec2,
    },
}

#[derive(Clone, Copy, Debug, Default)]
enum State {
    #[default]
    Idle,
    Pending(DragSession),
    Dragging(DragSession),
}

/// Tap-versus-drag recognizer for a single pointer at a time.
#[derive(Clone, Debug, Default)]
pub struct PanGesture {
    config: GestureConfig,
    state: State,
    clicks: ClickSuppressor,
}

impl PanGesture {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: State::Idle,
            clicks: ClickSuppressor::default(),
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.state {
            State::Idle => GesturePhase::Idle,
            State::Pending(_) => GesturePhase::Pending,
            State::Dragging(_) => GesturePhase::Dragging,
        }
    }

    /// Returns the open session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            State::Idle => None,
            State::Pending(s) | State::Dragging(s) => Some(s),
        }
    }

    /// Returns the pointer that owns the open session, if any.
    #[must_use]
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.session().map(|s| s.pointer)
    }

    /// Returns `true` while a press is tracked, pending or dragging.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// Returns `true` while dragging.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging(_))
    }

    /// Returns `true` if the next click will be suppressed.
    #[must_use]
    pub fn suppresses_next_click(&self) -> bool {
        self.clicks.is_armed()
    }

    /// Handles a press at client `position` while the content sits at `offset`.
    pub fn on_pointer_down(
        &mut self,
        pointer: PointerId,
        button: PointerButton,
        position: Point,
        offset: Vec2,
    ) -> PressOutcome {
        if !button.can_pan() {
            return PressOutcome::Ignored;
        }
        let superseded = self.supersede(pointer, button);
        if self.is_tracking() {
            return PressOutcome::Ignored;
        }

        // A suppression nobody consumed belongs to an earlier drag.
        self.clicks.disarm();
        self.state = State::Pending(DragSession {
            pointer,
            start_position: position,
            start_offset: offset,
        });
        debug!(pointer = pointer.0, x = position.x, y = position.y, "press pending");
        PressOutcome::Pending { superseded }
    }

    /// Ends the open session if a press of `pointer` with `button` would replace it.
    ///
    /// A press from the pointer that already owns the session means its release
    /// was lost. Owners that buffer work for the old session call this first and
    /// settle that work before reading the offset for the new press.
    pub fn supersede(&mut self, pointer: PointerId, button: PointerButton) -> Option<Release> {
        if !button.can_pan() || self.active_pointer() != Some(pointer) {
            return None;
        }
        debug!(pointer = pointer.0, "press superseded an open session");
        self.finish()
    }

    /// Handles a move of `pointer` to client `position`.
    pub fn on_pointer_move(&mut self, pointer: PointerId, position: Point) -> MoveOutcome {
        match self.state {
            State::Idle => MoveOutcome::Ignored,
            State::Pending(s) | State::Dragging(s) if s.pointer != pointer => MoveOutcome::Ignored,
            State::Pending(s) => {
                let travel = (position - s.start_position).hypot();
                if travel < self.config.drag_threshold {
                    return MoveOutcome::BelowThreshold;
                }
                self.state = State::Dragging(s);
                debug!(pointer = pointer.0, travel, "drag started");
                MoveOutcome::Started {
                    target: s.target_for(position),
                }
            }
            State::Dragging(s) => MoveOutcome::Moved {
                target: s.target_for(position),
            },
        }
    }

    /// Handles a release or cancellation of `pointer`.
    ///
    /// Returns `None` when the event does not belong to the open session.
    pub fn on_pointer_up(&mut self, pointer: PointerId) -> Option<Release> {
        if self.active_pointer() != Some(pointer) {
            return None;
        }
        let release = self.finish();
        if let Some(Release::Drag(_)) = release {
            self.clicks.arm();
        }
        release
    }

    /// Ends any open session without arming click suppression.
    ///
    /// Used when the surface goes away mid-gesture.
    pub fn reset(&mut self) -> Option<Release> {
        self.clicks.disarm();
        self.finish()
    }

    /// Decides whether a click reaching the surface should be swallowed.
    pub fn on_click(&mut self) -> ClickAction {
        let action = self.clicks.filter();
        if action == ClickAction::Suppress {
            debug!("suppressed click after drag");
        }
        action
    }

    fn finish(&mut self) -> Option<Release> {
        let release = match core::mem::take(&mut self.state) {
            State::Idle => return None,
            State::Pending(s) => Release::Tap(s),
            State::Dragging(s) => Release::Drag(s),
        };
        debug!(
            pointer = release.session().pointer.0,
            drag = release.was_drag(),
            "session ended"
        );
        Some(release)
    }
}
