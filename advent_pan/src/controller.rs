// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use advent_gesture::{ClickAction, GesturePhase, MoveOutcome, PanGesture, PressOutcome, Release};
use advent_inertia::{Inertia, VelocitySampler};
use advent_timing::{FrameHandle, FrameScheduler, FrameSlot};
use advent_view::{Alignment, PanSurface, PanSurfaceDebugInfo};
use kurbo::Vec2;
use tracing::{debug, trace};

use crate::config::{PanConfig, PanConfigError};
use crate::host::{Listeners, PanEvent, PanHost, PointerInput, Propagation};

/// Work bound to the controller's single outstanding frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameTask {
    /// Write the latest drag target.
    Flush {
        /// Clamped offset to apply.
        target: Vec2,
    },
    /// Advance the fling by one step.
    Inertia,
}

/// Pannable viewport controller.
///
/// `PanController` turns pointer input into a clamped, momentum-preserving
/// 2D offset for a content layer. It owns the offset and bounds exclusively;
/// the only outside write is [`pan_to`](Self::pan_to).
///
/// The host forwards DOM callbacks to the `on_*` methods and frame callbacks
/// to [`on_frame`](Self::on_frame). In return the controller asks the host to
/// install listeners, capture pointers, write translations and dispatch
/// [`PanEvent`]s. At most one frame is outstanding at a time, for either a
/// drag flush or an inertia step.
///
/// ## Lifecycle
///
/// - [`attach`](Self::attach) installs the surface listeners, reads the
///   initial bounds and applies the configured initial alignment once.
/// - [`detach`](Self::detach) ends any session, stops inertia, cancels the
///   outstanding frame and removes every listener still held.
///
/// Both are idempotent. Input delivered while detached is ignored.
#[derive(Debug)]
pub struct PanController<H, S> {
    host: H,
    scheduler: S,
    config: PanConfig,
    surface: PanSurface,
    gesture: PanGesture,
    sampler: VelocitySampler,
    inertia: Inertia,
    frame: FrameSlot<FrameTask>,
    listeners: Listeners,
    attached: bool,
    aligned: bool,
}

impl<H: PanHost, S: FrameScheduler> PanController<H, S> {
    /// Creates a detached controller.
    pub fn new(host: H, scheduler: S, config: PanConfig) -> Result<Self, PanConfigError> {
        config.validate()?;
        Ok(Self {
            host,
            scheduler,
            config,
            surface: PanSurface::default(),
            gesture: PanGesture::new(config.gesture),
            sampler: VelocitySampler::new(config.inertia.max_velocity),
            inertia: Inertia::new(config.inertia),
            frame: FrameSlot::new(),
            listeners: Listeners::empty(),
            attached: false,
            aligned: false,
        })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &PanConfig {
        &self.config
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the frame scheduler mutably.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.surface.offset()
    }

    /// Returns the scrollable extent `(max_x, max_y)`.
    #[must_use]
    pub fn max_offset(&self) -> Vec2 {
        self.surface.max_offset()
    }

    /// Returns the input phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Returns `true` while a fling is running.
    #[must_use]
    pub fn is_coasting(&self) -> bool {
        self.inertia.is_active()
    }

    /// Returns `true` between [`attach`](Self::attach) and [`detach`](Self::detach).
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Returns the listeners currently installed on the host.
    #[must_use]
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// Returns the outstanding frame and its task, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<(FrameHandle, FrameTask)> {
        Some((self.frame.handle()?, *self.frame.task()?))
    }

    /// Starts listening and observing.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.acquire(Listeners::SURFACE);
        self.on_resize();
        debug!(
            max_x = self.surface.max_offset().x,
            max_y = self.surface.max_offset().y,
            "attached"
        );

        if !self.aligned {
            self.aligned = true;
            let alignment = self.config.initial_alignment;
            if alignment != Alignment::Origin {
                let offset = self.surface.aligned_offset(alignment);
                self.apply(offset);
            }
        }
    }

    /// Stops listening and observing, undoing everything [`attach`](Self::attach)
    /// and any open session set up.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        if let Some(release) = self.gesture.reset() {
            self.release(Listeners::SESSION);
            if let Release::Drag(session) = release {
                self.host.release_pointer(session.pointer);
            }
        }
        self.stop_motion();
        let held = self.listeners;
        self.release(held);
        self.attached = false;
        debug!("detached");
    }

    /// Pans to `(x, y)`, clamped into bounds, and stops any running fling.
    pub fn pan_to(&mut self, x: f64, y: f64) {
        if self.inertia.is_active() {
            self.inertia.cancel();
            self.frame.cancel(&mut self.scheduler);
        }
        self.apply(Vec2::new(x, y));
    }

    /// Pans to the centre of the current bounds.
    pub fn pan_to_center(&mut self) {
        let center = self.surface.aligned_offset(Alignment::Center);
        self.pan_to(center.x, center.y);
    }

    /// Handles a press on the viewport.
    pub fn on_pointer_down(&mut self, input: PointerInput) {
        if !self.attached {
            return;
        }
        // The old session's pending flush must land before the new press
        // records its start offset.
        if let Some(old) = self.gesture.supersede(input.pointer, input.button) {
            self.close_session(old);
        }
        let offset = self.surface.offset();
        let outcome =
            self.gesture.on_pointer_down(input.pointer, input.button, input.position, offset);
        if outcome == PressOutcome::Ignored {
            return;
        }
        self.stop_motion();
        self.acquire(Listeners::SESSION);
    }

    /// Handles a global pointer move.
    pub fn on_pointer_move(&mut self, input: PointerInput) -> Propagation {
        if !self.attached {
            return Propagation::Continue;
        }
        let target = match self.gesture.on_pointer_move(input.pointer, input.position) {
            MoveOutcome::Ignored | MoveOutcome::BelowThreshold => return Propagation::Continue,
            MoveOutcome::Started { target } => {
                self.host.capture_pointer(input.pointer);
                self.host.emit(PanEvent::Start(self.surface.offset()));
                target
            }
            MoveOutcome::Moved { target } => target,
        };

        let target = self.surface.clamp(target);
        self.sampler.sample(target, input.time_ms);
        self.frame.schedule(&mut self.scheduler, FrameTask::Flush { target });
        Propagation::PreventDefault
    }

    /// Handles a global pointer release.
    ///
    /// A drag hands the velocity measured by its last move to the fling. That
    /// measurement does not age: holding still before letting go still flings
    /// at the speed of the last move.
    pub fn on_pointer_up(&mut self, input: PointerInput) {
        if !self.attached {
            return;
        }
        let Some(release) = self.gesture.on_pointer_up(input.pointer) else {
            return;
        };
        self.close_session(release);
        if release.was_drag() {
            let velocity = self.sampler.velocity();
            self.sampler.reset();
            if self.inertia.start(velocity, input.time_ms) {
                self.frame.schedule(&mut self.scheduler, FrameTask::Inertia);
            }
        }
    }

    /// Handles a global pointer cancellation, which ends a session like a release.
    pub fn on_pointer_cancel(&mut self, input: PointerInput) {
        self.on_pointer_up(input);
    }

    /// Handles a click seen by the capturing listener.
    pub fn on_click(&mut self) -> ClickAction {
        if !self.attached {
            return ClickAction::Allow;
        }
        self.gesture.on_click()
    }

    /// Handles a size change of the viewport or the content area.
    pub fn on_resize(&mut self) {
        if !self.attached {
            return;
        }
        let viewport = self.host.viewport_size();
        let content = self.host.content_size();
        if let Some(corrected) = self.surface.resize(viewport, content) {
            debug!(x = corrected.x, y = corrected.y, "bounds shrank, offset re-clamped");
            self.apply(corrected);
        }
    }

    /// Runs the work scheduled for frame `handle` at time `now_ms`.
    ///
    /// Frames that were cancelled or replaced are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) {
        if !self.attached {
            return;
        }
        match self.frame.take(handle) {
            None => {}
            Some(FrameTask::Flush { target }) => {
                trace!(x = target.x, y = target.y, "drag flush");
                self.apply(target);
            }
            Some(FrameTask::Inertia) => {
                let step = self.inertia.step(
                    now_ms,
                    self.surface.offset(),
                    self.surface.max_offset(),
                );
                self.apply(step.offset);
                if !step.settled {
                    self.frame.schedule(&mut self.scheduler, FrameTask::Inertia);
                }
            }
        }
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanDebugInfo {
        PanDebugInfo {
            surface: self.surface.debug_info(),
            phase: self.gesture.phase(),
            drag_velocity: self.sampler.velocity(),
            inertia_velocity: self.inertia.velocity(),
            pending_frame: self.pending_frame(),
            listeners: self.listeners,
            attached: self.attached,
            suppresses_next_click: self.gesture.suppresses_next_click(),
        }
    }

    /// The single mutation point for the offset.
    fn apply(&mut self, offset: Vec2) {
        let offset = self.surface.set_offset(offset);
        self.host.apply_translation(offset);
        self.host.emit(PanEvent::Update(offset));
    }

    /// Common exit for every session that ends while attached.
    fn close_session(&mut self, release: Release) {
        self.release(Listeners::SESSION);
        let Release::Drag(session) = release else {
            return;
        };
        self.host.release_pointer(session.pointer);
        if let Some(FrameTask::Flush { target }) = self.frame.cancel(&mut self.scheduler) {
            self.apply(target);
        }
        self.host.emit(PanEvent::End(self.surface.offset()));
    }

    fn stop_motion(&mut self) {
        self.inertia.cancel();
        self.sampler.reset();
        self.frame.cancel(&mut self.scheduler);
    }

    fn acquire(&mut self, listeners: Listeners) {
        let missing = listeners.difference(self.listeners);
        if missing.is_empty() {
            return;
        }
        self.host.add_listeners(missing);
        self.listeners.insert(missing);
    }

    fn release(&mut self, listeners: Listeners) {
        let held = listeners.intersection(self.listeners);
        if held.is_empty() {
            return;
        }
        self.host.remove_listeners(held);
        self.listeners.remove(held);
    }
}

/// Debug snapshot of a [`PanController`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanDebugInfo {
    /// Bounds and offset.
    pub surface: PanSurfaceDebugInfo,
    /// Input phase.
    pub phase: GesturePhase,
    /// Last sampled drag velocity.
    pub drag_velocity: Vec2,
    /// Current fling velocity; zero when not coasting.
    pub inertia_velocity: Vec2,
    /// Outstanding frame, if any.
    pub pending_frame: Option<(FrameHandle, FrameTask)>,
    /// Listeners installed on the host.
    pub listeners: Listeners,
    /// Whether the controller is attached.
    pub attached: bool,
    /// Whether the next click will be swallowed.
    pub suppresses_next_click: bool,
}
