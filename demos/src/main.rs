// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless pan session.
//!
//! Scripts a tap, a drag, a fling and a resize against an in-memory page and
//! logs every event the controller emits. The calendar's door timer runs off
//! the same synthetic frames.
//!
//! Run:
//! - `cargo run -p advent_demos`
//! - `RUST_LOG=trace cargo run -p advent_demos` to see every frame.

use advent_pan::{
    Alignment, ClickAction, Listeners, PanConfig, PanController, PanEvent, PanHost, PointerId,
    PointerInput,
};
use advent_timing::{ManualFrames, TickTimer};
use kurbo::{Point, Size, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FRAME_MS: f64 = 1000.0 / 60.0;

/// In-memory stand-in for the calendar page.
#[derive(Debug)]
struct Page {
    viewport: Size,
    content: Size,
    translation: Vec2,
    listeners: Listeners,
}

impl PanHost for Page {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn apply_translation(&mut self, offset: Vec2) {
        self.translation = offset;
    }

    fn emit(&mut self, event: PanEvent) {
        let o = event.offset();
        info!(x = o.x, y = o.y, "{}", event.name());
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        info!(pointer = pointer.0, "pointer captured");
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        info!(pointer = pointer.0, "pointer released");
    }

    fn add_listeners(&mut self, listeners: Listeners) {
        self.listeners.insert(listeners);
    }

    fn remove_listeners(&mut self, listeners: Listeners) {
        self.listeners.remove(listeners);
    }
}

struct Session {
    pan: PanController<Page, ManualFrames>,
    doors: TickTimer,
    now: f64,
}

impl Session {
    /// Delivers one frame to the controller and the door timer.
    fn frame(&mut self) {
        self.now += FRAME_MS;
        for handle in self.pan.scheduler_mut().take_pending() {
            self.pan.on_frame(handle, self.now);
        }
        if let Some(tick) = self.doors.advance(self.now) {
            info!(index = tick.index, "door tick");
        }
    }

    fn input(&self, x: f64, y: f64) -> PointerInput {
        PointerInput::new(PointerId(1), Point::new(x, y), self.now)
    }

    fn press(&mut self, x: f64, y: f64) {
        let input = self.input(x, y);
        self.pan.on_pointer_down(input);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let input = self.input(x, y);
        self.pan.on_pointer_move(input);
    }

    fn lift(&mut self, x: f64, y: f64) {
        let input = self.input(x, y);
        self.pan.on_pointer_up(input);
    }

    /// Drags along a straight line over `frames` frames, one move per frame.
    fn drag(&mut self, from: Point, to: Point, frames: u32) {
        self.press(from.x, from.y);
        for i in 1..=frames {
            let p = from.lerp(to, f64::from(i) / f64::from(frames));
            self.move_to(p.x, p.y);
            self.frame();
        }
        self.lift(to.x, to.y);
    }

    fn coast(&mut self) {
        let mut frames = 0;
        while self.pan.is_coasting() {
            self.frame();
            frames += 1;
        }
        let o = self.pan.offset();
        info!(frames, x = o.x, y = o.y, "fling settled");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,advent_pan=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() {
    init_tracing();

    let page = Page {
        viewport: Size::new(1280.0, 720.0),
        content: Size::new(2400.0, 1600.0),
        translation: Vec2::ZERO,
        listeners: Listeners::empty(),
    };
    let config = PanConfig::default().with_initial_alignment(Alignment::Center);
    let pan = match PanController::new(page, ManualFrames::new(), config) {
        Ok(pan) => pan,
        Err(err) => {
            eprintln!("invalid pan config: {err}");
            std::process::exit(1);
        }
    };
    let mut session = Session {
        pan,
        doors: TickTimer::default(),
        now: 0.0,
    };

    session.pan.attach();
    session.frame();

    info!("tap on a door");
    session.press(640.0, 360.0);
    session.move_to(642.0, 361.0);
    session.lift(642.0, 361.0);
    info!(action = ?session.pan.on_click(), "click after tap");

    info!("slow drag");
    session.drag(Point::new(640.0, 360.0), Point::new(540.0, 300.0), 30);
    session.frame();
    let action = session.pan.on_click();
    info!(?action, suppressed = action == ClickAction::Suppress, "click after drag");

    info!("fast fling");
    session.drag(Point::new(900.0, 400.0), Point::new(700.0, 400.0), 8);
    session.coast();

    info!("window shrinks");
    session.pan.host_mut().content = Size::new(1600.0, 900.0);
    session.pan.on_resize();

    session.pan.pan_to_center();
    session.pan.detach();

    let info = session.pan.debug_info();
    let page = session.pan.host();
    info!(
        x = page.translation.x,
        y = page.translation.y,
        listeners = ?page.listeners,
        attached = info.attached,
        "done"
    );
}
