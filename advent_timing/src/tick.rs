// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::trace;

/// One tick of a [`TickTimer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Position in the cycle, in `0..ticks_per_cycle`.
    pub index: u32,
}

/// Frame-driven timer that emits a cyclic tick at a fixed period.
///
/// Feed it the timestamp of every animation frame. The first frame only
/// establishes the time base. Elapsed time accumulates; once it reaches the
/// period, one tick fires and the remainder carries over, so at most one tick
/// fires per frame even after a long pause.
///
/// The default cycles through 8 ticks every 2 seconds.
#[derive(Clone, Copy, Debug)]
pub struct TickTimer {
    period_ms: f64,
    ticks_per_cycle: u32,
    elapsed: f64,
    counter: u32,
    last_time: Option<f64>,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(2_000.0 / 8.0, 8)
    }
}

impl TickTimer {
    /// Creates a timer that ticks every `period_ms` and wraps after
    /// `ticks_per_cycle` ticks.
    ///
    /// A zero `ticks_per_cycle` is treated as one. A `period_ms` that is not
    /// positive (or NaN) is raised to the smallest positive value, which ticks
    /// on every frame.
    #[must_use]
    pub fn new(period_ms: f64, ticks_per_cycle: u32) -> Self {
        Self {
            period_ms: period_ms.max(f64::MIN_POSITIVE),
            ticks_per_cycle: ticks_per_cycle.max(1),
            elapsed: 0.0,
            counter: 0,
            last_time: None,
        }
    }

    /// Returns the index of the most recent tick.
    #[must_use]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Advances to the frame at `time_ms`, returning a tick if one is due.
    pub fn advance(&mut self, time_ms: f64) -> Option<Tick> {
        let last = self.last_time.replace(time_ms)?;
        self.elapsed += time_ms - last;
        if self.elapsed < self.period_ms {
            return None;
        }
        self.elapsed %= self.period_ms;
        self.counter = (self.counter + 1) % self.ticks_per_cycle;
        trace!(index = self.counter, "tick");
        Some(Tick {
            index: self.counter,
        })
    }

    /// Forgets the time base; the next frame starts a fresh measurement.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.last_time = None;
    }
}
