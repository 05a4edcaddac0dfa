// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual clock and timer table.

use ripple_core::backend::RippleHost;
use ripple_core::scheduler::TickSlot;
use ripple_core::time::{Duration, HostTime};
use ripple_core::trace::{NoopSink, TraceSink};

/// A [`RippleHost`] driven by a manually advanced clock.
///
/// One timer per [`TickSlot`]; scheduling a slot replaces its pending timer.
/// Every engine event is forwarded to the sink `S`.
#[derive(Debug, Default)]
pub struct SimHost<S = NoopSink> {
    now: HostTime,
    timers: [Option<HostTime>; 2],
    redraw_requested: bool,
    redraw_requests: u64,
    sink: S,
}

impl SimHost {
    /// Creates a host at time zero with no timers and no tracing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: TraceSink> SimHost<S> {
    /// Creates a host at time zero that traces into `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            now: HostTime(0),
            timers: [None; 2],
            redraw_requested: false,
            redraw_requests: 0,
            sink,
        }
    }

    /// Consumes the host and returns its trace sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Due time of the pending timer for `slot`.
    #[must_use]
    pub fn pending(&self, slot: TickSlot) -> Option<HostTime> {
        self.timers[slot.index()]
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.timers.iter().flatten().count()
    }

    /// Removes and returns the earliest timer due at or before `deadline`.
    ///
    /// Ties go to [`TickSlot::Enter`].
    pub fn pop_due(&mut self, deadline: HostTime) -> Option<(TickSlot, HostTime)> {
        let (slot, due) = TickSlot::ALL
            .into_iter()
            .filter_map(|slot| self.timers[slot.index()].map(|due| (slot, due)))
            .filter(|&(_, due)| due <= deadline)
            .min_by_key(|&(_, due)| due)?;
        self.timers[slot.index()] = None;
        Some((slot, due))
    }

    /// Moves the clock forward. The clock never moves backward.
    pub fn set_now(&mut self, now: HostTime) {
        self.now = self.now.max(now);
    }

    /// Moves the clock forward by `delta`.
    pub fn advance_by(&mut self, delta: Duration) {
        self.now = self.now.saturating_add(delta);
    }

    /// Whether a redraw was requested since the last [`take_redraw`](Self::take_redraw).
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Clears and returns the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw_requested)
    }

    /// Total redraw requests, including coalesced ones.
    #[must_use]
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }
}

impl<S: TraceSink> RippleHost for SimHost<S> {
    fn now(&self) -> HostTime {
        self.now
    }

    fn schedule(&mut self, slot: TickSlot, at: HostTime) {
        self.timers[slot.index()] = Some(at);
    }

    fn cancel(&mut self, slot: TickSlot) {
        self.timers[slot.index()] = None;
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
        self.redraw_requests += 1;
    }

    fn trace_sink(&mut self) -> Option<&mut dyn TraceSink> {
        Some(&mut self.sink)
    }
}
