// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fan-out to two sinks.

use ripple_core::trace::{
    CancelEvent, DrawEvent, PhaseChangeEvent, ScheduleEvent, StaleTickEvent, TickEvent,
    TouchEvent, TraceSink,
};

/// Forwards every event to `first`, then `second`.
///
/// Nest tees for more than two destinations.
#[derive(Debug, Default)]
pub struct TeeSink<A, B> {
    /// Receives each event first.
    pub first: A,
    /// Receives each event second.
    pub second: B,
}

impl<A: TraceSink, B: TraceSink> TeeSink<A, B> {
    /// Creates a tee over two sinks.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Splits the tee back into its sinks.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: TraceSink, B: TraceSink> TraceSink for TeeSink<A, B> {
    fn on_touch(&mut self, e: &TouchEvent) {
        self.first.on_touch(e);
        self.second.on_touch(e);
    }

    fn on_phase_change(&mut self, e: &PhaseChangeEvent) {
        self.first.on_phase_change(e);
        self.second.on_phase_change(e);
    }

    fn on_schedule(&mut self, e: &ScheduleEvent) {
        self.first.on_schedule(e);
        self.second.on_schedule(e);
    }

    fn on_cancel(&mut self, e: &CancelEvent) {
        self.first.on_cancel(e);
        self.second.on_cancel(e);
    }

    fn on_tick(&mut self, e: &TickEvent) {
        self.first.on_tick(e);
        self.second.on_tick(e);
    }

    fn on_stale_tick(&mut self, e: &StaleTickEvent) {
        self.first.on_stale_tick(e);
        self.second.on_stale_tick(e);
    }

    fn on_draw(&mut self, e: &DrawEvent) {
        self.first.on_draw(e);
        self.second.on_draw(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::{RecorderSink, decode};
    use ripple_core::scheduler::TickSlot;
    use ripple_core::time::HostTime;

    #[test]
    fn both_sinks_see_every_event() {
        let mut tee = TeeSink::new(RecorderSink::new(), RecorderSink::new());
        tee.on_cancel(&CancelEvent {
            slot: TickSlot::Enter,
            at: HostTime(3),
        });
        tee.on_schedule(&ScheduleEvent {
            slot: TickSlot::Exit,
            due: HostTime(3),
            at: HostTime(3),
        });
        let (a, b) = tee.into_parts();
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_eq!(decode(a.as_bytes()).count(), 2);
    }
}
