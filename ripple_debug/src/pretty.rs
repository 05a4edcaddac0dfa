// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination. Timestamps
//! are converted to milliseconds using a [`Timebase`].

use std::io::Write;

use ripple_core::time::{HostTime, Timebase};
use ripple_core::trace::{
    CancelEvent, DrawEvent, PhaseChangeEvent, ScheduleEvent, StaleTickEvent, TickEvent,
    TouchEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ms(&self, t: HostTime) -> f64 {
        self.timebase.ticks_to_nanos(t.ticks()) as f64 / 1_000_000.0
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_touch(&mut self, e: &TouchEvent) {
        let _ = writeln!(
            self.writer,
            "[touch] {} at ({:.1}, {:.1}) t={:.1}ms",
            e.phase.as_str(),
            e.position.x,
            e.position.y,
            self.ms(e.at),
        );
    }

    fn on_phase_change(&mut self, e: &PhaseChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[phase] {} -> {} t={:.1}ms",
            e.from.as_str(),
            e.to.as_str(),
            self.ms(e.at),
        );
    }

    fn on_schedule(&mut self, e: &ScheduleEvent) {
        let _ = writeln!(
            self.writer,
            "[schedule] {} due={:.1}ms t={:.1}ms",
            e.slot.as_str(),
            self.ms(e.due),
            self.ms(e.at),
        );
    }

    fn on_cancel(&mut self, e: &CancelEvent) {
        let _ = writeln!(
            self.writer,
            "[cancel] {} t={:.1}ms",
            e.slot.as_str(),
            self.ms(e.at),
        );
    }

    fn on_tick(&mut self, e: &TickEvent) {
        let _ = writeln!(
            self.writer,
            "[tick:{}] #{} linear={:.3} eased={:.3} radius={:.2} bg={} circle={} t={:.1}ms",
            e.slot.as_str(),
            e.index,
            e.linear,
            e.eased,
            e.radius,
            e.background_alpha,
            e.circle_alpha,
            self.ms(e.at),
        );
    }

    fn on_stale_tick(&mut self, e: &StaleTickEvent) {
        let _ = writeln!(
            self.writer,
            "[stale] {} ignored in {} t={:.1}ms",
            e.slot.as_str(),
            e.phase.as_str(),
            self.ms(e.at),
        );
    }

    fn on_draw(&mut self, e: &DrawEvent) {
        let _ = writeln!(
            self.writer,
            "[draw] requested={} bg={} circle={} center=({:.1}, {:.1}) radius={:.2} t={:.1}ms",
            e.requested_alpha,
            e.background_alpha,
            e.circle_alpha,
            e.center.x,
            e.center.y,
            e.radius,
            self.ms(e.at),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use ripple_core::scheduler::TickSlot;
    use ripple_core::state::Phase;

    #[test]
    fn pretty_print_tick() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::MILLIS);
        sink.on_tick(&TickEvent {
            slot: TickSlot::Exit,
            index: 2,
            linear: 0.5,
            eased: 0.25,
            radius: 90.0,
            background_alpha: 129,
            circle_alpha: 191,
            at: HostTime(400),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("[tick:exit] #2"), "got: {output}");
        assert!(output.contains("bg=129 circle=191"), "got: {output}");
        assert!(output.contains("t=400.0ms"), "got: {output}");
    }

    #[test]
    fn one_line_per_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_phase_change(&PhaseChangeEvent {
            from: Phase::Held,
            to: Phase::Exiting,
            at: HostTime(16_000_000),
        });
        sink.on_draw(&DrawEvent {
            requested_alpha: 0x66,
            background_alpha: 68,
            circle_alpha: 46,
            center: Point::new(100.0, 100.0),
            radius: 90.0,
            at: HostTime(16_000_000),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[phase] held -> exiting t=16.0ms");
        assert!(lines[1].starts_with("[draw] requested=102 bg=68 circle=46"));
    }
}
