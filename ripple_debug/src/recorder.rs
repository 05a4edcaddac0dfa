// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. Floats are stored as their
//! IEEE-754 bit patterns. [`decode`] reads them back as an iterator of
//! [`RecordedEvent`].

use kurbo::Point;
use ripple_core::scheduler::TickSlot;
use ripple_core::state::Phase;
use ripple_core::time::HostTime;
use ripple_core::touch::TouchPhase;
use ripple_core::trace::{
    CancelEvent, DrawEvent, PhaseChangeEvent, ScheduleEvent, StaleTickEvent, TickEvent,
    TouchEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_TOUCH: u8 = 1;
const TAG_PHASE_CHANGE: u8 = 2;
const TAG_SCHEDULE: u8 = 3;
const TAG_CANCEL: u8 = 4;
const TAG_TICK: u8 = 5;
const TAG_STALE_TICK: u8 = 6;
const TAG_DRAW: u8 = 7;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_point(&mut self, p: Point) {
        self.write_f64(p.x);
        self.write_f64(p.y);
    }

    fn write_slot(&mut self, slot: TickSlot) {
        self.write_u8(match slot {
            TickSlot::Enter => 0,
            TickSlot::Exit => 1,
        });
    }

    fn write_phase(&mut self, phase: Phase) {
        self.write_u8(match phase {
            Phase::Idle => 0,
            Phase::Entering => 1,
            Phase::Held => 2,
            Phase::Exiting => 3,
        });
    }

    fn write_touch_phase(&mut self, phase: TouchPhase) {
        self.write_u8(match phase {
            TouchPhase::Down => 0,
            TouchPhase::Move => 1,
            TouchPhase::Up => 2,
            TouchPhase::Cancel => 3,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_touch(&mut self, e: &TouchEvent) {
        self.write_u8(TAG_TOUCH);
        self.write_touch_phase(e.phase);
        self.write_point(e.position);
        self.write_u64(e.at.ticks());
    }

    fn on_phase_change(&mut self, e: &PhaseChangeEvent) {
        self.write_u8(TAG_PHASE_CHANGE);
        self.write_phase(e.from);
        self.write_phase(e.to);
        self.write_u64(e.at.ticks());
    }

    fn on_schedule(&mut self, e: &ScheduleEvent) {
        self.write_u8(TAG_SCHEDULE);
        self.write_slot(e.slot);
        self.write_u64(e.due.ticks());
        self.write_u64(e.at.ticks());
    }

    fn on_cancel(&mut self, e: &CancelEvent) {
        self.write_u8(TAG_CANCEL);
        self.write_slot(e.slot);
        self.write_u64(e.at.ticks());
    }

    fn on_tick(&mut self, e: &TickEvent) {
        self.write_u8(TAG_TICK);
        self.write_slot(e.slot);
        self.write_u32(e.index);
        self.write_f64(e.linear);
        self.write_f64(e.eased);
        self.write_f64(e.radius);
        self.write_u8(e.background_alpha);
        self.write_u8(e.circle_alpha);
        self.write_u64(e.at.ticks());
    }

    fn on_stale_tick(&mut self, e: &StaleTickEvent) {
        self.write_u8(TAG_STALE_TICK);
        self.write_slot(e.slot);
        self.write_phase(e.phase);
        self.write_u64(e.at.ticks());
    }

    fn on_draw(&mut self, e: &DrawEvent) {
        self.write_u8(TAG_DRAW);
        self.write_u8(e.requested_alpha);
        self.write_u8(e.background_alpha);
        self.write_u8(e.circle_alpha);
        self.write_point(e.center);
        self.write_f64(e.radius);
        self.write_u64(e.at.ticks());
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A [`TouchEvent`].
    Touch(TouchEvent),
    /// A [`PhaseChangeEvent`].
    PhaseChange(PhaseChangeEvent),
    /// A [`ScheduleEvent`].
    Schedule(ScheduleEvent),
    /// A [`CancelEvent`].
    Cancel(CancelEvent),
    /// A [`TickEvent`].
    Tick(TickEvent),
    /// A [`StaleTickEvent`].
    StaleTick(StaleTickEvent),
    /// A [`DrawEvent`].
    Draw(DrawEvent),
}

impl RecordedEvent {
    /// Host time the event was emitted at.
    #[must_use]
    pub fn at(&self) -> HostTime {
        match self {
            Self::Touch(e) => e.at,
            Self::PhaseChange(e) => e.at,
            Self::Schedule(e) => e.at,
            Self::Cancel(e) => e.at,
            Self::Tick(e) => e.at,
            Self::StaleTick(e) => e.at,
            Self::Draw(e) => e.at,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first unknown tag or truncated record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?;
        self.pos += N;
        bytes.try_into().ok()
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_time(&mut self) -> Option<HostTime> {
        self.read_u64().map(HostTime)
    }

    fn read_point(&mut self) -> Option<Point> {
        Some(Point::new(self.read_f64()?, self.read_f64()?))
    }

    fn read_slot(&mut self) -> Option<TickSlot> {
        Some(match self.read_u8()? {
            0 => TickSlot::Enter,
            _ => TickSlot::Exit,
        })
    }

    fn read_phase(&mut self) -> Option<Phase> {
        Some(match self.read_u8()? {
            0 => Phase::Idle,
            1 => Phase::Entering,
            2 => Phase::Held,
            _ => Phase::Exiting,
        })
    }

    fn read_touch_phase(&mut self) -> Option<TouchPhase> {
        Some(match self.read_u8()? {
            0 => TouchPhase::Down,
            1 => TouchPhase::Move,
            2 => TouchPhase::Up,
            _ => TouchPhase::Cancel,
        })
    }

    fn decode_touch(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Touch(TouchEvent {
            phase: self.read_touch_phase()?,
            position: self.read_point()?,
            at: self.read_time()?,
        }))
    }

    fn decode_phase_change(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PhaseChange(PhaseChangeEvent {
            from: self.read_phase()?,
            to: self.read_phase()?,
            at: self.read_time()?,
        }))
    }

    fn decode_schedule(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Schedule(ScheduleEvent {
            slot: self.read_slot()?,
            due: self.read_time()?,
            at: self.read_time()?,
        }))
    }

    fn decode_cancel(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Cancel(CancelEvent {
            slot: self.read_slot()?,
            at: self.read_time()?,
        }))
    }

    fn decode_tick(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Tick(TickEvent {
            slot: self.read_slot()?,
            index: self.read_u32()?,
            linear: self.read_f64()?,
            eased: self.read_f64()?,
            radius: self.read_f64()?,
            background_alpha: self.read_u8()?,
            circle_alpha: self.read_u8()?,
            at: self.read_time()?,
        }))
    }

    fn decode_stale_tick(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::StaleTick(StaleTickEvent {
            slot: self.read_slot()?,
            phase: self.read_phase()?,
            at: self.read_time()?,
        }))
    }

    fn decode_draw(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Draw(DrawEvent {
            requested_alpha: self.read_u8()?,
            background_alpha: self.read_u8()?,
            circle_alpha: self.read_u8()?,
            center: self.read_point()?,
            radius: self.read_f64()?,
            at: self.read_time()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_TOUCH => self.decode_touch(),
            TAG_PHASE_CHANGE => self.decode_phase_change(),
            TAG_SCHEDULE => self.decode_schedule(),
            TAG_CANCEL => self.decode_cancel(),
            TAG_TICK => self.decode_tick(),
            TAG_STALE_TICK => self.decode_stale_tick(),
            TAG_DRAW => self.decode_draw(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tick() -> TickEvent {
        TickEvent {
            slot: TickSlot::Enter,
            index: 4,
            linear: 4.0 * 16.0 / 360.0,
            eased: 0.46,
            radius: 41.4,
            background_alpha: 79,
            circle_alpha: 117,
            at: HostTime(48),
        }
    }

    #[test]
    fn tick_preserves_float_bits() {
        let mut rec = RecorderSink::new();
        let orig = sample_tick();
        rec.on_tick(&orig);

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 1);
        match &events[0] {
            RecordedEvent::Tick(e) => {
                assert_eq!(e.slot, orig.slot);
                assert_eq!(e.index, orig.index);
                assert_eq!(e.linear.to_bits(), orig.linear.to_bits());
                assert_eq!(e.eased.to_bits(), orig.eased.to_bits());
                assert_eq!(e.radius.to_bits(), orig.radius.to_bits());
                assert_eq!(e.background_alpha, 79);
                assert_eq!(e.circle_alpha, 117);
                assert_eq!(e.at, HostTime(48));
            }
            other => panic!("expected Tick, got {other:?}"),
        }
    }

    #[test]
    fn gesture_sequence_decodes_in_order() {
        let mut rec = RecorderSink::new();
        rec.on_touch(&TouchEvent {
            phase: TouchPhase::Down,
            position: Point::new(20.0, 30.0),
            at: HostTime(0),
        });
        rec.on_phase_change(&PhaseChangeEvent {
            from: Phase::Idle,
            to: Phase::Entering,
            at: HostTime(0),
        });
        rec.on_cancel(&CancelEvent {
            slot: TickSlot::Exit,
            at: HostTime(0),
        });
        rec.on_schedule(&ScheduleEvent {
            slot: TickSlot::Enter,
            due: HostTime(0),
            at: HostTime(0),
        });
        rec.on_tick(&sample_tick());
        rec.on_stale_tick(&StaleTickEvent {
            slot: TickSlot::Exit,
            phase: Phase::Entering,
            at: HostTime(50),
        });
        rec.on_draw(&DrawEvent {
            requested_alpha: 0x66,
            background_alpha: 68,
            circle_alpha: 46,
            center: Point::new(100.0, 100.0),
            radius: 90.0,
            at: HostTime(368),
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 7);
        match &events[0] {
            RecordedEvent::Touch(e) => {
                assert_eq!(e.phase, TouchPhase::Down);
                assert_eq!(e.position, Point::new(20.0, 30.0));
            }
            other => panic!("expected Touch, got {other:?}"),
        }
        match &events[1] {
            RecordedEvent::PhaseChange(e) => {
                assert_eq!(e.from, Phase::Idle);
                assert_eq!(e.to, Phase::Entering);
            }
            other => panic!("expected PhaseChange, got {other:?}"),
        }
        assert!(matches!(
            events[2],
            RecordedEvent::Cancel(CancelEvent {
                slot: TickSlot::Exit,
                ..
            })
        ));
        assert!(matches!(events[3], RecordedEvent::Schedule(_)));
        assert!(matches!(events[4], RecordedEvent::Tick(_)));
        match &events[5] {
            RecordedEvent::StaleTick(e) => {
                assert_eq!(e.slot, TickSlot::Exit);
                assert_eq!(e.phase, Phase::Entering);
            }
            other => panic!("expected StaleTick, got {other:?}"),
        }
        match &events[6] {
            RecordedEvent::Draw(e) => {
                assert_eq!(e.background_alpha, 68);
                assert_eq!(e.circle_alpha, 46);
                assert_eq!(e.center, Point::new(100.0, 100.0));
            }
            other => panic!("expected Draw, got {other:?}"),
        }
        assert_eq!(events[6].at(), HostTime(368));
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_tick(&sample_tick());
        rec.on_tick(&sample_tick());
        let bytes = rec.into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 3]).collect();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn unknown_tag_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_cancel(&CancelEvent {
            slot: TickSlot::Enter,
            at: HostTime(1),
        });
        let mut bytes = rec.into_bytes();
        bytes.push(0xEE);
        bytes.extend_from_slice(&[0; 16]);
        assert_eq!(decode(&bytes).count(), 1);
    }
}
