// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the ripple engine.
//!
//! This module provides a [`TraceSink`] trait with one method per engine
//! event. All method bodies default to no-ops, so implementing only the events
//! you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! The engine obtains its sink from
//! [`RippleHost::trace_sink`](crate::backend::RippleHost::trace_sink), so a
//! host opts in per surface.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use kurbo::Point;

use crate::scheduler::TickSlot;
use crate::state::Phase;
use crate::time::HostTime;
use crate::touch::TouchPhase;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a pointer event reaches the router.
#[derive(Clone, Copy, Debug)]
pub struct TouchEvent {
    /// Which pointer phase arrived.
    pub phase: TouchPhase,
    /// Pointer position in surface coordinates.
    pub position: Point,
    /// Host time when the event was routed.
    pub at: HostTime,
}

/// Emitted whenever the animation phase changes.
#[derive(Clone, Copy, Debug)]
pub struct PhaseChangeEvent {
    /// Phase before the transition.
    pub from: Phase,
    /// Phase after the transition.
    pub to: Phase,
    /// Host time of the transition.
    pub at: HostTime,
}

/// Emitted when a tick callback is registered with the host.
#[derive(Clone, Copy, Debug)]
pub struct ScheduleEvent {
    /// Which callback identity was scheduled.
    pub slot: TickSlot,
    /// When the callback should fire.
    pub due: HostTime,
    /// Host time when it was scheduled.
    pub at: HostTime,
}

/// Emitted when a tick callback is cancelled.
#[derive(Clone, Copy, Debug)]
pub struct CancelEvent {
    /// Which callback identity was cancelled.
    pub slot: TickSlot,
    /// Host time of the cancellation.
    pub at: HostTime,
}

/// Emitted after a tick has recomputed geometry and opacity.
#[derive(Clone, Copy, Debug)]
pub struct TickEvent {
    /// Which phase's tick ran.
    pub slot: TickSlot,
    /// Tick number within the phase, starting at 1.
    pub index: u32,
    /// Linear progress after this tick, clamped to 1.
    pub linear: f64,
    /// Eased progress used for the recomputation.
    pub eased: f64,
    /// Ripple radius after this tick.
    pub radius: f64,
    /// Background alpha after this tick.
    pub background_alpha: u8,
    /// Circle alpha after this tick.
    pub circle_alpha: u8,
    /// Host time when the tick ran.
    pub at: HostTime,
}

/// Emitted when a tick fires for a slot that is not the pending one, or in a
/// phase that no longer accepts it. The tick is ignored.
#[derive(Clone, Copy, Debug)]
pub struct StaleTickEvent {
    /// Slot of the ignored callback.
    pub slot: TickSlot,
    /// Phase at the time the stale tick arrived.
    pub phase: Phase,
    /// Host time when it arrived.
    pub at: HostTime,
}

/// Emitted by hosts after painting the ripple.
#[derive(Clone, Copy, Debug)]
pub struct DrawEvent {
    /// Combined alpha requested for the ripple.
    pub requested_alpha: u8,
    /// Alpha the background layer was painted with.
    pub background_alpha: u8,
    /// Alpha the circle layer was painted with.
    pub circle_alpha: u8,
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Host time of the draw.
    pub at: HostTime,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the ripple engine.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a pointer event is routed.
    fn on_touch(&mut self, e: &TouchEvent) {
        _ = e;
    }

    /// Called on every phase transition.
    fn on_phase_change(&mut self, e: &PhaseChangeEvent) {
        _ = e;
    }

    /// Called when a tick is scheduled.
    fn on_schedule(&mut self, e: &ScheduleEvent) {
        _ = e;
    }

    /// Called when a tick is cancelled.
    fn on_cancel(&mut self, e: &CancelEvent) {
        _ = e;
    }

    /// Called after each applied tick.
    fn on_tick(&mut self, e: &TickEvent) {
        _ = e;
    }

    /// Called when a stale tick is ignored.
    fn on_stale_tick(&mut self, e: &StaleTickEvent) {
        _ = e;
    }

    /// Called after the host paints the ripple.
    fn on_draw(&mut self, e: &DrawEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        Self::from_option(Some(sink))
    }

    /// Creates a tracer from an optional sink.
    #[inline]
    #[must_use]
    pub fn from_option(sink: Option<&'a mut dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::from_option(None)
    }

    /// Emits a [`TouchEvent`].
    #[inline]
    pub fn touch(&mut self, e: &TouchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_touch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PhaseChangeEvent`].
    #[inline]
    pub fn phase_change(&mut self, e: &PhaseChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ScheduleEvent`].
    #[inline]
    pub fn schedule(&mut self, e: &ScheduleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_schedule(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CancelEvent`].
    #[inline]
    pub fn cancel(&mut self, e: &CancelEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cancel(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TickEvent`].
    #[inline]
    pub fn tick(&mut self, e: &TickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StaleTickEvent`].
    #[inline]
    pub fn stale_tick(&mut self, e: &StaleTickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_stale_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DrawEvent`].
    #[inline]
    pub fn draw(&mut self, e: &DrawEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_draw(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
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
            index: 3,
            linear: 0.13,
            eased: 0.36,
            radius: 32.4,
            background_alpha: 61,
            circle_alpha: 91,
            at: HostTime(48),
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_tick(&sample_tick());
        sink.on_phase_change(&PhaseChangeEvent {
            from: Phase::Idle,
            to: Phase::Entering,
            at: HostTime(0),
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.tick(&sample_tick());
        tracer.cancel(&CancelEvent {
            slot: TickSlot::Exit,
            at: HostTime(0),
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            ticks: Vec<u32>,
        }
        impl TraceSink for RecordingSink {
            fn on_tick(&mut self, e: &TickEvent) {
                self.ticks.push(e.index);
            }
        }

        let mut sink = RecordingSink { ticks: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.tick(&sample_tick());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.ticks, &[3]);
    }
}
