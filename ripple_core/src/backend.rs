// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! The engine never owns a timer, a clock, or a canvas. A host surface (a
//! native view, a DOM element, a simulated test surface) provides them through
//! two traits:
//!
//! - [`RippleHost`] — monotonic clock, one-shot tick callbacks keyed by
//!   [`TickSlot`], redraw requests, and an optional [`TraceSink`].
//! - [`Painter`] — the two drawing primitives the ripple needs.
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! // Pointer input
//! engine.on_touch(&mut host, TouchPhase::Down, Point::new(x, y));
//!
//! // A scheduled callback fired
//! engine.on_tick(&mut host, slot);
//!
//! // The host honours a redraw request
//! engine.draw(&mut painter);
//! ```

use kurbo::Point;

use crate::alpha;
use crate::color::Color;
use crate::scheduler::TickSlot;
use crate::time::HostTime;
use crate::trace::{TraceSink, Tracer};

/// Timer, clock, and invalidation services provided by the host surface.
///
/// All calls happen on the host's UI thread. `schedule` and `cancel` are keyed
/// by callback identity: scheduling a slot that is already pending replaces
/// it, and cancelling a slot that is not pending does nothing.
pub trait RippleHost {
    /// Current monotonic host time.
    fn now(&self) -> HostTime;

    /// Registers a one-shot callback for `slot` at `at`.
    ///
    /// When it fires the host calls
    /// [`RippleEngine::on_tick`](crate::engine::RippleEngine::on_tick).
    fn schedule(&mut self, slot: TickSlot, at: HostTime);

    /// Removes a pending callback for `slot`, if any.
    fn cancel(&mut self, slot: TickSlot);

    /// Hints that the surface should be drawn again. May be coalesced.
    fn request_redraw(&mut self);

    /// Sink for engine trace events.
    fn trace_sink(&mut self) -> Option<&mut dyn TraceSink> {
        None
    }
}

/// Fill style for one draw call, computed fresh per draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaintStyle {
    /// Tint color; its own alpha channel is ignored.
    pub color: Color,
    /// Alpha to paint with.
    pub alpha: u8,
    /// Source-in color filter. When set, its RGB replaces the tint and its
    /// alpha scales [`alpha`](Self::alpha).
    pub color_filter: Option<Color>,
}

impl PaintStyle {
    /// The packed color to paint, with [`alpha`](Self::alpha) and the color
    /// filter applied.
    #[must_use]
    pub fn argb(self) -> Color {
        match self.color_filter {
            Some(filter) => filter.with_alpha(alpha::scale(self.alpha, filter.alpha())),
            None => self.color.with_alpha(self.alpha),
        }
    }
}

/// Drawing primitives the ripple paints with.
///
/// Implementations fill with source-over blending and anti-aliasing.
pub trait Painter {
    /// Fills the whole surface bounds.
    fn fill_background(&mut self, style: PaintStyle);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, style: PaintStyle);
}

pub(crate) fn tracer<H: RippleHost + ?Sized>(host: &mut H) -> Tracer<'_> {
    Tracer::from_option(host.trace_sink())
}

#[cfg(test)]
pub(crate) mod test_host {
    //! Recording host double shared by the engine and scheduler tests.

    use alloc::vec::Vec;

    use super::RippleHost;
    use crate::scheduler::TickSlot;
    use crate::time::HostTime;

    /// Host call, in order of arrival.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) enum HostCall {
        Schedule(TickSlot, HostTime),
        Cancel(TickSlot),
        Redraw,
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingHost {
        pub(crate) now: HostTime,
        pub(crate) calls: Vec<HostCall>,
        pub(crate) pending: [Option<HostTime>; 2],
    }

    impl RecordingHost {
        pub(crate) fn pending(&self, slot: TickSlot) -> Option<HostTime> {
            self.pending[slot.index()]
        }

        pub(crate) fn pending_count(&self) -> usize {
            self.pending.iter().filter(|p| p.is_some()).count()
        }

        /// Takes the pending callback for `slot`, advancing the clock to its
        /// due time. Returns `false` if nothing was pending.
        pub(crate) fn fire(&mut self, slot: TickSlot) -> bool {
            match self.pending[slot.index()].take() {
                Some(due) => {
                    self.now = self.now.max(due);
                    true
                }
                None => false,
            }
        }

        pub(crate) fn schedules(&self, slot: TickSlot) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, HostCall::Schedule(s, _) if *s == slot))
                .count()
        }

        pub(crate) fn redraws(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, HostCall::Redraw))
                .count()
        }
    }

    impl RippleHost for RecordingHost {
        fn now(&self) -> HostTime {
            self.now
        }

        fn schedule(&mut self, slot: TickSlot, at: HostTime) {
            self.pending[slot.index()] = Some(at);
            self.calls.push(HostCall::Schedule(slot, at));
        }

        fn cancel(&mut self, slot: TickSlot) {
            self.pending[slot.index()] = None;
            self.calls.push(HostCall::Cancel(slot));
        }

        fn request_redraw(&mut self) {
            self.calls.push(HostCall::Redraw);
        }
    }
}
