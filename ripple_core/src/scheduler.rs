// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick scheduling with one callback slot per animation phase.
//!
//! The [`FrameScheduler`] owns the bookkeeping for the two callback
//! identities ([`TickSlot::Enter`] and [`TickSlot::Exit`]) and enforces that
//! at most one of them is pending at any time:
//!
//! - [`start`](FrameScheduler::start) cancels **both** slots with the host
//!   before scheduling the new phase's first tick at "now".
//! - [`reschedule`](FrameScheduler::reschedule) re-arms the firing slot at
//!   `now + interval`, measured from the host clock at the time of the call,
//!   so a late tick never triggers catch-up ticks.
//! - [`accept`](FrameScheduler::accept) filters fired callbacks: a callback
//!   for a slot that is not the pending one (cancelled after the host had
//!   already dequeued it) is reported as stale.

use crate::backend::{RippleHost, tracer};
use crate::time::{Duration, HostTime};
use crate::trace::{CancelEvent, ScheduleEvent};

/// Callback identity for a phase's tick chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TickSlot {
    /// Ticks of the enter phase.
    Enter,
    /// Ticks of the exit phase.
    Exit,
}

impl TickSlot {
    /// Both slots, in cancellation order.
    pub const ALL: [Self; 2] = [Self::Enter, Self::Exit];

    /// Dense index for per-slot arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Enter => 0,
            Self::Exit => 1,
        }
    }

    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
        }
    }
}

/// Programs the host's timer for the ripple's tick chains.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    interval: Duration,
    pending: Option<TickSlot>,
    chain_ticks: u32,
}

impl FrameScheduler {
    /// Creates a scheduler that spaces ticks by `interval` host ticks.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            chain_ticks: 0,
        }
    }

    /// Delay between two ticks of a chain.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// The slot whose callback is currently registered with the host.
    #[must_use]
    pub const fn pending(&self) -> Option<TickSlot> {
        self.pending
    }

    /// Number of ticks accepted since the current chain started.
    #[must_use]
    pub const fn chain_ticks(&self) -> u32 {
        self.chain_ticks
    }

    /// Starts a new tick chain for `slot`, firing as soon as possible.
    ///
    /// Both slots are cancelled first, so no tick of the previous chain can
    /// run after this returns.
    pub fn start<H: RippleHost + ?Sized>(&mut self, host: &mut H, slot: TickSlot) {
        self.cancel_all(host);
        self.chain_ticks = 0;
        let now = host.now();
        self.arm(host, slot, now, now);
    }

    /// Re-arms `slot` one interval after the current host time.
    pub fn reschedule<H: RippleHost + ?Sized>(&mut self, host: &mut H, slot: TickSlot) {
        let now = host.now();
        self.arm(host, slot, now, now.saturating_add(self.interval));
    }

    /// Cancels both slots with the host. Idempotent.
    pub fn cancel_all<H: RippleHost + ?Sized>(&mut self, host: &mut H) {
        let was_pending = self.pending.take();
        let now = host.now();
        for slot in TickSlot::ALL {
            host.cancel(slot);
            if was_pending == Some(slot) {
                tracer(host).cancel(&CancelEvent { slot, at: now });
            }
        }
    }

    /// Accepts a fired callback for `slot`.
    ///
    /// Returns the tick's index within its chain (starting at 1), or `None`
    /// if `slot` is not the pending slot and the callback must be ignored.
    /// After acceptance nothing is pending until the caller reschedules.
    pub fn accept(&mut self, slot: TickSlot) -> Option<u32> {
        if self.pending != Some(slot) {
            return None;
        }
        self.pending = None;
        self.chain_ticks = self.chain_ticks.saturating_add(1);
        Some(self.chain_ticks)
    }

    fn arm<H: RippleHost + ?Sized>(
        &mut self,
        host: &mut H,
        slot: TickSlot,
        now: HostTime,
        due: HostTime,
    ) {
        host.schedule(slot, due);
        self.pending = Some(slot);
        tracer(host).schedule(&ScheduleEvent {
            slot,
            due,
            at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_host::{HostCall, RecordingHost};

    #[test]
    fn start_cancels_both_slots_before_scheduling() {
        let mut host = RecordingHost {
            now: HostTime(100),
            ..RecordingHost::default()
        };
        let mut sched = FrameScheduler::new(Duration(16));

        sched.start(&mut host, TickSlot::Exit);

        assert_eq!(
            host.calls,
            [
                HostCall::Cancel(TickSlot::Enter),
                HostCall::Cancel(TickSlot::Exit),
                HostCall::Schedule(TickSlot::Exit, HostTime(100)),
            ]
        );
        assert_eq!(sched.pending(), Some(TickSlot::Exit));
    }

    #[test]
    fn restart_leaves_exactly_one_pending_chain() {
        let mut host = RecordingHost::default();
        let mut sched = FrameScheduler::new(Duration(16));

        sched.start(&mut host, TickSlot::Enter);
        sched.start(&mut host, TickSlot::Exit);
        sched.start(&mut host, TickSlot::Enter);

        assert_eq!(host.pending_count(), 1, "only one slot may be pending");
        assert_eq!(host.pending(TickSlot::Enter), Some(HostTime(0)));
        assert_eq!(sched.pending(), Some(TickSlot::Enter));
    }

    #[test]
    fn reschedule_is_relative_to_now() {
        let mut host = RecordingHost::default();
        let mut sched = FrameScheduler::new(Duration(16));
        sched.start(&mut host, TickSlot::Enter);
        assert!(host.fire(TickSlot::Enter));
        assert_eq!(sched.accept(TickSlot::Enter), Some(1));

        // The tick ran late; the next one is due an interval after "now",
        // not an interval after the missed due time.
        host.now = HostTime(50);
        sched.reschedule(&mut host, TickSlot::Enter);
        assert_eq!(host.pending(TickSlot::Enter), Some(HostTime(66)));
    }

    #[test]
    fn accept_rejects_stale_slot() {
        let mut host = RecordingHost::default();
        let mut sched = FrameScheduler::new(Duration(16));
        sched.start(&mut host, TickSlot::Enter);
        sched.start(&mut host, TickSlot::Exit);

        assert_eq!(sched.accept(TickSlot::Enter), None, "enter was cancelled");
        assert_eq!(sched.accept(TickSlot::Exit), Some(1));
        assert_eq!(sched.accept(TickSlot::Exit), None, "already consumed");
    }

    #[test]
    fn chain_ticks_count_from_start() {
        let mut host = RecordingHost::default();
        let mut sched = FrameScheduler::new(Duration(16));
        sched.start(&mut host, TickSlot::Enter);
        for expected in 1..=3 {
            assert_eq!(sched.accept(TickSlot::Enter), Some(expected));
            sched.reschedule(&mut host, TickSlot::Enter);
        }
        sched.start(&mut host, TickSlot::Exit);
        assert_eq!(sched.chain_ticks(), 0);
        assert_eq!(sched.accept(TickSlot::Exit), Some(1));
    }

    #[test]
    fn cancel_all_is_idempotent() {
        let mut host = RecordingHost::default();
        let mut sched = FrameScheduler::new(Duration(16));
        sched.cancel_all(&mut host);
        sched.cancel_all(&mut host);
        assert_eq!(sched.pending(), None);
        assert_eq!(host.pending_count(), 0);
    }
}
