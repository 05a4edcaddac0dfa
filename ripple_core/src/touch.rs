// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input routing.
//!
//! Only the pointer-down position matters: the ripple always travels from the
//! touch point toward the surface center, so moves are ignored and the
//! release position is accepted but unused. Release and cancellation are
//! handled identically.

use kurbo::Point;

/// The four pointer phases a host delivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The pointer contacted the surface.
    Down,
    /// The pointer moved while in contact.
    Move,
    /// The pointer lifted.
    Up,
    /// The gesture was taken away (e.g. by a scrolling parent).
    Cancel,
}

impl TouchPhase {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Move => "move",
            Self::Up => "up",
            Self::Cancel => "cancel",
        }
    }
}

/// What the engine should do in response to a pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchAction {
    /// Restart the enter phase from this point.
    StartEnter(Point),
    /// Ask for the exit phase, deferred until entry completes.
    RequestExit,
    /// Nothing to do.
    Ignore,
}

/// Maps a pointer event to an engine action.
#[must_use]
pub fn route(phase: TouchPhase, position: Point) -> TouchAction {
    match phase {
        TouchPhase::Down => TouchAction::StartEnter(position),
        TouchPhase::Move => TouchAction::Ignore,
        TouchPhase::Up | TouchPhase::Cancel => TouchAction::RequestExit,
    }
}
