// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch ripple animation engine.
//!
//! `ripple_core` animates the ink ripple shown when a pointer presses a
//! surface: a circle grows from the touch point toward the surface center over
//! a background wash, then both fade out once the pointer lifts. It is
//! `no_std` compatible (with `alloc`) and owns no timer, clock, or canvas; the
//! host supplies them through the [`backend`] traits.
//!
//! # Architecture
//!
//! ```text
//!   Host pointer event
//!       │
//!       ▼
//!   touch::route() ──► RippleEngine::start_enter / request_exit
//!                               │
//!                               ▼
//!   FrameScheduler::start() ──► RippleHost::schedule(slot, at)
//!                                           │
//!                 ┌─────────────────────────┘
//!                 ▼
//!   RippleEngine::on_tick(slot) ──► ProgressCurve::apply() ──► RippleState
//!                                                                  │
//!                 ┌────────────────────────────────────────────────┘
//!                 ▼
//!   RippleEngine::draw() ──► alpha::split() ──► Painter
//! ```
//!
//! **[`engine`]** — The phase state machine
//! (`Idle → Entering → Held → Exiting → Idle`). A pointer-down restarts entry
//! from any phase; a release during entry is deferred until entry completes.
//!
//! **[`scheduler`]** — One callback slot per phase, at most one pending at a
//! time, with stale-callback rejection.
//!
//! **[`curve`]** — Ease-in and ease-out progress curves.
//!
//! **[`alpha`]** — Integer alpha arithmetic that splits the requested alpha
//! between the background and circle layers so their source-over composite
//! reproduces it.
//!
//! **[`state`]** — Geometry and opacity of the ripple.
//!
//! **[`touch`]** — Pointer phases and their routing.
//!
//! **[`backend`]** — The [`RippleHost`](backend::RippleHost) and
//! [`Painter`](backend::Painter) traits hosts implement.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types,
//! with the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod alpha;
pub mod backend;
pub mod color;
pub mod config;
pub mod curve;
pub mod engine;
pub mod scheduler;
pub mod state;
pub mod time;
pub mod touch;
pub mod trace;
