// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic simulated host for the ripple engine.
//!
//! [`SimSurface`] plays the part of a platform view: it owns a
//! [`RippleEngine`](ripple_core::engine::RippleEngine), a virtual millisecond
//! clock with a two-slot timer table ([`host::SimHost`]), and a recording
//! painter ([`paint::DrawList`]). Time only moves when
//! [`advance`](SimSurface::advance) is called, so whole gestures can be
//! replayed exactly in tests and demos.

pub mod host;
pub mod paint;
mod surface;

pub use surface::SimSurface;
