// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated view that owns an engine.

use kurbo::{Point, Size};

use ripple_core::backend::RippleHost;
use ripple_core::color::Color;
use ripple_core::config::{ConfigError, RippleConfig};
use ripple_core::engine::RippleEngine;
use ripple_core::scheduler::TickSlot;
use ripple_core::time::{Duration, HostTime, Timebase};
use ripple_core::touch::TouchPhase;
use ripple_core::trace::{DrawEvent, NoopSink, TraceSink, Tracer};

use crate::host::SimHost;
use crate::paint::DrawList;

/// A view hosting one ripple, driven by a virtual millisecond clock.
#[derive(Debug)]
pub struct SimSurface<S = NoopSink> {
    engine: RippleEngine,
    host: SimHost<S>,
    frame: DrawList,
    frames_rendered: u64,
}

impl SimSurface {
    /// Creates a surface without tracing.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`RippleEngine::new`].
    pub fn new(config: RippleConfig) -> Result<Self, ConfigError> {
        Self::with_sink(config, NoopSink)
    }
}

impl<S: TraceSink> SimSurface<S> {
    /// Creates a surface whose engine traces into `sink`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`RippleEngine::new`].
    pub fn with_sink(config: RippleConfig, sink: S) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: RippleEngine::new(config, Timebase::MILLIS)?,
            host: SimHost::with_sink(sink),
            frame: DrawList::new(),
            frames_rendered: 0,
        })
    }

    /// The hosted engine.
    pub fn engine(&self) -> &RippleEngine {
        &self.engine
    }

    /// The simulated host.
    pub fn host(&self) -> &SimHost<S> {
        &self.host
    }

    /// Consumes the surface and returns its trace sink.
    pub fn into_sink(self) -> S {
        self.host.into_sink()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.host.now().ticks()
    }

    /// Lays the surface out at `width × height`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.engine.set_bounds(&mut self.host, Size::new(width, height));
    }

    /// Delivers a pointer event. The event is always consumed.
    pub fn touch(&mut self, phase: TouchPhase, x: f64, y: f64) -> bool {
        self.engine.on_touch(&mut self.host, phase, Point::new(x, y));
        true
    }

    /// Changes the tint color.
    pub fn set_ripple_color(&mut self, color: Color) {
        self.engine.set_ripple_color(&mut self.host, color);
    }

    /// Sets or clears the color filter.
    pub fn set_color_filter(&mut self, filter: Option<Color>) {
        self.engine.set_color_filter(&mut self.host, filter);
    }

    /// Changes the global alpha.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.engine.set_alpha(&mut self.host, alpha);
    }

    /// Changes the fraction of the half-extent the ripple grows to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RadiusPercentOutOfRange`] for values outside
    /// `(0, 1]`.
    pub fn set_radius_percent(&mut self, radius_percent: f64) -> Result<(), ConfigError> {
        self.engine.set_radius_percent(&mut self.host, radius_percent)
    }

    /// Moves the clock forward by `ms`, firing every timer that falls due in
    /// time order. Timers scheduled by a fired tick run too if they fall due
    /// before the new time.
    ///
    /// Returns the number of callbacks fired.
    pub fn advance(&mut self, ms: u64) -> usize {
        let deadline = self.host.now().saturating_add(Duration(ms));
        let mut fired = 0;
        while let Some((slot, due)) = self.host.pop_due(deadline) {
            self.host.set_now(due);
            self.engine.on_tick(&mut self.host, slot);
            fired += 1;
        }
        self.host.set_now(deadline);
        fired
    }

    /// Delivers a callback for `slot` as if the host had dequeued it just
    /// before it was cancelled.
    pub fn deliver_late(&mut self, slot: TickSlot) {
        self.engine.on_tick(&mut self.host, slot);
    }

    /// Advances one frame interval at a time until nothing is pending, or
    /// `limit_ms` has elapsed. Returns `true` if the surface went quiet.
    pub fn run_until_idle(&mut self, limit_ms: u64) -> bool {
        let step = self.engine.scheduler().interval().ticks().max(1);
        let limit = self.host.now().saturating_add(Duration(limit_ms));
        while self.host.pending_count() > 0 {
            if self.host.now() >= limit {
                return false;
            }
            self.advance(step);
        }
        true
    }

    /// Whether the engine asked for a redraw since the last
    /// [`render`](Self::render).
    pub fn needs_redraw(&self) -> bool {
        self.host.needs_redraw()
    }

    /// Draws the ripple into a fresh [`DrawList`].
    pub fn render(&mut self) -> &DrawList {
        self.host.take_redraw();
        self.frame.clear();
        let layers = self.engine.draw(&mut self.frame);
        let state = self.engine.state();
        let event = DrawEvent {
            requested_alpha: self.engine.requested_alpha(),
            background_alpha: layers.background,
            circle_alpha: layers.circle,
            center: state.current_point,
            radius: state.current_radius,
            at: self.host.now(),
        };
        Tracer::from_option(self.host.trace_sink()).draw(&event);
        self.frames_rendered += 1;
        &self.frame
    }

    /// Number of [`render`](Self::render) calls so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Virtual time of the next pending callback.
    pub fn next_due(&self) -> Option<HostTime> {
        TickSlot::ALL
            .into_iter()
            .filter_map(|slot| self.host.pending(slot))
            .min()
    }
}
