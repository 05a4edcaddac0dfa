// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ripple animation state machine.
//!
//! [`RippleEngine`] ties the pieces together: pointer input restarts the
//! enter phase, the [`FrameScheduler`] drives tick chains through the host
//! timer, [`ProgressCurve`](crate::curve::ProgressCurve)s shape progress, and
//! [`draw`](RippleEngine::draw) splits the requested alpha between the two
//! painted layers.
//!
//! All entry points take the host as an argument; the engine holds no
//! reference to it between calls.

use kurbo::{Point, Size};

use crate::alpha::{self, LayerAlphas, Opacity};
use crate::backend::{PaintStyle, Painter, RippleHost, tracer};
use crate::color::Color;
use crate::config::{ConfigError, RippleConfig, validate_radius_percent};
use crate::scheduler::{FrameScheduler, TickSlot};
use crate::state::{Phase, RippleState};
use crate::time::{Duration, Timebase};
use crate::touch::{self, TouchAction, TouchPhase};
use crate::trace::{PhaseChangeEvent, StaleTickEvent, TickEvent, TouchEvent};

/// Drives one ripple on one host surface.
#[derive(Clone, Debug)]
pub struct RippleEngine {
    config: RippleConfig,
    state: RippleState,
    scheduler: FrameScheduler,
    completed_cycles: u64,
}

impl RippleEngine {
    /// Creates an idle engine.
    ///
    /// `timebase` describes the host clock; the configured frame interval is
    /// converted into host ticks once here.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in `config`, or
    /// [`ConfigError::ZeroFrameInterval`] if the interval rounds to zero
    /// ticks of the host clock.
    pub fn new(config: RippleConfig, timebase: Timebase) -> Result<Self, ConfigError> {
        config.validate()?;
        let interval = Duration::from_nanos(config.frame_interval_nanos, timebase);
        if interval.ticks() == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        Ok(Self {
            state: RippleState::new(&config),
            scheduler: FrameScheduler::new(interval),
            config,
            completed_cycles: 0,
        })
    }

    /// Current configuration, including setter updates.
    #[must_use]
    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Read-only view of the animation state.
    #[must_use]
    pub fn state(&self) -> &RippleState {
        &self.state
    }

    /// Current animation phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Tick scheduling state.
    #[must_use]
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Number of gestures that ran all the way back to `Idle`.
    #[must_use]
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    // -- Input -----------------------------------------------------------

    /// Routes a pointer event.
    pub fn on_touch<H: RippleHost + ?Sized>(
        &mut self,
        host: &mut H,
        phase: TouchPhase,
        position: Point,
    ) {
        let at = host.now();
        tracer(host).touch(&TouchEvent {
            phase,
            position,
            at,
        });
        match touch::route(phase, position) {
            TouchAction::StartEnter(point) => self.start_enter(host, point),
            TouchAction::RequestExit => self.request_exit(host),
            TouchAction::Ignore => {}
        }
    }

    /// Restarts the enter phase from `down_point`, cancelling any tick chain
    /// in flight.
    pub fn start_enter<H: RippleHost + ?Sized>(&mut self, host: &mut H, down_point: Point) {
        self.state.reset_for_enter(down_point);
        self.set_phase(host, Phase::Entering);
        self.scheduler.start(host, TickSlot::Enter);
    }

    /// Records that the pointer lifted or was cancelled.
    ///
    /// The exit starts right away if entry already completed. During entry it
    /// is deferred until entry completes; when `Idle` or already exiting
    /// nothing else happens.
    pub fn request_exit<H: RippleHost + ?Sized>(&mut self, host: &mut H) {
        self.state.touch_released = true;
        if self.state.phase == Phase::Held {
            self.start_exit(host);
        }
    }

    fn start_exit<H: RippleHost + ?Sized>(&mut self, host: &mut H) {
        self.state.exit_progress = 0.0;
        self.set_phase(host, Phase::Exiting);
        self.scheduler.start(host, TickSlot::Exit);
    }

    // -- Ticks -----------------------------------------------------------

    /// Handles a fired tick callback for `slot`.
    ///
    /// Callbacks for a slot that is no longer pending, or that do not belong
    /// to the current phase, are ignored.
    pub fn on_tick<H: RippleHost + ?Sized>(&mut self, host: &mut H, slot: TickSlot) {
        let Some(index) = self.scheduler.accept(slot) else {
            self.ignore_stale(host, slot);
            return;
        };
        match (slot, self.state.phase) {
            (TickSlot::Enter, Phase::Entering) => self.enter_tick(host, index),
            (TickSlot::Exit, Phase::Exiting) => self.exit_tick(host, index),
            _ => self.ignore_stale(host, slot),
        }
    }

    fn enter_tick<H: RippleHost + ?Sized>(&mut self, host: &mut H, index: u32) {
        let progress = self.state.enter_progress + self.config.progress_increment;
        let done = progress > 1.0;
        self.state.enter_progress = progress.min(1.0);
        let eased = if done {
            1.0
        } else {
            self.config.enter_curve.apply(progress)
        };
        self.state.apply_enter(eased, self.config.max_background_alpha);
        self.trace_tick(
            host,
            TickSlot::Enter,
            index,
            self.state.enter_progress,
            eased,
        );
        host.request_redraw();

        if done {
            self.set_phase(host, Phase::Held);
            self.on_enter_done(host);
        } else {
            self.scheduler.reschedule(host, TickSlot::Enter);
        }
    }

    fn on_enter_done<H: RippleHost + ?Sized>(&mut self, host: &mut H) {
        if self.state.touch_released {
            self.start_exit(host);
        }
    }

    fn exit_tick<H: RippleHost + ?Sized>(&mut self, host: &mut H, index: u32) {
        let progress = self.state.exit_progress + self.config.progress_increment;
        let done = progress > 1.0;
        self.state.exit_progress = progress.min(1.0);
        let eased = if done {
            1.0
        } else {
            self.config.exit_curve.apply(progress)
        };
        self.state.apply_exit(eased, self.config.max_background_alpha);
        self.trace_tick(
            host,
            TickSlot::Exit,
            index,
            self.state.exit_progress,
            eased,
        );
        host.request_redraw();

        if done {
            self.set_phase(host, Phase::Idle);
            self.completed_cycles = self.completed_cycles.saturating_add(1);
        } else {
            self.scheduler.reschedule(host, TickSlot::Exit);
        }
    }

    // -- Setters ---------------------------------------------------------

    /// Updates the surface bounds.
    ///
    /// The center moves to the middle of `bounds` and the end radius becomes
    /// the larger half-extent scaled by the radius percent. An active ripple
    /// keeps its radius clamped to the new range. Negative or non-finite
    /// extents are treated as 0.
    pub fn set_bounds<H: RippleHost + ?Sized>(&mut self, host: &mut H, bounds: Size) {
        self.state.set_bounds(bounds);
        host.request_redraw();
    }

    /// Changes the tint color.
    pub fn set_ripple_color<H: RippleHost + ?Sized>(&mut self, host: &mut H, color: Color) {
        self.config.color = color;
        self.state.ripple_color = color;
        host.request_redraw();
    }

    /// Sets or clears the color filter both layers are painted through.
    pub fn set_color_filter<H: RippleHost + ?Sized>(
        &mut self,
        host: &mut H,
        filter: Option<Color>,
    ) {
        self.state.color_filter = filter;
        host.request_redraw();
    }

    /// Changes the global alpha.
    pub fn set_alpha<H: RippleHost + ?Sized>(&mut self, host: &mut H, alpha: u8) {
        self.config.alpha = alpha;
        self.state.global_alpha = alpha;
        host.request_redraw();
    }

    /// Changes the fraction of the half-extent the ripple grows to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RadiusPercentOutOfRange`] unless
    /// `0 < radius_percent <= 1`; the current value is then kept.
    pub fn set_radius_percent<H: RippleHost + ?Sized>(
        &mut self,
        host: &mut H,
        radius_percent: f64,
    ) -> Result<(), ConfigError> {
        validate_radius_percent(radius_percent)?;
        self.config.radius_percent = radius_percent;
        self.state.set_radius_percent(radius_percent);
        host.request_redraw();
        Ok(())
    }

    // -- Getters ---------------------------------------------------------

    /// Global alpha last set.
    #[must_use]
    pub fn alpha(&self) -> u8 {
        self.state.global_alpha
    }

    /// Tint color last set.
    #[must_use]
    pub fn ripple_color(&self) -> Color {
        self.state.ripple_color
    }

    /// Color filter last set.
    #[must_use]
    pub fn color_filter(&self) -> Option<Color> {
        self.state.color_filter
    }

    /// Combined alpha requested for the ripple.
    #[must_use]
    pub fn requested_alpha(&self) -> u8 {
        self.state.requested_alpha()
    }

    /// How the ripple covers what lies beneath it, judged from the requested
    /// alpha.
    #[must_use]
    pub fn opacity(&self) -> Opacity {
        Opacity::classify(self.requested_alpha())
    }

    /// Alphas the next [`draw`](Self::draw) paints with.
    ///
    /// The circle is scaled by its own progress alpha rather than the
    /// requested alpha, which is already folded into the split; scaling by it
    /// again would keep the held composite below the requested alpha.
    #[must_use]
    pub fn layer_alphas(&self) -> LayerAlphas {
        alpha::split(self.requested_alpha(), self.state.background_alpha)
            .with_circle_progress(self.state.circle_alpha)
    }

    // -- Drawing ---------------------------------------------------------

    /// Paints the background wash, then the circle.
    ///
    /// Layers with zero alpha, and a circle with no radius, are skipped.
    /// Returns the alphas used.
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) -> LayerAlphas {
        let layers = self.layer_alphas();
        let color = self.state.ripple_color;
        let color_filter = self.state.color_filter;
        if layers.background > 0 {
            painter.fill_background(PaintStyle {
                color,
                alpha: layers.background,
                color_filter,
            });
        }
        if layers.circle > 0 && self.state.current_radius > 0.0 {
            painter.fill_circle(
                self.state.current_point,
                self.state.current_radius,
                PaintStyle {
                    color,
                    alpha: layers.circle,
                    color_filter,
                },
            );
        }
        layers
    }

    // -- Internals -------------------------------------------------------

    fn set_phase<H: RippleHost + ?Sized>(&mut self, host: &mut H, to: Phase) {
        let from = self.state.phase;
        self.state.phase = to;
        if from != to {
            let at = host.now();
            tracer(host).phase_change(&PhaseChangeEvent { from, to, at });
        }
    }

    fn ignore_stale<H: RippleHost + ?Sized>(&self, host: &mut H, slot: TickSlot) {
        let at = host.now();
        tracer(host).stale_tick(&StaleTickEvent {
            slot,
            phase: self.state.phase,
            at,
        });
    }

    fn trace_tick<H: RippleHost + ?Sized>(
        &self,
        host: &mut H,
        slot: TickSlot,
        index: u32,
        linear: f64,
        eased: f64,
    ) {
        let at = host.now();
        tracer(host).tick(&TickEvent {
            slot,
            index,
            linear,
            eased,
            radius: self.state.current_radius,
            background_alpha: self.state.background_alpha,
            circle_alpha: self.state.circle_alpha,
            at,
        });
    }
}
