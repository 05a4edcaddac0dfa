// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ripple geometry and opacity state.
//!
//! One [`RippleState`] exists per surface. It is reset, never reallocated, on
//! each pointer-down, and only the [`RippleEngine`](crate::engine::RippleEngine)
//! mutates it. Readers get a shared reference.

use kurbo::{Point, Size};

use crate::alpha;
use crate::color::Color;
use crate::config::{MAX_CIRCLE_ALPHA, RippleConfig};

/// Animation phase.
///
/// `Idle → Entering → Held → Exiting → Idle`; a pointer-down from any phase
/// restarts at `Entering`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing is animating and nothing is visible.
    #[default]
    Idle,
    /// The ripple is growing from the touch point toward the center.
    Entering,
    /// Fully entered, waiting for the pointer to lift.
    Held,
    /// Fading out at full size.
    Exiting,
}

impl Phase {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Entering => "entering",
            Self::Held => "held",
            Self::Exiting => "exiting",
        }
    }
}

/// Geometry, opacity, and progress of the ripple.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleState {
    /// Current animation phase.
    pub phase: Phase,
    /// Where the pointer went down.
    pub down_point: Point,
    /// Geometric center of the surface bounds.
    pub center_point: Point,
    /// Radius at the start of entry.
    pub start_radius: f64,
    /// Radius at full entry.
    pub end_radius: f64,
    /// Circle center for the current frame.
    pub current_point: Point,
    /// Circle radius for the current frame.
    pub current_radius: f64,
    /// Background layer alpha driven by progress.
    pub background_alpha: u8,
    /// Circle layer alpha driven by progress.
    pub circle_alpha: u8,
    /// Linear enter progress, clamped to 1 once entry completes.
    pub enter_progress: f64,
    /// Linear exit progress, clamped to 1 once exit completes.
    pub exit_progress: f64,
    /// Set when the pointer lifted or was cancelled; an exit requested during
    /// entry is honoured once entry completes.
    pub touch_released: bool,
    /// Global alpha applied on top of the tint alpha.
    pub global_alpha: u8,
    /// Tint color.
    pub ripple_color: Color,
    /// Optional source-in color filter applied when painting.
    pub color_filter: Option<Color>,
    /// Fraction of the half-extent the ripple grows to.
    pub radius_percent: f64,
    /// Last bounds reported by the host.
    pub bounds: Size,
}

impl RippleState {
    /// Creates the idle state for a configuration.
    #[must_use]
    pub fn new(config: &RippleConfig) -> Self {
        Self {
            phase: Phase::Idle,
            down_point: Point::ZERO,
            center_point: Point::ZERO,
            start_radius: 0.0,
            end_radius: 0.0,
            current_point: Point::ZERO,
            current_radius: 0.0,
            background_alpha: 0,
            circle_alpha: 0,
            enter_progress: 0.0,
            exit_progress: 0.0,
            touch_released: false,
            global_alpha: config.alpha,
            ripple_color: config.color,
            color_filter: None,
            radius_percent: config.radius_percent,
            bounds: Size::ZERO,
        }
    }

    /// Combined alpha the ripple should show: the tint's own alpha scaled by
    /// the global alpha.
    #[must_use]
    pub fn requested_alpha(&self) -> u8 {
        alpha::scale(self.ripple_color.alpha(), self.global_alpha)
    }

    /// Whether a phase other than `Idle` is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Stores new bounds. Negative or non-finite extents count as 0.
    pub(crate) fn set_bounds(&mut self, bounds: Size) {
        let bounds = Size::new(extent(bounds.width), extent(bounds.height));
        self.bounds = bounds;
        self.center_point = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        self.recompute_radii();
    }

    pub(crate) fn set_radius_percent(&mut self, radius_percent: f64) {
        self.radius_percent = radius_percent;
        self.recompute_radii();
    }

    fn recompute_radii(&mut self) {
        let max_radius = self.center_point.x.max(self.center_point.y);
        self.start_radius = 0.0;
        self.end_radius = max_radius * self.radius_percent;
        if self.is_active() {
            self.current_radius = self
                .current_radius
                .clamp(self.start_radius, self.end_radius);
        }
    }

    /// Resets progress for a new gesture starting at `down_point`.
    pub(crate) fn reset_for_enter(&mut self, down_point: Point) {
        self.down_point = down_point;
        self.enter_progress = 0.0;
        self.exit_progress = 0.0;
        self.circle_alpha = MAX_CIRCLE_ALPHA;
        self.touch_released = false;
        self.current_point = down_point;
        self.current_radius = self.start_radius;
    }

    /// Recomputes geometry and opacity for eased enter progress `p`.
    pub(crate) fn apply_enter(&mut self, p: f64, max_background: u8) {
        self.current_radius = lerp(self.start_radius, self.end_radius, p)
            .clamp(self.start_radius, self.end_radius);
        self.current_point = self.down_point.lerp(self.center_point, p);
        self.background_alpha = lerp_alpha(0, max_background, p);
        self.circle_alpha = lerp_alpha(0, MAX_CIRCLE_ALPHA, p);
    }

    /// Recomputes opacity for eased exit progress `p`. Geometry stays at its
    /// fully entered values.
    pub(crate) fn apply_exit(&mut self, p: f64, max_background: u8) {
        self.background_alpha = lerp_alpha(max_background, 0, p);
        self.circle_alpha = lerp_alpha(MAX_CIRCLE_ALPHA, 0, p);
    }
}

fn extent(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// `a + (b - a) * p`.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, p: f64) -> f64 {
    a + (b - a) * p
}

/// Interpolates an alpha channel, truncating toward zero.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to the u8 range before the cast"
)]
pub fn lerp_alpha(from: u8, to: u8, p: f64) -> u8 {
    let value = lerp(f64::from(from), f64::from(to), p);
    if value.is_nan() {
        return from;
    }
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entered_state() -> RippleState {
        let mut state = RippleState::new(&RippleConfig::view());
        state.set_bounds(Size::new(200.0, 200.0));
        state
    }

    #[test]
    fn bounds_derive_center_and_end_radius() {
        let state = entered_state();
        assert_eq!(state.center_point, Point::new(100.0, 100.0));
        assert!(state.start_radius.abs() < 1e-12);
        assert!((state.end_radius - 90.0).abs() < 1e-9);
    }

    #[test]
    fn end_radius_uses_larger_half_extent() {
        let mut state = RippleState::new(&RippleConfig::standard());
        state.set_bounds(Size::new(300.0, 100.0));
        assert!((state.end_radius - 150.0 * 0.7).abs() < 1e-9);
        state.set_radius_percent(1.0);
        assert!((state.end_radius - 150.0).abs() < 1e-9);
    }

    #[test]
    fn enter_interpolates_toward_center() {
        let mut state = entered_state();
        state.reset_for_enter(Point::new(20.0, 20.0));
        state.apply_enter(0.5, 172);
        assert!((state.current_radius - 45.0).abs() < 1e-9);
        assert_eq!(state.current_point, Point::new(60.0, 60.0));
        assert_eq!(state.background_alpha, 86);
        assert_eq!(state.circle_alpha, 127);

        state.apply_enter(1.0, 172);
        assert!((state.current_radius - 90.0).abs() < 1e-9);
        assert_eq!(state.current_point, Point::new(100.0, 100.0));
        assert_eq!(state.background_alpha, 172);
        assert_eq!(state.circle_alpha, 255);
    }

    #[test]
    fn exit_fades_without_moving() {
        let mut state = entered_state();
        state.reset_for_enter(Point::new(20.0, 20.0));
        state.apply_enter(1.0, 172);
        state.apply_exit(0.25, 172);
        assert_eq!(state.background_alpha, 129);
        assert_eq!(state.circle_alpha, 191);
        assert!((state.current_radius - 90.0).abs() < 1e-9);
        state.apply_exit(1.0, 172);
        assert_eq!(state.background_alpha, 0);
        assert_eq!(state.circle_alpha, 0);
    }

    #[test]
    fn shrinking_bounds_clamp_active_radius() {
        let mut state = entered_state();
        state.reset_for_enter(Point::new(20.0, 20.0));
        state.phase = Phase::Held;
        state.apply_enter(1.0, 172);
        state.set_bounds(Size::new(100.0, 100.0));
        assert!((state.current_radius - 45.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_bounds_collapse_to_zero() {
        for size in [
            Size::new(-200.0, -200.0),
            Size::new(f64::NAN, f64::NAN),
            Size::new(f64::INFINITY, -1.0),
        ] {
            let mut state = RippleState::new(&RippleConfig::view());
            state.set_bounds(size);
            assert!(state.end_radius.is_finite() && state.end_radius >= 0.0);
            state.reset_for_enter(Point::new(20.0, 20.0));
            state.phase = Phase::Entering;
            state.apply_enter(0.5, 172);
            assert!(state.current_radius.abs() < 1e-12, "{size:?} grew a ripple");
        }

        let mut state = RippleState::new(&RippleConfig::view());
        state.set_bounds(Size::new(f64::NAN, 50.0));
        assert_eq!(state.bounds, Size::new(0.0, 50.0));
        assert_eq!(state.center_point, Point::new(0.0, 25.0));
        assert!((state.end_radius - 22.5).abs() < 1e-9);
    }

    #[test]
    fn shrinking_to_negative_bounds_while_held() {
        let mut state = entered_state();
        state.reset_for_enter(Point::new(20.0, 20.0));
        state.phase = Phase::Held;
        state.apply_enter(1.0, 172);
        state.set_bounds(Size::new(-10.0, -10.0));
        assert_eq!(state.bounds, Size::ZERO);
        assert!(state.current_radius.abs() < 1e-12);
    }

    #[test]
    fn requested_alpha_scales_tint_by_global_alpha() {
        let mut state = RippleState::new(&RippleConfig::standard());
        assert_eq!(state.requested_alpha(), 0x66);
        state.global_alpha = 128;
        assert_eq!(state.requested_alpha(), 51);
        state.global_alpha = 0;
        assert_eq!(state.requested_alpha(), 0);
    }

    #[test]
    fn lerp_alpha_truncates_and_clamps() {
        assert_eq!(lerp_alpha(0, 255, 0.999), 254);
        assert_eq!(lerp_alpha(0, 255, 1.5), 255);
        assert_eq!(lerp_alpha(172, 0, -1.0), 255);
        assert_eq!(lerp_alpha(10, 20, f64::NAN), 10);
    }
}
