// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ripple configuration and validation.

use core::fmt;

use crate::color::Color;
use crate::curve::ProgressCurve;

/// Linear progress added per tick in both phases: a 16 ms frame over a
/// nominal 360 ms sweep, so one phase takes 23 ticks.
pub const DEFAULT_PROGRESS_INCREMENT: f64 = 16.0 / 360.0;

/// Default tick interval (~60 Hz).
pub const DEFAULT_FRAME_INTERVAL_NANOS: u64 = 16_000_000;

/// Peak alpha of the background wash when the ripple is fully entered.
pub const MAX_BACKGROUND_ALPHA: u8 = 172;

/// Peak alpha of the circle layer.
pub const MAX_CIRCLE_ALPHA: u8 = 255;

/// Errors from [`RippleConfig::validate`] and the engine's fallible setters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `radius_percent` is not a finite value in `(0, 1]`.
    RadiusPercentOutOfRange(f64),
    /// `progress_increment` is not a finite positive value, so a phase would
    /// never finish.
    NonPositiveIncrement(f64),
    /// `frame_interval_nanos` is zero, or rounds to zero host ticks.
    ZeroFrameInterval,
    /// An easing curve has a non-finite or non-positive strength.
    InvalidCurve(ProgressCurve),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadiusPercentOutOfRange(value) => {
                write!(f, "radius percent {value} is outside (0, 1]")
            }
            Self::NonPositiveIncrement(value) => {
                write!(f, "progress increment {value} must be positive")
            }
            Self::ZeroFrameInterval => write!(f, "frame interval must be non-zero"),
            Self::InvalidCurve(curve) => write!(f, "invalid easing curve {curve:?}"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Configuration for a [`RippleEngine`](crate::engine::RippleEngine).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleConfig {
    /// Tint color. Its alpha channel is the ripple's own opacity.
    pub color: Color,
    /// Global alpha applied on top of the tint alpha (0–255).
    pub alpha: u8,
    /// Fraction of the half-extent the ripple grows to, in `(0, 1]`.
    pub radius_percent: f64,
    /// Delay between ticks of a running phase.
    pub frame_interval_nanos: u64,
    /// Linear progress added per tick.
    pub progress_increment: f64,
    /// Background alpha at full entry.
    pub max_background_alpha: u8,
    /// Curve applied during the enter phase.
    pub enter_curve: ProgressCurve,
    /// Curve applied during the exit phase.
    pub exit_curve: ProgressCurve,
}

impl RippleConfig {
    /// Defaults for a bare drawable.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            color: Color::DEFAULT_RIPPLE,
            alpha: 255,
            radius_percent: 0.7,
            frame_interval_nanos: DEFAULT_FRAME_INTERVAL_NANOS,
            progress_increment: DEFAULT_PROGRESS_INCREMENT,
            max_background_alpha: MAX_BACKGROUND_ALPHA,
            enter_curve: ProgressCurve::ENTER,
            exit_curve: ProgressCurve::EXIT,
        }
    }

    /// Defaults for a ripple hosted by a full-size view, which grows to 90%
    /// of the half-extent.
    #[must_use]
    pub const fn view() -> Self {
        Self {
            radius_percent: 0.9,
            ..Self::standard()
        }
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_radius_percent(self.radius_percent)?;
        if !self.progress_increment.is_finite() || self.progress_increment <= 0.0 {
            return Err(ConfigError::NonPositiveIncrement(self.progress_increment));
        }
        if self.frame_interval_nanos == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        for curve in [self.enter_curve, self.exit_curve] {
            if !curve.is_valid() {
                return Err(ConfigError::InvalidCurve(curve));
            }
        }
        Ok(())
    }
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) fn validate_radius_percent(value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::RadiusPercentOutOfRange(value))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn presets_are_valid() {
        assert_eq!(RippleConfig::standard().validate(), Ok(()));
        assert_eq!(RippleConfig::view().validate(), Ok(()));
        assert!((RippleConfig::view().radius_percent - 0.9).abs() < 1e-12);
        assert_eq!(RippleConfig::default(), RippleConfig::standard());
    }

    #[test]
    fn radius_percent_bounds() {
        assert!(validate_radius_percent(1.0).is_ok());
        assert!(validate_radius_percent(0.01).is_ok());
        assert_eq!(
            validate_radius_percent(0.0),
            Err(ConfigError::RadiusPercentOutOfRange(0.0))
        );
        assert!(validate_radius_percent(1.5).is_err());
        assert!(validate_radius_percent(f64::NAN).is_err());
    }

    #[test]
    fn zero_increment_is_rejected() {
        let config = RippleConfig {
            progress_increment: 0.0,
            ..RippleConfig::standard()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveIncrement(0.0))
        );
    }

    #[test]
    fn zero_interval_and_bad_curve_are_rejected() {
        let config = RippleConfig {
            frame_interval_nanos: 0,
            ..RippleConfig::standard()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameInterval));

        let curve = ProgressCurve::EaseIn { strength: -1.0 };
        let config = RippleConfig {
            exit_curve: curve,
            ..RippleConfig::standard()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidCurve(curve)));
    }

    #[test]
    fn errors_display() {
        let msg = ConfigError::RadiusPercentOutOfRange(2.0).to_string();
        assert!(msg.contains("outside (0, 1]"), "got: {msg}");
    }

    #[test]
    fn one_phase_takes_twenty_three_ticks() {
        let mut progress = 0.0;
        let mut ticks = 0;
        while progress <= 1.0 {
            progress += DEFAULT_PROGRESS_INCREMENT;
            ticks += 1;
        }
        assert_eq!(ticks, 23);
    }
}
