// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves that map linear phase progress to eased progress.

/// An easing curve over `[0, 1]`.
///
/// Every curve is monotonic with `apply(0) == 0` and `apply(1) == 1`. Inputs
/// outside `[0, 1]` are clamped first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ProgressCurve {
    /// Identity mapping.
    #[default]
    Linear,
    /// Fast start, slow finish: `1 - (1 - t)^(2 * strength)`.
    ///
    /// Used for the enter phase so the ripple snaps out under the finger.
    EaseOut {
        /// Curve strength; 1.0 is a quadratic ease.
        strength: f64,
    },
    /// Slow start, fast finish: `t^(2 * strength)`.
    ///
    /// Used for the exit phase so the ripple lingers before fading.
    EaseIn {
        /// Curve strength; 1.0 is a quadratic ease.
        strength: f64,
    },
}

impl ProgressCurve {
    /// Default enter curve.
    pub const ENTER: Self = Self::EaseOut { strength: 1.6 };

    /// Default exit curve.
    pub const EXIT: Self = Self::EaseIn { strength: 2.0 };

    /// Maps linear progress `t` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOut { strength } => 1.0 - libm::pow(1.0 - t, 2.0 * strength),
            Self::EaseIn { strength } => libm::pow(t, 2.0 * strength),
        }
    }

    /// Whether the curve parameters keep the curve monotonic on `[0, 1]`.
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Self::Linear => true,
            Self::EaseOut { strength } | Self::EaseIn { strength } => {
                strength.is_finite() && strength > 0.0
            }
        }
    }
}
