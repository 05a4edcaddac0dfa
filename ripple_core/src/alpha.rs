// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alpha compositing for the two stacked ripple layers.
//!
//! The ripple paints a background wash and then a circle on top of it. Two
//! translucent layers compound: each lets `(255 - alpha) / 255` of the light
//! below through, so simply giving both layers the requested alpha would make
//! the overlap darker than asked for. [`split`] solves for the circle alpha
//! that, stacked over a given background alpha, lands exactly on the
//! requested combined alpha:
//!
//! ```text
//! background = B * A / 255
//! circle     = (A - background) * 255 / (255 - background)
//! composite  = background + circle * (255 - background) / 255  == A
//! ```
//!
//! All arithmetic is integer, so a fully opaque background (`B = 255`) gives
//! `background == A` exactly and the circle delta is exactly zero.

/// Per-draw alphas for the two ripple layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayerAlphas {
    /// Effective alpha of the background wash.
    pub background: u8,
    /// Effective alpha of the circle drawn over the background.
    pub circle: u8,
}

impl LayerAlphas {
    /// Scales the circle layer by its own animated alpha (`0..=255`).
    ///
    /// The background is left unchanged.
    #[must_use]
    pub fn with_circle_progress(self, circle_alpha: u8) -> Self {
        Self {
            background: self.background,
            circle: scale(self.circle, circle_alpha),
        }
    }

    /// Combined alpha produced by painting `background` then `circle`.
    #[must_use]
    pub fn composite(self) -> u8 {
        composite(self.background, self.circle)
    }
}

/// How a drawable's output covers what lies beneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opacity {
    /// Fully covers the backdrop (combined alpha 255).
    Opaque,
    /// Draws nothing visible (combined alpha 0).
    Transparent,
    /// Partially covers the backdrop.
    Translucent,
}

impl Opacity {
    /// Classifies a combined alpha value.
    #[must_use]
    pub const fn classify(alpha: u8) -> Self {
        match alpha {
            255 => Self::Opaque,
            0 => Self::Transparent,
            _ => Self::Translucent,
        }
    }
}

/// Scales `value` by `factor / 255`, truncating.
#[inline]
#[must_use]
pub fn scale(value: u8, factor: u8) -> u8 {
    narrow(u32::from(value) * u32::from(factor) / 255)
}

/// Splits a requested combined alpha between the background and circle
/// layers.
///
/// `requested` is the overall alpha the ripple should show (`A`).
/// `background` is the progress-driven background alpha (`B`) before it is
/// scaled by `A`.
#[must_use]
pub fn split(requested: u8, background: u8) -> LayerAlphas {
    let effective_background = scale(background, requested);
    LayerAlphas {
        background: effective_background,
        circle: circle_alpha(requested, effective_background),
    }
}

/// Solves for the circle alpha that, stacked over `background`, composites to
/// `requested`.
///
/// Returns 0 when `background` is fully opaque or already at or above
/// `requested`.
#[must_use]
pub fn circle_alpha(requested: u8, background: u8) -> u8 {
    if background == u8::MAX || background >= requested {
        return 0;
    }
    let delta = u32::from(requested - background);
    let remaining = 255 - u32::from(background);
    narrow(delta * 255 / remaining)
}

/// Combined alpha of `top` painted over `bottom` (source-over).
#[must_use]
pub fn composite(bottom: u8, top: u8) -> u8 {
    let bottom = u32::from(bottom);
    narrow(bottom + u32::from(top) * (255 - bottom) / 255)
}

fn narrow(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_reproduces_requested_alpha() {
        for requested in 0..=255_u8 {
            for background in 0..255_u8 {
                let layers = split(requested, background);
                let got = i16::from(layers.composite());
                let want = i16::from(requested);
                assert!(
                    (got - want).abs() <= 1,
                    "A={requested} B={background} composited to {got}"
                );
            }
        }
    }

    #[test]
    fn opaque_background_leaves_no_room_for_circle() {
        assert_eq!(circle_alpha(255, 255), 0, "divisor would be zero");
        let layers = split(200, 255);
        assert_eq!(layers.background, 200);
        assert_eq!(layers.circle, 0);
    }

    #[test]
    fn transparent_background_gives_circle_full_request() {
        let layers = split(102, 0);
        assert_eq!(layers.background, 0);
        assert_eq!(layers.circle, 102);
    }

    #[test]
    fn held_ripple_splits_default_tint() {
        // 0x66 tint alpha with the background held at 172.
        let layers = split(0x66, 172);
        assert_eq!(layers.background, 68);
        assert_eq!(layers.circle, 46);
        assert_eq!(layers.composite(), 0x65, "within rounding of 0x66");
    }

    #[test]
    fn circle_progress_scales_only_the_circle() {
        let layers = LayerAlphas {
            background: 40,
            circle: 200,
        };
        assert_eq!(layers.with_circle_progress(255), layers);
        let faded = layers.with_circle_progress(0);
        assert_eq!(faded.background, 40);
        assert_eq!(faded.circle, 0);
        assert_eq!(layers.with_circle_progress(128).circle, 100);
    }

    #[test]
    fn opacity_classification() {
        assert_eq!(Opacity::classify(255), Opacity::Opaque);
        assert_eq!(Opacity::classify(0), Opacity::Transparent);
        assert_eq!(Opacity::classify(1), Opacity::Translucent);
        assert_eq!(Opacity::classify(254), Opacity::Translucent);
    }
}
