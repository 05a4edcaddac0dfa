// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording painter.
//!
//! [`DrawList`] implements [`Painter`] by appending [`DrawCommand`]s in paint
//! order instead of rasterizing. Tests and the demo inspect the list.

use kurbo::Point;

use ripple_core::alpha;
use ripple_core::backend::{PaintStyle, Painter};
use ripple_core::color::Color;

/// One recorded fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// A fill of the whole surface.
    Background {
        /// Packed color including the paint alpha.
        color: Color,
    },
    /// A filled circle.
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Packed color including the paint alpha.
        color: Color,
    },
}

impl DrawCommand {
    /// Packed color the command fills with.
    #[must_use]
    pub fn color(&self) -> Color {
        match *self {
            Self::Background { color } | Self::Circle { color, .. } => color,
        }
    }
}

/// Fills recorded for one frame, back to front.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    /// Commands in paint order.
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Whether nothing was painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Combined source-over alpha at a pixel covered by every command.
    #[must_use]
    pub fn composite_alpha(&self) -> u8 {
        self.commands
            .iter()
            .fold(0, |acc, cmd| alpha::composite(acc, cmd.color().alpha()))
    }

    /// The recorded circle, if any.
    #[must_use]
    pub fn circle(&self) -> Option<(Point, f64, Color)> {
        self.commands.iter().find_map(|cmd| match *cmd {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            DrawCommand::Background { .. } => None,
        })
    }
}

impl Painter for DrawList {
    fn fill_background(&mut self, style: PaintStyle) {
        self.commands.push(DrawCommand::Background {
            color: style.argb(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, style: PaintStyle) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: style.argb(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_paint_order() {
        let mut list = DrawList::new();
        let tint = Color::DEFAULT_RIPPLE;
        list.fill_background(PaintStyle {
            color: tint,
            alpha: 68,
            color_filter: None,
        });
        list.fill_circle(
            Point::new(100.0, 100.0),
            90.0,
            PaintStyle {
                color: tint,
                alpha: 46,
                color_filter: None,
            },
        );

        assert_eq!(list.commands.len(), 2);
        assert!(matches!(list.commands[0], DrawCommand::Background { .. }));
        let (center, radius, color) = list.circle().unwrap();
        assert_eq!(center, Point::new(100.0, 100.0));
        assert!((radius - 90.0).abs() < 1e-12);
        assert_eq!(color.alpha(), 46);
        assert_eq!(list.composite_alpha(), 0x65);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.composite_alpha(), 0);
    }
}
