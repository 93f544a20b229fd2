//! Colour values shared by the point cloud and the hero palette.
//!
//! Colours are kept as numbers and only turned into CSS strings at the edge,
//! where the canvas wants them.

use std::fmt;

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Color {
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Color { h, s, l }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.0}%, {:.1}%)", self.h, self.s, self.l)
    }
}

/// `rgba(r, g, b, a)` with alpha clamped to the valid range.
pub fn rgba_css(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}

/// Primary/secondary colour pair used by a decorative object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: [u8; 3],
    pub secondary: [u8; 3],
}

pub const PALETTES: [Palette; 6] = [
    Palette {
        primary: [59, 130, 246],
        secondary: [147, 197, 253],
    }, // blue
    Palette {
        primary: [139, 92, 246],
        secondary: [196, 181, 253],
    }, // purple
    Palette {
        primary: [236, 72, 153],
        secondary: [251, 207, 232],
    }, // pink
    Palette {
        primary: [6, 182, 212],
        secondary: [165, 243, 252],
    }, // cyan
    Palette {
        primary: [16, 185, 129],
        secondary: [167, 243, 208],
    }, // emerald
    Palette {
        primary: [245, 158, 11],
        secondary: [253, 230, 138],
    }, // amber
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_formats_as_css() {
        assert_eq!(Color::hsl(45.0, 20.0, 80.0).to_css(), "hsl(45.0, 20%, 80.0%)");
    }

    #[test]
    fn rgba_clamps_alpha() {
        assert_eq!(rgba_css([1, 2, 3], 1.7), "rgba(1, 2, 3, 1.000)");
        assert_eq!(rgba_css([1, 2, 3], -0.2), "rgba(1, 2, 3, 0.000)");
    }
}
