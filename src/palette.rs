//! Theme colours and the small amount of colour arithmetic the generators need.

use anyhow::{anyhow, Result};
use image::Rgba;
use std::str::FromStr;

/// Sage green
pub const SAGE_GREEN: Rgba<u8> = Rgba([91, 155, 110, 255]);
/// Warm orange
pub const WARM_ORANGE: Rgba<u8> = Rgba([212, 132, 92, 255]);
/// Warm beige
pub const WARM_BEIGE: Rgba<u8> = Rgba([232, 213, 196, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// The three brand colours plus white, as used by every drawing routine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Rgba<u8>,
    pub secondary: Rgba<u8>,
    pub accent: Rgba<u8>,
    pub white: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: SAGE_GREEN,
            secondary: WARM_ORANGE,
            accent: WARM_BEIGE,
            white: WHITE,
        }
    }
}

impl Palette {
    /// Build a palette from optional CSS colour overrides, keeping the brand
    /// defaults for anything not given.
    pub fn from_overrides(
        primary: Option<&str>,
        secondary: Option<&str>,
        accent: Option<&str>,
    ) -> Result<Self> {
        let mut palette = Self::default();
        if let Some(color) = primary {
            palette.primary = parse_color(color)?;
        }
        if let Some(color) = secondary {
            palette.secondary = parse_color(color)?;
        }
        if let Some(color) = accent {
            palette.accent = parse_color(color)?;
        }
        Ok(palette)
    }
}

/// Parse a CSS colour (`#5b9b6e`, `rgb(91, 155, 110)`, `orange`, ...) into an
/// opaque pixel.
pub fn parse_color(color: &str) -> Result<Rgba<u8>> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgba([
                (color.red * 255.).round() as u8,
                (color.green * 255.).round() as u8,
                (color.blue * 255.).round() as u8,
                255,
            ])
        })
        .map_err(|_| anyhow!("Invalid color: {color}"))
}

/// Linear interpolation between two colours, truncating each channel.
/// `t = 0` yields `from`, `t = 1` yields `to`.
pub fn lerp(from: Rgba<u8>, to: Rgba<u8>, t: f32) -> Rgba<u8> {
    let channel = |i: usize| (from[i] as f32 * (1.0 - t) + to[i] as f32 * t) as u8;
    Rgba([channel(0), channel(1), channel(2), 255])
}

/// Scale the RGB channels of a colour by `factor`.
pub fn shade(color: Rgba<u8>, factor: f32) -> Rgba<u8> {
    let channel = |i: usize| (color[i] as f32 * factor) as u8;
    Rgba([channel(0), channel(1), channel(2), 255])
}

/// Same colour with a different alpha.
pub fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}
