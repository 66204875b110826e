//! RGBA colors with unit-range channels.

use image::Rgba;
use log::debug;

use crate::compat::{Zz, ZzCompatible, ZzType};

/// A color with red, green, blue and alpha channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Neutral gray, returned for hex strings that fail the length check.
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);

    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// The color as an 8-bit RGBA pixel.
    #[must_use]
    pub fn to_rgba8(&self) -> Rgba<u8> {
        Rgba([
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
            channel_to_u8(self.alpha),
        ])
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// The interface style a dynamic color resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Unspecified,
    Light,
    Dark,
}

/// A color that resolves differently in light and dark appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveColor {
    light: Color,
    dark: Option<Color>,
}

impl AdaptiveColor {
    /// A color that ignores the appearance, for surfaces without appearance modes.
    #[must_use]
    pub const fn fixed(color: Color) -> Self {
        Self {
            light: color,
            dark: None,
        }
    }

    /// Whether the color changes with the appearance.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.dark.is_some()
    }

    /// The concrete color for `appearance`. Unspecified resolves to light.
    #[must_use]
    pub fn resolve(&self, appearance: Appearance) -> Color {
        match (appearance, self.dark) {
            (Appearance::Dark, Some(dark)) => dark,
            _ => self.light,
        }
    }
}

impl ZzCompatible for Color {}

impl ZzType<Color> {
    /// Color from 8-bit channels and a unit-range alpha.
    ///
    /// ```
    /// # use zz_extension::{ZzType, ui::Color};
    /// assert_eq!(ZzType::<Color>::rgba(255, 0, 0, 1.0), Color::new(1.0, 0.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Color {
        Color::new(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    /// Color from a `RRGGBB` hex string, optionally prefixed with `#`.
    ///
    /// Surrounding whitespace is ignored. Anything that is not six characters
    /// long after stripping the prefix yields [`Color::GRAY`]. Parsing stops at
    /// the first non-hex character, so `"12ZZZZ"` reads as `0x12`.
    #[must_use]
    pub fn hex(string: &str) -> Color {
        let upper = string.trim().to_uppercase();
        let digits = upper.strip_prefix('#').unwrap_or(&upper);
        if digits.chars().count() != 6 {
            debug!("'{string}' is not a six digit hex color, using gray");
            return Color::GRAY;
        }

        let prefix: String = digits.chars().take_while(char::is_ascii_hexdigit).collect();
        let value = u32::from_str_radix(&prefix, 16).unwrap_or(0);

        Color::new(
            f64::from((value & 0x00FF_0000) >> 16) / 255.0,
            f64::from((value & 0x0000_FF00) >> 8) / 255.0,
            f64::from(value & 0x0000_00FF) / 255.0,
            1.0,
        )
    }

    /// A color that follows the appearance: `light` for light and unspecified
    /// appearance, `dark` for dark.
    #[must_use]
    pub const fn adaptive(light: Color, dark: Color) -> AdaptiveColor {
        AdaptiveColor {
            light,
            dark: Some(dark),
        }
    }
}

impl Zz<&Color> {
    /// The color as `#RRGGBB`, ignoring alpha.
    #[must_use]
    pub fn hex_string(&self) -> String {
        let Rgba([red, green, blue, _]) = self.base.to_rgba8();
        format!("#{red:02X}{green:02X}{blue:02X}")
    }
}
