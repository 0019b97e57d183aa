//! Color tokens: `#rgb`, `#rrggbb` and `rgb()`/`rgba()`.
//!
//! HSL function syntax is recognized as "looks like a color" (so it occupies
//! the color slot of a shadow layer) but is never parsed into a value.

use crate::colorspace::Rgb;

use super::split::split_top_level;
use super::units::{fmt_num, parse_number, round_to};

/// A parsed color: lowercase `#rrggbb` plus a separate opacity in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedColor {
    pub hex: String,
    pub opacity: f64,
}

/// Parses a single color token.
///
/// ```rust
/// use okcss::css::parse_color;
///
/// let c = parse_color("#abc").unwrap();
/// assert_eq!(c.hex, "#aabbcc");
/// assert_eq!(c.opacity, 1.0);
///
/// let c = parse_color("rgba(0, 0, 0, 0.5)").unwrap();
/// assert_eq!((c.hex.as_str(), c.opacity), ("#000000", 0.5));
/// ```
pub fn parse_color(token: &str) -> Option<ParsedColor> {
    let token = token.trim();
    if token.starts_with('#') {
        let rgb = Rgb::from_hex(token)?;
        return Some(ParsedColor {
            hex: rgb.to_hex(),
            opacity: 1.0,
        });
    }
    parse_rgb_function(token)
}

fn parse_rgb_function(token: &str) -> Option<ParsedColor> {
    let lower = token.to_ascii_lowercase();
    let inner = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts = split_top_level(inner, ',');
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |s: &str| -> Option<u8> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(s.parse::<u32>().ok()?.min(255) as u8)
    };
    let rgb = Rgb(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);

    let opacity = match parts.get(3) {
        Some(alpha) => parse_number(alpha)?.clamp(0.0, 1.0),
        None => 1.0,
    };

    Some(ParsedColor {
        hex: rgb.to_hex(),
        opacity,
    })
}

/// True for tokens that occupy a color slot: `#…`, `rgb…`, `hsl…`.
pub fn looks_like_color(token: &str) -> bool {
    let lower = token.trim_start().to_ascii_lowercase();
    lower.starts_with('#') || lower.starts_with("rgb") || lower.starts_with("hsl")
}

/// Canonical lowercase `#rrggbb` for a color, or the input unchanged when it
/// is not a parseable color (named colors, `currentColor`, …).
pub fn canonical_hex(color: &str) -> String {
    parse_color(color)
        .map(|c| c.hex)
        .unwrap_or_else(|| color.trim().to_string())
}

/// `rgba(r, g, b, a)` with the alpha rounded to two decimals.
///
/// Unparseable hex falls back to black.
pub fn rgba(hex: &str, opacity: f64) -> String {
    let Rgb(r, g, b) = Rgb::from_hex(hex).unwrap_or_default();
    format!("rgba({}, {}, {}, {})", r, g, b, fmt_num(round_to(opacity, 2)))
}

/// `rgba(r,g,b,a)` without spaces, for Tailwind arbitrary values.
pub fn rgba_compact(hex: &str, opacity: f64) -> String {
    let Rgb(r, g, b) = Rgb::from_hex(hex).unwrap_or_default();
    format!("rgba({},{},{},{})", r, g, b, fmt_num(round_to(opacity, 2)))
}
