//! RGB/HSL conversion, WCAG luminance and contrast.
//!
//! All palette math in this crate happens in HSL space, with hue wrapped into
//! `0..360` and saturation/lightness clamped to `0..=100`. Conversion back to
//! RGB uses the standard piecewise HSL formula so generated swatches match
//! what a browser renders for `hsl(h s% l%)`.
//!
//! # Contrast
//!
//! [`contrast_ratio`] implements the WCAG 2 definition: each sRGB channel is
//! gamma-decoded to linear light, combined with the Rec. 709 weights into a
//! relative luminance `L`, and two colors compare as
//! `(L_lighter + 0.05) / (L_darker + 0.05)`.
//!
//! ```rust
//! use okcss::colorspace::{contrast_ratio, Rgb, WcagLevel};
//!
//! let ratio = contrast_ratio(Rgb(0, 0, 0), Rgb(255, 255, 255));
//! assert!((ratio - 21.0).abs() < 0.01);
//! assert_eq!(WcagLevel::from_ratio(ratio), WcagLevel::Aaa);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── RGB type ───────────────────────────────────────────────────────────────

/// An sRGB color triplet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rgb` or `#rrggbb` (the `#` is optional, case-insensitive).
    ///
    /// 3-digit codes expand by doubling each nibble: `#abc` → `#aabbcc`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
                Some(Rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Rgb(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Converts to HSL (hue in degrees, saturation and lightness in percent).
    pub fn to_hsl(self) -> Hsl {
        let r = self.0 as f64 / 255.0;
        let g = self.1 as f64 / 255.0;
        let b = self.2 as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: h / 6.0 * 360.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// WCAG relative luminance in `0.0..=1.0`.
    pub fn relative_luminance(self) -> f64 {
        0.2126 * srgb_to_linear(self.0)
            + 0.7152 * srgb_to_linear(self.1)
            + 0.0722 * srgb_to_linear(self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── HSL type ───────────────────────────────────────────────────────────────

/// A color in HSL space: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Creates a color with the hue wrapped into `0..360` and saturation and
    /// lightness clamped to `0..=100`.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let Hsl { h, s, l } = Hsl::new(self.h, self.s, self.l);
        let s = s / 100.0;
        let l = l / 100.0;
        let a = s * l.min(1.0 - l);
        let channel = |n: f64| {
            let k = (n + h / 30.0).rem_euclid(12.0);
            let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (c * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Rgb(channel(0.0), channel(8.0), channel(4.0))
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Wraps any hue (including negative ones) into `0..360`.
pub fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(360.0)
}

/// Shorthand for `Hsl::new(h, s, l).to_hex()`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// Raises HSL lightness by `amount` percentage points.
pub fn lighten(hex: &str, amount: f64) -> Option<String> {
    let hsl = Rgb::from_hex(hex)?.to_hsl();
    Some(Hsl::new(hsl.h, hsl.s, hsl.l + amount).to_hex())
}

/// Lowers HSL lightness by `amount` percentage points.
pub fn darken(hex: &str, amount: f64) -> Option<String> {
    lighten(hex, -amount)
}

// ─── Contrast ───────────────────────────────────────────────────────────────

/// WCAG contrast ratio between two colors, in `1.0..=21.0`. Order does not matter.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// [`contrast_ratio`] over hex strings; `None` if either fails to parse.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Option<f64> {
    Some(contrast_ratio(Rgb::from_hex(a)?, Rgb::from_hex(b)?))
}

/// WCAG conformance level of a contrast ratio. Advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Ratio ≥ 7.
    #[serde(rename = "AAA")]
    Aaa,
    /// Ratio ≥ 4.5.
    #[serde(rename = "AA")]
    Aa,
    /// Ratio ≥ 3; acceptable for large text only.
    #[serde(rename = "AA Large")]
    AaLarge,
    #[serde(rename = "Fail")]
    Fail,
}

impl WcagLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            WcagLevel::Aaa
        } else if ratio >= 4.5 {
            WcagLevel::Aa
        } else if ratio >= 3.0 {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::AaLarge => "AA Large",
            WcagLevel::Fail => "Fail",
        }
    }

    pub fn passes(self) -> bool {
        self != WcagLevel::Fail
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Picks dark or white label text for a swatch background.
pub fn readable_text_color(background: Rgb) -> Rgb {
    if background.relative_luminance() > 0.35 {
        Rgb(0x1a, 0x1a, 0x1a)
    } else {
        Rgb(0xff, 0xff, 0xff)
    }
}

/// The better of black or white text on `background`, with its ratio.
pub fn best_text_contrast(background: Rgb) -> (Rgb, f64) {
    let on_white = contrast_ratio(background, Rgb(255, 255, 255));
    let on_black = contrast_ratio(background, Rgb(0, 0, 0));
    if on_white >= on_black {
        (Rgb(255, 255, 255), on_white)
    } else {
        (Rgb(0, 0, 0), on_black)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
