//! Harmonious color palettes, exported as CSS custom properties.
//!
//! A base hue is rotated by a fixed offset table per [`Harmony`]. Each
//! resulting hue either becomes one swatch or, with `shades > 0`, a ramp of
//! `2 × shades + 1` swatches centred on the base lightness, with `shades`
//! capped at [`MAX_SHADES`]. All math happens in HSL; see
//! [`crate::colorspace`].
//!
//! ```rust
//! use okcss::effects::palette::{compute_palette, Harmony, PaletteState};
//!
//! let state = PaletteState { harmony: Harmony::Complementary, shades: 0, ..Default::default() };
//! let names: Vec<_> = compute_palette(&state).into_iter().map(|s| s.name).collect();
//! assert_eq!(names, ["primary", "secondary"]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind};
use crate::colorspace::{readable_text_color, wrap_hue, Hsl, Rgb};
use crate::css::CssLine;
use crate::state::effect_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    Monochromatic,
    Analogous,
    Complementary,
    SplitComplementary,
    #[default]
    Triadic,
    Tetradic,
}

impl Harmony {
    pub const ALL: [Harmony; 6] = [
        Harmony::Monochromatic,
        Harmony::Analogous,
        Harmony::Complementary,
        Harmony::SplitComplementary,
        Harmony::Triadic,
        Harmony::Tetradic,
    ];

    /// Hue offsets in degrees, base hue first.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Harmony::Monochromatic => &[0.0],
            Harmony::Analogous => &[0.0, 30.0, -30.0],
            Harmony::Complementary => &[0.0, 180.0],
            Harmony::SplitComplementary => &[0.0, 150.0, 210.0],
            Harmony::Triadic => &[0.0, 120.0, 240.0],
            Harmony::Tetradic => &[0.0, 90.0, 180.0, 270.0],
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Harmony::Monochromatic => "monochromatic",
            Harmony::Analogous => "analogous",
            Harmony::Complementary => "complementary",
            Harmony::SplitComplementary => "split-complementary",
            Harmony::Triadic => "triadic",
            Harmony::Tetradic => "tetradic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Harmony::Monochromatic => "Monochromatic",
            Harmony::Analogous => "Analogous",
            Harmony::Complementary => "Complementary",
            Harmony::SplitComplementary => "Split Compl.",
            Harmony::Triadic => "Triadic",
            Harmony::Tetradic => "Tetradic",
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned for an unknown harmony name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown harmony '{0}' (expected one of: monochromatic, analogous, complementary, split-complementary, triadic, tetradic)")]
pub struct UnknownHarmony(pub String);

impl FromStr for Harmony {
    type Err = UnknownHarmony;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Harmony::ALL
            .into_iter()
            .find(|h| h.slug() == wanted)
            .ok_or_else(|| UnknownHarmony(s.to_string()))
    }
}

/// The harmony's hues for `base_hue`, each wrapped into `0..360`.
pub fn harmony_hues(base_hue: f64, harmony: Harmony) -> Vec<f64> {
    harmony
        .offsets()
        .iter()
        .map(|offset| wrap_hue(base_hue + offset))
        .collect()
}

const HUE_NAMES: [&str; 4] = ["primary", "secondary", "tertiary", "quaternary"];

fn hue_name(index: usize) -> String {
    HUE_NAMES
        .get(index)
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("color-{}", index + 1))
}

/// Total lightness spread of a ramp, before scaling.
const RAMP_SPREAD: f64 = 40.0;
const RAMP_LIGHTNESS_SCALE: f64 = 1.5;
/// Saturation lost per step away from the centre.
const RAMP_DESATURATION: f64 = 0.06;

/// Largest ramp rendered on each side of a base swatch. Larger `shades`
/// values from state files are treated as this.
pub const MAX_SHADES: u32 = 10;

effect_state! {
    /// Palette inputs. Saturation and lightness are percentages; `shades` is
    /// the number of ramp steps on each side of the base swatch.
    PaletteState / PalettePatch {
        base_hue: f64 = 220.0,
        saturation: f64 = 75.0,
        lightness: f64 = 55.0,
        harmony: Harmony = Harmony::Triadic,
        shades: u32 = 3,
    }
}

/// One named palette color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub name: String,
    pub hex: String,
    pub hsl: Hsl,
}

impl Swatch {
    fn new(name: String, hsl: Hsl) -> Self {
        Self {
            name,
            hex: hsl.to_hex(),
            hsl,
        }
    }

    /// Label color that stays legible on this swatch.
    pub fn text_color(&self) -> Rgb {
        readable_text_color(self.hsl.to_rgb())
    }
}

/// Every swatch of the palette, hue by hue, lightest shade first.
pub fn compute_palette(state: &PaletteState) -> Vec<Swatch> {
    let hues = harmony_hues(state.base_hue, state.harmony);

    if state.shades == 0 {
        return hues
            .into_iter()
            .enumerate()
            .map(|(i, hue)| Swatch::new(hue_name(i), Hsl::new(hue, state.saturation, state.lightness)))
            .collect();
    }

    let steps = state.shades.min(MAX_SHADES);
    let step_delta = RAMP_SPREAD / f64::from(steps * 2);
    let shade_step = 800 / (steps * 2);

    let mut swatches = Vec::with_capacity(hues.len() * (steps as usize * 2 + 1));
    for (i, hue) in hues.into_iter().enumerate() {
        let prefix = hue_name(i);
        for step in 0..=steps * 2 {
            let distance = f64::from(step) - f64::from(steps);
            let lightness = (state.lightness - distance * step_delta * RAMP_LIGHTNESS_SCALE)
                .clamp(10.0, 95.0);
            let saturation = (state.saturation * (1.0 - distance.abs() * RAMP_DESATURATION))
                .clamp(10.0, 100.0);
            let shade = 100 + step * shade_step;
            swatches.push(Swatch::new(
                format!("{}-{}", prefix, shade),
                Hsl::new(hue, saturation, lightness),
            ));
        }
    }
    swatches
}

impl Effect for PaletteState {
    const KIND: EffectKind = EffectKind::Palette;

    /// The base color.
    fn value(&self) -> String {
        Hsl::new(self.base_hue, self.saturation, self.lightness).to_hex()
    }

    fn css_lines(&self) -> Vec<CssLine> {
        compute_palette(self)
            .into_iter()
            .map(|s| CssLine::new(format!("--{}", s.name), s.hex))
            .collect()
    }

    fn copy_text(&self) -> String {
        let mut out = String::from(":root {\n");
        for line in self.css_lines() {
            out.push_str(&format!("  {}: {};\n", line.property, line.value));
        }
        out.push('}');
        out
    }

    fn raw_css(&self) -> Option<String> {
        Some(self.copy_text())
    }
}
