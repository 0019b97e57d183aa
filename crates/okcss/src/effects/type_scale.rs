//! Modular type scales, exported as `--text-*` custom properties.
//!
//! Each step up multiplies the base size by `ratio`; each step down divides
//! it. Steps are named like Tailwind's font sizes (`xs`, `sm`, `base`, `lg`,
//! `xl`, `2xl`, …) and fall back to `step-N` past the named range.
//!
//! ```rust
//! use okcss::effects::type_scale::{compute_scale, TypeScaleState};
//!
//! let names: Vec<_> = compute_scale(&TypeScaleState::default())
//!     .into_iter()
//!     .map(|s| s.name)
//!     .collect();
//! assert_eq!(names, ["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl"]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind};
use crate::css::{fmt_num, round_to, CssLine};
use crate::state::effect_state;

/// Largest number of steps rendered on either side of the base.
pub const MAX_STEPS: u32 = 12;

const DEFAULT_SIZE: f64 = 16.0;

const STEP_NAMES_UP: [&str; 8] = ["base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl"];
const STEP_NAMES_DOWN: [&str; 3] = ["sm", "xs", "2xs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleUnit {
    #[default]
    Rem,
    Px,
}

/// The classic modular-scale intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleRatio {
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    AugmentedFourth,
    PerfectFifth,
    Golden,
}

impl ScaleRatio {
    pub const ALL: [ScaleRatio; 8] = [
        ScaleRatio::MinorSecond,
        ScaleRatio::MajorSecond,
        ScaleRatio::MinorThird,
        ScaleRatio::MajorThird,
        ScaleRatio::PerfectFourth,
        ScaleRatio::AugmentedFourth,
        ScaleRatio::PerfectFifth,
        ScaleRatio::Golden,
    ];

    pub fn value(self) -> f64 {
        match self {
            ScaleRatio::MinorSecond => 1.067,
            ScaleRatio::MajorSecond => 1.125,
            ScaleRatio::MinorThird => 1.2,
            ScaleRatio::MajorThird => 1.25,
            ScaleRatio::PerfectFourth => 1.333,
            ScaleRatio::AugmentedFourth => 1.414,
            ScaleRatio::PerfectFifth => 1.5,
            ScaleRatio::Golden => 1.618,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ScaleRatio::MinorSecond => "minor-second",
            ScaleRatio::MajorSecond => "major-second",
            ScaleRatio::MinorThird => "minor-third",
            ScaleRatio::MajorThird => "major-third",
            ScaleRatio::PerfectFourth => "perfect-fourth",
            ScaleRatio::AugmentedFourth => "augmented-fourth",
            ScaleRatio::PerfectFifth => "perfect-fifth",
            ScaleRatio::Golden => "golden",
        }
    }
}

impl fmt::Display for ScaleRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ScaleRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleRatio::ALL
            .into_iter()
            .find(|r| r.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown ratio '{}'", s))
    }
}

effect_state! {
    /// Sizes in px. `root_size` converts px to rem and is ignored for px output.
    TypeScaleState / TypeScalePatch {
        base_size: f64 = DEFAULT_SIZE,
        ratio: f64 = ScaleRatio::PerfectFourth.value(),
        steps_up: u32 = 5,
        steps_down: u32 = 2,
        unit: ScaleUnit = ScaleUnit::Rem,
        root_size: f64 = DEFAULT_SIZE,
    }
}

/// One size in the scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleStep {
    pub name: String,
    /// Rounded to three decimals.
    pub px: f64,
    /// Rounded to four decimals.
    pub rem: f64,
}

impl ScaleStep {
    fn new(name: String, px: f64, root: f64) -> Self {
        Self {
            name,
            px: round_to(px, 3),
            rem: round_to(px / root, 4),
        }
    }

    pub fn css_value(&self, unit: ScaleUnit) -> String {
        match unit {
            ScaleUnit::Rem => format!("{}rem", fmt_num(self.rem)),
            ScaleUnit::Px => format!("{}px", fmt_num(self.px.round())),
        }
    }
}

fn positive_or_default(n: f64, fallback: f64) -> f64 {
    if n.is_finite() && n > 0.0 {
        n
    } else {
        fallback
    }
}

/// The scale, smallest step first. Step counts are capped at [`MAX_STEPS`];
/// a non-positive ratio, base or root size falls back to its default.
pub fn compute_scale(state: &TypeScaleState) -> Vec<ScaleStep> {
    let base = positive_or_default(state.base_size, DEFAULT_SIZE);
    let ratio = positive_or_default(state.ratio, ScaleRatio::PerfectFourth.value());
    let root = positive_or_default(state.root_size, DEFAULT_SIZE);
    let down = state.steps_down.min(MAX_STEPS);
    let up = state.steps_up.min(MAX_STEPS);

    let below = (1..=down).rev().map(|i| {
        let name = STEP_NAMES_DOWN
            .get(i as usize - 1)
            .map_or_else(|| format!("step--{}", i), |n| n.to_string());
        ScaleStep::new(name, base / ratio.powi(i as i32), root)
    });
    let above = (0..=up).map(|i| {
        let name = STEP_NAMES_UP
            .get(i as usize)
            .map_or_else(|| format!("step-{}", i), |n| n.to_string());
        ScaleStep::new(name, base * ratio.powi(i as i32), root)
    });
    below.chain(above).collect()
}

impl Effect for TypeScaleState {
    const KIND: EffectKind = EffectKind::TypeScale;

    /// The base step.
    fn value(&self) -> String {
        compute_scale(self)
            .into_iter()
            .find(|s| s.name == "base")
            .map(|s| s.css_value(self.unit))
            .unwrap_or_default()
    }

    fn css_lines(&self) -> Vec<CssLine> {
        compute_scale(self)
            .into_iter()
            .map(|s| CssLine::new(format!("--text-{}", s.name), s.css_value(self.unit)))
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
