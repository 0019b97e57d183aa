//! One module per visual effect.
//!
//! Every effect pairs a builder (state → CSS) with, for most effects, a
//! reducer (CSS → partial state). Builders never fail; reducers return `None`
//! when the snippet holds nothing they recognize. The palette, neumorphism,
//! type-scale and keyframes builders have no reducer.
//!
//! ```rust
//! use okcss::effects::{shadow::ShadowState, Effect, ImportCss};
//!
//! let state = ShadowState::default();
//! let imported = state
//!     .import("box-shadow: inset 2px 4px 6px 0px rgba(0,0,0,0.5);")
//!     .unwrap();
//! assert_eq!(imported.value(), "inset 2px 4px 6px 0px rgba(0, 0, 0, 0.5)");
//! ```

pub mod bezier;
pub mod border_radius;
pub mod clip_path;
pub mod filter;
pub mod glass;
pub mod gradient;
pub mod keyframes;
pub mod neumorphism;
pub mod outline;
pub mod palette;
pub mod scrollbar;
pub mod shadow;
pub mod stops;
pub mod text_gradient;
pub mod text_shadow;
pub mod transform;
pub mod transition;
pub mod type_scale;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::css::{lines_to_text, parse_css_props, CssLine, PropertyMap};
use crate::export::EffectOutput;
use crate::state::Merge;

// =============================================================================
// Traits
// =============================================================================

/// A builder: renders a state into CSS.
pub trait Effect: Merge + Default + Serialize + DeserializeOwned {
    /// Which tool this state belongs to.
    const KIND: EffectKind;

    /// The main property value, e.g. the `box-shadow` value.
    fn value(&self) -> String;

    /// Flat `property: value` declarations.
    fn css_lines(&self) -> Vec<CssLine>;

    /// Text a user copies into a stylesheet.
    fn copy_text(&self) -> String {
        lines_to_text(&self.css_lines())
    }

    /// Stylesheet text that does not fit in flat declarations (nested
    /// pseudo-element blocks, `:root` wrappers).
    fn raw_css(&self) -> Option<String> {
        None
    }

    /// Tailwind utility classes, for effects that have a Tailwind rendering.
    fn tailwind(&self) -> Option<String> {
        None
    }

    /// Every rendering at once, ready for [`crate::export`].
    fn output(&self) -> EffectOutput {
        EffectOutput {
            lines: self.css_lines(),
            copy_text: self.copy_text(),
            raw_css: self.raw_css(),
            tailwind: self.tailwind(),
        }
    }
}

/// A reducer: reads the properties it understands back into a patch.
pub trait ImportCss: Effect {
    /// `None` when the relevant property is absent, `none`, or unreadable.
    fn from_css(props: &PropertyMap) -> Option<Self::Patch>;

    /// Tokenizes `css`, reduces it and merges the result onto `self`.
    fn import(&self, css: &str) -> Option<Self> {
        let patch = Self::from_css(&parse_css_props(css))?;
        Some(self.merged(patch))
    }
}

// =============================================================================
// Tool registry
// =============================================================================

/// Every generator, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectKind {
    Shadow,
    #[serde(rename = "glassmorphism")]
    Glass,
    Gradient,
    Neumorphism,
    TextShadow,
    BorderRadius,
    Filter,
    Transform,
    TextGradient,
    Scrollbar,
    ClipPath,
    CubicBezier,
    TypeScale,
    #[serde(rename = "color-palette")]
    Palette,
    Transition,
    Keyframes,
    Outline,
}

impl EffectKind {
    pub const ALL: [EffectKind; 17] = [
        EffectKind::Shadow,
        EffectKind::Glass,
        EffectKind::Gradient,
        EffectKind::Neumorphism,
        EffectKind::TextShadow,
        EffectKind::BorderRadius,
        EffectKind::Filter,
        EffectKind::Transform,
        EffectKind::TextGradient,
        EffectKind::Scrollbar,
        EffectKind::ClipPath,
        EffectKind::CubicBezier,
        EffectKind::TypeScale,
        EffectKind::Palette,
        EffectKind::Transition,
        EffectKind::Keyframes,
        EffectKind::Outline,
    ];

    /// URL-style identifier, also used as the preset namespace.
    pub fn slug(self) -> &'static str {
        match self {
            EffectKind::Shadow => "shadow",
            EffectKind::Glass => "glassmorphism",
            EffectKind::Gradient => "gradient",
            EffectKind::Neumorphism => "neumorphism",
            EffectKind::TextShadow => "text-shadow",
            EffectKind::BorderRadius => "border-radius",
            EffectKind::Filter => "filter",
            EffectKind::Transform => "transform",
            EffectKind::TextGradient => "text-gradient",
            EffectKind::Scrollbar => "scrollbar",
            EffectKind::ClipPath => "clip-path",
            EffectKind::CubicBezier => "cubic-bezier",
            EffectKind::TypeScale => "type-scale",
            EffectKind::Palette => "color-palette",
            EffectKind::Transition => "transition",
            EffectKind::Keyframes => "keyframes",
            EffectKind::Outline => "outline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EffectKind::Shadow => "Shadow",
            EffectKind::Glass => "Glassmorphism",
            EffectKind::Gradient => "Gradient",
            EffectKind::Neumorphism => "Neumorphism",
            EffectKind::TextShadow => "Text Shadow",
            EffectKind::BorderRadius => "Border Radius",
            EffectKind::Filter => "Filter",
            EffectKind::Transform => "Transform",
            EffectKind::TextGradient => "Text Gradient",
            EffectKind::Scrollbar => "Scrollbar",
            EffectKind::ClipPath => "Clip-Path",
            EffectKind::CubicBezier => "Cubic-Bezier",
            EffectKind::TypeScale => "Type Scale",
            EffectKind::Palette => "Color Palette",
            EffectKind::Transition => "Transition",
            EffectKind::Keyframes => "Keyframes",
            EffectKind::Outline => "Outline",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EffectKind::Shadow => "Multi-layer box-shadow with inset, spread, and opacity controls.",
            EffectKind::Glass => "Frosted glass with backdrop-blur, transparency, and border tuning.",
            EffectKind::Gradient => "Linear, radial and conic gradients with variable colour stops.",
            EffectKind::Neumorphism => "Soft extrusion via dual light and dark shadows.",
            EffectKind::TextShadow => "CSS text-shadow with offset, blur and colour controls.",
            EffectKind::BorderRadius => "Uniform or per-corner border-radius.",
            EffectKind::Filter => {
                "CSS filter: blur, brightness, contrast, grayscale, hue-rotate, and more."
            }
            EffectKind::Transform => "CSS transform: rotate, scale, translate, and skew.",
            EffectKind::TextGradient => {
                "Gradient text using background-clip: text with multiple colour stops."
            }
            EffectKind::Scrollbar => {
                "Custom scrollbar styles: thumb, track, radius, and hover colours."
            }
            EffectKind::ClipPath => {
                "CSS clip-path shapes: polygon presets, circle, ellipse, and inset."
            }
            EffectKind::CubicBezier => "Custom cubic-bezier() easing curves with named presets.",
            EffectKind::TypeScale => {
                "Modular type scale with named ratio presets, exported as CSS custom properties."
            }
            EffectKind::Palette => {
                "Harmonious color palettes from color theory, exported as CSS custom properties."
            }
            EffectKind::Transition => {
                "CSS transition builder with multi-layer support and per-property timing."
            }
            EffectKind::Keyframes => {
                "CSS @keyframes animation builder with stops and animation timing."
            }
            EffectKind::Outline => "CSS outline and outline-offset with Tailwind ring-* output.",
        }
    }

    /// Whether pasted CSS can be imported into this tool.
    pub fn importable(self) -> bool {
        !matches!(
            self,
            EffectKind::Neumorphism
                | EffectKind::TypeScale
                | EffectKind::Palette
                | EffectKind::Keyframes
        )
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a slug names no tool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool '{0}'")]
pub struct UnknownTool(pub String);

impl FromStr for EffectKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        EffectKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted || (wanted == "glass" && *kind == EffectKind::Glass))
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

// =============================================================================
// Detection
// =============================================================================

/// Guesses which tool a pasted snippet was written for.
///
/// Checks run in a fixed priority order; the first hit wins.
pub fn detect_tool(props: &PropertyMap) -> Option<EffectKind> {
    let has = |p: &str| props.contains(p);
    let timing_is_bezier = |p: &str| props.get(p).is_some_and(|v| v.contains("cubic-bezier"));

    let kind = if has("box-shadow") {
        EffectKind::Shadow
    } else if has("backdrop-filter") || has("-webkit-backdrop-filter") {
        EffectKind::Glass
    } else if has("text-shadow") {
        EffectKind::TextShadow
    } else if has("clip-path") {
        EffectKind::ClipPath
    } else if has("outline") {
        EffectKind::Outline
    } else if has("filter") {
        EffectKind::Filter
    } else if has("transform") {
        EffectKind::Transform
    } else if has("transition") {
        EffectKind::Transition
    } else if has("scrollbar-color") || has("scrollbar-width") {
        EffectKind::Scrollbar
    } else if has("border-radius") {
        EffectKind::BorderRadius
    } else if props
        .first_of(&["background", "background-image"])
        .is_some_and(|bg| bg.contains("gradient"))
    {
        if props.get("-webkit-background-clip") == Some("text")
            || props.get("background-clip") == Some("text")
        {
            EffectKind::TextGradient
        } else {
            EffectKind::Gradient
        }
    } else if timing_is_bezier("transition-timing-function")
        || timing_is_bezier("animation-timing-function")
    {
        EffectKind::CubicBezier
    } else {
        return None;
    };

    tracing::debug!(tool = kind.slug(), "detected tool");
    Some(kind)
}
