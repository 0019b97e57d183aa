//! Soft extruded panels: a light and a dark `box-shadow` cast in opposite
//! directions from a face that shares the page background.
//!
//! Both shadow colors derive from the base color by moving its HSL lightness
//! `intensity` points up and down.

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind};
use crate::colorspace::{darken, lighten};
use crate::css::{canonical_hex, fmt_num, CssLine};
use crate::state::effect_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeuShape {
    #[default]
    Flat,
    Concave,
    Convex,
    /// Inset shadows, as if pushed into the page.
    Pressed,
}

effect_state! {
    /// `color` is both the page background and the panel face.
    NeumorphismState / NeumorphismPatch {
        color: String = "#e0e5ec".to_string(),
        distance: f64 = 8.0,
        blur: f64 = 16.0,
        intensity: f64 = 15.0,
        border_radius: f64 = 16.0,
        shape: NeuShape = NeuShape::Flat,
    }
}

impl NeumorphismState {
    /// `(light, dark)` shadow colors. An unreadable base color is used as is.
    pub fn shadow_colors(&self) -> (String, String) {
        let light = lighten(&self.color, self.intensity);
        let dark = darken(&self.color, self.intensity);
        match (light, dark) {
            (Some(light), Some(dark)) => (light, dark),
            _ => (self.color.clone(), self.color.clone()),
        }
    }

    /// The panel face: a diagonal gradient for curved shapes, the base color otherwise.
    pub fn face_background(&self) -> String {
        let (light, dark) = self.shadow_colors();
        match self.shape {
            NeuShape::Concave => format!("linear-gradient(145deg, {}, {})", dark, light),
            NeuShape::Convex => format!("linear-gradient(145deg, {}, {})", light, dark),
            NeuShape::Flat | NeuShape::Pressed => canonical_hex(&self.color),
        }
    }

    /// Offsets, blur and color of the two shadows, dark one first.
    fn shadow_parts(&self) -> [(String, String, String, String); 2] {
        let (light, dark) = self.shadow_colors();
        let d = self.distance;
        let blur = format!("{}px", fmt_num(self.blur));
        [
            (px(d), px(d), blur.clone(), dark),
            (px(-d), px(-d), blur, light),
        ]
    }

    fn inset(&self) -> &'static str {
        if self.shape == NeuShape::Pressed {
            "inset "
        } else {
            ""
        }
    }
}

fn px(n: f64) -> String {
    format!("{}px", fmt_num(n))
}

impl Effect for NeumorphismState {
    const KIND: EffectKind = EffectKind::Neumorphism;

    /// The `box-shadow` pair.
    fn value(&self) -> String {
        let inset = self.inset();
        self.shadow_parts()
            .iter()
            .map(|(x, y, blur, color)| format!("{}{} {} {} {}", inset, x, y, blur, color))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![
            CssLine::new("background", self.face_background()),
            CssLine::new("border-radius", px(self.border_radius)),
            CssLine::new("box-shadow", self.value()),
        ]
    }

    fn tailwind(&self) -> Option<String> {
        let inset = if self.inset().is_empty() { "" } else { "inset_" };
        let shadow = self
            .shadow_parts()
            .iter()
            .map(|(x, y, blur, color)| format!("{}{}_{}_{}_{}", inset, x, y, blur, color))
            .collect::<Vec<_>>()
            .join(",");
        Some(format!(
            "bg-[{}] rounded-[{}] shadow-[{}]",
            canonical_hex(&self.color),
            px(self.border_radius),
            shadow
        ))
    }
}
