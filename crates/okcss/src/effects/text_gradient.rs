//! Gradient-filled text via `background-clip: text`.

use serde::{Deserialize, Serialize};

use super::stops::{parse_gradient, stops_to_string, stops_to_tailwind, ColorStop, GradientShape};
use super::{Effect, EffectKind, ImportCss};
use crate::css::{fmt_num, CssLine, PropertyMap};
use crate::ids::{IdGen, ItemId};
use crate::state::effect_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextGradientType {
    #[default]
    Linear,
    Radial,
}

effect_state! {
    TextGradientState / TextGradientPatch {
        #[serde(rename = "type")]
        kind: TextGradientType = TextGradientType::Linear,
        angle: f64 = 135.0,
        stops: Vec<ColorStop> = default_stops(),
    }
}

fn default_stops() -> Vec<ColorStop> {
    let mut ids = IdGen::new("tg");
    vec![
        ColorStop::new(&mut ids, "#6366f1", 0.0),
        ColorStop::new(&mut ids, "#ec4899", 100.0),
    ]
}

impl TextGradientState {
    pub fn add_stop(&mut self, color: impl Into<String>, position: f64) -> ItemId {
        let mut ids = IdGen::after("tg", self.stops.iter().map(|s| &s.id));
        let stop = ColorStop::new(&mut ids, color, position);
        let id = stop.id.clone();
        self.stops.push(stop);
        id
    }

    pub fn remove_stop(&mut self, id: &ItemId) {
        self.stops.retain(|s| &s.id != id);
    }
}

impl Effect for TextGradientState {
    const KIND: EffectKind = EffectKind::TextGradient;

    fn value(&self) -> String {
        let stops = stops_to_string(&self.stops);
        match self.kind {
            TextGradientType::Linear => {
                format!("linear-gradient({}deg, {})", fmt_num(self.angle), stops)
            }
            TextGradientType::Radial => format!("radial-gradient(circle, {})", stops),
        }
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![
            CssLine::new("background-image", self.value()),
            CssLine::new("-webkit-background-clip", "text"),
            CssLine::new("background-clip", "text"),
            CssLine::new("-webkit-text-fill-color", "transparent"),
            CssLine::new("color", "transparent"),
        ]
    }

    fn tailwind(&self) -> Option<String> {
        let stops = stops_to_tailwind(&self.stops);
        let gradient = match self.kind {
            TextGradientType::Linear => {
                format!("linear-gradient({}deg,{})", fmt_num(self.angle), stops)
            }
            TextGradientType::Radial => format!("radial-gradient(circle,{})", stops),
        };
        Some(format!("bg-[{}] bg-clip-text text-transparent", gradient))
    }
}

impl ImportCss for TextGradientState {
    /// Conic gradients have no text-gradient counterpart and are rejected.
    fn from_css(props: &PropertyMap) -> Option<TextGradientPatch> {
        let raw = props.first_of(&["background-image", "background"])?;
        let gradient = parse_gradient(raw, "tg")?;

        let kind = match gradient.shape {
            GradientShape::Linear => TextGradientType::Linear,
            GradientShape::Radial => TextGradientType::Radial,
            GradientShape::Conic => {
                tracing::debug!("conic gradient cannot fill text");
                return None;
            }
        };

        Some(TextGradientPatch {
            kind: Some(kind),
            angle: gradient.angle,
            stops: Some(gradient.stops),
        })
    }
}
