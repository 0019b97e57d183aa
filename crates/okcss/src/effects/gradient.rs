//! Background gradients: linear, radial and conic.

use serde::{Deserialize, Serialize};

use super::stops::{parse_gradient, stops_to_string, stops_to_tailwind, ColorStop, GradientShape};
use super::{Effect, EffectKind, ImportCss};
use crate::css::{canonical_hex, fmt_num, CssLine, PropertyMap};
use crate::ids::{IdGen, ItemId};
use crate::state::effect_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl From<GradientShape> for GradientType {
    fn from(shape: GradientShape) -> Self {
        match shape {
            GradientShape::Linear => GradientType::Linear,
            GradientShape::Radial => GradientType::Radial,
            GradientShape::Conic => GradientType::Conic,
        }
    }
}

effect_state! {
    /// Gradient state. `angle` applies to linear (direction) and conic
    /// (start angle) gradients; radial gradients ignore it.
    GradientState / GradientPatch {
        #[serde(rename = "type")]
        kind: GradientType = GradientType::Linear,
        angle: f64 = 135.0,
        stops: Vec<ColorStop> = default_stops(),
    }
}

fn default_stops() -> Vec<ColorStop> {
    let mut ids = IdGen::new("stop");
    vec![
        ColorStop::new(&mut ids, "#6366f1", 0.0),
        ColorStop::new(&mut ids, "#ec4899", 100.0),
    ]
}

impl GradientState {
    /// Appends a stop with a fresh id.
    pub fn add_stop(&mut self, color: impl Into<String>, position: f64) -> ItemId {
        let mut ids = IdGen::after("stop", self.stops.iter().map(|s| &s.id));
        let stop = ColorStop::new(&mut ids, color, position);
        let id = stop.id.clone();
        self.stops.push(stop);
        id
    }

    /// Removes a stop by id.
    pub fn remove_stop(&mut self, id: &ItemId) {
        self.stops.retain(|s| &s.id != id);
    }
}

/// Tailwind direction utilities for the eight compass angles.
fn direction_class(angle: f64) -> Option<&'static str> {
    let class = match angle {
        a if a == 0.0 => "to-t",
        a if a == 45.0 => "to-tr",
        a if a == 90.0 => "to-r",
        a if a == 135.0 => "to-br",
        a if a == 180.0 => "to-b",
        a if a == 225.0 => "to-bl",
        a if a == 270.0 => "to-l",
        a if a == 315.0 => "to-tl",
        _ => return None,
    };
    Some(class)
}

impl Effect for GradientState {
    const KIND: EffectKind = EffectKind::Gradient;

    fn value(&self) -> String {
        let stops = stops_to_string(&self.stops);
        match self.kind {
            GradientType::Linear => format!("linear-gradient({}deg, {})", fmt_num(self.angle), stops),
            GradientType::Conic => {
                format!("conic-gradient(from {}deg, {})", fmt_num(self.angle), stops)
            }
            GradientType::Radial => format!("radial-gradient(circle, {})", stops),
        }
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![CssLine::new("background", self.value())]
    }

    fn tailwind(&self) -> Option<String> {
        let stops = stops_to_tailwind(&self.stops);
        let classes = match self.kind {
            GradientType::Radial => format!("bg-[radial-gradient(circle,{})]", stops),
            GradientType::Conic => {
                format!("bg-[conic-gradient(from_{}deg,{})]", fmt_num(self.angle), stops)
            }
            GradientType::Linear => {
                let mut sorted: Vec<&ColorStop> = self.stops.iter().collect();
                sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
                let colors: Vec<String> = sorted.iter().map(|s| canonical_hex(&s.color)).collect();

                match (direction_class(self.angle), colors.as_slice()) {
                    (Some(dir), [from, to]) => {
                        format!("bg-gradient-{} from-[{}] to-[{}]", dir, from, to)
                    }
                    (Some(dir), [from, via, to]) => format!(
                        "bg-gradient-{} from-[{}] via-[{}] to-[{}]",
                        dir, from, via, to
                    ),
                    _ => format!("bg-[linear-gradient({}deg,{})]", fmt_num(self.angle), stops),
                }
            }
        };
        Some(classes)
    }
}

impl ImportCss for GradientState {
    fn from_css(props: &PropertyMap) -> Option<GradientPatch> {
        let raw = props.first_of(&["background", "background-image"])?;
        let gradient = parse_gradient(raw, "stop")?;

        Some(GradientPatch {
            kind: Some(gradient.shape.into()),
            angle: gradient.angle,
            stops: Some(gradient.stops),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> PropertyMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn default_value() {
        assert_eq!(
            GradientState::default().value(),
            "linear-gradient(135deg, #6366f1 0%, #ec4899 100%)"
        );
    }

    #[test]
    fn conic_and_radial_values() {
        let mut s = GradientState::default();
        s.kind = GradientType::Conic;
        s.angle = 30.0;
        assert_eq!(s.value(), "conic-gradient(from 30deg, #6366f1 0%, #ec4899 100%)");
        s.kind = GradientType::Radial;
        assert_eq!(s.value(), "radial-gradient(circle, #6366f1 0%, #ec4899 100%)");
    }

    #[test]
    fn copy_text_uses_background() {
        assert!(GradientState::default()
            .copy_text()
            .starts_with("background: linear-gradient(135deg"));
    }

    #[test]
    fn imports_linear_gradient() {
        let patch = GradientState::from_css(&props(&[(
            "background",
            "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)",
        )]))
        .unwrap();
        assert_eq!(patch.kind, Some(GradientType::Linear));
        assert_eq!(patch.angle, Some(90.0));
        let stops: Vec<_> = patch
            .stops
            .unwrap()
            .into_iter()
            .map(|s| (s.color, s.position))
            .collect();
        assert_eq!(
            stops,
            vec![("#ff0000".to_string(), 0.0), ("#0000ff".to_string(), 100.0)]
        );
    }

    #[test]
    fn direction_keyword_keeps_current_angle() {
        let mut s = GradientState::default();
        s.angle = 12.0;
        let imported = s
            .import("background: linear-gradient(to right, #000 0%, #fff 100%);")
            .unwrap();
        assert_eq!(imported.angle, 12.0);
    }

    #[test]
    fn background_image_is_a_fallback() {
        let patch = GradientState::from_css(&props(&[(
            "background-image",
            "radial-gradient(circle, #000 0%, #fff 100%)",
        )]))
        .unwrap();
        assert_eq!(patch.kind, Some(GradientType::Radial));
        assert_eq!(patch.angle, None);
    }

    #[test]
    fn plain_backgrounds_are_not_gradients() {
        assert!(GradientState::from_css(&props(&[("background", "#fff")])).is_none());
        assert!(GradientState::from_css(&props(&[("background", "none")])).is_none());
        assert!(GradientState::from_css(&PropertyMap::new()).is_none());
    }

    #[test]
    fn tailwind_named_direction_for_two_stops() {
        assert_eq!(
            GradientState::default().tailwind().unwrap(),
            "bg-gradient-to-br from-[#6366f1] to-[#ec4899]"
        );
    }

    #[test]
    fn tailwind_arbitrary_for_odd_angles() {
        let mut s = GradientState::default();
        s.angle = 10.0;
        assert_eq!(
            s.tailwind().unwrap(),
            "bg-[linear-gradient(10deg,#6366f1_0%,#ec4899_100%)]"
        );
    }

    #[test]
    fn stop_ids_do_not_collide() {
        let mut s = GradientState::default();
        let id = s.add_stop("#ffffff", 50.0);
        assert_eq!(id.as_str(), "stop-3");
        s.remove_stop(&id);
        assert_eq!(s.stops.len(), 2);
    }
}
