//! `clip-path` shapes: polygon presets, circle, ellipse and inset.
//!
//! All lengths are percentages so the shapes follow the element's size.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind, ImportCss};
use crate::css::{fmt_num, function_calls, parse_pct, split_spaces, split_top_level, CssLine, PropertyMap};
use crate::state::effect_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipShape {
    #[default]
    Polygon,
    Circle,
    Ellipse,
    Inset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolygonPreset {
    Triangle,
    TriangleRight,
    Pentagon,
    #[default]
    Hexagon,
    Diamond,
    Arrow,
    Chevron,
    Parallelogram,
    Star,
}

impl PolygonPreset {
    pub const ALL: [PolygonPreset; 9] = [
        PolygonPreset::Triangle,
        PolygonPreset::TriangleRight,
        PolygonPreset::Pentagon,
        PolygonPreset::Hexagon,
        PolygonPreset::Diamond,
        PolygonPreset::Arrow,
        PolygonPreset::Chevron,
        PolygonPreset::Parallelogram,
        PolygonPreset::Star,
    ];

    /// The full `polygon(...)` value.
    pub fn polygon(self) -> &'static str {
        match self {
            PolygonPreset::Triangle => "polygon(50% 0%, 0% 100%, 100% 100%)",
            PolygonPreset::TriangleRight => "polygon(0% 0%, 100% 50%, 0% 100%)",
            PolygonPreset::Pentagon => "polygon(50% 0%, 100% 38%, 82% 100%, 18% 100%, 0% 38%)",
            PolygonPreset::Hexagon => {
                "polygon(25% 0%, 75% 0%, 100% 50%, 75% 100%, 25% 100%, 0% 50%)"
            }
            PolygonPreset::Diamond => "polygon(50% 0%, 100% 50%, 50% 100%, 0% 50%)",
            PolygonPreset::Arrow => {
                "polygon(0% 20%, 60% 20%, 60% 0%, 100% 50%, 60% 100%, 60% 80%, 0% 80%)"
            }
            PolygonPreset::Chevron => {
                "polygon(0% 0%, 75% 0%, 100% 50%, 75% 100%, 0% 100%, 25% 50%)"
            }
            PolygonPreset::Parallelogram => "polygon(25% 0%, 100% 0%, 75% 100%, 0% 100%)",
            PolygonPreset::Star => {
                "polygon(50% 0%, 61% 35%, 98% 35%, 68% 57%, 79% 91%, 50% 70%, 21% 91%, 32% 57%, 2% 35%, 39% 35%)"
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PolygonPreset::Triangle => "Triangle",
            PolygonPreset::TriangleRight => "Right Arrow",
            PolygonPreset::Pentagon => "Pentagon",
            PolygonPreset::Hexagon => "Hexagon",
            PolygonPreset::Diamond => "Diamond",
            PolygonPreset::Arrow => "Arrow",
            PolygonPreset::Chevron => "Chevron",
            PolygonPreset::Parallelogram => "Parallelogram",
            PolygonPreset::Star => "Star",
        }
    }
}

/// Presets keyed by their whitespace-normalized point list.
static PRESETS_BY_POINTS: Lazy<HashMap<String, PolygonPreset>> = Lazy::new(|| {
    PolygonPreset::ALL
        .into_iter()
        .filter_map(|preset| {
            let call = function_calls(preset.polygon()).into_iter().next()?;
            Some((normalize_points(&call.args), preset))
        })
        .collect()
});

fn normalize_points(args: &str) -> String {
    split_top_level(args, ',')
        .into_iter()
        .map(|point| split_spaces(point).join(" "))
        .collect::<Vec<_>>()
        .join(", ")
}

effect_state! {
    /// Clip-path state. Only the fields of the active `shape` are rendered.
    ClipPathState / ClipPathPatch {
        #[serde(rename = "type")]
        shape: ClipShape = ClipShape::Polygon,
        preset: PolygonPreset = PolygonPreset::Hexagon,
        circle_radius: f64 = 50.0,
        circle_cx: f64 = 50.0,
        circle_cy: f64 = 50.0,
        ellipse_rx: f64 = 50.0,
        ellipse_ry: f64 = 35.0,
        ellipse_cx: f64 = 50.0,
        ellipse_cy: f64 = 50.0,
        inset_top: f64 = 10.0,
        inset_right: f64 = 10.0,
        inset_bottom: f64 = 10.0,
        inset_left: f64 = 10.0,
        inset_radius: f64 = 0.0,
    }
}

fn pct(n: f64) -> String {
    format!("{}%", fmt_num(n))
}

impl Effect for ClipPathState {
    const KIND: EffectKind = EffectKind::ClipPath;

    fn value(&self) -> String {
        match self.shape {
            ClipShape::Polygon => self.preset.polygon().to_string(),
            ClipShape::Circle => format!(
                "circle({} at {} {})",
                pct(self.circle_radius),
                pct(self.circle_cx),
                pct(self.circle_cy)
            ),
            ClipShape::Ellipse => format!(
                "ellipse({} {} at {} {})",
                pct(self.ellipse_rx),
                pct(self.ellipse_ry),
                pct(self.ellipse_cx),
                pct(self.ellipse_cy)
            ),
            ClipShape::Inset => {
                let sides = format!(
                    "{} {} {} {}",
                    pct(self.inset_top),
                    pct(self.inset_right),
                    pct(self.inset_bottom),
                    pct(self.inset_left)
                );
                if self.inset_radius > 0.0 {
                    format!("inset({} round {})", sides, pct(self.inset_radius))
                } else {
                    format!("inset({})", sides)
                }
            }
        }
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![CssLine::new("clip-path", self.value())]
    }
}

/// Splits `a b at x y` into the tokens before and after `at`.
fn split_at_keyword<'a>(tokens: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>) {
    match tokens.iter().position(|t| t.eq_ignore_ascii_case("at")) {
        Some(idx) => (tokens[..idx].to_vec(), tokens[idx + 1..].to_vec()),
        None => (tokens.to_vec(), Vec::new()),
    }
}

fn parse_all(tokens: &[&str]) -> Option<Vec<f64>> {
    tokens.iter().map(|t| parse_pct(t)).collect()
}

fn circle_patch(args: &str) -> Option<ClipPathPatch> {
    let tokens = split_spaces(args);
    let (size, center) = split_at_keyword(&tokens);
    let size = parse_all(&size)?;
    let center = parse_all(&center)?;

    let mut patch = ClipPathPatch {
        shape: Some(ClipShape::Circle),
        ..Default::default()
    };
    match size.as_slice() {
        [] => {}
        [r] => patch.circle_radius = Some(*r),
        _ => return None,
    }
    if let [cx, cy] = center.as_slice() {
        patch.circle_cx = Some(*cx);
        patch.circle_cy = Some(*cy);
    }
    Some(patch)
}

fn ellipse_patch(args: &str) -> Option<ClipPathPatch> {
    let tokens = split_spaces(args);
    let (size, center) = split_at_keyword(&tokens);
    let size = parse_all(&size)?;
    let center = parse_all(&center)?;

    let mut patch = ClipPathPatch {
        shape: Some(ClipShape::Ellipse),
        ..Default::default()
    };
    match size.as_slice() {
        [] => {}
        [rx, ry] => {
            patch.ellipse_rx = Some(*rx);
            patch.ellipse_ry = Some(*ry);
        }
        _ => return None,
    }
    if let [cx, cy] = center.as_slice() {
        patch.ellipse_cx = Some(*cx);
        patch.ellipse_cy = Some(*cy);
    }
    Some(patch)
}

/// `inset(t [r [b [l]]] [round radius])`, expanded like the CSS shorthand.
fn inset_patch(args: &str) -> Option<ClipPathPatch> {
    let tokens = split_spaces(args);
    let (sides, radius) = match tokens.iter().position(|t| t.eq_ignore_ascii_case("round")) {
        Some(idx) => (&tokens[..idx], tokens.get(idx + 1).and_then(|r| parse_pct(r))),
        None => (&tokens[..], Some(0.0)),
    };

    let (t, r, b, l) = match parse_all(sides)?.as_slice() {
        [all] => (*all, *all, *all, *all),
        [v, h] => (*v, *h, *v, *h),
        [t, h, b] => (*t, *h, *b, *h),
        [t, r, b, l] => (*t, *r, *b, *l),
        _ => return None,
    };

    Some(ClipPathPatch {
        shape: Some(ClipShape::Inset),
        inset_top: Some(t),
        inset_right: Some(r),
        inset_bottom: Some(b),
        inset_left: Some(l),
        inset_radius: radius,
        ..Default::default()
    })
}

/// A polygon matching a preset selects it; any other polygon only sets the shape.
fn polygon_patch(args: &str) -> ClipPathPatch {
    let preset = PRESETS_BY_POINTS.get(&normalize_points(args)).copied();
    if preset.is_none() {
        tracing::debug!("polygon does not match a preset");
    }
    ClipPathPatch {
        shape: Some(ClipShape::Polygon),
        preset,
        ..Default::default()
    }
}

impl ImportCss for ClipPathState {
    fn from_css(props: &PropertyMap) -> Option<ClipPathPatch> {
        let raw = props.first_of(&["clip-path", "-webkit-clip-path"])?;
        let call = function_calls(raw).into_iter().next()?;

        match call.name.as_str() {
            "circle" => circle_patch(&call.args),
            "ellipse" => ellipse_patch(&call.args),
            "inset" => inset_patch(&call.args),
            "polygon" => Some(polygon_patch(&call.args)),
            _ => None,
        }
    }
}
