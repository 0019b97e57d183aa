//! Color stops shared by the gradient and text-gradient effects.

use serde::{Deserialize, Serialize};

use crate::css::{
    canonical_hex, fmt_num, function_calls, looks_like_color, parse_color, parse_deg, parse_pct,
    split_spaces, FunctionCall,
};
use crate::ids::{IdGen, ItemId};

/// One stop of a gradient: a color at a percentage position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub id: ItemId,
    pub color: String,
    pub position: f64,
}

impl ColorStop {
    pub fn new(ids: &mut IdGen, color: impl Into<String>, position: f64) -> Self {
        Self {
            id: ids.next_id(),
            color: color.into(),
            position,
        }
    }
}

/// `color pos%` pairs sorted by position, joined with `", "`.
pub(crate) fn stops_to_string(stops: &[ColorStop]) -> String {
    let mut sorted: Vec<&ColorStop> = stops.iter().collect();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
    sorted
        .iter()
        .map(|s| format!("{} {}%", canonical_hex(&s.color), fmt_num(s.position)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Tailwind arbitrary-value form: spaces become underscores.
pub(crate) fn stops_to_tailwind(stops: &[ColorStop]) -> String {
    stops_to_string(stops).replace(", ", ",").replace(' ', "_")
}

/// Gradient shape as read back from CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GradientShape {
    Linear,
    Radial,
    Conic,
}

/// A gradient function read back from CSS.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedGradient {
    pub shape: GradientShape,
    /// `None` when the gradient had no angle, or used `to <direction>`.
    pub angle: Option<f64>,
    pub stops: Vec<ColorStop>,
}

/// Finds the first gradient function in a `background` value and reads it.
///
/// Leading non-stop arguments are consumed first: `<n>deg` and `to <dir>`
/// for linear, shape/size/position for radial, `from <n>deg` for conic.
/// Fewer than two readable stops makes the whole gradient unreadable.
pub(crate) fn parse_gradient(value: &str, prefix: &str) -> Option<ParsedGradient> {
    let (shape, call) = function_calls(value).into_iter().find_map(gradient_shape)?;

    let mut args = call.comma_args();
    let mut angle = None;

    if let Some(first) = args.first().copied() {
        match shape {
            GradientShape::Linear if first.ends_with("deg") => {
                angle = parse_deg(first);
                args.remove(0);
            }
            GradientShape::Linear if first.starts_with("to ") => {
                args.remove(0);
            }
            GradientShape::Conic if first.starts_with("from ") || first.starts_with("at ") => {
                angle = split_spaces(first)
                    .windows(2)
                    .find(|w| w[0] == "from")
                    .and_then(|w| parse_deg(w[1]));
                args.remove(0);
            }
            GradientShape::Radial if !looks_like_color(first) => {
                args.remove(0);
            }
            _ => {}
        }
    }

    let stops = parse_stops(&args, prefix);
    if stops.len() < 2 {
        tracing::debug!(found = stops.len(), "gradient needs at least two stops");
        return None;
    }

    Some(ParsedGradient {
        shape,
        angle,
        stops,
    })
}

fn gradient_shape(call: FunctionCall) -> Option<(GradientShape, FunctionCall)> {
    let shape = match call.name.trim_start_matches("repeating-") {
        "linear-gradient" => GradientShape::Linear,
        "radial-gradient" => GradientShape::Radial,
        "conic-gradient" => GradientShape::Conic,
        _ => return None,
    };
    Some((shape, call))
}

/// Reads stops; a stop without a `%` position gets one interpolated evenly
/// over the argument indices.
fn parse_stops(args: &[&str], prefix: &str) -> Vec<ColorStop> {
    let mut ids = IdGen::new(prefix);
    let last_index = args.len().saturating_sub(1).max(1) as f64;

    args.iter()
        .enumerate()
        .filter_map(|(i, arg)| {
            let tokens = split_spaces(arg);
            let color = tokens
                .iter()
                .find(|t| looks_like_color(t))
                .and_then(|t| parse_color(t))?;
            let position = tokens
                .iter()
                .find(|t| t.ends_with('%'))
                .and_then(|t| parse_pct(t))
                .unwrap_or_else(|| (i as f64 / last_index * 100.0).round());
            Some(ColorStop::new(&mut ids, color.hex, position))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::split_top_level;

    fn stops_of(value: &str) -> Vec<(String, f64)> {
        parse_stops(&split_top_level(value, ','), "t")
            .into_iter()
            .map(|s| (s.color, s.position))
            .collect()
    }

    #[test]
    fn stops_are_sorted_on_output() {
        let mut ids = IdGen::new("stop");
        let stops = vec![
            ColorStop::new(&mut ids, "#FFFFFF", 100.0),
            ColorStop::new(&mut ids, "#000000", 0.0),
        ];
        assert_eq!(stops_to_string(&stops), "#000000 0%, #ffffff 100%");
        assert_eq!(stops_to_tailwind(&stops), "#000000_0%,#ffffff_100%");
    }

    #[test]
    fn missing_positions_are_interpolated() {
        let stops = stops_of("#ff0000, #00ff00, #0000ff");
        assert_eq!(
            stops,
            vec![
                ("#ff0000".to_string(), 0.0),
                ("#00ff00".to_string(), 50.0),
                ("#0000ff".to_string(), 100.0),
            ]
        );
    }

    #[test]
    fn stops_without_a_color_are_skipped() {
        let stops = stops_of("#fff 0%, 50%, #000 100%");
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].1, 100.0);
    }

    #[test]
    fn linear_with_angle() {
        let g = parse_gradient("linear-gradient(90deg, #ff0000 0%, #0000ff 100%)", "s").unwrap();
        assert_eq!(g.shape, GradientShape::Linear);
        assert_eq!(g.angle, Some(90.0));
        assert_eq!(g.stops[0].color, "#ff0000");
        assert_eq!(g.stops[1].position, 100.0);
    }

    #[test]
    fn direction_keyword_leaves_angle_unset() {
        let g = parse_gradient("linear-gradient(to right, #000, #fff)", "s").unwrap();
        assert_eq!(g.angle, None);
        assert_eq!(g.stops.len(), 2);
    }

    #[test]
    fn conic_from_angle() {
        let g = parse_gradient("conic-gradient(from 45deg, #000 0%, #fff 100%)", "s").unwrap();
        assert_eq!(g.shape, GradientShape::Conic);
        assert_eq!(g.angle, Some(45.0));
    }

    #[test]
    fn radial_shape_argument_is_skipped() {
        let g = parse_gradient("radial-gradient(circle, #000 0%, #fff 100%)", "s").unwrap();
        assert_eq!(g.shape, GradientShape::Radial);
        assert_eq!(g.stops.len(), 2);
    }

    #[test]
    fn one_stop_is_not_a_gradient() {
        assert!(parse_gradient("linear-gradient(90deg, #000 0%)", "s").is_none());
        assert!(parse_gradient("#ffffff", "s").is_none());
    }

    #[test]
    fn gradient_inside_a_shorthand() {
        let g = parse_gradient(
            "url(a.png) no-repeat, linear-gradient(180deg, rgba(0, 0, 0, 0.5) 0%, #fff 100%)",
            "s",
        )
        .unwrap();
        assert_eq!(g.angle, Some(180.0));
        assert_eq!(g.stops[0].color, "#000000");
    }
}
