//! Multi-layer `transition`: one `property duration easing delay` entry per layer.

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind, ImportCss};
use crate::css::{fmt_num, parse_ms, split_spaces, split_top_level, CssLine, PropertyMap};
use crate::ids::{IdGen, ItemId};
use crate::state::effect_state;

const DEFAULT_DURATION: f64 = 300.0;
const DEFAULT_EASING: &str = "ease";

/// Named timing keywords; `cubic-bezier(...)` and `steps(...)` are accepted as well.
const EASING_KEYWORDS: [&str; 7] = [
    "ease",
    "linear",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];

/// One transition layer. Times are in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionLayer {
    pub id: ItemId,
    pub property: String,
    pub duration: f64,
    pub easing: String,
    pub delay: f64,
}

impl TransitionLayer {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            property: "all".to_string(),
            duration: DEFAULT_DURATION,
            easing: DEFAULT_EASING.to_string(),
            delay: 0.0,
        }
    }

    fn value(&self) -> String {
        format!(
            "{} {}ms {} {}ms",
            self.property,
            fmt_num(self.duration),
            self.easing,
            fmt_num(self.delay)
        )
    }
}

effect_state! {
    TransitionState / TransitionPatch {
        layers: Vec<TransitionLayer> = vec![TransitionLayer::new(ItemId::new("transition-1"))],
    }
}

impl TransitionState {
    pub fn add_layer(&mut self) -> ItemId {
        let mut ids = IdGen::after("transition", self.layers.iter().map(|l| &l.id));
        let layer = TransitionLayer::new(ids.next_id());
        let id = layer.id.clone();
        self.layers.push(layer);
        id
    }

    pub fn remove_layer(&mut self, id: &ItemId) {
        self.layers.retain(|l| &l.id != id);
    }
}

/// Tailwind steps for durations and delays.
const TAILWIND_TIMES: [f64; 9] = [0.0, 75.0, 100.0, 150.0, 200.0, 300.0, 500.0, 700.0, 1000.0];

fn nearest_time(ms: f64) -> f64 {
    TAILWIND_TIMES
        .into_iter()
        .min_by(|a, b| (a - ms).abs().total_cmp(&(b - ms).abs()))
        .unwrap_or(0.0)
}

fn property_class(property: &str) -> Option<&'static str> {
    match property {
        "all" => Some("transition-all"),
        "opacity" => Some("transition-opacity"),
        "transform" => Some("transition-transform"),
        "color" | "background-color" | "border-color" => Some("transition-colors"),
        "box-shadow" => Some("transition-shadow"),
        _ => None,
    }
}

fn easing_class(easing: &str) -> String {
    match easing {
        "ease" | "ease-in-out" => "ease-in-out".to_string(),
        "linear" => "ease-linear".to_string(),
        "ease-in" => "ease-in".to_string(),
        "ease-out" => "ease-out".to_string(),
        other => format!("ease-[{}]", other.replace(' ', "")),
    }
}

impl Effect for TransitionState {
    const KIND: EffectKind = EffectKind::Transition;

    fn value(&self) -> String {
        if self.layers.is_empty() {
            return "none".to_string();
        }
        self.layers
            .iter()
            .map(TransitionLayer::value)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![CssLine::new("transition", self.value())]
    }

    /// Only a single layer on a property Tailwind knows has a class form.
    fn tailwind(&self) -> Option<String> {
        let [layer] = self.layers.as_slice() else {
            return None;
        };
        let mut classes = vec![
            property_class(&layer.property)?.to_string(),
            format!("duration-{}", fmt_num(nearest_time(layer.duration))),
            easing_class(&layer.easing),
        ];
        let delay = nearest_time(layer.delay);
        if delay > 0.0 {
            classes.push(format!("delay-{}", fmt_num(delay)));
        }
        Some(classes.join(" "))
    }
}

fn is_easing(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    EASING_KEYWORDS.contains(&lower.as_str())
        || lower.starts_with("cubic-bezier(")
        || lower.starts_with("steps(")
}

/// Durations need a unit, except a bare `0`.
fn parse_time(token: &str) -> Option<f64> {
    if token == "0" {
        return Some(0.0);
    }
    parse_ms(token)
}

/// Reads one layer. The first time is the duration, the second the delay;
/// missing parts fall back to `all 300ms ease 0ms`.
fn parse_layer(token: &str, ids: &mut IdGen) -> Option<TransitionLayer> {
    let mut property = None;
    let mut easing = None;
    let mut times = Vec::new();

    for part in split_spaces(token) {
        if let Some(ms) = parse_time(part) {
            times.push(ms);
        } else if is_easing(part) {
            easing = Some(part.to_string());
        } else if property.is_none() {
            property = Some(part.to_ascii_lowercase());
        } else {
            tracing::debug!(layer = token, "discarding unreadable transition layer");
            return None;
        }
    }

    if times.len() > 2 {
        return None;
    }

    Some(TransitionLayer {
        id: ids.next_id(),
        property: property.unwrap_or_else(|| "all".to_string()),
        duration: times.first().copied().unwrap_or(DEFAULT_DURATION),
        easing: easing.unwrap_or_else(|| DEFAULT_EASING.to_string()),
        delay: times.get(1).copied().unwrap_or(0.0),
    })
}

impl ImportCss for TransitionState {
    fn from_css(props: &PropertyMap) -> Option<TransitionPatch> {
        let raw = props.get("transition")?;
        if raw.eq_ignore_ascii_case("none") {
            return None;
        }

        let mut ids = IdGen::new("transition");
        let layers: Vec<TransitionLayer> = split_top_level(raw, ',')
            .into_iter()
            .filter_map(|token| parse_layer(token, &mut ids))
            .collect();

        if layers.is_empty() {
            return None;
        }
        Some(TransitionPatch {
            layers: Some(layers),
        })
    }
}
