//! `@keyframes` blocks and the `animation` shorthand that plays them.

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind};
use crate::css::{fmt_num, CssLine};
use crate::ids::{IdGen, ItemId};
use crate::state::effect_state;

/// A keyframes block needs a start and an end.
pub const MIN_STOPS: usize = 2;

const FALLBACK_NAME: &str = "animation";

/// One keyframe. `offset` is a percentage, translations are in px and
/// `rotate` in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyframeStop {
    pub id: ItemId,
    pub offset: f64,
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl KeyframeStop {
    /// A resting frame at `offset`.
    pub fn new(id: ItemId, offset: f64) -> Self {
        Self {
            id,
            offset,
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate: 0.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            fmt_num(self.translate_x),
            fmt_num(self.translate_y),
            fmt_num(self.scale),
            fmt_num(self.rotate)
        )
    }
}

fn default_stops() -> Vec<KeyframeStop> {
    vec![
        KeyframeStop {
            opacity: 0.0,
            translate_y: -20.0,
            ..KeyframeStop::new(ItemId::new("stop-1"), 0.0)
        },
        KeyframeStop::new(ItemId::new("stop-2"), 100.0),
    ]
}

effect_state! {
    /// `duration` is in milliseconds. `iterations` holds a count or `infinite`.
    KeyframesState / KeyframesPatch {
        name: String = "fadeIn".to_string(),
        stops: Vec<KeyframeStop> = default_stops(),
        duration: f64 = 600.0,
        easing: String = "ease-out".to_string(),
        iterations: String = "1".to_string(),
        direction: String = "normal".to_string(),
        fill_mode: String = "forwards".to_string(),
    }
}

impl KeyframesState {
    /// The animation name, or `animation` when blank.
    pub fn animation_name(&self) -> &str {
        match self.name.trim() {
            "" => FALLBACK_NAME,
            name => name,
        }
    }

    /// Stops ordered by offset; equal offsets keep their list order.
    pub fn sorted_stops(&self) -> Vec<&KeyframeStop> {
        let mut stops: Vec<_> = self.stops.iter().collect();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        stops
    }

    /// Adds a resting stop at `offset` and returns its id.
    pub fn add_stop(&mut self, offset: f64) -> ItemId {
        let mut ids = IdGen::after("stop", self.stops.iter().map(|s| &s.id));
        let stop = KeyframeStop::new(ids.next_id(), offset.clamp(0.0, 100.0));
        let id = stop.id.clone();
        self.stops.push(stop);
        self.stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        id
    }

    /// Removes a stop unless that would leave fewer than [`MIN_STOPS`].
    /// Returns whether one was removed.
    pub fn remove_stop(&mut self, id: &ItemId) -> bool {
        if self.stops.len() <= MIN_STOPS || !self.stops.iter().any(|s| &s.id == id) {
            return false;
        }
        self.stops.retain(|s| &s.id != id);
        true
    }

    fn block(&self) -> String {
        let mut out = format!("@keyframes {} {{\n", self.animation_name());
        for stop in self.sorted_stops() {
            out.push_str(&format!(
                "  {}% {{ opacity: {}; transform: {}; }}\n",
                fmt_num(stop.offset),
                fmt_num(stop.opacity),
                stop.transform()
            ));
        }
        out.push('}');
        out
    }
}

impl Effect for KeyframesState {
    const KIND: EffectKind = EffectKind::Keyframes;

    /// The `animation` shorthand, with a zero delay.
    fn value(&self) -> String {
        format!(
            "{} {}ms {} 0ms {} {} {}",
            self.animation_name(),
            fmt_num(self.duration),
            self.easing,
            self.iterations,
            self.direction,
            self.fill_mode
        )
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![CssLine::new("animation", self.value())]
    }

    fn copy_text(&self) -> String {
        format!(
            "{}\n\n.element {{\n  animation: {};\n}}",
            self.block(),
            self.value()
        )
    }

    fn raw_css(&self) -> Option<String> {
        Some(self.copy_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in() {
        let state = KeyframesState::default();
        assert_eq!(
            state.copy_text(),
            "@keyframes fadeIn {\n  \
             0% { opacity: 0; transform: translate(0px, -20px) scale(1) rotate(0deg); }\n  \
             100% { opacity: 1; transform: translate(0px, 0px) scale(1) rotate(0deg); }\n\
             }\n\n\
             .element {\n  animation: fadeIn 600ms ease-out 0ms 1 normal forwards;\n}"
        );
        assert_eq!(state.css_lines().len(), 1);
    }

    #[test]
    fn stops_render_in_offset_order() {
        let mut state = KeyframesState::default();
        state.stops.reverse();
        let id = state.add_stop(50.0);
        assert_eq!(id, ItemId::new("stop-3"));

        let offsets: Vec<_> = state.sorted_stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, [0.0, 50.0, 100.0]);
        let block = state.copy_text();
        let at = |needle: &str| block.find(needle).unwrap();
        assert!(at("  0% {") < at("  50% {") && at("  50% {") < at("  100% {"));
    }

    #[test]
    fn removal_keeps_two_stops() {
        let mut state = KeyframesState::default();
        let id = state.add_stop(120.0);
        assert_eq!(state.stops.last().unwrap().offset, 100.0);
        assert!(state.remove_stop(&id));
        assert!(!state.remove_stop(&ItemId::new("stop-1")));
        assert!(!state.remove_stop(&ItemId::new("missing")));
        assert_eq!(state.stops.len(), MIN_STOPS);
    }

    #[test]
    fn infinite_spin() {
        let mut state = KeyframesState {
            name: "  ".into(),
            iterations: "infinite".into(),
            easing: "linear".into(),
            duration: 1000.0,
            ..Default::default()
        };
        state.stops[0].opacity = 1.0;
        state.stops[0].translate_y = 0.0;
        state.stops[1].rotate = 360.0;
        assert_eq!(state.value(), "animation 1000ms linear 0ms infinite normal forwards");
        assert!(state
            .copy_text()
            .contains("100% { opacity: 1; transform: translate(0px, 0px) scale(1) rotate(360deg); }"));
    }
}
