//! `cubic-bezier()` easing curves.

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind, ImportCss};
use crate::css::{find_call, fmt_num, parse_number, round_to, split_spaces, CssLine, PropertyMap};
use crate::state::effect_state;

/// Named curves offered as starting points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BezierPreset {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    BounceOut,
    BackInOut,
    Snappy,
}

impl BezierPreset {
    pub const ALL: [BezierPreset; 8] = [
        BezierPreset::Linear,
        BezierPreset::Ease,
        BezierPreset::EaseIn,
        BezierPreset::EaseOut,
        BezierPreset::EaseInOut,
        BezierPreset::BounceOut,
        BezierPreset::BackInOut,
        BezierPreset::Snappy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BezierPreset::Linear => "linear",
            BezierPreset::Ease => "ease",
            BezierPreset::EaseIn => "ease-in",
            BezierPreset::EaseOut => "ease-out",
            BezierPreset::EaseInOut => "ease-in-out",
            BezierPreset::BounceOut => "bounce-out",
            BezierPreset::BackInOut => "back-in-out",
            BezierPreset::Snappy => "snappy",
        }
    }

    /// Control points `(x1, y1, x2, y2)`.
    pub fn points(self) -> [f64; 4] {
        match self {
            BezierPreset::Linear => [0.0, 0.0, 1.0, 1.0],
            BezierPreset::Ease => [0.25, 0.1, 0.25, 1.0],
            BezierPreset::EaseIn => [0.42, 0.0, 1.0, 1.0],
            BezierPreset::EaseOut => [0.0, 0.0, 0.58, 1.0],
            BezierPreset::EaseInOut => [0.42, 0.0, 0.58, 1.0],
            BezierPreset::BounceOut => [0.34, 1.56, 0.64, 1.0],
            BezierPreset::BackInOut => [0.68, -0.55, 0.27, 1.55],
            BezierPreset::Snappy => [0.1, 0.7, 0.1, 1.0],
        }
    }

    pub fn state(self) -> BezierState {
        let [x1, y1, x2, y2] = self.points();
        BezierState { x1, y1, x2, y2 }
    }

    /// CSS keyword with the same curve, for the five built-in timing functions.
    fn keyword(self) -> Option<&'static str> {
        match self {
            BezierPreset::Linear
            | BezierPreset::Ease
            | BezierPreset::EaseIn
            | BezierPreset::EaseOut
            | BezierPreset::EaseInOut => Some(self.name()),
            _ => None,
        }
    }
}

effect_state! {
    /// The two control points. `x` values belong in `0..=1`; `y` may overshoot.
    BezierState / BezierPatch {
        x1: f64 = 0.42,
        y1: f64 = 0.0,
        x2: f64 = 0.58,
        y2: f64 = 1.0,
    }
}

impl BezierState {
    fn points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2].map(|n| round_to(n, 2))
    }

    /// The preset with exactly these (rounded) control points.
    pub fn preset(&self) -> Option<BezierPreset> {
        let points = self.points();
        BezierPreset::ALL.into_iter().find(|p| p.points() == points)
    }
}

impl Effect for BezierState {
    const KIND: EffectKind = EffectKind::CubicBezier;

    fn value(&self) -> String {
        let [x1, y1, x2, y2] = self.points().map(fmt_num);
        format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![
            CssLine::new("transition-timing-function", self.value()),
            CssLine::new("animation-timing-function", self.value()),
        ]
    }

    fn copy_text(&self) -> String {
        format!(
            "{}\n\n/* Usage example */\ntransition: all 0.4s {};",
            crate::css::lines_to_text(&self.css_lines()),
            self.value()
        )
    }

    fn tailwind(&self) -> Option<String> {
        Some(format!("ease-[{}]", self.value().replace(' ', "")))
    }
}

impl ImportCss for BezierState {
    /// Reads the first timing source that holds a curve, from the timing
    /// properties down to the `transition` and `animation` shorthands. The
    /// built-in keywords (`ease`, `linear`, …) resolve to their curves.
    fn from_css(props: &PropertyMap) -> Option<BezierPatch> {
        let sources = [
            "transition-timing-function",
            "animation-timing-function",
            "transition",
            "animation",
        ];
        sources
            .into_iter()
            .filter_map(|p| props.get(p))
            .find_map(read_curve)
    }
}

fn read_curve(value: &str) -> Option<BezierPatch> {
    if let Some(call) = find_call(value, "cubic-bezier") {
        let args: Vec<f64> = call
            .comma_args()
            .into_iter()
            .map(parse_number)
            .collect::<Option<_>>()?;
        let [x1, y1, x2, y2] = args.as_slice() else {
            tracing::debug!(args = %call.args, "cubic-bezier needs four numbers");
            return None;
        };
        return Some(BezierPatch {
            x1: Some(*x1),
            y1: Some(*y1),
            x2: Some(*x2),
            y2: Some(*y2),
        });
    }

    split_spaces(value).into_iter().find_map(|token| {
        BezierPreset::ALL
            .into_iter()
            .find(|p| p.keyword().is_some_and(|k| k.eq_ignore_ascii_case(token)))
            .map(|p| p.state().into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ease_in_out() {
        let s = BezierState::default();
        assert_eq!(s.value(), "cubic-bezier(0.42, 0, 0.58, 1)");
        assert_eq!(s.preset(), Some(BezierPreset::EaseInOut));
    }

    #[test]
    fn copy_text_has_usage_example() {
        assert_eq!(
            BezierPreset::Snappy.state().copy_text(),
            "transition-timing-function: cubic-bezier(0.1, 0.7, 0.1, 1);\n\
             animation-timing-function: cubic-bezier(0.1, 0.7, 0.1, 1);\n\
             \n\
             /* Usage example */\n\
             transition: all 0.4s cubic-bezier(0.1, 0.7, 0.1, 1);"
        );
    }

    #[test]
    fn rounds_to_two_decimals() {
        let s = BezierState {
            x1: 0.123,
            y1: -0.555,
            x2: 1.0,
            y2: 1.499,
        };
        assert_eq!(s.value(), "cubic-bezier(0.12, -0.56, 1, 1.5)");
        assert_eq!(s.tailwind().unwrap(), "ease-[cubic-bezier(0.12,-0.56,1,1.5)]");
    }

    #[test]
    fn imports_from_each_source() {
        let read = |css: &str| BezierState::default().import(css).unwrap();
        assert_eq!(
            read("animation-timing-function: cubic-bezier(0.68, -0.55, 0.27, 1.55);").preset(),
            Some(BezierPreset::BackInOut)
        );
        assert_eq!(
            read("transition: transform 200ms cubic-bezier(.34,1.56,.64,1);").preset(),
            Some(BezierPreset::BounceOut)
        );
        assert_eq!(
            read("transition-timing-function: ease-out;").preset(),
            Some(BezierPreset::EaseOut)
        );
    }

    #[test]
    fn unreadable_curves() {
        let none = |css: &str| BezierState::default().import(css).is_none();
        assert!(none("transition-timing-function: cubic-bezier(0.1, 0.2, 0.3);"));
        assert!(none("transition-timing-function: steps(4, end);"));
        assert!(none("color: red;"));
    }

    #[test]
    fn every_preset_round_trips() {
        for preset in BezierPreset::ALL {
            let state = preset.state();
            let back = BezierState::default().import(&state.copy_text()).unwrap();
            assert_eq!(back, state);
        }
    }
}
