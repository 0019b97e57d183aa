//! `outline` and `outline-offset`, with a Tailwind `ring-*` rendering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind, ImportCss};
use crate::css::{
    canonical_hex, fmt_num, looks_like_color, parse_color, parse_px, rgba, rgba_compact,
    round_to, split_spaces, CssLine, PropertyMap,
};
use crate::state::effect_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
    None,
}

impl OutlineStyle {
    pub const ALL: [OutlineStyle; 9] = [
        OutlineStyle::Solid,
        OutlineStyle::Dashed,
        OutlineStyle::Dotted,
        OutlineStyle::Double,
        OutlineStyle::Groove,
        OutlineStyle::Ridge,
        OutlineStyle::Inset,
        OutlineStyle::Outset,
        OutlineStyle::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutlineStyle::Solid => "solid",
            OutlineStyle::Dashed => "dashed",
            OutlineStyle::Dotted => "dotted",
            OutlineStyle::Double => "double",
            OutlineStyle::Groove => "groove",
            OutlineStyle::Ridge => "ridge",
            OutlineStyle::Inset => "inset",
            OutlineStyle::Outset => "outset",
            OutlineStyle::None => "none",
        }
    }
}

impl FromStr for OutlineStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutlineStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

effect_state! {
    /// Width and offset in px; `opacity` below 1 renders the color as `rgba()`.
    OutlineState / OutlinePatch {
        width: f64 = 2.0,
        style: OutlineStyle = OutlineStyle::Solid,
        color: String = "#6366f1".to_string(),
        opacity: f64 = 1.0,
        offset: f64 = 2.0,
    }
}

impl OutlineState {
    /// Opaque once the alpha `rgba()` would print reaches 1.
    fn is_opaque(&self) -> bool {
        round_to(self.opacity, 2) >= 1.0
    }

    fn color_value(&self) -> String {
        if self.is_opaque() {
            canonical_hex(&self.color)
        } else {
            rgba(&self.color, self.opacity)
        }
    }
}

fn ring_width(width: f64) -> String {
    match width {
        w if [0.0, 1.0, 2.0, 4.0, 8.0].contains(&w) => format!("ring-{}", fmt_num(w)),
        w => format!("ring-[{}px]", fmt_num(w)),
    }
}

fn ring_offset(offset: f64) -> String {
    match offset {
        o if [0.0, 1.0, 2.0, 4.0, 8.0].contains(&o) => format!("ring-offset-{}", fmt_num(o)),
        o => format!("ring-offset-[{}px]", fmt_num(o)),
    }
}

impl Effect for OutlineState {
    const KIND: EffectKind = EffectKind::Outline;

    fn value(&self) -> String {
        format!(
            "{}px {} {}",
            fmt_num(self.width),
            self.style.as_str(),
            self.color_value()
        )
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![
            CssLine::new("outline", self.value()),
            CssLine::new("outline-offset", format!("{}px", fmt_num(self.offset))),
        ]
    }

    fn tailwind(&self) -> Option<String> {
        let color = if self.is_opaque() {
            canonical_hex(&self.color)
        } else {
            rgba_compact(&self.color, self.opacity)
        };
        let mut classes = vec![
            ring_width(self.width),
            format!("ring-[{}]", color),
            ring_offset(self.offset),
        ];
        if self.style != OutlineStyle::Solid {
            classes.push(format!("[outline-style:{}]", self.style.as_str()));
        }
        Some(classes.join(" "))
    }
}

/// Width keywords as browsers resolve them.
fn parse_width(token: &str) -> Option<f64> {
    match token.to_ascii_lowercase().as_str() {
        "thin" => Some(1.0),
        "medium" => Some(3.0),
        "thick" => Some(5.0),
        _ => parse_px(token),
    }
}

impl ImportCss for OutlineState {
    /// Tokens of the `outline` shorthand may come in any order. An unreadable
    /// token leaves its field out.
    fn from_css(props: &PropertyMap) -> Option<OutlinePatch> {
        let mut patch = OutlinePatch::default();

        if let Some(raw) = props.get("outline") {
            if raw.eq_ignore_ascii_case("none") {
                return None;
            }
            for token in split_spaces(raw) {
                if looks_like_color(token) {
                    if let Some(color) = parse_color(token) {
                        patch.color = Some(color.hex);
                        patch.opacity = Some(color.opacity);
                    }
                } else if let Ok(style) = token.parse::<OutlineStyle>() {
                    patch.style = Some(style);
                } else if let Some(width) = parse_width(token) {
                    patch.width = Some(width);
                } else {
                    tracing::debug!(token, "ignoring outline token");
                }
            }
        }

        patch.offset = props.get("outline-offset").and_then(parse_px);

        (!patch.is_empty()).then_some(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_declarations() {
        assert_eq!(
            OutlineState::default().copy_text(),
            "outline: 2px solid #6366f1;\noutline-offset: 2px;"
        );
    }

    #[test]
    fn translucent_color_uses_rgba() {
        let s = OutlineState {
            opacity: 0.5,
            color: "#FFF".into(),
            style: OutlineStyle::Dashed,
            ..Default::default()
        };
        assert_eq!(s.value(), "2px dashed rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn tailwind_ring_classes() {
        assert_eq!(
            OutlineState::default().tailwind().unwrap(),
            "ring-2 ring-[#6366f1] ring-offset-2"
        );
        let s = OutlineState {
            width: 3.0,
            offset: -2.0,
            style: OutlineStyle::Dotted,
            ..Default::default()
        };
        assert_eq!(
            s.tailwind().unwrap(),
            "ring-[3px] ring-[#6366f1] ring-offset-[-2px] [outline-style:dotted]"
        );
    }

    #[test]
    fn imports_shorthand_in_any_order() {
        let s = OutlineState::default()
            .import("outline: #ff0000 dotted 3px;\noutline-offset: -1px;")
            .unwrap();
        assert_eq!(s.color, "#ff0000");
        assert_eq!(s.style, OutlineStyle::Dotted);
        assert_eq!(s.width, 3.0);
        assert_eq!(s.offset, -1.0);

        let s = OutlineState::default().import("outline: thick double rgba(0,0,0,0.4);").unwrap();
        assert_eq!((s.width, s.opacity), (5.0, 0.4));
        assert_eq!(s.offset, 2.0);
    }

    #[test]
    fn offset_alone_is_enough() {
        let s = OutlineState::default().import("outline-offset: 6px;").unwrap();
        assert_eq!(s.offset, 6.0);
    }

    #[test]
    fn nearly_opaque_renders_as_hex() {
        let s = OutlineState {
            opacity: 0.996,
            ..Default::default()
        };
        assert_eq!(s.value(), "2px solid #6366f1");
        assert!(s.tailwind().unwrap().contains("ring-[#6366f1]"));

        let back = OutlineState::default().import(&s.copy_text()).unwrap();
        assert_eq!(back.value(), s.value());

        let below = OutlineState {
            opacity: 0.994,
            ..Default::default()
        };
        assert_eq!(below.value(), "2px solid rgba(99, 102, 241, 0.99)");
    }

    #[test]
    fn none_and_absent() {
        assert!(OutlineState::default().import("outline: none;").is_none());
        assert!(OutlineState::default().import("border: 1px solid red;").is_none());
    }
}
