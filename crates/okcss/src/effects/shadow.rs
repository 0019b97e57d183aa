//! Multi-layer `box-shadow`.
//!
//! Each layer can be toggled on and off and switched between outset and
//! inset. The value joins enabled layers with `,\n  `; with no enabled layer
//! it is `none`.

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind, ImportCss};
use crate::css::{
    fmt_num, looks_like_color, parse_color, parse_px, rgba, rgba_compact, split_spaces,
    split_top_level, CssLine, ParsedColor, PropertyMap,
};
use crate::ids::{IdGen, ItemId};
use crate::state::effect_state;

/// One shadow layer. Offsets, blur and spread are in px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowLayer {
    pub id: ItemId,
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    pub opacity: f64,
    pub inset: bool,
    pub enabled: bool,
}

impl ShadowLayer {
    /// A layer with the default offsets and a soft black shadow.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            x: 4.0,
            y: 6.0,
            blur: 12.0,
            spread: 0.0,
            color: "#000000".to_string(),
            opacity: 0.25,
            inset: false,
            enabled: true,
        }
    }

    fn value(&self) -> String {
        format!(
            "{}{}px {}px {}px {}px {}",
            if self.inset { "inset " } else { "" },
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.blur),
            fmt_num(self.spread),
            rgba(&self.color, self.opacity)
        )
    }

    fn tailwind(&self) -> String {
        format!(
            "{}{}px_{}px_{}px_{}px_{}",
            if self.inset { "inset_" } else { "" },
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.blur),
            fmt_num(self.spread),
            rgba_compact(&self.color, self.opacity)
        )
    }
}

effect_state! {
    /// Box-shadow state: an ordered list of layers.
    ShadowState / ShadowPatch {
        layers: Vec<ShadowLayer> = vec![ShadowLayer::new(ItemId::new("layer-1"))],
    }
}

impl ShadowState {
    /// Appends a default layer with a fresh id.
    pub fn add_layer(&mut self) -> ItemId {
        let mut ids = IdGen::after("layer", self.layers.iter().map(|l| &l.id));
        let layer = ShadowLayer::new(ids.next_id());
        let id = layer.id.clone();
        self.layers.push(layer);
        id
    }

    pub fn remove_layer(&mut self, id: &ItemId) {
        self.layers.retain(|l| &l.id != id);
    }

    fn active(&self) -> impl Iterator<Item = &ShadowLayer> {
        self.layers.iter().filter(|l| l.enabled)
    }
}

impl Effect for ShadowState {
    const KIND: EffectKind = EffectKind::Shadow;

    fn value(&self) -> String {
        let layers: Vec<String> = self.active().map(ShadowLayer::value).collect();
        if layers.is_empty() {
            return "none".to_string();
        }
        layers.join(",\n  ")
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![CssLine::new("box-shadow", self.value())]
    }

    fn tailwind(&self) -> Option<String> {
        let layers: Vec<String> = self.active().map(ShadowLayer::tailwind).collect();
        if layers.is_empty() {
            return Some("shadow-none".to_string());
        }
        Some(format!("shadow-[{}]", layers.join(",")))
    }
}

/// Offsets and color of one `x y [blur [spread]] color` shadow.
///
/// The last color-looking token is the color; every other token must be a
/// length. Returns `None` if any token is unreadable, if fewer than two or
/// more than `max_lengths` lengths are present, or if the color is missing
/// or cannot be parsed (HSL).
pub(crate) fn parse_shadow_parts(
    tokens: &[&str],
    max_lengths: usize,
) -> Option<(Vec<f64>, ParsedColor)> {
    let color_idx = tokens.iter().rposition(|t| looks_like_color(t))?;
    let color = parse_color(tokens[color_idx])?;

    let lengths = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != color_idx)
        .map(|(_, t)| parse_px(t))
        .collect::<Option<Vec<f64>>>()?;

    if lengths.len() < 2 || lengths.len() > max_lengths {
        return None;
    }
    Some((lengths, color))
}

fn parse_layer(token: &str, ids: &mut IdGen) -> Option<ShadowLayer> {
    let mut tokens = split_spaces(token);
    let inset = match tokens.iter().position(|t| t.eq_ignore_ascii_case("inset")) {
        Some(idx) if idx == 0 || idx == tokens.len() - 1 => {
            tokens.remove(idx);
            true
        }
        Some(_) => return None,
        None => false,
    };

    let Some((lengths, color)) = parse_shadow_parts(&tokens, 4) else {
        tracing::debug!(layer = token, "discarding unreadable shadow layer");
        return None;
    };

    Some(ShadowLayer {
        id: ids.next_id(),
        x: lengths[0],
        y: lengths[1],
        blur: lengths.get(2).copied().unwrap_or(0.0),
        spread: lengths.get(3).copied().unwrap_or(0.0),
        color: color.hex,
        opacity: color.opacity,
        inset,
        enabled: true,
    })
}

impl ImportCss for ShadowState {
    fn from_css(props: &PropertyMap) -> Option<ShadowPatch> {
        let raw = props.get("box-shadow")?;
        if raw.eq_ignore_ascii_case("none") {
            return None;
        }

        let mut ids = IdGen::new("layer");
        let layers: Vec<ShadowLayer> = split_top_level(raw, ',')
            .into_iter()
            .filter_map(|token| parse_layer(token, &mut ids))
            .collect();

        if layers.is_empty() {
            return None;
        }
        Some(ShadowPatch {
            layers: Some(layers),
        })
    }
}
