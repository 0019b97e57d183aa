//! Single-layer `text-shadow`.

use super::shadow::parse_shadow_parts;
use super::{Effect, EffectKind, ImportCss};
use crate::css::{fmt_num, rgba, rgba_compact, split_spaces, split_top_level, CssLine, PropertyMap};
use crate::state::effect_state;

effect_state! {
    /// Text-shadow state. `preview_text` and `font_size` only drive previews
    /// and never appear in the CSS.
    TextShadowState / TextShadowPatch {
        x: f64 = 2.0,
        y: f64 = 2.0,
        blur: f64 = 8.0,
        color: String = "#000000".to_string(),
        opacity: f64 = 0.35,
        preview_text: String = "Hello".to_string(),
        font_size: f64 = 64.0,
    }
}

impl Effect for TextShadowState {
    const KIND: EffectKind = EffectKind::TextShadow;

    fn value(&self) -> String {
        format!(
            "{}px {}px {}px {}",
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.blur),
            rgba(&self.color, self.opacity)
        )
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![CssLine::new("text-shadow", self.value())]
    }

    fn tailwind(&self) -> Option<String> {
        Some(format!(
            "[text-shadow:{}px_{}px_{}px_{}]",
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.blur),
            rgba_compact(&self.color, self.opacity)
        ))
    }
}

impl ImportCss for TextShadowState {
    /// Reads the first shadow of a `text-shadow` list.
    fn from_css(props: &PropertyMap) -> Option<TextShadowPatch> {
        let raw = props.get("text-shadow")?;
        if raw.eq_ignore_ascii_case("none") {
            return None;
        }

        let first = split_top_level(raw, ',').into_iter().next()?;
        let (lengths, color) = parse_shadow_parts(&split_spaces(first), 3)?;

        Some(TextShadowPatch {
            x: Some(lengths[0]),
            y: Some(lengths[1]),
            blur: Some(lengths.get(2).copied().unwrap_or(0.0)),
            color: Some(color.hex),
            opacity: Some(color.opacity),
            ..Default::default()
        })
    }
}
