//! Scrollbar styling for both the standard properties and WebKit pseudo-elements.
//!
//! The flat declarations only cover `scrollbar-width` and `scrollbar-color`.
//! Copy text adds the nested `::-webkit-scrollbar` rules, which is also what
//! the reducer reads back.

use super::{Effect, EffectKind, ImportCss};
use crate::css::{
    canonical_hex, fmt_num, parse_color, parse_px, split_spaces, CssLine, PropertyMap,
};
use crate::state::effect_state;

/// Widths at or below this render as `scrollbar-width: thin`.
const THIN_MAX: f64 = 6.0;

effect_state! {
    /// Colors are hex; width and radius in px.
    ScrollbarState / ScrollbarPatch {
        width: f64 = 8.0,
        thumb_color: String = "#a1a1aa".to_string(),
        track_color: String = "#f4f4f5".to_string(),
        thumb_radius: f64 = 9999.0,
        thumb_hover_color: String = "#71717a".to_string(),
    }
}

impl ScrollbarState {
    fn standard_width(&self) -> &'static str {
        if self.width <= THIN_MAX {
            "thin"
        } else {
            "auto"
        }
    }
}

impl Effect for ScrollbarState {
    const KIND: EffectKind = EffectKind::Scrollbar;

    /// The `scrollbar-color` value: thumb, then track.
    fn value(&self) -> String {
        format!(
            "{} {}",
            canonical_hex(&self.thumb_color),
            canonical_hex(&self.track_color)
        )
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![
            CssLine::new("scrollbar-width", self.standard_width()),
            CssLine::new("scrollbar-color", self.value()),
        ]
    }

    fn copy_text(&self) -> String {
        let width = fmt_num(self.width);
        let radius = fmt_num(self.thumb_radius);
        let thumb = canonical_hex(&self.thumb_color);
        let track = canonical_hex(&self.track_color);
        let hover = canonical_hex(&self.thumb_hover_color);

        format!(
            "/* Standard (Firefox / Chrome 121+) */\n\
             scrollbar-width: {standard};\n\
             scrollbar-color: {thumb} {track};\n\
             \n\
             /* WebKit (Chrome, Safari, Edge) */\n\
             &::-webkit-scrollbar {{\n  width: {width}px;\n}}\n\
             &::-webkit-scrollbar-track {{\n  background: {track};\n}}\n\
             &::-webkit-scrollbar-thumb {{\n  background: {thumb};\n  border-radius: {radius}px;\n}}\n\
             &::-webkit-scrollbar-thumb:hover {{\n  background: {hover};\n}}",
            standard = self.standard_width(),
        )
    }

    fn raw_css(&self) -> Option<String> {
        Some(self.copy_text())
    }
}

impl ImportCss for ScrollbarState {
    /// `background` resolves to the last declaration in the snippet, which in
    /// generated copy text is the hover rule.
    fn from_css(props: &PropertyMap) -> Option<ScrollbarPatch> {
        let mut patch = ScrollbarPatch::default();

        if let Some(colors) = props.get("scrollbar-color") {
            if let [thumb, track] = split_spaces(colors).as_slice() {
                patch.thumb_color = parse_color(thumb).map(|c| c.hex);
                patch.track_color = parse_color(track).map(|c| c.hex);
            } else {
                tracing::debug!(colors, "scrollbar-color needs a thumb and a track");
            }
        }

        patch.width = props.get("width").and_then(parse_px);
        patch.thumb_radius = props.get("border-radius").and_then(parse_px);
        patch.thumb_hover_color = props
            .get("background")
            .and_then(parse_color)
            .map(|c| c.hex);

        (!patch.is_empty()).then_some(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_declarations() {
        let s = ScrollbarState::default();
        assert_eq!(
            crate::css::lines_to_text(&s.css_lines()),
            "scrollbar-width: auto;\nscrollbar-color: #a1a1aa #f4f4f5;"
        );
        let thin = ScrollbarState {
            width: 6.0,
            ..Default::default()
        };
        assert_eq!(thin.css_lines()[0].value, "thin");
    }

    #[test]
    fn copy_text_nests_webkit_rules() {
        let text = ScrollbarState::default().copy_text();
        assert!(text.starts_with("/* Standard (Firefox / Chrome 121+) */\nscrollbar-width: auto;"));
        assert!(text.contains("&::-webkit-scrollbar {\n  width: 8px;\n}"));
        assert!(text.contains("&::-webkit-scrollbar-thumb {\n  background: #a1a1aa;\n  border-radius: 9999px;\n}"));
        assert!(text.ends_with("&::-webkit-scrollbar-thumb:hover {\n  background: #71717a;\n}"));
        assert_eq!(ScrollbarState::default().raw_css(), Some(text));
    }

    #[test]
    fn imports_copy_text() {
        let source = ScrollbarState {
            width: 12.0,
            thumb_color: "#112233".into(),
            track_color: "#FFF".into(),
            thumb_radius: 4.0,
            thumb_hover_color: "#000".into(),
        };
        let imported = ScrollbarState::default().import(&source.copy_text()).unwrap();
        assert_eq!(imported.width, 12.0);
        assert_eq!(imported.track_color, "#ffffff");
        assert_eq!(imported.thumb_hover_color, "#000000");
        assert_eq!(imported.copy_text(), source.copy_text());
    }

    #[test]
    fn standard_properties_alone() {
        let s = ScrollbarState::default()
            .import("scrollbar-color: rgb(10, 10, 10) #eee;")
            .unwrap();
        assert_eq!(s.thumb_color, "#0a0a0a");
        assert_eq!(s.track_color, "#eeeeee");
        assert_eq!(s.width, 8.0);
    }

    #[test]
    fn nothing_recognized() {
        assert!(ScrollbarState::default().import("color: red;").is_none());
        assert!(ScrollbarState::default().import("scrollbar-color: auto;").is_none());
    }
}
