//! Glassmorphism: translucent background, backdrop blur and a faint border.

use super::{Effect, EffectKind, ImportCss};
use crate::css::{
    canonical_hex, find_call, fmt_num, looks_like_color, parse_color, parse_px, rgba,
    split_spaces, CssLine, PropertyMap,
};
use crate::state::effect_state;

effect_state! {
    /// Glass panel state. Opacities are `0.0..=1.0`, lengths in px.
    GlassState / GlassPatch {
        bg_color: String = "#ffffff".to_string(),
        bg_opacity: f64 = 0.15,
        blur: f64 = 12.0,
        border_color: String = "#ffffff".to_string(),
        border_opacity: f64 = 0.3,
        border_radius: f64 = 16.0,
    }
}

/// Tailwind `backdrop-blur-*` suffix for a blur radius.
fn blur_class(blur: f64) -> String {
    match blur {
        b if b == 4.0 => "sm".to_string(),
        b if b == 12.0 => "md".to_string(),
        b if b == 16.0 => "lg".to_string(),
        b if b == 24.0 => "xl".to_string(),
        b if b == 40.0 => "2xl".to_string(),
        b => format!("[{}px]", fmt_num(b)),
    }
}

fn tailwind_color(hex: &str) -> String {
    let hex = canonical_hex(hex);
    if hex == "#ffffff" {
        "white".to_string()
    } else {
        format!("[{}]", hex)
    }
}

impl Effect for GlassState {
    const KIND: EffectKind = EffectKind::Glass;

    fn value(&self) -> String {
        rgba(&self.bg_color, self.bg_opacity)
    }

    fn css_lines(&self) -> Vec<CssLine> {
        let blur = format!("blur({}px)", fmt_num(self.blur));
        vec![
            CssLine::new("background", self.value()),
            CssLine::new("backdrop-filter", blur.clone()),
            CssLine::new("-webkit-backdrop-filter", blur),
            CssLine::new(
                "border",
                format!("1px solid {}", rgba(&self.border_color, self.border_opacity)),
            ),
            CssLine::new("border-radius", format!("{}px", fmt_num(self.border_radius))),
        ]
    }

    fn tailwind(&self) -> Option<String> {
        let classes = [
            format!(
                "bg-{}/{}",
                tailwind_color(&self.bg_color),
                (self.bg_opacity * 100.0).round()
            ),
            format!("backdrop-blur-{}", blur_class(self.blur)),
            "border".to_string(),
            format!(
                "border-{}/{}",
                tailwind_color(&self.border_color),
                (self.border_opacity * 100.0).round()
            ),
            format!("rounded-[{}px]", fmt_num(self.border_radius)),
        ];
        Some(classes.join(" "))
    }
}

impl ImportCss for GlassState {
    fn from_css(props: &PropertyMap) -> Option<GlassPatch> {
        let mut patch = GlassPatch::default();

        if let Some(bg) = props
            .first_of(&["background", "background-color"])
            .and_then(parse_color)
        {
            patch.bg_color = Some(bg.hex);
            patch.bg_opacity = Some(bg.opacity);
        }

        patch.blur = props
            .first_of(&["backdrop-filter", "-webkit-backdrop-filter"])
            .and_then(|v| find_call(v, "blur"))
            .and_then(|call| parse_px(&call.args));

        if let Some(border) = props.get("border") {
            let color = split_spaces(border)
                .into_iter()
                .find(|t| looks_like_color(t))
                .and_then(parse_color);
            if let Some(color) = color {
                patch.border_color = Some(color.hex);
                patch.border_opacity = Some(color.opacity);
            }
        }

        patch.border_radius = props
            .get("border-radius")
            .and_then(|v| split_spaces(v).first().copied())
            .and_then(parse_px);

        (!patch.is_empty()).then_some(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::lines_to_text;

    #[test]
    fn default_css() {
        let text = lines_to_text(&GlassState::default().css_lines());
        assert_eq!(
            text,
            "background: rgba(255, 255, 255, 0.15);\n\
             backdrop-filter: blur(12px);\n\
             -webkit-backdrop-filter: blur(12px);\n\
             border: 1px solid rgba(255, 255, 255, 0.3);\n\
             border-radius: 16px;"
        );
    }

    #[test]
    fn tailwind_maps_known_blurs() {
        let mut s = GlassState::default();
        assert_eq!(
            s.tailwind().unwrap(),
            "bg-white/15 backdrop-blur-md border border-white/30 rounded-[16px]"
        );
        s.blur = 7.0;
        s.bg_color = "#000000".into();
        let classes = s.tailwind().unwrap();
        assert!(classes.contains("backdrop-blur-[7px]"));
        assert!(classes.starts_with("bg-[#000000]/15"));
    }

    #[test]
    fn imports_every_part() {
        let css = "background: rgba(0, 0, 0, 0.4);\n\
                   backdrop-filter: blur(8px) saturate(180%);\n\
                   border: 1px solid rgba(255, 255, 255, 0.2);\n\
                   border-radius: 24px;";
        let imported = GlassState::default().import(css).unwrap();
        assert_eq!(imported.bg_color, "#000000");
        assert_eq!(imported.bg_opacity, 0.4);
        assert_eq!(imported.blur, 8.0);
        assert_eq!(imported.border_opacity, 0.2);
        assert_eq!(imported.border_radius, 24.0);
    }

    #[test]
    fn partial_snippet_keeps_the_rest() {
        let imported = GlassState::default()
            .import("-webkit-backdrop-filter: blur(3px);")
            .unwrap();
        assert_eq!(imported.blur, 3.0);
        assert_eq!(imported.bg_opacity, 0.15);
    }

    #[test]
    fn nothing_recognized() {
        assert!(GlassState::default().import("color: red;").is_none());
        assert!(GlassState::default().import("background: url(a.png);").is_none());
    }
}
