//! CSS `filter` chains.
//!
//! Functions whose value equals the identity (blur 0, brightness 100%, …)
//! are left out of the output; an all-identity state renders as `none`.

use super::{Effect, EffectKind, ImportCss};
use crate::css::{fmt_num, function_calls, parse_deg, parse_number, parse_px, CssLine, PropertyMap};
use crate::state::effect_state;

effect_state! {
    /// Filter amounts: `blur` in px, `hue_rotate` in degrees, the rest in percent.
    FilterState / FilterPatch {
        blur: f64 = 0.0,
        brightness: f64 = 100.0,
        contrast: f64 = 100.0,
        grayscale: f64 = 0.0,
        hue_rotate: f64 = 0.0,
        invert: f64 = 0.0,
        saturate: f64 = 100.0,
        sepia: f64 = 0.0,
    }
}

/// One filter function: CSS name, unit, value, identity and Tailwind form.
struct Part {
    name: &'static str,
    unit: &'static str,
    value: f64,
    identity: f64,
    /// Tailwind class when the value is set; `None` means `name-[value]`.
    tailwind: Option<&'static str>,
}

fn part(
    name: &'static str,
    unit: &'static str,
    value: f64,
    identity: f64,
    tailwind: Option<&'static str>,
) -> Part {
    Part {
        name,
        unit,
        value,
        identity,
        tailwind,
    }
}

impl FilterState {
    fn parts(&self) -> [Part; 8] {
        [
            part("blur", "px", self.blur, 0.0, None),
            part("brightness", "%", self.brightness, 100.0, None),
            part("contrast", "%", self.contrast, 100.0, None),
            part("grayscale", "%", self.grayscale, 0.0, Some("grayscale")),
            part("hue-rotate", "deg", self.hue_rotate, 0.0, None),
            part("invert", "%", self.invert, 0.0, Some("invert")),
            part("saturate", "%", self.saturate, 100.0, None),
            part("sepia", "%", self.sepia, 0.0, Some("sepia")),
        ]
    }

    fn active_parts(&self) -> impl Iterator<Item = Part> {
        self.parts().into_iter().filter(|p| p.value != p.identity)
    }
}

impl Effect for FilterState {
    const KIND: EffectKind = EffectKind::Filter;

    fn value(&self) -> String {
        let parts: Vec<String> = self
            .active_parts()
            .map(|p| format!("{}({}{})", p.name, fmt_num(p.value), p.unit))
            .collect();
        if parts.is_empty() {
            return "none".to_string();
        }
        parts.join(" ")
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![CssLine::new("filter", self.value())]
    }

    fn tailwind(&self) -> Option<String> {
        let classes: Vec<String> = self
            .active_parts()
            .map(|p| match p.tailwind {
                Some(class) => class.to_string(),
                None => format!("{}-[{}{}]", p.name, fmt_num(p.value), p.unit),
            })
            .collect();
        if classes.is_empty() {
            return Some("filter-none".to_string());
        }
        Some(classes.join(" "))
    }
}

/// Percent amount: `120%`, or a bare ratio such as `1.2`.
fn parse_amount(arg: &str) -> Option<f64> {
    let arg = arg.trim();
    match arg.strip_suffix('%') {
        Some(pct) => parse_number(pct),
        None => parse_number(arg).map(|ratio| ratio * 100.0),
    }
}

impl ImportCss for FilterState {
    /// `none` resets every function to its identity.
    fn from_css(props: &PropertyMap) -> Option<FilterPatch> {
        let raw = props.get("filter")?;
        if raw.eq_ignore_ascii_case("none") {
            return Some(FilterState::default().into());
        }

        let mut patch = FilterPatch::default();
        for call in function_calls(raw) {
            let args = call.args.as_str();
            match call.name.as_str() {
                "blur" => patch.blur = parse_px(args).or(patch.blur),
                "brightness" => patch.brightness = parse_amount(args).or(patch.brightness),
                "contrast" => patch.contrast = parse_amount(args).or(patch.contrast),
                "grayscale" => patch.grayscale = parse_amount(args).or(patch.grayscale),
                "hue-rotate" => patch.hue_rotate = parse_deg(args).or(patch.hue_rotate),
                "invert" => patch.invert = parse_amount(args).or(patch.invert),
                "saturate" => patch.saturate = parse_amount(args).or(patch.saturate),
                "sepia" => patch.sepia = parse_amount(args).or(patch.sepia),
                other => tracing::debug!(function = other, "ignoring filter function"),
            }
        }

        (!patch.is_empty()).then_some(patch)
    }
}
