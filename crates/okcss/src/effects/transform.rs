//! 2D `transform`: rotate, scale, translate and skew.

use super::{Effect, EffectKind, ImportCss};
use crate::css::{
    fmt_num, function_calls, parse_deg, parse_number, parse_px, round_to, CssLine, PropertyMap,
};
use crate::state::effect_state;

effect_state! {
    /// Angles in degrees, translations in px, scales as multipliers.
    TransformState / TransformPatch {
        rotate: f64 = 0.0,
        scale_x: f64 = 1.0,
        scale_y: f64 = 1.0,
        translate_x: f64 = 0.0,
        translate_y: f64 = 0.0,
        skew_x: f64 = 0.0,
        skew_y: f64 = 0.0,
    }
}

impl TransformState {
    /// Scales rounded to three decimals, as rendered.
    fn scales(&self) -> (f64, f64) {
        (round_to(self.scale_x, 3), round_to(self.scale_y, 3))
    }
}

impl Effect for TransformState {
    const KIND: EffectKind = EffectKind::Transform;

    /// Functions in a fixed order; identity functions are left out.
    fn value(&self) -> String {
        let mut parts = Vec::new();

        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", fmt_num(self.rotate)));
        }
        let (sx, sy) = self.scales();
        if sx != 1.0 || sy != 1.0 {
            if sx == sy {
                parts.push(format!("scale({})", fmt_num(sx)));
            } else {
                parts.push(format!("scaleX({}) scaleY({})", fmt_num(sx), fmt_num(sy)));
            }
        }
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            parts.push(format!(
                "translate({}px, {}px)",
                fmt_num(self.translate_x),
                fmt_num(self.translate_y)
            ));
        }
        if self.skew_x != 0.0 || self.skew_y != 0.0 {
            parts.push(format!(
                "skew({}deg, {}deg)",
                fmt_num(self.skew_x),
                fmt_num(self.skew_y)
            ));
        }

        if parts.is_empty() {
            return "none".to_string();
        }
        parts.join(" ")
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![CssLine::new("transform", self.value())]
    }

    fn tailwind(&self) -> Option<String> {
        let (sx, sy) = self.scales();
        let candidates = [
            (self.rotate != 0.0, format!("rotate-[{}deg]", fmt_num(self.rotate))),
            (sx != 1.0, format!("scale-x-[{}]", fmt_num(sx))),
            (sy != 1.0, format!("scale-y-[{}]", fmt_num(sy))),
            (self.translate_x != 0.0, format!("translate-x-[{}px]", fmt_num(self.translate_x))),
            (self.translate_y != 0.0, format!("translate-y-[{}px]", fmt_num(self.translate_y))),
            (self.skew_x != 0.0, format!("skew-x-[{}deg]", fmt_num(self.skew_x))),
            (self.skew_y != 0.0, format!("skew-y-[{}deg]", fmt_num(self.skew_y))),
        ];
        let classes: Vec<String> = candidates
            .into_iter()
            .filter_map(|(set, class)| set.then_some(class))
            .collect();
        Some(classes.join(" "))
    }
}

/// Reads `first[, second]`; a missing second argument becomes `fallback(first)`.
fn pair(
    args: &[&str],
    parse: fn(&str) -> Option<f64>,
    fallback: fn(f64) -> f64,
) -> Option<(f64, f64)> {
    let first = parse(args.first()?)?;
    let second = match args.get(1) {
        Some(arg) => parse(arg)?,
        None => fallback(first),
    };
    Some((first, second))
}

impl ImportCss for TransformState {
    /// `none` resets every function to its identity. An unreadable function
    /// leaves its fields out of the patch.
    fn from_css(props: &PropertyMap) -> Option<TransformPatch> {
        let raw = props.get("transform")?;
        if raw.eq_ignore_ascii_case("none") {
            return Some(TransformState::default().into());
        }

        let mut patch = TransformPatch::default();
        for call in function_calls(raw) {
            let args = call.comma_args();
            let single = call.args.as_str();
            match call.name.as_str() {
                "rotate" => patch.rotate = parse_deg(single).or(patch.rotate),
                "scale" => {
                    if let Some((x, y)) = pair(&args, parse_number, |x| x) {
                        patch.scale_x = Some(x);
                        patch.scale_y = Some(y);
                    }
                }
                "scalex" => patch.scale_x = parse_number(single).or(patch.scale_x),
                "scaley" => patch.scale_y = parse_number(single).or(patch.scale_y),
                "translate" => {
                    if let Some((x, y)) = pair(&args, parse_px, |_| 0.0) {
                        patch.translate_x = Some(x);
                        patch.translate_y = Some(y);
                    }
                }
                "translatex" => patch.translate_x = parse_px(single).or(patch.translate_x),
                "translatey" => patch.translate_y = parse_px(single).or(patch.translate_y),
                "skew" => {
                    if let Some((x, y)) = pair(&args, parse_deg, |_| 0.0) {
                        patch.skew_x = Some(x);
                        patch.skew_y = Some(y);
                    }
                }
                "skewx" => patch.skew_x = parse_deg(single).or(patch.skew_x),
                "skewy" => patch.skew_y = parse_deg(single).or(patch.skew_y),
                other => tracing::debug!(function = other, "ignoring transform function"),
            }
        }

        (!patch.is_empty()).then_some(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_none() {
        assert_eq!(TransformState::default().value(), "none");
        assert_eq!(TransformState::default().tailwind().unwrap(), "");
    }

    #[test]
    fn renders_in_fixed_order() {
        let s = TransformState {
            rotate: 45.0,
            scale_x: 1.2,
            scale_y: 1.2,
            translate_x: 10.0,
            skew_y: -5.0,
            ..Default::default()
        };
        assert_eq!(
            s.value(),
            "rotate(45deg) scale(1.2) translate(10px, 0px) skew(0deg, -5deg)"
        );
    }

    #[test]
    fn unequal_scales_split() {
        let s = TransformState {
            scale_x: 1.5,
            scale_y: 0.12345,
            ..Default::default()
        };
        assert_eq!(s.value(), "scaleX(1.5) scaleY(0.123)");
        assert_eq!(s.tailwind().unwrap(), "scale-x-[1.5] scale-y-[0.123]");
    }

    #[test]
    fn imports_shorthand_and_axis_functions() {
        let s = TransformState::default()
            .import("transform: translateX(12px) scaleY(2) rotate(-10deg) skew(4deg);")
            .unwrap();
        assert_eq!(s.translate_x, 12.0);
        assert_eq!(s.translate_y, 0.0);
        assert_eq!(s.scale_y, 2.0);
        assert_eq!(s.scale_x, 1.0);
        assert_eq!(s.rotate, -10.0);
        assert_eq!((s.skew_x, s.skew_y), (4.0, 0.0));
    }

    #[test]
    fn single_scale_applies_to_both_axes() {
        let s = TransformState::default().import("transform: scale(0.5);").unwrap();
        assert_eq!((s.scale_x, s.scale_y), (0.5, 0.5));
    }

    #[test]
    fn unreadable_functions_are_omitted() {
        let start = TransformState {
            rotate: 30.0,
            ..Default::default()
        };
        let s = start
            .import("transform: rotate(1turn) translate(5px, 6px);")
            .unwrap();
        assert_eq!(s.rotate, 30.0);
        assert_eq!((s.translate_x, s.translate_y), (5.0, 6.0));
        assert!(TransformState::default()
            .import("transform: matrix(1, 0, 0, 1, 0, 0);")
            .is_none());
    }

    #[test]
    fn none_resets() {
        let start = TransformState {
            skew_x: 3.0,
            ..Default::default()
        };
        assert_eq!(
            start.import("transform: none;").unwrap(),
            TransformState::default()
        );
    }
}
