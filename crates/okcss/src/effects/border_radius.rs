//! `border-radius`, uniform or per corner.

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind, ImportCss};
use crate::css::{fmt_num, parse_px, split_spaces, CssLine, PropertyMap};
use crate::state::effect_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusMode {
    #[default]
    Uniform,
    Individual,
}

effect_state! {
    /// Radii in px. In uniform mode only `uniform` is rendered.
    BorderRadiusState / BorderRadiusPatch {
        mode: RadiusMode = RadiusMode::Uniform,
        uniform: f64 = 16.0,
        top_left: f64 = 16.0,
        top_right: f64 = 16.0,
        bottom_right: f64 = 16.0,
        bottom_left: f64 = 16.0,
    }
}

fn px(n: f64) -> String {
    format!("{}px", fmt_num(n))
}

impl Effect for BorderRadiusState {
    const KIND: EffectKind = EffectKind::BorderRadius;

    /// Shortest CSS shorthand for the four corners.
    fn value(&self) -> String {
        if self.mode == RadiusMode::Uniform {
            return px(self.uniform);
        }
        let (tl, tr, br, bl) = (self.top_left, self.top_right, self.bottom_right, self.bottom_left);
        if tl == tr && tr == br && br == bl {
            px(tl)
        } else if tl == br && tr == bl {
            format!("{} {}", px(tl), px(tr))
        } else if tr == bl {
            format!("{} {} {}", px(tl), px(tr), px(br))
        } else {
            format!("{} {} {} {}", px(tl), px(tr), px(br), px(bl))
        }
    }

    fn css_lines(&self) -> Vec<CssLine> {
        vec![CssLine::new("border-radius", self.value())]
    }

    fn tailwind(&self) -> Option<String> {
        let value = self.value();
        let class = match value.as_str() {
            "0px" => "rounded-none".to_string(),
            "2px" => "rounded-sm".to_string(),
            "4px" => "rounded".to_string(),
            "6px" => "rounded-md".to_string(),
            "8px" => "rounded-lg".to_string(),
            "12px" => "rounded-xl".to_string(),
            "16px" => "rounded-2xl".to_string(),
            "24px" => "rounded-3xl".to_string(),
            "9999px" => "rounded-full".to_string(),
            _ => format!("rounded-[{}]", value.replace(' ', "_")),
        };
        Some(class)
    }
}

impl ImportCss for BorderRadiusState {
    /// Expands the 1–4 value shorthand the way CSS does. Elliptical radii
    /// (`a / b`) only use their horizontal half.
    fn from_css(props: &PropertyMap) -> Option<BorderRadiusPatch> {
        let raw = props.get("border-radius")?;
        let horizontal = raw.split('/').next().unwrap_or(raw);
        let radii: Vec<f64> = split_spaces(horizontal)
            .into_iter()
            .filter_map(parse_px)
            .collect();

        let (tl, tr, br, bl) = match radii.as_slice() {
            [] => return None,
            [all] => {
                return Some(BorderRadiusPatch {
                    mode: Some(RadiusMode::Uniform),
                    uniform: Some(*all),
                    top_left: Some(*all),
                    top_right: Some(*all),
                    bottom_right: Some(*all),
                    bottom_left: Some(*all),
                })
            }
            [a, b] => (*a, *b, *a, *b),
            [a, b, c] => (*a, *b, *c, *b),
            [a, b, c, d, ..] => (*a, *b, *c, *d),
        };

        Some(BorderRadiusPatch {
            mode: Some(RadiusMode::Individual),
            uniform: Some(tl),
            top_left: Some(tl),
            top_right: Some(tr),
            bottom_right: Some(br),
            bottom_left: Some(bl),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn individual(tl: f64, tr: f64, br: f64, bl: f64) -> BorderRadiusState {
        BorderRadiusState {
            mode: RadiusMode::Individual,
            top_left: tl,
            top_right: tr,
            bottom_right: br,
            bottom_left: bl,
            ..Default::default()
        }
    }

    #[test]
    fn compacts_to_shortest_form() {
        assert_eq!(individual(8.0, 8.0, 8.0, 8.0).value(), "8px");
        assert_eq!(individual(8.0, 4.0, 8.0, 4.0).value(), "8px 4px");
        assert_eq!(individual(8.0, 4.0, 2.0, 4.0).value(), "8px 4px 2px");
        assert_eq!(individual(1.0, 2.0, 3.0, 4.0).value(), "1px 2px 3px 4px");
    }

    #[test]
    fn uniform_mode_ignores_corners() {
        let s = BorderRadiusState {
            uniform: 9999.0,
            top_left: 1.0,
            ..Default::default()
        };
        assert_eq!(s.value(), "9999px");
        assert_eq!(s.tailwind().unwrap(), "rounded-full");
    }

    #[test]
    fn tailwind_arbitrary_values() {
        assert_eq!(
            individual(1.0, 2.0, 3.0, 4.0).tailwind().unwrap(),
            "rounded-[1px_2px_3px_4px]"
        );
    }

    #[test]
    fn imports_each_arity() {
        let read = |v: &str| {
            BorderRadiusState::default()
                .import(&format!("border-radius: {};", v))
                .unwrap()
        };
        let one = read("10px");
        assert_eq!(one.mode, RadiusMode::Uniform);
        assert_eq!(one.uniform, 10.0);

        let two = read("10px 20px");
        assert_eq!((two.top_left, two.top_right, two.bottom_right, two.bottom_left), (10.0, 20.0, 10.0, 20.0));

        let three = read("1px 2px 3px");
        assert_eq!(three.bottom_left, 2.0);

        let four = read("1px 2px 3px 4px");
        assert_eq!(four.value(), "1px 2px 3px 4px");
    }

    #[test]
    fn elliptical_radii_use_horizontal_half() {
        let s = BorderRadiusState::default()
            .import("border-radius: 10px 20px / 5px;")
            .unwrap();
        assert_eq!(s.value(), "10px 20px");
    }

    #[test]
    fn unreadable_values() {
        assert!(BorderRadiusState::default().import("border-radius: 50%;").is_none());
        assert!(BorderRadiusState::default().import("color: red;").is_none());
    }
}
