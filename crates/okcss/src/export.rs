//! Rendering an effect's output in the formats users paste into projects.
//!
//! Every builder produces an [`EffectOutput`]; an [`ExportFormat`] turns it
//! into text. Formats never fail, except Tailwind for effects that have no
//! utility-class rendering.
//!
//! ```rust
//! use okcss::effects::{border_radius::BorderRadiusState, Effect};
//! use okcss::export::ExportFormat;
//!
//! let output = BorderRadiusState::default().output();
//! assert_eq!(
//!     ExportFormat::React.render(&output).unwrap(),
//!     "style={{\n  borderRadius: '16px',\n}}"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::css::CssLine;

/// Every rendering of one effect state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectOutput {
    pub lines: Vec<CssLine>,
    pub copy_text: String,
    /// Stylesheet text with nested rules, when the flat lines are not enough.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailwind: Option<String>,
}

impl EffectOutput {
    /// Formats this output can be rendered in.
    pub fn formats(&self) -> Vec<ExportFormat> {
        ExportFormat::ALL
            .into_iter()
            .filter(|f| *f != ExportFormat::Tailwind || self.tailwind.is_some())
            .collect()
    }

    /// The stylesheet text: raw CSS when present, otherwise the copy text.
    pub fn css(&self) -> &str {
        self.raw_css.as_deref().unwrap_or(&self.copy_text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Tailwind,
    Scss,
    React,
    Variables,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Css,
        ExportFormat::Tailwind,
        ExportFormat::Scss,
        ExportFormat::React,
        ExportFormat::Variables,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Scss => "scss",
            ExportFormat::React => "react",
            ExportFormat::Variables => "variables",
        }
    }

    /// Renders `output`; `None` only for Tailwind on effects without classes.
    pub fn render(self, output: &EffectOutput) -> Option<String> {
        let text = match self {
            ExportFormat::Css => output.css().to_string(),
            ExportFormat::Tailwind => output.tailwind.clone()?,
            ExportFormat::Scss => to_scss(output.css()),
            ExportFormat::React => {
                if output.raw_css.is_some() {
                    to_react(&output.lines)
                } else {
                    to_react(&declarations(&output.copy_text))
                }
            }
            ExportFormat::Variables => match &output.raw_css {
                Some(raw) => to_variables(&declarations(raw)),
                None => to_variables(&output.lines),
            },
        };
        Some(text)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown export format '{0}' (expected css, tailwind, scss, react or variables)")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.slug() == wanted)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Plain `property: value;` lines of a stylesheet text. Comments, selectors
/// and braces are skipped.
fn declarations(css: &str) -> Vec<CssLine> {
    css.lines()
        .map(str::trim)
        .filter(|l| l.contains(':') && !l.starts_with("/*") && !l.contains('{') && !l.contains('}'))
        .filter_map(|l| {
            let (property, value) = l.split_once(':')?;
            let value = value.trim();
            Some(CssLine::new(
                property.trim(),
                value.strip_suffix(';').unwrap_or(value),
            ))
        })
        .collect()
}

/// `box-shadow` → `boxShadow`. Custom properties keep their name.
fn to_camel(property: &str) -> String {
    if property.starts_with("--") {
        return format!("'{}'", property);
    }
    let mut out = String::with_capacity(property.len());
    let mut upper = false;
    for c in property.chars() {
        match c {
            '-' => upper = true,
            c if upper && c.is_ascii_lowercase() => {
                out.push(c.to_ascii_uppercase());
                upper = false;
            }
            c => {
                if upper {
                    out.push('-');
                    upper = false;
                }
                out.push(c);
            }
        }
    }
    out
}

fn to_react(lines: &[CssLine]) -> String {
    let pairs: Vec<String> = lines
        .iter()
        .filter(|l| !l.property.is_empty())
        .map(|l| format!("  {}: '{}',", to_camel(&l.property), l.value))
        .collect();
    format!("style={{{{\n{}\n}}}}", pairs.join("\n"))
}

fn to_variables(lines: &[CssLine]) -> String {
    let vars: Vec<String> = lines
        .iter()
        .filter(|l| !l.property.is_empty())
        .map(|l| {
            let name = l.property.strip_prefix("--").unwrap_or(&l.property);
            format!("  --{}: {};", name, l.value)
        })
        .collect();
    format!(":root {{\n{}\n}}", vars.join("\n"))
}

fn to_scss(css: &str) -> String {
    let indented: Vec<String> = css.lines().map(|l| format!("  {}", l)).collect();
    format!(".element {{\n{}\n}}", indented.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(lines: &[(&str, &str)], raw_css: Option<&str>) -> EffectOutput {
        let lines: Vec<CssLine> = lines.iter().map(|(p, v)| CssLine::new(*p, *v)).collect();
        EffectOutput {
            copy_text: crate::css::lines_to_text(&lines),
            lines,
            raw_css: raw_css.map(str::to_string),
            tailwind: None,
        }
    }

    #[test]
    fn camel_case() {
        assert_eq!(to_camel("box-shadow"), "boxShadow");
        assert_eq!(to_camel("-webkit-backdrop-filter"), "WebkitBackdropFilter");
        assert_eq!(to_camel("color"), "color");
        assert_eq!(to_camel("--primary-100"), "'--primary-100'");
    }

    #[test]
    fn tailwind_is_optional() {
        let out = output(&[("filter", "none")], None);
        assert!(ExportFormat::Tailwind.render(&out).is_none());
        assert!(!out.formats().contains(&ExportFormat::Tailwind));
        assert_eq!(out.formats().len(), 4);
    }

    #[test]
    fn scss_indents_every_line() {
        let out = output(&[("a", "1"), ("b", "2")], None);
        assert_eq!(
            ExportFormat::Scss.render(&out).unwrap(),
            ".element {\n  a: 1;\n  b: 2;\n}"
        );
    }

    #[test]
    fn raw_css_drives_css_and_variables() {
        let raw = "/* note */\nwidth: 4px;\n&::x {\n  color: red;\n}";
        let out = output(&[("width", "4px")], Some(raw));
        assert_eq!(ExportFormat::Css.render(&out).unwrap(), raw);
        assert_eq!(
            ExportFormat::Variables.render(&out).unwrap(),
            ":root {\n  --width: 4px;\n  --color: red;\n}"
        );
        assert_eq!(
            ExportFormat::React.render(&out).unwrap(),
            "style={{\n  width: '4px',\n}}"
        );
    }

    #[test]
    fn formats_parse_from_slugs() {
        for format in ExportFormat::ALL {
            assert_eq!(format.slug().parse::<ExportFormat>(), Ok(format));
        }
        assert!("less".parse::<ExportFormat>().is_err());
    }
}
