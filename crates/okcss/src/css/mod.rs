//! Shared CSS text handling: the snippet tokenizer and the small value
//! parsers every reducer builds on.

mod color;
mod functions;
mod split;
mod tokenizer;
mod units;

use serde::{Deserialize, Serialize};

pub use color::{canonical_hex, looks_like_color, parse_color, rgba, rgba_compact, ParsedColor};
pub use functions::{find_call, function_calls, FunctionCall};
pub use split::{split_spaces, split_top_level};
pub use tokenizer::{parse_css_props, PropertyMap};
pub use units::{fmt_num, parse_deg, parse_ms, parse_number, parse_pct, parse_px, round_to};

/// One `property: value` declaration emitted by a builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssLine {
    pub property: String,
    pub value: String,
}

impl CssLine {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Joins lines as `property: value;`, one per line.
pub fn lines_to_text(lines: &[CssLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}: {};", l.property, l.value))
        .collect::<Vec<_>>()
        .join("\n")
}
