//! Browser support notes for properties with caveats.
//!
//! Only properties with partial support or prefix requirements are listed.
//! Fully supported properties such as `border-radius` or `transform` have no
//! entry.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatLevel {
    Warn,
    Info,
    Good,
}

/// One support note: a short badge label and a longer explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatNote {
    pub label: &'static str,
    pub detail: &'static str,
    pub level: CompatLevel,
    pub url: &'static str,
}

const fn note(
    label: &'static str,
    detail: &'static str,
    level: CompatLevel,
    url: &'static str,
) -> CompatNote {
    CompatNote {
        label,
        detail,
        level,
        url,
    }
}

static COMPAT: Lazy<HashMap<&'static str, CompatNote>> = Lazy::new(|| {
    HashMap::from([
        (
            "backdrop-filter",
            note(
                "Needs -webkit- prefix",
                "backdrop-filter requires -webkit-backdrop-filter on Safari 15 and older. Both are emitted.",
                CompatLevel::Info,
                "https://caniuse.com/css-backdrop-filter",
            ),
        ),
        (
            "-webkit-backdrop-filter",
            note(
                "Safari prefix",
                "Emitted alongside backdrop-filter for Safari.",
                CompatLevel::Info,
                "https://caniuse.com/css-backdrop-filter",
            ),
        ),
        (
            "clip-path",
            note(
                "Partial support",
                "clip-path shapes work in modern browsers. SVG paths reach further back than polygon().",
                CompatLevel::Info,
                "https://caniuse.com/css-clip-path",
            ),
        ),
        (
            "scrollbar-color",
            note(
                "Firefox only (standard)",
                "scrollbar-color is the W3C standard. Chrome and Safari style ::-webkit-scrollbar pseudo-elements instead.",
                CompatLevel::Warn,
                "https://caniuse.com/mdn-css_properties_scrollbar-color",
            ),
        ),
        (
            "scrollbar-width",
            note(
                "Firefox only (standard)",
                "scrollbar-width is the W3C standard but only Firefox supports it. Chrome and Safari use ::-webkit-scrollbar.",
                CompatLevel::Warn,
                "https://caniuse.com/mdn-css_properties_scrollbar-width",
            ),
        ),
        (
            "outline-offset",
            note(
                "Full support",
                "outline-offset works in all modern browsers.",
                CompatLevel::Good,
                "https://caniuse.com/mdn-css_properties_outline-offset",
            ),
        ),
        (
            "transition-timing-function",
            note(
                "Full support",
                "transition-timing-function, cubic-bezier() included, works in all modern browsers.",
                CompatLevel::Good,
                "https://caniuse.com/css-transitions",
            ),
        ),
        (
            "text-stroke",
            note(
                "Needs -webkit- prefix",
                "-webkit-text-stroke is widely supported; the unprefixed property is not yet universal.",
                CompatLevel::Warn,
                "https://caniuse.com/mdn-css_properties_-webkit-text-stroke",
            ),
        ),
        (
            "background-clip",
            note(
                "Needs -webkit- prefix for text clipping",
                "background-clip: text needs -webkit-background-clip: text on Safari and Chrome. Both are emitted.",
                CompatLevel::Info,
                "https://caniuse.com/mdn-css_properties_background-clip_text",
            ),
        ),
        (
            "-webkit-background-clip",
            note(
                "Chrome/Safari prefix",
                "Emitted alongside background-clip for text gradients.",
                CompatLevel::Info,
                "https://caniuse.com/mdn-css_properties_background-clip_text",
            ),
        ),
    ])
});

/// The note for one property, if it has any caveat.
pub fn compat_note(property: &str) -> Option<&'static CompatNote> {
    COMPAT.get(property.to_ascii_lowercase().as_str())
}

/// Notes for `properties`, in order, without repeating a label.
pub fn compat_notes<'a>(properties: impl IntoIterator<Item = &'a str>) -> Vec<&'static CompatNote> {
    let mut seen = HashSet::new();
    properties
        .into_iter()
        .filter_map(compat_note)
        .filter(|note| seen.insert(note.label))
        .collect()
}
