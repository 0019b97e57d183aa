//! Line-oriented extraction of `property: value` pairs from pasted CSS.
//!
//! Users paste whatever they have on the clipboard: a bare declaration, a
//! full rule, a `:root { --var: … }` block, or a mix of CSS and noise. The
//! tokenizer does not try to understand which of these it was given. It walks
//! the text one line at a time and keeps every line that looks like a
//! declaration.
//!
//! ```rust
//! use okcss::parse_css_props;
//!
//! let props = parse_css_props(".card {\n  box-shadow: 0 4px 12px red;\n}");
//! assert_eq!(props.get("box-shadow"), Some("0 4px 12px red"));
//! ```
//!
//! Custom properties resolve into the same key space as standard ones
//! (`--foo-bar` → `foo-bar`), and later declarations overwrite earlier ones.

use std::collections::HashMap;

use super::split::split_top_level;

/// Flat map from lowercase property name to its raw value.
///
/// Reducers look up specific keys; iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: HashMap<String, String>,
}

impl PropertyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a declaration, replacing any previous value for the property.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(property.into(), value.into());
    }

    /// Returns the raw value for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries.get(property).map(String::as_str)
    }

    /// Returns the value of the first property in `properties` that is present.
    pub fn first_of(&self, properties: &[&str]) -> Option<&str> {
        properties.iter().find_map(|p| self.get(p))
    }

    /// Returns `true` if `property` is present.
    pub fn contains(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(property, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Parses a CSS snippet into a flat [`PropertyMap`].
///
/// Never fails. Lines that are not declarations (selectors, braces, comments,
/// at-rules, free text without a colon) are skipped. When a line opens a
/// block, only the text after its last `{` is considered, so a one-line rule
/// such as `.x { color: red; }` still yields `color`. A line ending in `,`
/// continues on the next line, which keeps multi-line layer lists together.
/// Each declaration is split into property and value at its first colon.
pub fn parse_css_props(css: &str) -> PropertyMap {
    let mut props = PropertyMap::new();

    for line in logical_lines(css) {
        let Some(body) = declaration_body(&line) else {
            continue;
        };

        for declaration in split_top_level(body, ';') {
            let Some(colon) = declaration.find(':') else {
                continue;
            };

            let property = declaration[..colon].trim().to_lowercase();
            let property = property.strip_prefix("--").unwrap_or(&property);
            let value = declaration[colon + 1..].trim();

            if !property.is_empty() && !value.is_empty() {
                props.insert(property, value);
            }
        }
    }

    tracing::trace!(count = props.len(), "tokenized css snippet");
    props
}

/// Trimmed lines, with every line that ends in `,` joined to the next one.
fn logical_lines(css: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut continues = false;

    for line in css.lines().map(str::trim) {
        match lines.last_mut() {
            Some(last) if continues => {
                last.push(' ');
                last.push_str(line);
            }
            _ => lines.push(line.to_string()),
        }
        continues = line.ends_with(',') && !is_comment(line);
    }

    lines
}

fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with("/*")
}

/// Returns the part of a trimmed line that may hold declarations.
fn declaration_body(line: &str) -> Option<&str> {
    if line.is_empty() || is_comment(line) || line.starts_with('@') {
        return None;
    }

    let body = match line.rfind('{') {
        Some(open) => &line[open + 1..],
        None => line,
    };
    let body = body.trim();
    let body = body.strip_suffix('}').unwrap_or(body).trim();

    (!body.is_empty()).then_some(body)
}
