//! Identifiers for list items (shadow layers, color stops, transition layers).
//!
//! Ids only let a front end tell list items apart between renders. They are
//! regenerated on import and never used as persistent keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque list-item identifier such as `layer-3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix after the last `-`, if any.
    fn counter(&self) -> Option<u64> {
        self.0.rsplit('-').next()?.parse().ok()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mints `prefix-N` ids from a counter owned by one list.
///
/// ```rust
/// use okcss::ids::{IdGen, ItemId};
///
/// let mut ids = IdGen::new("stop");
/// assert_eq!(ids.next_id(), ItemId::new("stop-1"));
/// assert_eq!(ids.next_id(), ItemId::new("stop-2"));
/// ```
#[derive(Debug, Clone)]
pub struct IdGen {
    prefix: String,
    last: u64,
}

impl IdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last: 0,
        }
    }

    /// A generator that continues after the highest counter in `existing`,
    /// so new items never collide with the ones already in the list.
    pub fn after<'a>(prefix: impl Into<String>, existing: impl IntoIterator<Item = &'a ItemId>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(ItemId::counter)
            .max()
            .unwrap_or(0);
        Self {
            prefix: prefix.into(),
            last,
        }
    }

    pub fn next_id(&mut self) -> ItemId {
        self.last += 1;
        ItemId(format!("{}-{}", self.prefix, self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_per_generator() {
        let mut a = IdGen::new("layer");
        let mut b = IdGen::new("layer");
        assert_eq!(a.next_id(), b.next_id());
    }

    #[test]
    fn after_resumes_past_existing_ids() {
        let existing = vec![ItemId::new("stop-2"), ItemId::new("stop-7"), ItemId::new("custom")];
        let mut ids = IdGen::after("stop", &existing);
        assert_eq!(ids.next_id().as_str(), "stop-8");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ItemId::new("layer-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"layer-1\"");
    }
}
