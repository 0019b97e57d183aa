//! Error types for state loading.
//!
//! The CSS path never errors; reducers return `Option`. Errors only arise
//! when reading a serialized state or asking a tool for something it cannot
//! do.

use crate::effects::{EffectKind, UnknownTool};

/// Errors from decoding or handling a type-erased effect state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("invalid JSON state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML state: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    UnknownTool(#[from] UnknownTool),

    /// The tool has no CSS reducer.
    #[error("{0} does not support importing CSS")]
    NotImportable(EffectKind),
}
