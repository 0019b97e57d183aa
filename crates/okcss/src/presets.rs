//! Named presets saved to a local directory.
//!
//! Each tool keeps its presets in `<dir>/<slug>.json`, newest first, capped
//! at [`MAX_PRESETS`]. A missing or unreadable file is treated as an empty
//! list so one corrupt file never blocks the others. The next save moves a
//! corrupt file aside to `<slug>.json.bak` before writing a fresh one.
//!
//! ```rust
//! use okcss::effects::EffectKind;
//! use okcss::presets::PresetStore;
//! use okcss::registry::AnyState;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = PresetStore::new(dir.path());
//! let saved = store.save("", &AnyState::default_for(EffectKind::Shadow)).unwrap();
//! assert_eq!(saved.name, "Preset 1");
//! assert_eq!(store.list(EffectKind::Shadow).unwrap().len(), 1);
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::effects::EffectKind;
use crate::error::StateError;
use crate::registry::AnyState;

/// Presets kept per tool; saving beyond this drops the oldest.
pub const MAX_PRESETS: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode presets: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    State(#[from] StateError),
}

impl PresetError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// One saved state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    /// The bare effect state.
    pub state: serde_json::Value,
    /// Unix time in milliseconds.
    pub created_at: u64,
}

impl Preset {
    /// Decodes the saved state as a state of `kind`.
    pub fn load(&self, kind: EffectKind) -> Result<AnyState, StateError> {
        AnyState::from_value(kind, self.state.clone())
    }
}

/// File-backed preset lists, one file per tool.
#[derive(Debug, Clone)]
pub struct PresetStore {
    dir: PathBuf,
}

impl PresetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, kind: EffectKind) -> PathBuf {
        self.dir.join(format!("{}.json", kind.slug()))
    }

    /// Presets of `kind`, newest first.
    pub fn list(&self, kind: EffectKind) -> Result<Vec<Preset>, PresetError> {
        let path = self.path(kind);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PresetError::io(&path, e)),
        };
        match serde_json::from_str(&text) {
            Ok(presets) => Ok(presets),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt preset file");
                Ok(Vec::new())
            }
        }
    }

    fn write(&self, kind: EffectKind, presets: &[Preset]) -> Result<(), PresetError> {
        fs::create_dir_all(&self.dir).map_err(|e| PresetError::io(&self.dir, e))?;
        let path = self.path(kind);
        backup_if_corrupt(&path)?;
        let json = serde_json::to_string_pretty(presets)?;
        fs::write(&path, json).map_err(|e| PresetError::io(&path, e))
    }

    /// Saves `state` under `name`, stamped with the current time.
    pub fn save(&self, name: &str, state: &AnyState) -> Result<Preset, PresetError> {
        self.save_at(name, state, now_millis())
    }

    /// Saves `state` with an explicit creation time. A blank name becomes
    /// `Preset N`, N being one more than the current count.
    pub fn save_at(
        &self,
        name: &str,
        state: &AnyState,
        created_at: u64,
    ) -> Result<Preset, PresetError> {
        let kind = state.kind();
        let mut presets = self.list(kind)?;

        let name = match name.trim() {
            "" => format!("Preset {}", presets.len() + 1),
            trimmed => trimmed.to_string(),
        };
        let preset = Preset {
            id: unique_id(created_at, &presets),
            name,
            state: state.state_value()?,
            created_at,
        };

        presets.insert(0, preset.clone());
        presets.truncate(MAX_PRESETS);
        self.write(kind, &presets)?;
        tracing::debug!(tool = kind.slug(), id = %preset.id, "saved preset");
        Ok(preset)
    }

    /// Removes the preset with `id`. Returns whether one was removed.
    pub fn delete(&self, kind: EffectKind, id: &str) -> Result<bool, PresetError> {
        let mut presets = self.list(kind)?;
        let before = presets.len();
        presets.retain(|p| p.id != id);
        if presets.len() == before {
            return Ok(false);
        }
        self.write(kind, &presets)?;
        Ok(true)
    }

    /// Looks a preset up by id, then by name (case-insensitive).
    pub fn find(&self, kind: EffectKind, key: &str) -> Result<Option<Preset>, PresetError> {
        let presets = self.list(kind)?;
        let found = presets
            .iter()
            .find(|p| p.id == key)
            .or_else(|| presets.iter().find(|p| p.name.eq_ignore_ascii_case(key)))
            .cloned();
        Ok(found)
    }
}

/// Renames an unparseable preset file to `<name>.bak`, replacing any older
/// backup.
fn backup_if_corrupt(path: &Path) -> Result<(), PresetError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(PresetError::io(path, e)),
    };
    if serde_json::from_str::<Vec<Preset>>(&text).is_ok() {
        return Ok(());
    }
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    let backup = PathBuf::from(backup);
    fs::rename(path, &backup).map_err(|e| PresetError::io(&backup, e))?;
    tracing::warn!(path = %path.display(), backup = %backup.display(), "moved corrupt preset file aside");
    Ok(())
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// `p<created_at>`, suffixed when that id is already taken.
fn unique_id(created_at: u64, existing: &[Preset]) -> String {
    let base = format!("p{}", created_at);
    let taken = |id: &str| existing.iter().any(|p| p.id == id);
    if !taken(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let id = format!("{}-{}", base, n);
        if !taken(&id) {
            return id;
        }
        n += 1;
    }
}

/// Human-readable age: `just now`, `5m ago`, `2h ago`, `3d ago`.
pub fn format_preset_age(created_at: u64, now: u64) -> String {
    let minutes = now.saturating_sub(created_at) / 60_000;
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}
