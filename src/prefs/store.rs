//! Preference persistence backends.

use crate::model::StoreError;
use crate::prefs::{LayoutPreferences, PreferencesFile};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Storage seam for layout preferences.
///
/// The engine persists through this trait on every preference mutation and
/// never deletes: [`LayoutEngine::reset_layout`](crate::engine::LayoutEngine::reset_layout)
/// saves the defaults instead of removing the file.
pub trait PreferenceStore {
    /// Load saved preferences. `Ok(None)` means nothing has been saved yet,
    /// which is not an error.
    fn load(&self) -> Result<Option<LayoutPreferences>, StoreError>;

    /// Persist the full preference set.
    fn save(&self, prefs: &LayoutPreferences) -> Result<(), StoreError>;
}

/// TOML file store rooted in the platform config directory.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
}

impl TomlPreferenceStore {
    /// Store at the platform default location
    /// (`<config_dir>/panegrid/layout.toml`).
    ///
    /// # Errors
    ///
    /// [`StoreError::NoConfigDir`] when the platform reports no config
    /// directory.
    pub fn new() -> Result<Self, StoreError> {
        let base = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::at_path(base.join("panegrid").join("layout.toml")))
    }

    /// Store at an explicit path.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn load(&self) -> Result<Option<LayoutPreferences>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no preferences file, using defaults");
                return Ok(None);
            }
            Err(err) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };
        let file: PreferencesFile = toml::from_str(&text).map_err(|err| StoreError::Parse {
            path: self.path.clone(),
            reason: err.to_string(),
        })?;
        Ok(Some(file.resolve()))
    }

    fn save(&self, prefs: &LayoutPreferences) -> Result<(), StoreError> {
        let text = toml::to_string_pretty(&PreferencesFile::from_resolved(prefs)).map_err(
            |err| StoreError::Serialize {
                reason: err.to_string(),
            },
        )?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::Write {
                path: self.path.clone(),
                source: err,
            })?;
        }
        fs::write(&self.path, text).map_err(|err| StoreError::Write {
            path: self.path.clone(),
            source: err,
        })?;
        debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<LayoutPreferences>, StoreError> {
        (**self).load()
    }

    fn save(&self, prefs: &LayoutPreferences) -> Result<(), StoreError> {
        (**self).save(prefs)
    }
}

/// In-memory store for tests and hosts that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    saved: Mutex<Option<LayoutPreferences>>,
}

impl MemoryPreferenceStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with saved preferences.
    #[must_use]
    pub fn with_saved(prefs: LayoutPreferences) -> Self {
        Self {
            saved: Mutex::new(Some(prefs)),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<LayoutPreferences>, StoreError> {
        Ok(self.saved.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, prefs: &LayoutPreferences) -> Result<(), StoreError> {
        *self.saved.lock().unwrap_or_else(|e| e.into_inner()) = Some(prefs.clone());
        Ok(())
    }
}
