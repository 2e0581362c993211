//=========================================================================
// Persistence
//=========================================================================
//
// Save/load of `GameState` through a key-value store, plus the one-shot
// upgrade of the legacy save schema.
//
// Architecture:
//   Persistence<S: KeyValueStore>
//     ├─ load()                      text → validate → decode → clamp
//     ├─ save()                      GameState → json → store
//     └─ migrate_legacy_if_present() legacy text → upgrade → save → retire key
//
// Every failure is recovered locally. Loading always yields a usable
// state; a failed migration leaves the legacy key in place for a retry.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info, warn};
use serde_json::Value;

//=== Module Declarations =================================================

mod error;
mod legacy;
mod lenient;
mod model;
mod storage;
mod validate;

//=== Public API ==========================================================

pub use error::{FieldError, MigrationError, PersistenceError, StorageError};
pub use legacy::{is_valid_legacy_shape, upgrade_legacy_text};
pub use model::{GameState, PolytanParts, Progress, MAX_GATE_LEVEL};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use validate::validate_game_state;

pub(crate) use lenient::saturating_i32;

//=== Internal Dependencies ===============================================

use crate::core::site::NodeRegistry;

//=== Keys ================================================================

/// Storage key of the current save schema.
pub const SAVE_KEY: &str = "lainTSX-save-v3";

/// Storage key of the retired save schema.
pub const LEGACY_SAVE_KEY: &str = "lainSaveState";

//=== Outcomes ============================================================

/// Result of [`Persistence::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub state: GameState,
    pub found_valid_save: bool,
}

impl LoadOutcome {
    fn fallback() -> Self {
        Self {
            state: GameState::default(),
            found_valid_save: false,
        }
    }
}

/// What [`Persistence::migrate_legacy_if_present`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// No legacy save was stored.
    NotPresent,
    /// The legacy save was converted, written and retired.
    Migrated,
    /// Migration failed; the legacy save is still stored.
    Abandoned,
}

//=== Persistence =========================================================

/// Save-data access bound to one store.
pub struct Persistence<S: KeyValueStore> {
    store: S,
    save_key: String,
    legacy_key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Uses the standard save and legacy keys.
    pub fn new(store: S) -> Self {
        Self::with_keys(store, SAVE_KEY, LEGACY_SAVE_KEY)
    }

    /// Uses custom keys.
    pub fn with_keys(store: S, save_key: impl Into<String>, legacy_key: impl Into<String>) -> Self {
        Self {
            store,
            save_key: save_key.into(),
            legacy_key: legacy_key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn save_key(&self) -> &str {
        &self.save_key
    }

    pub fn legacy_key(&self) -> &str {
        &self.legacy_key
    }

    /// Key the retired legacy text is copied to.
    pub fn backup_key(&self) -> String {
        format!("_{}", self.legacy_key)
    }

    //--- Load -------------------------------------------------------------

    /// Reads the current save, degrading to the default state on any failure.
    pub fn load(&self) -> LoadOutcome {
        let Some(text) = self.store.get(&self.save_key) else {
            debug!(target: "persistence", "No save stored under {:?}", self.save_key);
            return LoadOutcome::fallback();
        };

        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            debug!(target: "persistence", "Save under {:?} is empty", self.save_key);
            return LoadOutcome::fallback();
        }

        let value: Value = match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(e) => {
                warn!(target: "persistence", "Failed to parse save: {}", e);
                return LoadOutcome::fallback();
            }
        };

        let errors = validate_game_state(&value);
        if !errors.is_empty() {
            let listed: Vec<String> = errors.iter().map(ToString::to_string).collect();
            error!(target: "persistence", "Corrupted save file: {}", listed.join(", "));
            return LoadOutcome::fallback();
        }

        let mut state: GameState = match serde_json::from_value(value) {
            Ok(state) => state,
            Err(e) => {
                error!(target: "persistence", "Corrupted save file: {}", e);
                return LoadOutcome::fallback();
            }
        };

        state.clamp_in_place();

        LoadOutcome {
            state,
            found_valid_save: true,
        }
    }

    //--- Save -------------------------------------------------------------

    /// Writes the state under the current-schema key without validation.
    pub fn save(&mut self, state: &GameState) -> Result<(), PersistenceError> {
        let text = serde_json::to_string(state)?;
        self.store.set(&self.save_key, &text)?;
        debug!(target: "persistence", "Saved state under {:?}", self.save_key);
        Ok(())
    }

    //--- Legacy Migration -------------------------------------------------

    /// Upgrades and retires a legacy save if one is stored.
    pub fn migrate_legacy_if_present(&mut self, registry: &dyn NodeRegistry) -> MigrationOutcome {
        let Some(legacy_text) = self.store.get(&self.legacy_key) else {
            return MigrationOutcome::NotPresent;
        };

        let upgraded = match upgrade_legacy_text(&legacy_text, registry) {
            Ok(state) => state,
            Err(e) => {
                warn!(target: "persistence", "Legacy save migration abandoned: {}", e);
                return MigrationOutcome::Abandoned;
            }
        };

        if let Err(e) = self.save(&upgraded) {
            error!(target: "persistence", "Failed to write upgraded legacy save: {}", e);
            return MigrationOutcome::Abandoned;
        }

        // Past this point the legacy key is always retired, backup or not.
        let backup_key = self.backup_key();
        if let Err(e) = self.store.set(&backup_key, &legacy_text) {
            error!(target: "persistence", "Failed to back up legacy save: {}", e);
        }
        if let Err(e) = self.store.remove(&self.legacy_key) {
            error!(target: "persistence", "Failed to remove legacy save: {}", e);
        }

        info!(target: "persistence", "Upgraded legacy save to {:?}", self.save_key);
        MigrationOutcome::Migrated
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
