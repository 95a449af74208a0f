//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi Grid.
//! The Zi Grid project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Condition Stores
//!
//! Key-value persistence for the condition collection. State is a JSON array
//! of conditions written under a single storage key. Stores report failures
//! honestly; it is [`crate::state::ZiFilterState`] that decides to swallow
//! them.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::condition::ZiFilterCondition;
use crate::errors::{Result, ZiError};

/// Storage key used when the caller does not pick one.
pub const DEFAULT_STORAGE_KEY: &str = "zigrid.filters";

/// Save/restore capability for the condition collection.
pub trait ZiConditionStore {
    /// Key the conditions are stored under.
    fn key(&self) -> &str;

    /// Reads the stored conditions; `Ok(None)` when nothing was saved yet.
    fn load(&self) -> Result<Option<Vec<ZiFilterCondition>>>;

    /// Replaces the stored conditions.
    fn save(&self, conditions: &[ZiFilterCondition]) -> Result<()>;
}

/// In-process key-value store holding serialized JSON strings.
#[derive(Debug, Default)]
pub struct ZiMemoryStore {
    key: String,
    entries: RwLock<HashMap<String, String>>,
}

impl ZiMemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Raw serialized state for this store's key.
    pub fn raw(&self) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(&self.key).cloned())
    }

    /// Overwrites the raw serialized state, bypassing serialization.
    pub fn set_raw(&self, raw: impl Into<String>) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ZiError::storage(&self.key, "store lock poisoned"))?;
        entries.insert(self.key.clone(), raw.into());
        Ok(())
    }
}

impl ZiConditionStore for ZiMemoryStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Result<Option<Vec<ZiFilterCondition>>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ZiError::storage(&self.key, "store lock poisoned"))?;
        match entries.get(&self.key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, conditions: &[ZiFilterCondition]) -> Result<()> {
        let raw = serde_json::to_string(conditions)?;
        self.set_raw(raw)
    }
}

/// Directory-backed store writing one `<key>.json` file per key.
#[derive(Clone, Debug)]
pub struct ZiFileStore {
    dir: PathBuf,
    key: String,
}

impl ZiFileStore {
    /// Store rooted at `dir`.
    ///
    /// The key becomes a file name, so it must be a single non-empty path
    /// component.
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let traverses = key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\'])
            || key.contains('\0');
        if traverses {
            return Err(ZiError::storage(key, "storage key must be a plain file name"));
        }
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            key,
        })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }
}

impl ZiConditionStore for ZiFileStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Result<Option<Vec<ZiFilterCondition>>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let reader = BufReader::new(File::open(path)?);
        Ok(Some(serde_json::from_reader(reader)?))
    }

    fn save(&self, conditions: &[ZiFilterCondition]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let mut writer = BufWriter::new(File::create(self.path())?);
        serde_json::to_writer(&mut writer, conditions)?;
        writer.flush()?;
        Ok(())
    }
}
