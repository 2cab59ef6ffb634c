use super::DataSource;
use crate::{Error, Result};
use edgelaunch_types::Entry;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// On-disk format of `entries.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesFile {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub entries: Vec<Entry>,
}

fn default_version() -> u32 {
    1
}

/// Entry store backed by a JSON file.
///
/// The file is read on `open` and the parsed content dropped on `close`.
pub struct JsonEntryStore {
    path: PathBuf,
    loaded: Option<EntriesFile>,
}

impl JsonEntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.loaded.is_some()
    }

    /// Write `entries` as the new root of the store.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        let file = EntriesFile {
            version: default_version(),
            entries: entries.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl DataSource for JsonEntryStore {
    fn open(&mut self) -> Result<()> {
        let file = if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            serde_json::from_str(&content)?
        } else {
            debug!("Entries file not found at {}", self.path.display());
            EntriesFile::default()
        };
        self.loaded = Some(file);
        Ok(())
    }

    fn close(&mut self) {
        self.loaded = None;
    }

    fn load_root_content(&self) -> Result<Vec<Entry>> {
        self.loaded
            .as_ref()
            .map(|file| file.entries.clone())
            .ok_or_else(|| Error::EntryLoad("entry store is not open".to_string()))
    }
}
