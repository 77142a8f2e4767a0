//! File-backed storage: one `<key>.json` per collection under a data dir.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{error, info};

use super::{StorageAdapter, StorageResult};

/// Stores each collection as `<dir>/<key>.json`.
///
/// Clones share the directory path, so every clone sees every write.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Opens (and creates, if needed) the data directory.
    pub fn open(dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        if let Err(err) = std::fs::create_dir_all(&dir) {
            error!(
                "event=storage_open module=storage status=error mode=file dir={} error={err}",
                dir.display()
            );
            return Err(err.into());
        }
        info!(
            "event=storage_open module=storage status=ok mode=file dir={}",
            dir.display()
        );
        Ok(Self { dir })
    }

    /// Directory holding the collection files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageAdapter for JsonFileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> StorageResult<()> {
        std::fs::write(self.path_for(key), payload)?;
        Ok(())
    }
}
