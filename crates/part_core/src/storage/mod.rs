//! Persistence adapter boundary.
//!
//! # Responsibility
//! - Store and retrieve one JSON payload per collection key, opaque to
//!   entity semantics.
//! - Absorb every persistence failure: a store operation never surfaces an
//!   adapter error to its caller.
//!
//! # Invariants
//! - A missing or unparseable payload loads as an empty collection, never as
//!   a fatal error.
//! - A failed write is logged and swallowed; in-memory state stays
//!   authoritative and may diverge from disk until the next successful save.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure inside a storage backend or payload codec.
///
/// Never crosses the store's public API; it exists for adapter internals and
/// for the log line written when a failure is absorbed.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Encoding(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage i/o failure: {err}"),
            Self::Encoding(err) => write!(f, "payload encoding failure: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encoding(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encoding(value)
    }
}

/// Raw keyed-payload storage.
///
/// Backends hold one text payload per collection key and know nothing about
/// what the payload means. Clones of one adapter must observe each other's
/// writes, so several stores can share a single logical device.
pub trait StorageAdapter {
    /// Returns the payload stored under `key`, or `None` when nothing is.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    /// Replaces the payload stored under `key`.
    fn write(&self, key: &str, payload: &str) -> StorageResult<()>;
}

/// Loads a collection, treating every failure as an empty collection.
///
/// Corruption is not fatal: a payload that fails to parse is logged and the
/// caller starts from empty, exactly as if nothing had been stored.
pub fn load_collection<T, S>(adapter: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: StorageAdapter,
{
    let payload = match adapter.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=store_load module=storage status=error key={key} error_code=read_failed error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&payload) {
        Ok(records) => records,
        Err(err) => {
            warn!("event=store_load module=storage status=error key={key} error_code=corrupt_payload error={err}");
            Vec::new()
        }
    }
}

/// Mirrors a collection to storage, swallowing failures.
///
/// The no-throw contract is deliberate: the caller's mutation has already
/// been applied in memory and must not be rolled back or surfaced as an
/// error when the device is full or unwritable.
pub fn save_collection<T, S>(adapter: &S, key: &str, records: &[T])
where
    T: Serialize,
    S: StorageAdapter,
{
    let payload = match serde_json::to_string(records) {
        Ok(payload) => payload,
        Err(err) => {
            error!("event=store_save module=storage status=error key={key} error_code=encode_failed error={err}");
            return;
        }
    };

    if let Err(err) = adapter.write(key, &payload) {
        error!("event=store_save module=storage status=error key={key} error_code=write_failed error={err}");
    }
}
