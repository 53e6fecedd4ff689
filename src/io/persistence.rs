//! Load and save the document under a fixed store key.
//!
//! Loading never fails: anything that can't be read back as a document is
//! copied to a backup key, the primary key is cleared, and the defaults are
//! used instead.

use serde_json::Value;

use crate::io::store::{KeyValueStore, StorageError};
use crate::model::document::Document;

/// Key the document is stored under
pub const STORAGE_KEY: &str = "todoApp";

/// Key holding the last value that failed to load
pub fn backup_key() -> String {
    format!("{}_corrupt_backup", STORAGE_KEY)
}

/// Why a stored value was rejected
#[derive(Debug, thiserror::Error)]
pub enum CorruptData {
    #[error("not valid JSON: {0}")]
    Syntax(serde_json::Error),
    #[error("expected an object with a `lists` field")]
    Shape,
    #[error("lists have the wrong shape: {0}")]
    Lists(serde_json::Error),
}

/// Parse and validate a stored value
pub fn decode(raw: &str) -> Result<Document, CorruptData> {
    let value: Value = serde_json::from_str(raw).map_err(CorruptData::Syntax)?;
    match &value {
        Value::Object(map) if map.contains_key("lists") => {}
        _ => return Err(CorruptData::Shape),
    }
    let mut doc: Document = serde_json::from_value(value).map_err(CorruptData::Lists)?;
    doc.assign_ids();
    doc.ensure_selected();
    Ok(doc)
}

/// Read the document from the store, quarantining anything unreadable.
pub fn load(store: &mut dyn KeyValueStore) -> Document {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("no stored document, starting fresh");
            return Document::default();
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored document, starting fresh");
            return Document::default();
        }
    };

    match decode(&raw) {
        Ok(doc) => {
            tracing::debug!(lists = doc.lists.len(), selected = %doc.selected_list, "loaded document");
            doc
        }
        Err(reason) => {
            tracing::warn!(%reason, "stored document is corrupt, resetting");
            quarantine(store, &raw);
            Document::default()
        }
    }
}

/// Copy a bad value to the backup key and clear the primary key.
/// Both steps are best-effort.
fn quarantine(store: &mut dyn KeyValueStore, raw: &str) {
    if let Err(e) = store.set(&backup_key(), raw) {
        tracing::debug!(error = %e, "could not back up corrupt document");
    }
    if let Err(e) = store.remove(STORAGE_KEY) {
        tracing::debug!(error = %e, "could not clear corrupt document");
    }
}

/// Serialize the whole document and write it.
pub fn save(store: &mut dyn KeyValueStore, doc: &Document) -> Result<(), StorageError> {
    let json = serde_json::to_string(doc)?;
    store.set(STORAGE_KEY, &json)
}
