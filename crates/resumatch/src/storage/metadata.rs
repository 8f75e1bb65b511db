//! Flat JSON metadata store

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ResumeRecord;

/// Persistence for the resume collection
///
/// A store reads and rewrites the whole collection per call. Implementations
/// do no locking; concurrent writers race and the last save wins.
pub trait MetadataStore: Send + Sync {
    fn load(&self) -> Result<Vec<ResumeRecord>>;
    fn save(&self, resumes: &[ResumeRecord]) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct MetadataDocument {
    resumes: Vec<ResumeRecord>,
}

/// Stores the collection as one pretty-printed JSON file
pub struct JsonMetadataStore {
    path: PathBuf,
}

impl JsonMetadataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MetadataStore for JsonMetadataStore {
    /// Load all records, treating a missing file as an empty collection
    ///
    /// An unreadable or unparsable file is an error, not an empty
    /// collection, so a corrupt store never silently discards records.
    fn load(&self) -> Result<Vec<ResumeRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            Error::storage(format!("Failed to read '{}': {}", self.path.display(), e))
        })?;
        let document: MetadataDocument = serde_json::from_str(&contents).map_err(|e| {
            Error::storage(format!(
                "Corrupt metadata file '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(document.resumes)
    }

    fn save(&self, resumes: &[ResumeRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::storage(format!("Failed to create '{}': {}", parent.display(), e))
            })?;
        }

        let document = MetadataDocument {
            resumes: resumes.to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, json).map_err(|e| {
            Error::storage(format!("Failed to write '{}': {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileKind;
    use chrono::Utc;

    fn record(id: &str) -> ResumeRecord {
        ResumeRecord {
            id: id.to_string(),
            name: "jane".to_string(),
            original_filename: "jane.pdf".to_string(),
            file_path: PathBuf::from("/tmp/jane.pdf"),
            file_ext: FileKind::Pdf,
            status: "active".to_string(),
            uploaded_at: Utc::now(),
            raw_text_length: 120,
            section_count: 2,
            chunk_count: 2,
            skills: vec!["Python".to_string()],
            sections: Vec::new(),
            chunks: Vec::new(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonMetadataStore::new(dir.path().join("missing.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonMetadataStore::new(dir.path().join("metadata.json"));

        store.save(&[record("a1b2c3d4")]).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "a1b2c3d4");
        assert_eq!(loaded[0].skills, vec!["Python"]);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonMetadataStore::new(&path);

        let err = store.load().unwrap_err();

        assert!(matches!(err, Error::Storage(_)));
        assert!(err.to_string().contains("metadata.json"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/metadata.json");
        let store = JsonMetadataStore::new(&path);

        store.save(&[]).unwrap();

        assert!(path.exists());
        assert!(store.load().unwrap().is_empty());
    }
}
