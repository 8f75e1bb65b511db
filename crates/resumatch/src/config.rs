//! Configuration for the resume ingestion service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumatchConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,
    /// Skill tagging configuration
    #[serde(default)]
    pub tagging: TaggingConfig,
}

impl ResumatchConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read '{}': {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config '{}': {}", path.display(), e)))
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 25MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
            max_upload_size: 25 * 1024 * 1024, // 25MB
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for uploaded files and metadata
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resumatch");
        Self { data_dir }
    }
}

impl StorageConfig {
    /// Directory where uploaded resume files are stored
    pub fn uploads_dir(&self) -> PathBuf {
        self.data_dir.join("uploads").join("resumes")
    }

    /// Path to the resume metadata document
    pub fn metadata_path(&self) -> PathBuf {
        self.data_dir.join("uploads").join("resumes_metadata.json")
    }
}

/// Chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in estimated tokens
    pub chunk_size_tokens: usize,
    /// Overlap between consecutive chunks in estimated tokens
    pub overlap_tokens: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size_tokens: 256,
            overlap_tokens: 32,
        }
    }
}

/// Skill tagging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggingConfig {
    /// Maximum number of skill tags per resume
    pub max_tags: usize,
}

impl Default for TaggingConfig {
    fn default() -> Self {
        Self { max_tags: 8 }
    }
}
