use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod fs_store;

pub use fs_store::FsMemoryStore;

/// How a memory file came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryFileType {
    /// Dated daily notes
    Daily,
    /// The long-term `MEMORY.md`
    Core,
    /// Pages mirrored from Notion
    Synced,
}

impl MemoryFileType {
    pub const CORE_FILE: &'static str = "MEMORY.md";

    /// Classifies a file by its name and the directory it sits in
    /// (relative to the memory root)
    pub fn classify(name: &str, parent: &str) -> Self {
        if name == Self::CORE_FILE {
            Self::Core
        } else if parent.contains("notion") {
            Self::Synced
        } else {
            Self::Daily
        }
    }
}

/// A markdown file in the agent's memory directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryFile {
    pub name: String,
    /// Path relative to the memory root, `/`-separated
    pub path: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    #[serde(rename = "type")]
    pub file_type: MemoryFileType,
}

/// Read access to agent memory files
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Lists all memory files, newest first
    async fn list_files(&self) -> Result<Vec<MemoryFile>>;

    /// Lists files whose name contains the term (case-insensitive)
    async fn search_files(&self, term: &str) -> Result<Vec<MemoryFile>> {
        let term = term.to_lowercase();
        let files = self.list_files().await?;
        Ok(files
            .into_iter()
            .filter(|f| f.name.to_lowercase().contains(&term))
            .collect())
    }

    /// Reads a file's text by its relative path
    async fn read_file(&self, path: &str) -> Result<String>;
}
