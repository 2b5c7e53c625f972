use crate::{
    error::{MissionControlError, Result},
    memory::{MemoryFile, MemoryFileType, MemoryStore},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Memory store backed by a directory of markdown files
pub struct FsMemoryStore {
    root_path: PathBuf,
}

impl FsMemoryStore {
    const MARKDOWN_EXT: &'static str = ".md";

    /// Creates a store rooted at the given memory directory
    pub fn new(memory_dir: impl AsRef<Path>) -> Self {
        Self {
            root_path: memory_dir.as_ref().to_path_buf(),
        }
    }

    /// Resolves a relative file path, refusing anything that could leave the root
    fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let path = Path::new(relative);
        let is_plain = !relative.is_empty()
            && path
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if !is_plain {
            return Err(MissionControlError::InvalidPath(relative.to_string()));
        }
        Ok(self.root_path.join(path))
    }
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_string_lossy().starts_with('.')
}

fn relative_parts(root: &Path, path: &Path) -> (String, String) {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let parent = parts[..parts.len().saturating_sub(1)].join("/");
    (parts.join("/"), parent)
}

fn walk_memory_dir(root: &Path) -> Result<Vec<MemoryFile>> {
    if !root.is_dir() {
        return Err(MissionControlError::MemoryDirUnavailable(
            root.display().to_string(),
        ));
    }
    // Surface an unreadable root instead of listing nothing
    std::fs::read_dir(root)?;

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_hidden_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("Skipping unreadable memory entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(FsMemoryStore::MARKDOWN_EXT) {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                debug!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        let modified: DateTime<Utc> = match metadata.modified() {
            Ok(t) => t.into(),
            Err(e) => {
                debug!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        let (path, parent) = relative_parts(root, entry.path());

        files.push(MemoryFile {
            file_type: MemoryFileType::classify(&name, &parent),
            name,
            path,
            size: metadata.len(),
            modified,
        });
    }

    files.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(files)
}

#[async_trait]
impl MemoryStore for FsMemoryStore {
    async fn list_files(&self) -> Result<Vec<MemoryFile>> {
        let root = self.root_path.clone();
        tokio::task::spawn_blocking(move || walk_memory_dir(&root))
            .await
            .map_err(|e| MissionControlError::IoError(std::io::Error::other(e)))?
    }

    async fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.resolve(path)?;
        let bytes = fs::read(&file_path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
