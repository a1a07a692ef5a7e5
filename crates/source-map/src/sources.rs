use ctk_data::{IndexVec, SourceId};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub id: SourceId,
    pub path: PathBuf,
    pub text: String,
}

/// Assigns dense [`SourceId`]s to loaded files in first-load order.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    files: IndexVec<SourceId, SourceFile>,
    by_path: HashMap<PathBuf, SourceId>,
}

impl SourceRegistry {
    /// The compilation target, loaded first. Records without an AST reference point into it.
    pub const MAIN: SourceId = SourceId::new(0);

    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `path` and returns its id. Loading an already registered path keeps the first
    /// text and returns the existing id.
    pub fn add(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> SourceId {
        let path = path.into();
        if let Some(&id) = self.by_path.get(&path) {
            return id;
        }
        let id = self.files.next_idx();
        tracing::debug!(%id, path = %path.display(), "registered source");
        self.by_path.insert(path.clone(), id);
        self.files.push(SourceFile { id, path, text: text.into() });
        id
    }

    pub fn get(&self, id: SourceId) -> Option<&SourceFile> {
        self.files.get(id)
    }

    pub fn id_of(&self, path: &Path) -> Option<SourceId> {
        self.by_path.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }
}
