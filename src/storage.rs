// Manages the save file: one task per line, rewritten in full after every change.
pub mod codec;
pub mod store;

use crate::error::Result;
use crate::model::{Task, TaskList};
use std::path::{Path, PathBuf};

pub use store::{FileLineStore, LineStore, MemoryLineStore};

/// Default save file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/huhhh.txt";

pub struct Storage {
    store: Box<dyn LineStore>,
}

impl Storage {
    pub fn new(store: impl LineStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// File-backed storage at `path`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(FileLineStore::new(path.as_ref()))
    }

    /// Picks `path` unless it is missing or empty, then falls back to the default.
    /// Blank command-line values are dropped earlier, by `CliArgs`.
    pub fn resolve_path(path: Option<&Path>) -> PathBuf {
        match path {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from(DEFAULT_DATA_FILE),
        }
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Reads every non-blank line. The first corrupted line fails the load.
    pub fn load(&self) -> Result<Vec<Task>> {
        self.store
            .read_lines()?
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| codec::decode(line))
            .collect()
    }

    /// Rewrites the whole store from the in-memory list.
    pub fn save(&mut self, tasks: &TaskList) -> Result<()> {
        self.store.write_lines(&tasks.serialize())
    }

    pub fn preserve_unreadable(&self) -> Result<Option<PathBuf>> {
        self.store.preserve()
    }
}
