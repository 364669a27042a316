// Raw line I/O behind the save file: a file-backed store for the application
// and an in-memory one for embedding and tests.
use crate::error::{HuhhhError, Result};
use fs2::FileExt;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Line-oriented persistence collaborator.
pub trait LineStore {
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Replaces the entire content with `lines`.
    fn write_lines(&mut self, lines: &[String]) -> Result<()>;

    /// Human readable location, for logs and messages.
    fn location(&self) -> String;

    /// Keeps a copy of content that could not be loaded so the next save does
    /// not destroy it. Returns where the copy went, if anywhere.
    fn preserve(&self) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

// --- FILE ---

#[derive(Debug, Clone)]
pub struct FileLineStore {
    path: PathBuf,
}

impl FileLineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates missing parent directories and an empty file.
    fn ensure_exists(&self) -> Result<()> {
        let init_err = |e: io::Error| HuhhhError::StorageInit(e.to_string());
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(init_err)?;
        }
        if !self.path.exists() {
            fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&self.path)
                .map_err(init_err)?;
        }
        Ok(())
    }

    /// Exclusive advisory lock on the `.lock` sidecar, held until the guard drops.
    fn lock(&self) -> io::Result<LockGuard> {
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(sidecar(&self.path, ".lock"))?;
        file.lock_exclusive()?;
        Ok(LockGuard(file))
    }

    /// Stages `contents` in a `.tmp` sidecar and renames it over `path`, so
    /// readers see either the old file or the new one.
    pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
        let staged = sidecar(path, ".tmp");
        fs::write(&staged, contents)?;
        fs::rename(&staged, path)
    }
}

/// `huhhh.txt` + `.lock` -> `huhhh.txt.lock`. Appending keeps sidecars of
/// `tasks.txt` and `tasks.md` apart.
fn sidecar(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

struct LockGuard(fs::File);

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.0);
    }
}

impl LineStore for FileLineStore {
    fn read_lines(&self) -> Result<Vec<String>> {
        self.ensure_exists()?;
        let read_err = |e: io::Error| HuhhhError::StorageRead(e.to_string());
        let _lock = self.lock().map_err(read_err)?;
        let content = fs::read_to_string(&self.path).map_err(read_err)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        self.ensure_exists()?;
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        let write_err = |e: io::Error| HuhhhError::StorageWrite(e.to_string());
        let _lock = self.lock().map_err(write_err)?;
        Self::atomic_write(&self.path, content.as_bytes()).map_err(write_err)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn preserve(&self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = sidecar(&self.path, ".bak");
        fs::copy(&self.path, &backup).map_err(|e| HuhhhError::StorageWrite(e.to_string()))?;
        Ok(Some(backup))
    }
}

// --- MEMORY ---

/// In-memory store. Clones share the same lines, so a caller can keep a
/// handle after giving the store away.
#[derive(Debug, Clone, Default)]
pub struct MemoryLineStore {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryLineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Rc::new(RefCell::new(lines.into_iter().map(Into::into).collect())),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl LineStore for MemoryLineStore {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        *self.lines.borrow_mut() = lines.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
