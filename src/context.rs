// File: ./src/context.rs
/*! Where the application keeps its own files.

`AppContext` answers "which directory holds the config / the log". The task
file itself is chosen separately (command line or config) because it is
usually relative to the working directory.

- `StandardContext`: platform directories from `directories::ProjectDirs`,
  or `config` / `cache` subdirectories of an override root (`--root`).
- `TestContext`: a private temporary root, removed on drop.
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

pub trait AppContext: std::fmt::Debug {
    fn get_config_dir(&self) -> Result<PathBuf>;
    fn get_cache_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join("config.toml"))
    }

    fn get_log_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_cache_dir()?.join("huhhh.log"))
    }
}

fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
    if !path.exists() {
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
    }
    Ok(path)
}

// --- Production Implementation ---

#[derive(Clone, Debug, Default)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }

    fn proj_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "huhhh", "huhhh")
            .ok_or_else(|| anyhow::anyhow!("No home directory"))
    }
}

impl AppContext for StandardContext {
    fn get_config_dir(&self) -> Result<PathBuf> {
        match &self.override_root {
            Some(root) => ensure_exists(root.join("config")),
            None => ensure_exists(Self::proj_dirs()?.config_dir().to_path_buf()),
        }
    }

    fn get_cache_dir(&self) -> Result<PathBuf> {
        match &self.override_root {
            Some(root) => ensure_exists(root.join("cache")),
            None => ensure_exists(Self::proj_dirs()?.cache_dir().to_path_buf()),
        }
    }
}

// --- Test Implementation ---

#[derive(Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    /// Fresh directory under the OS temp dir, unique per process and call.
    pub fn new() -> Result<Self> {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static COUNTER: AtomicUsize = AtomicUsize::new(0);

        let root = std::env::temp_dir().join(format!(
            "huhhh_test_{}_{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        let root = ensure_exists(root)?;
        Ok(Self { root })
    }
}

impl AppContext for TestContext {
    fn get_config_dir(&self) -> Result<PathBuf> {
        ensure_exists(self.root.join("config"))
    }

    fn get_cache_dir(&self) -> Result<PathBuf> {
        ensure_exists(self.root.join("cache"))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_root_layout() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = StandardContext::new(Some(dir.path().to_path_buf()));

        assert_eq!(
            ctx.get_config_file_path().unwrap(),
            dir.path().join("config").join("config.toml")
        );
        assert_eq!(
            ctx.get_log_file_path().unwrap(),
            dir.path().join("cache").join("huhhh.log")
        );
        assert!(dir.path().join("config").is_dir());
        assert!(dir.path().join("cache").is_dir());
    }

    #[test]
    fn test_test_context_is_removed_on_drop() {
        let ctx = TestContext::new().unwrap();
        let other = TestContext::new().unwrap();
        assert_ne!(ctx.root, other.root);

        let root = ctx.root.clone();
        ctx.get_config_dir().unwrap();
        drop(ctx);
        assert!(!root.exists());
    }
}
