//! Single-instance guard backed by a lock file

use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Holds an exclusive lock file for as long as it lives
///
/// The file is created with create-new semantics, so a second guard with the
/// same name fails until the first is dropped. A lock left behind by a
/// crashed process must be removed by hand.
#[derive(Debug)]
pub struct SingleInstance {
    path: PathBuf,
}

impl SingleInstance {
    /// Acquire the lock named `name` in the system temp directory
    pub fn acquire(name: &str) -> Result<Self> {
        Self::acquire_in(&std::env::temp_dir(), name)
    }

    /// Acquire the lock named `name` in `dir`
    pub fn acquire_in(dir: &Path, name: &str) -> Result<Self> {
        if name.is_empty() || name.contains(|c: char| c == '/' || c == '\\') {
            return Err(Error::invalid_argument(
                "name",
                format!("`{name}` is not a valid lock name"),
            ));
        }

        let path = dir.join(format!("{name}.lock"));
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "instance lock already held");
                return Err(Error::AlreadyRunning(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        writeln!(file, "{}", std::process::id())?;

        debug!(path = %path.display(), "acquired instance lock");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SingleInstance {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %err, "failed to remove instance lock");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_second_acquire_fails_until_drop() {
        let dir = TempDir::new().unwrap();
        let guard = SingleInstance::acquire_in(dir.path(), "app").unwrap();
        assert!(guard.path().exists());

        let second = SingleInstance::acquire_in(dir.path(), "app");
        assert!(matches!(second, Err(Error::AlreadyRunning(name)) if name == "app"));

        drop(guard);
        assert!(!dir.path().join("app.lock").exists());
        SingleInstance::acquire_in(dir.path(), "app").unwrap();
    }

    #[test]
    fn test_distinct_names_do_not_conflict() {
        let dir = TempDir::new().unwrap();
        let _a = SingleInstance::acquire_in(dir.path(), "a").unwrap();
        let _b = SingleInstance::acquire_in(dir.path(), "b").unwrap();
    }

    #[test]
    fn test_invalid_names_rejected() {
        let dir = TempDir::new().unwrap();
        for name in ["", "../escape", "a\\b"] {
            assert!(matches!(
                SingleInstance::acquire_in(dir.path(), name),
                Err(Error::InvalidArgument { .. })
            ));
        }
    }
}
