//! JSON-file session persistence for the CLI.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::path::{Path, PathBuf};

use shortlink::SessionStore;

/// Default location: `$HOME/.shortlink/session.json`.
pub fn default_session_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".shortlink")
        .join("session.json")
}

/// [`SessionStore`] holding the session blob in one file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn save(&mut self, blob: &str) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(error) = std::fs::write(&self.path, blob) {
            eprintln!("warning: could not save session to {}: {error}", self.path.display());
        }
    }

    fn clear(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
