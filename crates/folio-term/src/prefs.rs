//! Best-effort persistence of the selected theme.
//!
//! The preference is a single line holding the theme name. It is never
//! authoritative: a missing file, an unreadable file or an unknown name all
//! load as the default theme.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::theme::{Theme, default_theme, theme_by_name};

#[derive(Debug, Clone)]
pub struct ThemePreference {
    path: PathBuf,
}

impl ThemePreference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored theme, or the default when nothing usable is stored.
    pub fn load(&self) -> &'static Theme {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => theme_by_name(raw.trim()).unwrap_or_else(|| {
                debug!(path = ?self.path, stored = %raw.trim(), "unknown stored theme, using default");
                default_theme()
            }),
            Err(e) => {
                debug!(path = ?self.path, error = %e, "no stored theme, using default");
                default_theme()
            }
        }
    }

    /// Remember `theme`. Failures are logged and otherwise ignored.
    pub fn save(&self, theme: &Theme) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                debug!(path = ?parent, error = %e, "cannot create theme preference directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, format!("{}\n", theme.name)) {
            debug!(path = ?self.path, error = %e, "cannot store theme preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::find_theme;

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = ThemePreference::new(dir.path().join("theme"));
        assert_eq!(prefs.load().name, "Default");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = ThemePreference::new(dir.path().join("nested").join("theme"));
        prefs.save(find_theme("nord").unwrap());
        assert_eq!(prefs.load().name, "Nord");
    }

    #[test]
    fn test_garbage_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "Not A Theme").unwrap();
        assert_eq!(ThemePreference::new(path).load().name, "Default");
    }

    #[test]
    fn test_unwritable_location_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        // Parent is a regular file, so the directory cannot be created.
        let prefs = ThemePreference::new(blocker.join("theme"));
        prefs.save(find_theme("dracula").unwrap());
        assert_eq!(prefs.load().name, "Default");
    }
}
