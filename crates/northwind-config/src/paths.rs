//! Where configuration files are looked up.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Git-tracked project settings.
pub const PROJECT_FILE: &str = "northwind.toml";

/// Untracked per-checkout overrides.
pub const LOCAL_FILE: &str = "northwind.local.toml";

/// TOML files read by [`ConfigLoader`](crate::ConfigLoader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFiles {
    /// `config.toml` in the platform config dir (`~/.config/northwind/` on Linux).
    pub user: Option<PathBuf>,
    pub project: PathBuf,
    pub local: PathBuf,
}

impl ConfigFiles {
    /// Candidate files for `project_dir`. None of them has to exist.
    pub fn discover(project_dir: impl AsRef<Path>) -> Self {
        let project_dir = project_dir.as_ref();
        Self {
            user: ProjectDirs::from("org", "Northwind", "northwind")
                .map(|dirs| dirs.config_dir().join("config.toml")),
            project: project_dir.join(PROJECT_FILE),
            local: project_dir.join(LOCAL_FILE),
        }
    }

    pub fn without_user(mut self) -> Self {
        self.user = None;
        self
    }

    /// Files present on disk, lowest precedence first.
    pub fn existing(&self) -> impl Iterator<Item = &Path> {
        self.user
            .as_deref()
            .into_iter()
            .chain([self.project.as_path(), self.local.as_path()])
            .filter(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_names_files() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let files = ConfigFiles::discover(temp_dir.path());

        assert_eq!(files.project, temp_dir.path().join("northwind.toml"));
        assert_eq!(files.local, temp_dir.path().join("northwind.local.toml"));
        // Platform dependent; only the application name and file are fixed
        if let Some(user) = &files.user {
            assert!(user.to_string_lossy().contains("northwind"));
            assert!(user.ends_with("config.toml"));
        }
        assert_eq!(files.without_user().user, None);
    }

    #[test]
    fn test_existing_skips_missing_files() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let files = ConfigFiles::discover(temp_dir.path()).without_user();
        assert_eq!(files.existing().count(), 0);

        fs::write(&files.local, "[output]\ncolor = false\n").expect("Failed to write config");
        let found: Vec<&Path> = files.existing().collect();
        assert_eq!(found, vec![files.local.as_path()]);
    }

    #[test]
    fn test_existing_in_precedence_order() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let user_dir = tempdir().expect("Failed to create temp dir");
        let mut files = ConfigFiles::discover(temp_dir.path());
        files.user = Some(user_dir.path().join("config.toml"));

        for path in [&files.local, &files.project, files.user.as_ref().unwrap()] {
            fs::write(path, "").expect("Failed to write config");
        }

        let found: Vec<&Path> = files.existing().collect();
        assert_eq!(
            found,
            vec![
                files.user.as_deref().unwrap(),
                files.project.as_path(),
                files.local.as_path(),
            ]
        );
    }
}
