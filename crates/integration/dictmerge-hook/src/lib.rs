//! # dictmerge hook
//!
//! Installs `.git/hooks/pre-commit` so every commit in a project re-syncs the
//! spelling dictionaries. The hook is a plain POSIX shell script that runs
//! `dictmerge merge` when the binary is on `PATH` and does nothing otherwise,
//! so a missing binary never blocks a commit.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Name of the installed hook file
pub const HOOK_NAME: &str = "pre-commit";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Project directory {} does not exist", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("Directory '{}' not found", .0.display())]
    GitHooksNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Shell script written to `.git/hooks/pre-commit`
pub fn hook_script(binary: &str) -> String {
    format!(
        r#"#!/bin/sh
#
# Installed by dictmerge: merge spelling dictionaries before each commit.

if command -v "{binary}" >/dev/null 2>&1
then
    "{binary}" merge
fi

exit 0
"#
    )
}

/// Write the pre-commit hook into `project_dir`, replacing any existing one.
///
/// `binary` is the command the hook invokes, usually `dictmerge`.
/// Returns the path of the written hook.
pub fn install_hook(project_dir: &Path, binary: &str) -> Result<PathBuf> {
    if !project_dir.exists() {
        return Err(Error::ProjectNotFound(project_dir.to_path_buf()));
    }

    let git_hooks = project_dir.join(".git").join("hooks");
    info!("Project git hooks directory: {}", git_hooks.display());
    if !git_hooks.is_dir() {
        return Err(Error::GitHooksNotFound(git_hooks));
    }

    let hook_path = git_hooks.join(HOOK_NAME);
    if hook_path.is_file() {
        info!("File '{}' already exists, removing", hook_path.display());
        fs::remove_file(&hook_path)?;
    }

    info!("Create file '{}'", hook_path.display());
    fs::write(&hook_path, hook_script(binary))?;
    make_executable(&hook_path)?;

    Ok(hook_path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_install_writes_hook() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/hooks")).unwrap();

        let hook = install_hook(dir.path(), "dictmerge").unwrap();

        assert_eq!(hook, dir.path().join(".git/hooks/pre-commit"));
        let script = fs::read_to_string(&hook).unwrap();
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains("command -v \"dictmerge\""));
        assert!(script.contains("    \"dictmerge\" merge\n"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&hook).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111);
        }
    }

    #[test]
    fn test_install_replaces_existing_hook() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/hooks")).unwrap();
        let existing = dir.path().join(".git/hooks/pre-commit");
        fs::write(&existing, "#!/bin/sh\necho old\n").unwrap();

        install_hook(dir.path(), "/opt/bin/dictmerge").unwrap();

        let script = fs::read_to_string(&existing).unwrap();
        assert!(!script.contains("echo old"));
        assert!(script.contains("\"/opt/bin/dictmerge\" merge"));
    }

    #[test]
    fn test_missing_project() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            install_hook(&missing, "dictmerge"),
            Err(Error::ProjectNotFound(path)) if path == missing
        ));
    }

    #[test]
    fn test_not_a_git_checkout() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            install_hook(dir.path(), "dictmerge"),
            Err(Error::GitHooksNotFound(_))
        ));
    }
}
