//! Optional git repository initialization for scaffolded projects.

use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

/// Branch name for fresh repositories
const DEFAULT_BRANCH: &str = "main";

/// Commit message for the first commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial scaffold";

/// Initialize a new git repository at `path`.
///
/// Does nothing when the directory is already a repository.
///
/// # Errors
/// Returns an error if git is not installed or `git init` fails.
pub async fn init_repository(path: &Utf8Path) -> Result<()> {
    check_git_available().await?;

    if path.join(".git").exists() {
        debug!("git repository already exists at: {}", path);
        return Ok(());
    }

    let output = Command::new("git")
        .current_dir(path)
        .args(["init", "--initial-branch", DEFAULT_BRANCH])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!("git init failed: {}", stderr)));
    }

    info!("repository initialized at: {}", path);
    Ok(())
}

/// Stage every scaffolded file and create a commit.
pub async fn commit_all(path: &Utf8Path, message: &str) -> Result<()> {
    let output = Command::new("git")
        .current_dir(path)
        .args(["add", "-A"])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!("git add failed: {}", stderr)));
    }

    let output = Command::new("git")
        .current_dir(path)
        .args(["commit", "-m", message])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!(
            "git commit failed: {}",
            stderr
        )));
    }

    debug!("created commit: {}", message);
    Ok(())
}

/// Check that git is available in PATH
async fn check_git_available() -> Result<()> {
    let output = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(|_| Error::command_not_found("git"))?;

    if !output.status.success() {
        return Err(Error::command_not_found("git"));
    }

    Ok(())
}
